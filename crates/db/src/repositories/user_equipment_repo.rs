//! Repository for the `user_equipment` ownership flags.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::UserEquipment;

const COLUMNS: &str = "id, fencer_id, equipment_id, is_owned, purchase_date, \
                       created_at, updated_at";

pub struct UserEquipmentRepo;

impl UserEquipmentRepo {
    /// Set the owned flag for one catalog item, creating the row if needed.
    pub async fn set_owned(
        pool: &PgPool,
        fencer_id: DbId,
        equipment_id: DbId,
        is_owned: bool,
    ) -> Result<UserEquipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_equipment (fencer_id, equipment_id, is_owned)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_user_equipment_fencer_equipment DO UPDATE SET
                is_owned = EXCLUDED.is_owned
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserEquipment>(&query)
            .bind(fencer_id)
            .bind(equipment_id)
            .bind(is_owned)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_fencer(
        pool: &PgPool,
        fencer_id: DbId,
    ) -> Result<Vec<UserEquipment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_equipment WHERE fencer_id = $1 ORDER BY equipment_id ASC"
        );
        sqlx::query_as::<_, UserEquipment>(&query)
            .bind(fencer_id)
            .fetch_all(pool)
            .await
    }
}
