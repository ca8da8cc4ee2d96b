//! Repository for the `equipment_items` catalog.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::{EquipmentItem, OwnedEquipment};

const COLUMNS: &str = "id, name, category, description, approximate_price, purchase_link, \
                       image_path, created_at, updated_at";

pub struct EquipmentItemRepo;

impl EquipmentItemRepo {
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EquipmentItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment_items WHERE id = $1");
        sqlx::query_as::<_, EquipmentItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The whole catalog in display order (category, then name).
    pub async fn list(pool: &PgPool) -> Result<Vec<EquipmentItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment_items ORDER BY category ASC, name ASC");
        sqlx::query_as::<_, EquipmentItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// The catalog in display order with `fencer_id`'s ownership flags.
    pub async fn list_for_fencer(
        pool: &PgPool,
        fencer_id: DbId,
    ) -> Result<Vec<OwnedEquipment>, sqlx::Error> {
        let query = "SELECT i.id, i.name, i.category, i.description, i.approximate_price,
                            i.purchase_link, i.image_path, i.created_at, i.updated_at,
                            COALESCE(ue.is_owned, FALSE) AS is_owned,
                            ue.purchase_date
                     FROM equipment_items i
                     LEFT JOIN user_equipment ue
                            ON ue.equipment_id = i.id AND ue.fencer_id = $1
                     ORDER BY i.category ASC, i.name ASC";
        sqlx::query_as::<_, OwnedEquipment>(query)
            .bind(fencer_id)
            .fetch_all(pool)
            .await
    }
}
