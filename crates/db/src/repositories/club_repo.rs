//! Repository for the `clubs` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::club::{Club, CreateClub, UpdateClub};

const COLUMNS: &str = "id, name, created_at, updated_at";

pub struct ClubRepo;

impl ClubRepo {
    pub async fn create(pool: &PgPool, input: &CreateClub) -> Result<Club, sqlx::Error> {
        let query = format!("INSERT INTO clubs (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Club>(&query)
            .bind(input.name.trim())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Club>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clubs WHERE id = $1");
        sqlx::query_as::<_, Club>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List clubs alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Club>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clubs ORDER BY name ASC");
        sqlx::query_as::<_, Club>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClub,
    ) -> Result<Option<Club>, sqlx::Error> {
        let query = format!(
            "UPDATE clubs SET name = COALESCE($2, name) WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Club>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .fetch_optional(pool)
            .await
    }

    /// Delete a club. Member profiles stay, with their club cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
