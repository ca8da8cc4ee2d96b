//! Repository for the `circuit_trainings` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::circuit_training::{
    CircuitTraining, CreateCircuitTraining, UpdateCircuitTraining,
};

const COLUMNS: &str = "id, name, description, exercises, created_by, is_public, \
                       created_at, updated_at";

pub struct CircuitTrainingRepo;

impl CircuitTrainingRepo {
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateCircuitTraining,
    ) -> Result<CircuitTraining, sqlx::Error> {
        let query = format!(
            "INSERT INTO circuit_trainings (name, description, exercises, created_by, is_public)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CircuitTraining>(&query)
            .bind(input.name.trim())
            .bind(input.description.trim())
            .bind(&input.exercises)
            .bind(created_by)
            .bind(input.is_public)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CircuitTraining>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM circuit_trainings WHERE id = $1");
        sqlx::query_as::<_, CircuitTraining>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Circuits the user created plus every public one, newest first.
    pub async fn list_visible(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CircuitTraining>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM circuit_trainings
             WHERE created_by = $1 OR is_public = TRUE
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, CircuitTraining>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCircuitTraining,
    ) -> Result<Option<CircuitTraining>, sqlx::Error> {
        let query = format!(
            "UPDATE circuit_trainings SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                exercises = COALESCE($4, exercises),
                is_public = COALESCE($5, is_public)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CircuitTraining>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.description.as_deref().map(str::trim))
            .bind(&input.exercises)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }

    /// Delete a circuit and its songs.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM circuit_trainings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
