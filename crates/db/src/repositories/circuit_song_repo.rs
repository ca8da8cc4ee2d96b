//! Repository for the `circuit_songs` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::circuit_training::{CircuitSong, CreateCircuitSong};

const COLUMNS: &str = "id, circuit_id, name, audio_path, uploaded_at";

pub struct CircuitSongRepo;

impl CircuitSongRepo {
    pub async fn create(
        pool: &PgPool,
        circuit_id: DbId,
        input: &CreateCircuitSong,
    ) -> Result<CircuitSong, sqlx::Error> {
        let query = format!(
            "INSERT INTO circuit_songs (circuit_id, name, audio_path)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CircuitSong>(&query)
            .bind(circuit_id)
            .bind(input.name.trim())
            .bind(input.audio_path.trim())
            .fetch_one(pool)
            .await
    }

    /// Songs of several circuits in upload order, for grouping by circuit.
    pub async fn list_for_circuits(
        pool: &PgPool,
        circuit_ids: &[DbId],
    ) -> Result<Vec<CircuitSong>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM circuit_songs
             WHERE circuit_id = ANY($1)
             ORDER BY uploaded_at ASC, id ASC"
        );
        sqlx::query_as::<_, CircuitSong>(&query)
            .bind(circuit_ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a song only if it belongs to `circuit_id`.
    pub async fn delete_from_circuit(
        pool: &PgPool,
        id: DbId,
        circuit_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM circuit_songs WHERE id = $1 AND circuit_id = $2")
            .bind(id)
            .bind(circuit_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
