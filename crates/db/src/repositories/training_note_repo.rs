//! Repository for the `training_notes` table.

use salle_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use salle_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::training_note::{TrainingNote, UpdateTrainingNote};

const COLUMNS: &str = "id, fencer_id, date, notes, created_at, updated_at";

/// Training diary access. Every read is scoped to the owning fencer.
pub struct TrainingNoteRepo;

impl TrainingNoteRepo {
    pub async fn create(
        pool: &PgPool,
        fencer_id: DbId,
        date: Date,
        notes: &str,
    ) -> Result<TrainingNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO training_notes (fencer_id, date, notes)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingNote>(&query)
            .bind(fencer_id)
            .bind(date)
            .bind(notes.trim())
            .fetch_one(pool)
            .await
    }

    /// Find a note belonging to `fencer_id`. Other fencers' notes are `None`.
    pub async fn find_for_fencer(
        pool: &PgPool,
        id: DbId,
        fencer_id: DbId,
    ) -> Result<Option<TrainingNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM training_notes WHERE id = $1 AND fencer_id = $2");
        sqlx::query_as::<_, TrainingNote>(&query)
            .bind(id)
            .bind(fencer_id)
            .fetch_optional(pool)
            .await
    }

    /// A fencer's notes, newest training date first.
    pub async fn list_for_fencer(
        pool: &PgPool,
        fencer_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<TrainingNote>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM training_notes
             WHERE fencer_id = $1
             ORDER BY date DESC, created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, TrainingNote>(&query)
            .bind(fencer_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update_for_fencer(
        pool: &PgPool,
        id: DbId,
        fencer_id: DbId,
        input: &UpdateTrainingNote,
    ) -> Result<Option<TrainingNote>, sqlx::Error> {
        let query = format!(
            "UPDATE training_notes SET
                date = COALESCE($3, date),
                notes = COALESCE($4, notes)
             WHERE id = $1 AND fencer_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingNote>(&query)
            .bind(id)
            .bind(fencer_id)
            .bind(input.date)
            .bind(input.notes.as_deref().map(str::trim))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete_for_fencer(
        pool: &PgPool,
        id: DbId,
        fencer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM training_notes WHERE id = $1 AND fencer_id = $2")
            .bind(id)
            .bind(fencer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
