//! Repository for the `glossary_terms` table.

use sqlx::PgPool;

use crate::models::guide::{CreateGlossaryTerm, GlossaryTerm};

const COLUMNS: &str = "id, term, definition, created_at";

pub struct GlossaryTermRepo;

impl GlossaryTermRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateGlossaryTerm,
    ) -> Result<GlossaryTerm, sqlx::Error> {
        let query = format!(
            "INSERT INTO glossary_terms (term, definition) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GlossaryTerm>(&query)
            .bind(input.term.trim())
            .bind(input.definition.trim())
            .fetch_one(pool)
            .await
    }

    /// All terms alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<GlossaryTerm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM glossary_terms ORDER BY term ASC");
        sqlx::query_as::<_, GlossaryTerm>(&query)
            .fetch_all(pool)
            .await
    }
}
