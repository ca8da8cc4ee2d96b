//! Repository for the `rules_documents` table.

use sqlx::PgPool;

use crate::models::guide::{CreateRulesDocument, RulesDocument};

const COLUMNS: &str = "id, title, content, file_path, created_at";

pub struct RulesDocumentRepo;

impl RulesDocumentRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateRulesDocument,
    ) -> Result<RulesDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO rules_documents (title, content, file_path)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RulesDocument>(&query)
            .bind(input.title.trim())
            .bind(&input.content)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<RulesDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rules_documents ORDER BY title ASC");
        sqlx::query_as::<_, RulesDocument>(&query)
            .fetch_all(pool)
            .await
    }
}
