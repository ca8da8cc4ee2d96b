//! Repository for the `guide_videos` table.

use sqlx::PgPool;

use crate::models::guide::{CreateGuideVideo, GuideVideo};

const COLUMNS: &str = "id, title, youtube_url, description, category, created_at";

pub struct GuideVideoRepo;

impl GuideVideoRepo {
    pub async fn create(pool: &PgPool, input: &CreateGuideVideo) -> Result<GuideVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO guide_videos (title, youtube_url, description, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GuideVideo>(&query)
            .bind(input.title.trim())
            .bind(input.youtube_url.trim())
            .bind(input.description.trim())
            .bind(input.category.trim())
            .fetch_one(pool)
            .await
    }

    /// All videos grouped by category, then by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<GuideVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guide_videos ORDER BY category ASC, title ASC");
        sqlx::query_as::<_, GuideVideo>(&query)
            .fetch_all(pool)
            .await
    }
}
