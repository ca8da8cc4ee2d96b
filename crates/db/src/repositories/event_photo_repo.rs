//! Repository for the `event_photos` table.

use salle_core::gallery::DEFAULT_PHOTO_LIMIT;
use salle_core::pagination::{clamp_limit, clamp_offset, MAX_PAGE_LIMIT};
use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{CreateEventPhoto, EventPhoto, PhotoWithLikes};

const COLUMNS: &str = "id, title, description, photo_path, event_date, uploaded_by, \
                       uploaded_at, is_featured, subalbum_id";

/// Photo columns (alias `ph`) plus like aggregates for viewer `$1`.
const WITH_LIKES_COLUMNS: &str = "ph.id, ph.title, ph.description, ph.photo_path, \
    ph.event_date, ph.uploaded_by, ph.uploaded_at, ph.is_featured, ph.subalbum_id, \
    (SELECT COUNT(*) FROM photo_likes l WHERE l.photo_id = ph.id) AS like_count, \
    EXISTS (SELECT 1 FROM photo_likes l \
             WHERE l.photo_id = ph.id AND l.user_id = $1) AS liked_by_me";

pub struct EventPhotoRepo;

impl EventPhotoRepo {
    /// Register an uploaded photo, optionally inside a sub-album.
    pub async fn create(
        pool: &PgPool,
        subalbum_id: Option<DbId>,
        uploaded_by: DbId,
        input: &CreateEventPhoto,
    ) -> Result<EventPhoto, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_photos
                (title, description, photo_path, event_date, uploaded_by, is_featured, subalbum_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventPhoto>(&query)
            .bind(input.title.trim())
            .bind(input.description.trim())
            .bind(input.photo_path.trim())
            .bind(input.event_date)
            .bind(uploaded_by)
            .bind(input.is_featured)
            .bind(subalbum_id)
            .fetch_one(pool)
            .await
    }

    /// A photo with like information for `viewer_id`.
    pub async fn find_with_likes(
        pool: &PgPool,
        id: DbId,
        viewer_id: DbId,
    ) -> Result<Option<PhotoWithLikes>, sqlx::Error> {
        let query = format!("SELECT {WITH_LIKES_COLUMNS} FROM event_photos ph WHERE ph.id = $2");
        sqlx::query_as::<_, PhotoWithLikes>(&query)
            .bind(viewer_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Featured photos, most recent event date first, then newest upload.
    pub async fn list_featured(
        pool: &PgPool,
        viewer_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<PhotoWithLikes>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PHOTO_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {WITH_LIKES_COLUMNS} FROM event_photos ph
             WHERE ph.is_featured = TRUE
             ORDER BY ph.event_date DESC NULLS LAST, ph.uploaded_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PhotoWithLikes>(&query)
            .bind(viewer_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Photos in a sub-album, in upload order.
    pub async fn list_for_subalbum(
        pool: &PgPool,
        subalbum_id: DbId,
        viewer_id: DbId,
    ) -> Result<Vec<PhotoWithLikes>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_LIKES_COLUMNS} FROM event_photos ph
             WHERE ph.subalbum_id = $2
             ORDER BY ph.uploaded_at ASC, ph.id ASC"
        );
        sqlx::query_as::<_, PhotoWithLikes>(&query)
            .bind(viewer_id)
            .bind(subalbum_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
