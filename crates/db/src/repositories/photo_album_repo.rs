//! Repository for the `photo_albums` table.
//!
//! Albums are created by [`EventRepo::create`](super::EventRepo::create);
//! there is no standalone insert.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{AlbumSummary, PhotoAlbum};

const COLUMNS: &str = "id, event_id, cover_photo_path, created_at";

pub struct PhotoAlbumRepo;

impl PhotoAlbumRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PhotoAlbum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photo_albums WHERE id = $1");
        sqlx::query_as::<_, PhotoAlbum>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Option<PhotoAlbum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photo_albums WHERE event_id = $1");
        sqlx::query_as::<_, PhotoAlbum>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Albums with event headline and photo count, newest event first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<AlbumSummary>, sqlx::Error> {
        let query = "SELECT a.id, a.event_id, a.cover_photo_path, a.created_at,
                            e.title AS event_title, e.start_date AS event_start_date,
                            (SELECT COUNT(*) FROM event_photos ph
                               JOIN sub_albums s ON s.id = ph.subalbum_id
                              WHERE s.album_id = a.id) AS photo_count
                     FROM photo_albums a
                     JOIN events e ON e.id = a.event_id
                     ORDER BY e.start_date DESC, a.id DESC";
        sqlx::query_as::<_, AlbumSummary>(query).fetch_all(pool).await
    }

    /// Set or clear the album cover.
    pub async fn set_cover(
        pool: &PgPool,
        id: DbId,
        cover_photo_path: Option<&str>,
    ) -> Result<Option<PhotoAlbum>, sqlx::Error> {
        let query = format!(
            "UPDATE photo_albums SET cover_photo_path = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoAlbum>(&query)
            .bind(id)
            .bind(cover_photo_path)
            .fetch_optional(pool)
            .await
    }
}
