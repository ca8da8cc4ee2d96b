//! Repository for the `sub_albums` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{SubAlbum, SubAlbumSummary};

const COLUMNS: &str = "id, album_id, name, created_by, created_at";

pub struct SubAlbumRepo;

impl SubAlbumRepo {
    pub async fn create(
        pool: &PgPool,
        album_id: DbId,
        name: &str,
        created_by: DbId,
    ) -> Result<SubAlbum, sqlx::Error> {
        let query = format!(
            "INSERT INTO sub_albums (album_id, name, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubAlbum>(&query)
            .bind(album_id)
            .bind(name.trim())
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SubAlbum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sub_albums WHERE id = $1");
        sqlx::query_as::<_, SubAlbum>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Sub-albums of an album with their photo counts, newest first.
    pub async fn list_for_album(
        pool: &PgPool,
        album_id: DbId,
    ) -> Result<Vec<SubAlbumSummary>, sqlx::Error> {
        let query = "SELECT s.id, s.album_id, s.name, s.created_by, s.created_at,
                            (SELECT COUNT(*) FROM event_photos ph
                              WHERE ph.subalbum_id = s.id) AS photo_count
                     FROM sub_albums s
                     WHERE s.album_id = $1
                     ORDER BY s.created_at DESC, s.id DESC";
        sqlx::query_as::<_, SubAlbumSummary>(query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a sub-album and its photos.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sub_albums WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
