//! Photo gallery: per-event albums, sub-albums, photos and likes.

use salle_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `photo_albums` table. One per event.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PhotoAlbum {
    pub id: DbId,
    pub event_id: DbId,
    pub cover_photo_path: Option<String>,
    pub created_at: Timestamp,
}

/// Album listing row with its event headline and photo count.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AlbumSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub album: PhotoAlbum,
    pub event_title: String,
    pub event_start_date: Timestamp,
    pub photo_count: i64,
}

/// A row from the `sub_albums` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SubAlbum {
    pub id: DbId,
    pub album_id: DbId,
    pub name: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// Sub-album with the number of photos it holds.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SubAlbumSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub subalbum: SubAlbum,
    pub photo_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubAlbum {
    pub name: String,
}

/// A row from the `event_photos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventPhoto {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub photo_path: String,
    pub event_date: Option<Date>,
    pub uploaded_by: Option<DbId>,
    pub uploaded_at: Timestamp,
    pub is_featured: bool,
    pub subalbum_id: Option<DbId>,
}

/// A photo with its like count and whether the viewer liked it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PhotoWithLikes {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub photo: EventPhoto,
    pub like_count: i64,
    pub liked_by_me: bool,
}

/// Registers an already-stored upload. The file itself lives elsewhere.
#[derive(Debug, Deserialize)]
pub struct CreateEventPhoto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub photo_path: String,
    pub event_date: Option<Date>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Outcome of toggling a like.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikeState {
    pub liked: bool,
    pub like_count: i64,
}
