//! Route definitions for photos, albums and sub-albums.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Gallery routes, merged at the `/api/v1` root.
///
/// ```text
/// GET         /photos
/// GET         /photos/{id}
/// POST        /photos/{id}/like
/// GET         /albums
/// GET         /albums/{id}
/// POST        /albums/{id}/subalbums
/// GET, POST   /subalbums/{id}/photos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/photos", get(gallery::list_featured))
        .route("/photos/{id}", get(gallery::get_photo))
        .route("/photos/{id}/like", post(gallery::toggle_like))
        .route("/albums", get(gallery::list_albums))
        .route("/albums/{id}", get(gallery::get_album))
        .route("/albums/{id}/subalbums", post(gallery::create_subalbum))
        .route(
            "/subalbums/{id}/photos",
            get(gallery::list_subalbum_photos).post(gallery::add_photo),
        )
}
