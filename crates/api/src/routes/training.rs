//! Route definitions for the `/training` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::training;
use crate::state::AppState;

/// Routes mounted at `/training`.
///
/// ```text
/// GET, POST           /notes
/// GET, PUT, DELETE    /notes/{id}
/// GET, POST           /circuits
/// GET, PUT, DELETE    /circuits/{id}
/// POST                /circuits/{id}/songs
/// DELETE              /circuits/{id}/songs/{song_id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/notes",
            get(training::list_notes).post(training::create_note),
        )
        .route(
            "/notes/{id}",
            get(training::get_note)
                .put(training::update_note)
                .delete(training::delete_note),
        )
        .route(
            "/circuits",
            get(training::list_circuits).post(training::create_circuit),
        )
        .route(
            "/circuits/{id}",
            get(training::get_circuit)
                .put(training::update_circuit)
                .delete(training::delete_circuit),
        )
        .route("/circuits/{id}/songs", post(training::add_song))
        .route(
            "/circuits/{id}/songs/{song_id}",
            delete(training::delete_song),
        )
}
