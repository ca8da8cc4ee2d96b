//! Route definitions for the `/calendar` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

/// Routes mounted at `/calendar`.
///
/// ```text
/// GET   /
/// POST  /{event_id}/reaction
/// GET   /{event_id}/reactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(calendar::calendar))
        .route("/{event_id}/reaction", post(calendar::react))
        .route("/{event_id}/reactions", get(calendar::reactions))
}
