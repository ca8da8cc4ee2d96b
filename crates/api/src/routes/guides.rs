//! Route definitions for the `/guides` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::guides;
use crate::state::AppState;

/// Routes mounted at `/guides`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/glossary", get(guides::glossary))
        .route("/videos", get(guides::videos))
        .route("/rules", get(guides::rules))
}
