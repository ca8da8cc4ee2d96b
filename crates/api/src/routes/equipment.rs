//! Route definitions for the `/equipment` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::equipment;
use crate::state::AppState;

/// Routes mounted at `/equipment`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(equipment::overview).post(equipment::set_owned))
}
