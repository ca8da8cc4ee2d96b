//! Route definitions for the `/admin` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the `admin` role.
///
/// ```text
/// GET, POST           /clubs
/// PUT, DELETE         /clubs/{id}
/// GET, POST           /events
/// PUT, DELETE         /events/{id}
/// GET, POST           /events/{id}/participations
/// PUT, DELETE         /participations/{id}
/// GET, POST           /profiles
/// PUT, DELETE         /profiles/{id}
/// POST                /profiles/{id}/link
/// POST                /profiles/{id}/unlink
/// PUT                 /payments/{fencer_id}
/// POST                /glossary | /videos | /rules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(admin::list_clubs).post(admin::create_club))
        .route(
            "/clubs/{id}",
            put(admin::update_club).delete(admin::delete_club),
        )
        .route("/events", get(admin::list_events).post(admin::create_event))
        .route(
            "/events/{id}",
            put(admin::update_event).delete(admin::delete_event),
        )
        .route(
            "/events/{id}/participations",
            get(admin::list_participations).post(admin::record_participation),
        )
        .route(
            "/participations/{id}",
            put(admin::update_participation).delete(admin::delete_participation),
        )
        .route(
            "/profiles",
            get(admin::list_profiles).post(admin::create_profile),
        )
        .route(
            "/profiles/{id}",
            put(admin::update_profile).delete(admin::delete_profile),
        )
        .route("/profiles/{id}/link", post(admin::link_profile))
        .route("/profiles/{id}/unlink", post(admin::unlink_profile))
        .route("/payments/{fencer_id}", put(admin::update_payment))
        .route("/glossary", post(admin::create_glossary_term))
        .route("/videos", post(admin::create_video))
        .route("/rules", post(admin::create_rules_document))
}
