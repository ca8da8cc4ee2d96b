pub mod admin;
pub mod auth;
pub mod calendar;
pub mod equipment;
pub mod gallery;
pub mod guides;
pub mod health;
pub mod training;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /me                                              about me
/// /statistics/individual                           own results + totals
/// /statistics/club                                 club table
///
/// /training/notes                                  list, create
/// /training/notes/{id}                             get, update, delete (owner)
/// /training/circuits                               list, create
/// /training/circuits/{id}                          get, update, delete
/// /training/circuits/{id}/songs                    add song
/// /training/circuits/{id}/songs/{song_id}          remove song
///
/// /photos                                          featured photos
/// /photos/{id}                                     photo with likes
/// /photos/{id}/like                                toggle like (POST)
/// /albums                                          albums
/// /albums/{id}                                     album with sub-albums
/// /albums/{id}/subalbums                           create sub-album
/// /subalbums/{id}/photos                           list, add photo
///
/// /calendar                                        upcoming + past events
/// /calendar/{event_id}/reaction                    RSVP (POST)
/// /calendar/{event_id}/reactions                   all RSVPs
///
/// /payment                                         own payment status
/// /equipment                                       checklist + loadout, set owned
///
/// /guides/glossary | /guides/videos | /guides/rules
///
/// /admin/...                                       admin-only writes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/me", get(handlers::me::about_me))
        .route("/statistics/individual", get(handlers::statistics::individual))
        .route("/statistics/club", get(handlers::statistics::club))
        .route("/payment", get(handlers::payment::my_payment))
        .nest("/training", training::router())
        .merge(gallery::router())
        .nest("/calendar", calendar::router())
        .nest("/equipment", equipment::router())
        .nest("/guides", guides::router())
        .nest("/admin", admin::router())
}
