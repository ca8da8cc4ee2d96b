//! Handlers for the event calendar and attendance reactions.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use salle_core::error::CoreError;
use salle_core::events::{validate_reaction_comment, PAST_EVENTS_LIMIT};
use salle_core::types::DbId;
use salle_db::models::event::{CalendarEvent, Event};
use salle_db::models::event_reaction::{EventReaction, ReactionWithUser, UpsertEventReaction};
use salle_db::repositories::{EventReactionRepo, EventRepo};
use serde::Serialize;

use super::invalid;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Calendar {
    /// Events starting now or later, soonest first, with the caller's RSVP.
    pub upcoming: Vec<CalendarEvent>,
    /// The most recent past events, newest first.
    pub past: Vec<Event>,
}

#[derive(Debug, Serialize)]
pub struct ReactionResult {
    pub reaction: EventReaction,
    pub attending_count: i64,
}

async fn ensure_event_exists(state: &AppState, id: DbId) -> AppResult<Event> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))
}

/// GET /api/v1/calendar
pub async fn calendar(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Calendar>>> {
    let now = Utc::now();
    let upcoming = EventRepo::list_upcoming_for_user(&state.pool, auth.user_id, now).await?;
    let past = EventRepo::list_past(&state.pool, now, PAST_EVENTS_LIMIT).await?;
    Ok(Json(DataResponse {
        data: Calendar { upcoming, past },
    }))
}

/// POST /api/v1/calendar/{event_id}/reaction
///
/// Set the caller's attendance and comment, replacing any earlier answer.
pub async fn react(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<DbId>,
    Json(input): Json<UpsertEventReaction>,
) -> AppResult<Json<DataResponse<ReactionResult>>> {
    validate_reaction_comment(&input.comment).map_err(invalid)?;
    ensure_event_exists(&state, event_id).await?;

    let reaction = EventReactionRepo::upsert(&state.pool, event_id, auth.user_id, &input).await?;
    let attending_count = EventReactionRepo::count_attending(&state.pool, event_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        event_id,
        will_attend = reaction.will_attend,
        "Event reaction saved"
    );
    Ok(Json(DataResponse {
        data: ReactionResult {
            reaction,
            attending_count,
        },
    }))
}

/// GET /api/v1/calendar/{event_id}/reactions
pub async fn reactions(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ReactionWithUser>>>> {
    ensure_event_exists(&state, event_id).await?;
    let reactions = EventReactionRepo::list_for_event(&state.pool, event_id).await?;
    Ok(Json(DataResponse { data: reactions }))
}
