//! Handler for the "about me" page.

use axum::extract::State;
use axum::Json;
use salle_core::statistics::{FencerTotals, RECENT_PARTICIPATION_LIMIT};
use salle_db::models::club::Club;
use salle_db::models::event_participation::ParticipationWithEvent;
use salle_db::models::fencer_profile::FencerProfile;
use salle_db::models::user::UserResponse;
use salle_db::repositories::{ClubRepo, EventParticipationRepo, RoleRepo, UserRepo};
use serde::Serialize;

use super::require_profile;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AboutMe {
    pub user: UserResponse,
    pub profile: FencerProfile,
    pub club: Option<Club>,
    /// Most recent participations, newest first.
    pub recent_participations: Vec<ParticipationWithEvent>,
    /// Totals over every recorded participation.
    pub totals: FencerTotals,
}

/// GET /api/v1/me
pub async fn about_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<AboutMe>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::InternalError("Authenticated user no longer exists".into()))?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let profile = require_profile(&state.pool, auth.user_id).await?;

    let club = match profile.club_id {
        Some(club_id) => ClubRepo::find_by_id(&state.pool, club_id).await?,
        None => None,
    };

    let mut participations = EventParticipationRepo::list_for_fencer(&state.pool, profile.id).await?;
    let totals =
        FencerTotals::from_records(participations.iter().map(|p| p.participation.bout_record()));
    participations.truncate(RECENT_PARTICIPATION_LIMIT as usize);

    Ok(Json(DataResponse {
        data: AboutMe {
            user: UserResponse::from_user(&user, role),
            profile,
            club,
            recent_participations: participations,
            totals,
        },
    }))
}
