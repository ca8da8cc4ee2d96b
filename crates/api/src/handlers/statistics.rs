//! Handlers for the individual and club statistics pages.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use salle_core::error::CoreError;
use salle_core::statistics::{summarize_by_fencer, FencerTotals};
use salle_core::types::DbId;
use salle_db::models::club::Club;
use salle_db::models::event::Event;
use salle_db::models::event_participation::ParticipationWithEvent;
use salle_db::models::fencer_profile::FencerProfile;
use salle_db::repositories::{ClubRepo, EventParticipationRepo, EventRepo, FencerProfileRepo};
use serde::Serialize;

use super::require_profile;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IndividualStatistics {
    pub profile: FencerProfile,
    pub participations: Vec<ParticipationWithEvent>,
    pub totals: FencerTotals,
}

/// One row of the club table.
#[derive(Debug, Serialize)]
pub struct ClubMemberRow {
    pub fencer_id: DbId,
    pub display_name: String,
    #[serde(flatten)]
    pub totals: FencerTotals,
}

#[derive(Debug, Serialize)]
pub struct ClubStatistics {
    pub club: Club,
    /// Members ordered by wins, then win rate.
    pub members: Vec<ClubMemberRow>,
    pub participations: Vec<ParticipationWithEvent>,
    pub tournaments: Vec<Event>,
}

/// GET /api/v1/statistics/individual
pub async fn individual(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<IndividualStatistics>>> {
    let profile = require_profile(&state.pool, auth.user_id).await?;
    let participations = EventParticipationRepo::list_for_fencer(&state.pool, profile.id).await?;
    let totals =
        FencerTotals::from_records(participations.iter().map(|p| p.participation.bout_record()));

    Ok(Json(DataResponse {
        data: IndividualStatistics {
            profile,
            participations,
            totals,
        },
    }))
}

/// GET /api/v1/statistics/club
///
/// 400 when the caller's profile does not belong to a club.
pub async fn club(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<ClubStatistics>>> {
    let profile = require_profile(&state.pool, auth.user_id).await?;
    let club_id = profile
        .club_id
        .ok_or_else(|| AppError::BadRequest("Your profile is not assigned to a club".into()))?;
    let club = ClubRepo::find_by_id(&state.pool, club_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Club",
            id: club_id,
        }))?;

    let members = FencerProfileRepo::list_by_club(&state.pool, club_id).await?;
    let member_ids: Vec<DbId> = members.iter().map(|m| m.profile.id).collect();
    let names: HashMap<DbId, String> = members
        .iter()
        .map(|m| (m.profile.id, m.display_name()))
        .collect();

    let participations = EventParticipationRepo::list_for_fencers(&state.pool, &member_ids).await?;
    let summaries = summarize_by_fencer(
        &member_ids,
        participations
            .iter()
            .map(|p| (p.participation.fencer_id, p.participation.bout_record())),
    );

    let rows = summaries
        .into_iter()
        .map(|s| ClubMemberRow {
            display_name: names.get(&s.fencer_id).cloned().unwrap_or_default(),
            fencer_id: s.fencer_id,
            totals: s.totals,
        })
        .collect();

    let tournaments = EventRepo::list_tournaments_for_fencers(&state.pool, &member_ids).await?;

    Ok(Json(DataResponse {
        data: ClubStatistics {
            club,
            members: rows,
            participations,
            tournaments,
        },
    }))
}
