//! Admin-only write API for the data the member pages read: clubs, events
//! and their results, fencer profiles, payment records and guide content.
//!
//! Every handler requires the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use salle_core::accounts::{validate_optional_email, validate_person_names, validate_phone};
use salle_core::error::CoreError;
use salle_core::events::{
    validate_date_range, validate_event_fields, validate_participation_counts,
};
use salle_core::payments::validate_amount;
use salle_core::types::DbId;
use salle_core::validation::{validate_optional_http_url, validate_required, MAX_NAME_LENGTH};
use salle_db::models::club::{Club, CreateClub, UpdateClub};
use salle_db::models::event::{CreateEvent, Event, UpdateEvent};
use salle_db::models::event_participation::{
    EventParticipation, UpdateParticipation, UpsertParticipation,
};
use salle_db::models::fencer_profile::{
    CreateFencerProfile, FencerProfile, ProfileWithAccount, UpdateFencerProfile,
};
use salle_db::models::guide::{
    CreateGlossaryTerm, CreateGuideVideo, CreateRulesDocument, GlossaryTerm, GuideVideo,
    RulesDocument,
};
use salle_db::models::payment_status::{PaymentStatus, UpdatePaymentStatus};
use salle_db::repositories::{
    ClubRepo, EventParticipationRepo, EventRepo, FencerProfileRepo, GlossaryTermRepo,
    GuideVideoRepo, PaymentStatusRepo, RulesDocumentRepo,
};
use serde::Deserialize;

use super::invalid;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

fn deleted_or_not_found(deleted: bool, entity: &'static str, id: DbId) -> AppResult<StatusCode> {
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(entity, id))
    }
}

// ---------------------------------------------------------------------------
// Clubs
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/clubs
pub async fn list_clubs(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Club>>>> {
    let clubs = ClubRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clubs }))
}

/// POST /api/v1/admin/clubs
pub async fn create_club(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateClub>,
) -> AppResult<(StatusCode, Json<DataResponse<Club>>)> {
    validate_required("Name", &input.name, MAX_NAME_LENGTH).map_err(invalid)?;
    let club = ClubRepo::create(&state.pool, &input).await?;
    tracing::info!(admin_id = admin.user_id, club_id = club.id, "Club created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: club })))
}

/// PUT /api/v1/admin/clubs/{id}
pub async fn update_club(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClub>,
) -> AppResult<Json<DataResponse<Club>>> {
    if let Some(name) = &input.name {
        validate_required("Name", name, MAX_NAME_LENGTH).map_err(invalid)?;
    }
    let club = ClubRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Club", id))?;
    tracing::info!(admin_id = admin.user_id, club_id = id, "Club updated");
    Ok(Json(DataResponse { data: club }))
}

/// DELETE /api/v1/admin/clubs/{id}
///
/// Member profiles stay and lose their club.
pub async fn delete_club(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClubRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(admin_id = admin.user_id, club_id = id, "Club deleted");
    }
    deleted_or_not_found(deleted, "Club", id)
}

// ---------------------------------------------------------------------------
// Events and participations
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/events
pub async fn list_events(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/admin/events
///
/// The event's photo album is created with it.
pub async fn create_event(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    validate_event_fields(
        Some(&input.title),
        input.location.as_deref(),
        input.external_link.as_deref(),
        input.event_type.as_deref(),
        input.gender_scope.as_deref(),
    )
    .map_err(invalid)?;
    validate_date_range(input.start_date, input.end_date).map_err(invalid)?;

    let event = EventRepo::create(&state.pool, &input).await?;
    tracing::info!(
        admin_id = admin.user_id,
        event_id = event.id,
        event_type = %event.event_type,
        "Event created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PUT /api/v1/admin/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    validate_event_fields(
        input.title.as_deref(),
        input.location.as_deref(),
        input.external_link.as_deref(),
        input.event_type.as_deref(),
        input.gender_scope.as_deref(),
    )
    .map_err(invalid)?;

    let existing = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Event", id))?;
    validate_date_range(
        input.start_date.unwrap_or(existing.start_date),
        input.end_date.or(existing.end_date),
    )
    .map_err(invalid)?;

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Event", id))?;
    tracing::info!(admin_id = admin.user_id, event_id = id, "Event updated");
    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/admin/events/{id}
///
/// Cascades to participations, reactions and the photo album.
pub async fn delete_event(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(admin_id = admin.user_id, event_id = id, "Event deleted");
    }
    deleted_or_not_found(deleted, "Event", id)
}

/// GET /api/v1/admin/events/{id}/participations
pub async fn list_participations(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<EventParticipation>>>> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Event", id))?;
    let rows = EventParticipationRepo::list_for_event(&state.pool, id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/admin/events/{id}/participations
///
/// Record a fencer's result; an existing result for the same fencer is
/// replaced.
pub async fn record_participation(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertParticipation>,
) -> AppResult<Json<DataResponse<EventParticipation>>> {
    validate_participation_counts(
        input.position,
        &[
            ("Wins", Some(input.wins)),
            ("Losses", Some(input.losses)),
            ("Touches scored", Some(input.touches_scored)),
            ("Touches received", Some(input.touches_received)),
        ],
    )
    .map_err(invalid)?;
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Event", id))?;

    let row = EventParticipationRepo::upsert(&state.pool, id, &input).await?;
    tracing::info!(
        admin_id = admin.user_id,
        event_id = id,
        fencer_id = input.fencer_id,
        "Participation recorded"
    );
    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/v1/admin/participations/{id}
pub async fn update_participation(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateParticipation>,
) -> AppResult<Json<DataResponse<EventParticipation>>> {
    validate_participation_counts(
        input.position,
        &[
            ("Wins", input.wins),
            ("Losses", input.losses),
            ("Touches scored", input.touches_scored),
            ("Touches received", input.touches_received),
        ],
    )
    .map_err(invalid)?;

    let row = EventParticipationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("EventParticipation", id))?;
    tracing::info!(admin_id = admin.user_id, participation_id = id, "Participation updated");
    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/v1/admin/participations/{id}
pub async fn delete_participation(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventParticipationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(admin_id = admin.user_id, participation_id = id, "Participation deleted");
    }
    deleted_or_not_found(deleted, "EventParticipation", id)
}

// ---------------------------------------------------------------------------
// Fencer profiles
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/profiles/{id}/link`.
#[derive(Debug, Deserialize)]
pub struct LinkProfileRequest {
    pub user_id: DbId,
}

fn validate_profile_fields(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<(), String> {
    validate_person_names(first_name.unwrap_or_default(), last_name.unwrap_or_default())?;
    if let Some(email) = email {
        validate_optional_email(email)?;
    }
    if let Some(phone) = phone {
        validate_phone(phone)?;
    }
    Ok(())
}

/// GET /api/v1/admin/profiles
pub async fn list_profiles(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<ProfileWithAccount>>>> {
    let profiles = FencerProfileRepo::list_with_accounts(&state.pool).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// POST /api/v1/admin/profiles
///
/// Import a fencer before they register. Registration later claims the
/// profile by e-mail or full name.
pub async fn create_profile(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateFencerProfile>,
) -> AppResult<(StatusCode, Json<DataResponse<FencerProfile>>)> {
    validate_profile_fields(
        Some(&input.first_name),
        Some(&input.last_name),
        Some(&input.email),
        Some(&input.phone),
    )
    .map_err(invalid)?;

    let profile = FencerProfileRepo::create(&state.pool, &input).await?;
    tracing::info!(admin_id = admin.user_id, profile_id = profile.id, "Fencer profile created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: profile })))
}

/// PUT /api/v1/admin/profiles/{id}
pub async fn update_profile(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFencerProfile>,
) -> AppResult<Json<DataResponse<FencerProfile>>> {
    validate_profile_fields(
        input.first_name.as_deref(),
        input.last_name.as_deref(),
        input.email.as_deref(),
        input.phone.as_deref(),
    )
    .map_err(invalid)?;

    let profile = FencerProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("FencerProfile", id))?;
    tracing::info!(admin_id = admin.user_id, profile_id = id, "Fencer profile updated");
    Ok(Json(DataResponse { data: profile }))
}

/// DELETE /api/v1/admin/profiles/{id}
pub async fn delete_profile(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FencerProfileRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(admin_id = admin.user_id, profile_id = id, "Fencer profile deleted");
    }
    deleted_or_not_found(deleted, "FencerProfile", id)
}

/// POST /api/v1/admin/profiles/{id}/link
///
/// 409 when the profile already belongs to an account.
pub async fn link_profile(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<LinkProfileRequest>,
) -> AppResult<Json<DataResponse<FencerProfile>>> {
    FencerProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("FencerProfile", id))?;

    let profile = FencerProfileRepo::link_user(&state.pool, id, input.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Profile is already linked to an account".into(),
            ))
        })?;
    tracing::info!(
        admin_id = admin.user_id,
        profile_id = id,
        user_id = input.user_id,
        "Fencer profile linked"
    );
    Ok(Json(DataResponse { data: profile }))
}

/// POST /api/v1/admin/profiles/{id}/unlink
pub async fn unlink_profile(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FencerProfile>>> {
    let profile = FencerProfileRepo::unlink_user(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("FencerProfile", id))?;
    tracing::info!(admin_id = admin.user_id, profile_id = id, "Fencer profile unlinked");
    Ok(Json(DataResponse { data: profile }))
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

/// PUT /api/v1/admin/payments/{fencer_id}
pub async fn update_payment(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(fencer_id): Path<DbId>,
    Json(input): Json<UpdatePaymentStatus>,
) -> AppResult<Json<DataResponse<PaymentStatus>>> {
    if let Some(amount) = input.amount {
        validate_amount(amount).map_err(invalid)?;
    }
    FencerProfileRepo::find_by_id(&state.pool, fencer_id)
        .await?
        .ok_or_else(|| not_found("FencerProfile", fencer_id))?;

    let status = PaymentStatusRepo::update_for_fencer(&state.pool, fencer_id, &input).await?;
    tracing::info!(
        admin_id = admin.user_id,
        fencer_id,
        is_paid = status.is_paid,
        "Payment status updated"
    );
    Ok(Json(DataResponse { data: status }))
}

// ---------------------------------------------------------------------------
// Guides
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/glossary
pub async fn create_glossary_term(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(input): Json<CreateGlossaryTerm>,
) -> AppResult<(StatusCode, Json<DataResponse<GlossaryTerm>>)> {
    validate_required("Term", &input.term, MAX_NAME_LENGTH).map_err(invalid)?;
    validate_required("Definition", &input.definition, 10_000).map_err(invalid)?;
    let term = GlossaryTermRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: term })))
}

/// POST /api/v1/admin/videos
pub async fn create_video(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(input): Json<CreateGuideVideo>,
) -> AppResult<(StatusCode, Json<DataResponse<GuideVideo>>)> {
    validate_required("Title", &input.title, MAX_NAME_LENGTH).map_err(invalid)?;
    validate_required("YouTube URL", &input.youtube_url, 500).map_err(invalid)?;
    validate_optional_http_url("YouTube URL", &input.youtube_url).map_err(invalid)?;
    let video = GuideVideoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// POST /api/v1/admin/rules
pub async fn create_rules_document(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(input): Json<CreateRulesDocument>,
) -> AppResult<(StatusCode, Json<DataResponse<RulesDocument>>)> {
    validate_required("Title", &input.title, MAX_NAME_LENGTH).map_err(invalid)?;
    let document = RulesDocumentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}
