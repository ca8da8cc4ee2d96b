//! Handlers for training notes and circuit trainings.
//!
//! Notes are private to the fencer that wrote them; other users get 404.
//! Circuits are visible to their creator and, when public, to everyone;
//! only the creator or an admin may change them.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use salle_core::error::CoreError;
use salle_core::training::{
    can_manage_circuit, can_view_circuit, parse_exercises, validate_circuit_name,
    validate_exercises, validate_note, validate_song,
};
use salle_core::types::DbId;
use salle_db::models::circuit_training::{
    CircuitSong, CircuitTraining, CreateCircuitSong, CreateCircuitTraining, UpdateCircuitTraining,
};
use salle_db::models::training_note::{CreateTrainingNote, TrainingNote, UpdateTrainingNote};
use salle_db::repositories::{CircuitSongRepo, CircuitTrainingRepo, TrainingNoteRepo};
use serde::Serialize;

use super::{invalid, require_profile};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn note_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TrainingNote",
        id,
    })
}

fn circuit_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CircuitTraining",
        id,
    })
}

// ---------------------------------------------------------------------------
// Training notes
// ---------------------------------------------------------------------------

/// GET /api/v1/training/notes
pub async fn list_notes(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<TrainingNote>>>> {
    let profile = require_profile(&state.pool, auth.user_id).await?;
    let notes =
        TrainingNoteRepo::list_for_fencer(&state.pool, profile.id, params.limit, params.offset)
            .await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /api/v1/training/notes
///
/// `date` defaults to today (UTC).
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateTrainingNote>,
) -> AppResult<(StatusCode, Json<DataResponse<TrainingNote>>)> {
    validate_note(&input.notes).map_err(invalid)?;
    let profile = require_profile(&state.pool, auth.user_id).await?;

    let date = input.date.unwrap_or_else(|| Utc::now().date_naive());
    let note = TrainingNoteRepo::create(&state.pool, profile.id, date, &input.notes).await?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, "Training note created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /api/v1/training/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TrainingNote>>> {
    let profile = require_profile(&state.pool, auth.user_id).await?;
    let note = TrainingNoteRepo::find_for_fencer(&state.pool, id, profile.id)
        .await?
        .ok_or_else(|| note_not_found(id))?;
    Ok(Json(DataResponse { data: note }))
}

/// PUT /api/v1/training/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrainingNote>,
) -> AppResult<Json<DataResponse<TrainingNote>>> {
    if let Some(notes) = &input.notes {
        validate_note(notes).map_err(invalid)?;
    }
    let profile = require_profile(&state.pool, auth.user_id).await?;
    let note = TrainingNoteRepo::update_for_fencer(&state.pool, id, profile.id, &input)
        .await?
        .ok_or_else(|| note_not_found(id))?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Training note updated");
    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/training/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let profile = require_profile(&state.pool, auth.user_id).await?;
    if TrainingNoteRepo::delete_for_fencer(&state.pool, id, profile.id).await? {
        tracing::info!(user_id = auth.user_id, note_id = id, "Training note deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(note_not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Circuit trainings
// ---------------------------------------------------------------------------

/// A circuit with its exercise lines split out and its songs attached.
#[derive(Debug, Serialize)]
pub struct CircuitView {
    #[serde(flatten)]
    pub circuit: CircuitTraining,
    pub exercise_list: Vec<String>,
    pub songs: Vec<CircuitSong>,
    pub can_manage: bool,
}

impl CircuitView {
    fn new(circuit: CircuitTraining, songs: Vec<CircuitSong>, auth: &AuthUser) -> Self {
        Self {
            exercise_list: parse_exercises(&circuit.exercises),
            can_manage: can_manage_circuit(circuit.created_by, auth.user_id, &auth.role),
            circuit,
            songs,
        }
    }
}

/// Load a circuit the caller may see. Hidden circuits are reported as 404.
async fn visible_circuit(state: &AppState, auth: &AuthUser, id: DbId) -> AppResult<CircuitTraining> {
    let circuit = CircuitTrainingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| circuit_not_found(id))?;
    if !can_view_circuit(circuit.created_by, circuit.is_public, auth.user_id) {
        return Err(circuit_not_found(id));
    }
    Ok(circuit)
}

/// Load a circuit the caller may change.
async fn managed_circuit(state: &AppState, auth: &AuthUser, id: DbId) -> AppResult<CircuitTraining> {
    let circuit = visible_circuit(state, auth, id).await?;
    if !can_manage_circuit(circuit.created_by, auth.user_id, &auth.role) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can change this circuit".into(),
        )));
    }
    Ok(circuit)
}

async fn songs_for(state: &AppState, circuit_id: DbId) -> AppResult<Vec<CircuitSong>> {
    Ok(CircuitSongRepo::list_for_circuits(&state.pool, &[circuit_id]).await?)
}

/// GET /api/v1/training/circuits
pub async fn list_circuits(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<CircuitView>>>> {
    let circuits = CircuitTrainingRepo::list_visible(&state.pool, auth.user_id).await?;
    let ids: Vec<DbId> = circuits.iter().map(|c| c.id).collect();

    let mut songs: HashMap<DbId, Vec<CircuitSong>> = HashMap::new();
    for song in CircuitSongRepo::list_for_circuits(&state.pool, &ids).await? {
        songs.entry(song.circuit_id).or_default().push(song);
    }

    let views = circuits
        .into_iter()
        .map(|c| {
            let circuit_songs = songs.remove(&c.id).unwrap_or_default();
            CircuitView::new(c, circuit_songs, &auth)
        })
        .collect();
    Ok(Json(DataResponse { data: views }))
}

/// POST /api/v1/training/circuits
pub async fn create_circuit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateCircuitTraining>,
) -> AppResult<(StatusCode, Json<DataResponse<CircuitView>>)> {
    validate_circuit_name(&input.name).map_err(invalid)?;
    validate_exercises(&input.exercises).map_err(invalid)?;

    let circuit = CircuitTrainingRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(
        user_id = auth.user_id,
        circuit_id = circuit.id,
        is_public = circuit.is_public,
        "Circuit training created"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CircuitView::new(circuit, Vec::new(), &auth),
        }),
    ))
}

/// GET /api/v1/training/circuits/{id}
pub async fn get_circuit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CircuitView>>> {
    let circuit = visible_circuit(&state, &auth, id).await?;
    let songs = songs_for(&state, id).await?;
    Ok(Json(DataResponse {
        data: CircuitView::new(circuit, songs, &auth),
    }))
}

/// PUT /api/v1/training/circuits/{id}
pub async fn update_circuit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCircuitTraining>,
) -> AppResult<Json<DataResponse<CircuitView>>> {
    if let Some(name) = &input.name {
        validate_circuit_name(name).map_err(invalid)?;
    }
    if let Some(exercises) = &input.exercises {
        validate_exercises(exercises).map_err(invalid)?;
    }
    managed_circuit(&state, &auth, id).await?;

    let circuit = CircuitTrainingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| circuit_not_found(id))?;
    let songs = songs_for(&state, id).await?;

    tracing::info!(user_id = auth.user_id, circuit_id = id, "Circuit training updated");
    Ok(Json(DataResponse {
        data: CircuitView::new(circuit, songs, &auth),
    }))
}

/// DELETE /api/v1/training/circuits/{id}
pub async fn delete_circuit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    managed_circuit(&state, &auth, id).await?;
    if CircuitTrainingRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = auth.user_id, circuit_id = id, "Circuit training deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(circuit_not_found(id))
    }
}

/// POST /api/v1/training/circuits/{id}/songs
pub async fn add_song(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCircuitSong>,
) -> AppResult<(StatusCode, Json<DataResponse<CircuitSong>>)> {
    validate_song(&input.name, &input.audio_path).map_err(invalid)?;
    managed_circuit(&state, &auth, id).await?;

    let song = CircuitSongRepo::create(&state.pool, id, &input).await?;
    tracing::info!(user_id = auth.user_id, circuit_id = id, song_id = song.id, "Song added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: song })))
}

/// DELETE /api/v1/training/circuits/{id}/songs/{song_id}
pub async fn delete_song(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, song_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    managed_circuit(&state, &auth, id).await?;
    if CircuitSongRepo::delete_from_circuit(&state.pool, song_id, id).await? {
        tracing::info!(user_id = auth.user_id, circuit_id = id, song_id, "Song removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CircuitSong",
            id: song_id,
        }))
    }
}
