//! Handlers for the photo gallery: featured photos, likes, albums and
//! sub-albums.
//!
//! Photo files are stored elsewhere; these endpoints only record and return
//! their paths.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use salle_core::error::CoreError;
use salle_core::gallery::{validate_photo, validate_subalbum_name};
use salle_core::types::DbId;
use salle_db::models::event::Event;
use salle_db::models::gallery::{
    AlbumSummary, CreateEventPhoto, CreateSubAlbum, EventPhoto, LikeState, PhotoAlbum,
    PhotoWithLikes, SubAlbum, SubAlbumSummary,
};
use salle_db::repositories::{
    EventPhotoRepo, EventRepo, PhotoAlbumRepo, PhotoLikeRepo, SubAlbumRepo,
};
use serde::Serialize;

use super::invalid;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AlbumDetail {
    pub album: PhotoAlbum,
    pub event: Event,
    pub subalbums: Vec<SubAlbumSummary>,
}

async fn ensure_album_exists(state: &AppState, id: DbId) -> AppResult<PhotoAlbum> {
    PhotoAlbumRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PhotoAlbum",
            id,
        }))
}

async fn ensure_subalbum_exists(state: &AppState, id: DbId) -> AppResult<SubAlbum> {
    SubAlbumRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SubAlbum",
            id,
        }))
}

async fn ensure_photo_exists(state: &AppState, id: DbId, viewer_id: DbId) -> AppResult<PhotoWithLikes> {
    EventPhotoRepo::find_with_likes(&state.pool, id, viewer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventPhoto",
            id,
        }))
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

/// GET /api/v1/photos
///
/// Featured photos with like counts and the caller's own like flag.
pub async fn list_featured(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<PhotoWithLikes>>>> {
    let photos =
        EventPhotoRepo::list_featured(&state.pool, auth.user_id, params.limit, params.offset)
            .await?;
    Ok(Json(DataResponse { data: photos }))
}

/// GET /api/v1/photos/{id}
pub async fn get_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PhotoWithLikes>>> {
    let photo = ensure_photo_exists(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: photo }))
}

/// POST /api/v1/photos/{id}/like
///
/// Toggle the caller's like and return the new state.
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<LikeState>>> {
    ensure_photo_exists(&state, id, auth.user_id).await?;
    let like = PhotoLikeRepo::toggle(&state.pool, id, auth.user_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        photo_id = id,
        liked = like.liked,
        like_count = like.like_count,
        "Photo like toggled"
    );
    Ok(Json(DataResponse { data: like }))
}

// ---------------------------------------------------------------------------
// Albums
// ---------------------------------------------------------------------------

/// GET /api/v1/albums
///
/// One album per event, newest event first.
pub async fn list_albums(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<AlbumSummary>>>> {
    let albums = PhotoAlbumRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: albums }))
}

/// GET /api/v1/albums/{id}
pub async fn get_album(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AlbumDetail>>> {
    let album = ensure_album_exists(&state, id).await?;
    let event = EventRepo::find_by_id(&state.pool, album.event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: album.event_id,
        }))?;
    let subalbums = SubAlbumRepo::list_for_album(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: AlbumDetail {
            album,
            event,
            subalbums,
        },
    }))
}

/// POST /api/v1/albums/{id}/subalbums
pub async fn create_subalbum(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSubAlbum>,
) -> AppResult<(StatusCode, Json<DataResponse<SubAlbum>>)> {
    validate_subalbum_name(&input.name).map_err(invalid)?;
    ensure_album_exists(&state, id).await?;

    let subalbum = SubAlbumRepo::create(&state.pool, id, input.name.trim(), auth.user_id).await?;
    tracing::info!(
        user_id = auth.user_id,
        album_id = id,
        subalbum_id = subalbum.id,
        "Sub-album created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: subalbum })))
}

/// GET /api/v1/subalbums/{id}/photos
pub async fn list_subalbum_photos(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PhotoWithLikes>>>> {
    ensure_subalbum_exists(&state, id).await?;
    let photos = EventPhotoRepo::list_for_subalbum(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// POST /api/v1/subalbums/{id}/photos
///
/// Register an already-uploaded photo. The first photo added to an album
/// without a cover becomes its cover.
pub async fn add_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateEventPhoto>,
) -> AppResult<(StatusCode, Json<DataResponse<EventPhoto>>)> {
    validate_photo(&input.title, &input.description, &input.photo_path).map_err(invalid)?;
    let subalbum = ensure_subalbum_exists(&state, id).await?;

    let photo = EventPhotoRepo::create(&state.pool, Some(id), auth.user_id, &input).await?;

    let album = ensure_album_exists(&state, subalbum.album_id).await?;
    if album.cover_photo_path.is_none() {
        PhotoAlbumRepo::set_cover(&state.pool, album.id, Some(&photo.photo_path)).await?;
    }

    tracing::info!(
        user_id = auth.user_id,
        subalbum_id = id,
        photo_id = photo.id,
        "Photo added"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}
