//! Handlers for the reference guides.

use axum::extract::State;
use axum::Json;
use salle_core::guides::youtube_embed;
use salle_db::models::guide::{GlossaryTerm, GuideVideo, RulesDocument};
use salle_db::repositories::{GlossaryTermRepo, GuideVideoRepo, RulesDocumentRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VideoView {
    #[serde(flatten)]
    pub video: GuideVideo,
    pub embed_url: String,
}

impl From<GuideVideo> for VideoView {
    fn from(video: GuideVideo) -> Self {
        Self {
            embed_url: youtube_embed(&video.youtube_url),
            video,
        }
    }
}

/// GET /api/v1/guides/glossary
pub async fn glossary(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<GlossaryTerm>>>> {
    let terms = GlossaryTermRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: terms }))
}

/// GET /api/v1/guides/videos
pub async fn videos(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<VideoView>>>> {
    let videos = GuideVideoRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: videos.into_iter().map(VideoView::from).collect(),
    }))
}

/// GET /api/v1/guides/rules
pub async fn rules(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<RulesDocument>>>> {
    let documents = RulesDocumentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: documents }))
}
