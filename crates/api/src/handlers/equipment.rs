//! Handlers for the equipment checklist and loadout board.

use axum::extract::State;
use axum::Json;
use salle_core::equipment_loadout::{build_loadout, LoadoutBoard};
use salle_core::error::CoreError;
use salle_db::models::equipment::{OwnedEquipment, SetOwned, UserEquipment};
use salle_db::repositories::{EquipmentItemRepo, UserEquipmentRepo};
use serde::Serialize;

use super::require_profile;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EquipmentPage {
    /// Full catalog ordered by category and name, with the caller's flags.
    pub items: Vec<OwnedEquipment>,
    pub owned_count: usize,
    pub loadout: LoadoutBoard,
}

/// GET /api/v1/equipment
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<EquipmentPage>>> {
    let profile = require_profile(&state.pool, auth.user_id).await?;
    let items = EquipmentItemRepo::list_for_fencer(&state.pool, profile.id).await?;
    let loadout = build_loadout(&items);
    let owned_count = items.iter().filter(|i| i.is_owned).count();

    Ok(Json(DataResponse {
        data: EquipmentPage {
            items,
            owned_count,
            loadout,
        },
    }))
}

/// POST /api/v1/equipment
///
/// Mark a catalog item as owned or not owned by the caller.
pub async fn set_owned(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<SetOwned>,
) -> AppResult<Json<DataResponse<UserEquipment>>> {
    let profile = require_profile(&state.pool, auth.user_id).await?;
    EquipmentItemRepo::find_by_id(&state.pool, input.equipment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EquipmentItem",
            id: input.equipment_id,
        }))?;

    let flag =
        UserEquipmentRepo::set_owned(&state.pool, profile.id, input.equipment_id, input.is_owned)
            .await?;

    tracing::info!(
        user_id = auth.user_id,
        equipment_id = input.equipment_id,
        is_owned = input.is_owned,
        "Equipment ownership updated"
    );
    Ok(Json(DataResponse { data: flag }))
}
