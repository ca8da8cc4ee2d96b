//! Handler for the membership payment page.

use axum::extract::State;
use axum::Json;
use salle_db::models::payment_status::PaymentStatus;
use salle_db::repositories::PaymentStatusRepo;

use super::require_profile;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/payment
///
/// The caller's payment status. An unpaid record is created on first visit.
pub async fn my_payment(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<PaymentStatus>>> {
    let profile = require_profile(&state.pool, auth.user_id).await?;
    let status = PaymentStatusRepo::get_or_create(&state.pool, profile.id).await?;
    Ok(Json(DataResponse { data: status }))
}
