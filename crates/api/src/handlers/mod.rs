//! Request handlers, one submodule per page group.
//!
//! Handlers validate input with `salle_core` rules, delegate persistence to
//! the repositories in `salle_db`, and map failures via [`AppError`].

pub mod admin;
pub mod auth;
pub mod calendar;
pub mod equipment;
pub mod gallery;
pub mod guides;
pub mod me;
pub mod payment;
pub mod statistics;
pub mod training;

use salle_core::error::CoreError;
use salle_core::types::DbId;
use salle_db::models::fencer_profile::FencerProfile;
use salle_db::repositories::FencerProfileRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Map a core validator message to a 400 `VALIDATION_ERROR`.
pub(crate) fn invalid(message: String) -> AppError {
    AppError::Core(CoreError::Validation(message))
}

/// The fencer profile linked to `user_id`.
///
/// Every member page is scoped to this profile; an account without one
/// gets 404.
pub(crate) async fn require_profile(pool: &PgPool, user_id: DbId) -> AppResult<FencerProfile> {
    FencerProfileRepo::find_by_user(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FencerProfile",
            id: user_id,
        }))
}
