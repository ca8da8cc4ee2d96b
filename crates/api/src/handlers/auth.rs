//! Handlers for the `/auth` resource (register, login, refresh, logout).
//!
//! Successful register/login/refresh responses set the `salle_session`
//! cookie in addition to returning the tokens in the body.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use chrono::Utc;
use salle_core::accounts::{validate_email, validate_person_names, validate_username};
use salle_core::error::CoreError;
use salle_core::profile_matching::{match_profile, ProfileCandidate, Registrant};
use salle_core::roles::ROLE_MEMBER;
use salle_core::types::DbId;
use salle_db::models::fencer_profile::FencerProfile;
use salle_db::models::session::CreateSession;
use salle_db::models::user::CreateUser;
use salle_db::repositories::{FencerProfileRepo, RoleRepo, SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use super::invalid;
use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

type WithCookie<T> = ([(HeaderName, String); 1], Json<DataResponse<T>>);

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Registration response: tokens plus the profile the account was linked to.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    #[serde(flatten)]
    pub auth: AuthResponse,
    pub profile: FencerProfile,
    /// `true` when a pre-imported profile was claimed instead of created.
    pub profile_claimed: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a member account and link it to a fencer profile. An unlinked
/// profile matching the e-mail (or, failing that, the full name) is claimed;
/// otherwise a new profile is created.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<DataResponse<RegisterResponse>>)> {
    let username = input.username.trim();
    let email = input.email.trim();
    let first_name = input.first_name.trim();
    let last_name = input.last_name.trim();

    validate_username(username).map_err(invalid)?;
    validate_email(email).map_err(invalid)?;
    validate_person_names(first_name, last_name).map_err(invalid)?;
    validate_password_strength(&input.password, state.config.password_min_length)
        .map_err(invalid)?;

    let role = RoleRepo::find_by_name(&state.pool, ROLE_MEMBER)
        .await?
        .ok_or_else(|| AppError::InternalError("Member role is not seeded".into()))?;

    let candidates: Vec<ProfileCandidate> = FencerProfileRepo::list_unlinked(&state.pool)
        .await?
        .into_iter()
        .map(ProfileCandidate::from)
        .collect();
    let matched = match_profile(
        &candidates,
        &Registrant {
            email,
            first_name,
            last_name,
        },
    );

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        password_hash,
        role_id: role.id,
    };
    let (user, profile) =
        UserRepo::create_with_profile(&state.pool, &create, matched.profile_id()).await?;

    let profile_claimed = matched.profile_id() == Some(profile.id);
    tracing::info!(
        user_id = user.id,
        profile_id = profile.id,
        profile_claimed,
        "Registered new member"
    );

    let auth =
        create_auth_response(&state, user.id, &user.username, &user.email, &role.name).await?;
    let cookie = auth_cookie(&state, &auth.access_token);

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(DataResponse {
            data: RegisterResponse {
                auth,
                profile,
                profile_claimed,
            },
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<WithCookie<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, input.username.trim())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failed = UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if failed >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, lock_until).await?;
            tracing::warn!(user_id = user.id, failed, "Account locked after failed logins");
        }

        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let role_name = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let response =
        create_auth_response(&state, user.id, &user.username, &user.email, &role_name).await?;
    let cookie = auth_cookie(&state, &response.access_token);

    tracing::info!(user_id = user.id, "User logged in");
    Ok(([(SET_COOKIE, cookie)], Json(DataResponse { data: response })))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// session is revoked (rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<WithCookie<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let role_name = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let response =
        create_auth_response(&state, user.id, &user.username, &user.email, &role_name).await?;
    let cookie = auth_cookie(&state, &response.access_token);

    Ok(([(SET_COOKIE, cookie)], Json(DataResponse { data: response })))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user and clear the cookie.
/// Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<(StatusCode, [(HeaderName, String); 1])> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::info!(user_id = auth_user.user_id, revoked, "User logged out");

    let cookie = clear_session_cookie(state.config.session_cookie_secure);
    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)]))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn auth_cookie(state: &AppState, access_token: &str) -> String {
    session_cookie(
        access_token,
        state.config.jwt.access_token_expiry_secs(),
        state.config.session_cookie_secure,
    )
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    user_id: DbId,
    username: &str,
    email: &str,
    role: &str,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = CreateSession {
        user_id,
        refresh_token_hash: refresh_hash,
        expires_at,
        user_agent: None,
        ip_address: None,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_secs(),
        user: UserInfo {
            id: user_id,
            username: username.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        },
    })
}
