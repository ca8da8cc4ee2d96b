//! Repository for the `users` table.

use salle_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::fencer_profile::FencerProfile;
use crate::models::user::{CreateUser, User};
use crate::repositories::fencer_profile_repo::COLUMNS as PROFILE_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, role_id, \
                       is_active, last_login_at, failed_login_count, locked_until, \
                       created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, first_name, last_name, password_hash, role_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Increment the failed login counter, returning the new count.
    pub async fn increment_failed_login(pool: &PgPool, id: DbId) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE users SET failed_login_count = failed_login_count + 1
             WHERE id = $1
             RETURNING failed_login_count",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Lock a user account until the specified timestamp.
    pub async fn lock_account(
        pool: &PgPool,
        id: DbId,
        until: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET locked_until = $2 WHERE id = $1")
            .bind(id)
            .bind(until)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a successful login: reset `failed_login_count` to 0, clear `locked_until`,
    /// and set `last_login_at` to now.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                failed_login_count = 0,
                locked_until = NULL,
                last_login_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Create an account together with its fencer profile in one transaction.
    ///
    /// When `claim_profile` names an unlinked profile it is linked to the new
    /// account. If that profile was claimed concurrently (or never existed),
    /// a fresh profile is created from the account's names and e-mail.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
        claim_profile: Option<DbId>,
    ) -> Result<(User, FencerProfile), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (username, email, first_name, last_name, password_hash, role_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .fetch_one(&mut *tx)
            .await?;

        let mut profile = None;
        if let Some(profile_id) = claim_profile {
            let query = format!(
                "UPDATE fencer_profiles SET user_id = $2
                 WHERE id = $1 AND user_id IS NULL
                 RETURNING {PROFILE_COLUMNS}"
            );
            profile = sqlx::query_as::<_, FencerProfile>(&query)
                .bind(profile_id)
                .bind(user.id)
                .fetch_optional(&mut *tx)
                .await?;
        }

        let profile = match profile {
            Some(profile) => profile,
            None => {
                let query = format!(
                    "INSERT INTO fencer_profiles (user_id, first_name, last_name, email)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {PROFILE_COLUMNS}"
                );
                sqlx::query_as::<_, FencerProfile>(&query)
                    .bind(user.id)
                    .bind(&user.first_name)
                    .bind(&user.last_name)
                    .bind(&user.email)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok((user, profile))
    }
}
