//! Repository for the `fencer_profiles` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::fencer_profile::{
    CreateFencerProfile, FencerProfile, ProfileWithAccount, UpdateFencerProfile,
};

pub(crate) const COLUMNS: &str = "id, user_id, club_id, first_name, last_name, email, phone, \
                                  created_at, updated_at";

/// Same columns qualified with the `p` alias, plus the joined account fields.
const ACCOUNT_COLUMNS: &str = "p.id, p.user_id, p.club_id, p.first_name, p.last_name, p.email, \
    p.phone, p.created_at, p.updated_at, \
    u.username, u.first_name AS user_first_name, u.last_name AS user_last_name";

/// Provides CRUD and account-linking operations for fencer profiles.
pub struct FencerProfileRepo;

impl FencerProfileRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateFencerProfile,
    ) -> Result<FencerProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO fencer_profiles (user_id, club_id, first_name, last_name, email, phone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FencerProfile>(&query)
            .bind(input.user_id)
            .bind(input.club_id)
            .bind(input.first_name.trim())
            .bind(input.last_name.trim())
            .bind(input.email.trim())
            .bind(input.phone.trim())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FencerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fencer_profiles WHERE id = $1");
        sqlx::query_as::<_, FencerProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The profile linked to an account, if any.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<FencerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fencer_profiles WHERE user_id = $1");
        sqlx::query_as::<_, FencerProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Profiles not yet claimed by any account, oldest first.
    pub async fn list_unlinked(pool: &PgPool) -> Result<Vec<FencerProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fencer_profiles WHERE user_id IS NULL ORDER BY id ASC"
        );
        sqlx::query_as::<_, FencerProfile>(&query)
            .fetch_all(pool)
            .await
    }

    /// Every profile with its account, ordered by last then first name.
    pub async fn list_with_accounts(
        pool: &PgPool,
    ) -> Result<Vec<ProfileWithAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {ACCOUNT_COLUMNS}
             FROM fencer_profiles p
             LEFT JOIN users u ON u.id = p.user_id
             ORDER BY p.last_name ASC, p.first_name ASC, p.id ASC"
        );
        sqlx::query_as::<_, ProfileWithAccount>(&query)
            .fetch_all(pool)
            .await
    }

    /// Members of a club with their accounts.
    pub async fn list_by_club(
        pool: &PgPool,
        club_id: DbId,
    ) -> Result<Vec<ProfileWithAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {ACCOUNT_COLUMNS}
             FROM fencer_profiles p
             LEFT JOIN users u ON u.id = p.user_id
             WHERE p.club_id = $1
             ORDER BY p.last_name ASC, p.first_name ASC, p.id ASC"
        );
        sqlx::query_as::<_, ProfileWithAccount>(&query)
            .bind(club_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFencerProfile,
    ) -> Result<Option<FencerProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE fencer_profiles SET
                club_id = COALESCE($2, club_id),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FencerProfile>(&query)
            .bind(id)
            .bind(input.club_id)
            .bind(input.first_name.as_deref().map(str::trim))
            .bind(input.last_name.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(input.phone.as_deref().map(str::trim))
            .fetch_optional(pool)
            .await
    }

    /// Attach an unlinked profile to an account.
    ///
    /// Returns `None` when the profile does not exist or is already linked.
    pub async fn link_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<FencerProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE fencer_profiles SET user_id = $2
             WHERE id = $1 AND user_id IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FencerProfile>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Detach a profile from its account, keeping the profile and its history.
    pub async fn unlink_user(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FencerProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE fencer_profiles SET user_id = NULL WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FencerProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fencer_profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
