//! Fencer profile model and DTOs.

use salle_core::profile_matching::{fencer_display_name, ProfileCandidate};
use salle_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `fencer_profiles` table.
///
/// `user_id` is `None` for profiles imported before their owner registered.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FencerProfile {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub club_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<FencerProfile> for ProfileCandidate {
    fn from(p: FencerProfile) -> Self {
        ProfileCandidate {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
        }
    }
}

/// A profile joined with its linked account (if any).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProfileWithAccount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: FencerProfile,
    pub username: Option<String>,
    pub user_first_name: Option<String>,
    pub user_last_name: Option<String>,
}

impl ProfileWithAccount {
    /// Name to show for this fencer.
    pub fn display_name(&self) -> String {
        let account = self.username.as_deref().map(|username| {
            (
                username,
                self.user_first_name.as_deref().unwrap_or_default(),
                self.user_last_name.as_deref().unwrap_or_default(),
            )
        });
        fencer_display_name(
            self.profile.id,
            account,
            &self.profile.first_name,
            &self.profile.last_name,
        )
    }
}

/// DTO for creating a profile (registration or admin import).
#[derive(Debug, Default, Deserialize)]
pub struct CreateFencerProfile {
    pub user_id: Option<DbId>,
    pub club_id: Option<DbId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// DTO for patching a profile.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFencerProfile {
    pub club_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
