//! RSVP + comment a member leaves on a calendar event.

use salle_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `event_reactions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventReaction {
    pub id: DbId,
    pub event_id: DbId,
    pub user_id: DbId,
    pub will_attend: bool,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A reaction with the author's username.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReactionWithUser {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub reaction: EventReaction,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct UpsertEventReaction {
    #[serde(default)]
    pub will_attend: bool,
    #[serde(default)]
    pub comment: String,
}
