//! Event participation (per-fencer result) model.

use salle_core::statistics::BoutRecord;
use salle_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `event_participations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventParticipation {
    pub id: DbId,
    pub fencer_id: DbId,
    pub event_id: DbId,
    pub position: Option<i32>,
    pub wins: i32,
    pub losses: i32,
    pub touches_scored: i32,
    pub touches_received: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl EventParticipation {
    pub fn bout_record(&self) -> BoutRecord {
        BoutRecord {
            wins: self.wins,
            losses: self.losses,
            touches_scored: self.touches_scored,
            touches_received: self.touches_received,
        }
    }
}

/// A participation joined with the headline fields of its event.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ParticipationWithEvent {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub participation: EventParticipation,
    pub event_title: String,
    pub event_start_date: Timestamp,
    pub event_type: String,
    pub event_location: String,
}

/// Result recorded for one fencer at an event. Re-submitting replaces it.
#[derive(Debug, Deserialize)]
pub struct UpsertParticipation {
    pub fencer_id: DbId,
    pub position: Option<i32>,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(default)]
    pub touches_scored: i32,
    #[serde(default)]
    pub touches_received: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateParticipation {
    pub position: Option<i32>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub touches_scored: Option<i32>,
    pub touches_received: Option<i32>,
}
