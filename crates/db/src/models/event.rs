//! Calendar event model and DTOs.

use salle_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub location: String,
    pub external_link: String,
    pub event_type: String,
    pub gender_scope: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An upcoming event as seen by one member on the calendar page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CalendarEvent {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub event: Event,
    pub attending_count: i64,
    pub my_will_attend: Option<bool>,
    pub my_comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub location: Option<String>,
    pub external_link: Option<String>,
    pub event_type: Option<String>,
    pub gender_scope: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub location: Option<String>,
    pub external_link: Option<String>,
    pub event_type: Option<String>,
    pub gender_scope: Option<String>,
}
