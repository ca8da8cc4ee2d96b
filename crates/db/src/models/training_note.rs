//! Training diary entries.

use salle_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `training_notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainingNote {
    pub id: DbId,
    pub fencer_id: DbId,
    pub date: Date,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a note. `date` defaults to today.
#[derive(Debug, Deserialize)]
pub struct CreateTrainingNote {
    pub date: Option<Date>,
    pub notes: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTrainingNote {
    pub date: Option<Date>,
    pub notes: Option<String>,
}
