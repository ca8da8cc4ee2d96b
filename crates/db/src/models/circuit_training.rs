//! Circuit training routines and their music tracks.

use salle_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `circuit_trainings` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CircuitTraining {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// One exercise per line.
    pub exercises: String,
    pub created_by: DbId,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateCircuitTraining {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub exercises: String,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCircuitTraining {
    pub name: Option<String>,
    pub description: Option<String>,
    pub exercises: Option<String>,
    pub is_public: Option<bool>,
}

/// A row from the `circuit_songs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CircuitSong {
    pub id: DbId,
    pub circuit_id: DbId,
    pub name: String,
    pub audio_path: String,
    pub uploaded_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateCircuitSong {
    pub name: String,
    pub audio_path: String,
}
