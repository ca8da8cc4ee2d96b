//! Club model.

use salle_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clubs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Club {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateClub {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClub {
    pub name: Option<String>,
}
