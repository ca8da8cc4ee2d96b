//! Reference material: glossary, instructional videos, rules.

use salle_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GlossaryTerm {
    pub id: DbId,
    pub term: String,
    pub definition: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateGlossaryTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GuideVideo {
    pub id: DbId,
    pub title: String,
    pub youtube_url: String,
    pub description: String,
    pub category: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateGuideVideo {
    pub title: String,
    pub youtube_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RulesDocument {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub file_path: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateRulesDocument {
    pub title: String,
    pub content: String,
    pub file_path: Option<String>,
}
