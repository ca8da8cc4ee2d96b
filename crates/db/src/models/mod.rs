//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Joined read models (rows enriched with counts or parent fields) live
//! next to the entity they extend.

pub mod circuit_training;
pub mod club;
pub mod equipment;
pub mod event;
pub mod event_participation;
pub mod event_reaction;
pub mod fencer_profile;
pub mod gallery;
pub mod guide;
pub mod payment_status;
pub mod role;
pub mod session;
pub mod training_note;
pub mod user;
