//! Domain rules for the club tracker.
//!
//! This crate has no I/O: it holds shared types, the error enum, validation
//! helpers, and the few pieces of real logic (equipment loadout matching,
//! statistics aggregates, profile matching) so both the repository layer and
//! the HTTP layer can use them.

pub mod accounts;
pub mod equipment_loadout;
pub mod error;
pub mod events;
pub mod gallery;
pub mod guides;
pub mod pagination;
pub mod payments;
pub mod profile_matching;
pub mod roles;
pub mod statistics;
pub mod training;
pub mod types;
pub mod validation;
