//! Well-known role name constants.
//!
//! These must match the seed data in `20250101000001_create_users_and_roles.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";
