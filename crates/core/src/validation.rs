//! Small text validators shared by the domain modules.
//!
//! Every validator returns `Result<(), String>` with a user-facing message;
//! handlers turn the message into a `400` response.

use validator::ValidateUrl;

/// Default maximum length for short names and titles.
pub const MAX_NAME_LENGTH: usize = 200;

/// Require a non-blank value no longer than `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    validate_max_length(field, value, max)
}

/// Reject values longer than `max` characters (blank is allowed).
pub fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{field} exceeds maximum length of {max} characters"));
    }
    Ok(())
}

/// Accept an empty string or an absolute `http(s)` URL.
pub fn validate_optional_http_url(field: &str, value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    if !has_scheme || !value.to_string().validate_url() {
        return Err(format!("{field} must be an http(s) URL"));
    }
    Ok(())
}
