//! Club event (calendar) constants and validation.

use crate::types::Timestamp;
use crate::validation::{
    validate_max_length, validate_optional_http_url, validate_required, MAX_NAME_LENGTH,
};

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

pub const EVENT_TYPE_TOURNAMENT: &str = "tournament";
pub const EVENT_TYPE_HUMANITARIAN: &str = "humanitarian";
pub const EVENT_TYPE_OTHER: &str = "other";

/// All valid event type values.
pub const VALID_EVENT_TYPES: &[&str] = &[
    EVENT_TYPE_TOURNAMENT,
    EVENT_TYPE_HUMANITARIAN,
    EVENT_TYPE_OTHER,
];

/// Event type used when none is supplied.
pub const DEFAULT_EVENT_TYPE: &str = EVENT_TYPE_OTHER;

// ---------------------------------------------------------------------------
// Gender scope
// ---------------------------------------------------------------------------

pub const GENDER_MIXED: &str = "mixed";
pub const GENDER_MEN: &str = "men";
pub const GENDER_WOMEN: &str = "women";

pub const VALID_GENDER_SCOPES: &[&str] = &[GENDER_MIXED, GENDER_MEN, GENDER_WOMEN];

/// Gender scope used when none is supplied.
pub const DEFAULT_GENDER_SCOPE: &str = GENDER_MIXED;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Number of past events shown on the calendar page.
pub const PAST_EVENTS_LIMIT: i64 = 10;

/// Maximum length of an RSVP comment.
pub const MAX_REACTION_COMMENT_LENGTH: usize = 2_000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate_event_type(event_type: &str) -> Result<(), String> {
    if VALID_EVENT_TYPES.contains(&event_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid event type '{event_type}'. Must be one of: {}",
            VALID_EVENT_TYPES.join(", ")
        ))
    }
}

pub fn validate_gender_scope(scope: &str) -> Result<(), String> {
    if VALID_GENDER_SCOPES.contains(&scope) {
        Ok(())
    } else {
        Err(format!(
            "Invalid gender scope '{scope}'. Must be one of: {}",
            VALID_GENDER_SCOPES.join(", ")
        ))
    }
}

/// An event may not end before it starts.
pub fn validate_date_range(start: Timestamp, end: Option<Timestamp>) -> Result<(), String> {
    match end {
        Some(end) if end < start => Err("Event end must not be before its start".to_string()),
        _ => Ok(()),
    }
}

/// Field-level checks shared by event create and update.
pub fn validate_event_fields(
    title: Option<&str>,
    location: Option<&str>,
    external_link: Option<&str>,
    event_type: Option<&str>,
    gender_scope: Option<&str>,
) -> Result<(), String> {
    if let Some(title) = title {
        validate_required("Title", title, MAX_NAME_LENGTH)?;
    }
    if let Some(location) = location {
        validate_max_length("Location", location, MAX_NAME_LENGTH)?;
    }
    if let Some(link) = external_link {
        validate_optional_http_url("External link", link)?;
    }
    if let Some(event_type) = event_type {
        validate_event_type(event_type)?;
    }
    if let Some(scope) = gender_scope {
        validate_gender_scope(scope)?;
    }
    Ok(())
}

pub fn validate_reaction_comment(comment: &str) -> Result<(), String> {
    validate_max_length("Comment", comment, MAX_REACTION_COMMENT_LENGTH)
}

/// Participation counters must be non-negative and a position, when given,
/// must be at least 1.
pub fn validate_participation_counts(
    position: Option<i32>,
    counters: &[(&str, Option<i32>)],
) -> Result<(), String> {
    if let Some(p) = position {
        if p < 1 {
            return Err("Position must be at least 1".to_string());
        }
    }
    for (field, value) in counters {
        if value.is_some_and(|v| v < 0) {
            return Err(format!("{field} cannot be negative"));
        }
    }
    Ok(())
}
