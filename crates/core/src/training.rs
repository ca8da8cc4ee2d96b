//! Training notes and circuit trainings ("masíčka").

use crate::roles::ROLE_ADMIN;
use crate::types::DbId;
use crate::validation::{validate_required, MAX_NAME_LENGTH};

/// Maximum length of a training note in characters.
pub const MAX_NOTE_LENGTH: usize = 10_000;

/// Maximum length of a circuit exercise list in characters.
pub const MAX_EXERCISES_LENGTH: usize = 10_000;

pub fn validate_note(notes: &str) -> Result<(), String> {
    validate_required("Notes", notes, MAX_NOTE_LENGTH)
}

pub fn validate_circuit_name(name: &str) -> Result<(), String> {
    validate_required("Name", name, MAX_NAME_LENGTH)
}

pub fn validate_exercises(exercises: &str) -> Result<(), String> {
    validate_required("Exercises", exercises, MAX_EXERCISES_LENGTH)?;
    if parse_exercises(exercises).is_empty() {
        return Err("Exercises must contain at least one line".to_string());
    }
    Ok(())
}

pub fn validate_song(name: &str, audio_path: &str) -> Result<(), String> {
    validate_required("Song name", name, MAX_NAME_LENGTH)?;
    validate_required("Audio file", audio_path, 500)
}

/// Split the exercise text into one trimmed entry per non-blank line.
pub fn parse_exercises(exercises: &str) -> Vec<String> {
    exercises
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A circuit is visible to its creator and, when public, to everyone.
pub fn can_view_circuit(created_by: DbId, is_public: bool, user_id: DbId) -> bool {
    is_public || created_by == user_id
}

/// Only the creator (or an admin) may change a circuit or its songs.
pub fn can_manage_circuit(created_by: DbId, user_id: DbId, role: &str) -> bool {
    created_by == user_id || role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ROLE_MEMBER;

    #[test]
    fn exercises_are_split_per_line() {
        let parsed = parse_exercises("  10x dřep\n\n30s plank \r\n  \nvýpady");
        assert_eq!(parsed, vec!["10x dřep", "30s plank", "výpady"]);
    }

    #[test]
    fn blank_exercises_rejected() {
        assert!(validate_exercises("").is_err());
        assert!(validate_exercises("\n \n").is_err());
        assert!(validate_exercises("kliky").is_ok());
    }

    #[test]
    fn note_limits() {
        assert!(validate_note("Práce nohou, výpady").is_ok());
        assert!(validate_note(" ").is_err());
        assert!(validate_note(&"a".repeat(MAX_NOTE_LENGTH + 1)).is_err());
    }

    #[test]
    fn song_requires_name_and_path() {
        assert!(validate_song("Eye of the Tiger", "circuit_songs/tiger.mp3").is_ok());
        assert!(validate_song("", "circuit_songs/tiger.mp3").is_err());
        assert!(validate_song("Eye of the Tiger", "").is_err());
    }

    #[test]
    fn visibility_rules() {
        assert!(can_view_circuit(1, false, 1));
        assert!(!can_view_circuit(1, false, 2));
        assert!(can_view_circuit(1, true, 2));
    }

    #[test]
    fn management_rules() {
        assert!(can_manage_circuit(1, 1, ROLE_MEMBER));
        assert!(!can_manage_circuit(1, 2, ROLE_MEMBER));
        assert!(can_manage_circuit(1, 2, ROLE_ADMIN));
    }
}
