//! Photo gallery validation.

use crate::validation::{validate_max_length, validate_required, MAX_NAME_LENGTH};

/// Maximum length of a stored upload path.
pub const MAX_PATH_LENGTH: usize = 500;

/// Maximum length of a photo description.
pub const MAX_PHOTO_DESCRIPTION_LENGTH: usize = 2_000;

/// Default page size for photo listings.
pub const DEFAULT_PHOTO_LIMIT: i64 = 60;

pub fn validate_subalbum_name(name: &str) -> Result<(), String> {
    validate_required("Sub-album name", name, MAX_NAME_LENGTH)
}

pub fn validate_photo(title: &str, description: &str, photo_path: &str) -> Result<(), String> {
    validate_required("Title", title, MAX_NAME_LENGTH)?;
    validate_max_length("Description", description, MAX_PHOTO_DESCRIPTION_LENGTH)?;
    validate_required("Photo", photo_path, MAX_PATH_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subalbum_name_required() {
        assert!(validate_subalbum_name("Finále").is_ok());
        assert!(validate_subalbum_name("").is_err());
    }

    #[test]
    fn photo_requires_title_and_path() {
        assert!(validate_photo("Vítězové", "", "event_photos/a.jpg").is_ok());
        assert!(validate_photo("", "", "event_photos/a.jpg").is_err());
        assert!(validate_photo("Vítězové", "", " ").is_err());
    }
}
