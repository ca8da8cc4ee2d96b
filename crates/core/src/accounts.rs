//! Account and fencer profile field validation.

use validator::ValidateEmail;

use crate::validation::{validate_max_length, validate_required};

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Maximum length of first/last name fields.
pub const MAX_PERSON_NAME_LENGTH: usize = 150;

/// Maximum phone number length.
pub const MAX_PHONE_LENGTH: usize = 20;

/// Usernames are non-blank, short, and limited to letters, digits and `@.+-_`.
pub fn validate_username(username: &str) -> Result<(), String> {
    validate_required("Username", username, MAX_USERNAME_LENGTH)?;
    let allowed = |c: char| c.is_alphanumeric() || "@.+-_".contains(c);
    if !username.chars().all(allowed) {
        return Err(
            "Username may contain only letters, digits and @/./+/-/_ characters".to_string(),
        );
    }
    Ok(())
}

/// E-mail must be syntactically valid.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() || !email.to_string().validate_email() {
        return Err(format!("'{email}' is not a valid e-mail address"));
    }
    Ok(())
}

/// Blank e-mail is allowed for imported profiles; otherwise it must be valid.
pub fn validate_optional_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Ok(());
    }
    validate_email(email)
}

pub fn validate_person_names(first_name: &str, last_name: &str) -> Result<(), String> {
    validate_max_length("First name", first_name, MAX_PERSON_NAME_LENGTH)?;
    validate_max_length("Last name", last_name, MAX_PERSON_NAME_LENGTH)
}

/// Phone numbers: optional, digits with an optional leading `+` and spaces.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    validate_max_length("Phone", phone, MAX_PHONE_LENGTH)?;
    let trimmed = phone.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !body.chars().all(|c| c.is_ascii_digit() || c == ' ') {
        return Err("Phone may contain only digits, spaces and a leading +".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("jan.novak").is_ok());
        assert!(validate_username("šermíř_1").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("jan novak").is_err());
        assert!(validate_username(&"a".repeat(151)).is_err());
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("jan@example.cz").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
        assert!(validate_optional_email("").is_ok());
        assert!(validate_optional_email("nope").is_err());
    }

    #[test]
    fn phone_rules() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("+420 777 123 456").is_ok());
        assert!(validate_phone("777-123").is_err());
    }
}
