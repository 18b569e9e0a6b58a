//! Validation rules for user registration and credential changes.

use crate::error::CoreError;

/// Maximum length for usernames in characters.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Maximum length for email addresses in characters.
pub const MAX_EMAIL_LENGTH: usize = 120;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a username: non-empty, within length limit, no whitespace.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.is_empty() {
        return Err(CoreError::Validation("Username must not be empty".to_string()));
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Username exceeds maximum length of {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Username must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validate an email address: shape check only (`local@domain` with a dot in
/// the domain part), not a full RFC 5321 parse.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::Validation("Invalid email address".to_string()));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(CoreError::Validation("Invalid email address".to_string()));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(CoreError::Validation("Invalid email address".to_string()));
    }
    Ok(())
}

/// Validate that a password meets the minimum length requirement.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}
