//! Boundary validation utilities
//!
//! These checks run in the transport layer before a request reaches the
//! credential engine; the engine treats them as preconditions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum accepted password length (bcrypt input limit)
pub const PASSWORD_MAX_LENGTH: usize = 72;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Check whether an email address is well-formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate an email address, returning a field error on failure
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email", "Invalid email address"))
    }
}

/// Validate a password against the account password policy
///
/// The policy requires 8-72 characters with at least one digit, one
/// letter and one uppercase letter, and no whitespace.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let field = "password";

    if password.len() < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::new(
            field,
            format!("Password must be at least {} characters", PASSWORD_MIN_LENGTH),
        ));
    }
    if password.len() > PASSWORD_MAX_LENGTH {
        return Err(ValidationError::new(
            field,
            format!("Password must be at most {} characters", PASSWORD_MAX_LENGTH),
        ));
    }
    if password.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::new(
            field,
            "Password cannot contain whitespace characters",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            "Password must contain at least one digit",
        ));
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::new(
            field,
            "Password must contain at least one letter",
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(ValidationError::new(
            field,
            "Password must contain at least one uppercase letter",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(is_valid_email("UPPER@EXAMPLE.COM"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user @example.com"));
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("Secret123").is_ok());
        assert!(validate_password("Aa1aaaaa").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let err = validate_password("Aa1").unwrap_err();
        assert_eq!(err.field, "password");
        assert!(err.message.contains("at least 8"));
    }

    #[test]
    fn test_password_too_long() {
        let long = format!("Aa1{}", "a".repeat(80));
        let err = validate_password(&long).unwrap_err();
        assert!(err.message.contains("at most 72"));
    }

    #[test]
    fn test_password_missing_digit() {
        let err = validate_password("Aaaaaaaa").unwrap_err();
        assert!(err.message.contains("digit"));
    }

    #[test]
    fn test_password_missing_uppercase() {
        let err = validate_password("aaaa1aaa").unwrap_err();
        assert!(err.message.contains("uppercase"));
    }

    #[test]
    fn test_password_whitespace_rejected() {
        let err = validate_password("Aa1 aaaa").unwrap_err();
        assert!(err.message.contains("whitespace"));
    }
}
