//! Scalar field validation for user requests.

use crate::error::AppError;
use regex::Regex;

// Same shape the gateway validators use: local part, '@', dotted domain.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Non-empty, ASCII letters only.
pub fn validate_alpha(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Validation(format!(
            "{} must contain only alphabetic characters",
            field
        )));
    }
    Ok(())
}

/// Syntactic email check.
pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    let re = Regex::new(EMAIL_PATTERN)
        .map_err(|_| AppError::Validation(format!("invalid pattern for {}", field)))?;
    if !re.is_match(value) {
        return Err(AppError::Validation(format!(
            "{} must be a valid email address",
            field
        )));
    }
    Ok(())
}

/// Exactly two ASCII letters.
pub fn validate_country(field: &str, value: &str) -> Result<(), AppError> {
    if value.len() != 2 {
        return Err(AppError::Validation(format!(
            "{} must be exactly 2 characters",
            field
        )));
    }
    validate_alpha(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_accepts_letters() {
        assert!(validate_alpha("first_name", "Margaret").is_ok());
        assert!(validate_alpha("first_name", "li").is_ok());
    }

    #[test]
    fn alpha_rejects_digits_spaces_and_empty() {
        assert!(validate_alpha("first_name", "R2D2").is_err());
        assert!(validate_alpha("first_name", "Anne Marie").is_err());
        assert!(validate_alpha("first_name", "").is_err());
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(validate_email("email", "ada@example.com").is_ok());
        assert!(validate_email("email", "dev.null+tag@mail.example.org").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(validate_email("email", "not-an-email").is_err());
        assert!(validate_email("email", "missing@tld").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "").is_err());
    }

    #[test]
    fn country_requires_two_letters() {
        assert!(validate_country("country", "PL").is_ok());
        assert!(validate_country("country", "nl").is_ok());
        assert!(validate_country("country", "USA").is_err());
        assert!(validate_country("country", "P1").is_err());
        assert!(validate_country("country", "P").is_err());
        assert!(validate_country("country", "").is_err());
    }
}
