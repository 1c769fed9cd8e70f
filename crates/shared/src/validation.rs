//! Common validation utilities.

use validator::ValidationError;

/// Maximum accepted tax percentage.
const MAX_PERCENTAGE: f64 = 100.0;

/// Validates that a percentage is a finite value between 0 and 100.
pub fn validate_percentage(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=MAX_PERCENTAGE).contains(&value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("percentage_range");
        err.message = Some("Percentage must be between 0 and 100".into());
        Err(err)
    }
}

/// Validates a phone number loosely: digits plus the usual separators,
/// with at least 7 digits. A blank value counts as "not given".
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Ok(());
    }
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')' | '.'));
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();

    if allowed && digits >= 7 {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone number is not valid".into());
        Err(err)
    }
}

/// Returns true when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trims the value and maps blank strings to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
