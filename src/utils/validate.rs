//! Validation of user-entered year and date values.
//!
//! A year is either empty or exactly four ASCII digits. Anything else is
//! rejected so the caller can ask again.

use thiserror::Error;

/// Validation error types
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid year: {0}")]
    InvalidYear(String),
}

/// Validate a publication year.
///
/// Returns `Ok(None)` for blank input (the year is skipped), `Ok(Some(year))`
/// for a four-digit numeral, or `Err(ValidationError)` otherwise.
pub fn validate_year(input: &str) -> Result<Option<String>, ValidationError> {
    let year = input.trim();

    if year.is_empty() {
        return Ok(None);
    }

    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Ok(Some(year.to_string()))
    } else {
        Err(ValidationError::InvalidYear(year.to_string()))
    }
}

/// Resolve a publication date from its parts.
///
/// Produces `"D Month YYYY"` when a year, month and day are all given, the
/// bare year when only the year is known, and an empty string without a year.
pub fn resolve_date(year: &str, month: &str, day: &str) -> String {
    let (year, month, day) = (year.trim(), month.trim(), day.trim());

    if year.is_empty() {
        return String::new();
    }

    if !day.is_empty() && !month.is_empty() {
        format!("{} {} {}", day, month, year)
    } else {
        year.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_year_valid() {
        assert_eq!(validate_year("2020"), Ok(Some("2020".to_string())));
        assert_eq!(validate_year(" 1999 "), Ok(Some("1999".to_string())));
    }

    #[test]
    fn test_validate_year_empty() {
        assert_eq!(validate_year(""), Ok(None));
        assert_eq!(validate_year("   "), Ok(None));
    }

    #[test]
    fn test_validate_year_rejects() {
        for input in ["99", "20201", "20a0", "two", "-202", "２０２０"] {
            assert!(
                matches!(validate_year(input), Err(ValidationError::InvalidYear(_))),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_resolve_date() {
        assert_eq!(resolve_date("2021", "May", "5"), "5 May 2021");
        assert_eq!(resolve_date("2021", "May", ""), "2021");
        assert_eq!(resolve_date("2021", "", "5"), "2021");
        assert_eq!(resolve_date("", "May", "5"), "");
    }
}
