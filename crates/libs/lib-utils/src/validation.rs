//! # Validation Utilities
//!
//! Input validation helpers shared by configuration loading and the exchange form.

use crate::numeric::ACCOUNT_NUMBER_LEN;

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// A complete account number is exactly ten ASCII digits.
pub fn is_complete_account_number(value: &str) -> bool {
    value.len() == ACCOUNT_NUMBER_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validate that a value lies in `min..=max`.
pub fn validate_range(value: u64, min: u64, max: u64, field_name: &str) -> Result<(), String> {
    if value < min || value > max {
        Err(format!("{} must be between {} and {}", field_name, min, max))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("0x1A2B", "address").is_ok());
        assert_eq!(
            validate_not_empty("   ", "address"),
            Err("address cannot be empty".to_string())
        );
    }

    #[test]
    fn test_is_complete_account_number() {
        assert!(is_complete_account_number("0123456789"));
        assert!(!is_complete_account_number("012345678"));
        assert!(!is_complete_account_number("01234567890"));
        assert!(!is_complete_account_number("01234a6789"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(2000, 1, 60_000, "delay").is_ok());
        assert!(validate_range(0, 1, 60_000, "delay").is_err());
        assert!(validate_range(60_001, 1, 60_000, "delay").is_err());
    }
}
