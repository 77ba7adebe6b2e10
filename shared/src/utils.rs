//! # Shared Utility Functions
//!
//! Display helpers used by the exchange core and the desktop front end.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Keep the first N and last M characters with an ellipsis between
//! - [`short_address`] - Wallet-button form: `0x` plus four characters, then the last four
//!
//! ```rust
//! use shared::utils::short_address;
//!
//! let address = "0x1A2B3C4D5E6F7890ABCDEF1234567890ABCDEF12";
//! assert_eq!(short_address(address), "0x1A2B...EF12");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len` it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x1A2B3C4D5E6F7890ABCDEF1234567890ABCDEF12";
/// assert_eq!(format_address(addr, 4, 4), "0x1A...EF12");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();

    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten a hex wallet address for the connect button.
pub fn short_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x1A2B3C4D5E6F7890ABCDEF1234567890ABCDEF12";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 4, 4), "0x1A...EF12");
        assert_eq!(format_address(ADDR, 2, 2), "0x...12");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abcdefgh", 4, 4), "abcdefgh");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address(ADDR), "0x1A2B...EF12");
    }
}
