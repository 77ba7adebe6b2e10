//! # Utilities Library
//!
//! Shared utility functions for numeric input formatting, environment variables, time,
//! and validation.

pub mod envs;
pub mod numeric;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env_opt, get_env_parse_opt};
pub use numeric::{
    format_fixed, format_grouped, format_naira_input, parse_grouped_amount,
    sanitize_account_number,
};
pub use time::{format_time, now_utc};
pub use validation::{is_complete_account_number, validate_not_empty, validate_range};
