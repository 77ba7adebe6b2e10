//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used by configuration loading, catalog
//! validation and the few exchange operations that can reject a request.
//!
//! ## Design
//!
//! - **Single Error Type**: All modules use `AppError`
//! - **Descriptive Messages**: Each variant carries a context string
//! - **Form input is not an error**: partial or invalid form input yields an unverified or
//!   disabled state, never an `AppError`
//!
//! ## Error Categories
//!
//! 1. **Startup**
//!    - [`Config`](AppError::Config): environment missing or malformed
//!    - [`Catalog`](AppError::Catalog): static tables inconsistent
//!    - [`Io`](AppError::Io) / [`Decoding`](AppError::Decoding): catalog file unreadable
//! 2. **Caller mistakes**
//!    - [`InvalidInput`](AppError::InvalidInput): e.g. selecting an asset index that does not
//!      exist
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn check_rate(rate: u64) -> Result<u64> {
//!     if rate == 0 {
//!         return Err(AppError::Catalog("rate must be positive".to_string()));
//!     }
//!     Ok(rate)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type for the exchange core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Static catalog failed validation.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid request from the caller (not from form input).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem error while reading a catalog file.
    #[error("IO error: {0}")]
    Io(String),

    /// Catalog file could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} has an invalid format", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Catalog("duplicate symbol BTC".to_string()).to_string(),
            "Catalog error: duplicate symbol BTC"
        );
        assert_eq!(
            AppError::InvalidInput("asset index 9 out of range".to_string()).to_string(),
            "Invalid input: asset index 9 out of range"
        );
    }

    #[test]
    fn test_from_env_error() {
        let err: AppError = lib_utils::envs::Error::WrongFormat("EXCHANGE_USD_RATE").into();
        assert_eq!(
            err,
            AppError::Config("EXCHANGE_USD_RATE has an invalid format".to_string())
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u64>("not json").unwrap_err();
        assert!(matches!(AppError::from(json_err), AppError::Decoding(_)));
    }
}
