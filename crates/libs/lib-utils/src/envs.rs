//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! Every setting has a default, so unset or blank variables read as absent and only
//! malformed values surface as errors.

use std::env;
use std::str::FromStr;

/// Get an environment variable, treating unset and blank values as absent.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional environment variable. `Ok(None)` when unset or blank.
pub fn get_env_parse_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_opt(name) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::WrongFormat(name)),
        None => Ok(None),
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_env_is_absent() {
        assert_eq!(get_env_opt("LIB_UTILS_TEST_SURELY_UNSET_VAR"), None);
        assert_eq!(
            get_env_parse_opt::<u64>("LIB_UTILS_TEST_SURELY_UNSET_VAR"),
            Ok(None)
        );
    }

    #[test]
    fn test_malformed_env_is_wrong_format() {
        env::set_var("LIB_UTILS_TEST_MALFORMED_NUMBER", " 12x ");
        assert_eq!(
            get_env_parse_opt::<u64>("LIB_UTILS_TEST_MALFORMED_NUMBER"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_MALFORMED_NUMBER"))
        );

        env::set_var("LIB_UTILS_TEST_MALFORMED_NUMBER", " 42 ");
        assert_eq!(
            get_env_parse_opt::<u64>("LIB_UTILS_TEST_MALFORMED_NUMBER"),
            Ok(Some(42))
        );
        env::remove_var("LIB_UTILS_TEST_MALFORMED_NUMBER");
    }
}
