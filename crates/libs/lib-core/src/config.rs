//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Environment
//!
//! | Variable | Default |
//! |----------|---------|
//! | `EXCHANGE_CATALOG_PATH` | built-in catalog |
//! | `EXCHANGE_USD_RATE` | catalog value |
//! | `WALLET_CONNECT_DELAY_MS` | `2000` |
//! | `WALLET_PLACEHOLDER_ADDRESS` | [`DEFAULT_WALLET_ADDRESS`] |
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! let delay = config.connect_delay;
//! ```
//!
//! The config must be initialized once at application startup using [`init_config()`].

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use lib_utils::envs::{get_env_opt, get_env_parse_opt};

use crate::catalog::Catalog;
use crate::error::{AppError, Result};

/// Placeholder address surfaced when the simulated wallet connects.
pub const DEFAULT_WALLET_ADDRESS: &str = "0x1A2B3C4D5E6F7890ABCDEF1234567890ABCDEF12";

/// Default simulated wallet connect delay in milliseconds.
pub const DEFAULT_CONNECT_DELAY_MS: u64 = 2000;

/// Upper bound for `WALLET_CONNECT_DELAY_MS`.
pub const MAX_CONNECT_DELAY_MS: u64 = 60_000;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Immutable catalog shared read-only with every session
    pub catalog: Arc<Catalog>,

    /// Delay between a connect request and the simulated connection
    ///
    /// Valid range: 1-60000 ms
    pub connect_delay: Duration,

    /// Address reported once the simulated wallet connects
    pub wallet_address: String,
}

impl Config {
    /// Build a configuration directly, without touching the environment.
    pub fn new(catalog: Catalog, connect_delay: Duration, wallet_address: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            connect_delay,
            wallet_address: wallet_address.into(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let catalog = match get_env_opt("EXCHANGE_CATALOG_PATH") {
            Some(path) => Catalog::from_json_file(&PathBuf::from(path))?,
            None => Catalog::builtin(),
        };

        let catalog = match get_env_parse_opt::<u64>("EXCHANGE_USD_RATE")? {
            Some(rate) => catalog.with_usd_rate(rate)?,
            None => catalog,
        };

        let delay_ms = get_env_parse_opt::<u64>("WALLET_CONNECT_DELAY_MS")?
            .unwrap_or(DEFAULT_CONNECT_DELAY_MS);

        let wallet_address = get_env_opt("WALLET_PLACEHOLDER_ADDRESS")
            .unwrap_or_else(|| DEFAULT_WALLET_ADDRESS.to_string());

        Ok(Self::new(catalog, Duration::from_millis(delay_ms), wallet_address))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let delay_ms = u64::try_from(self.connect_delay.as_millis()).unwrap_or(u64::MAX);
        lib_utils::validate_range(delay_ms, 1, MAX_CONNECT_DELAY_MS, "WALLET_CONNECT_DELAY_MS")
            .map_err(AppError::Config)?;

        lib_utils::validate_not_empty(&self.wallet_address, "WALLET_PLACEHOLDER_ADDRESS")
            .map_err(AppError::Config)?;

        if self.catalog.usd_rate() == 0 {
            return Err(AppError::Config("EXCHANGE_USD_RATE must be positive".to_string()));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            Catalog::builtin(),
            Duration::from_millis(DEFAULT_CONNECT_DELAY_MS),
            DEFAULT_WALLET_ADDRESS,
        )
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// Reads `.env` if present, then the environment. Call once at startup, before the first
/// session is created.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - The catalog file cannot be read or fails validation
/// - Config has already been initialized
pub fn init_config() -> Result<&'static Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        assets = config.catalog.assets().len(),
        banks = config.catalog.banks().len(),
        usd_rate = config.catalog.usd_rate(),
        connect_delay_ms = config.connect_delay.as_millis() as u64,
        "Configuration loaded"
    );

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;

    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.connect_delay, Duration::from_millis(2000));
        assert_eq!(config.wallet_address, DEFAULT_WALLET_ADDRESS);
        assert_eq!(config.catalog.usd_rate(), 1650);
    }

    #[test]
    fn test_validate_delay_range() {
        let zero = Config::new(Catalog::builtin(), Duration::ZERO, DEFAULT_WALLET_ADDRESS);
        assert!(matches!(zero.validate(), Err(AppError::Config(_))));

        let long = Config::new(
            Catalog::builtin(),
            Duration::from_millis(MAX_CONNECT_DELAY_MS + 1),
            DEFAULT_WALLET_ADDRESS,
        );
        assert!(long.validate().is_err());

        let max = Config::new(
            Catalog::builtin(),
            Duration::from_millis(MAX_CONNECT_DELAY_MS),
            DEFAULT_WALLET_ADDRESS,
        );
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_validate_address() {
        let config = Config::new(Catalog::builtin(), Duration::from_millis(10), "   ");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
