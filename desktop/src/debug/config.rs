//! Debug configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "desktop=info,lib_core=info,warn";

/// Verbose filter used by the `debug-mode` feature.
pub const DEBUG_LOG_LEVEL: &str = "desktop=debug,lib_core=debug,info";

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "exchange-debug.log";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log file path
    pub log_file: PathBuf,
    /// Log level filter (e.g., "desktop=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Mirror log output to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        let log_dir = PathBuf::from("logs");
        Self {
            log_file: log_dir.join(LOG_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir,
            log_to_stderr: true,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `EXCHANGE_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`: filter directives
    /// - `EXCHANGE_LOG_STDERR`: `0` disables the stderr layer
    pub fn from_env() -> Self {
        let log_dir = lib_utils::get_env_opt("EXCHANGE_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_file: log_dir.join(LOG_FILE_NAME),
            log_level: lib_utils::get_env_opt("RUST_LOG")
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir,
            log_to_stderr: lib_utils::get_env_opt("EXCHANGE_LOG_STDERR")
                .map(|v| v != "0")
                .unwrap_or(true),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug")
    }
}

fn default_log_level() -> &'static str {
    if cfg!(feature = "debug-mode") {
        DEBUG_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}
