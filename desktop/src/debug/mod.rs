//! # Debugging and Tracing Infrastructure
//!
//! File-based logging for the exchange desk.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/exchange-debug.log` (daily rotation)
//! - **Console mirror**: Same events on stderr, with ANSI colours
//! - **Panic hook**: Location, message and backtrace logged before the default hook runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup
//! desktop::debug::init();
//!
//! // Log with structured fields
//! tracing::info!(asset = "BTC", "Asset selected");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `desktop=debug,info`)
//! - `EXCHANGE_LOG_DIR`: Log directory (default: `logs`)
//! - `EXCHANGE_LOG_STDERR`: Mirror to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize the debugging system
///
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
