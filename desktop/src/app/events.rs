//! # Application Events
//!
//! Event types for communication between background timers and the main thread.

use lib_core::model::ConnectAttempt;

/// Async task results sent to main thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The simulated wallet connect delay elapsed
    WalletConnectElapsed(ConnectAttempt),
}
