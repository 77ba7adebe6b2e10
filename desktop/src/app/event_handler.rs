//! # Event Handler
//!
//! Applies [`AppEvent`] messages drained from the event channel to the application state.
//! Runs on the UI thread only.

use crate::app::{handlers, App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Acquires the write lock per event, for the duration of that event only.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::debug!(event = ?event, "Processing app event");

        match event {
            AppEvent::WalletConnectElapsed(attempt) => {
                handlers::wallet::handle_wallet_connect_elapsed(self.state.clone(), attempt);
            }
        }
    }
}
