//! # Wallet Handlers
//!
//! The wallet button and the completion of the simulated connect delay.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Notification};
use async_channel::Sender;
use lib_core::model::{ConnectAttempt, WalletToggle};
use lib_core::scheduler::Job;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle wallet button click
///
/// Internal handler function - use [`crate::app::App::handle_wallet_click`] instead.
///
/// When a connect starts, the scheduled job only posts
/// [`AppEvent::WalletConnectElapsed`]; the state change happens later on the UI thread.
pub(crate) fn handle_wallet_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) -> WalletToggle {
    let mut state = state.write();
    state.session.toggle_wallet(move |attempt| -> Job {
        Box::new(move || {
            if let Err(e) = event_tx.try_send(AppEvent::WalletConnectElapsed(attempt)) {
                tracing::warn!(attempt = attempt.0, error = %e, "Failed to post wallet connect completion");
            }
        })
    })
}

/// Apply an elapsed connect delay.
pub(crate) fn handle_wallet_connect_elapsed(state: Arc<RwLock<AppState>>, attempt: ConnectAttempt) {
    let mut state = state.write();
    if let Some(notice) = state.session.complete_wallet_connect(attempt) {
        state.notify(Notification::success(notice.message));
        state.needs_immediate_repaint = true;
    }
}
