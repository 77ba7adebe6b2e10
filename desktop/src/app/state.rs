//! # Application State Types
//!
//! The shared [`AppState`] behind `Arc<RwLock<_>>`, the notification queue entries, and the
//! per-frame [`ExchangeView`] snapshot the UI renders from.

use std::sync::Arc;

use lib_core::model::{Conversion, ExchangeSession, FormState};
use lib_core::Catalog;
use shared::dto::exchange::{Asset, TransferSummary};

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
}

/// A toast waiting to be shown by the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Exchange form, verification and wallet state
    pub session: ExchangeSession,
    /// Contact Us dialog visibility
    pub contact_open: bool,
    /// Most recent transfer summary
    pub last_summary: Option<TransferSummary>,
    /// Pending notifications to display
    pub pending_notifications: Vec<Notification>,
    /// Flag to request immediate repaint (set when a timer completion lands)
    pub needs_immediate_repaint: bool,
}

impl AppState {
    pub fn new(session: ExchangeSession) -> Self {
        Self {
            session,
            contact_open: false,
            last_summary: None,
            pending_notifications: Vec::new(),
            needs_immediate_repaint: false,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
    }
}

/// Read-only snapshot for one frame
///
/// Captured under a short read lock; rendering then runs without holding any lock.
#[derive(Debug, Clone)]
pub struct ExchangeView {
    pub catalog: Arc<Catalog>,
    pub form: FormState,
    pub asset: Asset,
    pub conversion: Conversion,
    pub bank_label: Option<String>,
    pub can_submit: bool,
    pub submit_label: &'static str,
    pub wallet_label: String,
    pub contact_open: bool,
    /// Most recent submitted transfer, until the form is reset
    pub last_summary: Option<TransferSummary>,
}

impl ExchangeView {
    pub fn capture(state: &AppState) -> Self {
        let session = &state.session;
        Self {
            catalog: Arc::clone(session.catalog()),
            form: session.form().clone(),
            asset: session.selected_asset().clone(),
            conversion: session.conversion(),
            bank_label: session.selected_bank_label().map(str::to_string),
            can_submit: session.can_submit(),
            submit_label: session.submit_label(),
            wallet_label: session.wallet_button_label(),
            contact_open: state.contact_open,
            last_summary: state.last_summary.clone(),
        }
    }
}
