//! # Exchange Form Handlers
//!
//! Asset picker, bank form, amount field, submission and the contact dialog.

use crate::app::state::{AppState, Notification};
use lib_core::model::gate::summary_message;
use parking_lot::RwLock;
use std::sync::Arc;

/// Internal handler function - use [`crate::app::App::handle_asset_select`] instead.
pub(crate) fn handle_asset_select(state: Arc<RwLock<AppState>>, index: usize) -> lib_core::Result<()> {
    let mut state = state.write();
    state.session.select_asset(index)
}

pub(crate) fn handle_dropdown_toggle(state: Arc<RwLock<AppState>>) {
    state.write().session.toggle_dropdown();
}

/// A pointer press somewhere in the window while the picker may be open.
pub(crate) fn handle_pointer_down(state: Arc<RwLock<AppState>>, inside_picker: bool) {
    let mut state = state.write();
    if state.session.form().is_dropdown_open() {
        state.session.pointer_down(inside_picker);
    }
}

pub(crate) fn handle_account_number_change(state: Arc<RwLock<AppState>>, raw: &str) {
    state.write().session.set_account_number(raw);
}

pub(crate) fn handle_bank_select(state: Arc<RwLock<AppState>>, bank_id: Option<&str>) {
    state.write().session.select_bank(bank_id);
}

pub(crate) fn handle_amount_change(state: Arc<RwLock<AppState>>, raw: &str) {
    state.write().session.set_naira_amount(raw);
}

/// Submit button click. No-op while the gate is closed.
pub(crate) fn handle_submit_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let Some(summary) = state.session.submit() else {
        return;
    };

    state.notify(Notification::success(summary_message(&summary)));
    state.last_summary = Some(summary);
}

pub(crate) fn handle_contact_toggle(state: Arc<RwLock<AppState>>, open: bool) {
    let mut state = state.write();
    if state.contact_open != open {
        tracing::debug!(open, "Contact dialog toggled");
    }
    state.contact_open = open;
}

/// Back to a fresh form. A pending wallet connect is cancelled.
pub(crate) fn handle_reset(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session.reset();
    state.last_summary = None;
    state.contact_open = false;
}
