//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, the delayed wallet-connect
//! timer and the exchange session state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains timer events every frame       │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                              │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - ExchangeSession (form, verification, wallet)      │   │
//! │  │  - Lock held for one action at a time                │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────▲─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────┴─────────────────────────────────────┐
//! │              Tokio runtime (TokioScheduler)                 │
//! │  sleep(delay) → AppEvent::WalletConnectElapsed(attempt)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The timer never touches the state. Every mutation happens on the UI thread, either from a
//! user action or from an event drained in [`App::on_tick`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use desktop::app::App;
//!
//! let mut app = App::new();
//!
//! // In egui update loop:
//! app.on_tick();
//! app.handle_account_number_change("0123456789");
//! app.handle_bank_select(Some("gtb"));
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;
pub mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use lib_core::config::{core_config, Config};
use lib_core::model::{ExchangeSession, WalletToggle};
use lib_core::scheduler::Scheduler;
use parking_lot::RwLock;

use crate::ui::widgets::notifications::NotificationManager;

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for reading (shared lock, multiple readers)
    /// - Use `write()` for writing (exclusive lock, single writer)
    /// - Hold locks for minimal duration to prevent UI freezing
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for timer completions.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender, cloned into scheduled jobs.
    event_tx: Sender<AppEvent>,

    /// Toasts for wallet and submission confirmations.
    pub(crate) notifications: NotificationManager,

    /// Theme is applied on the first frame.
    pub(crate) theme_applied: bool,
}

impl App {
    /// Create the application from the global configuration, with timers on the
    /// process-wide Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if [`lib_core::config::init_config`] has not been called.
    pub fn new() -> Self {
        Self::with_scheduler(core_config(), Arc::new(tasks::TokioScheduler::new()))
    }

    /// Create the application with an explicit configuration and scheduler.
    pub fn with_scheduler(config: &Config, scheduler: Arc<dyn Scheduler>) -> Self {
        let session = ExchangeSession::from_config(config, scheduler);
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            assets = config.catalog.assets().len(),
            banks = config.catalog.banks().len(),
            connect_delay_ms = config.connect_delay.as_millis() as u64,
            "App state initialized"
        );

        App {
            state: Arc::new(RwLock::new(AppState::new(session))),
            event_rx,
            event_tx,
            notifications: NotificationManager::new(),
            theme_applied: false,
        }
    }

    /// Called every frame to process timer events.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut events_processed = 0;

        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            events_processed += 1;
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: Processed events from event channel");
        }
        events_processed
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Notifications queued by handlers, oldest first.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    /// Snapshot for rendering one frame.
    pub fn view(&self) -> ExchangeView {
        ExchangeView::capture(&self.state.read())
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle asset row click in the picker
    pub fn handle_asset_select(&mut self, index: usize) {
        if let Err(e) = handlers::exchange::handle_asset_select(self.state.clone(), index) {
            self.state.write().notify(Notification::warning(e.to_string()));
        }
    }

    /// Handle asset picker trigger click
    pub fn handle_dropdown_toggle(&mut self) {
        handlers::exchange::handle_dropdown_toggle(self.state.clone());
    }

    /// Handle a pointer press; `inside_picker` is whether it hit the picker region
    pub fn handle_pointer_down(&mut self, inside_picker: bool) {
        handlers::exchange::handle_pointer_down(self.state.clone(), inside_picker);
    }

    /// Handle account number field edit
    pub fn handle_account_number_change(&mut self, raw: &str) {
        handlers::exchange::handle_account_number_change(self.state.clone(), raw);
    }

    /// Handle bank selection
    pub fn handle_bank_select(&mut self, bank_id: Option<&str>) {
        handlers::exchange::handle_bank_select(self.state.clone(), bank_id);
    }

    /// Handle naira amount field edit
    pub fn handle_amount_change(&mut self, raw: &str) {
        handlers::exchange::handle_amount_change(self.state.clone(), raw);
    }

    /// Handle submit button click
    pub fn handle_submit_click(&mut self) {
        handlers::exchange::handle_submit_click(self.state.clone());
    }

    /// Handle wallet button click
    pub fn handle_wallet_click(&mut self) -> WalletToggle {
        handlers::wallet::handle_wallet_click(self.state.clone(), self.event_tx.clone())
    }

    /// Open or close the Contact Us dialog
    pub fn handle_contact_toggle(&mut self, open: bool) {
        handlers::exchange::handle_contact_toggle(self.state.clone(), open);
    }

    /// Reset the form to its defaults
    pub fn handle_reset(&mut self) {
        handlers::exchange::handle_reset(self.state.clone());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            crate::ui::theme::Theme::apply_exchange_theme(ctx);
            self.theme_applied = true;
        }

        self.on_tick();

        crate::ui::render(ctx, self);

        for notification in self.take_notifications() {
            self.notifications.push(notification);
        }
        self.notifications.show(ctx);

        let (connecting, repaint_now) = {
            let mut state = self.state.write();
            let repaint_now = std::mem::take(&mut state.needs_immediate_repaint);
            (state.session.form().is_wallet_connecting(), repaint_now)
        };
        if repaint_now {
            ctx.request_repaint();
        } else if connecting {
            // Keep polling the event channel while a timer is pending.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::config::DEFAULT_WALLET_ADDRESS;
    use lib_core::model::WalletStatus;
    use lib_core::scheduler::ManualScheduler;
    use std::time::Duration;

    fn test_app() -> (App, Arc<ManualScheduler>) {
        let scheduler = Arc::new(ManualScheduler::new());
        let app = App::with_scheduler(&Config::default(), scheduler.clone());
        (app, scheduler)
    }

    // ========== Initial State ==========

    #[test]
    fn test_initial_state() {
        let (app, _) = test_app();
        let view = app.view();

        assert_eq!(view.asset.symbol, "BTC");
        assert_eq!(view.wallet_label, "Connect Wallet");
        assert_eq!(view.submit_label, "Complete Account Verification");
        assert!(!view.can_submit);
        assert!(!view.contact_open);
        assert!(app.take_notifications().is_empty());
    }

    // ========== Form Handlers ==========

    #[test]
    fn test_form_handlers_drive_session() {
        let (mut app, _) = test_app();

        app.handle_dropdown_toggle();
        assert!(app.view().form.is_dropdown_open());
        app.handle_asset_select(3);
        assert_eq!(app.view().asset.symbol, "SOL");
        assert!(!app.view().form.is_dropdown_open());

        app.handle_account_number_change("0123456789");
        app.handle_bank_select(Some("gtb"));
        app.handle_amount_change("246800");

        let view = app.view();
        assert_eq!(view.bank_label.as_deref(), Some("GTBank"));
        assert_eq!(
            view.form.verification.as_ref().map(|v| v.name.as_str()),
            Some("ADEBAYO JOHNSON OLUMIDE")
        );
        assert_eq!(view.form.naira_amount, "246,800");
        assert_eq!(view.conversion.asset_display(), "1.00000000");
        assert!(view.can_submit);
        assert_eq!(view.submit_label, "Proceed to Exchange");
    }

    #[test]
    fn test_rejected_asset_selection_warns() {
        let (mut app, _) = test_app();
        app.handle_asset_select(42);

        assert_eq!(app.view().asset.symbol, "BTC");
        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Warning);
    }

    #[test]
    fn test_pointer_outside_closes_picker() {
        let (mut app, _) = test_app();
        app.handle_dropdown_toggle();
        app.handle_pointer_down(true);
        assert!(app.view().form.is_dropdown_open());
        app.handle_pointer_down(false);
        assert!(!app.view().form.is_dropdown_open());
    }

    #[test]
    fn test_submit_queues_summary() {
        let (mut app, _) = test_app();
        app.handle_account_number_change("0123456789");
        app.handle_bank_select(Some("gtb"));
        app.handle_amount_change("1234567");
        app.handle_submit_click();

        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Success);
        assert_eq!(
            notifications[0].message,
            "Transaction initiated!\n\nSending: 0.01627857 BTC\nReceiving: ₦1,234,567\nAccount: 0123456789\nBank: GTBank"
        );
        assert!(app.state.read().last_summary.is_some());
    }

    #[test]
    fn test_last_summary_shown_until_reset() {
        let (mut app, _) = test_app();
        app.handle_account_number_change("0123456789");
        app.handle_bank_select(Some("gtb"));
        app.handle_amount_change("148125");
        assert!(app.view().last_summary.is_none());

        app.handle_submit_click();
        let shown = app.view().last_summary.expect("summary after submit");
        assert_eq!(shown.bank_label, "GTBank");
        assert_eq!(shown.naira_amount, 148_125.0);
        assert_eq!(
            app.state.read().last_summary.as_ref().map(|s| s.reference.clone()),
            Some(shown.reference)
        );

        app.handle_reset();
        let view = app.view();
        assert!(view.last_summary.is_none());
        assert_eq!(view.form.account_number, "");
        assert_eq!(view.form.naira_amount, "");
        assert!(!view.can_submit);
    }

    #[test]
    fn test_submit_with_closed_gate_does_nothing() {
        let (mut app, _) = test_app();
        app.handle_account_number_change("0123456789");
        app.handle_submit_click();

        assert!(app.take_notifications().is_empty());
        assert!(app.state.read().last_summary.is_none());
    }

    // ========== Wallet Events ==========

    #[test]
    fn test_wallet_connect_round_trip_through_event_channel() {
        let (mut app, scheduler) = test_app();

        assert!(matches!(app.handle_wallet_click(), WalletToggle::Started(_)));
        assert_eq!(app.view().wallet_label, "Connecting...");
        assert_eq!(app.handle_wallet_click(), WalletToggle::Ignored);
        assert_eq!(scheduler.pending(), 1);

        // Timer fired, but nothing changes until the UI thread drains the channel.
        scheduler.advance(Duration::from_millis(2000));
        assert_eq!(app.state.read().session.form().wallet, WalletStatus::Connecting);

        assert_eq!(app.on_tick(), 1);
        assert_eq!(
            app.state.read().session.form().wallet,
            WalletStatus::Connected {
                address: DEFAULT_WALLET_ADDRESS.to_string()
            }
        );
        assert_eq!(app.view().wallet_label, "0x1A2B...EF12");

        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].message.contains(DEFAULT_WALLET_ADDRESS));

        assert_eq!(app.handle_wallet_click(), WalletToggle::Disconnected);
        assert_eq!(app.view().wallet_label, "Connect Wallet");
    }

    #[test]
    fn test_stale_event_after_reset_is_ignored() {
        let (mut app, scheduler) = test_app();

        let WalletToggle::Started(attempt) = app.handle_wallet_click() else {
            panic!("expected a started timer");
        };
        app.handle_reset();
        assert_eq!(scheduler.advance(Duration::from_secs(5)), 0);

        // A completion already in flight when the reset happened.
        app.event_tx
            .try_send(AppEvent::WalletConnectElapsed(attempt))
            .unwrap();
        assert_eq!(app.on_tick(), 1);
        assert_eq!(app.state.read().session.form().wallet, WalletStatus::Disconnected);
        assert!(app.take_notifications().is_empty());
    }

    #[test]
    fn test_dropping_app_cancels_pending_connect() {
        let (mut app, scheduler) = test_app();
        app.handle_wallet_click();
        assert_eq!(scheduler.pending(), 1);

        drop(app);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_contact_dialog_toggle() {
        let (mut app, _) = test_app();
        app.handle_contact_toggle(true);
        assert!(app.view().contact_open);
        app.handle_contact_toggle(false);
        assert!(!app.view().contact_open);
    }
}
