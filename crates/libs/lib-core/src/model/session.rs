//! # Exchange Session
//!
//! [`ExchangeSession`] owns the page's [`FormState`] and is the only way to mutate it. Every
//! action commits its change and, when the account number or bank changed, re-runs
//! verification before returning, so a reader never observes a stale verification result.
//!
//! Derived amounts are not stored; call [`ExchangeSession::conversion`].
//!
//! ## Lifecycle
//!
//! ```rust
//! use std::sync::Arc;
//! use lib_core::config::Config;
//! use lib_core::model::ExchangeSession;
//! use lib_core::scheduler::ManualScheduler;
//!
//! let mut session = ExchangeSession::from_config(&Config::default(), Arc::new(ManualScheduler::new()));
//! session.set_account_number("0123456789");
//! session.select_bank(Some("gtb"));
//! session.set_naira_amount("1234567");
//!
//! assert_eq!(session.form().naira_amount, "1,234,567");
//! assert!(session.form().verification.is_some());
//! assert!(session.can_submit());
//! ```

use std::sync::Arc;
use std::time::Duration;

use shared::dto::exchange::{Asset, TransferSummary, VerifiedAccount, WalletNotice};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::model::conversion::Conversion;
use crate::model::dropdown::Dropdown;
use crate::model::gate::{self, SummaryInput};
use crate::model::verification;
use crate::model::wallet::{ConnectAttempt, WalletConnector, WalletStatus, WalletToggle};
use crate::scheduler::{Job, Scheduler};

/// User-entered values plus the stored verification result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Index into the catalog's asset list
    pub asset_index: usize,
    /// 0-10 ASCII digits
    pub account_number: String,
    pub bank_id: Option<String>,
    /// Grouped digits, at most 12 of them
    pub naira_amount: String,
    pub wallet: WalletStatus,
    pub dropdown: Dropdown,
    pub verification: Option<VerifiedAccount>,
}

impl FormState {
    pub fn is_wallet_connected(&self) -> bool {
        self.wallet.is_connected()
    }

    pub fn is_wallet_connecting(&self) -> bool {
        self.wallet.is_connecting()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown.is_open()
    }
}

/// Reactive state core of the exchange page.
#[derive(Debug)]
pub struct ExchangeSession {
    catalog: Arc<Catalog>,
    form: FormState,
    wallet: WalletConnector,
}

impl ExchangeSession {
    pub fn new(
        catalog: Arc<Catalog>,
        scheduler: Arc<dyn Scheduler>,
        connect_delay: Duration,
        wallet_address: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            form: FormState::default(),
            wallet: WalletConnector::new(scheduler, connect_delay, wallet_address),
        }
    }

    pub fn from_config(config: &Config, scheduler: Arc<dyn Scheduler>) -> Self {
        Self::new(
            Arc::clone(&config.catalog),
            scheduler,
            config.connect_delay,
            config.wallet_address.clone(),
        )
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn selected_asset(&self) -> &Asset {
        // Index is validated on every selection and the catalog is never empty.
        &self.catalog.assets()[self.form.asset_index]
    }

    pub fn selected_bank_label(&self) -> Option<&str> {
        self.form
            .bank_id
            .as_deref()
            .and_then(|id| self.catalog.bank_label(id))
    }

    // region:    --- Asset picker

    /// Select an asset by index and close the picker.
    ///
    /// # Errors
    ///
    /// [`AppError::InvalidInput`] if `index` is outside the asset list; state is unchanged.
    pub fn select_asset(&mut self, index: usize) -> Result<()> {
        let Some(asset) = self.catalog.asset(index) else {
            tracing::warn!(index, assets = self.catalog.assets().len(), "Rejected asset selection");
            return Err(AppError::InvalidInput(format!(
                "asset index {} out of range (0..{})",
                index,
                self.catalog.assets().len()
            )));
        };

        tracing::debug!(index, symbol = %asset.symbol, "Asset selected");
        self.form.asset_index = index;
        self.form.dropdown.close();
        Ok(())
    }

    pub fn toggle_dropdown(&mut self) {
        self.form.dropdown.toggle();
        tracing::debug!(open = self.form.dropdown.is_open(), "Asset picker toggled");
    }

    pub fn close_dropdown(&mut self) {
        self.form.dropdown.close();
    }

    /// Report a pointer press; `inside` is whether it landed within the picker.
    pub fn pointer_down(&mut self, inside: bool) {
        if self.form.dropdown.pointer_down(inside) {
            tracing::debug!("Asset picker closed by outside press");
        }
    }

    // endregion: --- Asset picker

    // region:    --- Bank form

    /// Replace the account number with the sanitized form of `raw`.
    pub fn set_account_number(&mut self, raw: &str) {
        self.form.account_number = lib_utils::sanitize_account_number(raw);
        tracing::debug!(len = self.form.account_number.len(), "Account number updated");
        self.reverify();
    }

    /// Select a bank by id, or clear the selection with `None`.
    pub fn select_bank(&mut self, bank_id: Option<&str>) {
        self.form.bank_id = bank_id.map(str::to_string);
        tracing::debug!(bank_id = ?self.form.bank_id, "Bank selected");
        self.reverify();
    }

    fn reverify(&mut self) {
        let result = verification::evaluate(
            &self.catalog,
            &self.form.account_number,
            self.form.bank_id.as_deref(),
        );

        if result != self.form.verification {
            match &result {
                Some(record) => tracing::info!(holder = %record.name, bank = %record.bank, "Account verified"),
                None => tracing::info!("Account verification cleared"),
            }
        }
        self.form.verification = result;
    }

    // endregion: --- Bank form

    // region:    --- Amount

    /// Replace the naira amount with the formatted form of `raw`.
    pub fn set_naira_amount(&mut self, raw: &str) {
        self.form.naira_amount = lib_utils::format_naira_input(raw);
        tracing::debug!(amount = %self.form.naira_amount, "Naira amount updated");
    }

    pub fn conversion(&self) -> Conversion {
        Conversion::compute(
            &self.form.naira_amount,
            self.selected_asset(),
            self.catalog.usd_rate(),
        )
    }

    // endregion: --- Amount

    // region:    --- Submission

    pub fn can_submit(&self) -> bool {
        gate::can_submit(
            &self.form.account_number,
            self.form.bank_id.as_deref(),
            self.conversion().naira,
        )
    }

    pub fn submit_label(&self) -> &'static str {
        gate::submit_label(self.can_submit())
    }

    /// Produce the confirmation summary, or `None` while the gate is closed.
    pub fn submit(&self) -> Option<TransferSummary> {
        if !self.can_submit() {
            tracing::debug!("Submit pressed while gate closed");
            return None;
        }

        let conversion = self.conversion();
        let asset = self.selected_asset();
        let bank_label = match self.selected_bank_label() {
            Some(label) => label,
            None => self.form.bank_id.as_deref().unwrap_or_default(),
        };

        let summary = gate::build_summary(
            SummaryInput {
                asset_symbol: &asset.symbol,
                asset_amount: conversion.asset_amount,
                naira_amount: conversion.naira,
                account_number: &self.form.account_number,
                bank_label,
            },
            lib_utils::now_utc(),
        );

        tracing::info!(
            reference = %summary.reference,
            created_at = %lib_utils::format_time(summary.created_at),
            asset = %summary.asset_symbol,
            naira = summary.naira_amount,
            verified = self.form.verification.is_some(),
            "Transfer summary produced"
        );
        Some(summary)
    }

    // endregion: --- Submission

    // region:    --- Wallet

    /// Wallet button press. `on_elapsed` builds the job run when the connect delay passes;
    /// that job must eventually lead to [`complete_wallet_connect`](Self::complete_wallet_connect).
    pub fn toggle_wallet<F>(&mut self, on_elapsed: F) -> WalletToggle
    where
        F: FnOnce(ConnectAttempt) -> Job,
    {
        self.wallet.toggle(&mut self.form.wallet, on_elapsed)
    }

    /// Apply an elapsed connect delay. Returns the confirmation notice, or `None` if stale.
    pub fn complete_wallet_connect(&mut self, attempt: ConnectAttempt) -> Option<WalletNotice> {
        self.wallet.settle(&mut self.form.wallet, attempt)
    }

    pub fn wallet_button_label(&self) -> String {
        self.form.wallet.button_label()
    }

    pub fn has_pending_connect(&self) -> bool {
        self.wallet.has_pending()
    }

    // endregion: --- Wallet

    /// Back to defaults. Cancels a pending connect.
    pub fn reset(&mut self) {
        self.wallet.cancel_pending();
        self.form = FormState::default();
        tracing::info!("Exchange session reset");
    }
}
