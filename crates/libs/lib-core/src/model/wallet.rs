//! # Simulated Wallet Connection
//!
//! ```text
//! Disconnected --toggle--> Connecting --delay elapsed--> Connected
//!      ^                       |                            |
//!      |                  toggle ignored                    |
//!      +-------------------------toggle---------------------+
//! ```
//!
//! The delay runs on an injected [`Scheduler`]. The scheduled job only *reports* that the
//! delay elapsed; the owner of the state applies it via [`WalletConnector::settle`], tagged
//! with the [`ConnectAttempt`] it was started for, so late or cancelled completions are
//! recognisable.

use std::sync::Arc;
use std::time::Duration;

use shared::dto::exchange::WalletNotice;
use shared::utils::short_address;

use crate::scheduler::{Job, ScheduledTask, Scheduler};

/// Wallet button label while a connection is pending.
pub const CONNECTING_LABEL: &str = "Connecting...";

/// Wallet button label when disconnected.
pub const CONNECT_LABEL: &str = "Connect Wallet";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected { address: String },
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletStatus::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected { address } => Some(address),
            _ => None,
        }
    }

    pub fn button_label(&self) -> String {
        match self {
            WalletStatus::Disconnected => CONNECT_LABEL.to_string(),
            WalletStatus::Connecting => CONNECTING_LABEL.to_string(),
            WalletStatus::Connected { address } => short_address(address),
        }
    }
}

/// Identifies one connect request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectAttempt(pub u64);

/// Outcome of a wallet-button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletToggle {
    /// Timer started; the state is now `Connecting`.
    Started(ConnectAttempt),
    /// Already connecting; nothing scheduled.
    Ignored,
    /// Was connected; now disconnected.
    Disconnected,
}

/// Confirmation text shown when the simulated connection completes.
pub fn connected_message(address: &str) -> String {
    format!(
        "Wallet connected successfully!\n\nAddress: {}\nNetwork: Multi-chain support enabled",
        address
    )
}

/// Drives [`WalletStatus`] transitions over a [`Scheduler`].
pub struct WalletConnector {
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
    address: String,
    next_attempt: u64,
    pending: Option<(ConnectAttempt, ScheduledTask)>,
}

impl WalletConnector {
    pub fn new(scheduler: Arc<dyn Scheduler>, delay: Duration, address: impl Into<String>) -> Self {
        Self {
            scheduler,
            delay,
            address: address.into(),
            next_attempt: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Apply a button press to `status`.
    ///
    /// `on_elapsed` builds the job to run once the delay passes; it is only called when a
    /// timer is actually started.
    pub fn toggle<F>(&mut self, status: &mut WalletStatus, on_elapsed: F) -> WalletToggle
    where
        F: FnOnce(ConnectAttempt) -> Job,
    {
        match status {
            WalletStatus::Connecting => {
                tracing::debug!("Wallet connect requested while connecting, ignored");
                WalletToggle::Ignored
            }
            WalletStatus::Connected { .. } => {
                *status = WalletStatus::Disconnected;
                tracing::info!("Wallet disconnected");
                WalletToggle::Disconnected
            }
            WalletStatus::Disconnected => {
                let attempt = ConnectAttempt(self.next_attempt);
                self.next_attempt += 1;

                let task = self.scheduler.schedule(self.delay, on_elapsed(attempt));
                self.pending = Some((attempt, task));
                *status = WalletStatus::Connecting;

                tracing::info!(
                    attempt = attempt.0,
                    delay_ms = self.delay.as_millis() as u64,
                    "Wallet connecting"
                );
                WalletToggle::Started(attempt)
            }
        }
    }

    /// Apply a timer completion to `status`.
    ///
    /// Completes the connection only when `status` is `Connecting` and `attempt` is the
    /// pending one; anything else is stale and ignored.
    pub fn settle(&mut self, status: &mut WalletStatus, attempt: ConnectAttempt) -> Option<WalletNotice> {
        let current = self.pending.as_ref().map(|(pending, _)| *pending);
        if !status.is_connecting() || current != Some(attempt) {
            tracing::warn!(
                attempt = attempt.0,
                status = ?status,
                "Ignoring stale wallet connect completion"
            );
            return None;
        }

        self.pending = None;
        *status = WalletStatus::Connected {
            address: self.address.clone(),
        };
        tracing::info!(attempt = attempt.0, "Wallet connected");

        Some(WalletNotice {
            address: self.address.clone(),
            message: connected_message(&self.address),
        })
    }

    /// Cancel a pending timer, if any.
    pub fn cancel_pending(&mut self) {
        if let Some((attempt, task)) = self.pending.take() {
            task.cancel();
            tracing::debug!(attempt = attempt.0, "Cancelled pending wallet connect");
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for WalletConnector {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for WalletConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConnector")
            .field("delay", &self.delay)
            .field("address", &self.address)
            .field("pending", &self.pending.as_ref().map(|(attempt, _)| attempt))
            .finish()
    }
}
