//! # Exchange Model
//!
//! - [`session`] - `ExchangeSession`, the only writer of the form state
//! - [`verification`] - account/bank matching against the catalog
//! - [`conversion`] - amounts derived from the naira input
//! - [`wallet`] - the simulated wallet connection state machine
//! - [`dropdown`] - asset picker open/closed state
//! - [`gate`] - submission gate and confirmation summary

pub mod conversion;
pub mod dropdown;
pub mod gate;
pub mod session;
pub mod verification;
pub mod wallet;

pub use conversion::Conversion;
pub use dropdown::Dropdown;
pub use session::{ExchangeSession, FormState};
pub use wallet::{ConnectAttempt, WalletStatus, WalletToggle};
