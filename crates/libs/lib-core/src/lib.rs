//! # Core Library
//!
//! Catalog, configuration, error type, scheduling seam and the exchange session state.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod scheduler;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, Result};
pub use model::{ExchangeSession, FormState, WalletStatus};
pub use scheduler::{ManualScheduler, ScheduledTask, Scheduler};
