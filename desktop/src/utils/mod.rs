//! # Utility Functions
//!
//! Shared utility functions used across the desktop application.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Process-wide Tokio runtime for timers
//!
//! ## Related Modules
//!
//! - [`lib_utils`]: Input formatting and number rendering
//! - [`shared::utils`]: Address formatting

pub mod runtime;
