//! # Event Handlers
//!
//! User action handlers organized by page area. Each takes the shared state, locks it for
//! the duration of one action, and delegates to the exchange session.

pub mod exchange;
pub mod wallet;
