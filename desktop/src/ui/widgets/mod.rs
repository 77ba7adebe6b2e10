//! # Reusable UI Widgets
//!
//! Components used by the exchange screen.

pub mod asset_picker;
pub mod contact;
pub mod forms;
pub mod header;
pub mod notifications;
pub mod summary;
