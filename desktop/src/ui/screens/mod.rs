//! # Screen Modules
//!
//! The desk has one screen, [`exchange`].
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, view: &ExchangeView, app: &mut App) {
//!     // - Read from the snapshot
//!     // - Handle user input
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive an [`crate::app::ExchangeView`] captured before rendering, so no lock is
//! held while widgets are laid out. User actions call `app.handle_*` methods which acquire
//! the lock internally.

pub mod exchange;
