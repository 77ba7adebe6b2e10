//! # ZirraPay Exchange Desk - Library Root
//!
//! A **native desktop GUI** for the simulated crypto to naira exchange desk.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Asset picker**: Six assets with fixed naira rates and displayed balances
//! - **Live conversion**: Naira amount to asset amount and USD equivalent as you type
//! - **Account verification**: Account number + bank checked against a static table
//! - **Simulated wallet**: Connect button with a timed connecting state
//! - **Submission gate**: Proceed only with a complete account, a bank and a positive amount
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              desktop (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui-notify    - Confirmation toasts                  │
//! │  Tokio          - Wallet connect delay timer           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  lib-core: Catalog, Config, ExchangeSession, Scheduler  │
//! │  lib-utils: numeric formatting, env helpers             │
//! │  shared: DTOs (Asset, BankOption, TransferSummary)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application orchestrator, shared state, handlers and the timer scheduler
//! - **ui**: Rendering (`screens::exchange`, `widgets`, `theme`)
//! - **debug**: Logging setup and panic hook
//! - **utils**: Process-wide Tokio runtime
//!
//! ## State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Locked briefly**: One user action or one timer event per write lock
//! - **Snapshot rendering**: The UI renders from an `ExchangeView` captured per frame
//! - **Timer events**: Delivered through an `async_channel` and applied on the UI thread

pub mod app;
pub mod debug;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, ExchangeView};
