//! # Shared Exchange Types
//!
//! Types and display helpers shared by the exchange core (`lib-core`) and the desktop
//! front end.
//!
//! ## Structure
//!
//! - **[`dto`]**: catalog records and the values the core hands back to the UI
//!   - **[`dto::exchange`]**: `Asset`, `BankOption`, `VerifiedAccount`, `CatalogData`,
//!     `TransferSummary`, `WalletNotice`
//! - **[`utils`]**: display helpers
//!   - **[`utils::format_address`]** / **[`utils::short_address`]**: wallet address shortening
//!
//! ## Wire Format
//!
//! All DTOs use `serde` with default field naming, so a catalog JSON file maps one-to-one onto
//! [`dto::exchange::CatalogData`].

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
