//! # Data Transfer Objects (DTOs)
//!
//! Data structures shared between the exchange core and the desktop front end.
//!
//! ## Module Organization
//!
//! - [`exchange`] - Catalog records (assets, banks, verified accounts), transfer summaries
//!   and wallet notices
//!
//! ## Serialization Format
//!
//! All DTOs use `serde` with default snake_case field names. The catalog can be loaded from a
//! JSON file (see [`exchange::CatalogData`]).

pub mod exchange;

pub use exchange::*;
