//! # Exchange DTOs
//!
//! Static catalog records for the exchange page and the values it hands back to the UI
//! (transfer summaries, wallet notices).
//!
//! ## Catalog JSON
//!
//! A catalog file deserializes into [`CatalogData`]:
//!
//! ```json
//! {
//!   "usd_rate": 1650,
//!   "assets": [
//!     { "symbol": "BTC", "name": "Bitcoin", "rate": 75840000,
//!       "balance": "2.45832100", "unit": "BTC", "icon": "btc" }
//!   ],
//!   "banks": [ { "id": "gtb", "label": "GTBank" } ],
//!   "verified_accounts": {
//!     "0123456789": { "name": "ADEBAYO JOHNSON OLUMIDE", "bank": "GTBank" }
//!   }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tradable asset with a fixed naira rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    /// Ticker symbol, unique within a catalog (e.g. `BTC`)
    pub symbol: String,
    /// Display name (e.g. `Bitcoin`)
    pub name: String,
    /// Naira per one unit of the asset
    pub rate: u64,
    /// Wallet balance, shown verbatim
    pub balance: String,
    /// Unit label shown after the balance
    pub unit: String,
    /// Icon key, used for the accent colour only
    #[serde(default)]
    pub icon: String,
}

/// A destination bank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankOption {
    pub id: String,
    pub label: String,
}

/// Holder record for a known account number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifiedAccount {
    /// Account holder name
    pub name: String,
    /// Label of the bank the account belongs to
    pub bank: String,
}

/// Serializable form of the exchange catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogData {
    /// Naira per US dollar
    pub usd_rate: u64,
    pub assets: Vec<Asset>,
    pub banks: Vec<BankOption>,
    /// Keyed by the exact 10-digit account number
    #[serde(default)]
    pub verified_accounts: BTreeMap<String, VerifiedAccount>,
}

/// Confirmation produced by an enabled submission.
///
/// Display-only: nothing is sent anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferSummary {
    /// Reference id, for log correlation
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub asset_symbol: String,
    /// Unrounded asset amount
    pub asset_amount: f64,
    /// Parsed naira value
    pub naira_amount: f64,
    pub account_number: String,
    pub bank_label: String,
}

/// Message surfaced when the simulated wallet connection completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletNotice {
    pub address: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_data_from_json() {
        let json = r#"{
            "usd_rate": 1650,
            "assets": [
                { "symbol": "USDT", "name": "Tether USD", "rate": 1650,
                  "balance": "5,000.00", "unit": "USDT" }
            ],
            "banks": [ { "id": "gtb", "label": "GTBank" } ],
            "verified_accounts": {
                "0123456789": { "name": "ADEBAYO JOHNSON OLUMIDE", "bank": "GTBank" }
            }
        }"#;

        let data: CatalogData = serde_json::from_str(json).unwrap();
        assert_eq!(data.usd_rate, 1650);
        assert_eq!(data.assets[0].symbol, "USDT");
        assert_eq!(data.assets[0].icon, "");
        assert_eq!(data.banks[0].label, "GTBank");
        assert_eq!(
            data.verified_accounts["0123456789"].name,
            "ADEBAYO JOHNSON OLUMIDE"
        );
    }

    #[test]
    fn test_verified_accounts_default_to_empty() {
        let json = r#"{ "usd_rate": 1, "assets": [], "banks": [] }"#;
        let data: CatalogData = serde_json::from_str(json).unwrap();
        assert!(data.verified_accounts.is_empty());
    }
}
