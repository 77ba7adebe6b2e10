//! # Derived Amounts
//!
//! Everything shown next to the amount field is recomputed from the stored naira string on
//! every read and never stored. Rounding happens only in the `*_display` helpers.

use lib_utils::{format_fixed, format_grouped, parse_grouped_amount};
use shared::dto::exchange::Asset;

/// Decimal places shown for asset amounts.
pub const ASSET_DECIMALS: usize = 8;

/// Decimal places shown for USD amounts.
pub const USD_DECIMALS: usize = 2;

/// Amounts derived from one naira input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Conversion {
    /// Parsed naira value, `0.0` when the input is empty or unparseable
    pub naira: f64,
    /// `naira / asset.rate`
    pub asset_amount: f64,
    /// `naira / usd_rate`
    pub usd_amount: f64,
}

impl Conversion {
    pub fn compute(naira_input: &str, asset: &Asset, usd_rate: u64) -> Self {
        let naira = parse_grouped_amount(naira_input);
        Self {
            naira,
            asset_amount: divide(naira, asset.rate),
            usd_amount: divide(naira, usd_rate),
        }
    }

    pub fn asset_display(&self) -> String {
        format_fixed(self.asset_amount, ASSET_DECIMALS)
    }

    pub fn usd_display(&self) -> String {
        format_fixed(self.usd_amount, USD_DECIMALS)
    }

    pub fn naira_display(&self) -> String {
        format_grouped(self.naira)
    }
}

/// `1 BTC = ₦75,840,000`
pub fn rate_display(asset: &Asset) -> String {
    format!("1 {} = ₦{}", asset.symbol, format_grouped(asset.rate as f64))
}

fn divide(amount: f64, rate: u64) -> f64 {
    if rate == 0 {
        0.0
    } else {
        amount / rate as f64
    }
}
