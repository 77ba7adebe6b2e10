//! Transfer submission gate and the confirmation summary it produces.

use chrono::{DateTime, Utc};
use shared::dto::exchange::TransferSummary;

use crate::model::conversion::ASSET_DECIMALS;

/// Submit label when the gate is open.
pub const PROCEED_LABEL: &str = "Proceed to Exchange";

/// Submit label when the gate is closed.
pub const INCOMPLETE_LABEL: &str = "Complete Account Verification";

/// Gate condition. Does not require a verified account.
pub fn can_submit(account_number: &str, bank_id: Option<&str>, naira: f64) -> bool {
    lib_utils::is_complete_account_number(account_number) && bank_id.is_some() && naira > 0.0
}

pub fn submit_label(enabled: bool) -> &'static str {
    if enabled {
        PROCEED_LABEL
    } else {
        INCOMPLETE_LABEL
    }
}

/// Inputs for a summary, borrowed from the session.
#[derive(Debug, Clone, Copy)]
pub struct SummaryInput<'a> {
    pub asset_symbol: &'a str,
    pub asset_amount: f64,
    pub naira_amount: f64,
    pub account_number: &'a str,
    pub bank_label: &'a str,
}

pub fn build_summary(input: SummaryInput<'_>, created_at: DateTime<Utc>) -> TransferSummary {
    TransferSummary {
        reference: uuid::Uuid::new_v4().to_string(),
        created_at,
        asset_symbol: input.asset_symbol.to_string(),
        asset_amount: input.asset_amount,
        naira_amount: input.naira_amount,
        account_number: input.account_number.to_string(),
        bank_label: input.bank_label.to_string(),
    }
}

/// Confirmation text shown to the user.
pub fn summary_message(summary: &TransferSummary) -> String {
    format!(
        "Transaction initiated!\n\nSending: {} {}\nReceiving: ₦{}\nAccount: {}\nBank: {}",
        lib_utils::format_fixed(summary.asset_amount, ASSET_DECIMALS),
        summary.asset_symbol,
        lib_utils::format_grouped(summary.naira_amount),
        summary.account_number,
        summary.bank_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_truth_table() {
        let cases = [
            ("0123456789", Some("gtb"), 1.0, true),
            ("0123456789", Some("access"), 1.0, true),
            ("012345678", Some("gtb"), 1.0, false),
            ("0123456789", None, 1.0, false),
            ("0123456789", Some("gtb"), 0.0, false),
            ("", None, 0.0, false),
        ];

        for (account, bank, naira, expected) in cases {
            assert_eq!(can_submit(account, bank, naira), expected, "{account:?} {bank:?} {naira}");
            assert_eq!(
                submit_label(can_submit(account, bank, naira)),
                if expected { PROCEED_LABEL } else { INCOMPLETE_LABEL }
            );
        }
    }

    #[test]
    fn test_summary_message() {
        let summary = build_summary(
            SummaryInput {
                asset_symbol: "BTC",
                asset_amount: 1_234_567.0 / 75_840_000.0,
                naira_amount: 1_234_567.0,
                account_number: "0123456789",
                bank_label: "GTBank",
            },
            lib_utils::now_utc(),
        );

        assert_eq!(
            summary_message(&summary),
            "Transaction initiated!\n\nSending: 0.01627857 BTC\nReceiving: ₦1,234,567\nAccount: 0123456789\nBank: GTBank"
        );
        assert!(uuid::Uuid::parse_str(&summary.reference).is_ok());
    }

    #[test]
    fn test_summary_message_rounds_halfway_amount_up() {
        let summary = build_summary(
            SummaryInput {
                asset_symbol: "BTC",
                asset_amount: 148_125.0 / 75_840_000.0,
                naira_amount: 148_125.0,
                account_number: "0123456789",
                bank_label: "GTBank",
            },
            lib_utils::now_utc(),
        );

        assert!(summary_message(&summary).contains("Sending: 0.00195313 BTC\n"));
    }
}
