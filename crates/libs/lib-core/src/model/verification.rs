//! Account verification against the static verified-account table.

use shared::dto::exchange::VerifiedAccount;

use crate::catalog::Catalog;

/// Resolve the holder record for an account number and selected bank.
///
/// Returns a record only when the number is a complete account number, a bank is selected,
/// the number is in the table, and the record's bank label equals the selected bank's label
/// exactly. Every other combination yields `None` without a reason.
pub fn evaluate(
    catalog: &Catalog,
    account_number: &str,
    bank_id: Option<&str>,
) -> Option<VerifiedAccount> {
    if !lib_utils::is_complete_account_number(account_number) {
        return None;
    }

    let bank_label = catalog.bank_label(bank_id?)?;
    let record = catalog.lookup_account(account_number)?;

    (record.bank == bank_label).then(|| record.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verified_pair() {
        let catalog = Catalog::builtin();
        let record = evaluate(&catalog, "0123456789", Some("gtb")).unwrap();
        assert_eq!(record.name, "ADEBAYO JOHNSON OLUMIDE");
    }

    #[test]
    fn test_wrong_bank_clears() {
        let catalog = Catalog::builtin();
        assert_eq!(evaluate(&catalog, "0123456789", Some("access")), None);
    }

    #[test]
    fn test_incomplete_inputs() {
        let catalog = Catalog::builtin();
        assert_eq!(evaluate(&catalog, "012345678", Some("gtb")), None);
        assert_eq!(evaluate(&catalog, "0123456789", None), None);
        assert_eq!(evaluate(&catalog, "0123456789", Some("nope")), None);
        assert_eq!(evaluate(&catalog, "9999999999", Some("gtb")), None);
        assert_eq!(evaluate(&catalog, "", Some("gtb")), None);
    }

    #[test]
    fn test_every_record_verifies_only_at_its_own_bank() {
        let catalog = Catalog::builtin();
        let numbers = ["0123456789", "1234567890", "2345678901", "3456789012", "4567890123"];

        for number in numbers {
            let expected = catalog.lookup_account(number).unwrap();
            for bank in catalog.banks() {
                let result = evaluate(&catalog, number, Some(&bank.id));
                assert_eq!(
                    result.is_some(),
                    bank.label == expected.bank,
                    "{number} at {}",
                    bank.label
                );
            }
        }
    }
}
