//! # Numeric Input Formatting
//!
//! Sanitizers and formatters for the two numeric fields of the exchange form and for
//! rendering computed values.
//!
//! ## Input Fields
//!
//! - [`format_naira_input`]: amount field. Digits only, at most [`MAX_AMOUNT_DIGITS`] of them,
//!   grouped with `,` every three digits from the right.
//! - [`sanitize_account_number`]: account-number field. Digits only, at most
//!   [`ACCOUNT_NUMBER_LEN`] of them, no separators.
//!
//! Both are idempotent, so re-applying them to their own output is a no-op.
//!
//! ## Display
//!
//! - [`parse_grouped_amount`]: inverse of the amount formatter (falls back to `0.0`)
//! - [`format_fixed`]: fixed decimal places, for asset and USD amounts
//! - [`format_grouped`]: locale-style rendering (`1,234,567.5`) for naira values and rates
//!
//! ```rust
//! use lib_utils::numeric::{format_naira_input, parse_grouped_amount};
//!
//! let shown = format_naira_input("₦1234567");
//! assert_eq!(shown, "1,234,567");
//! assert_eq!(parse_grouped_amount(&shown), 1_234_567.0);
//! ```

/// Maximum number of raw digits accepted by the amount field.
pub const MAX_AMOUNT_DIGITS: usize = 12;

/// Exact length of a complete bank account number.
pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// Thousands separator used by the amount field.
pub const GROUP_SEPARATOR: char = ',';

/// Insert a separator every three digits, counting from the right.
///
/// The input is expected to contain digits only; no separator is ever placed before the
/// first group.
pub fn group_digits(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }

    out
}

/// Format raw amount input: keep ASCII digits, truncate to 12, group by thousands.
pub fn format_naira_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_AMOUNT_DIGITS)
        .collect();
    group_digits(&digits)
}

/// Sanitize raw account-number input: keep ASCII digits, truncate to 10.
pub fn sanitize_account_number(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ACCOUNT_NUMBER_LEN)
        .collect()
}

/// Parse a grouped amount string back to a number.
///
/// Separators are removed before parsing. Empty, unparseable or non-finite input yields `0.0`.
pub fn parse_grouped_amount(formatted: &str) -> f64 {
    let plain: String = formatted
        .chars()
        .filter(|c| *c != GROUP_SEPARATOR)
        .collect();

    plain
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Render a value with exactly `places` decimal places (`format_fixed(0.5, 2) == "0.50"`).
///
/// Rounds to nearest. An exact halfway value rounds away from zero, so
/// `format_fixed(0.001953125, 8) == "0.00195313"`.
pub fn format_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let exact_places = exact_fraction_digits(magnitude);
    if exact_places <= places {
        return format!("{:.*}", places, value);
    }

    // Full decimal expansion, so a tie can be told apart from a near-tie.
    let exact = format!("{:.*}", exact_places, magnitude);
    let (kept, dropped) = exact.split_at(exact.len() - (exact_places - places));
    let is_tie = dropped.starts_with('5') && dropped[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", places, value);
    }

    let rounded = increment_last_digit(kept.trim_end_matches('.'));
    if value < 0.0 {
        format!("-{rounded}")
    } else {
        rounded
    }
}

/// Number of fractional decimal digits in the exact expansion of a finite, non-negative `value`.
fn exact_fraction_digits(value: f64) -> usize {
    let bits = value.to_bits();
    let biased_exp = ((bits >> 52) & 0x7ff) as i32;
    let mut mantissa = bits & ((1u64 << 52) - 1);
    if mantissa == 0 && biased_exp == 0 {
        return 0;
    }

    let unit_exp = if biased_exp == 0 {
        -1074
    } else {
        mantissa |= 1u64 << 52;
        biased_exp - 1075
    };
    let lsb_exp = unit_exp + mantissa.trailing_zeros() as i32;

    if lsb_exp >= 0 {
        0
    } else {
        lsb_exp.unsigned_abs() as usize
    }
}

/// Add one unit in the last place of a plain decimal string (`"0.99"` -> `"1.00"`).
fn increment_last_digit(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for b in out.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                return String::from_utf8_lossy(&out).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&out))
}

/// Render a value in grouped display form: grouped integer part and
/// up to three fractional digits with trailing zeros dropped.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format_fixed(value.abs(), 3);
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "0",
        "7",
        "12",
        "123",
        "1234",
        "1234567",
        "1,234,567",
        "12,34,567",
        "abc",
        "₦ 50,000.75",
        "  99 99 99 ",
        "-42",
        "1234567890123456",
        "9999999999999",
        "0001000",
        ",,,1,,2,,3",
        "12e6",
        "١٢٣",
    ];

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(""), "");
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456"), "123,456");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_naira_input_scenario() {
        assert_eq!(format_naira_input("1234567"), "1,234,567");
        assert_eq!(parse_grouped_amount("1,234,567"), 1_234_567.0);
    }

    #[test]
    fn test_format_naira_input_truncates_to_twelve_digits() {
        assert_eq!(format_naira_input("1234567890123456"), "123,456,789,012");
    }

    #[test]
    fn test_format_naira_input_output_shape() {
        for raw in SAMPLES {
            let out = format_naira_input(raw);
            assert!(
                out.chars().all(|c| c.is_ascii_digit() || c == GROUP_SEPARATOR),
                "unexpected char in {out:?}"
            );
            assert!(!out.starts_with(GROUP_SEPARATOR), "leading separator in {out:?}");
            assert!(out.chars().filter(char::is_ascii_digit).count() <= MAX_AMOUNT_DIGITS);
        }
    }

    #[test]
    fn test_format_naira_input_idempotent() {
        for raw in SAMPLES {
            let once = format_naira_input(raw);
            assert_eq!(format_naira_input(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_format_naira_input_ignores_non_ascii_digits() {
        assert_eq!(format_naira_input("١٢٣"), "");
    }

    #[test]
    fn test_sanitize_account_number() {
        assert_eq!(sanitize_account_number("0123-456-789"), "0123456789");
        assert_eq!(sanitize_account_number("012345678999"), "0123456789");
        assert_eq!(sanitize_account_number("abc"), "");
        for raw in SAMPLES {
            let out = sanitize_account_number(raw);
            assert!(out.len() <= ACCOUNT_NUMBER_LEN);
            assert!(out.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_parse_grouped_amount_fallbacks() {
        assert_eq!(parse_grouped_amount(""), 0.0);
        assert_eq!(parse_grouped_amount("abc"), 0.0);
        assert_eq!(parse_grouped_amount(","), 0.0);
        assert_eq!(parse_grouped_amount("inf"), 0.0);
        assert_eq!(parse_grouped_amount("0,000"), 0.0);
        assert_eq!(parse_grouped_amount("50,000"), 50_000.0);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(1_234_567.0 / 75_840_000.0, 8), "0.01627857");
        assert_eq!(format_fixed(1_234_567.0 / 1650.0, 2), "748.22");
        assert_eq!(format_fixed(0.0, 8), "0.00000000");
    }

    #[test]
    fn test_format_fixed_halfway_rounds_up() {
        // 148,125 / 75,840,000 is exactly 0.001953125
        assert_eq!(format_fixed(148_125.0 / 75_840_000.0, 8), "0.00195313");
        assert_eq!(format_fixed(0.625, 2), "0.63");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(9.5, 0), "10");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(-0.625, 2), "-0.63");
    }

    #[test]
    fn test_format_fixed_near_halfway_is_not_a_tie() {
        // 0.615 is stored slightly below the halfway point
        assert_eq!(format_fixed(0.615, 2), "0.61");
        // 1.005 is stored slightly below as well
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(1.0, 8), "1.00000000");
        assert_eq!(format_fixed(0.5, 2), "0.50");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(75_840_000.0), "75,840,000");
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(0.12345), "0.123");
        assert_eq!(format_grouped(-1500.0), "-1,500");
        assert_eq!(format_grouped(0.0625), "0.063");
    }
}
