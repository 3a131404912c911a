//! Display formatting for rupee amounts
//!
//! Presentation only: nothing here feeds back into computed values.

/// Currency sign prefixed to every formatted amount
pub const RUPEE: char = '₹';

/// One crore (10 million)
pub const CRORE: f64 = 10_000_000.0;

/// One lakh (100 thousand)
pub const LAKH: f64 = 100_000.0;

/// One thousand
pub const THOUSAND: f64 = 1_000.0;

/// Compact amount for summary cards and chart axes
///
/// The absolute value picks the band: crore, lakh and thousand amounts keep
/// two decimals, smaller amounts are rounded to whole rupees and grouped.
/// Amounts that round up to ₹1,000 move into the thousand band.
///
/// ```rust
/// use sip_model::format_currency;
///
/// assert_eq!(format_currency(11_616_950.0), "₹1.16 Cr");
/// assert_eq!(format_currency(1_161_695.0), "₹11.62 L");
/// assert_eq!(format_currency(60_000.0), "₹60.00 K");
/// assert_eq!(format_currency(500.0), "₹500");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{RUPEE}—");
    }

    let magnitude = if amount.abs() < THOUSAND {
        amount.abs().round()
    } else {
        amount.abs()
    };
    let sign = if amount < 0.0 { "-" } else { "" };

    if magnitude >= CRORE {
        format!("{sign}{RUPEE}{:.2} Cr", magnitude / CRORE)
    } else if magnitude >= LAKH {
        format!("{sign}{RUPEE}{:.2} L", magnitude / LAKH)
    } else if magnitude >= THOUSAND {
        format!("{sign}{RUPEE}{:.2} K", magnitude / THOUSAND)
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = magnitude as u64;
        let sign = if whole == 0 { "" } else { sign };
        format!("{sign}{RUPEE}{}", group_unsigned(whole))
    }
}

/// Full amount with rupee sign and Indian digit grouping, e.g. `₹11,61,695`
#[must_use]
pub fn format_rupees(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{RUPEE}{}", group_unsigned(amount.unsigned_abs()))
}

/// Indian digit grouping: last three digits, then pairs (`11,61,695`)
#[must_use]
pub fn group_indian(value: i64) -> String {
    let grouped = group_unsigned(value.unsigned_abs());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_unsigned(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);
    for (i, ch) in digits.chars().enumerate() {
        out.push(ch);
        let remaining = len - i - 1;
        if remaining >= 3 && (remaining - 3) % 2 == 0 {
            out.push(',');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_input;
    use proptest::prelude::*;

    #[test]
    fn bands_by_magnitude() {
        assert_eq!(format_currency(11_616_950.0), "₹1.16 Cr");
        assert_eq!(format_currency(10_000_000.0), "₹1.00 Cr");
        assert_eq!(format_currency(9_999_999.0), "₹100.00 L");
        assert_eq!(format_currency(1_161_695.0), "₹11.62 L");
        assert_eq!(format_currency(116_169.0), "₹1.16 L");
        assert_eq!(format_currency(100_000.0), "₹1.00 L");
        assert_eq!(format_currency(5_000.0), "₹5.00 K");
        assert_eq!(format_currency(1_000.0), "₹1.00 K");
    }

    #[test]
    fn small_amounts_are_whole_rupees() {
        assert_eq!(format_currency(500.0), "₹500");
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(999.4), "₹999");
        assert_eq!(format_currency(-0.2), "₹0");
        assert_eq!(format_currency(999.49), "₹999");
    }

    #[test]
    fn rounding_up_to_a_thousand_changes_band() {
        assert_eq!(format_currency(999.5), "₹1.00 K");
        assert_eq!(format_currency(999.6), "₹1.00 K");
        assert_eq!(format_currency(-999.7), "-₹1.00 K");
    }

    #[test]
    fn negative_amounts_keep_band() {
        assert_eq!(format_currency(-250_000.0), "-₹2.50 L");
        assert_eq!(format_currency(-42.0), "-₹42");
    }

    #[test]
    fn non_finite_is_placeholder() {
        assert_eq!(format_currency(f64::NAN), "₹—");
        assert_eq!(format_currency(f64::INFINITY), "₹—");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(100_000), "1,00,000");
        assert_eq!(group_indian(1_161_695), "11,61,695");
        assert_eq!(group_indian(-11_616_950), "-1,16,16,950");
        assert_eq!(format_rupees(600_000), "₹6,00,000");
        assert_eq!(format_rupees(-500), "-₹500");
    }

    proptest! {
        #[test]
        fn prop_grouping_parses_back(value in -1_000_000_000_000i64..1_000_000_000_000) {
            #[allow(clippy::cast_precision_loss)]
            let expected = value as f64;
            prop_assert_eq!(parse_input(&group_indian(value)), expected);
            prop_assert_eq!(parse_input(&format_rupees(value)), expected);
        }

        #[test]
        fn prop_band_follows_magnitude(amount in 0.0f64..1e12) {
            let text = format_currency(amount);
            let suffix = if amount >= CRORE {
                " Cr"
            } else if amount >= LAKH {
                " L"
            } else if amount.round() >= THOUSAND {
                " K"
            } else {
                ""
            };

            prop_assert!(text.starts_with(RUPEE));
            if suffix.is_empty() {
                prop_assert!(!text.ends_with(&['K', 'L', 'r'][..]), "{}", text);
            } else {
                prop_assert!(text.ends_with(suffix), "{} for {}", text, amount);
            }
        }
    }
}
