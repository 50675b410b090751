//! Rupee formatting in the Indian digit grouping (`₹12,34,567`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole rupees.
///
/// The last three digits form one group and every group above it has two
/// digits. Fractions are rounded half away from zero. Negative amounts get a
/// leading minus sign before the symbol; an amount that rounds to zero is
/// always shown as `₹0`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use slab_core::format_inr;
///
/// assert_eq!(format_inr(dec!(1234567)), "₹12,34,567");
/// assert_eq!(format_inr(dec!(45000.5)), "₹45,001");
/// assert_eq!(format_inr(dec!(-1000)), "-₹1,000");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}₹{}", group_indian(&digits))
}

/// Inserts separators into a plain run of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_inr_small_values_have_no_separator() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(7)), "₹7");
        assert_eq!(format_inr(dec!(999)), "₹999");
    }

    #[test]
    fn format_inr_groups_lakhs_and_crores() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
        assert_eq!(format_inr(dec!(75000)), "₹75,000");
        assert_eq!(format_inr(dec!(123456)), "₹1,23,456");
        assert_eq!(format_inr(dec!(1200000)), "₹12,00,000");
        assert_eq!(format_inr(dec!(12345678)), "₹1,23,45,678");
        assert_eq!(format_inr(dec!(1234567890)), "₹1,23,45,67,890");
    }

    #[test]
    fn format_inr_drops_fraction_digits() {
        assert_eq!(format_inr(dec!(45000.00)), "₹45,000");
        assert_eq!(format_inr(dec!(45000.49)), "₹45,000");
        assert_eq!(format_inr(dec!(45000.50)), "₹45,001");
    }

    #[test]
    fn format_inr_negative_values() {
        assert_eq!(format_inr(dec!(-1000)), "-₹1,000");
        assert_eq!(format_inr(dec!(-1234567.5)), "-₹12,34,568");
    }

    #[test]
    fn format_inr_negative_amount_rounding_to_zero_has_no_sign() {
        assert_eq!(format_inr(dec!(-0.4)), "₹0");
    }
}
