//! Decimal helpers shared by the calculations.

use rust_decimal::Decimal;

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use slab_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Expresses `part` as a percentage of `whole`.
///
/// Returns `None` when `whole` is zero or negative, or when the result does
/// not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use slab_core::calculations::common::percentage;
///
/// assert_eq!(percentage(dec!(45000), dec!(1500000)), Some(dec!(3)));
/// assert_eq!(percentage(dec!(0), dec!(0)), None);
/// ```
pub fn percentage(
    part: Decimal,
    whole: Decimal,
) -> Option<Decimal> {
    if whole <= Decimal::ZERO {
        return None;
    }
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(100.00), dec!(200.00));

        assert_eq!(result, dec!(200.00));
    }

    #[test]
    fn max_returns_first_when_larger() {
        let result = max(dec!(200.00), dec!(100.00));

        assert_eq!(result, dec!(200.00));
    }

    #[test]
    fn max_floors_negative_at_zero() {
        let result = max(dec!(-75000), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    // =========================================================================
    // percentage tests
    // =========================================================================

    #[test]
    fn percentage_of_positive_whole() {
        let result = percentage(dec!(480000), dec!(3000000));

        assert_eq!(result, Some(dec!(16)));
    }

    #[test]
    fn percentage_keeps_fractional_digits() {
        let result = percentage(dec!(1), dec!(3)).unwrap();

        assert_eq!(result.round_dp(4), dec!(33.3333));
    }

    #[test]
    fn percentage_of_zero_whole_is_none() {
        assert_eq!(percentage(dec!(10), Decimal::ZERO), None);
    }

    #[test]
    fn percentage_of_negative_whole_is_none() {
        assert_eq!(percentage(Decimal::ZERO, dec!(-500)), None);
    }
}
