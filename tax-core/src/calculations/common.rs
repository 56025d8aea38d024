//! Common utility functions for tax calculations.
//!
//! This module provides the small decimal operations shared by the tax
//! calculator and the currency formatter.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Returns `percent` percent of `amount`, computed as `percent / 100 * amount`.
///
/// The division happens first so that a rate such as `7.5` becomes the exact
/// decimal `0.075` before it meets the amount. If the product does not fit in
/// a [`Decimal`] the result saturates to [`Decimal::MAX`] or [`Decimal::MIN`]
/// depending on the sign of the operands.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(10), dec!(100)), dec!(10));
/// assert_eq!(percent_of(dec!(7.5), dec!(33)), dec!(2.475));
/// assert_eq!(percent_of(dec!(10), dec!(-50)), dec!(-5));
/// ```
pub fn percent_of(
    percent: Decimal,
    amount: Decimal,
) -> Decimal {
    let rate = percent / Decimal::ONE_HUNDRED;

    rate.checked_mul(amount).unwrap_or_else(|| {
        warn!(%percent, %amount, "tax product overflowed, saturating");
        if rate.is_sign_negative() != amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Returns the smallest integer value that is not less than `value`.
///
/// Negative values move toward zero, so `-2.475` becomes `-2`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::ceiling;
///
/// assert_eq!(ceiling(dec!(2.475)), dec!(3));
/// assert_eq!(ceiling(dec!(4.0)), dec!(4));
/// assert_eq!(ceiling(dec!(-2.475)), dec!(-2));
/// ```
pub fn ceiling(value: Decimal) -> Decimal {
    value.ceil()
}

/// Returns `true` when `value` has no fractional part.
pub fn is_whole(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Rounds a value for display using half-even (banker's) rounding.
///
/// Currency formatters round this way so that a long run of midpoint values
/// does not drift upward.
pub fn round_for_display(
    value: Decimal,
    fraction_digits: u32,
) -> Decimal {
    value.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_whole_numbers() {
        let result = percent_of(dec!(10), dec!(100));

        assert_eq!(result, dec!(10));
    }

    #[test]
    fn percent_of_fractional_rate_is_exact() {
        let result = percent_of(dec!(7.5), dec!(33));

        assert_eq!(result, dec!(2.475));
    }

    #[test]
    fn percent_of_zero_amount() {
        let result = percent_of(dec!(10), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn percent_of_negative_amount_is_negative() {
        let result = percent_of(dec!(10), dec!(-50));

        assert_eq!(result, dec!(-5));
    }

    #[test]
    fn percent_of_negative_rate_is_negative() {
        let result = percent_of(dec!(-8), dec!(50));

        assert_eq!(result, dec!(-4));
    }

    #[test]
    fn percent_of_rate_above_one_hundred() {
        let result = percent_of(dec!(250), dec!(4));

        assert_eq!(result, dec!(10));
    }

    #[test]
    fn percent_of_saturates_on_overflow() {
        let result = percent_of(dec!(1000), Decimal::MAX);

        assert_eq!(result, Decimal::MAX);
    }

    #[test]
    fn percent_of_saturates_negative_on_overflow() {
        let result = percent_of(dec!(1000), Decimal::MIN);

        assert_eq!(result, Decimal::MIN);
    }

    // =========================================================================
    // ceiling tests
    // =========================================================================

    #[test]
    fn ceiling_rounds_fraction_up() {
        assert_eq!(ceiling(dec!(2.475)), dec!(3));
        assert_eq!(ceiling(dec!(0.001)), dec!(1));
    }

    #[test]
    fn ceiling_keeps_whole_values() {
        assert_eq!(ceiling(dec!(4.0)), dec!(4));
        assert_eq!(ceiling(dec!(0)), dec!(0));
    }

    #[test]
    fn ceiling_moves_negative_values_toward_zero() {
        assert_eq!(ceiling(dec!(-2.475)), dec!(-2));
    }

    // =========================================================================
    // is_whole / round_for_display tests
    // =========================================================================

    #[test]
    fn is_whole_detects_fractional_part() {
        assert!(is_whole(dec!(3.00)));
        assert!(!is_whole(dec!(2.475)));
    }

    #[test]
    fn round_for_display_uses_half_even() {
        assert_eq!(round_for_display(dec!(2.125), 2), dec!(2.12));
        assert_eq!(round_for_display(dec!(2.135), 2), dec!(2.14));
        assert_eq!(round_for_display(dec!(2.5), 0), dec!(2));
    }
}
