//! Currency rounding.
//!
//! Every monetary amount the engine produces passes through
//! [`round_currency`] before it is displayed or summed. Ties are resolved
//! half-to-even ("banker's rounding"), which keeps repeated rounding from
//! drifting upwards.

use crate::models::MonetaryAmount;

const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Scales `amount` to minor units and rounds half to even.
///
/// The product of an `f32` and 100 is exact in `f64`, so ties are judged on
/// the float's stored value and no tie is created or lost by the scaling.
pub(crate) fn minor_units(amount: MonetaryAmount) -> f64 {
    (f64::from(amount) * MINOR_UNITS_PER_MAJOR).round_ties_even()
}

/// Rounds an amount to two decimal places, half to even.
///
/// The input's stored value decides the result, not the decimal literal it
/// was written as: `4.165_f32` is stored just below 4.165 and rounds to 4.16,
/// while `4.175_f32` is stored just above and rounds to 4.18. Inputs that sit
/// exactly on a half penny go to the even neighbour, so 0.125 becomes 0.12
/// and 0.375 becomes 0.38.
///
/// Sign is preserved and the function never fails. NaN and infinities are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use shift_pay::calculation::round_currency;
///
/// assert_eq!(round_currency(4.166666), 4.17);
/// assert_eq!(round_currency(-4.166666), -4.17);
/// assert_eq!(round_currency(0.125), 0.12);
/// assert_eq!(round_currency(100.0), 100.0);
/// ```
pub fn round_currency(amount: MonetaryAmount) -> MonetaryAmount {
    (minor_units(amount) / MINOR_UNITS_PER_MAJOR) as f32
}
