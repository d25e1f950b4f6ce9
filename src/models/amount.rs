//! Monetary amount types.
//!
//! Amounts travel through the engine as single-precision floats
//! ([`MonetaryAmount`]). [`Pence`] is the fixed-point counterpart: whole minor
//! units produced by the same half-to-even rule as
//! [`round_currency`](crate::calculation::round_currency), so totals can be
//! summed exactly and serialized without re-rounding.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::minor_units;

/// A currency value. The unit (GBP, AUD, ...) is implied by the caller.
pub type MonetaryAmount = f32;

/// A whole number of minor currency units (pence, cents).
///
/// # Example
///
/// ```
/// use shift_pay::models::Pence;
///
/// let pence = Pence::from_amount(4.166666).unwrap();
/// assert_eq!(pence.minor_units(), 417);
/// assert_eq!(pence.to_amount(), 4.17);
/// assert_eq!(pence.to_decimal().to_string(), "4.17");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Pence(i64);

impl Pence {
    /// Zero pence.
    pub const ZERO: Pence = Pence(0);

    /// Creates a value from a count of minor units.
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Returns the count of minor units.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Rounds `amount` to whole minor units, half to even.
    ///
    /// Returns `None` for NaN, infinities, and magnitudes that do not fit
    /// in an `i64` count of minor units.
    pub fn from_amount(amount: MonetaryAmount) -> Option<Self> {
        let units = minor_units(amount);
        // 2^63 is exactly representable, so this rejects everything outside i64.
        if !units.is_finite() || units.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(units as i64))
    }

    /// Converts back to a floating-point amount with two decimal places.
    pub fn to_amount(self) -> MonetaryAmount {
        (self.0 as f64 / 100.0) as f32
    }

    /// Converts to a `Decimal` with a fixed scale of 2 (e.g. `100.00`).
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl Add for Pence {
    type Output = Pence;

    fn add(self, rhs: Pence) -> Pence {
        Pence(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Pence {
    fn sum<I: Iterator<Item = Pence>>(iter: I) -> Pence {
        iter.fold(Pence::ZERO, Add::add)
    }
}
