//! Shift record model and related types.
//!
//! A [`ShiftRecord`] carries the hours worked on a shift and the basis on
//! which those hours are paid. Rates are supplied by the caller; the engine
//! never looks them up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MonetaryAmount;

/// How a shift's hours are paid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayBasis {
    /// A straight hourly rate.
    Hourly {
        /// Pay per hour.
        hourly_rate: MonetaryAmount,
    },
    /// A fixed payment for a full shift of known length, e.g. £200 for 24 hours.
    FixedShift {
        /// Payment for the full shift.
        shift_pay: MonetaryAmount,
        /// Length of the full shift in hours.
        shift_hours: f32,
    },
}

impl PayBasis {
    /// Returns the effective hourly rate.
    ///
    /// For a fixed-pay shift this is `shift_pay / shift_hours` in single
    /// precision, so £200 over 24 hours gives 8.333333. A zero-length shift
    /// yields a non-finite rate, which the calculation layer rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_pay::models::PayBasis;
    ///
    /// let basis = PayBasis::FixedShift { shift_pay: 200.0, shift_hours: 24.0 };
    /// assert_eq!(basis.hourly_rate(), 200.0_f32 / 24.0);
    /// ```
    pub fn hourly_rate(&self) -> MonetaryAmount {
        match *self {
            PayBasis::Hourly { hourly_rate } => hourly_rate,
            PayBasis::FixedShift {
                shift_pay,
                shift_hours,
            } => shift_pay / shift_hours,
        }
    }
}

/// A worked shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date the shift started.
    pub date: NaiveDate,
    /// Hours worked.
    pub hours: f32,
    /// How the hours are paid.
    pub basis: PayBasis,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_hourly_basis_returns_rate_unchanged() {
        let basis = PayBasis::Hourly { hourly_rate: 12.5 };
        assert_eq!(basis.hourly_rate(), 12.5);
    }

    #[test]
    fn test_fixed_24_hour_shift_rate() {
        let basis = PayBasis::FixedShift {
            shift_pay: 200.0,
            shift_hours: 24.0,
        };
        assert_eq!(basis.hourly_rate(), 8.333333);
    }

    #[test]
    fn test_fixed_15_hour_shift_rate() {
        let basis = PayBasis::FixedShift {
            shift_pay: 100.0,
            shift_hours: 15.0,
        };
        // 100 / 15 is stored as 6.6666665 in single precision
        assert_eq!(basis.hourly_rate(), 100.0_f32 / 15.0);
        assert_eq!(basis.hourly_rate(), 6.6666665);
    }

    #[test]
    fn test_zero_length_fixed_shift_rate_is_not_finite() {
        let basis = PayBasis::FixedShift {
            shift_pay: 100.0,
            shift_hours: 0.0,
        };
        assert!(!basis.hourly_rate().is_finite());
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": "shift_001",
            "date": "2026-01-15",
            "hours": 7.5,
            "basis": { "kind": "fixed_shift", "shift_pay": 100.0, "shift_hours": 15.0 }
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift.id, "shift_001");
        assert_eq!(shift.hours, 7.5);
        assert_eq!(
            shift.basis,
            PayBasis::FixedShift {
                shift_pay: 100.0,
                shift_hours: 15.0
            }
        );
    }

    #[test]
    fn test_shift_serialization_round_trips() {
        let shift = ShiftRecord {
            id: "shift_002".to_string(),
            date: make_date("2026-01-15"),
            hours: 0.5,
            basis: PayBasis::Hourly { hourly_rate: 8.25 },
        };

        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"kind\":\"hourly\""));
        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }
}
