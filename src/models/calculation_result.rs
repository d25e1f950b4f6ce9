//! Calculation result models for the Shift Pay Engine.
//!
//! This module contains the [`PaySummary`] type and its associated structures
//! that capture the outputs of a pay calculation: one [`ShiftPayment`] per
//! shift, the aggregated [`PayTotals`], and an audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MonetaryAmount, Pence};

/// The payment for a single shift.
///
/// `unrounded_amount` is the raw `hours * hourly_rate` product; `amount` is
/// that product rounded to whole pence and is the value that gets summed.
///
/// # Example
///
/// ```
/// use shift_pay::models::{Pence, ShiftPayment};
/// use chrono::NaiveDate;
///
/// let payment = ShiftPayment {
///     shift_id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     hours: 0.5,
///     hourly_rate: 8.333333,
///     unrounded_amount: 4.1666665,
///     amount: 4.17,
///     amount_pence: Pence::new(417),
/// };
/// assert_eq!(payment.amount_pence.to_amount(), payment.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftPayment {
    /// The ID of the shift this payment is for.
    pub shift_id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// Hours worked.
    pub hours: f32,
    /// The effective hourly rate.
    pub hourly_rate: MonetaryAmount,
    /// `hours * hourly_rate` before rounding.
    pub unrounded_amount: MonetaryAmount,
    /// The payable amount, rounded to two decimal places.
    pub amount: MonetaryAmount,
    /// The payable amount in whole pence.
    pub amount_pence: Pence,
}

/// Aggregated totals for a pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Total hours across all shifts.
    pub total_hours: f32,
    /// Sum of the rounded shift amounts, rounded again.
    pub gross_pay: MonetaryAmount,
    /// Exact sum of the shift amounts in pence.
    pub gross_pay_pence: Pence,
    /// `gross_pay_pence` as a two-decimal string for display.
    pub gross_pay_display: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that are valid but probably not what the caller meant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a pay calculation over one or more shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaySummary {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Label of the currency the amounts are in (informational only).
    pub currency_label: String,
    /// One payment per shift, in input order.
    pub payments: Vec<ShiftPayment>,
    /// Aggregated totals.
    pub totals: PayTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_payment(shift_id: &str, amount_pence: i64) -> ShiftPayment {
        let pence = Pence::new(amount_pence);
        ShiftPayment {
            shift_id: shift_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            hours: 8.0,
            hourly_rate: 6.666666,
            unrounded_amount: 53.33333,
            amount: pence.to_amount(),
            amount_pence: pence,
        }
    }

    #[test]
    fn test_shift_payment_serialization() {
        let payment = create_sample_payment("shift_001", 5333);
        let json = serde_json::to_value(&payment).unwrap();

        assert_eq!(json["shift_id"], "shift_001");
        assert_eq!(json["date"], "2026-01-15");
        assert_eq!(json["amount_pence"], 5333);
        assert!((json["amount"].as_f64().unwrap() - 53.33).abs() < 1e-4);
    }

    #[test]
    fn test_pay_totals_display_serializes_as_string() {
        let pence = Pence::new(20333);
        let totals = PayTotals {
            total_hours: 30.5,
            gross_pay: pence.to_amount(),
            gross_pay_pence: pence,
            gross_pay_display: pence.to_decimal(),
        };

        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["gross_pay_display"], "203.33");
        assert_eq!(json["gross_pay_pence"], 20333);
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "shift_pay".to_string(),
            rule_name: "Shift Pay".to_string(),
            input: serde_json::json!({ "hours": 0.5 }),
            output: serde_json::json!({ "amount": 4.17 }),
            reasoning: "0.5h x 8.333333 = 4.1666665, rounded to 4.17".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        let deserialized: AuditStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }

    #[test]
    fn test_pay_summary_serialization_round_trips() {
        let pence = Pence::new(10417);
        let summary = PaySummary {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            currency_label: "GBP".to_string(),
            payments: vec![
                create_sample_payment("shift_001", 417),
                create_sample_payment("shift_002", 10000),
            ],
            totals: PayTotals {
                total_hours: 16.0,
                gross_pay: pence.to_amount(),
                gross_pay_pence: pence,
                gross_pay_display: pence.to_decimal(),
            },
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![AuditWarning {
                    code: "ZERO_HOURS".to_string(),
                    message: "Shift 'x' has zero hours".to_string(),
                    severity: "low".to_string(),
                }],
                duration_us: 12,
            },
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: PaySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
