//! Aggregation of shift payments.
//!
//! Shift amounts are rounded individually before they are summed. Rounding
//! does not commute with summation, so this order matters: each shift's
//! rounded amount is what the worker is shown and paid, and the total must
//! agree with the amounts on display. The sum is taken in whole pence so a
//! large total cannot pick up single-precision drift.

use crate::models::{AuditStep, MonetaryAmount, Pence, ShiftPayment};

/// The aggregated totals across a set of shift payments.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// Total hours across all payments.
    pub total_hours: f32,
    /// Sum of the rounded shift amounts, equal to `total_pence`.
    pub total: MonetaryAmount,
    /// Exact sum of the shift amounts in pence.
    pub total_pence: Pence,
    /// The audit step recording the aggregation.
    pub audit_step: AuditStep,
}

/// Sums already-rounded shift payments.
///
/// An empty slice produces zero totals.
///
/// # Examples
///
/// ```
/// use shift_pay::calculation::aggregate_shift_payments;
/// use shift_pay::models::{Pence, ShiftPayment};
/// use chrono::NaiveDate;
///
/// let payment = |id: &str, pence: i64| ShiftPayment {
///     shift_id: id.to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     hours: 1.0,
///     hourly_rate: 1.0,
///     unrounded_amount: Pence::new(pence).to_amount(),
///     amount: Pence::new(pence).to_amount(),
///     amount_pence: Pence::new(pence),
/// };
///
/// let result = aggregate_shift_payments(&[payment("a", 5333), payment("b", 5000)], 1);
/// assert_eq!(result.total, 103.33);
/// assert_eq!(result.total_pence, Pence::new(10333));
/// ```
pub fn aggregate_shift_payments(payments: &[ShiftPayment], step_number: u32) -> AggregationResult {
    let total_hours: f32 = payments.iter().map(|p| p.hours).sum();
    let total_pence: Pence = payments.iter().map(|p| p.amount_pence).sum();
    let total = total_pence.to_amount();

    let audit_step = AuditStep {
        step_number,
        rule_id: "aggregate_shifts".to_string(),
        rule_name: "Aggregate Shift Payments".to_string(),
        input: serde_json::json!({
            "amounts": payments.iter().map(|p| p.amount).collect::<Vec<_>>(),
        }),
        output: serde_json::json!({
            "total": total,
            "total_pence": total_pence.minor_units(),
            "total_hours": total_hours,
        }),
        reasoning: format!(
            "Sum of {} rounded shift amounts = {}",
            payments.len(),
            total_pence.to_decimal()
        ),
    };

    AggregationResult {
        total_hours,
        total,
        total_pence,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::round_currency;
    use chrono::NaiveDate;

    fn make_payment(shift_id: &str, hours: f32, unrounded_amount: f32) -> ShiftPayment {
        let amount_pence = Pence::from_amount(unrounded_amount).unwrap();
        ShiftPayment {
            shift_id: shift_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            hours,
            hourly_rate: unrounded_amount / hours,
            unrounded_amount,
            amount: round_currency(unrounded_amount),
            amount_pence,
        }
    }

    /// AG-001: 53.33 + 50.00 + 100.00 = 203.33
    #[test]
    fn test_multiple_shifts_sum_rounded_amounts() {
        let hourly_rate = 100.0_f32 / 15.0;
        let payments = vec![
            make_payment("shift_001", 8.0, 8.0 * hourly_rate),
            make_payment("shift_002", 7.5, 7.5 * hourly_rate),
            make_payment("shift_003", 15.0, 15.0 * hourly_rate),
        ];

        let result = aggregate_shift_payments(&payments, 1);

        assert_eq!(result.total, 203.33);
        assert_eq!(result.total_pence, Pence::new(20333));
        assert_eq!(result.total_hours, 30.5);
    }

    #[test]
    fn test_rounding_first_differs_from_rounding_once() {
        // Three shifts of 0.335 each: rounded individually they pay 0.34 each
        let payments = vec![
            make_payment("a", 1.0, 0.335),
            make_payment("b", 1.0, 0.335),
            make_payment("c", 1.0, 0.335),
        ];

        let result = aggregate_shift_payments(&payments, 1);
        let rounded_once = round_currency(0.335 + 0.335 + 0.335);

        assert_eq!(result.total, 1.02);
        assert_eq!(rounded_once, 1.0);
        assert_ne!(result.total, rounded_once);
    }

    #[test]
    fn test_empty_payments_are_zero() {
        let result = aggregate_shift_payments(&[], 1);

        assert_eq!(result.total, 0.0);
        assert_eq!(result.total_pence, Pence::ZERO);
        assert_eq!(result.total_hours, 0.0);
    }

    #[test]
    fn test_total_agrees_with_pence() {
        let payments: Vec<ShiftPayment> = (1..=20)
            .map(|i| make_payment(&format!("shift_{:03}", i), 0.5, i as f32 * 4.1666665))
            .collect();

        let result = aggregate_shift_payments(&payments, 1);

        assert_eq!(result.total, result.total_pence.to_amount());
    }

    #[test]
    fn test_large_total_agrees_with_pence() {
        // 10 x 99999.98 summed in f32 lands on 999999.9
        let payments: Vec<ShiftPayment> = (1..=10)
            .map(|i| make_payment(&format!("shift_{:03}", i), 24.0, 99_999.98))
            .collect();

        let result = aggregate_shift_payments(&payments, 1);

        assert_eq!(result.total_pence, Pence::new(99_999_980));
        assert_eq!(result.total, result.total_pence.to_amount());
        assert_eq!(result.total_pence.to_decimal().to_string(), "999999.80");
        assert_ne!(result.total, 999_999.9);
    }

    #[test]
    fn test_audit_step() {
        let payments = vec![make_payment("a", 0.5, 4.1666665)];
        let result = aggregate_shift_payments(&payments, 9);

        assert_eq!(result.audit_step.step_number, 9);
        assert_eq!(result.audit_step.rule_id, "aggregate_shifts");
        assert_eq!(result.audit_step.output["total_pence"], 417);
        assert!(result.audit_step.reasoning.contains("4.17"));
    }
}
