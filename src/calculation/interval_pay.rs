//! Interval pay calculation.
//!
//! Shifts are paid in fixed-length intervals (half an hour by default). The
//! interval amounts are accumulated unrounded and the total is rounded once,
//! so a full 24-hour shift at £200 / 24h comes to £200.00 rather than the
//! £200.16 that rounding each £4.1666 interval would give.

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, MonetaryAmount, Pence, ShiftRecord};

use super::shift_pay::{round_computed, validated_hourly_rate};

/// The result of an interval breakdown for one shift.
#[derive(Debug, Clone)]
pub struct IntervalPayResult {
    /// Number of whole intervals worked.
    pub interval_count: u32,
    /// Length of one interval in hours.
    pub interval_hours: f32,
    /// Hours left over after the whole intervals.
    pub remainder_hours: f32,
    /// Accumulated interval amounts before rounding.
    pub unrounded_amount: MonetaryAmount,
    /// The accumulated amount rounded to two decimal places.
    pub amount: MonetaryAmount,
    /// The rounded amount in whole pence.
    pub amount_pence: Pence,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Breaks a shift into pay intervals and totals them.
///
/// Each whole interval contributes `interval_hours * hourly_rate`; any
/// partial interval at the end contributes `remainder_hours * hourly_rate`.
/// The running total is kept unrounded and rounded half-to-even at the end.
///
/// # Errors
///
/// Returns `InvalidConfig` for a zero interval length, `InvalidShift` when
/// hours or rate fail validation, and `CalculationError` on overflow.
///
/// # Examples
///
/// ```
/// use shift_pay::calculation::calculate_interval_pay;
/// use shift_pay::config::EngineConfig;
/// use shift_pay::models::{PayBasis, ShiftRecord};
/// use chrono::NaiveDate;
///
/// let shift = ShiftRecord {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     hours: 24.0,
///     basis: PayBasis::FixedShift { shift_pay: 200.0, shift_hours: 24.0 },
/// };
///
/// let result = calculate_interval_pay(&shift, &EngineConfig::default(), 1).unwrap();
/// assert_eq!(result.interval_count, 48);
/// assert_eq!(result.amount, 200.0);
/// ```
pub fn calculate_interval_pay(
    shift: &ShiftRecord,
    config: &EngineConfig,
    step_number: u32,
) -> EngineResult<IntervalPayResult> {
    if config.interval_minutes == 0 {
        return Err(EngineError::InvalidConfig {
            field: "interval_minutes".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    let hourly_rate = validated_hourly_rate(shift, config)?;
    let interval_hours = config.interval_hours();

    // hours is bounded by max_shift_hours, so the count fits comfortably
    let interval_count = ((shift.hours * 60.0) / config.interval_minutes as f32).floor() as u32;
    let remainder_hours = (shift.hours - interval_count as f32 * interval_hours).max(0.0);

    let interval_amount = interval_hours * hourly_rate;
    let mut unrounded_amount: MonetaryAmount = 0.0;
    for _ in 0..interval_count {
        unrounded_amount += interval_amount;
    }
    unrounded_amount += remainder_hours * hourly_rate;

    let (amount, amount_pence) = round_computed(&shift.id, unrounded_amount)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "interval_pay".to_string(),
        rule_name: "Interval Pay".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "hours": shift.hours,
            "hourly_rate": hourly_rate,
            "interval_minutes": config.interval_minutes,
        }),
        output: serde_json::json!({
            "interval_count": interval_count,
            "remainder_hours": remainder_hours,
            "unrounded_amount": unrounded_amount,
            "amount_pence": amount_pence.minor_units(),
        }),
        reasoning: format!(
            "{} x {} minute intervals at {} each plus {}h remainder = {}, rounded to {}",
            interval_count,
            config.interval_minutes,
            interval_amount,
            remainder_hours,
            unrounded_amount,
            amount_pence.to_decimal()
        ),
    };

    Ok(IntervalPayResult {
        interval_count,
        interval_hours,
        remainder_hours,
        unrounded_amount,
        amount,
        amount_pence,
        audit_step,
    })
}
