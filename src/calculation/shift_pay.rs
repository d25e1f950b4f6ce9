//! Shift pay calculation.
//!
//! This module turns a [`ShiftRecord`] into a [`ShiftPayment`]: the hours are
//! multiplied by the effective hourly rate and the product is rounded to whole
//! pence.

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditWarning, MonetaryAmount, PayBasis, Pence, ShiftPayment, ShiftRecord,
};

use super::round_currency;

/// The result of calculating pay for one shift.
#[derive(Debug, Clone)]
pub struct ShiftPayResult {
    /// The rounded payment.
    pub payment: ShiftPayment,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Warnings raised for this shift.
    pub warnings: Vec<AuditWarning>,
}

fn invalid_shift(shift_id: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidShift {
        shift_id: shift_id.to_string(),
        message: message.into(),
    }
}

/// Checks the hours and pay basis of a shift and returns its hourly rate.
///
/// Hours must be finite, non-negative, and no more than the configured
/// maximum. Rates must be finite and non-negative. A fixed-pay basis also
/// needs a positive shift length.
pub(crate) fn validated_hourly_rate(
    shift: &ShiftRecord,
    config: &EngineConfig,
) -> EngineResult<MonetaryAmount> {
    if !shift.hours.is_finite() || shift.hours < 0.0 {
        return Err(invalid_shift(
            &shift.id,
            format!("hours must be a non-negative number, got {}", shift.hours),
        ));
    }

    if shift.hours > config.max_shift_hours {
        return Err(invalid_shift(
            &shift.id,
            format!(
                "{} hours exceeds the maximum of {} hours per shift",
                shift.hours, config.max_shift_hours
            ),
        ));
    }

    if let PayBasis::FixedShift {
        shift_pay,
        shift_hours,
    } = shift.basis
    {
        if !shift_hours.is_finite() || shift_hours <= 0.0 {
            return Err(invalid_shift(
                &shift.id,
                format!("shift_hours must be a positive number, got {}", shift_hours),
            ));
        }
        if !shift_pay.is_finite() || shift_pay < 0.0 {
            return Err(invalid_shift(
                &shift.id,
                format!("shift_pay must be a non-negative number, got {}", shift_pay),
            ));
        }
    }

    let hourly_rate = shift.basis.hourly_rate();
    if !hourly_rate.is_finite() || hourly_rate < 0.0 {
        return Err(invalid_shift(
            &shift.id,
            format!("hourly rate must be a non-negative number, got {}", hourly_rate),
        ));
    }

    Ok(hourly_rate)
}

/// Rounds a computed amount, failing if arithmetic left it non-finite.
pub(crate) fn round_computed(
    shift_id: &str,
    unrounded: MonetaryAmount,
) -> EngineResult<(MonetaryAmount, Pence)> {
    let pence = Pence::from_amount(unrounded).ok_or_else(|| EngineError::CalculationError {
        message: format!(
            "amount {} for shift '{}' cannot be represented in pence",
            unrounded, shift_id
        ),
    })?;
    Ok((round_currency(unrounded), pence))
}

/// Calculates the payable amount for a single shift.
///
/// The amount is `hours * hourly_rate` computed in single precision and then
/// rounded half-to-even to two decimal places.
///
/// # Errors
///
/// Returns `InvalidShift` when hours or rate fail validation and
/// `CalculationError` if the product overflows.
///
/// # Examples
///
/// ```
/// use shift_pay::calculation::calculate_shift_pay;
/// use shift_pay::config::EngineConfig;
/// use shift_pay::models::{PayBasis, ShiftRecord};
/// use chrono::NaiveDate;
///
/// let shift = ShiftRecord {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     hours: 0.5,
///     basis: PayBasis::FixedShift { shift_pay: 200.0, shift_hours: 24.0 },
/// };
///
/// let result = calculate_shift_pay(&shift, &EngineConfig::default(), 1).unwrap();
/// assert_eq!(result.payment.amount, 4.17);
/// assert_eq!(result.payment.amount_pence.minor_units(), 417);
/// ```
pub fn calculate_shift_pay(
    shift: &ShiftRecord,
    config: &EngineConfig,
    step_number: u32,
) -> EngineResult<ShiftPayResult> {
    let hourly_rate = validated_hourly_rate(shift, config)?;

    let unrounded_amount = shift.hours * hourly_rate;
    let (amount, amount_pence) = round_computed(&shift.id, unrounded_amount)?;

    let mut warnings = Vec::new();
    if shift.hours == 0.0 {
        warnings.push(AuditWarning {
            code: "ZERO_HOURS".to_string(),
            message: format!("Shift '{}' has zero hours worked", shift.id),
            severity: "low".to_string(),
        });
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_pay".to_string(),
        rule_name: "Shift Pay".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "hours": shift.hours,
            "hourly_rate": hourly_rate,
        }),
        output: serde_json::json!({
            "unrounded_amount": unrounded_amount,
            "amount": amount,
            "amount_pence": amount_pence.minor_units(),
        }),
        reasoning: format!(
            "{}h x {}/hr = {}, rounded half-to-even to {}",
            shift.hours,
            hourly_rate,
            unrounded_amount,
            amount_pence.to_decimal()
        ),
    };

    Ok(ShiftPayResult {
        payment: ShiftPayment {
            shift_id: shift.id.clone(),
            date: shift.date,
            hours: shift.hours,
            hourly_rate,
            unrounded_amount,
            amount,
            amount_pence,
        },
        audit_step,
        warnings,
    })
}
