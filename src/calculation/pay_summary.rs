//! End-to-end pay calculation over a set of shifts.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, PaySummary, PayTotals, ShiftRecord};

use super::{aggregate_shift_payments, calculate_interval_pay, calculate_shift_pay};

/// Calculates pay for every shift and aggregates the results.
///
/// For each shift this records the rounded shift payment and an interval
/// breakdown. When the two disagree by a penny or more (rounding drift
/// between one product and many accumulated intervals) an
/// `INTERVAL_ROUNDING_DIFFERENCE` warning is added; the shift payment is
/// what gets paid.
///
/// # Errors
///
/// Returns `InvalidShift` for a duplicate shift ID or any shift that fails
/// validation.
pub fn calculate_pay_summary(
    shifts: &[ShiftRecord],
    config: &EngineConfig,
) -> EngineResult<PaySummary> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut payments = Vec::with_capacity(shifts.len());
    let mut step_number: u32 = 1;

    let mut seen_ids = HashSet::new();
    for shift in shifts {
        if !seen_ids.insert(shift.id.as_str()) {
            return Err(EngineError::InvalidShift {
                shift_id: shift.id.clone(),
                message: "duplicate shift id".to_string(),
            });
        }
    }

    for shift in shifts {
        let shift_result = calculate_shift_pay(shift, config, step_number)?;
        steps.push(shift_result.audit_step);
        warnings.extend(shift_result.warnings);
        step_number += 1;

        let interval_result = calculate_interval_pay(shift, config, step_number)?;
        steps.push(interval_result.audit_step);
        step_number += 1;

        if interval_result.amount_pence != shift_result.payment.amount_pence {
            warnings.push(AuditWarning {
                code: "INTERVAL_ROUNDING_DIFFERENCE".to_string(),
                message: format!(
                    "Shift '{}' pays {} but its {} intervals total {}",
                    shift.id,
                    shift_result.payment.amount_pence.to_decimal(),
                    interval_result.interval_count,
                    interval_result.amount_pence.to_decimal()
                ),
                severity: "low".to_string(),
            });
        }

        debug!(
            shift_id = %shift.id,
            amount = shift_result.payment.amount,
            "Calculated shift payment"
        );
        payments.push(shift_result.payment);
    }

    let aggregation = aggregate_shift_payments(&payments, step_number);
    steps.push(aggregation.audit_step);

    Ok(PaySummary {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        currency_label: config.currency_label.clone(),
        payments,
        totals: PayTotals {
            total_hours: aggregation.total_hours,
            gross_pay: aggregation.total,
            gross_pay_pence: aggregation.total_pence,
            gross_pay_display: aggregation.total_pence.to_decimal(),
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}
