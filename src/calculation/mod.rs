//! Calculation logic for the Shift Pay Engine.
//!
//! This module contains currency rounding, per-shift pay, the half-hour
//! interval breakdown, and aggregation of rounded shift payments into totals.

mod aggregation;
mod currency;
mod interval_pay;
mod pay_summary;
mod shift_pay;

pub use aggregation::{AggregationResult, aggregate_shift_payments};
pub(crate) use currency::minor_units;
pub use currency::round_currency;
pub use interval_pay::{IntervalPayResult, calculate_interval_pay};
pub use pay_summary::calculate_pay_summary;
pub use shift_pay::{ShiftPayResult, calculate_shift_pay};
