//! Core data models for the Shift Pay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod amount;
mod calculation_result;
mod shift;

pub use amount::{MonetaryAmount, Pence};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, PaySummary, PayTotals, ShiftPayment,
};
pub use shift::{PayBasis, ShiftRecord};
