//! Request types for the Shift Pay Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/round` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{MonetaryAmount, PayBasis, ShiftRecord};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The shifts to pay.
    pub shifts: Vec<ShiftRequest>,
}

/// Shift information in a calculation request.
///
/// Pay is given either as `hourly_rate`, or as `shift_pay` for a full shift
/// of `shift_hours` (e.g. £200 for a 24-hour shift).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// Hours worked.
    pub hours: f32,
    /// Pay per hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<MonetaryAmount>,
    /// Payment for a full shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_pay: Option<MonetaryAmount>,
    /// Length of a full shift in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_hours: Option<f32>,
}

impl TryFrom<ShiftRequest> for ShiftRecord {
    type Error = EngineError;

    fn try_from(req: ShiftRequest) -> Result<Self, Self::Error> {
        let basis = match (req.hourly_rate, req.shift_pay, req.shift_hours) {
            (Some(hourly_rate), None, None) => PayBasis::Hourly { hourly_rate },
            (None, Some(shift_pay), Some(shift_hours)) => PayBasis::FixedShift {
                shift_pay,
                shift_hours,
            },
            _ => {
                return Err(EngineError::InvalidShift {
                    shift_id: req.id,
                    message: "provide either hourly_rate, or shift_pay together with shift_hours"
                        .to_string(),
                });
            }
        };

        Ok(ShiftRecord {
            id: req.id,
            date: req.date,
            hours: req.hours,
            basis,
        })
    }
}

/// Request body for the `/round` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRequest {
    /// Amounts to round.
    pub amounts: Vec<MonetaryAmount>,
}

impl RoundRequest {
    /// Checks every amount is finite.
    ///
    /// A JSON number outside the single-precision range deserializes to
    /// infinity, so this also catches values such as `1e39`.
    pub fn validate(&self) -> Result<(), String> {
        match self.amounts.iter().position(|amount| !amount.is_finite()) {
            Some(index) => Err(format!(
                "amounts[{}] is not a finite single-precision number",
                index
            )),
            None => Ok(()),
        }
    }
}

/// Response body for the `/round` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResponse {
    /// The rounded amounts, in request order.
    pub rounded: Vec<MonetaryAmount>,
}
