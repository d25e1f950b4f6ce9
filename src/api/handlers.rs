//! HTTP request handlers for the Shift Pay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_pay_summary, round_currency};
use crate::error::EngineResult;
use crate::models::ShiftRecord;

use super::request::{CalculationRequest, RoundRequest, RoundResponse};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/round", post(round_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate endpoint.
///
/// Pays each shift, aggregates the rounded amounts, and returns the summary.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let shifts: EngineResult<Vec<ShiftRecord>> = request
        .shifts
        .into_iter()
        .map(ShiftRecord::try_from)
        .collect();

    match shifts.and_then(|shifts| calculate_pay_summary(&shifts, state.config().config())) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                shifts_count = summary.payments.len(),
                gross_pay = %summary.totals.gross_pay_display,
                duration_us = summary.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for POST /round endpoint.
///
/// Rounds each amount to two decimal places, half to even.
async fn round_handler(payload: Result<Json<RoundRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(message) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %message,
            "Rejected rounding request"
        );
        return json_response(StatusCode::BAD_REQUEST, ApiError::validation_error(message));
    }

    let rounded: Vec<f32> = request.amounts.iter().copied().map(round_currency).collect();
    info!(
        correlation_id = %correlation_id,
        amounts_count = rounded.len(),
        "Rounded amounts"
    );

    json_response(StatusCode::OK, RoundResponse { rounded })
}
