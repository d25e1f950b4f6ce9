//! HTTP API module for the Shift Pay Engine.
//!
//! This module provides the REST API endpoints for rounding amounts and
//! calculating shift pay.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RoundRequest, RoundResponse, ShiftRequest};
pub use response::ApiError;
pub use state::AppState;
