//! Configuration types for the Shift Pay Engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from `engine.yaml`.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default length of a pay interval in minutes.
pub const DEFAULT_INTERVAL_MINUTES: u32 = 30;

/// Default upper bound on the hours a single shift may claim.
pub const DEFAULT_MAX_SHIFT_HOURS: f32 = 24.0;

fn default_currency_label() -> String {
    "GBP".to_string()
}

fn default_interval_minutes() -> u32 {
    DEFAULT_INTERVAL_MINUTES
}

fn default_max_shift_hours() -> f32 {
    DEFAULT_MAX_SHIFT_HOURS
}

/// Engine settings.
///
/// Every field has a default, so an empty `engine.yaml` is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Label reported alongside amounts. Purely informational.
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
    /// Length of one pay interval in minutes.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
    /// Shifts claiming more hours than this are rejected.
    #[serde(default = "default_max_shift_hours")]
    pub max_shift_hours: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency_label: default_currency_label(),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            max_shift_hours: DEFAULT_MAX_SHIFT_HOURS,
        }
    }
}

impl EngineConfig {
    /// Checks that the settings are usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.interval_minutes == 0 {
            return Err(EngineError::InvalidConfig {
                field: "interval_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if !self.max_shift_hours.is_finite() || self.max_shift_hours <= 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "max_shift_hours".to_string(),
                message: format!("must be a positive number, got {}", self.max_shift_hours),
            });
        }

        Ok(())
    }

    /// Returns the interval length in hours.
    pub fn interval_hours(&self) -> f32 {
        self.interval_minutes as f32 / 60.0
    }
}
