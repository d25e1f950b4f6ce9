//! Shift Pay Engine
//!
//! This crate turns hours worked and hourly rates into payable currency amounts.
//! Every amount is rounded to whole pence with round-half-to-even ("banker's
//! rounding") before it is displayed or summed.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
