//! Configuration loading and management for the Shift Pay Engine.
//!
//! Settings live in a single `engine.yaml` inside a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Amounts are in {}", config.config().currency_label);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, ENGINE_CONFIG_FILE};
pub use types::{DEFAULT_INTERVAL_MINUTES, DEFAULT_MAX_SHIFT_HOURS, EngineConfig};
