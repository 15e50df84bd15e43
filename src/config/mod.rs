//! Configuration model for droidspec.
//!
//! This module defines the Config struct that represents `.droidspec.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and decides how load warnings are treated.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{CONFIG_FILE_NAMES, WarningPolicy};
