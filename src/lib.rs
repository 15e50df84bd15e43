//! droidspec: loader and validator for Android module build configurations.
//!
//! Reads a module's `build.gradle.kts` (or an equivalent YAML/JSON document)
//! into an immutable, validated [`BuildConfig`]. Loading fails on the first
//! fatal problem with an error naming the offending field; non-fatal findings
//! such as duplicated dependencies are returned alongside the config.
//!
//! ```no_run
//! use droidspec::BuildConfig;
//!
//! let loaded = BuildConfig::load("app/build.gradle.kts")?;
//! for warning in &loaded.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//! println!("{}", loaded.config.application_id);
//! # Ok::<(), droidspec::DroidspecError>(())
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod kts;
pub mod logging;

#[cfg(test)]
mod test_support;

pub use build::{BuildConfig, Loaded, LoadWarning};
pub use error::{DroidspecError, Result};
