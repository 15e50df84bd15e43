//! Error types for droidspec.
//!
//! Uses thiserror for derive macros. Every fatal variant names the offending
//! field so the message is actionable without a stack trace.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for droidspec operations.
#[derive(Error, Debug)]
pub enum DroidspecError {
    /// A required field is absent from the build configuration.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// Two ordered values are out of order (SDK levels, Java levels).
    #[error("`{lower_field}` ({lower}) must not exceed `{upper_field}` ({upper})")]
    InvalidRange {
        lower_field: &'static str,
        lower: String,
        upper_field: &'static str,
        upper: String,
    },

    /// A dependency is not a `group:artifact:version` triplet.
    #[error(
        "malformed dependency coordinate `{coordinate}` in `{scope}`: expected `group:artifact:version`"
    )]
    MalformedCoordinate { scope: String, coordinate: String },

    /// A timeout is zero or negative.
    #[error("`{field}` must be a positive number of milliseconds (found {value})")]
    InvalidTimeout { field: &'static str, value: i64 },

    /// A field holds a value of the wrong type or shape.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },

    /// The Kotlin DSL source could not be tokenized or parsed.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The input path has no recognized build file format.
    #[error("unsupported build file '{}': expected .gradle.kts, .yaml, .yml or .json", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML or JSON (de)serialization failed.
    #[error("{0}")]
    Format(String),

    /// `versionCode` did not increase relative to a baseline.
    #[error("`versionCode` must increase across releases (baseline {previous}, found {current})")]
    VersionRegression { previous: u32, current: u32 },

    /// A warning was promoted to an error by the warning policy.
    #[error("policy `{policy}` rejects warning: {warning}")]
    PolicyViolation {
        policy: &'static str,
        warning: String,
    },

    /// Warnings remained while running in strict mode.
    #[error("{0} warning(s) reported in strict mode")]
    StrictWarnings(usize),

    /// Invalid invocation or tool configuration.
    #[error("{0}")]
    UserError(String),
}

impl DroidspecError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DroidspecError::Syntax { .. }
            | DroidspecError::UnsupportedFormat { .. }
            | DroidspecError::Io { .. }
            | DroidspecError::Format(_)
            | DroidspecError::UserError(_) => exit_codes::USER_ERROR,
            DroidspecError::MissingField { .. }
            | DroidspecError::InvalidRange { .. }
            | DroidspecError::MalformedCoordinate { .. }
            | DroidspecError::InvalidTimeout { .. }
            | DroidspecError::InvalidValue { .. }
            | DroidspecError::VersionRegression { .. }
            | DroidspecError::PolicyViolation { .. } => exit_codes::VALIDATION_FAILURE,
            DroidspecError::StrictWarnings(_) => exit_codes::STRICT_WARNINGS,
        }
    }

    pub(crate) fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DroidspecError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for droidspec operations.
pub type Result<T> = std::result::Result<T, DroidspecError>;
