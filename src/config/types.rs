//! Configuration types and defaults for droidspec.

use serde::{Deserialize, Serialize};

/// What to do with one category of load warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WarningPolicy {
    /// Report the warning and keep going (default).
    #[default]
    Warn,
    /// Reject the configuration.
    Error,
    /// Drop the warning silently.
    Ignore,
}

impl WarningPolicy {
    /// Parse a warning policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }
}

/// File names searched for, in order, in the build file's directory and
/// each of its ancestors.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".droidspec.yaml", "droidspec.yaml"];
