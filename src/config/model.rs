//! Config struct definition and default implementation.

use super::types::WarningPolicy;
use serde::{Deserialize, Serialize};

/// Configuration for droidspec itself.
///
/// This struct represents the contents of `.droidspec.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Warning policies
    // =========================================================================
    /// The same coordinate declared twice in one scope.
    pub duplicate_dependencies: WarningPolicy,

    /// One module declared with several versions in one scope.
    pub conflicting_versions: WarningPolicy,

    /// Dependencies under configurations other than the supported scopes.
    pub unknown_scopes: WarningPolicy,

    // =========================================================================
    // Exemptions
    // =========================================================================
    /// `group:artifact` modules whose duplicate/conflict warnings are dropped.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_modules: Vec<String>,
}
