//! Config loading, validation, discovery, and warning policy application.

use super::model::Config;
use super::types::{CONFIG_FILE_NAMES, WarningPolicy};
use crate::build::{LoadWarning, WarningKind};
use crate::error::{DroidspecError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DroidspecError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DroidspecError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "loading droidspec config");
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DroidspecError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DroidspecError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// `ignored_modules` entries must be `group:artifact` with both parts
    /// non-empty.
    pub fn validate(&self) -> Result<()> {
        for module in &self.ignored_modules {
            let well_formed = match module.split_once(':') {
                Some((group, artifact)) => {
                    !group.is_empty() && !artifact.is_empty() && !artifact.contains(':')
                }
                None => false,
            };
            if !well_formed {
                return Err(DroidspecError::UserError(format!(
                    "config validation failed: ignored_modules entries must be 'group:artifact' (found '{}')",
                    module
                )));
            }
        }

        Ok(())
    }

    /// Find the nearest config file, starting at `start` and walking up.
    ///
    /// Relative starts are resolved against the working directory first so
    /// the walk reaches the project root.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let start = search_root(start);
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Load an explicit config file, else the nearest discovered one, else defaults.
    pub fn resolve(explicit: Option<&Path>, start: &Path) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(|| Self::discover(start)) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Policy governing a warning category.
    pub fn policy_for(&self, kind: WarningKind) -> WarningPolicy {
        match kind {
            WarningKind::DuplicateDependency => self.duplicate_dependencies,
            WarningKind::ConflictingVersions => self.conflicting_versions,
            WarningKind::UnknownDependencyScope => self.unknown_scopes,
        }
    }

    /// Apply the warning policies.
    ///
    /// Warnings under `warn` are kept, warnings under `ignore` or about an
    /// ignored module are dropped, and the first warning under `error`
    /// becomes a `PolicyViolation`.
    pub fn apply(&self, warnings: Vec<LoadWarning>) -> Result<Vec<LoadWarning>> {
        let mut kept = Vec::with_capacity(warnings.len());

        for warning in warnings {
            if let Some(module) = warning.module()
                && self.ignored_modules.contains(&module)
            {
                continue;
            }

            match self.policy_for(warning.kind()) {
                WarningPolicy::Warn => kept.push(warning),
                WarningPolicy::Ignore => {}
                WarningPolicy::Error => {
                    return Err(DroidspecError::PolicyViolation {
                        policy: policy_name(warning.kind()),
                        warning: warning.to_string(),
                    });
                }
            }
        }

        Ok(kept)
    }
}

/// Absolute form of `start`, or `start` itself when the working directory is unavailable.
pub(crate) fn search_root(start: &Path) -> PathBuf {
    let start = if start.as_os_str().is_empty() {
        Path::new(".")
    } else {
        start
    };
    std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf())
}

fn policy_name(kind: WarningKind) -> &'static str {
    match kind {
        WarningKind::DuplicateDependency => "duplicate_dependencies",
        WarningKind::ConflictingVersions => "conflicting_versions",
        WarningKind::UnknownDependencyScope => "unknown_scopes",
    }
}
