//! BuildConfig loading, serialization, and release checks.

use super::model::{BuildConfig, Loaded};
use super::raw::RawBuildConfig;
use super::source::{BuildSource, SourceFormat};
use super::validate::validate;
use crate::error::{DroidspecError, Result};
use crate::kts;
use std::path::Path;

impl BuildConfig {
    /// Load and validate a build file.
    ///
    /// # Arguments
    ///
    /// * `path` - A build file (`.gradle.kts`, `.yaml`, `.yml`, `.json`) or a
    ///   directory containing one
    ///
    /// # Returns
    ///
    /// * `Ok(Loaded)` - The validated config plus any warnings
    /// * `Err(DroidspecError)` - The first fatal problem, naming the field
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Loaded> {
        BuildSource::resolve(path)?.load()
    }

    /// Parse and validate `content` in the given format.
    pub fn parse(content: &str, format: SourceFormat) -> Result<Loaded> {
        match format {
            SourceFormat::Kts => Self::from_kts(content),
            SourceFormat::Yaml => Self::from_yaml(content),
            SourceFormat::Json => Self::from_json(content),
        }
    }

    /// Parse a `build.gradle.kts` script.
    pub fn from_kts(source: &str) -> Result<Loaded> {
        let script = kts::parse(source)?;
        validate(kts::lower(&script)?)
    }

    /// Parse a YAML build document. Unknown keys are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Loaded> {
        let raw: RawBuildConfig = serde_yaml::from_str(yaml)
            .map_err(|e| DroidspecError::Format(format!("failed to parse build YAML: {}", e)))?;
        validate(raw)
    }

    /// Parse a JSON build document. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Loaded> {
        let raw: RawBuildConfig = serde_json::from_str(json)
            .map_err(|e| DroidspecError::Format(format!("failed to parse build JSON: {}", e)))?;
        validate(raw)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DroidspecError::Format(format!("failed to serialize build config to YAML: {}", e))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DroidspecError::Format(format!("failed to serialize build config to JSON: {}", e))
        })
    }

    /// Render as a canonical `build.gradle.kts` script.
    pub fn to_kts(&self) -> String {
        kts::render(self)
    }

    /// Serialize in the given format.
    pub fn render(&self, format: SourceFormat) -> Result<String> {
        match format {
            SourceFormat::Kts => Ok(self.to_kts()),
            SourceFormat::Yaml => self.to_yaml(),
            SourceFormat::Json => self.to_json(),
        }
    }

    /// Require `versionCode` to increase relative to a previous release.
    ///
    /// Passes when either side has no `versionCode`.
    pub fn check_version_bump(&self, previous: &BuildConfig) -> Result<()> {
        if let (Some(previous), Some(current)) = (previous.version_code, self.version_code)
            && current <= previous
        {
            return Err(DroidspecError::VersionRegression { previous, current });
        }
        Ok(())
    }
}
