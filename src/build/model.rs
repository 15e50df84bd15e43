//! BuildConfig struct definition.

use super::types::{BuildType, CompileOptions, Dependency, TestOptions};
use super::warnings::LoadWarning;
use serde::Serialize;
use std::collections::BTreeMap;

/// Validated build configuration of one Android application module.
///
/// Instances only come out of the loader, after every rule has passed, and
/// are never mutated afterwards. Serialized field names match the YAML/JSON
/// document format, so `to_yaml` output loads back into an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Applied plugin ids, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Package used for generated `R`/`BuildConfig` classes.
    /// Defaults to `application_id` when not declared.
    pub namespace: String,

    pub application_id: String,

    pub compile_sdk: u32,

    pub min_sdk: u32,

    /// Defaults to `min_sdk` when not declared.
    pub target_sdk: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,

    /// Fully-qualified instrumentation runner class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_instrumentation_runner: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub build_types: BTreeMap<String, BuildType>,

    #[serde(skip_serializing_if = "CompileOptions::is_empty")]
    pub compile_options: CompileOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_timeout_ms: Option<u64>,

    #[serde(skip_serializing_if = "TestOptions::is_default")]
    pub test_options: TestOptions,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
}

/// A successfully loaded configuration plus its non-fatal warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub config: BuildConfig,
    pub warnings: Vec<LoadWarning>,
}

impl Loaded {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
