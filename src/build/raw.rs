//! Unvalidated build document.
//!
//! Every input format is first read into `RawBuildConfig`. All fields are
//! optional and integers are signed so that validation, not parsing, decides
//! what a bad value means. Unknown YAML/JSON keys are ignored.

use crate::build::types::BuildType;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawBuildConfig {
    pub plugins: Vec<String>,
    pub namespace: Option<String>,
    pub application_id: Option<String>,
    pub compile_sdk: Option<i64>,
    pub min_sdk: Option<i64>,
    pub target_sdk: Option<i64>,
    pub version_code: Option<i64>,
    pub version_name: Option<String>,
    pub test_instrumentation_runner: Option<String>,
    pub build_types: BTreeMap<String, BuildType>,
    pub compile_options: RawCompileOptions,
    pub installation_timeout_ms: Option<i64>,
    pub test_options: RawTestOptions,
    pub dependencies: Vec<RawDependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawCompileOptions {
    pub source_compatibility: Option<String>,
    pub target_compatibility: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawTestOptions {
    pub animations_disabled: bool,
    pub installation_timeout_ms: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RawDependency {
    pub scope: String,
    pub coordinate: String,
    /// Source line, when read from the Kotlin DSL.
    #[serde(skip)]
    pub line: Option<usize>,
}
