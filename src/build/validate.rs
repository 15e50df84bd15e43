//! Turns a raw document into a validated `BuildConfig`.
//!
//! Checks run in a fixed order and the first fatal error aborts:
//! required fields, SDK values, SDK ordering, identifiers, timeouts,
//! compile options, build types, dependencies.

use super::coordinate::Coordinate;
use super::model::{BuildConfig, Loaded};
use super::raw::{RawBuildConfig, RawDependency};
use super::types::{CompileOptions, Dependency, DependencyScope, JavaVersion, TestOptions};
use super::warnings::{LoadWarning, dependency_warnings};
use crate::error::{DroidspecError, Result};
use regex::Regex;
use std::sync::LazyLock;

static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$")
        .expect("package name pattern is valid")
});

static CLASS_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*\.)+[A-Za-z_$][A-Za-z0-9_$]*$")
        .expect("class name pattern is valid")
});

pub(crate) fn validate(raw: RawBuildConfig) -> Result<Loaded> {
    let application_id = raw.application_id.ok_or(DroidspecError::MissingField {
        field: "applicationId",
    })?;
    let compile_sdk = raw.compile_sdk.ok_or(DroidspecError::MissingField {
        field: "compileSdk",
    })?;
    let min_sdk = raw.min_sdk.ok_or(DroidspecError::MissingField { field: "minSdk" })?;

    let compile_sdk = positive_u32("compileSdk", compile_sdk)?;
    let min_sdk = positive_u32("minSdk", min_sdk)?;
    let target_sdk = match raw.target_sdk {
        Some(value) => positive_u32("targetSdk", value)?,
        None => min_sdk,
    };

    ensure_ordered("minSdk", min_sdk, "targetSdk", target_sdk)?;
    ensure_ordered("targetSdk", target_sdk, "compileSdk", compile_sdk)?;

    ensure_package_name("applicationId", &application_id)?;
    let namespace = match raw.namespace {
        Some(namespace) => {
            ensure_package_name("namespace", &namespace)?;
            namespace
        }
        None => application_id.clone(),
    };

    let version_code = raw
        .version_code
        .map(|value| positive_u32("versionCode", value))
        .transpose()?;

    if let Some(name) = &raw.version_name
        && name.trim().is_empty()
    {
        return Err(DroidspecError::invalid_value(
            "versionName",
            "must not be blank",
        ));
    }

    if let Some(runner) = &raw.test_instrumentation_runner
        && !CLASS_NAME_RE.is_match(runner)
    {
        return Err(DroidspecError::invalid_value(
            "testInstrumentationRunner",
            format!("'{}' is not a fully-qualified class name", runner),
        ));
    }

    let installation_timeout_ms = raw
        .installation_timeout_ms
        .map(|value| positive_timeout("installationTimeoutMs", value))
        .transpose()?;
    let test_options = TestOptions {
        animations_disabled: raw.test_options.animations_disabled,
        installation_timeout_ms: raw
            .test_options
            .installation_timeout_ms
            .map(|value| positive_timeout("testOptions.installationTimeoutMs", value))
            .transpose()?,
    };

    let compile_options = CompileOptions {
        source_compatibility: raw
            .compile_options
            .source_compatibility
            .as_deref()
            .map(|value| java_version("compileOptions.sourceCompatibility", value))
            .transpose()?,
        target_compatibility: raw
            .compile_options
            .target_compatibility
            .as_deref()
            .map(|value| java_version("compileOptions.targetCompatibility", value))
            .transpose()?,
    };
    if let (Some(source), Some(target)) = (
        compile_options.source_compatibility,
        compile_options.target_compatibility,
    ) && source > target
    {
        return Err(DroidspecError::InvalidRange {
            lower_field: "sourceCompatibility",
            lower: source.to_string(),
            upper_field: "targetCompatibility",
            upper: target.to_string(),
        });
    }

    for (name, build_type) in &raw.build_types {
        if name.trim().is_empty() {
            return Err(DroidspecError::invalid_value(
                "buildTypes",
                "build type names must be non-empty",
            ));
        }
        if build_type.proguard_files.iter().any(|f| f.name().trim().is_empty()) {
            return Err(DroidspecError::invalid_value(
                format!("buildTypes.{}.proguardFiles", name),
                "entries must be non-empty",
            ));
        }
    }

    let (dependencies, warnings) = validate_dependencies(raw.dependencies)?;

    let config = BuildConfig {
        plugins: raw.plugins,
        namespace,
        application_id,
        compile_sdk,
        min_sdk,
        target_sdk,
        version_code,
        version_name: raw.version_name,
        test_instrumentation_runner: raw.test_instrumentation_runner,
        build_types: raw.build_types,
        compile_options,
        installation_timeout_ms,
        test_options,
        dependencies,
    };

    tracing::debug!(
        application_id = %config.application_id,
        dependencies = config.dependencies.len(),
        warnings = warnings.len(),
        "build configuration validated"
    );

    Ok(Loaded { config, warnings })
}

fn validate_dependencies(raw: Vec<RawDependency>) -> Result<(Vec<Dependency>, Vec<LoadWarning>)> {
    let mut indexed = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();

    for (index, dep) in raw.into_iter().enumerate() {
        let Some(scope) = DependencyScope::from_str(&dep.scope) else {
            tracing::debug!(scope = %dep.scope, "skipping dependency with unsupported scope");
            warnings.push((
                index,
                LoadWarning::UnknownDependencyScope {
                    scope: dep.scope,
                    line: dep.line,
                },
            ));
            continue;
        };

        let coordinate = Coordinate::from_str(&dep.coordinate).ok_or_else(|| {
            DroidspecError::MalformedCoordinate {
                scope: scope.to_string(),
                coordinate: dep.coordinate.clone(),
            }
        })?;
        indexed.push((index, Dependency { scope, coordinate }));
    }

    warnings.extend(dependency_warnings(&indexed));
    warnings.sort_by_key(|(index, _)| *index);

    let dependencies = indexed.into_iter().map(|(_, dep)| dep).collect();
    let warnings = warnings.into_iter().map(|(_, warning)| warning).collect();
    Ok((dependencies, warnings))
}

fn positive_u32(field: &'static str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(DroidspecError::invalid_value(
            field,
            format!("must be greater than 0 (found {})", value),
        ));
    }
    u32::try_from(value).map_err(|_| {
        DroidspecError::invalid_value(field, format!("{} is out of range", value))
    })
}

fn positive_timeout(field: &'static str, value: i64) -> Result<u64> {
    match u64::try_from(value) {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(DroidspecError::InvalidTimeout { field, value }),
    }
}

fn ensure_ordered(
    lower_field: &'static str,
    lower: u32,
    upper_field: &'static str,
    upper: u32,
) -> Result<()> {
    if lower > upper {
        return Err(DroidspecError::InvalidRange {
            lower_field,
            lower: lower.to_string(),
            upper_field,
            upper: upper.to_string(),
        });
    }
    Ok(())
}

fn ensure_package_name(field: &'static str, value: &str) -> Result<()> {
    if !PACKAGE_NAME_RE.is_match(value) {
        return Err(DroidspecError::invalid_value(
            field,
            format!("'{}' is not a reverse-domain package name", value),
        ));
    }
    Ok(())
}

fn java_version(field: &'static str, value: &str) -> Result<JavaVersion> {
    JavaVersion::from_str(value).ok_or_else(|| {
        DroidspecError::invalid_value(field, format!("unknown Java version '{}'", value))
    })
}
