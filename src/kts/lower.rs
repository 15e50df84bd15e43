//! Lowering from the DSL syntax tree into the raw build document.
//!
//! Only the statements that describe the module are interpreted. Anything
//! else is skipped with a debug log so newer DSL features do not break
//! loading. A known key holding the wrong kind of value is an error.

use super::ast::{Call, Expr, Statement, StatementKind};
use crate::build::{BuildType, ProguardFile, RawBuildConfig, RawDependency};
use crate::error::{DroidspecError, Result};

pub(crate) fn lower(script: &[Statement]) -> Result<RawBuildConfig> {
    let mut raw = RawBuildConfig::default();

    for stmt in script {
        match &stmt.kind {
            StatementKind::Block { name, body } => match name.as_str() {
                "plugins" => lower_plugins(&mut raw, body),
                "android" => lower_android(&mut raw, body)?,
                "dependencies" => lower_dependencies(&mut raw, body),
                _ => skip(stmt, name),
            },
            _ => skip(stmt, "top-level"),
        }
    }

    Ok(raw)
}

fn lower_plugins(raw: &mut RawBuildConfig, body: &[Statement]) {
    for stmt in body {
        match &stmt.kind {
            StatementKind::Call { call, .. } if call.name == "id" || call.name == "alias" => {
                match call.args.first().map(|arg| &arg.value) {
                    Some(Expr::Str(id)) => raw.plugins.push(id.clone()),
                    Some(other) => raw.plugins.push(other.to_string()),
                    None => skip(stmt, "plugins"),
                }
            }
            _ => skip(stmt, "plugins"),
        }
    }
}

fn lower_android(raw: &mut RawBuildConfig, body: &[Statement]) -> Result<()> {
    for stmt in body {
        match &stmt.kind {
            StatementKind::Assign { target, value, .. } => match single(target) {
                Some("namespace") => raw.namespace = Some(string("namespace", value)?),
                Some("compileSdk") => raw.compile_sdk = Some(int("compileSdk", value)?),
                _ => skip(stmt, "android"),
            },
            StatementKind::Block { name, body } => match name.as_str() {
                "defaultConfig" => lower_default_config(raw, body)?,
                "buildTypes" => lower_build_types(raw, body)?,
                "compileOptions" => lower_compile_options(raw, body)?,
                "installation" => {
                    if let Some(timeout) = installation_timeout("installationTimeoutMs", body)? {
                        raw.installation_timeout_ms = Some(timeout);
                    }
                }
                "testOptions" => lower_test_options(raw, body)?,
                _ => skip(stmt, "android"),
            },
            StatementKind::Call { .. } => skip(stmt, "android"),
        }
    }
    Ok(())
}

fn lower_default_config(raw: &mut RawBuildConfig, body: &[Statement]) -> Result<()> {
    for stmt in body {
        let StatementKind::Assign { target, value, .. } = &stmt.kind else {
            skip(stmt, "defaultConfig");
            continue;
        };
        match single(target) {
            Some("applicationId") => raw.application_id = Some(string("applicationId", value)?),
            Some("minSdk") => raw.min_sdk = Some(int("minSdk", value)?),
            Some("targetSdk") => raw.target_sdk = Some(int("targetSdk", value)?),
            Some("versionCode") => raw.version_code = Some(int("versionCode", value)?),
            Some("versionName") => raw.version_name = Some(string("versionName", value)?),
            Some("testInstrumentationRunner") => {
                raw.test_instrumentation_runner =
                    Some(string("testInstrumentationRunner", value)?)
            }
            _ => skip(stmt, "defaultConfig"),
        }
    }
    Ok(())
}

fn lower_build_types(raw: &mut RawBuildConfig, body: &[Statement]) -> Result<()> {
    for stmt in body {
        let (name, body) = match &stmt.kind {
            StatementKind::Block { name, body } => (name.clone(), body),
            StatementKind::Call {
                call,
                body: Some(body),
                ..
            } if matches!(call.name.as_str(), "getByName" | "create" | "maybeCreate" | "named") => {
                match call.args.first().map(|arg| &arg.value) {
                    Some(Expr::Str(name)) => (name.clone(), body),
                    _ => {
                        skip(stmt, "buildTypes");
                        continue;
                    }
                }
            }
            _ => {
                skip(stmt, "buildTypes");
                continue;
            }
        };

        // Repeated blocks for one build type configure the same variant.
        let build_type = raw.build_types.entry(name.clone()).or_default();
        lower_build_type(&name, build_type, body)?;
    }
    Ok(())
}

fn lower_build_type(name: &str, build_type: &mut BuildType, body: &[Statement]) -> Result<()> {
    for stmt in body {
        match &stmt.kind {
            StatementKind::Assign { target, value, .. }
                if matches!(single(target), Some("isMinifyEnabled" | "minifyEnabled")) =>
            {
                build_type.minify_enabled =
                    boolean(&format!("buildTypes.{}.minifyEnabled", name), value)?;
            }
            StatementKind::Call { call, .. }
                if call.name == "proguardFiles" || call.name == "proguardFile" =>
            {
                for arg in &call.args {
                    build_type.proguard_files.push(proguard_file(name, &arg.value)?);
                }
            }
            _ => skip(stmt, "buildType"),
        }
    }
    Ok(())
}

fn proguard_file(build_type: &str, value: &Expr) -> Result<ProguardFile> {
    match value {
        Expr::Str(path) => Ok(ProguardFile::Path(path.clone())),
        Expr::Call(Call { name, args }) if name == "getDefaultProguardFile" => {
            match args.first().map(|arg| &arg.value) {
                Some(Expr::Str(default)) if args.len() == 1 => Ok(ProguardFile::Bundled {
                    default: default.clone(),
                }),
                _ => Err(DroidspecError::invalid_value(
                    format!("buildTypes.{}.proguardFiles", build_type),
                    "getDefaultProguardFile expects a single string argument",
                )),
            }
        }
        other => Err(DroidspecError::invalid_value(
            format!("buildTypes.{}.proguardFiles", build_type),
            format!("expected a path string, found `{}`", other),
        )),
    }
}

fn lower_compile_options(raw: &mut RawBuildConfig, body: &[Statement]) -> Result<()> {
    for stmt in body {
        let StatementKind::Assign { target, value, .. } = &stmt.kind else {
            skip(stmt, "compileOptions");
            continue;
        };
        match single(target) {
            Some("sourceCompatibility") => {
                raw.compile_options.source_compatibility =
                    Some(java_level("compileOptions.sourceCompatibility", value)?)
            }
            Some("targetCompatibility") => {
                raw.compile_options.target_compatibility =
                    Some(java_level("compileOptions.targetCompatibility", value)?)
            }
            _ => skip(stmt, "compileOptions"),
        }
    }
    Ok(())
}

fn lower_test_options(raw: &mut RawBuildConfig, body: &[Statement]) -> Result<()> {
    for stmt in body {
        match &stmt.kind {
            StatementKind::Assign { target, value, .. }
                if single(target) == Some("animationsDisabled") =>
            {
                raw.test_options.animations_disabled =
                    boolean("testOptions.animationsDisabled", value)?;
            }
            StatementKind::Block { name, body } if name == "installation" => {
                if let Some(timeout) =
                    installation_timeout("testOptions.installationTimeoutMs", body)?
                {
                    raw.test_options.installation_timeout_ms = Some(timeout);
                }
            }
            _ => skip(stmt, "testOptions"),
        }
    }
    Ok(())
}

fn installation_timeout(field: &str, body: &[Statement]) -> Result<Option<i64>> {
    let mut timeout = None;
    for stmt in body {
        match &stmt.kind {
            StatementKind::Assign { target, value, .. } if single(target) == Some("timeOutInMs") => {
                timeout = Some(int(field, value)?);
            }
            _ => skip(stmt, "installation"),
        }
    }
    Ok(timeout)
}

fn lower_dependencies(raw: &mut RawBuildConfig, body: &[Statement]) {
    for stmt in body {
        let StatementKind::Call { call, .. } = &stmt.kind else {
            skip(stmt, "dependencies");
            continue;
        };

        // Anything other than one string literal cannot be a triplet and is
        // rejected during validation.
        let coordinate = match call.args.as_slice() {
            [arg] if arg.name.is_none() => match &arg.value {
                Expr::Str(coordinate) => coordinate.clone(),
                other => other.to_string(),
            },
            _ => call.to_string(),
        };

        raw.dependencies.push(RawDependency {
            scope: call.name.clone(),
            coordinate,
            line: Some(stmt.line),
        });
    }
}

fn single(target: &[String]) -> Option<&str> {
    match target {
        [name] => Some(name.as_str()),
        _ => None,
    }
}

fn skip(stmt: &Statement, context: &str) {
    tracing::debug!(
        line = stmt.line,
        column = stmt.column,
        context,
        "skipping unsupported statement"
    );
}

fn type_error(field: &str, expected: &str, found: &Expr) -> DroidspecError {
    DroidspecError::invalid_value(
        field,
        format!("expected {}, found {} `{}`", expected, found.kind_name(), found),
    )
}

fn string(field: &str, value: &Expr) -> Result<String> {
    match value {
        Expr::Str(s) => Ok(s.clone()),
        other => Err(type_error(field, "a string", other)),
    }
}

fn int(field: &str, value: &Expr) -> Result<i64> {
    match value {
        Expr::Int(n) => Ok(*n),
        other => Err(type_error(field, "an integer", other)),
    }
}

fn boolean(field: &str, value: &Expr) -> Result<bool> {
    match value {
        Expr::Bool(b) => Ok(*b),
        other => Err(type_error(field, "a boolean", other)),
    }
}

fn java_level(field: &str, value: &Expr) -> Result<String> {
    match value {
        Expr::Path(segments) => Ok(segments.join(".")),
        Expr::Str(s) => Ok(s.clone()),
        other => Err(type_error(field, "a JavaVersion", other)),
    }
}
