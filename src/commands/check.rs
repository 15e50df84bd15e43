//! Implementation of the `droidspec check` command.
//!
//! Loads a build file, applies the warning policy, optionally compares
//! `versionCode` against a baseline, and prints a report.

use crate::cli::{CheckArgs, ReportFormat};
use droidspec::build::BuildSource;
use droidspec::{BuildConfig, DroidspecError, LoadWarning, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Summary of a successful check, as printed with `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport<'a> {
    pub path: String,
    pub application_id: &'a str,
    pub namespace: &'a str,
    pub min_sdk: u32,
    pub target_sdk: u32,
    pub compile_sdk: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<&'a str>,
    pub dependencies: usize,
    pub warnings: &'a [LoadWarning],
}

impl<'a> CheckReport<'a> {
    pub fn new(path: &Path, config: &'a BuildConfig, warnings: &'a [LoadWarning]) -> Self {
        Self {
            path: path.display().to_string(),
            application_id: &config.application_id,
            namespace: &config.namespace,
            min_sdk: config.min_sdk,
            target_sdk: config.target_sdk,
            compile_sdk: config.compile_sdk,
            version_code: config.version_code,
            version_name: config.version_name.as_deref(),
            dependencies: config.dependencies.len(),
            warnings,
        }
    }
}

/// Execute the `droidspec check` command.
pub fn cmd_check(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    let (source, loaded) = super::load_with_policy(&args.path, config_path)?;
    let warnings = loaded.warnings;

    if let Some(baseline) = &args.baseline {
        let previous = BuildSource::resolve(baseline)?.load()?;
        loaded.config.check_version_bump(&previous.config)?;
    }

    let report = CheckReport::new(&source.path, &loaded.config, &warnings);
    match args.format {
        ReportFormat::Text => print!("{}", format_text_report(&report)),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                DroidspecError::Format(format!("failed to serialize check report: {}", e))
            })?;
            println!("{}", json);
        }
    }

    if args.strict && !warnings.is_empty() {
        return Err(DroidspecError::StrictWarnings(warnings.len()));
    }

    Ok(())
}

/// Render the human-readable report.
pub fn format_text_report(report: &CheckReport<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}: ok", report.path);
    if report.namespace == report.application_id {
        let _ = writeln!(out, "  application: {}", report.application_id);
    } else {
        let _ = writeln!(
            out,
            "  application: {} (namespace {})",
            report.application_id, report.namespace
        );
    }
    let _ = writeln!(
        out,
        "  sdk:         min {}, target {}, compile {}",
        report.min_sdk, report.target_sdk, report.compile_sdk
    );
    match (report.version_name, report.version_code) {
        (Some(name), Some(code)) => {
            let _ = writeln!(out, "  version:     {} ({})", name, code);
        }
        (Some(name), None) => {
            let _ = writeln!(out, "  version:     {}", name);
        }
        (None, Some(code)) => {
            let _ = writeln!(out, "  version:     ({})", code);
        }
        (None, None) => {}
    }
    let _ = writeln!(out, "  dependencies: {}", report.dependencies);

    for warning in report.warnings {
        let _ = writeln!(out, "warning: {}", warning);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BUILD: &str = r#"
android {
    namespace = "com.example.shop"
    compileSdk = 34
    defaultConfig {
        applicationId = "com.example.shop"
        minSdk = 25
        targetSdk = 34
        versionCode = 3
        versionName = "1.2"
    }
}
dependencies {
    testImplementation("junit:junit:4.13.2")
    testImplementation("junit:junit:4.13.2")
}
"#;

    fn write_module(dir: &TempDir, source: &str) -> std::path::PathBuf {
        let path = dir.path().join("build.gradle.kts");
        std::fs::write(&path, source).unwrap();
        path
    }

    fn args(path: &Path) -> CheckArgs {
        CheckArgs {
            path: path.to_path_buf(),
            format: ReportFormat::Text,
            strict: false,
            baseline: None,
        }
    }

    #[test]
    fn text_report_lists_summary_and_warnings() {
        let loaded = BuildConfig::from_kts(BUILD).unwrap();
        let report = CheckReport::new(
            Path::new("app/build.gradle.kts"),
            &loaded.config,
            &loaded.warnings,
        );

        let text = format_text_report(&report);
        assert!(text.starts_with("app/build.gradle.kts: ok\n"));
        assert!(text.contains("  application: com.example.shop\n"));
        assert!(text.contains("min 25, target 34, compile 34"));
        assert!(text.contains("  version:     1.2 (3)\n"));
        assert!(text.contains("  dependencies: 2\n"));
        assert!(text.contains("warning: duplicate dependency `junit:junit:4.13.2`"));
    }

    #[test]
    fn json_report_shape() {
        let loaded = BuildConfig::from_kts(BUILD).unwrap();
        let report = CheckReport::new(Path::new("build.gradle.kts"), &loaded.config, &loaded.warnings);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["applicationId"], "com.example.shop");
        assert_eq!(value["minSdk"], 25);
        assert_eq!(value["versionCode"], 3);
        assert_eq!(value["warnings"][0]["kind"], "duplicate_dependency");
        assert_eq!(value["warnings"][0]["occurrences"], 2);
    }

    #[test]
    fn strict_mode_fails_on_warnings() {
        let dir = TempDir::new().unwrap();
        let path = write_module(&dir, BUILD);

        let mut strict = args(&path);
        strict.strict = true;
        let err = cmd_check(strict, None).unwrap_err();
        assert!(matches!(err, DroidspecError::StrictWarnings(1)));

        assert!(cmd_check(args(&path), None).is_ok());
    }

    #[test]
    fn policy_file_can_silence_strict_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_module(&dir, BUILD);
        std::fs::write(
            dir.path().join(".droidspec.yaml"),
            "duplicate_dependencies: ignore\n",
        )
        .unwrap();

        let mut strict = args(&path);
        strict.strict = true;
        assert!(cmd_check(strict, None).is_ok());
    }

    #[test]
    fn baseline_requires_version_bump() {
        let dir = TempDir::new().unwrap();
        let path = write_module(&dir, BUILD);
        let baseline = dir.path().join("baseline.gradle.kts");
        std::fs::write(&baseline, BUILD.replace("versionCode = 3", "versionCode = 5")).unwrap();

        let mut with_baseline = args(&path);
        with_baseline.baseline = Some(baseline);
        let err = cmd_check(with_baseline, None).unwrap_err();
        assert!(matches!(
            err,
            DroidspecError::VersionRegression {
                previous: 5,
                current: 3
            }
        ));
    }

    #[test]
    fn invalid_build_file_is_validation_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_module(&dir, &BUILD.replace("minSdk = 25", "minSdk = 35"));

        let err = cmd_check(args(&path), None).unwrap_err();
        assert_eq!(err.exit_code(), droidspec::exit_codes::VALIDATION_FAILURE);
    }
}
