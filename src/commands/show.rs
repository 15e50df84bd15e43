//! Implementation of the `droidspec show` command.

use crate::cli::ShowArgs;
use droidspec::Result;
use droidspec::build::SourceFormat;
use std::path::Path;

/// Execute the `droidspec show` command.
///
/// Prints the validated configuration in canonical form. Warnings left by
/// the policy go to stderr so stdout can be piped back into the loader.
pub fn cmd_show(args: ShowArgs, config_path: Option<&Path>) -> Result<()> {
    let (_, loaded) = super::load_with_policy(&args.path, config_path)?;

    for warning in &loaded.warnings {
        eprintln!("warning: {}", warning);
    }

    let rendered = loaded.config.render(SourceFormat::from(args.format))?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use droidspec::DroidspecError;
    use tempfile::TempDir;

    const BUILD: &str = r#"
android {
    compileSdk = 34
    defaultConfig {
        applicationId = "com.example.shop"
        minSdk = 25
    }
}
dependencies {
    implementation("com.squareup.okhttp3:okhttp:4.12.0")
    implementation("com.squareup.okhttp3:okhttp:4.12.0")
}
"#;

    fn module(policy: Option<&str>) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("build.gradle.kts"), BUILD).unwrap();
        if let Some(policy) = policy {
            std::fs::write(dir.path().join(".droidspec.yaml"), policy).unwrap();
        }
        dir
    }

    fn args(dir: &TempDir) -> ShowArgs {
        ShowArgs {
            path: dir.path().to_path_buf(),
            format: OutputFormat::Yaml,
        }
    }

    #[test]
    fn show_rejects_warning_under_error_policy() {
        let dir = module(Some("duplicate_dependencies: error\n"));

        let err = cmd_show(args(&dir), None).unwrap_err();
        assert!(matches!(
            err,
            DroidspecError::PolicyViolation {
                policy: "duplicate_dependencies",
                ..
            }
        ));
        assert_eq!(err.exit_code(), droidspec::exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn show_honours_explicit_policy_file() {
        let dir = module(None);
        let policy = dir.path().join("ci.yaml");
        std::fs::write(&policy, "duplicate_dependencies: error\n").unwrap();

        assert!(cmd_show(args(&dir), Some(&policy)).is_err());
    }

    #[test]
    fn show_succeeds_with_default_and_ignore_policies() {
        assert!(cmd_show(args(&module(None)), None).is_ok());
        assert!(cmd_show(args(&module(Some("duplicate_dependencies: ignore\n"))), None).is_ok());
    }
}
