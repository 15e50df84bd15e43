//! CLI argument parsing for droidspec.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use droidspec::build::SourceFormat;
use std::path::PathBuf;

/// Droidspec: load and validate Android module build configurations.
///
/// Reads a module's `build.gradle.kts` (or an equivalent YAML/JSON file),
/// reports fatal problems with the offending field, and lists non-fatal
/// warnings such as duplicated dependencies.
#[derive(Parser, Debug)]
#[command(name = "droidspec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by DROIDSPEC_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Warning policy file (default: nearest .droidspec.yaml above the build file).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for droidspec.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate a build configuration.
    ///
    /// Exits 0 when valid, 2 when loading fails, and 3 when `--strict`
    /// is given and warnings remain after the policy is applied.
    Check(CheckArgs),

    /// Print the validated configuration in canonical form.
    Show(ShowArgs),
}

/// Report format for `check`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    Kts,
}

impl From<OutputFormat> for SourceFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => SourceFormat::Yaml,
            OutputFormat::Json => SourceFormat::Json,
            OutputFormat::Kts => SourceFormat::Kts,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Build file, or a directory to search for one.
    pub path: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Treat remaining warnings as a failure.
    #[arg(long)]
    pub strict: bool,

    /// Previous release's build file; versionCode must increase relative to it.
    #[arg(long, value_name = "PATH")]
    pub baseline: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Build file, or a directory to search for one.
    pub path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
