//! Command implementations for droidspec.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod show;

use crate::cli::{Cli, Command};
use droidspec::build::BuildSource;
use droidspec::config::Config;
use droidspec::{Loaded, Result};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Check(args) => check::cmd_check(args, config),
        Command::Show(args) => show::cmd_show(args, config),
    }
}

/// Load a build file and filter its warnings through the governing policy.
///
/// The policy is `config` when given, else the nearest `.droidspec.yaml`
/// above the build file.
fn load_with_policy(path: &Path, config: Option<&Path>) -> Result<(BuildSource, Loaded)> {
    let source = BuildSource::resolve(path)?;
    let loaded = source.load()?;

    let policy = Config::resolve(config, source.dir())?;
    let warnings = policy.apply(loaded.warnings)?;

    Ok((
        source,
        Loaded {
            config: loaded.config,
            warnings,
        },
    ))
}
