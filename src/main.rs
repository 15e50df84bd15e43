//! Droidspec: load and validate Android module build configurations.
//!
//! This is the main entry point for the `droidspec` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use droidspec::{exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
