//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter (`RUST_LOG` syntax).
pub const LOG_ENV: &str = "DROIDSPEC_LOG";

/// Filter used when `DROIDSPEC_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "droidspec=debug"
    } else {
        "droidspec=warn"
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "droidspec=warn");
        assert_eq!(default_directive(true), "droidspec=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
