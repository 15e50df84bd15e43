//! Exit code constants for the droidspec CLI.
//!
//! - 0: Success
//! - 1: User error (unreadable file, syntax error, bad tool config)
//! - 2: Validation failure (missing field, range, coordinate, timeout, policy)
//! - 3: Warnings present while running with `--strict`

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unreadable input, syntax error, or unsupported format.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the build configuration was rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// The configuration loaded, but warnings were promoted by `--strict`.
pub const STRICT_WARNINGS: i32 = 3;
