//! Build configuration model for an Android application module.
//!
//! A build file is read into an unvalidated raw document, then checked and
//! converted into an immutable `BuildConfig`. Loading either fails on the
//! first fatal problem or returns the config with its non-fatal warnings.

mod coordinate;
mod model;
mod operations;
mod raw;
mod source;
mod types;
mod validate;
mod warnings;


// Re-export public API
pub use coordinate::Coordinate;
pub use model::{BuildConfig, Loaded};
pub use source::{BUILD_FILE_CANDIDATES, BuildSource, SourceFormat};
pub use types::{
    BuildType, CompileOptions, Dependency, DependencyScope, JavaVersion, ProguardFile, TestOptions,
};
pub use warnings::{LoadWarning, WarningKind};

pub(crate) use raw::{RawBuildConfig, RawDependency};
