//! Locating a build file and detecting its format.

use super::model::{BuildConfig, Loaded};
use crate::error::{DroidspecError, Result};
use std::path::{Path, PathBuf};

/// Files looked for, in order, when a directory is given.
///
/// A project root's own `build.gradle.kts` has no `android` block, so the
/// `app` module is tried first.
pub const BUILD_FILE_CANDIDATES: [&str; 3] = [
    "app/build.gradle.kts",
    "build.gradle.kts",
    "droidspec-build.yaml",
];

/// Serialization format of a build file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Gradle Kotlin DSL.
    Kts,
    Yaml,
    Json,
}

impl SourceFormat {
    /// Detect the format from a file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".kts") {
            Some(Self::Kts)
        } else if name.ends_with(".yaml") || name.ends_with(".yml") {
            Some(Self::Yaml)
        } else if name.ends_with(".json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// A build file together with its detected format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSource {
    pub path: PathBuf,
    pub format: SourceFormat,
}

impl BuildSource {
    /// Resolve a file or directory argument to a build file.
    ///
    /// Directories are searched for `BUILD_FILE_CANDIDATES`. Files are taken
    /// as given; their existence is checked when they are read.
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.is_dir() {
            for candidate in BUILD_FILE_CANDIDATES {
                let candidate = path.join(candidate);
                if candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "discovered build file");
                    return Self::resolve(candidate);
                }
            }
            return Err(DroidspecError::UserError(format!(
                "no build file found in '{}' (looked for {})",
                path.display(),
                BUILD_FILE_CANDIDATES.join(", ")
            )));
        }

        let format = SourceFormat::from_path(path).ok_or_else(|| {
            DroidspecError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    /// Directory holding the build file; `.` for a bare relative file name.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|source| DroidspecError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Read, parse, and validate the build file.
    pub fn load(&self) -> Result<Loaded> {
        tracing::debug!(path = %self.path.display(), format = ?self.format, "loading build configuration");
        let content = self.read()?;
        let loaded = BuildConfig::parse(&content, self.format)?;
        tracing::info!(
            path = %self.path.display(),
            application_id = %loaded.config.application_id,
            warnings = loaded.warnings.len(),
            "build configuration loaded"
        );
        Ok(loaded)
    }
}
