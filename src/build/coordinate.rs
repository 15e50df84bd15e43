//! Maven `group:artifact:version` coordinates.

use serde::{Serialize, Serializer};
use std::fmt;

/// A parsed dependency coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    /// Parse a `group:artifact:version` triplet.
    ///
    /// Exactly three non-empty parts are accepted. Group and artifact use
    /// `[A-Za-z0-9._-]`; the version may also contain `+` (dynamic versions).
    /// Call syntax and unresolved `$` templates never match.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let mut parts = s.split(':');
        let group = parts.next()?;
        let artifact = parts.next()?;
        let version = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let name_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
        let well_formed = |part: &str, extra: &[char]| {
            !part.is_empty() && part.chars().all(|c| name_char(c) || extra.contains(&c))
        };
        if !(well_formed(group, &[]) && well_formed(artifact, &[]) && well_formed(version, &['+'])) {
            return None;
        }

        Some(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
        })
    }

    /// `group:artifact` without the version.
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
