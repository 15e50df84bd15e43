//! Value types shared by the build configuration model.
//!
//! This module defines enums and small records used by `BuildConfig`:
//! dependency scopes, Java language levels, ProGuard file references,
//! build types, and the option blocks.

use crate::build::coordinate::Coordinate;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Configuration a dependency is declared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyScope {
    /// Compiled into the application.
    Implementation,
    /// Available to local unit tests.
    TestImplementation,
    /// Available to on-device instrumentation tests.
    AndroidTestImplementation,
}

impl DependencyScope {
    /// All supported scopes, in declaration order.
    pub const ALL: [DependencyScope; 3] = [
        DependencyScope::Implementation,
        DependencyScope::TestImplementation,
        DependencyScope::AndroidTestImplementation,
    ];

    /// Parse a scope from its DSL name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "implementation" => Some(Self::Implementation),
            "testImplementation" => Some(Self::TestImplementation),
            "androidTestImplementation" => Some(Self::AndroidTestImplementation),
            _ => None,
        }
    }

    /// DSL name of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Implementation => "implementation",
            Self::TestImplementation => "testImplementation",
            Self::AndroidTestImplementation => "androidTestImplementation",
        }
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub scope: DependencyScope,
    pub coordinate: Coordinate,
}

static JAVA_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:JavaVersion\.)?(?:VERSION_)?(?:1[._](\d+)|(\d+))$")
        .expect("java version pattern is valid")
});

/// Java language level used for `sourceCompatibility`/`targetCompatibility`.
///
/// Legacy `1.x` levels normalize to their major number, so `VERSION_1_8`
/// and `8` are the same level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JavaVersion(u8);

impl JavaVersion {
    /// Parse `VERSION_1_8`, `JavaVersion.VERSION_17`, `1.8`, or `11`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let caps = JAVA_VERSION_RE.captures(s.trim())?;
        let digits = caps.get(1).or_else(|| caps.get(2))?.as_str();
        let major: u8 = digits.parse().ok()?;
        if major == 0 {
            return None;
        }
        Some(Self(major))
    }

    /// Major language level (8 for `VERSION_1_8`).
    pub fn major(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 10 {
            write!(f, "VERSION_1_{}", self.0)
        } else {
            write!(f, "VERSION_{}", self.0)
        }
    }
}

impl Serialize for JavaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An entry of a build type's `proguardFiles` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProguardFile {
    /// A project-relative rules file.
    Path(String),
    /// A rules file bundled with the Android toolchain
    /// (`getDefaultProguardFile(...)`).
    Bundled { default: String },
}

impl ProguardFile {
    /// File name or path this entry refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Bundled { default } => default,
        }
    }
}

/// Shrinking and obfuscation settings for one build variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildType {
    pub minify_enabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub proguard_files: Vec<ProguardFile>,
}

/// Java language levels for the module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_compatibility: Option<JavaVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_compatibility: Option<JavaVersion>,
}

impl CompileOptions {
    pub fn is_empty(&self) -> bool {
        self.source_compatibility.is_none() && self.target_compatibility.is_none()
    }
}

/// Instrumentation test settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOptions {
    pub animations_disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_timeout_ms: Option<u64>,
}

impl TestOptions {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_scope_from_str() {
        assert_eq!(
            DependencyScope::from_str("implementation"),
            Some(DependencyScope::Implementation)
        );
        assert_eq!(
            DependencyScope::from_str("testImplementation"),
            Some(DependencyScope::TestImplementation)
        );
        assert_eq!(
            DependencyScope::from_str("androidTestImplementation"),
            Some(DependencyScope::AndroidTestImplementation)
        );
        assert_eq!(DependencyScope::from_str("debugImplementation"), None);
    }

    #[test]
    fn test_dependency_scope_names_round_trip() {
        for scope in DependencyScope::ALL {
            assert_eq!(DependencyScope::from_str(scope.as_str()), Some(scope));
        }
    }

    #[test]
    fn test_java_version_accepts_legacy_and_modern_names() {
        assert_eq!(JavaVersion::from_str("VERSION_1_8").unwrap().major(), 8);
        assert_eq!(JavaVersion::from_str("JavaVersion.VERSION_1_8").unwrap().major(), 8);
        assert_eq!(JavaVersion::from_str("1.8").unwrap().major(), 8);
        assert_eq!(JavaVersion::from_str("VERSION_11").unwrap().major(), 11);
        assert_eq!(JavaVersion::from_str("JavaVersion.VERSION_17").unwrap().major(), 17);
        assert_eq!(JavaVersion::from_str("21").unwrap().major(), 21);
    }

    #[test]
    fn test_java_version_rejects_garbage() {
        assert_eq!(JavaVersion::from_str("VERSION_X"), None);
        assert_eq!(JavaVersion::from_str("JavaVersion.CURRENT"), None);
        assert_eq!(JavaVersion::from_str("0"), None);
        assert_eq!(JavaVersion::from_str(""), None);
    }

    #[test]
    fn test_java_version_display_uses_gradle_names() {
        assert_eq!(JavaVersion::from_str("8").unwrap().to_string(), "VERSION_1_8");
        assert_eq!(JavaVersion::from_str("1.10").unwrap().to_string(), "VERSION_1_10");
        assert_eq!(JavaVersion::from_str("17").unwrap().to_string(), "VERSION_17");
    }

    #[test]
    fn test_java_version_ordering() {
        let eight = JavaVersion::from_str("VERSION_1_8").unwrap();
        let seventeen = JavaVersion::from_str("VERSION_17").unwrap();
        assert!(eight < seventeen);
    }

    #[test]
    fn test_proguard_file_yaml_shapes() {
        let files: Vec<ProguardFile> =
            serde_yaml::from_str("- default: proguard-android-optimize.txt\n- proguard-rules.pro\n")
                .unwrap();
        assert_eq!(
            files,
            vec![
                ProguardFile::Bundled {
                    default: "proguard-android-optimize.txt".to_string()
                },
                ProguardFile::Path("proguard-rules.pro".to_string()),
            ]
        );
        assert_eq!(files[0].name(), "proguard-android-optimize.txt");
    }
}
