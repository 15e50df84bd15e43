//! Non-fatal findings collected while loading a build configuration.

use crate::build::coordinate::Coordinate;
use crate::build::types::{Dependency, DependencyScope};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Category of a warning, used by the warning policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    DuplicateDependency,
    ConflictingVersions,
    UnknownDependencyScope,
}

/// A warning returned alongside a successfully loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// The same coordinate is declared more than once in one scope.
    DuplicateDependency {
        scope: DependencyScope,
        coordinate: Coordinate,
        occurrences: usize,
    },
    /// One module is declared with different versions in one scope.
    ConflictingVersions {
        scope: DependencyScope,
        module: String,
        versions: Vec<String>,
    },
    /// A dependency uses a configuration other than the supported scopes.
    /// The entry is skipped.
    UnknownDependencyScope {
        scope: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<usize>,
    },
}

impl LoadWarning {
    pub fn kind(&self) -> WarningKind {
        match self {
            Self::DuplicateDependency { .. } => WarningKind::DuplicateDependency,
            Self::ConflictingVersions { .. } => WarningKind::ConflictingVersions,
            Self::UnknownDependencyScope { .. } => WarningKind::UnknownDependencyScope,
        }
    }

    /// `group:artifact` the warning is about, if any.
    pub fn module(&self) -> Option<String> {
        match self {
            Self::DuplicateDependency { coordinate, .. } => Some(coordinate.module()),
            Self::ConflictingVersions { module, .. } => Some(module.clone()),
            Self::UnknownDependencyScope { .. } => None,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDependency {
                scope,
                coordinate,
                occurrences,
            } => write!(
                f,
                "duplicate dependency `{}` declared {} times in `{}`",
                coordinate, occurrences, scope
            ),
            Self::ConflictingVersions {
                scope,
                module,
                versions,
            } => write!(
                f,
                "`{}` is declared with conflicting versions {} in `{}`",
                module,
                versions.join(", "),
                scope
            ),
            Self::UnknownDependencyScope { scope, line } => match line {
                Some(line) => write!(f, "line {}: unsupported dependency scope `{}` skipped", line, scope),
                None => write!(f, "unsupported dependency scope `{}` skipped", scope),
            },
        }
    }
}

/// Find duplicated coordinates and version conflicts among `deps`.
///
/// Each warning is paired with the index of the first dependency involved,
/// so callers can order warnings by source position.
pub(crate) fn dependency_warnings(deps: &[(usize, Dependency)]) -> Vec<(usize, LoadWarning)> {
    let mut exact: HashMap<(DependencyScope, &Coordinate), (usize, usize)> = HashMap::new();
    let mut modules: HashMap<(DependencyScope, String), (usize, Vec<String>)> = HashMap::new();

    for (index, dep) in deps {
        exact
            .entry((dep.scope, &dep.coordinate))
            .and_modify(|(_, count)| *count += 1)
            .or_insert((*index, 1));

        let (_, versions) = modules
            .entry((dep.scope, dep.coordinate.module()))
            .or_insert_with(|| (*index, Vec::new()));
        if !versions.contains(&dep.coordinate.version) {
            versions.push(dep.coordinate.version.clone());
        }
    }

    let mut warnings: Vec<(usize, LoadWarning)> = exact
        .into_iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|((scope, coordinate), (first, count))| {
            (
                first,
                LoadWarning::DuplicateDependency {
                    scope,
                    coordinate: coordinate.clone(),
                    occurrences: count,
                },
            )
        })
        .collect();

    warnings.extend(
        modules
            .into_iter()
            .filter(|(_, (_, versions))| versions.len() > 1)
            .map(|((scope, module), (first, versions))| {
                (
                    first,
                    LoadWarning::ConflictingVersions {
                        scope,
                        module,
                        versions,
                    },
                )
            }),
    );

    // Duplicates sort before conflicts that start at the same dependency.
    warnings.sort_by_key(|(first, warning)| (*first, warning.kind() != WarningKind::DuplicateDependency));
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(scope: DependencyScope, coordinate: &str) -> Dependency {
        Dependency {
            scope,
            coordinate: Coordinate::from_str(coordinate).unwrap(),
        }
    }

    fn indexed(deps: Vec<Dependency>) -> Vec<(usize, Dependency)> {
        deps.into_iter().enumerate().collect()
    }

    #[test]
    fn test_no_warnings_for_distinct_dependencies() {
        let deps = indexed(vec![
            dep(DependencyScope::Implementation, "androidx.appcompat:appcompat:1.7.0"),
            dep(DependencyScope::TestImplementation, "junit:junit:4.13.2"),
        ]);
        assert!(dependency_warnings(&deps).is_empty());
    }

    #[test]
    fn test_same_coordinate_in_different_scopes_is_not_duplicate() {
        let deps = indexed(vec![
            dep(DependencyScope::Implementation, "junit:junit:4.13.2"),
            dep(DependencyScope::TestImplementation, "junit:junit:4.13.2"),
        ]);
        assert!(dependency_warnings(&deps).is_empty());
    }

    #[test]
    fn test_duplicates_reported_in_order_of_first_occurrence() {
        let deps = indexed(vec![
            dep(DependencyScope::AndroidTestImplementation, "androidx.test.ext:junit:1.2.1"),
            dep(
                DependencyScope::AndroidTestImplementation,
                "androidx.test.espresso:espresso-core:3.6.1",
            ),
            dep(DependencyScope::AndroidTestImplementation, "androidx.test.ext:junit:1.2.1"),
            dep(
                DependencyScope::AndroidTestImplementation,
                "androidx.test.espresso:espresso-core:3.6.1",
            ),
        ]);

        let warnings = dependency_warnings(&deps);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].0, 0);
        assert_eq!(
            warnings[0].1,
            LoadWarning::DuplicateDependency {
                scope: DependencyScope::AndroidTestImplementation,
                coordinate: Coordinate::from_str("androidx.test.ext:junit:1.2.1").unwrap(),
                occurrences: 2,
            }
        );
        assert_eq!(warnings[1].0, 1);
    }

    #[test]
    fn test_conflicting_versions() {
        let deps = indexed(vec![
            dep(DependencyScope::Implementation, "com.squareup.okhttp3:okhttp:4.11.0"),
            dep(DependencyScope::Implementation, "com.squareup.okhttp3:okhttp:4.12.0"),
        ]);

        let warnings = dependency_warnings(&deps);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].1,
            LoadWarning::ConflictingVersions {
                scope: DependencyScope::Implementation,
                module: "com.squareup.okhttp3:okhttp".to_string(),
                versions: vec!["4.11.0".to_string(), "4.12.0".to_string()],
            }
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = LoadWarning::DuplicateDependency {
            scope: DependencyScope::AndroidTestImplementation,
            coordinate: Coordinate::from_str("androidx.test.ext:junit:1.2.1").unwrap(),
            occurrences: 2,
        };
        assert_eq!(
            warning.to_string(),
            "duplicate dependency `androidx.test.ext:junit:1.2.1` declared 2 times in `androidTestImplementation`"
        );

        let warning = LoadWarning::UnknownDependencyScope {
            scope: "kapt".to_string(),
            line: Some(12),
        };
        assert_eq!(
            warning.to_string(),
            "line 12: unsupported dependency scope `kapt` skipped"
        );
    }

    #[test]
    fn test_warning_json_is_tagged() {
        let warning = LoadWarning::UnknownDependencyScope {
            scope: "ksp".to_string(),
            line: None,
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "unknown_dependency_scope");
        assert_eq!(json["scope"], "ksp");
        assert!(json.get("line").is_none());
    }
}
