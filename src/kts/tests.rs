//! Tests for lowering Kotlin DSL scripts into the raw build document.

use super::{lower, parse};
use crate::build::{BuildType, ProguardFile, RawBuildConfig};
use crate::error::DroidspecError;

fn lower_source(source: &str) -> crate::error::Result<RawBuildConfig> {
    lower(&parse(source)?)
}

#[test]
fn test_lower_default_config() {
    let raw = lower_source(
        r#"
android {
    namespace = "com.example.app"
    compileSdk = 34

    defaultConfig {
        applicationId = "com.example.app"
        minSdk = 25
        targetSdk = 34
        versionCode = 7
        versionName = "1.3"
        testInstrumentationRunner = "androidx.test.runner.AndroidJUnitRunner"
    }
}
"#,
    )
    .unwrap();

    assert_eq!(raw.namespace.as_deref(), Some("com.example.app"));
    assert_eq!(raw.application_id.as_deref(), Some("com.example.app"));
    assert_eq!(raw.compile_sdk, Some(34));
    assert_eq!(raw.min_sdk, Some(25));
    assert_eq!(raw.target_sdk, Some(34));
    assert_eq!(raw.version_code, Some(7));
    assert_eq!(raw.version_name.as_deref(), Some("1.3"));
    assert_eq!(
        raw.test_instrumentation_runner.as_deref(),
        Some("androidx.test.runner.AndroidJUnitRunner")
    );
}

#[test]
fn test_lower_build_types_in_both_forms() {
    let raw = lower_source(
        r#"
android {
    buildTypes {
        release {
            isMinifyEnabled = true
            proguardFiles(
                getDefaultProguardFile("proguard-android-optimize.txt"),
                "proguard-rules.pro"
            )
        }
        getByName("debug") {
            minifyEnabled = false
        }
        release {
            proguardFile("extra-rules.pro")
        }
    }
}
"#,
    )
    .unwrap();

    assert_eq!(raw.build_types.len(), 2);
    assert_eq!(raw.build_types["debug"], BuildType::default());

    let release = &raw.build_types["release"];
    assert!(release.minify_enabled);
    assert_eq!(
        release.proguard_files,
        vec![
            ProguardFile::Bundled {
                default: "proguard-android-optimize.txt".to_string()
            },
            ProguardFile::Path("proguard-rules.pro".to_string()),
            ProguardFile::Path("extra-rules.pro".to_string()),
        ]
    );
}

#[test]
fn test_lower_options_and_timeouts() {
    let raw = lower_source(
        r#"
android {
    compileOptions {
        sourceCompatibility = JavaVersion.VERSION_1_8
        targetCompatibility = JavaVersion.VERSION_17
    }
    installation {
        timeOutInMs = 300_000
    }
    testOptions {
        animationsDisabled = true
        installation {
            timeOutInMs = 120_000L
        }
    }
}
"#,
    )
    .unwrap();

    assert_eq!(
        raw.compile_options.source_compatibility.as_deref(),
        Some("JavaVersion.VERSION_1_8")
    );
    assert_eq!(
        raw.compile_options.target_compatibility.as_deref(),
        Some("JavaVersion.VERSION_17")
    );
    assert_eq!(raw.installation_timeout_ms, Some(300_000));
    assert!(raw.test_options.animations_disabled);
    assert_eq!(raw.test_options.installation_timeout_ms, Some(120_000));
}

#[test]
fn test_lower_plugins() {
    let raw = lower_source(
        r#"
plugins {
    id("com.android.application")
    alias(libs.plugins.kotlin.android)
    id("org.jetbrains.kotlin.plugin.compose") version "2.0.0" apply false
}
"#,
    )
    .unwrap();

    assert_eq!(
        raw.plugins,
        vec![
            "com.android.application",
            "libs.plugins.kotlin.android",
            "org.jetbrains.kotlin.plugin.compose",
        ]
    );
}

#[test]
fn test_lower_dependencies_keeps_order_and_lines() {
    let raw = lower_source(
        r#"dependencies {
    implementation("androidx.appcompat:appcompat:1.7.0")
    kapt("com.google.dagger:dagger-compiler:2.51")
    implementation(libs.material)
    androidTestImplementation("androidx.test.ext:junit:1.2.1") {
        exclude(group = "org.hamcrest")
    }
}
"#,
    )
    .unwrap();

    let scopes: Vec<&str> = raw.dependencies.iter().map(|d| d.scope.as_str()).collect();
    assert_eq!(
        scopes,
        vec!["implementation", "kapt", "implementation", "androidTestImplementation"]
    );
    assert_eq!(raw.dependencies[0].line, Some(2));
    assert_eq!(raw.dependencies[2].coordinate, "libs.material");
    assert_eq!(raw.dependencies[3].coordinate, "androidx.test.ext:junit:1.2.1");
}

#[test]
fn test_lower_skips_unknown_statements() {
    let raw = lower_source(
        r#"
android {
    compileSdk = 34
    buildFeatures {
        compose = true
    }
    packaging {
        resources {
            excludes += "/META-INF/{AL2.0,LGPL2.1}"
        }
    }
    lint { abortOnError = false }
}
kotlin {
    jvmToolchain(17)
}
"#,
    )
    .unwrap();

    assert_eq!(raw.compile_sdk, Some(34));
    assert!(raw.build_types.is_empty());
}

#[test]
fn test_lower_last_assignment_wins() {
    let raw = lower_source("android {\n compileSdk = 33\n compileSdk = 34\n}").unwrap();
    assert_eq!(raw.compile_sdk, Some(34));
}

#[test]
fn test_lower_rejects_wrong_value_type() {
    let err = lower_source(
        r#"
android {
    defaultConfig {
        minSdk = "25"
    }
}
"#,
    )
    .unwrap_err();

    match err {
        DroidspecError::InvalidValue { field, reason } => {
            assert_eq!(field, "minSdk");
            assert!(reason.contains("expected an integer"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_lower_rejects_non_string_proguard_file() {
    let err = lower_source(
        r#"
android {
    buildTypes {
        release {
            proguardFiles(rulesFile)
        }
    }
}
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("buildTypes.release.proguardFiles"));
}

#[test]
fn test_lower_negative_timeout_is_kept_for_validation() {
    let raw = lower_source("android {\n installation {\n timeOutInMs = -1\n }\n}").unwrap();
    assert_eq!(raw.installation_timeout_ms, Some(-1));
}
