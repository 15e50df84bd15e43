//! Canonical Kotlin DSL output for a `BuildConfig`.

use crate::build::{BuildConfig, ProguardFile};

const INDENT: &str = "    ";

/// Render `config` as a `build.gradle.kts` script.
///
/// Parsing the output yields a configuration equal to `config`.
pub fn render(config: &BuildConfig) -> String {
    let mut out = Writer::default();

    if !config.plugins.is_empty() {
        out.open("plugins");
        for plugin in &config.plugins {
            out.line(format!("id({})", quote(plugin)));
        }
        out.close();
        out.blank();
    }

    out.open("android");
    out.line(format!("namespace = {}", quote(&config.namespace)));
    out.line(format!("compileSdk = {}", config.compile_sdk));
    out.blank();

    out.open("defaultConfig");
    out.line(format!("applicationId = {}", quote(&config.application_id)));
    out.line(format!("minSdk = {}", config.min_sdk));
    out.line(format!("targetSdk = {}", config.target_sdk));
    if let Some(code) = config.version_code {
        out.line(format!("versionCode = {}", code));
    }
    if let Some(name) = &config.version_name {
        out.line(format!("versionName = {}", quote(name)));
    }
    if let Some(runner) = &config.test_instrumentation_runner {
        out.blank();
        out.line(format!("testInstrumentationRunner = {}", quote(runner)));
    }
    out.close();

    if !config.build_types.is_empty() {
        out.blank();
        out.open("buildTypes");
        for (name, build_type) in &config.build_types {
            if is_identifier(name) {
                out.open(name);
            } else {
                out.open(&format!("getByName({})", quote(name)));
            }
            out.line(format!("isMinifyEnabled = {}", build_type.minify_enabled));
            if !build_type.proguard_files.is_empty() {
                out.line("proguardFiles(");
                let last = build_type.proguard_files.len() - 1;
                for (i, file) in build_type.proguard_files.iter().enumerate() {
                    let entry = match file {
                        ProguardFile::Path(path) => quote(path),
                        ProguardFile::Bundled { default } => {
                            format!("getDefaultProguardFile({})", quote(default))
                        }
                    };
                    let sep = if i == last { "" } else { "," };
                    out.line(format!("{}{}{}", INDENT, entry, sep));
                }
                out.line(")");
            }
            out.close();
        }
        out.close();
    }

    let options = &config.compile_options;
    if !options.is_empty() {
        out.open("compileOptions");
        if let Some(level) = options.source_compatibility {
            out.line(format!("sourceCompatibility = JavaVersion.{}", level));
        }
        if let Some(level) = options.target_compatibility {
            out.line(format!("targetCompatibility = JavaVersion.{}", level));
        }
        out.close();
    }

    if let Some(timeout) = config.installation_timeout_ms {
        out.blank();
        out.open("installation");
        out.line(format!("timeOutInMs = {}", timeout));
        out.close();
    }

    if !config.test_options.is_default() {
        out.blank();
        out.open("testOptions");
        out.line(format!(
            "animationsDisabled = {}",
            config.test_options.animations_disabled
        ));
        if let Some(timeout) = config.test_options.installation_timeout_ms {
            out.open("installation");
            out.line(format!("timeOutInMs = {}", timeout));
            out.close();
        }
        out.close();
    }
    out.close();

    if !config.dependencies.is_empty() {
        out.blank();
        out.open("dependencies");
        for dep in &config.dependencies {
            out.line(format!(
                "{}({})",
                dep.scope,
                quote(&dep.coordinate.to_string())
            ));
        }
        out.close();
    }

    out.finish()
}

#[derive(Default)]
struct Writer {
    buf: String,
    depth: usize,
}

impl Writer {
    fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn open(&mut self, header: &str) {
        self.line(format!("{} {{", header));
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !matches!(name, "true" | "false")
}
