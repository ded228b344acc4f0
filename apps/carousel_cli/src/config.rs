use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

pub const SETTINGS_FILE: &str = "carousel.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub transition_ms: u64,
    pub results_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_ms: 750,
            results_path: None,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    transition_ms: Option<u64>,
    results_path: Option<String>,
    log_filter: Option<String>,
}

/// Reads `path`, or `carousel.toml` in the working directory when none is
/// given.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = path.unwrap_or(Path::new(SETTINGS_FILE));
    load_settings_from(path, |key| std::env::var(key).ok())
}

/// Defaults, then the settings file (if readable), then environment
/// overrides. Unparseable values are ignored. A relative `results_path` in
/// the file is taken relative to the file's directory.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        let base = path.parent().unwrap_or(Path::new(""));
        apply_file_config(&mut settings, &raw, base);
    }
    apply_env(&mut settings, env);

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str, base: &Path) {
    let Ok(file_cfg) = toml::from_str::<FileConfig>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.transition_ms {
        settings.transition_ms = v;
    }
    if let Some(v) = file_cfg.results_path {
        settings.results_path = Some(base.join(v));
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
}

fn apply_env(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    for key in ["CAROUSEL_TRANSITION_MS", "APP__TRANSITION_MS"] {
        if let Some(parsed) = env(key).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.transition_ms = parsed;
        }
    }

    for key in ["CAROUSEL_RESULTS", "APP__RESULTS_PATH"] {
        if let Some(v) = env(key).filter(|v| !v.trim().is_empty()) {
            settings.results_path = Some(PathBuf::from(v));
        }
    }

    for key in ["CAROUSEL_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = env(key).filter(|v| !v.trim().is_empty()) {
            settings.log_filter = v;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
