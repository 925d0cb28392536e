use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::MaxLength;

pub const CONFIG_FILE_NAME: &str = "summarizer.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub default_max_length: MaxLength,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            default_max_length: MaxLength::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    default_max_length: Option<u32>,
}

/// Defaults, then the first config file found, then environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = config_file_candidates().into_iter().find(|p| p.is_file()) {
        match read_file_settings(&path) {
            Ok(file_cfg) => {
                tracing::info!(path = %path.display(), "loaded settings file");
                apply_file_settings(&mut settings, file_cfg);
            }
            Err(err) => tracing::warn!("ignoring settings file: {err:#}"),
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("summarizer").join(CONFIG_FILE_NAME));
    }
    candidates
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse '{}'", path.display()))
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.default_max_length {
        settings.default_max_length = MaxLength::nearest(v);
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SUMMARIZER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = lookup("APP__DEFAULT_MAX_LENGTH") {
        match v.trim().parse::<u32>() {
            Ok(parsed) => settings.default_max_length = MaxLength::nearest(parsed),
            Err(err) => tracing::warn!(value = %v, "ignoring APP__DEFAULT_MAX_LENGTH: {err}"),
        }
    }
}
