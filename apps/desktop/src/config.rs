use std::{fs, io, path::Path};

use anyhow::Context;
use score_core::DEFAULT_WINNING_MESSAGE;
use serde::Deserialize;
use shared::error::HostError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub sound_enabled: bool,
    pub click_feedback: bool,
    pub winning_message: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./data/scoresteal.db".into(),
            sound_enabled: true,
            click_feedback: false,
            winning_message: DEFAULT_WINNING_MESSAGE.into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    database_url: Option<String>,
    sound_enabled: Option<bool>,
    click_feedback: Option<bool>,
    winning_message: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then the optional TOML file, then environment overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with_env(path, |key| std::env::var(key).ok())
}

fn load_settings_with_env(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    apply_env_overrides(&mut settings, env)?;
    settings.database_url = database_url(&settings.database_url);
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.database_url {
        settings.database_url = v;
    }
    if let Some(v) = file_cfg.sound_enabled {
        settings.sound_enabled = v;
    }
    if let Some(v) = file_cfg.click_feedback {
        settings.click_feedback = v;
    }
    if let Some(v) = file_cfg.winning_message {
        settings.winning_message = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
}

fn apply_env_overrides(
    settings: &mut Settings,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(), HostError> {
    if let Some(v) = env("SCORESTEAL_DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = env("APP__DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = env("APP__SOUND_ENABLED") {
        settings.sound_enabled = parse_flag("APP__SOUND_ENABLED", &v)?;
    }
    if let Some(v) = env("APP__CLICK_FEEDBACK") {
        settings.click_feedback = parse_flag("APP__CLICK_FEEDBACK", &v)?;
    }
    if let Some(v) = env("APP__WINNING_MESSAGE") {
        settings.winning_message = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    Ok(())
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, HostError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(HostError::InvalidSetting {
            key: key.to_string(),
            value: raw.to_string(),
            reason: "expected true/false".to_string(),
        }),
    }
}

pub fn database_url(raw: &str) -> String {
    storage::normalize_database_url(raw, &Settings::default().database_url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
