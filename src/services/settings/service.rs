//! Settings service for loading user configuration from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService;

impl SettingsService {
    /// Location of the settings file in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "KenBoyle", "RustCalendar")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to load settings from {}", path.display()))
    }

    /// Parse and validate settings from TOML text. Absent keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Settings> {
        let settings: Settings = toml::from_str(content).context("invalid settings TOML")?;
        settings.validate().map_err(|e| anyhow!(e))?;
        Ok(settings)
    }

    pub fn to_toml_string(settings: &Settings) -> Result<String> {
        toml::to_string_pretty(settings).context("failed to serialize settings")
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Settings {
        let Some(path) = Self::default_path() else {
            log::warn!("Unable to resolve project directory; using default settings");
            return Settings::default();
        };

        match Self::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings: {err:?}");
                Settings::default()
            }
        }
    }
}
