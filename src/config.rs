//! User settings read from `slides/config.yml` in the platform config
//! directory (`~/.config` on Linux)

use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const APP_CONFIG_DIR: &str = "slides";

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme identifier used when none is given on the command line
    pub theme: Option<String>,
    /// Upper bound on remote theme fetches, unbounded when absent
    pub http_timeout_secs: Option<u64>,
}

impl Settings {
    pub fn config_file_path() -> Result<PathBuf> {
        match dirs::config_dir() {
            Some(config_dir) => Ok(config_dir.join(APP_CONFIG_DIR).join(FILE_NAME)),
            None => Err(eyre!("No config directory found for settings")),
        }
    }

    /// Load the user's settings, defaults when the file does not exist.
    pub fn load() -> Result<Settings> {
        Settings::load_from(&Settings::config_file_path()?)
    }

    /// Like [`Settings::load`], but an unusable settings file only costs a
    /// warning.
    pub fn load_or_default() -> Settings {
        Settings::or_default(Settings::load())
    }

    pub fn load_from_or_default(path: &Path) -> Settings {
        Settings::or_default(Settings::load_from(path))
    }

    fn or_default(loaded: Result<Settings>) -> Settings {
        loaded.unwrap_or_else(|e| {
            log::warn!("{e}. Using default settings.");
            Settings::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)
            .map_err(|e| eyre!("Invalid settings in {}: {e}", path.display()))?;
        Ok(settings)
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }

    /// The theme to resolve: an explicit choice wins over the settings file.
    pub fn theme_or<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.or(self.theme.as_deref()).unwrap_or_default()
    }
}
