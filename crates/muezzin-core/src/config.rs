//! TOML-based application configuration.
//!
//! Stores the default location, calculation method, optional timezone
//! override and the watch-mode refresh cadence. Stored at
//! `~/.config/muezzin/config.toml`; set `MUEZZIN_ENV=dev` to use
//! `~/.config/muezzin-dev/` instead.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreError, ValidationError};
use crate::method::CalculationMethod;
use crate::session::Settings;

/// Application configuration.
///
/// Serialized to/from TOML; every field has a default so a partial or
/// missing file loads cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub method: CalculationMethod,
    /// IANA zone name, validated when converted to [`Settings`].
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_location() -> String {
    "Douglasville, GA".to_string()
}

fn default_refresh_secs() -> u64 {
    900
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: default_location(),
            method: CalculationMethod::default(),
            timezone: None,
            refresh_secs: default_refresh_secs(),
        }
    }
}

/// Returns `~/.config/muezzin[-dev]/` based on MUEZZIN_ENV.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MUEZZIN_ENV").unwrap_or_else(|_| "production".to_string());
    let dir = if env == "dev" {
        base.join("muezzin-dev")
    } else {
        base.join("muezzin")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

impl Config {
    /// Path of the config file in the active environment.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default path; a missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Save to an explicit path as pretty TOML.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Convert to runtime [`Settings`], validating the timezone name.
    pub fn settings(&self) -> Result<Settings, CoreError> {
        let timezone = match &self.timezone {
            Some(name) => Some(
                name.parse::<Tz>()
                    .map_err(|_| ValidationError::UnknownTimezone(name.clone()))?,
            ),
            None => None,
        };
        Ok(Settings {
            location: self.location.clone(),
            method: self.method,
            timezone,
            refresh_secs: self.refresh_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.location, "Douglasville, GA");
        assert_eq!(config.refresh_secs, 900);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            location: "Tunis".to_string(),
            method: CalculationMethod::Mwl,
            timezone: Some("Africa/Tunis".to_string()),
            refresh_secs: 120,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.location, "Tunis");
        assert_eq!(loaded.method, CalculationMethod::Mwl);
        assert_eq!(loaded.timezone.as_deref(), Some("Africa/Tunis"));
        assert_eq!(loaded.refresh_secs, 120);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "location = \"Mecca\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.location, "Mecca");
        assert_eq!(config.method, CalculationMethod::Isna);
    }

    #[test]
    fn settings_validates_timezone() {
        let config = Config {
            timezone: Some("Mars/Olympus".to_string()),
            ..Config::default()
        };
        assert!(config.settings().is_err());

        let config = Config {
            timezone: Some("Europe/London".to_string()),
            ..Config::default()
        };
        let settings = config.settings().unwrap();
        assert_eq!(settings.timezone, Some("Europe/London".parse().unwrap()));
    }
}
