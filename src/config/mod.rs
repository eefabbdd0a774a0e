use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Application configuration: where the JSON store lives.
/// User-facing settings (limit, rate, currency) travel with the store file
/// so exports carry them along.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("abstracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".abstracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("abstracker.conf")
    }

    /// Return the full path of the JSON store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("abstracker.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable config degrades to defaults with a warning instead of
    /// refusing to start.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    crate::ui::messages::warning(format!(
                        "Ignoring unreadable config file ({}), using defaults",
                        e
                    ));
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the config file, creating the config dir if needed.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize config: {}", e)))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }
}
