use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    #[serde(default = "default_query")]
    pub default_query: String,
    /// Preference-store file; defaults to prefs.json next to the config.
    #[serde(default)]
    pub prefs_file: Option<String>,
}

fn default_query() -> String {
    "*".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:9428".to_string(),
            default_query: default_query(),
            prefs_file: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("logscope")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("logscope.conf")
    }

    /// Resolved path of the preference-store file
    pub fn prefs_file(&self) -> PathBuf {
        match &self.prefs_file {
            Some(path) => PathBuf::from(path),
            None => Self::config_dir().join("prefs.json"),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write the configuration to its standard location
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml =
            serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }
}
