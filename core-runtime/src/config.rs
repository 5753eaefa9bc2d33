//! Application configuration
//!
//! A small serde-backed config document covering the paths and endpoints an
//! embedding needs to wire the core together. Every field has a default so
//! a missing or partial file still yields a working configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_database_path() -> String {
    "tonearm.db".to_string()
}

fn default_status_base_url() -> String {
    "https://tonearm.dev/".to_string()
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Media index database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Directory for sidecar files. `None` uses the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the status document host.
    #[serde(default = "default_status_base_url")]
    pub status_base_url: String,

    /// Custom tracing filter (e.g. "core_library=debug").
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            data_dir: None,
            status_base_url: default_status_base_url(),
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Read a configuration file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Set the media index database file.
    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the sidecar directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the status document host.
    pub fn with_status_base_url(mut self, url: impl Into<String>) -> Self {
        self.status_base_url = url.into();
        self
    }

    /// Set a custom tracing filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }
}
