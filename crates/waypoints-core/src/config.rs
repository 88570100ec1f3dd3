//! Store configuration: where the marker file lives and how markers look.

use crate::render::MarkerStyle;
use crate::storage::FileStorage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default marker file name.
pub const DEFAULT_FILE_NAME: &str = "markers.txt";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Settings for a [`WaypointStore`](crate::WaypointStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the marker file.
    pub directory: PathBuf,
    /// Marker file name.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Marker appearance.
    #[serde(default)]
    pub style: MarkerStyle,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl StoreConfig {
    /// Configuration storing markers in `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file_name: default_file_name(),
            style: MarkerStyle::default(),
        }
    }

    /// Configuration in the platform data directory.
    ///
    /// On Unix: `~/.local/share/waypoints/prefs/`
    /// On Windows: `%LOCALAPPDATA%\waypoints\prefs\`
    pub fn default_location() -> Result<Self, ConfigError> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::NoDataDir)?;
        Ok(Self::new(base.join("waypoints").join("prefs")))
    }

    /// Build the file storage described by this configuration.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.directory, &self.file_name)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Write this configuration as JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}
