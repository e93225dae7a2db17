//! Settings management

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tether_core::RegistryConfig;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON")]
    Parse(#[from] serde_json::Error),
}

/// Engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub registry: RegistryConfig,
    pub runtime: RuntimeSettings,
}

/// Main-loop cadence for the runtime binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub frames: u32,
    pub spawns_per_frame: u32,
    /// Compact the object array after every N frames; 0 disables it.
    pub compact_every_frames: u32,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            frames: 16,
            spawns_per_frame: 8,
            compact_every_frames: 4,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from `path`, using defaults if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json_str(&json)?;
                info!(path = %path.display(), "loaded settings");
                Ok(settings)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "settings file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
