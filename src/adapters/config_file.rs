//! JSON file adapter for [`ConfigPort`].
//!
//! Config lives in a single pretty-printed JSON document.  Fields missing
//! from the file take their defaults, so an old file keeps loading after
//! new settings are added.  Both directions validate: a hand-edited file
//! with a ragged power range is rejected on load, not clamped.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::OvenConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<OvenConfig, ConfigError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => {
                warn!("config: read {} failed: {}", self.path.display(), e);
                ConfigError::IoError
            }
        })?;

        let config: OvenConfig = serde_json::from_str(&raw).map_err(|e| {
            warn!("config: {} is not valid JSON: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;
        config.validate()?;

        info!("config: loaded {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &OvenConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        std::fs::write(&self.path, json + "\n").map_err(|e| {
            warn!("config: write {} failed: {}", self.path.display(), e);
            ConfigError::IoError
        })?;
        info!("config: saved {}", self.path.display());
        Ok(())
    }
}
