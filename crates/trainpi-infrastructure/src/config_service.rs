//! Configuration service.
//!
//! Loads `config.toml` once and caches it. A missing file yields defaults;
//! an unreadable or malformed file yields defaults with a warning.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use trainpi_core::Result;
use trainpi_core::config::TrainpiConfig;

use crate::paths::TrainpiPaths;

/// Loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<TrainpiConfig>>>,
}

impl ConfigService {
    /// Uses the platform config file (`~/.config/trainpi/config.toml`).
    pub fn new() -> Self {
        Self::with_path(TrainpiPaths::new(None).config_file().ok())
    }

    /// Uses an explicit config file. `None` means defaults only.
    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> TrainpiConfig {
        if let Ok(read_lock) = self.config.read() {
            if let Some(cached) = read_lock.as_ref() {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                TrainpiConfig::default()
            }
        };

        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }
        loaded
    }

    fn load_config(&self) -> Result<TrainpiConfig> {
        let Some(path) = self.path.as_ref().filter(|path| path.exists()) else {
            return Ok(TrainpiConfig::default());
        };
        let content = fs::read_to_string(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(toml::from_str(&content)?)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
