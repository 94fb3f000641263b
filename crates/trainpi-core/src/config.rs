//! Application configuration model (`config.toml`).

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainpiConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Overrides the platform data directory for snapshot files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Artificial delays, in milliseconds, applied before use cases resolve.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    #[serde(default = "default_api_ms")]
    pub api_ms: u64,
    #[serde(default = "default_slow_ms")]
    pub discover_ms: u64,
    #[serde(default = "default_slow_ms")]
    pub auth_ms: u64,
}

fn default_api_ms() -> u64 {
    150
}

fn default_slow_ms() -> u64 {
    400
}

impl LatencyConfig {
    /// No delays at all. Used by tests and batch tooling.
    pub fn none() -> Self {
        Self {
            api_ms: 0,
            discover_ms: 0,
            auth_ms: 0,
        }
    }

    pub fn api(&self) -> Duration {
        Duration::from_millis(self.api_ms)
    }

    pub fn discover(&self) -> Duration {
        Duration::from_millis(self.discover_ms)
    }

    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            api_ms: default_api_ms(),
            discover_ms: default_slow_ms(),
            auth_ms: default_slow_ms(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Also write a daily rolling log file.
    #[serde(default)]
    pub file: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: TrainpiConfig = toml::from_str("").unwrap();
        assert_eq!(config, TrainpiConfig::default());
        assert_eq!(config.latency.api_ms, 150);
        assert_eq!(config.latency.discover_ms, 400);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config: TrainpiConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/trainpi"

            [latency]
            api_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/trainpi")));
        assert_eq!(config.latency.api_ms, 0);
        assert_eq!(config.latency.auth_ms, 400);
        assert!(!config.logging.file);
    }
}
