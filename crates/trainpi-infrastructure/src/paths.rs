//! Path resolution for TrainPi configuration, snapshots and logs.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/trainpi/           # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Daily rolling logs
//!     └── trainpi.log.YYYY-MM-DD
//!
//! ~/.local/share/trainpi/      # Data directory
//! └── data/
//!     ├── trainpi-users.json   # Global account list
//!     └── trainpi-user-<id>.json
//! ```
//!
//! A base directory override replaces both roots, which keeps tests and
//! portable installs self-contained.

use std::path::{Path, PathBuf};

use trainpi_core::TrainpiError;

const APP_DIR: &str = "trainpi";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for TrainpiError {
    fn from(e: PathError) -> Self {
        TrainpiError::config(e.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrainpiPaths {
    base: Option<PathBuf>,
}

impl TrainpiPaths {
    /// Creates a resolver. With `base`, every directory lives under it.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory holding one JSON file per storage key.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        let root = match &self.base {
            Some(base) => base.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound)?,
        };
        Ok(root.join("data"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override() {
        let paths = TrainpiPaths::new(Some(Path::new("/tmp/trainpi-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/trainpi-test/config.toml")
        );
        assert_eq!(paths.data_dir().unwrap(), PathBuf::from("/tmp/trainpi-test/data"));
        assert_eq!(paths.logs_dir().unwrap(), PathBuf::from("/tmp/trainpi-test/logs"));
    }

    #[test]
    fn test_platform_dirs_end_with_app_name() {
        let paths = TrainpiPaths::new(None);
        if let Ok(dir) = paths.config_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
