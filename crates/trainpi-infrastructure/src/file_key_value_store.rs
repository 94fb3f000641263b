//! File-backed key-value store: one JSON file per key.

use std::path::{Path, PathBuf};

use trainpi_core::Result;
use trainpi_core::storage::KeyValueStore;

use crate::storage::AtomicTextFile;

/// Stores each key as `<dir>/<key>.json`, written atomically.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// Bytes outside `[A-Za-z0-9_-]` are written as `%XX`, so distinct keys
    /// always map to distinct files inside the store directory.
    pub fn key_path(&self, key: &str) -> PathBuf {
        let mut file_stem = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                file_stem.push(char::from(byte));
            } else {
                file_stem.push_str(&format!("%{:02X}", byte));
            }
        }
        self.dir.join(format!("{}.json", file_stem))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let file = AtomicTextFile::new(self.key_path(key));
        Ok(file.load()?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let file = AtomicTextFile::new(self.key_path(key));
        file.save(value)?;
        tracing::debug!("Wrote {} ({} bytes)", file.path().display(), value.len());
        Ok(())
    }
}
