//! JSON file storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::fs::write_atomic;

const SESSION_FILE_NAME: &str = "session.json";

/// Stores entries as one JSON object in a file.
///
/// Every operation reads the file; writes replace it atomically.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Creates storage backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns default session file path in the platform data directory.
    ///
    /// # Errors
    /// Returns error if the data directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        AppConfig::default_data_dir()
            .map(|dir| dir.join(SESSION_FILE_NAME))
            .ok_or_else(|| StorageError::Unavailable("no data directory".to_string()))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_vec_pretty(entries)?;
        write_atomic(&self.path, &content)?;
        Ok(())
    }

    /// Reads entries for modification. A corrupt file is replaced rather than kept.
    fn read_for_update(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_all() {
            Err(StorageError::Corrupt(e)) => {
                warn!(path = %self.path.display(), error = %e, "Replacing corrupt session file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }
}

impl SessionStoragePort for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_for_update()?;

        if entries.get(key).is_some_and(|current| current == value) {
            return Ok(());
        }

        entries.insert(key.to_owned(), value.to_owned());
        debug!(key, path = %self.path.display(), "Writing session entry");
        self.write_all(&entries)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_owned(),
                message: e.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_for_update()?;

        if entries.remove(key).is_none() {
            return Ok(());
        }

        debug!(key, path = %self.path.display(), "Removing session entry");
        self.write_all(&entries)
            .map_err(|e| StorageError::RemoveFailed {
                key: key.to_owned(),
                message: e.to_string(),
            })
    }
}
