//! File-backed [`IdentityStorage`]: one JSON object mapping keys to values.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use booking::{IdentityStorage, StorageError};

#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means no entries.
    fn entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| StorageError(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError(format!("{}: {e}", self.path.display()))),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(StorageError(format!("{}: {e}", self.path.display()))),
                _ => Ok(()),
            };
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|e| StorageError(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| StorageError(format!("{}: {e}", self.path.display())))
    }
}

impl IdentityStorage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        match self.entries() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable session file");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking login.
        let mut entries = self.entries().unwrap_or_default();
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries().unwrap_or_default();
        entries.remove(key);
        self.persist(&entries)
    }
}
