//! Durable key-value backends for the account store.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StorageError;

/// The durable key-value collaborator the store persists through.
///
/// `load` returns `Ok(None)` when the key has never been written; `save`
/// replaces any prior value for the key.
pub trait StorageBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ---------------------------------------------------------------------------
// File backend
// ---------------------------------------------------------------------------

/// File-backed storage: one JSON document per key at `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// In-memory storage for tests and session-only embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored payload for a key, if any. Handy for read-back assertions.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Pre-populate a key, e.g. to simulate prior persisted state.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_missing_key_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.load("accounts").unwrap().is_none());
    }

    #[test]
    fn file_storage_round_trips_a_payload() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.save("accounts", "[1,2,3]").unwrap();
        assert_eq!(storage.load("accounts").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_storage_save_replaces_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.save("accounts", "old").unwrap();
        storage.save("accounts", "new").unwrap();
        assert_eq!(storage.load("accounts").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn file_storage_creates_missing_directory_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("accbook");
        let mut storage = FileStorage::new(&nested);
        storage.save("accounts", "[]").unwrap();
        assert!(nested.join("accounts.json").is_file());
    }

    #[test]
    fn memory_storage_round_trips_and_exposes_raw_payload() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load("accounts").unwrap().is_none());
        storage.save("accounts", "[]").unwrap();
        assert_eq!(storage.get("accounts"), Some("[]"));
        assert_eq!(storage.load("accounts").unwrap().as_deref(), Some("[]"));
    }
}
