//! Raw string key-value backends.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors from a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error for {0}: {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("Storage quota exceeded writing '{key}' ({needed} bytes, {limit} allowed)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to encode value for '{0}': {1}")]
    Encode(String, #[source] serde_json::Error),
}

/// A durable string store addressed by key.
pub trait KeyValueStore {
    /// Returns `Ok(None)` if nothing is stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the file path backing a key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(self.data_dir.clone(), e))?;

        // Write to a sibling temp file and rename it over the target, so a
        // failed write never truncates the stored value
        let path = self.path(key);
        let temp_path = path.with_extension("json.tmp");

        let mut file =
            File::create(&temp_path).map_err(|e| StorageError::Io(temp_path.clone(), e))?;
        file.write_all(value.as_bytes())
            .map_err(|e| StorageError::Io(temp_path.clone(), e))?;
        file.sync_all()
            .map_err(|e| StorageError::Io(temp_path.clone(), e))?;

        fs::rename(&temp_path, &path).map_err(|e| StorageError::Io(path, e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }
}

/// In-process store. Clones share the same map.
///
/// An optional quota caps the total bytes of all stored values; a write
/// that would exceed it fails and leaves the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<BTreeMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: Arc::default(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.lock()?;

        if let Some(limit) = self.quota {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_file_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_file_store_path() {
        let (store, _temp) = test_file_store();
        assert!(store.path("rn-profile").ends_with("rn-profile.json"));
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let (store, _temp) = test_file_store();
        assert!(store.get_item("rn-profile").unwrap().is_none());
        assert!(!store.path("rn-profile").exists());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested_dir = temp_dir.path().join("nested").join("data");
        let store = FileStore::new(nested_dir.clone());

        store.set_item("rn-favorites", "[]").unwrap();

        assert!(nested_dir.exists());
        assert!(store.path("rn-favorites").exists());
        assert!(!store.path("rn-favorites").with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_failed_write_keeps_previous_value() {
        let (store, _temp) = test_file_store();
        store.set_item("rn-profile", "\"prior\"").unwrap();

        // A directory in the temp file's place makes the write fail
        fs::create_dir(store.path("rn-profile").with_extension("json.tmp")).unwrap();

        let result = store.set_item("rn-profile", &"x".repeat(4000));
        assert!(matches!(result, Err(StorageError::Io(..))));
        assert_eq!(
            store.get_item("rn-profile").unwrap().as_deref(),
            Some("\"prior\"")
        );
    }

    #[test]
    fn test_file_store_overwrite_and_remove() {
        let (store, _temp) = test_file_store();

        store.set_item("k", "1").unwrap();
        store.set_item("k", "2").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("2"));

        store.remove_item("k").unwrap();
        assert!(store.get_item("k").unwrap().is_none());
        // Removing again is not an error
        store.remove_item("k").unwrap();
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_memory_store_quota_keeps_previous_value() {
        let store = MemoryStore::with_quota(8);
        store.set_item("k", "short").unwrap();

        let result = store.set_item("k", "much too long");
        assert!(matches!(result, Err(StorageError::QuotaExceeded { .. })));
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_memory_store_quota_counts_replaced_value_once() {
        let store = MemoryStore::with_quota(5);
        store.set_item("k", "12345").unwrap();
        // Replacing a value of the same size fits
        store.set_item("k", "abcde").unwrap();
        assert!(store.set_item("other", "x").is_err());
    }
}
