//! JSON adapter over a [`KeyValueStore`].
//!
//! Reads fall back to a caller-supplied default and writes never fail
//! upward; both log a warning instead.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::{KeyValueStore, StorageError};
use super::storage_key::StorageKey;

#[derive(Debug, Clone)]
pub struct PersistentStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Returns the decoded value under `key`, or `fallback` if it is
    /// missing, unreadable or fails to decode.
    pub fn read<T: DeserializeOwned>(&self, key: StorageKey, fallback: T) -> T {
        self.read_snapshot(key).unwrap_or(fallback)
    }

    /// Returns the decoded value under `key`; `None` when absent or corrupt.
    pub fn read_snapshot<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = match self.backend.get_item(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Failed to decode {}, using fallback: {}", key, e);
                None
            }
        }
    }

    /// Persists `value` under `key`. Failures are logged and swallowed;
    /// whatever was stored before stays in place.
    pub fn write<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            tracing::warn!("Failed to save {}: {}", key, e);
        }
    }

    pub fn try_write<T: Serialize + ?Sized>(
        &self,
        key: StorageKey,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StorageError::Encode(key.to_string(), e))?;
        self.backend.set_item(key.as_str(), &raw)?;
        tracing::debug!("Saved {} ({} bytes)", key, raw.len());
        Ok(())
    }
}
