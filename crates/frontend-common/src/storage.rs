//! `localStorage`-backed expiring storage

use gloo::storage::{LocalStorage, Storage, errors::StorageError};
use liveconf_core::{CoreError, CoreResult, ExpiringStorage, StoredEntry};

/// Expiring storage over `window.localStorage`.
///
/// Each key holds a JSON-encoded [`StoredEntry`]; values that fail to decode
/// are treated like expired ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }
}

impl ExpiringStorage for BrowserStorage {
    fn set_with_ttl(&self, key: &str, value: &str, ttl: chrono::Duration) -> CoreResult<()> {
        LocalStorage::set(key, StoredEntry::new(value, ttl))
            .map_err(|e| CoreError::storage_error(format!("failed to write '{key}': {e}")))
    }

    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::get::<StoredEntry>(key) {
            Ok(entry) if !entry.is_expired() => Some(entry.value),
            Ok(_) => {
                tracing::debug!(key, "Dropping expired storage entry");
                LocalStorage::delete(key);
                None
            }
            Err(StorageError::KeyNotFound(_)) => None,
            Err(error) => {
                tracing::warn!(key, %error, "Discarding unreadable storage entry");
                LocalStorage::delete(key);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
