//! Key/value storage where every value carries an expiry time

use crate::{CoreError, CoreResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A stored value together with the instant it stops being valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredEntry {
    /// Create an entry that expires `ttl` from now
    pub fn new(value: impl Into<String>, ttl: Duration) -> Self {
        Self {
            value: value.into(),
            expires_at: Utc::now() + ttl,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Storage primitive that associates a time-to-live with each value.
///
/// Reading an expired key behaves as if the key was never written and
/// drops the stale entry.
pub trait ExpiringStorage {
    /// Store `value` under `key`, valid for `ttl`
    fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> CoreResult<()>;

    /// Read a value that has not expired yet
    fn get(&self, key: &str) -> Option<String>;

    /// Remove `key` if present
    fn remove(&self, key: &str);
}

impl<T: ExpiringStorage + ?Sized> ExpiringStorage for Arc<T> {
    fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> CoreResult<()> {
        (**self).set_with_ttl(key, value, ttl)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-process storage backend, used off the browser and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, StoredEntry>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, StoredEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Raw entry for `key`, including its expiry, whether or not it has expired
    pub fn entry(&self, key: &str) -> Option<StoredEntry> {
        self.entries().get(key).cloned()
    }

    /// Insert a prepared entry as-is
    pub fn insert_entry(&self, key: impl Into<String>, entry: StoredEntry) {
        self.entries().insert(key.into(), entry);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }
}

impl ExpiringStorage for MemoryStorage {
    fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> CoreResult<()> {
        if ttl <= Duration::zero() {
            return Err(CoreError::storage_error(format!(
                "ttl for '{key}' must be positive"
            )));
        }
        self.entries()
            .insert(key.to_string(), StoredEntry::new(value, ttl));
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries();
        if entries.get(key)?.is_expired() {
            tracing::debug!(key, "Dropping expired storage entry");
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}
