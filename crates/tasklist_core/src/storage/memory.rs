//! In-memory storage fake.
//!
//! Mirrors browser local storage closely enough for tests: an optional size
//! quota over all keys and values, and a switch that makes every write fail.

use super::{KeyValueStorage, StorageError, StorageResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Single-threaded in-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    quota_bytes: Option<usize>,
    fail_writes: Cell<bool>,
    write_count: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Seeds a key directly, bypassing quota, failure injection and counters.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    /// Makes subsequent `set` calls fail with `Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        self.write_count.get()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, value)| existing.len() + value.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }

        if let Some(quota) = self.quota_bytes {
            let required = self.used_bytes_without(key) + key.len() + value.len();
            if required > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    quota,
                });
            }
        }

        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.write_count.set(self.write_count.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStorage;
    use crate::storage::{KeyValueStorage, StorageError};

    #[test]
    fn set_then_get_returns_value() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn quota_counts_other_keys_but_not_the_replaced_value() {
        let storage = MemoryStorage::with_quota(10);
        storage.set("a", "1234").unwrap();
        storage.set("a", "123456789").unwrap();

        let err = storage.set("b", "1").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { required: 12, quota: 10, .. }));
        assert!(!storage.contains_key("b"));
    }

    #[test]
    fn failing_writes_leave_entries_untouched() {
        let storage = MemoryStorage::new();
        storage.insert("k", "kept");
        storage.set_fail_writes(true);

        assert!(storage.set("k", "lost").is_err());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("kept"));
        assert_eq!(storage.write_count(), 0);
    }
}
