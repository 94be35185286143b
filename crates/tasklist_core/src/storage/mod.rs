//! Key-value storage capability and implementations.
//!
//! # Responsibility
//! - Define the opaque get/set-by-string-key service the persistence layer uses.
//! - Provide an in-memory fake and a SQLite-backed native implementation.
//!
//! # Invariants
//! - Storage never interprets values; it stores and returns opaque text.
//! - Only the persistence adapter talks to storage.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteKeyValueStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures reported by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// Value would push the store past its size quota.
    QuotaExceeded { key: String, required: usize, quota: usize },
    /// Backend refused the operation (e.g. storage disabled).
    Unavailable(String),
    /// SQLite backend failure.
    Sqlite(rusqlite::Error),
    /// Database file was migrated by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded {
                key,
                required,
                quota,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {required} bytes required, quota {quota}"
            ),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Opaque get/set-by-string-key service.
pub trait KeyValueStorage {
    /// Returns the stored text, or `None` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
