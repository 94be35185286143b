//! SQLite bootstrap for the native key-value storage.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing `SqliteKeyValueStorage`.
//! - Apply schema migrations before any key is read or written.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - A database written by a newer build is rejected, never downgraded.
//! - Failures surface as `StorageError`; there is no separate db error type.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
