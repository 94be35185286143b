//! In-memory task store.
//!
//! # Responsibility
//! - Own the canonical ordered task sequence for a session.
//! - Apply add/toggle/remove mutations synchronously.
//!
//! # Invariants
//! - No other component mutates the sequence directly.
//! - Newest tasks come first.

pub mod task_store;
