//! Task persistence over the key-value storage capability.
//!
//! # Responsibility
//! - Seed the task store at startup from the current or legacy format.
//! - Mirror the full task sequence back to storage after each change.
//!
//! # Invariants
//! - Malformed persisted data degrades to an empty store, never an error.
//! - Write failures are swallowed; in-memory state stays authoritative.
//! - The legacy key is read at most once per load and never written.
//!
//! # See also
//! - DESIGN.md

pub mod adapter;
pub mod legacy;

use crate::model::task::{TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a persisted payload could not be turned into tasks.
#[derive(Debug)]
pub enum LoadError {
    Json(serde_json::Error),
    InvalidTask {
        id: TaskId,
        source: TaskValidationError,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed task payload: {err}"),
            Self::InvalidTask { id, source } => write!(f, "invalid task {id}: {source}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidTask { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
