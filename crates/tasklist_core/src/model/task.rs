//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its current wire format.
//! - Validate records on construction and on deserialization.
//!
//! # Invariants
//! - `title` is non-empty after trimming.
//! - `id` is never rewritten after creation.
//! - `due`, when set, is a strict calendar date.

use crate::model::due_date::{DueDate, DueDateParseError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Millisecond-timestamp derived task identifier.
pub type TaskId = i64;

/// Canonical task record.
///
/// Serialized as `{id, title, done, due}` with `due` as `YYYY-MM-DD` or
/// `null`. Deserialization runs the same validation as [`Task::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub due: Option<DueDate>,
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    InvalidDue(DueDateParseError),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::InvalidDue(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::InvalidDue(err) => Some(err),
        }
    }
}

impl From<DueDateParseError> for TaskValidationError {
    fn from(value: DueDateParseError) -> Self {
        Self::InvalidDue(value)
    }
}

impl Task {
    /// Creates an open task with a trimmed title.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is empty or whitespace only.
    pub fn new(
        id: TaskId,
        title: &str,
        due: Option<DueDate>,
    ) -> Result<Self, TaskValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            done: false,
            due,
        })
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Flips completion state.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// Raw current-format record before invariant checks.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    done: bool,
    #[serde(default)]
    due: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        // Older front ends wrote "" for "no deadline".
        let due = match record.due.as_deref() {
            None | Some("") => None,
            Some(text) => Some(DueDate::parse(text)?),
        };

        let task = Self {
            id: record.id,
            title: record.title,
            done: record.done,
            due,
        };
        task.validate()?;
        Ok(task)
    }
}
