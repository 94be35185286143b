//! One-shot migration from the legacy (pre due date) format.
//!
//! Legacy entries are `{id, title, done}`. `done` was written by a loosely
//! typed front end, so it is coerced with JavaScript truthiness rules.

use super::LoadError;
use crate::model::task::{Task, TaskId};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct LegacyRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    done: Value,
}

/// Maps a legacy payload to current-format tasks with `due` cleared.
///
/// # Errors
/// - `Json` when the payload is not an array of `{id, title, done}` objects.
/// - `InvalidTask` when an entry has an empty title.
pub fn migrate_legacy(raw: &str) -> Result<Vec<Task>, LoadError> {
    let records: Vec<LegacyRecord> = serde_json::from_str(raw)?;

    records
        .into_iter()
        .map(|record| -> Result<Task, LoadError> {
            let task = Task {
                id: record.id,
                title: record.title,
                done: is_truthy(&record.done),
                due: None,
            };
            task.validate()
                .map_err(|source| LoadError::InvalidTask { id: task.id, source })?;
            Ok(task)
        })
        .collect()
}

/// `false`, `0`, `""`, `null` and a missing value are falsy; everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
