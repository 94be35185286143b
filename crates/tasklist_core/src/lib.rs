//! Core task-state engine for the task list.
//! This crate is the single source of truth for task invariants, due-date
//! classification, display ordering and persistence rules.

pub mod clock;
pub mod db;
pub mod due;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod service;
pub mod storage;
pub mod store;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use due::classifier::{badge_for, classify, completed_badge, days_until, DueBadge, Severity};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::due_date::{DueDate, DueDateParseError};
pub use model::filter::{FilterParseError, TaskFilter};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use persistence::adapter::{
    parse_current, serialize_tasks, LoadOutcome, LoadSource, PersistenceAdapter,
    PersistenceConfig, CURRENT_STORAGE_KEY, LEGACY_STORAGE_KEY,
};
pub use persistence::legacy::migrate_legacy;
pub use persistence::LoadError;
pub use service::task_list::{parse_due_input, TaskList, TaskListView};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteKeyValueStorage, StorageError, StorageResult};
pub use store::task_store::TaskStore;
pub use view::projector::{project, remaining_count, rows, Projection, TaskRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
