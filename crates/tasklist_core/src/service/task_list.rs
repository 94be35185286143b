//! Task list use-case service.
//!
//! # Responsibility
//! - Wire store, persistence and clock into one session object.
//! - Persist after every state-changing mutation.
//! - Expose the projected view consumed by front ends.
//!
//! # Invariants
//! - The startup load completes inside `open`, before any mutation.
//! - Write-back always observes the post-mutation state.
//! - Service APIs never surface storage errors to callers.

use crate::clock::{Clock, SystemClock};
use crate::due::classifier::DueBadge;
use crate::model::due_date::{DueDate, DueDateParseError};
use crate::model::filter::TaskFilter;
use crate::model::task::{Task, TaskId};
use crate::persistence::adapter::{LoadSource, PersistenceAdapter, PersistenceConfig};
use crate::storage::KeyValueStorage;
use crate::store::task_store::TaskStore;
use crate::view::projector::{project, rows, Projection, TaskRow};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;

/// Everything a front end needs to render the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListView {
    pub filter: TaskFilter,
    pub rows: Vec<TaskRow>,
    pub remaining_count: usize,
}

impl TaskListView {
    /// Badges in display order, `None` for rows without a due date.
    pub fn badges(&self) -> Vec<Option<&DueBadge>> {
        self.rows.iter().map(|row| row.badge.as_ref()).collect()
    }
}

/// One task list session over an injected storage and clock.
pub struct TaskList<S: KeyValueStorage, C: Clock = SystemClock> {
    store: TaskStore,
    persistence: PersistenceAdapter<S>,
    clock: C,
    filter: TaskFilter,
    load_source: LoadSource,
}

impl<S: KeyValueStorage, C: Clock> TaskList<S, C> {
    /// Loads persisted state and writes it back once under the current key.
    ///
    /// The initial write-back is what makes a legacy migration one-shot: the
    /// next session finds the current key and skips the legacy read.
    pub fn open(storage: S, clock: C, config: PersistenceConfig) -> Self {
        let persistence = PersistenceAdapter::new(storage, config);
        let outcome = persistence.load();
        let store = TaskStore::from_tasks(outcome.tasks);
        persistence.save(store.tasks());

        info!(
            "event=task_list_open module=service status=ok source={} count={}",
            outcome.source.as_str(),
            store.len()
        );

        Self {
            store,
            persistence,
            clock,
            filter: TaskFilter::default(),
            load_source: outcome.source,
        }
    }

    /// Adds a task; `None` when the trimmed title is empty.
    pub fn add(&mut self, title: &str, due: Option<DueDate>) -> Option<Task> {
        let task = self.store.add(title, due, &self.clock)?;
        self.persist();
        Some(task)
    }

    /// Flips completion; returns whether anything changed.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let changed = self.store.toggle(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Deletes a completed task; returns whether anything changed.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let changed = self.store.remove(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Deletes every completed task; returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.store.clear_completed();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Display sequence and counts for the active filter.
    pub fn projection(&self) -> Projection {
        project(self.store.tasks(), self.filter)
    }

    /// Display rows with badges computed against the clock's today.
    pub fn view(&self) -> TaskListView {
        let projection = self.projection();
        TaskListView {
            filter: self.filter,
            rows: rows(&projection, self.clock.today()),
            remaining_count: projection.remaining_count,
        }
    }

    fn persist(&self) {
        // Best-effort; failures are logged by the adapter.
        let _ = self.persistence.save(self.store.tasks());
    }
}

/// Parses free-form due date input from a front end.
///
/// Empty or whitespace-only input means "no deadline".
pub fn parse_due_input(text: &str) -> Result<Option<DueDate>, DueDateParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    DueDate::parse(trimmed).map(Some)
}
