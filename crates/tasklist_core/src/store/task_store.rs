//! Ordered task collection with guarded mutations.
//!
//! # Invariants
//! - `add` never stores an empty-titled task.
//! - `remove` only deletes tasks whose `done` is `true`, even when a caller
//!   bypasses any UI guard.
//! - Every mutation either fully applies or leaves the sequence untouched.

use crate::clock::Clock;
use crate::model::due_date::DueDate;
use crate::model::task::{Task, TaskId};
use log::debug;

/// Canonical in-memory task sequence, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from an already validated sequence, keeping its order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Adds a new open task at the front of the sequence.
    ///
    /// The id is taken from `clock.now_millis()`. Two adds inside the same
    /// millisecond share an id; that collision is accepted and not corrected.
    ///
    /// Returns `None` without mutating when the trimmed title is empty.
    pub fn add(&mut self, title: &str, due: Option<DueDate>, clock: &impl Clock) -> Option<Task> {
        if title.trim().is_empty() {
            debug!("event=task_add module=store status=skipped reason=empty_title");
            return None;
        }

        let task = Task::new(clock.now_millis(), title, due).ok()?;
        self.tasks.insert(0, task.clone());
        debug!(
            "event=task_add module=store status=ok id={} has_due={}",
            task.id,
            task.due.is_some()
        );
        Some(task)
    }

    /// Flips `done` on every task carrying `id`.
    ///
    /// Ids may collide (same-millisecond adds, imported data), so all matches
    /// flip together. Returns `false` (and changes nothing) when `id` is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let mut matched = 0usize;
        for task in self.tasks.iter_mut().filter(|task| task.id == id) {
            task.toggle();
            matched += 1;
        }

        if matched == 0 {
            debug!("event=task_toggle module=store status=skipped reason=not_found id={id}");
            return false;
        }
        debug!("event=task_toggle module=store status=ok id={id} matched={matched}");
        true
    }

    /// Deletes every completed task carrying `id`.
    ///
    /// Open tasks with the same id stay. Returns `false` when nothing was
    /// removed (unknown id, or every match still open).
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id || !task.done);
        let removed = before - self.tasks.len();

        if removed == 0 {
            let reason = if self.get(id).is_some() { "not_done" } else { "not_found" };
            debug!("event=task_remove module=store status=skipped reason={reason} id={id}");
            return false;
        }
        debug!("event=task_remove module=store status=ok id={id} removed={removed}");
        true
    }

    /// Removes every completed task, keeping the order of the rest.
    ///
    /// Returns how many tasks were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.done);
        let removed = before - self.tasks.len();
        debug!("event=task_clear_completed module=store status=ok removed={removed}");
        removed
    }
}
