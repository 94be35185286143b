//! Filter/sort projector.
//!
//! Ordering rules for the display sequence:
//! 1. apply the filter;
//! 2. split into open and completed, keeping relative order;
//! 3. stable-sort open tasks: dated before undated, earlier dates first;
//! 4. open tasks, then completed tasks in their original order.

use crate::due::classifier::{badge_for, DueBadge};
use crate::model::filter::TaskFilter;
use crate::model::task::Task;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// Display sequence plus the store-wide outstanding count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub items: Vec<Task>,
    /// Open tasks across the whole store, regardless of filter.
    pub remaining_count: usize,
}

/// One rendered line of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub task: Task,
    pub badge: Option<DueBadge>,
    /// Delete control is enabled only for completed tasks.
    pub removable: bool,
}

/// Projects `tasks` through `filter` into display order.
pub fn project(tasks: &[Task], filter: TaskFilter) -> Projection {
    let (mut open, done): (Vec<Task>, Vec<Task>) = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .partition(|task| !task.done);

    // `sort_by` is stable, so equal keys keep store order.
    open.sort_by(compare_due);
    open.extend(done);

    Projection {
        items: open,
        remaining_count: remaining_count(tasks),
    }
}

/// Counts open tasks in the full sequence.
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.done).count()
}

/// Attaches badges and removability to each projected task.
pub fn rows(projection: &Projection, today: NaiveDate) -> Vec<TaskRow> {
    projection
        .items
        .iter()
        .map(|task| TaskRow {
            badge: badge_for(task, today),
            removable: task.done,
            task: task.clone(),
        })
        .collect()
}

fn compare_due(a: &Task, b: &Task) -> Ordering {
    match (a.due, b.due) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
