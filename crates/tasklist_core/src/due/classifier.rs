//! Due badge classifier.
//!
//! # Responsibility
//! - Count whole days between today and a due date.
//! - Produce the `{label, severity}` badge rendered next to a task.
//!
//! # Invariants
//! - Completed tasks bypass classification and always get a `muted` badge.
//! - Tasks without a due date get no badge at all.

use crate::model::due_date::DueDate;
use crate::model::task::Task;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency tier used to style a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Past due.
    Danger,
    /// Due within three days.
    Warn,
    /// Due later.
    Normal,
    /// Task already completed.
    Muted,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warn => "warn",
            Self::Normal => "normal",
            Self::Muted => "muted",
        }
    }
}

/// Label and tier rendered next to a task with a due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueBadge {
    pub label: String,
    pub severity: Severity,
}

impl DueBadge {
    fn new(label: impl Into<String>, severity: Severity) -> Self {
        Self {
            label: label.into(),
            severity,
        }
    }
}

/// Signed day count from the start of `today` to the start of `due`.
///
/// Today is `0`, tomorrow `+1`, yesterday `-1`. Both sides are calendar
/// dates, so daylight-saving transitions cannot shift the count.
pub fn days_until(due: DueDate, today: NaiveDate) -> i64 {
    due.as_naive().signed_duration_since(today).num_days()
}

/// Classifies an open task's due date relative to `today`.
pub fn classify(due: DueDate, today: NaiveDate) -> DueBadge {
    let days = days_until(due, today);
    match days {
        d if d < -7 => DueBadge::new(
            format!("overdue ({}·{})", due.month_day(), due.weekday_name()),
            Severity::Danger,
        ),
        -7..=-2 => DueBadge::new(format!("overdue ({} days ago)", -days), Severity::Danger),
        -1 => DueBadge::new("was due yesterday", Severity::Danger),
        0 => DueBadge::new("due today", Severity::Warn),
        1 => DueBadge::new("due tomorrow", Severity::Warn),
        2..=3 => DueBadge::new(format!("{days} days left"), Severity::Warn),
        _ => DueBadge::new(
            format!("{} ({})", due.month_day(), due.weekday_name()),
            Severity::Normal,
        ),
    }
}

/// Badge for a completed task, independent of how far away `due` is.
pub fn completed_badge(due: DueDate) -> DueBadge {
    DueBadge::new(
        format!("completed ({}·{})", due.month_day(), due.weekday_name()),
        Severity::Muted,
    )
}

/// Badge to render for `task`, or `None` when it has no due date.
pub fn badge_for(task: &Task, today: NaiveDate) -> Option<DueBadge> {
    let due = task.due?;
    if task.done {
        return Some(completed_badge(due));
    }
    Some(classify(due, today))
}

#[cfg(test)]
mod tests {
    use super::{days_until, Severity};
    use crate::model::due_date::DueDate;
    use chrono::NaiveDate;

    #[test]
    fn days_until_crosses_month_and_year_boundaries() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(days_until(DueDate::parse("2024-01-01").unwrap(), today), 1);
        assert_eq!(days_until(DueDate::parse("2023-12-01").unwrap(), today), -30);
        assert_eq!(days_until(DueDate::parse("2024-03-01").unwrap(), today), 61);
    }

    #[test]
    fn severity_names_are_stable() {
        assert_eq!(Severity::Danger.as_str(), "danger");
        assert_eq!(
            serde_json::to_value(Severity::Muted).unwrap(),
            serde_json::json!("muted")
        );
    }
}
