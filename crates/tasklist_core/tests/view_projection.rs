use chrono::NaiveDate;
use tasklist_core::{project, remaining_count, rows, DueDate, Severity, Task, TaskFilter};

fn task(id: i64, due: Option<&str>, done: bool) -> Task {
    let mut task = Task::new(id, &format!("task {id}"), due.map(|d| DueDate::parse(d).unwrap()))
        .unwrap();
    task.done = done;
    task
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id).collect()
}

#[test]
fn all_filter_sorts_open_by_due_then_appends_done() {
    let tasks = vec![
        task(1, None, false),
        task(2, Some("2024-01-05"), false),
        task(3, Some("2024-01-01"), false),
        task(4, Some("2024-01-01"), true),
    ];

    let projection = project(&tasks, TaskFilter::All);

    assert_eq!(ids(&projection.items), vec![3, 2, 1, 4]);
    assert_eq!(projection.remaining_count, 3);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let tasks = vec![
        task(1, None, false),
        task(2, Some("2024-02-01"), false),
        task(3, None, false),
        task(4, Some("2024-02-01"), false),
        task(5, Some("2023-12-31"), false),
    ];

    let projection = project(&tasks, TaskFilter::All);
    assert_eq!(ids(&projection.items), vec![5, 2, 4, 1, 3]);
}

#[test]
fn done_partition_keeps_store_order() {
    let tasks = vec![
        task(1, Some("2024-03-01"), true),
        task(2, None, true),
        task(3, Some("2024-01-01"), true),
        task(4, None, false),
    ];

    let projection = project(&tasks, TaskFilter::All);
    assert_eq!(ids(&projection.items), vec![4, 1, 2, 3]);
}

#[test]
fn filters_select_by_done_flag() {
    let tasks = vec![
        task(1, None, false),
        task(2, None, true),
        task(3, Some("2024-01-01"), false),
    ];

    assert_eq!(ids(&project(&tasks, TaskFilter::Active).items), vec![3, 1]);
    assert_eq!(ids(&project(&tasks, TaskFilter::Completed).items), vec![2]);
}

#[test]
fn remaining_count_ignores_active_filter() {
    let tasks = vec![task(1, None, false), task(2, None, true), task(3, None, false)];

    for filter in [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed] {
        assert_eq!(project(&tasks, filter).remaining_count, 2, "filter {filter}");
    }
    assert_eq!(remaining_count(&tasks), 2);
    assert_eq!(remaining_count(&[]), 0);
}

#[test]
fn rows_attach_badges_and_removability() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let tasks = vec![
        task(1, None, false),
        task(2, Some("2024-01-01"), false),
        task(3, Some("2024-01-01"), true),
    ];

    let rendered = rows(&project(&tasks, TaskFilter::All), today);

    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[0].task.id, 2);
    assert_eq!(rendered[0].badge.as_ref().unwrap().label, "due today");
    assert!(!rendered[0].removable);
    assert_eq!(rendered[1].task.id, 1);
    assert!(rendered[1].badge.is_none());
    assert_eq!(rendered[2].badge.as_ref().unwrap().severity, Severity::Muted);
    assert!(rendered[2].removable);
}
