use tasklist_core::{DueDate, Task, TaskValidationError};

#[test]
fn task_new_trims_title_and_sets_defaults() {
    let task = Task::new(42, "  buy milk \n", None).unwrap();

    assert_eq!(task.id, 42);
    assert_eq!(task.title, "buy milk");
    assert!(!task.done);
    assert_eq!(task.due, None);
}

#[test]
fn task_new_rejects_whitespace_title() {
    assert_eq!(
        Task::new(1, " \t ", None).unwrap_err(),
        TaskValidationError::EmptyTitle
    );
}

#[test]
fn toggle_flips_done() {
    let mut task = Task::new(1, "a", None).unwrap();
    task.toggle();
    assert!(task.done);
    task.toggle();
    assert!(!task.done);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut task = Task::new(1_700_000_000_000, "ship", Some(DueDate::parse("2024-01-05").unwrap()))
        .unwrap();
    task.done = true;

    let json = serde_json::to_string(&task).unwrap();
    assert_eq!(
        json,
        r#"{"id":1700000000000,"title":"ship","done":true,"due":"2024-01-05"}"#
    );

    let undated = Task::new(2, "later", None).unwrap();
    let value = serde_json::to_value(&undated).unwrap();
    assert!(value["due"].is_null());
}

#[test]
fn deserialize_accepts_missing_or_empty_due_as_absent() {
    let missing: Task = serde_json::from_str(r#"{"id":1,"title":"a","done":false}"#).unwrap();
    let empty: Task =
        serde_json::from_str(r#"{"id":1,"title":"a","done":false,"due":""}"#).unwrap();

    assert_eq!(missing.due, None);
    assert_eq!(empty.due, None);
}

#[test]
fn deserialize_rejects_invariant_violations() {
    let empty_title =
        serde_json::from_str::<Task>(r#"{"id":1,"title":"   ","done":false,"due":null}"#)
            .unwrap_err();
    assert!(
        empty_title.to_string().contains("title must not be empty"),
        "unexpected error: {empty_title}"
    );

    let bad_due =
        serde_json::from_str::<Task>(r#"{"id":1,"title":"a","done":false,"due":"2024-02-30"}"#)
            .unwrap_err();
    assert!(
        bad_due.to_string().contains("not a calendar day"),
        "unexpected error: {bad_due}"
    );
}
