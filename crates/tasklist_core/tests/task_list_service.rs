use chrono::NaiveDate;
use tasklist_core::{
    parse_due_input, DueDate, KeyValueStorage, LoadSource, ManualClock, MemoryStorage,
    PersistenceConfig, Severity, SqliteKeyValueStorage, TaskFilter, TaskList,
    CURRENT_STORAGE_KEY, LEGACY_STORAGE_KEY,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

fn clock() -> ManualClock {
    ManualClock::new(today(), 1_704_844_800_000)
}

fn open(storage: &MemoryStorage) -> TaskList<&MemoryStorage, ManualClock> {
    TaskList::open(storage, clock(), PersistenceConfig::default())
}

#[test]
fn open_on_empty_storage_writes_empty_sequence() {
    let storage = MemoryStorage::new();
    let list = open(&storage);

    assert_eq!(list.load_source(), LoadSource::Empty);
    assert!(list.tasks().is_empty());
    assert_eq!(list.filter(), TaskFilter::All);
    assert_eq!(storage.get(CURRENT_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn mutations_are_mirrored_to_storage() {
    let storage = MemoryStorage::new();
    let mut list = open(&storage);

    let task = list
        .add("write report", Some(DueDate::parse("2024-01-11").unwrap()))
        .unwrap();
    assert!(list.toggle(task.id));

    let saved = list.storage().get(CURRENT_STORAGE_KEY).unwrap().unwrap();
    assert!(saved.contains(r#""done":true"#), "saved payload {saved}");

    let reopened = open(&storage);
    assert_eq!(reopened.load_source(), LoadSource::Current);
    assert_eq!(reopened.tasks(), list.tasks());
    assert!(reopened.tasks()[0].done);
}

#[test]
fn noop_mutations_skip_write_back() {
    let storage = MemoryStorage::new();
    let mut list = open(&storage);
    let task = list.add("open task", None).unwrap();
    let writes = storage.write_count();

    assert!(list.add("   ", None).is_none());
    assert!(!list.toggle(task.id + 1000));
    assert!(!list.remove(task.id));
    assert_eq!(list.clear_completed(), 0);

    assert_eq!(storage.write_count(), writes);
    assert_eq!(list.tasks().len(), 1);
}

#[test]
fn remove_requires_completion() {
    let storage = MemoryStorage::new();
    let mut list = open(&storage);
    let task = list.add("finish me", None).unwrap();

    assert!(!list.remove(task.id));
    list.toggle(task.id);
    assert!(list.remove(task.id));
    assert!(list.tasks().is_empty());
    assert_eq!(storage.get(CURRENT_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn write_failures_keep_in_memory_state() {
    let storage = MemoryStorage::new();
    let mut list = open(&storage);
    let kept = list.add("kept", None).unwrap();
    storage.set_fail_writes(true);

    let added = list.add("unsaved", None).unwrap();
    assert!(list.toggle(kept.id));

    assert_eq!(list.tasks().len(), 2);
    assert_eq!(list.tasks()[0].id, added.id);
    assert!(list.tasks()[1].done);

    storage.set_fail_writes(false);
    let reopened = open(&storage);
    assert_eq!(reopened.tasks().len(), 1);
    assert!(!reopened.tasks()[0].done);
}

#[test]
fn legacy_migration_runs_once() {
    let legacy = r#"[{"id":1,"title":"a","done":true},{"id":2,"title":"b","done":false}]"#;
    let storage = MemoryStorage::new();
    storage.insert(LEGACY_STORAGE_KEY, legacy);

    let first = open(&storage);
    assert_eq!(first.load_source(), LoadSource::Legacy);
    assert_eq!(first.tasks().len(), 2);
    assert!(first.tasks().iter().all(|task| task.due.is_none()));
    drop(first);

    let second = open(&storage);
    assert_eq!(second.load_source(), LoadSource::Current);
    assert_eq!(second.tasks().len(), 2);
    assert_eq!(storage.get(LEGACY_STORAGE_KEY).unwrap().as_deref(), Some(legacy));
}

#[test]
fn view_applies_filter_and_badges() {
    let storage = MemoryStorage::new();
    let mut list = open(&storage);
    let undated = list.add("undated", None).unwrap();
    let soon = list
        .add("soon", Some(DueDate::parse("2024-01-10").unwrap()))
        .unwrap();
    let finished = list
        .add("finished", Some(DueDate::parse("2024-01-01").unwrap()))
        .unwrap();
    list.toggle(finished.id);

    let view = list.view();
    let order: Vec<_> = view.rows.iter().map(|row| row.task.id).collect();
    assert_eq!(order, vec![soon.id, undated.id, finished.id]);
    assert_eq!(view.remaining_count, 2);
    assert_eq!(view.badges()[0].unwrap().label, "due today");
    assert!(view.badges()[1].is_none());
    assert_eq!(view.badges()[2].unwrap().severity, Severity::Muted);

    list.set_filter(TaskFilter::Completed);
    let view = list.view();
    assert_eq!(view.filter, TaskFilter::Completed);
    assert_eq!(view.rows.len(), 1);
    assert!(view.rows[0].removable);
    assert_eq!(view.remaining_count, 2);
}

#[test]
fn filter_is_not_persisted() {
    let storage = MemoryStorage::new();
    let mut list = open(&storage);
    list.add("a", None).unwrap();
    list.set_filter(TaskFilter::Active);
    drop(list);

    assert_eq!(open(&storage).filter(), TaskFilter::All);
}

#[test]
fn parse_due_input_treats_blank_as_absent() {
    assert_eq!(parse_due_input("").unwrap(), None);
    assert_eq!(parse_due_input("   ").unwrap(), None);
    assert_eq!(
        parse_due_input(" 2024-01-05 ").unwrap(),
        Some(DueDate::parse("2024-01-05").unwrap())
    );
    assert!(parse_due_input("tomorrow").is_err());
}

#[test]
fn sqlite_storage_backs_a_session_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.sqlite3");

    {
        let storage = SqliteKeyValueStorage::open(&path).unwrap();
        let mut list = TaskList::open(storage, clock(), PersistenceConfig::default());
        list.add("persisted", Some(DueDate::parse("2024-02-01").unwrap()))
            .unwrap();
    }

    let storage = SqliteKeyValueStorage::open(&path).unwrap();
    let list = TaskList::open(storage, clock(), PersistenceConfig::default());
    assert_eq!(list.load_source(), LoadSource::Current);
    assert_eq!(list.tasks().len(), 1);
    assert_eq!(list.tasks()[0].title, "persisted");
}
