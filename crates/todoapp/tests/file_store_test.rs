use chrono::{Duration, TimeZone, Utc};
use std::fs;
use tempfile::TempDir;
use todoapp::error::{RecordError, TodoError};
use todoapp::model::{Todo, NO_ID};
use todoapp::store::file::{FileTodoRepository, LoadPolicy};
use todoapp::store::TodoRepository;

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todo.txt");
    (dir, path)
}

#[test]
fn test_round_trip_preserves_count_text_and_dates() {
    let (_dir, path) = setup();
    let base = Utc.with_ymd_and_hms(2024, 10, 31, 9, 15, 0).unwrap();

    let written: Vec<Todo> = (0..25)
        .map(|i| {
            Todo::with_due(
                format!("Item {} | with pipe", i),
                base + Duration::milliseconds(i * 1_234_567),
            )
        })
        .collect();

    let mut repo = FileTodoRepository::open(&path).unwrap();
    for todo in &written {
        repo.insert(todo.clone()).unwrap();
    }

    let reloaded = FileTodoRepository::open(&path).unwrap().get_all();
    assert_eq!(reloaded.len(), written.len());
    assert_eq!(reloaded, written);
}

#[test]
fn test_round_trip_of_now_timestamps() {
    let (_dir, path) = setup();
    let mut repo = FileTodoRepository::open(&path).unwrap();
    let todo = Todo::new("Eat lunch");
    repo.insert(todo.clone()).unwrap();

    let reloaded = FileTodoRepository::open(&path).unwrap().get_all();
    assert_eq!(reloaded, vec![todo]);
}

#[test]
fn test_ids_are_never_assigned() {
    let (_dir, path) = setup();
    let mut repo = FileTodoRepository::open(&path).unwrap();
    repo.insert(Todo::new("a")).unwrap();
    repo.insert(Todo::new("b")).unwrap();

    let reloaded = FileTodoRepository::open(&path).unwrap().get_all();
    assert!(reloaded.iter().all(|t| t.id == NO_ID));
}

#[test]
fn test_explicit_ids_survive() {
    let (_dir, path) = setup();
    fs::write(&path, "42|answer|2024-01-01T00:00:00Z\n").unwrap();
    let repo = FileTodoRepository::open(&path).unwrap();
    assert_eq!(repo.get_all()[0].id, 42);
}

// Files written by the original screen rendered dates in the device's local
// zone. Only UTC/GMT renderings can be read back; anything else is reported
// instead of silently dropped.
#[test]
fn test_legacy_file_dates_are_fragile() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        "-1|Eat lunch|Tue Oct 31 12:00:00 UTC 2023\n-1|Eat Halloween candy|Tue Oct 31 19:00:00 PDT 2023\n",
    )
    .unwrap();

    match FileTodoRepository::open(&path) {
        Err(TodoError::Malformed { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert!(matches!(reason, RecordError::BadDate(_)));
        }
        Err(other) => panic!("Expected Malformed, got {}", other),
        Ok(_) => panic!("Expected Malformed, got a repository"),
    }

    let lenient = FileTodoRepository::open_with_policy(&path, LoadPolicy::Skip).unwrap();
    let items = lenient.get_all();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item, "Eat lunch");
    assert_eq!(
        items[0].due_date,
        Utc.with_ymd_and_hms(2023, 10, 31, 12, 0, 0).unwrap()
    );
}

#[test]
fn test_rewrite_normalizes_legacy_dates() {
    let (_dir, path) = setup();
    fs::write(&path, "-1|Eat lunch|Tue Oct 31 12:00:00 GMT 2023\n").unwrap();

    let mut repo = FileTodoRepository::open(&path).unwrap();
    repo.insert(Todo::with_due(
        "Nap",
        Utc.with_ymd_and_hms(2023, 10, 31, 13, 0, 0).unwrap(),
    ))
    .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "-1|Eat lunch|2023-10-31T12:00:00Z\n-1|Nap|2023-10-31T13:00:00Z\n"
    );
}

#[test]
fn test_delete_then_reload() {
    let (_dir, path) = setup();
    let mut repo = FileTodoRepository::open(&path).unwrap();
    let a = Todo::new("a");
    let b = Todo::new("b");
    repo.insert(a.clone()).unwrap();
    repo.insert(b.clone()).unwrap();

    assert!(repo.delete(&a).unwrap());
    assert!(!repo.delete(&a).unwrap());

    let reloaded = FileTodoRepository::open(&path).unwrap().get_all();
    assert_eq!(reloaded, vec![b]);
}

#[test]
fn test_out_of_range_years_never_reach_the_file() {
    let (_dir, path) = setup();
    let mut repo = FileTodoRepository::open(&path).unwrap();
    repo.insert(Todo::with_due(
        "fine",
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ))
    .unwrap();

    for year in [10_000, -1] {
        let due = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
        match repo.insert(Todo::with_due("unstorable", due)) {
            Err(TodoError::Unstorable(RecordError::YearOutOfRange(y))) => assert_eq!(y, year),
            other => panic!("Expected Unstorable, got {:?}", other),
        }
    }

    // The file still opens under the default strict policy
    let reloaded = FileTodoRepository::open(&path).unwrap().get_all();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].item, "fine");
}

#[test]
fn test_year_zero_round_trips() {
    let (_dir, path) = setup();
    let todo = Todo::with_due("ancient", Utc.with_ymd_and_hms(0, 1, 1, 0, 0, 0).unwrap());
    let mut repo = FileTodoRepository::open(&path).unwrap();
    repo.insert(todo.clone()).unwrap();

    assert_eq!(FileTodoRepository::open(&path).unwrap().get_all(), vec![todo]);
}
