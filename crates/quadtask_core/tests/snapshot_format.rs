use quadtask_core::{Category, Task, TaskBoard};
use uuid::Uuid;

#[test]
fn canonical_snapshot_round_trips_through_json() {
    let mut board = seeded(&[
        ("draft agenda", Category::DoNow),
        ("plan offsite", Category::ScheduleLater),
        ("update invoices", Category::Delegate),
        ("sort mail", Category::Inbox),
    ]);
    board.set_completed(id_of(&board, "draft agenda"));
    board.set_delegate(id_of(&board, "update invoices"), "ana");
    board.delete(id_of(&board, "plan offsite"));

    let encoded = serde_json::to_string(board.tasks()).unwrap();
    let decoded: Vec<Task> = serde_json::from_str(&encoded).unwrap();
    let reloaded = TaskBoard::from_snapshot(decoded);

    assert_eq!(reloaded.tasks(), board.tasks());
}

#[test]
fn snapshot_load_sorts_by_order_and_reindexes() {
    let mut first = Task::new("second", 5);
    first.category = Category::DoNow;
    let mut second = Task::new("third", 9);
    second.category = Category::DoNow;
    let mut third = Task::new("first", 1);
    third.category = Category::DoNow;

    let board = TaskBoard::from_snapshot(vec![first, second, third]);

    let texts: Vec<&str> = board
        .tasks()
        .iter()
        .map(|task| task.text.as_str())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
    let orders: Vec<usize> = board.tasks().iter().map(|task| task.order).collect();
    assert_eq!(orders, [0, 1, 2]);
}

#[test]
fn snapshot_load_breaks_order_ties_by_storage_position() {
    let mut second = Task::new("second", 3);
    second.category = Category::DoNow;
    let mut third = Task::new("third", 3);
    third.category = Category::DoNow;
    let mut first = Task::new("first", 0);
    first.category = Category::DoNow;

    let board = TaskBoard::from_snapshot(vec![second, third, first]);

    let texts: Vec<&str> = board
        .tasks()
        .iter()
        .map(|task| task.text.as_str())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
    let orders: Vec<usize> = board.tasks().iter().map(|task| task.order).collect();
    assert_eq!(orders, [0, 1, 2]);
}

#[test]
fn snapshot_load_keeps_the_first_of_duplicate_ids() {
    let id = Uuid::new_v4();
    let original = Task::with_id(id, "kept copy", 0);
    let duplicate = Task::with_id(id, "dropped copy", 1);

    let board = TaskBoard::from_snapshot(vec![original, duplicate]);

    assert_eq!(board.len(), 1);
    assert_eq!(board.get(id).unwrap().text, "kept copy");
}

#[test]
fn snapshot_load_clears_a_stray_prior_category() {
    let mut drifted = Task::new("active with leftover marker", 0);
    drifted.category = Category::DoNow;
    drifted.prior_category = Some(Category::Inbox);

    let board = TaskBoard::from_snapshot(vec![drifted]);

    let task = &board.tasks()[0];
    assert_eq!(task.category, Category::DoNow);
    assert_eq!(task.prior_category, None);
}

#[test]
fn snapshot_load_keeps_a_bin_entry_without_prior_category() {
    let mut orphan = Task::new("imported bin entry", 0);
    orphan.category = Category::DeletedBin;
    let id = orphan.id;

    let mut board = TaskBoard::from_snapshot(vec![orphan]);

    assert_eq!(board.len(), 1);
    assert!(board.get(id).unwrap().is_binned());
    assert!(!board.restore(id));
}

#[test]
fn snapshot_load_is_identity_for_a_canonical_snapshot() {
    let board = seeded(&[
        ("draft agenda", Category::DoNow),
        ("plan offsite", Category::ScheduleLater),
        ("sort mail", Category::Inbox),
    ]);

    let reloaded = TaskBoard::from_snapshot(board.tasks().to_vec());

    assert_eq!(reloaded, board);
}

fn seeded(specs: &[(&str, Category)]) -> TaskBoard {
    let tasks: Vec<Task> = specs
        .iter()
        .enumerate()
        .map(|(position, (text, category))| {
            let mut task = Task::new(*text, position);
            task.category = *category;
            task
        })
        .collect();
    TaskBoard::from_snapshot(tasks)
}

fn id_of(board: &TaskBoard, text: &str) -> quadtask_core::TaskId {
    board
        .tasks()
        .iter()
        .find(|task| task.text == text)
        .map(|task| task.id)
        .unwrap()
}
