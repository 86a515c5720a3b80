use quadtask_core::{category_view, Category, Task, TaskBoard, TaskId};
use uuid::Uuid;

#[test]
fn delete_then_restore_returns_to_the_original_category() {
    let mut board = seeded(&[
        ("plan offsite", Category::ScheduleLater),
        ("book room", Category::DoNow),
    ]);
    let id = id_of(&board, "plan offsite");

    assert!(board.delete(id));
    assert_eq!(board.get(id).unwrap().category, Category::DeletedBin);
    assert_eq!(
        board.get(id).unwrap().prior_category,
        Some(Category::ScheduleLater)
    );

    assert!(board.restore(id));
    assert_eq!(board.get(id).unwrap().category, Category::ScheduleLater);
    assert_eq!(board.get(id).unwrap().prior_category, None);
}

#[test]
fn delete_keeps_the_task_in_place_in_the_global_order() {
    let mut board = seeded(&[
        ("draft agenda", Category::DoNow),
        ("send invites", Category::DoNow),
        ("plan offsite", Category::ScheduleLater),
    ]);
    let id = id_of(&board, "send invites");

    board.delete(id);

    assert_eq!(
        global_texts(&board),
        ["draft agenda", "send invites", "plan offsite"]
    );
    assert_eq!(listed(&board, Category::DeletedBin), ["send invites"]);
    assert_eq!(listed(&board, Category::DoNow), ["draft agenda"]);
}

#[test]
fn delete_for_an_absent_id_is_a_noop() {
    let mut board = seeded(&[("book room", Category::DoNow)]);
    let before = board.clone();

    assert!(!board.delete(Uuid::new_v4()));
    assert_eq!(board, before);
}

#[test]
fn delete_is_a_noop_when_already_binned() {
    let mut board = seeded(&[("book room", Category::DoNow)]);
    let id = id_of(&board, "book room");
    assert!(board.delete(id));

    assert!(!board.delete(id));
    assert_eq!(
        board.get(id).unwrap().prior_category,
        Some(Category::DoNow)
    );
}

#[test]
fn restore_for_an_absent_id_is_a_noop() {
    let mut board = seeded(&[("book room", Category::DoNow)]);
    let before = board.clone();

    assert!(!board.restore(Uuid::new_v4()));
    assert_eq!(board, before);
}

#[test]
fn restore_for_an_active_task_is_a_noop() {
    let mut board = seeded(&[("book room", Category::DoNow)]);
    let id = id_of(&board, "book room");

    assert!(!board.restore(id));
    assert_eq!(board.get(id).unwrap().category, Category::DoNow);
}

#[test]
fn restore_without_a_recorded_prior_category_is_a_noop() {
    let mut orphan = Task::new("imported bin entry", 0);
    orphan.category = Category::DeletedBin;
    let id = orphan.id;
    let mut board = TaskBoard::from_snapshot(vec![orphan]);

    assert!(!board.restore(id));
    assert_eq!(board.get(id).unwrap().category, Category::DeletedBin);
    assert_eq!(board.len(), 1);
}

#[test]
fn reclassify_into_the_bin_records_the_prior_category() {
    let mut board = seeded(&[("book room", Category::DoNow)]);
    let id = id_of(&board, "book room");

    board
        .reclassify(id, Category::DeletedBin, None, None)
        .unwrap();

    assert!(board.get(id).unwrap().is_binned());
    assert_eq!(
        board.get(id).unwrap().prior_category,
        Some(Category::DoNow)
    );

    assert!(board.restore(id));
    assert_eq!(board.get(id).unwrap().category, Category::DoNow);
}

#[test]
fn reclassify_out_of_the_bin_clears_the_prior_category() {
    let mut board = seeded(&[("plan offsite", Category::ScheduleLater)]);
    let id = id_of(&board, "plan offsite");
    board.delete(id);

    board.reclassify(id, Category::DoNow, None, None).unwrap();

    assert_eq!(board.get(id).unwrap().category, Category::DoNow);
    assert_eq!(board.get(id).unwrap().prior_category, None);
    assert!(!board.restore(id));
}

#[test]
fn reordering_inside_the_bin_keeps_the_prior_category() {
    let mut board = seeded(&[
        ("draft agenda", Category::DoNow),
        ("plan offsite", Category::ScheduleLater),
    ]);
    let first = id_of(&board, "draft agenda");
    let second = id_of(&board, "plan offsite");
    board.delete(first);
    board.delete(second);

    board
        .reclassify(first, Category::DeletedBin, Some(second), None)
        .unwrap();

    assert_eq!(
        board.get(first).unwrap().prior_category,
        Some(Category::DoNow)
    );
    assert_eq!(
        listed(&board, Category::DeletedBin),
        ["plan offsite", "draft agenda"]
    );
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

fn id_of(board: &TaskBoard, text: &str) -> TaskId {
    board
        .tasks()
        .iter()
        .find(|task| task.text == text)
        .map(|task| task.id)
        .unwrap()
}

fn listed(board: &TaskBoard, category: Category) -> Vec<String> {
    category_view(board.tasks(), category)
        .iter()
        .map(|task| task.text.clone())
        .collect()
}

fn global_texts(board: &TaskBoard) -> Vec<String> {
    board.tasks().iter().map(|task| task.text.clone()).collect()
}
