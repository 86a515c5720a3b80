//! Per-category display ordering.
//!
//! # Responsibility
//! - Derive what one category shows from the canonical global order.
//! - Keep presentation rules out of the stored fields.
//!
//! # Invariants
//! - Derivation never mutates `order` or `completed`.
//! - The same collection always derives the same view.

use crate::model::task::{Category, Task};

/// Tasks of one category in display order.
///
/// Every category lists by ascending `order`. `DoNow` additionally sinks
/// completed tasks below open ones, keeping the `order` sequence within
/// each half. The result borrows from `tasks`; nothing is cached.
pub fn category_view(tasks: &[Task], category: Category) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.category == category)
        .collect();
    if category == Category::DoNow {
        view.sort_by_key(|task| (task.completed.unwrap_or(false), task.order));
    } else {
        view.sort_by_key(|task| task.order);
    }
    view
}

/// Whether a task renders in the settled ("done") style.
///
/// `Eliminate` tasks always render settled; their stored `completed` flag
/// stays untouched and carries no meaning.
pub fn renders_settled(task: &Task) -> bool {
    task.category == Category::Eliminate || task.completed.unwrap_or(false)
}
