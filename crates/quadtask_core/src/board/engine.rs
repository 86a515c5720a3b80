//! Move planning for reorder and reclassify intents.
//!
//! # Responsibility
//! - Compute the full post-move sequence for one drag intent.
//! - Encode the insertion-point and tie-break rules in one place.
//!
//! # Invariants
//! - Planning never mutates its input; it returns a fresh sequence.
//! - The returned sequence is reindexed so `order` equals position.
//! - Moves across the bin boundary keep `prior_category` consistent.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::task::{Category, Task, TaskId};

pub type BoardResult<T> = Result<T, BoardError>;

/// Failure raised while planning a move.
///
/// A move that silently lost its subject would surface to the user as a
/// dropped drag, so absent ids are reported instead of ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The move referenced a task id that is not in the collection.
    NotFound(TaskId),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for BoardError {}

/// Vertical half of a drop that lands on empty category space instead of
/// on another task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    /// Land before the category's first task.
    Above,
    /// Land after the category's last task.
    Below,
}

/// Plans a move of `id` to a new position within its own category.
///
/// Shorthand for [`plan_move`] with the mover's current category as the
/// destination, so the directional tie-break applies whenever a target is
/// given.
pub fn plan_reorder(tasks: &[Task], id: TaskId, target: Option<TaskId>) -> BoardResult<Vec<Task>> {
    let mover_at = position_of(tasks, id).ok_or(BoardError::NotFound(id))?;
    plan_move(tasks, id, tasks[mover_at].category, target, None)
}

/// Plans one move intent against the current sequence.
///
/// 1. Extract the mover, keeping the remaining relative order intact.
/// 2. Pick the insertion point: target-relative when a target is given
///    (directional tie-break within one category, always-before across
///    categories), otherwise the destination category's edge per `drop`.
/// 3. Apply the category change, updating the bin bookkeeping when the
///    move crosses the bin boundary.
/// 4. Reindex the whole sequence.
///
/// `drop` only matters when `target` is `None`. A move targeting the mover
/// itself is a no-op and returns the input sequence unchanged.
///
/// # Errors
/// - `NotFound` when `id` or `target` is absent from `tasks`.
pub fn plan_move(
    tasks: &[Task],
    id: TaskId,
    destination: Category,
    target: Option<TaskId>,
    drop: Option<DropPosition>,
) -> BoardResult<Vec<Task>> {
    let mover_at = position_of(tasks, id).ok_or(BoardError::NotFound(id))?;
    if target == Some(id) {
        // Dropping a task onto itself cannot change the sequence.
        return Ok(tasks.to_vec());
    }

    let mut mover = tasks[mover_at].clone();
    let mut working: Vec<Task> = tasks
        .iter()
        .filter(|task| task.id != id)
        .cloned()
        .collect();

    let insert_at = match target {
        Some(target_id) => {
            let target_at =
                position_of(&working, target_id).ok_or(BoardError::NotFound(target_id))?;
            if working[target_at].category == mover.category {
                // Same-list drop. Compare positions as they were before the
                // extraction: a mover that sat above its target lands below
                // it, a mover that sat below lands above it.
                let target_was_at = if target_at < mover_at {
                    target_at
                } else {
                    target_at + 1
                };
                if mover_at < target_was_at {
                    target_at + 1
                } else {
                    target_at
                }
            } else {
                // Crossing a category boundary always lands above the target.
                target_at
            }
        }
        None => match drop {
            Some(DropPosition::Above) => working
                .iter()
                .position(|task| task.category == destination),
            // "Below" and unspecified both mean the end of the list.
            _ => working
                .iter()
                .rposition(|task| task.category == destination)
                .map(|last| last + 1),
        }
        // An empty destination takes the mover as its sole member.
        .unwrap_or(working.len()),
    };

    if mover.category != destination {
        // Entering the bin records where the task came from; every other
        // crossing clears the bookkeeping so restore cannot misfire later.
        mover.prior_category = match destination {
            Category::DeletedBin => Some(mover.category),
            _ => None,
        };
        mover.category = destination;
    }

    working.insert(insert_at, mover);
    reindex(&mut working);
    Ok(working)
}

/// Rewrites every task's `order` to its position in the sequence.
pub fn reindex(tasks: &mut [Task]) {
    for (position, task) in tasks.iter_mut().enumerate() {
        task.order = position;
    }
}

fn position_of(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id == id)
}
