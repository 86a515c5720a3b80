//! The owned task collection and its mutation surface.
//!
//! # Responsibility
//! - Hold the full task sequence as the single source of truth.
//! - Expose exactly the mutations UI intents map onto.
//!
//! # Invariants
//! - After every mutation, `tasks[i].order == i` across the sequence.
//! - Absent ids are no-ops for single-task commands and typed failures
//!   for moves.
//! - `prior_category` is set only while a task sits in the bin.

use log::warn;

use crate::board::engine::{plan_move, plan_reorder, reindex, BoardResult, DropPosition};
use crate::model::task::{Category, LifecycleError, Task, TaskId};

/// The owned task collection behind every UI intent.
///
/// Storage order doubles as the global ordering: the board reindexes on
/// every structural change, so `order` always equals position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board from a persisted snapshot, repairing drifted
    /// bookkeeping instead of rejecting the whole payload.
    ///
    /// Each repair logs a warning; a canonical snapshot passes through
    /// unchanged:
    /// - duplicate ids keep their first occurrence;
    /// - the sequence is stable-sorted by `order`, then reindexed;
    /// - `prior_category` on a task outside the bin is cleared.
    pub fn from_snapshot(snapshot: Vec<Task>) -> Self {
        let mut tasks: Vec<Task> = Vec::with_capacity(snapshot.len());
        for task in snapshot {
            if tasks.iter().any(|kept| kept.id == task.id) {
                warn!(
                    "event=snapshot_repair module=board reason=duplicate_id id={}",
                    task.id
                );
                continue;
            }
            tasks.push(task);
        }

        tasks.sort_by_key(|task| task.order);
        reindex(&mut tasks);

        for task in &mut tasks {
            if task.prior_category.is_some() && !task.is_binned() {
                warn!(
                    "event=snapshot_repair module=board reason=stray_prior_category id={} category={}",
                    task.id, task.category
                );
                task.prior_category = None;
            }
        }

        Self { tasks }
    }

    /// The full sequence in global order, bin included.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks held, bin included.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board holds no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends one inbox task per text, in input order.
    ///
    /// Returns the ids of the created tasks; empty input creates nothing.
    pub fn add<I>(&mut self, texts: I) -> Vec<TaskId>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut created = Vec::new();
        for text in texts {
            let task = Task::new(text, self.tasks.len());
            created.push(task.id);
            self.tasks.push(task);
        }
        created
    }

    /// Empties the collection unconditionally. There is no undo.
    pub fn clear_all(&mut self) {
        self.tasks.clear();
    }

    /// Toggles the done flag; an unset flag counts as not done.
    ///
    /// Returns `false` when the id is absent.
    pub fn set_completed(&mut self, id: TaskId) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.completed = Some(!task.completed.unwrap_or(false));
                true
            }
            None => false,
        }
    }

    /// Records who the task is delegated to, verbatim.
    ///
    /// Returns `false` when the id is absent.
    pub fn set_delegate(&mut self, id: TaskId, assignee: impl Into<String>) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.delegated_to = Some(assignee.into());
                true
            }
            None => false,
        }
    }

    /// Soft-deletes the task into the bin, remembering where it came from.
    ///
    /// Returns `false` when the id is absent or the task is already binned.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.task_mut(id) {
            Some(task) => task.soft_delete(),
            None => false,
        }
    }

    /// Returns a binned task to the category it was deleted from.
    ///
    /// Returns `false` when the id is absent, the task is not binned, or
    /// the bin entry carries no return category. The last case is warned,
    /// since it means the bin bookkeeping was broken upstream.
    pub fn restore(&mut self, id: TaskId) -> bool {
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        match task.restore() {
            Ok(_) => true,
            Err(LifecycleError::NotBinned(_)) => false,
            Err(LifecycleError::MissingPriorCategory(_)) => {
                warn!(
                    "event=task_restore module=board status=skipped id={} error_code=missing_prior_category",
                    id
                );
                false
            }
        }
    }

    /// Moves a task to a new position within its own category's list.
    ///
    /// With a target the drop lands relative to it, using the directional
    /// tie-break; without one the task goes to the end of its list.
    ///
    /// # Errors
    /// - `NotFound` when `id` or `target` is absent.
    pub fn reorder_within_list(&mut self, id: TaskId, target: Option<TaskId>) -> BoardResult<()> {
        self.tasks = plan_reorder(&self.tasks, id, target)?;
        Ok(())
    }

    /// Moves a task into `destination`, placed relative to `target` or at
    /// the category edge picked by `drop`.
    ///
    /// # Errors
    /// - `NotFound` when `id` or `target` is absent.
    pub fn reclassify(
        &mut self,
        id: TaskId,
        destination: Category,
        target: Option<TaskId>,
        drop: Option<DropPosition>,
    ) -> BoardResult<()> {
        self.tasks = plan_move(&self.tasks, id, destination, target, drop)?;
        Ok(())
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
