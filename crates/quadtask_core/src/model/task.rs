//! Task domain model.
//!
//! # Responsibility
//! - Define the single task record shared by every board view.
//! - Provide lifecycle helpers for the soft-delete bin transitions.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `prior_category` is set if and only if the task sits in the bin.
//! - `order` is owned by the board; the model never recomputes it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Fixed set of buckets a task can occupy: the four grid quadrants plus the
/// unsorted inbox and the soft-delete bin.
///
/// Exactly one category holds a task at any time. Serialized names are the
/// camelCase values used by the persisted snapshot schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Unsorted items waiting to be placed on the grid.
    Inbox,
    /// Urgent and important: do it now.
    DoNow,
    /// Important but not urgent: schedule it.
    ScheduleLater,
    /// Urgent but not important: hand it off.
    Delegate,
    /// Neither urgent nor important.
    Eliminate,
    /// Soft-deleted tasks awaiting restore or a drag back onto the grid.
    DeletedBin,
}

impl Category {
    /// Stable wire name, matching the persisted JSON value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::DoNow => "doNow",
            Self::ScheduleLater => "scheduleLater",
            Self::Delegate => "delegate",
            Self::Eliminate => "eliminate",
            Self::DeletedBin => "deletedBin",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bin transition error: the typed form of a restore that cannot apply.
///
/// Callers that want no-op semantics (the board does) map these to a logged
/// warning instead of propagating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    /// Restore was requested for a task that is not in the bin.
    NotBinned(TaskId),
    /// The binned task has no recorded return category.
    MissingPriorCategory(TaskId),
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotBinned(id) => write!(f, "task is not in the bin: {id}"),
            Self::MissingPriorCategory(id) => {
                write!(f, "binned task has no recorded return category: {id}")
            }
        }
    }
}

impl Error for LifecycleError {}

/// The single entity this crate manages.
///
/// Field names serialize in camelCase to match the persisted snapshot
/// schema; optional fields are omitted when unset and default to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID, assigned at creation and never reused.
    pub id: TaskId,
    /// Display text. The board never edits it.
    pub text: String,
    /// The one bucket currently holding this task.
    pub category: Category,
    /// Position in the single global ordering; reassigned on every board write.
    pub order: usize,
    /// Category to return to on restore. Set iff `category == DeletedBin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_category: Option<Category>,
    /// Done flag. Meaningful only for `Category::DoNow`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Who the task was handed to. Meaningful only for `Category::Delegate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegated_to: Option<String>,
}

impl Task {
    /// Creates a new inbox task with a generated stable ID.
    ///
    /// # Invariants
    /// - Optional fields start as `None`.
    /// - `category` starts as `Inbox`; only board operations move it.
    pub fn new(text: impl Into<String>, order: usize) -> Self {
        Self::with_id(Uuid::new_v4(), text, order)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TaskId, text: impl Into<String>, order: usize) -> Self {
        Self {
            id,
            text: text.into(),
            category: Category::Inbox,
            order,
            prior_category: None,
            completed: None,
            delegated_to: None,
        }
    }

    /// Moves the task into the bin, recording where it came from.
    ///
    /// Returns `false` when the task is already binned; the call is then a
    /// no-op and the recorded return category stays untouched.
    pub fn soft_delete(&mut self) -> bool {
        if self.is_binned() {
            return false;
        }
        self.prior_category = Some(self.category);
        self.category = Category::DeletedBin;
        true
    }

    /// Returns the task to the category it was binned from, clearing the
    /// bookkeeping field.
    ///
    /// # Errors
    /// - `NotBinned` when the task is not in the bin (state unchanged).
    /// - `MissingPriorCategory` when the bin entry carries no return
    ///   category (state unchanged).
    pub fn restore(&mut self) -> Result<Category, LifecycleError> {
        if !self.is_binned() {
            return Err(LifecycleError::NotBinned(self.id));
        }
        let target = self
            .prior_category
            .take()
            .ok_or(LifecycleError::MissingPriorCategory(self.id))?;
        self.category = target;
        Ok(target)
    }

    /// Whether the task sits in the soft-delete bin.
    pub fn is_binned(&self) -> bool {
        self.category == Category::DeletedBin
    }
}
