//! Board session service.
//!
//! # Responsibility
//! - Map UI intents 1:1 onto board operations.
//! - Persist the collection after each effective mutation.
//!
//! # Invariants
//! - Persistence is fire-and-forget: a failed save never rolls back or
//!   fails the mutation that triggered it.
//! - An absent or malformed stored snapshot opens as an empty collection.

use log::{info, warn};

use crate::board::engine::{BoardResult, DropPosition};
use crate::board::store::TaskBoard;
use crate::export::markdown::export_markdown;
use crate::model::task::{Category, TaskId};
use crate::storage::slot_store::{SnapshotStore, StorageError, StorageResult};

/// Owns the live board and the store it persists through.
///
/// Every mutating method runs the board operation first and saves after,
/// so the in-memory collection stays authoritative even when the store
/// misbehaves.
pub struct BoardService<S: SnapshotStore> {
    board: TaskBoard,
    store: S,
}

impl<S: SnapshotStore> BoardService<S> {
    /// Opens a session from whatever the store holds.
    ///
    /// An absent slot or a malformed payload opens as an empty collection.
    /// Database faults propagate instead, since discarding a snapshot the
    /// store may still hold intact would read as data loss.
    pub fn open(store: S) -> StorageResult<Self> {
        let board = match store.load() {
            Ok(Some(snapshot)) => TaskBoard::from_snapshot(snapshot),
            Ok(None) => TaskBoard::new(),
            Err(StorageError::Malformed(err)) => {
                warn!(
                    "event=session_open module=service status=recovered error_code=malformed_snapshot error={}",
                    err
                );
                TaskBoard::new()
            }
            Err(err) => return Err(err),
        };

        info!(
            "event=session_open module=service status=ok tasks={}",
            board.len()
        );
        Ok(Self { board, store })
    }

    /// Read-only access to the live board.
    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Adds one inbox task per text; empty input changes and saves nothing.
    pub fn add<I>(&mut self, texts: I) -> Vec<TaskId>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let created = self.board.add(texts);
        if !created.is_empty() {
            self.persist();
        }
        created
    }

    /// Empties the collection and removes the stored slot.
    pub fn clear_all(&mut self) {
        self.board.clear_all();
        if let Err(err) = self.store.clear() {
            warn!(
                "event=snapshot_clear module=service status=error error={}",
                err
            );
        }
    }

    /// Toggles a task's done flag. Absent ids are no-ops.
    pub fn set_completed(&mut self, id: TaskId) -> bool {
        let changed = self.board.set_completed(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Records who a task is delegated to. Absent ids are no-ops.
    pub fn set_delegate(&mut self, id: TaskId, assignee: impl Into<String>) -> bool {
        let changed = self.board.set_delegate(id, assignee);
        if changed {
            self.persist();
        }
        changed
    }

    /// Soft-deletes a task into the bin. Absent ids are no-ops.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let changed = self.board.delete(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Restores a binned task to its prior category. Absent ids are no-ops.
    pub fn restore(&mut self, id: TaskId) -> bool {
        let changed = self.board.restore(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Reorders a task within its own category's list.
    ///
    /// # Errors
    /// - `NotFound` when `id` or `target` is absent; nothing is saved.
    pub fn reorder_within_list(&mut self, id: TaskId, target: Option<TaskId>) -> BoardResult<()> {
        self.board.reorder_within_list(id, target)?;
        self.persist();
        Ok(())
    }

    /// Moves a task into another category.
    ///
    /// # Errors
    /// - `NotFound` when `id` or `target` is absent; nothing is saved.
    pub fn reclassify(
        &mut self,
        id: TaskId,
        destination: Category,
        target: Option<TaskId>,
        drop: Option<DropPosition>,
    ) -> BoardResult<()> {
        self.board.reclassify(id, destination, target, drop)?;
        self.persist();
        Ok(())
    }

    /// Renders the grid categories as a markdown checklist.
    pub fn export_markdown(&self) -> String {
        export_markdown(self.board.tasks())
    }

    fn persist(&self) {
        // The live board stays authoritative; the next effective mutation
        // retries the save.
        if let Err(err) = self.store.save(self.board.tasks()) {
            warn!(
                "event=snapshot_save module=service status=error error={}",
                err
            );
        }
    }
}
