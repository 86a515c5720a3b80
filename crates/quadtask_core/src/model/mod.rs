//! Domain model for the priority grid.
//!
//! # Responsibility
//! - Define the canonical task record used by the board, views and storage.
//! - Keep bin lifecycle bookkeeping next to the data it guards.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a category transition into the bin, never a removal.

pub mod task;
