//! Core domain logic for QuadTask, a 2x2 priority grid for short tasks.
//! This crate is the single source of truth for ordering and bin invariants.

pub mod board;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use board::engine::{BoardError, BoardResult, DropPosition};
pub use board::store::TaskBoard;
pub use board::view::{category_view, renders_settled};
pub use export::markdown::export_markdown;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Category, LifecycleError, Task, TaskId};
pub use service::board_service::BoardService;
pub use storage::slot_store::{
    SnapshotStore, SqliteSlotStore, StorageError, StorageResult, TASKS_SLOT,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
