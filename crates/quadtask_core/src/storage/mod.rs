//! Snapshot persistence boundary.
//!
//! # Responsibility
//! - Define the save/load contract the session persists through.
//! - Keep SQL and payload codec details behind the storage boundary.

pub mod slot_store;
