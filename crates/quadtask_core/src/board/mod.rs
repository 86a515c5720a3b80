//! Board state: the ordered task collection and its move policy.
//!
//! # Responsibility
//! - Own the single mutable task collection behind an explicit API.
//! - Keep every move/insertion policy decision in one pure planner.
//!
//! # Invariants
//! - After every mutation the `order` values are exactly `0..len`.
//! - Per-category display order is always derived, never stored.

pub mod engine;
pub mod store;
pub mod view;
