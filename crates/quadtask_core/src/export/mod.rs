//! Snapshot export rendering.
//!
//! # Responsibility
//! - Render the grid portion of a collection for sharing.
//! - Keep export formatting independent of board mutation logic.

pub mod markdown;
