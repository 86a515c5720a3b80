//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quadtask_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("quadtask_core ping={}", quadtask_core::ping());
    println!("quadtask_core version={}", quadtask_core::core_version());
}
