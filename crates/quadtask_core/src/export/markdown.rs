//! Markdown checklist export.
//!
//! # Responsibility
//! - Render the four grid categories as a markdown checkbox document.
//! - Follow the per-category order the categories display with.
//!
//! # Invariants
//! - Inbox and bin tasks never appear in the output.
//! - Only `DoNow` tasks can render a checked box.

use crate::board::view::category_view;
use crate::model::task::{Category, Task};

/// Grid categories in export order, with their section titles.
const SECTIONS: [(Category, &str); 4] = [
    (Category::DoNow, "Do"),
    (Category::ScheduleLater, "Schedule"),
    (Category::Delegate, "Delegate"),
    (Category::Eliminate, "Eliminate"),
];

/// Renders the grid as a markdown checkbox document.
///
/// One `**Title**` heading per non-empty grid category, one `- [ ] text`
/// line per task; the box is checked only for completed `DoNow` tasks.
/// Sections are separated by a blank line and empty sections are skipped,
/// so an all-empty grid renders as the empty string.
pub fn export_markdown(tasks: &[Task]) -> String {
    let mut sections: Vec<String> = Vec::with_capacity(SECTIONS.len());
    for (category, title) in SECTIONS {
        let members = category_view(tasks, category);
        if members.is_empty() {
            continue;
        }

        let mut section = format!("**{title}**\n");
        for task in members {
            let done = category == Category::DoNow && task.completed.unwrap_or(false);
            let mark = if done { 'x' } else { ' ' };
            section.push_str(&format!("- [{mark}] {}\n", task.text));
        }
        sections.push(section);
    }
    sections.join("\n")
}
