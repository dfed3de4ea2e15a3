//! Tree rendering with box-drawing connectors.
//!
//! Produces the conventional `tree` command layout: the resolved root path
//! as a header line, a single `.` placeholder for the root, and one line
//! per surviving entry with `├── `/`└── ` connectors. Children are
//! re-sorted at render time with the same rule the scanner traverses in
//! (directories first, then case-insensitive name), since the underlying
//! map does not guarantee iteration order.

use crate::scanner::{FileNode, FileTree};
use std::collections::HashMap;
use std::path::Path;

/// Serializes `tree` into its indented string form.
///
/// Pure function of its inputs; performs no I/O. The output is
/// newline-joined with no trailing newline.
#[must_use]
pub fn render(root: &Path, tree: &FileTree) -> String {
    let mut lines = vec![root.display().to_string(), "└── .".to_string()];
    collect_lines(tree.children(), "    ", &mut lines);
    lines.join("\n")
}

/// Appends one rendered line per child, depth-first.
fn collect_lines(children: &HashMap<String, FileNode>, prefix: &str, lines: &mut Vec<String>) {
    let mut entries: Vec<(&String, &FileNode)> = children.iter().collect();
    entries.sort_by(|(name_a, node_a), (name_b, node_b)| {
        node_b
            .is_dir
            .cmp(&node_a.is_dir)
            .then_with(|| name_a.to_lowercase().cmp(&name_b.to_lowercase()))
            .then_with(|| name_a.cmp(name_b))
    });

    let last_index = entries.len().saturating_sub(1);
    for (index, (name, node)) in entries.iter().enumerate() {
        let is_last = index == last_index;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{name}"));

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        collect_lines(&node.children, &child_prefix, lines);
    }
}
