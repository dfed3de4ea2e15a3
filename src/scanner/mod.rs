//! Filesystem scanning and hierarchy accumulation.
//!
//! The scanner walks the root depth-first, applies the pattern set at
//! every entry, and accumulates the survivors into a [`FileTree`]. A
//! directory matched by a pattern is pruned: the walker never descends
//! into it, so none of its contents can reappear in the tree.

/// Trie-style accumulation of surviving filesystem entries.
pub mod file_tree;

pub use file_tree::{FileNode, FileTree};

use crate::output;
use crate::pattern::PatternSet;
use crate::utils::paths;
use anyhow::Result;
use std::cmp::Ordering;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Walks `root` and builds the tree of entries surviving `patterns`.
///
/// `root` must already be absolute and symlink-normalized; the root itself
/// is exempt from filtering. Sibling order is directories first, then
/// lexicographic by lowercase name, which also fixes visitation order.
/// Unreadable entries are skipped with a warning and the walk continues,
/// so a partially readable hierarchy still yields a tree.
///
/// # Errors
///
/// Returns an error only on failures that prevent the walk from starting;
/// per-entry errors are absorbed.
pub fn scan(root: &Path, patterns: &PatternSet, follow_symlinks: bool) -> Result<FileTree> {
    let mut tree = FileTree::new();

    let walker = WalkDir::new(root)
        .follow_links(follow_symlinks)
        .sort_by(compare_entries)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry, root, patterns));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.depth() == 0 {
                    continue;
                }
                if let Ok(rel) = entry.path().strip_prefix(root) {
                    tree.insert(rel, entry.file_type().is_dir());
                }
            }
            Err(err) => {
                output::warning(&format!("Skipping unreadable entry: {err}"));
            }
        }
    }

    Ok(tree)
}

/// Sibling ordering: directories first, then lowercase name ascending.
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    b_dir.cmp(&a_dir).then_with(|| {
        a.file_name()
            .to_string_lossy()
            .to_lowercase()
            .cmp(&b.file_name().to_string_lossy().to_lowercase())
    })
}

/// Whether an entry's root-relative path matches the pattern set.
fn is_excluded(entry: &DirEntry, root: &Path, patterns: &PatternSet) -> bool {
    let Ok(rel) = entry.path().strip_prefix(root) else {
        return false;
    };
    let rel_str = paths::to_unix_string(rel);
    let excluded = patterns.is_ignored(&rel_str);
    if excluded {
        debug!(path = %rel_str, "pruned by ignore pattern");
    }
    excluded
}
