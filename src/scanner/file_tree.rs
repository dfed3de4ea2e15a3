use std::collections::HashMap;
use std::path::{Component, Path};

/// A single entry in the accumulated hierarchy.
///
/// Directories carry an explicit flag rather than being inferred from
/// child count, so an empty directory stays distinguishable from a file.
#[derive(Debug, Clone, Default)]
pub struct FileNode {
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Child nodes keyed by entry name (case preserved, no inherent order).
    pub children: HashMap<String, FileNode>,
}

/// Hierarchical map of the entries that survived pattern filtering.
///
/// The traversal root is not itself a node; the tree holds only the
/// root's descendants, keyed by path segment.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    /// Invisible node standing in for the traversal root.
    root: FileNode,
}

impl FileTree {
    /// Create a new empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: FileNode {
                is_dir: true,
                children: HashMap::new(),
            },
        }
    }

    /// Insert an entry at the position implied by its root-relative path.
    ///
    /// Intermediate segments are marked as directories; the terminal
    /// segment takes `is_dir`. Inserting the same path twice is harmless.
    pub fn insert(&mut self, rel_path: &Path, is_dir: bool) {
        let mut components = rel_path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .peekable();

        let mut current = &mut self.root;
        while let Some(name) = components.next() {
            current = current.children.entry(name).or_default();
            if components.peek().is_some() {
                current.is_dir = true;
            } else {
                current.is_dir |= is_dir;
            }
        }
    }

    /// The root's immediate children.
    #[must_use]
    pub fn children(&self) -> &HashMap<String, FileNode> {
        &self.root.children
    }

    /// Whether the tree holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
