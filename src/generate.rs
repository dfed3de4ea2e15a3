//! Tree generation entry point.
//!
//! One invocation equals one [`TreeRequest`]: the caller assembles the
//! request (CLI flags, configuration, or test fixture), and [`execute`]
//! resolves the root, builds the pattern set from its sources in order,
//! scans, and renders. No state survives between calls.

use crate::pattern::{PatternSet, loader};
use crate::utils::paths;
use crate::{output, render, scanner};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing::debug;

/// Caller-owned inputs for one tree generation.
#[derive(Debug, Clone)]
pub struct TreeRequest {
    /// Root directory to render.
    pub root: PathBuf,

    /// Optional gitignore-like rules file.
    pub ignore_file: Option<PathBuf>,

    /// Always-applied patterns, evaluated before any other source.
    pub base_patterns: Vec<String>,

    /// Ad-hoc patterns for this invocation (same comment/blank filtering
    /// as the rules file).
    pub extra_patterns: Vec<String>,

    /// Specific files or directories to exclude, converted to
    /// root-relative patterns; paths outside the root are dropped.
    pub exclude_paths: Vec<PathBuf>,

    /// Whether directory symlinks are expanded during traversal.
    pub follow_symlinks: bool,
}

impl TreeRequest {
    /// Creates a request for `root` with no patterns and default options.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_file: None,
            base_patterns: Vec::new(),
            extra_patterns: Vec::new(),
            exclude_paths: Vec::new(),
            follow_symlinks: true,
        }
    }
}

/// Generates the rendered tree string for `request`.
///
/// # Errors
///
/// Returns an error if the root does not exist or is not a directory, or
/// if a given ignore file exists but cannot be read. Unreadable entries
/// below the root are skipped with a warning instead.
pub fn execute(request: &TreeRequest) -> Result<String> {
    let root = paths::expand_tilde(&request.root)?;
    let root = root
        .canonicalize()
        .with_context(|| format!("Directory {} does not exist", request.root.display()))?;
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let patterns = assemble_patterns(request, &root)?;
    if !patterns.is_empty() {
        output::verbose(&format!(
            "Applying {} ignore patterns: {}",
            patterns.len(),
            patterns.iter_raw().collect::<Vec<_>>().join(", ")
        ));
    }
    debug!(
        root = %root.display(),
        patterns = patterns.len(),
        "generating tree"
    );

    let tree = scanner::scan(&root, &patterns, request.follow_symlinks)?;
    Ok(render::render(&root, &tree))
}

/// Concatenates the pattern sources in order: configuration defaults, the
/// ignore rules file, ad-hoc patterns, then explicit exclude paths.
fn assemble_patterns(request: &TreeRequest, root: &std::path::Path) -> Result<PatternSet> {
    let mut raw = loader::filter_raw_patterns(request.base_patterns.iter().map(String::as_str));

    if let Some(ignore_file) = &request.ignore_file {
        let ignore_file = paths::expand_tilde(ignore_file)?;
        raw.extend(loader::load_ignore_file(&ignore_file)?);
    }

    raw.extend(loader::filter_raw_patterns(
        request.extra_patterns.iter().map(String::as_str),
    ));

    for path in &request.exclude_paths {
        if let Some(rel) = paths::relative_unix_string(path, root) {
            if !raw.contains(&rel) {
                raw.push(rel);
            }
        }
    }

    Ok(PatternSet::new(raw))
}
