//! Loading of ignore patterns from files and raw line sources.
//!
//! The loading rule is shared by every pattern source: blank lines and
//! lines beginning with `#` are dropped, everything else is kept verbatim
//! in source order.

use crate::output;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Filters raw pattern lines, dropping blanks and `#` comments.
pub fn filter_raw_patterns<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

/// Reads patterns from an ignore rules file.
///
/// A missing file is not an error: a warning is emitted and no patterns
/// are produced, so the generation proceeds unfiltered.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_ignore_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        output::warning(&format!(
            "Ignore file {} does not exist, skipping",
            path.display()
        ));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    let patterns = filter_raw_patterns(content.lines());
    debug!(file = %path.display(), count = patterns.len(), "loaded ignore patterns");
    Ok(patterns)
}
