use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Expands tilde in path to home directory
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    if let Some(path_str) = path.to_str() {
        if path_str.starts_with("~/") || path_str == "~" {
            let home = dirs::home_dir().context("Could not find home directory")?;
            if path_str == "~" {
                Ok(home)
            } else {
                Ok(home.join(&path_str[2..]))
            }
        } else {
            Ok(path.to_path_buf())
        }
    } else {
        Ok(path.to_path_buf())
    }
}

/// Converts a relative path to its `/`-separated string form, regardless of
/// the host path-separator convention.
#[must_use]
pub fn to_unix_string(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolves `path` and converts it to a `/`-separated string relative to
/// `root`. Returns `None` when the path does not resolve, is not under
/// `root`, or is `root` itself.
#[must_use]
pub fn relative_unix_string(path: &Path, root: &Path) -> Option<String> {
    let resolved = expand_tilde(path).ok()?;
    let resolved = resolved.canonicalize().ok()?;
    let rel = resolved.strip_prefix(root).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }
    Some(to_unix_string(rel))
}
