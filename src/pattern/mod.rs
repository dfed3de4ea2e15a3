//! Ignore-pattern compilation and matching.
//!
//! Patterns follow the ignore-file convention: `*`, `?`, and `[...]`
//! wildcards, case-sensitive, with `*` free to match across `/`. A pattern
//! beginning with `/` is anchored to the traversal root and matched against
//! the full root-relative path only; any other pattern matches either the
//! full relative path or the terminal path component. A trailing `/` is
//! stripped, so directory-style and file-style patterns behave identically.

/// Loading of patterns from ignore files and raw line sources.
pub mod loader;

use glob::Pattern as GlobPattern;
use tracing::debug;

/// A single compiled ignore pattern.
#[derive(Debug, Clone)]
struct CompiledPattern {
    /// The pattern string as originally supplied, for diagnostics.
    raw: String,
    /// Whether the pattern is anchored to the traversal root.
    rooted: bool,
    /// The compiled matcher.
    matcher: Matcher,
}

/// Matching strategy for one pattern.
#[derive(Debug, Clone)]
enum Matcher {
    /// Normal glob matching.
    Glob(GlobPattern),
    /// Byte-equality fallback for strings that are not valid glob syntax.
    Literal(String),
}

impl Matcher {
    /// Tests `text` against this matcher.
    fn matches(&self, text: &str) -> bool {
        match self {
            Self::Glob(pattern) => pattern.matches(text),
            Self::Literal(literal) => literal == text,
        }
    }
}

impl CompiledPattern {
    /// Normalizes and compiles one raw pattern string.
    fn new(raw: String) -> Self {
        let mut normalized = raw.replace('\\', "/");
        if normalized.ends_with('/') {
            normalized.truncate(normalized.trim_end_matches('/').len());
        }

        let rooted = normalized.starts_with('/');
        let body = if rooted {
            normalized.trim_start_matches('/')
        } else {
            normalized.as_str()
        };

        let matcher = match GlobPattern::new(body) {
            Ok(glob) => Matcher::Glob(glob),
            Err(err) => {
                debug!(pattern = %raw, %err, "not valid glob syntax, matching literally");
                Matcher::Literal(body.to_string())
            }
        };

        Self {
            raw,
            rooted,
            matcher,
        }
    }

    /// Tests a relative path (and its base name) against this pattern.
    fn matches(&self, rel_path: &str, base_name: &str) -> bool {
        if self.rooted {
            self.matcher.matches(rel_path)
        } else {
            self.matcher.matches(rel_path) || self.matcher.matches(base_name)
        }
    }
}

/// An ordered, read-only set of compiled ignore patterns.
///
/// Construction order is preserved for diagnostic reproducibility; matching
/// itself short-circuits on the first hit, so order never affects results.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    /// Compiled patterns in construction order.
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compiles `raw_patterns` into a pattern set, preserving order.
    #[must_use]
    pub fn new(raw_patterns: Vec<String>) -> Self {
        let patterns = raw_patterns.into_iter().map(CompiledPattern::new).collect();
        Self { patterns }
    }

    /// Number of patterns in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set holds no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The raw pattern strings in construction order.
    pub fn iter_raw(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|pattern| pattern.raw.as_str())
    }

    /// Determines whether a root-relative path is excluded by this set.
    ///
    /// `rel_path` is normalized to `/`-separated form before matching, so
    /// callers may pass host-native separators. Pure function of its
    /// inputs; performs no I/O.
    #[must_use]
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        let rel = rel_path.replace('\\', "/");
        let base_name = rel.rsplit('/').next().unwrap_or(rel.as_str());

        self.patterns
            .iter()
            .any(|pattern| pattern.matches(&rel, base_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(patterns: &[&str]) -> PatternSet {
        PatternSet::new(patterns.iter().map(ToString::to_string).collect())
    }

    #[rstest]
    #[case("venv", "venv", true)]
    #[case("venv", "src/venv", true)]
    #[case("venv", "venv2", false)]
    #[case("*.log", "app.log", true)]
    #[case("*.log", "logs/app.log", true)]
    #[case("*.log", "app.log.bak", false)]
    #[case("build?", "build1", true)]
    #[case("build?", "build12", false)]
    #[case("[ab].txt", "a.txt", true)]
    #[case("[ab].txt", "c.txt", false)]
    fn test_unrooted_patterns(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(set(&[pattern]).is_ignored(path), expected);
    }

    #[rstest]
    #[case("/build", "build", true)]
    #[case("/build", "src/build", false)]
    #[case("/src/*.py", "src/main.py", true)]
    #[case("/src/*.py", "lib/src/main.py", false)]
    // `*` is not path-separator aware, matching fnmatch semantics
    #[case("/src*", "src/main.py", true)]
    fn test_rooted_patterns(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(set(&[pattern]).is_ignored(path), expected);
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let patterns = set(&["node_modules/"]);
        assert!(patterns.is_ignored("node_modules"));
        assert!(patterns.is_ignored("pkg/node_modules"));
    }

    #[test]
    fn test_backslash_separators_normalized() {
        let patterns = set(&["src\\generated"]);
        assert!(patterns.is_ignored("src/generated"));
        assert!(patterns.is_ignored("src\\generated"));
    }

    #[test]
    fn test_case_sensitive() {
        let patterns = set(&["Build"]);
        assert!(patterns.is_ignored("Build"));
        assert!(!patterns.is_ignored("build"));
    }

    #[test]
    fn test_empty_pattern_never_matches_real_entry() {
        let patterns = set(&[""]);
        assert!(!patterns.is_ignored("a"));
        assert!(!patterns.is_ignored("a/b"));
    }

    #[test]
    fn test_invalid_glob_falls_back_to_literal() {
        let patterns = set(&["[unclosed"]);
        assert!(patterns.is_ignored("[unclosed"));
        assert!(!patterns.is_ignored("unclosed"));
    }

    #[test]
    fn test_first_match_wins_across_set() {
        let patterns = set(&["*.tmp", "cache", "/dist"]);
        assert!(patterns.is_ignored("a.tmp"));
        assert!(patterns.is_ignored("deep/cache"));
        assert!(patterns.is_ignored("dist"));
        assert!(!patterns.is_ignored("src/dist"));
        assert!(!patterns.is_ignored("src/main.py"));
    }

    #[test]
    fn test_empty_set_ignores_nothing() {
        let patterns = set(&[]);
        assert!(patterns.is_empty());
        assert!(!patterns.is_ignored("anything"));
    }

    #[test]
    fn test_order_preserved_for_diagnostics() {
        let patterns = set(&["b", "a", "c"]);
        let raw: Vec<_> = patterns.iter_raw().collect();
        assert_eq!(raw, vec!["b", "a", "c"]);
        assert_eq!(patterns.len(), 3);
    }
}
