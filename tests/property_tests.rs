use projtree::pattern::PatternSet;
use proptest::prelude::*;

/// Path segments that contain no glob metacharacters or separators.
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.]{1,12}"
}

proptest! {
    #[test]
    fn test_matching_is_deterministic(
        patterns in prop::collection::vec("[a-zA-Z0-9_.*?/]{0,16}", 0..8),
        path in "[a-zA-Z0-9_./]{0,32}",
    ) {
        // Invariant: is_ignored is a pure function of its inputs
        let set = PatternSet::new(patterns.clone());
        let first = set.is_ignored(&path);
        let second = set.is_ignored(&path);
        prop_assert_eq!(first, second);

        // A freshly compiled set behaves identically
        let rebuilt = PatternSet::new(patterns);
        prop_assert_eq!(rebuilt.is_ignored(&path), first);
    }

    #[test]
    fn test_rooted_pattern_only_matches_top_level(
        name in segment(),
        prefix in segment(),
    ) {
        let set = PatternSet::new(vec![format!("/{name}")]);
        prop_assert!(set.is_ignored(&name));
        let nested = format!("{prefix}/{name}");
        prop_assert!(!set.is_ignored(&nested));
    }

    #[test]
    fn test_unrooted_pattern_matches_base_name_at_any_depth(
        name in segment(),
        parents in prop::collection::vec(segment(), 0..4),
    ) {
        let set = PatternSet::new(vec![name.clone()]);
        let mut path = parents.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&name);
        prop_assert!(set.is_ignored(&path));
    }

    #[test]
    fn test_star_matches_every_real_entry(path in "[a-zA-Z0-9_./]{1,32}") {
        let set = PatternSet::new(vec!["*".to_string()]);
        prop_assert!(set.is_ignored(&path));
    }

    #[test]
    fn test_trailing_slash_is_equivalent_to_bare_pattern(
        name in segment(),
        path in "[a-zA-Z0-9_./]{1,24}",
    ) {
        let bare = PatternSet::new(vec![name.clone()]);
        let slashed = PatternSet::new(vec![format!("{name}/")]);
        prop_assert_eq!(bare.is_ignored(&path), slashed.is_ignored(&path));
    }
}
