//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - segment-aligned prefix matching
//! - absent vs. empty list semantics
//! - module/path translation

use crate::module_path::{module_to_path, path_to_module};
use crate::prefix::PrefixSet;
use camino::Utf8Path;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for a single module segment.
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,7}").unwrap()
}

/// Strategy for dotted module paths with 1 to 4 segments.
fn arb_module() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..=4).prop_map(|segs| segs.join("."))
}

/// Reference definition: `c == p` or `c` starts with `p.`.
fn reference_match(prefix: &str, candidate: &str) -> bool {
    candidate == prefix || candidate.starts_with(&format!("{prefix}."))
}

proptest! {
    #[test]
    fn single_prefix_matches_reference(prefix in arb_module(), candidate in arb_module()) {
        let set = PrefixSet::from_entries([prefix.as_str()]);
        prop_assert_eq!(set.contains(&candidate), reference_match(&prefix, &candidate));
    }

    #[test]
    fn descendants_always_match(prefix in arb_module(), tail in arb_module()) {
        let set = PrefixSet::from_entries([prefix.as_str()]);
        let descendant = format!("{prefix}.{tail}");
        prop_assert!(set.contains(&prefix));
        prop_assert!(set.contains(&descendant));
    }

    #[test]
    fn string_extension_without_separator_never_matches(prefix in arb_module(), extra in arb_segment()) {
        let set = PrefixSet::from_entries([prefix.as_str()]);
        let sibling = format!("{prefix}{extra}");
        prop_assert!(!set.contains(&sibling));
    }

    #[test]
    fn many_prefixes_match_if_any_does(prefixes in prop::collection::vec(arb_module(), 0..6), candidate in arb_module()) {
        let set = PrefixSet::from_entries(prefixes.iter());
        let expected = prefixes.iter().any(|p| reference_match(p, &candidate));
        prop_assert_eq!(set.contains(&candidate), expected);
    }

    #[test]
    fn unrestricted_matches_any_string(candidate in ".*") {
        prop_assert!(PrefixSet::allow_list(None).contains(&candidate));
        prop_assert!(!PrefixSet::exemption_list(None).contains(&candidate));
        prop_assert!(!PrefixSet::allow_list(Some(Vec::new())).contains(&candidate));
    }

    #[test]
    fn module_path_translation_roundtrips(module in arb_module()) {
        // A trailing `py` segment reads back as a source suffix.
        prop_assume!(!module.ends_with(".py"));
        let root = Utf8Path::new("/app");
        let path = module_to_path(&module, root);
        prop_assert_eq!(path_to_module(&path, root), Some(module));
    }
}
