//! Property tests for strops-search

use proptest::prelude::*;
use strops_search::{contains, ends_with, ends_with_at, starts_with, starts_with_at};

proptest! {
    /// The empty needle matches any haystack.
    #[test]
    fn prop_empty_needle_always_contained(s in "\\PC*") {
        prop_assert!(contains(&s, ""));
    }

    /// Every string starts and ends with itself.
    #[test]
    fn prop_self_match(s in "\\PC*") {
        prop_assert!(starts_with(&s, &s));
        prop_assert!(ends_with(&s, &s));
    }

    /// The anchored variants agree with the plain forms at their default
    /// positions.
    #[test]
    fn prop_anchored_defaults_agree(s in "\\PC*", needle in "\\PC{0,8}") {
        prop_assert_eq!(starts_with(&s, &needle), starts_with_at(&s, &needle, 0));
        prop_assert_eq!(ends_with(&s, &needle), ends_with_at(&s, &needle, s.len()));
    }

    /// A successful anchored start match implies containment.
    #[test]
    fn prop_start_match_implies_contains(s in "\\PC*", needle in "\\PC{1,8}", pos in 0usize..64) {
        if starts_with_at(&s, &needle, pos) {
            prop_assert!(contains(&s, &needle));
        }
    }
}
