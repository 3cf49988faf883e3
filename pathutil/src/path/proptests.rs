//! Long-running property tests for path handling.
//!
//! The per-module suites run a few hundred cases each; this one pushes the
//! normalizer and the ancestor chain much harder and checks the two against
//! each other.

use super::normalize::{normalize_aggressive, normalize_conservative};
use super::{PathRelationship, PathValue, Segment};
use proptest::prelude::*;

fn piece_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => "[a-z0-9_-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(piece_strategy(), 0..16)).prop_map(
        |(absolute, pieces)| {
            let body = pieces.join("/");
            if absolute {
                format!("/{body}")
            } else {
                body
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Conservative output normalizes aggressively to the same place as the input.
    #[test]
    fn conservative_then_aggressive_matches_aggressive(s in raw_path_strategy()) {
        let via_conservative = normalize_aggressive(&normalize_conservative(&s));
        prop_assert_eq!(via_conservative, normalize_aggressive(&s));
    }

    // Conservative never introduces names or reorders them.
    #[test]
    fn conservative_preserves_names(s in raw_path_strategy()) {
        let input = PathValue::new(s.clone());
        let output = PathValue::new(normalize_conservative(&s));
        let names = |p: &PathValue| -> Vec<String> {
            p.segments()
                .filter_map(|seg| match seg {
                    Segment::Name(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect()
        };
        prop_assert_eq!(names(&input), names(&output));
    }

    // Every ancestor of an aggressively normalized absolute path contains it.
    #[test]
    fn ancestors_contain_path(s in raw_path_strategy()) {
        let path = PathValue::new(normalize_aggressive(&format!("/{s}")));
        for ancestor in path.ascend() {
            prop_assert!(PathRelationship::contains(&ancestor, &path));
        }
    }

    // The last element of an absolute descent is the path itself, the first is root.
    #[test]
    fn descend_runs_root_to_path(s in raw_path_strategy()) {
        let path = PathValue::new(normalize_aggressive(&format!("/{s}")));
        let down: Vec<_> = path.descend().collect();
        prop_assert_eq!(down.first().map(PathValue::as_str), Some("/"));
        prop_assert_eq!(down.last(), Some(&path));
    }
}
