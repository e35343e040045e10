//! Property-based tests for SimpleSet laws.
//!
//! These tests verify that SimpleSet satisfies the properties expected of
//! a set container, across arbitrary inputs.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use simpleset::set::{Set, SimpleSet};

fn distinct_count(values: &[i32]) -> usize {
    values.iter().collect::<HashSet<_>>().len()
}

// =============================================================================
// Construction Law
// Description: Building a set from a sequence counts its distinct values
// =============================================================================

proptest! {
    #[test]
    fn prop_len_equals_distinct_count(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let set: SimpleSet<i32> = values.iter().copied().collect();

        prop_assert_eq!(set.len(), distinct_count(&values));
    }
}

// =============================================================================
// Add Idempotence Law
// Description: Adding a value twice is the same as adding it once
// =============================================================================

proptest! {
    #[test]
    fn prop_add_idempotence_law(
        values in prop::collection::vec(any::<i32>(), 0..50),
        value: i32
    ) {
        let mut once: SimpleSet<i32> = values.iter().copied().collect();
        once.add([value]);
        let mut twice = once.clone();
        twice.add([value]);

        prop_assert_eq!(twice, once);
    }
}

// =============================================================================
// Add-Remove-Contains Law
// Description: Contains reflects the last add or remove of each value
// =============================================================================

proptest! {
    /// The last add or remove of a value decides whether it is contained.
    #[test]
    fn prop_contains_follows_last_mutation(
        operations in prop::collection::vec((any::<bool>(), 0..16i32), 0..100),
        probe in 0..16i32
    ) {
        let mut set: SimpleSet<i32> = SimpleSet::uninitialized();
        let mut expected = false;
        for (is_add, value) in operations {
            if is_add {
                set.add([value]);
            } else {
                set.remove([value]);
            }
            if value == probe {
                expected = is_add;
            }
        }

        prop_assert_eq!(set.contains(&probe), expected);
    }
}

// =============================================================================
// Equal Symmetry Law
// Description: A.equal(B) == B.equal(A)
// =============================================================================

proptest! {
    #[test]
    fn prop_equal_symmetry_law(
        values_a in prop::collection::vec(0..20i32, 0..20),
        values_b in prop::collection::vec(0..20i32, 0..20)
    ) {
        let set_a: SimpleSet<i32> = values_a.into_iter().collect();
        let set_b: SimpleSet<i32> = values_b.into_iter().collect();

        prop_assert_eq!(set_a.equal(&set_b), set_b.equal(&set_a));
    }
}

proptest! {
    #[test]
    fn prop_equal_ignores_insertion_order(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let forward: SimpleSet<i32> = values.iter().copied().collect();
        let backward: SimpleSet<i32> = values.iter().rev().copied().collect();

        prop_assert!(forward.equal(&backward));
    }
}

// =============================================================================
// Clone Laws
// Description: A clone equals its source and is independent of it
// =============================================================================

proptest! {
    #[test]
    fn prop_clone_equal_law(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: SimpleSet<i32> = values.into_iter().collect();

        prop_assert!(set.clone_set().equal(&set));
    }
}

proptest! {
    #[test]
    fn prop_clone_independence_law(
        values in prop::collection::vec(any::<i32>(), 1..50),
        extra: i32
    ) {
        let set: SimpleSet<i32> = values.iter().copied().collect();
        let before = set.clone();

        let mut cloned = set.clone_set();
        cloned.add([extra]);
        cloned.remove([values[0]]);

        prop_assert_eq!(set, before);
    }
}

// =============================================================================
// Filter Laws
// Description: filter(true) == clone, filter(false) is empty, filter(p) keeps exactly p
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_always_true_law(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: SimpleSet<i32> = values.into_iter().collect();

        prop_assert!(set.filter(|_| true).equal(&set.clone_set()));
    }
}

proptest! {
    #[test]
    fn prop_filter_always_false_law(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: SimpleSet<i32> = values.into_iter().collect();
        let filtered = set.filter(|_| false);

        prop_assert!(filtered.is_empty());
        prop_assert!(filtered.is_initialized());
    }
}

proptest! {
    #[test]
    fn prop_filter_keeps_exactly_matching(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: SimpleSet<i32> = values.iter().copied().collect();
        let even = set.filter(|value| value % 2 == 0);

        for value in &values {
            prop_assert_eq!(even.contains(value), value % 2 == 0);
        }
        prop_assert!(set.contains_all(&even));
    }
}

// =============================================================================
// Empty Set Laws
// Description: contains_all(empty) is true, contains_any(empty) is false
// =============================================================================

proptest! {
    #[test]
    fn prop_empty_other_law(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: SimpleSet<i32> = values.into_iter().collect();
        let empty: SimpleSet<i32> = SimpleSet::new();
        let uninitialized: SimpleSet<i32> = SimpleSet::uninitialized();

        prop_assert!(set.contains_all(&empty));
        prop_assert!(!set.contains_any(&empty));
        prop_assert!(set.contains_all(&uninitialized));
        prop_assert!(!set.contains_any(&uninitialized));
    }
}

// =============================================================================
// Bulk Mutation Laws
// Description: add_set/remove_set agree with a model set
// =============================================================================

proptest! {
    #[test]
    fn prop_add_set_matches_union(
        values_a in prop::collection::vec(0..30i32, 0..30),
        values_b in prop::collection::vec(0..30i32, 0..30)
    ) {
        let mut set: SimpleSet<i32> = values_a.iter().copied().collect();
        let other: SimpleSet<i32> = values_b.iter().copied().collect();
        set.add_set(&other);

        let model: BTreeSet<i32> = values_a.into_iter().chain(values_b).collect();
        prop_assert!(set.equal(&model));
    }
}

proptest! {
    #[test]
    fn prop_remove_set_matches_difference(
        values_a in prop::collection::vec(0..30i32, 0..30),
        values_b in prop::collection::vec(0..30i32, 0..30)
    ) {
        let mut set: SimpleSet<i32> = values_a.iter().copied().collect();
        let other: BTreeSet<i32> = values_b.into_iter().collect();
        set.remove_set(&other);

        let model: BTreeSet<i32> = values_a
            .into_iter()
            .filter(|value| !other.contains(value))
            .collect();
        prop_assert!(set.equal(&model));
        prop_assert!(!set.contains_any(&other));
    }
}

// =============================================================================
// Values Law
// Description: values() lists each distinct value exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_values_are_distinct(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let set: SimpleSet<i32> = values.iter().copied().collect();
        let listed = set.values().unwrap_or_default();

        prop_assert_eq!(listed.len(), distinct_count(&values));
        prop_assert_eq!(
            listed.into_iter().collect::<BTreeSet<_>>(),
            values.into_iter().collect::<BTreeSet<_>>()
        );
    }
}
