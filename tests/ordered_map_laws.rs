//! Property-based tests for OrderedMap.
//!
//! Checks the ordering, traversal and set algebra laws against a plain
//! association list model built from the same generated entries.

use fpmap::OrderedMap;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-h]{1,2}"
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i8)>> {
    prop::collection::vec((arbitrary_key(), any::<i8>()), 0..40)
}

/// First-occurrence key order with last-write values.
fn model(entries: &[(String, i8)]) -> Vec<(String, i8)> {
    let mut result: Vec<(String, i8)> = Vec::new();
    for (key, value) in entries {
        match result.iter_mut().find(|(existing, _)| existing == key) {
            Some(slot) => slot.1 = *value,
            None => result.push((key.clone(), *value)),
        }
    }
    result
}

fn contents(map: &OrderedMap<String, i8>) -> Vec<(String, i8)> {
    map.iter().map(|(key, value)| (key.clone(), *value)).collect()
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_iteration_matches_first_insertion_order(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i8> = entries.iter().cloned().collect();
        prop_assert_eq!(contents(&map), model(&entries));
    }

    #[test]
    fn prop_len_counts_distinct_keys(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i8> = entries.iter().cloned().collect();
        prop_assert_eq!(map.len(), model(&entries).len());
        prop_assert_eq!(map.keys().len(), map.len());
    }

    #[test]
    fn prop_remove_keeps_relative_order(entries in arbitrary_entries(), key in arbitrary_key()) {
        let mut map: OrderedMap<String, i8> = entries.iter().cloned().collect();
        map.remove(&key);

        let expected: Vec<_> = model(&entries)
            .into_iter()
            .filter(|(existing, _)| *existing != key)
            .collect();
        prop_assert_eq!(contents(&map), expected);
        for (existing, value) in &map {
            prop_assert_eq!(map.get(existing), Some(value));
        }
    }
}

// =============================================================================
// Traversal Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_transform_preserves_keys(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i8> = entries.into_iter().collect();
        let widened = map.transform(|value, _, _| i16::from(*value) * 2);

        prop_assert_eq!(widened.len(), map.len());
        let keys: Vec<_> = widened.keys().iter().collect();
        let original: Vec<_> = map.keys().iter().collect();
        prop_assert_eq!(keys, original);
    }

    #[test]
    fn prop_select_is_sound_and_complete(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i8> = entries.into_iter().collect();
        let selected = map.select(|value, _, _| *value >= 0);

        prop_assert!(selected.all(|value, _, _| *value >= 0));
        let expected: Vec<_> = contents(&map)
            .into_iter()
            .filter(|(_, value)| *value >= 0)
            .collect();
        prop_assert_eq!(contents(&selected), expected);
    }

    #[test]
    fn prop_select_to_vec_agrees_with_select(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i8> = entries.into_iter().collect();
        let pairs: Vec<_> = map
            .select_to_vec(|value, _, _| value % 2 == 0)
            .into_iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect();
        prop_assert_eq!(pairs, contents(&map.select(|value, _, _| value % 2 == 0)));
    }

    #[test]
    fn prop_fold_with_identity_step_returns_init(entries in arbitrary_entries(), init in any::<i64>()) {
        let map: OrderedMap<String, i8> = entries.into_iter().collect();
        prop_assert_eq!(map.fold(init, |accumulator, _, _, _| accumulator), init);
    }

    #[test]
    fn prop_fold_agrees_with_iterator_sum(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i8> = entries.into_iter().collect();
        let folded = map.fold(0_i64, |sum, value, _, _| sum + i64::from(*value));
        let summed: i64 = map.values().iter().map(|value| i64::from(*value)).sum();
        prop_assert_eq!(folded, summed);
    }

    #[test]
    fn prop_all_is_dual_of_any(entries in arbitrary_entries(), threshold in any::<i8>()) {
        let map: OrderedMap<String, i8> = entries.into_iter().collect();
        let all = map.all(|value, _, _| *value > threshold);
        let any_not = map.any(|value, _, _| *value <= threshold);
        prop_assert_eq!(all, !any_not);
    }
}

// =============================================================================
// Set Algebra Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_union_is_idempotent(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i8> = entries.into_iter().collect();
        prop_assert_eq!(contents(&map.union(&map)), contents(&map));
    }

    #[test]
    fn prop_union_is_superset_of_other(left in arbitrary_entries(), right in arbitrary_entries()) {
        let left: OrderedMap<String, i8> = left.into_iter().collect();
        let right: OrderedMap<String, i8> = right.into_iter().collect();
        prop_assert!(left.union(&right).is_superset_of(&right));
    }

    #[test]
    fn prop_intersection_is_subset_of_both(left in arbitrary_entries(), right in arbitrary_entries()) {
        let left: OrderedMap<String, i8> = left.into_iter().collect();
        let right: OrderedMap<String, i8> = right.into_iter().collect();
        let common = left.intersection(&right);
        prop_assert!(common.is_subset_of(&left));
        prop_assert!(common.is_subset_of(&right));
    }

    #[test]
    fn prop_difference_and_intersection_partition_self(
        left in arbitrary_entries(),
        right in arbitrary_entries()
    ) {
        let left: OrderedMap<String, i8> = left.into_iter().collect();
        let right: OrderedMap<String, i8> = right.into_iter().collect();
        let remaining = left.difference(&right);
        let common = left.intersection(&right);

        prop_assert_eq!(remaining.len() + common.len(), left.len());
        prop_assert!(remaining.intersection(&common).is_empty());
        prop_assert_eq!(remaining.union(&common), left);
    }

    #[test]
    fn prop_difference_with_self_is_empty(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i8> = entries.into_iter().collect();
        prop_assert!(map.difference(&map).is_empty());
        prop_assert!(map.symmetric_difference(&map).is_empty());
        prop_assert!(map.is_superset_of(&map));
    }
}

// =============================================================================
// Independence
// =============================================================================

proptest! {
    #[test]
    fn prop_clone_is_independent(entries in arbitrary_entries(), key in arbitrary_key(), value in any::<i8>()) {
        let original: OrderedMap<String, i8> = entries.into_iter().collect();
        let snapshot = contents(&original);

        let mut copy = original.clone();
        copy.insert(key.clone(), value);
        copy.remove(&key);

        prop_assert_eq!(contents(&original), snapshot);
    }
}
