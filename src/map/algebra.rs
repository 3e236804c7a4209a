//! Set algebra over [`OrderedMap`] entries.
//!
//! Two entries match when the other map holds the same key with an equal
//! value (`PartialEq`). Presence is decided by lookup, so values such as
//! `false`, `0` or `""` match like any other value.

use std::hash::{BuildHasher, Hash};

use log::trace;

use super::OrderedMap;

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    /// Returns `true` if `self` holds every entry of `other` with an equal
    /// value. An empty `other` is always a subset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let all = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert!(all.is_superset_of(&OrderedMap::from([("b", 2)])));
    /// assert!(!all.is_superset_of(&OrderedMap::from([("b", 20)])));
    /// ```
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other
            .iter()
            .all(|(key, value)| self.get(key) == Some(value))
    }

    /// Returns `true` if `other` holds every entry of `self` with an equal
    /// value.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.is_superset_of(self)
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone + PartialEq,
    S: BuildHasher + Clone,
{
    /// Returns `self` with every entry of `other` inserted on top of it.
    ///
    /// Values from `other` win on shared keys; shared keys keep their
    /// position from `self` and new keys follow in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let left = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let right = OrderedMap::from([("c", 3), ("a", 10)]);
    ///
    /// let union: Vec<_> = left.union(&right).into_iter().collect();
    /// assert_eq!(union, [("a", 10), ("b", 2), ("c", 3)]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (key, value) in other {
            result.insert(key.clone(), value.clone());
        }
        trace!(
            "union of {} and {} entries yields {}",
            self.len(),
            other.len(),
            result.len()
        );
        result
    }

    /// Returns the entries of `other` that `self` also holds with an equal
    /// value, in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let left = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let right = OrderedMap::from([("c", 3), ("b", 20), ("a", 1)]);
    ///
    /// let common: Vec<_> = left.intersection(&right).into_iter().collect();
    /// assert_eq!(common, [("c", 3), ("a", 1)]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result =
            Self::with_capacity_and_hasher(self.len().min(other.len()), self.hash_builder.clone());
        for (key, value) in other {
            if self.get(key) == Some(value) {
                result.insert(key.clone(), value.clone());
            }
        }
        trace!(
            "intersection of {} and {} entries yields {}",
            self.len(),
            other.len(),
            result.len()
        );
        result
    }

    /// Returns the entries that only one side holds.
    ///
    /// Starting from `self`, each entry of `other` either cancels an equal
    /// entry of `self` or is written into the result. A key present on both
    /// sides with different values therefore survives with `other`'s value,
    /// at `self`'s position. Keys only in `other` follow in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let left = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let right = OrderedMap::from([("d", 4), ("b", 2), ("c", 30)]);
    ///
    /// let only_one: Vec<_> = left.symmetric_difference(&right).into_iter().collect();
    /// assert_eq!(only_one, [("a", 1), ("c", 30), ("d", 4)]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result =
            Self::with_capacity_and_hasher(self.len() + other.len(), self.hash_builder.clone());
        for bucket in &self.buckets {
            match other.get(&bucket.key) {
                Some(theirs) if *theirs == bucket.value => {}
                Some(theirs) => result.push_unique(bucket.hash, bucket.key.clone(), theirs.clone()),
                None => result.push_unique(bucket.hash, bucket.key.clone(), bucket.value.clone()),
            }
        }
        for (key, value) in other {
            if !self.contains_key(key) {
                result.insert(key.clone(), value.clone());
            }
        }
        trace!(
            "symmetric difference of {} and {} entries yields {}",
            self.len(),
            other.len(),
            result.len()
        );
        result
    }

    /// Returns `self` without the entries that `other` holds with an equal
    /// value. Entries found only in `other` are not added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let left = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let right = OrderedMap::from([("b", 2), ("c", 30), ("d", 4)]);
    ///
    /// let remaining: Vec<_> = left.difference(&right).into_iter().collect();
    /// assert_eq!(remaining, [("a", 1), ("c", 3)]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let result = self.select(|value, key, _| other.get(key) != Some(value));
        trace!(
            "difference of {} and {} entries yields {}",
            self.len(),
            other.len(),
            result.len()
        );
        result
    }
}

/// Generates `<operation>_of(first, second)` associated functions that call
/// `first.<operation>(second)`.
macro_rules! static_set_operations {
    ($($operation:ident),* $(,)?) => {
        paste::paste! {
            impl<K, V, S> OrderedMap<K, V, S>
            where
                K: Clone + Hash + Eq,
                V: Clone + PartialEq,
                S: BuildHasher + Clone,
            {
                $(
                    #[doc = concat!(
                        "Associated form of [`", stringify!($operation), "`](Self::",
                        stringify!($operation), "): same result as `first.",
                        stringify!($operation), "(second)`."
                    )]
                    #[must_use]
                    pub fn [<$operation _of>](first: &Self, second: &Self) -> Self {
                        first.$operation(second)
                    }
                )*
            }
        }
    };
}

static_set_operations!(union, intersection, symmetric_difference, difference);

#[cfg(test)]
mod tests {
    use crate::OrderedMap;
    use rstest::rstest;

    fn entries<K: Copy, V: Copy, S>(map: &OrderedMap<K, V, S>) -> Vec<(K, V)> {
        map.iter().map(|(key, value)| (*key, *value)).collect()
    }

    #[rstest]
    fn test_union_with_self_is_identity() {
        let map = OrderedMap::from([("a", 1), ("b", 2)]);
        assert_eq!(entries(&map.union(&map)), entries(&map));
    }

    #[rstest]
    fn test_union_appends_new_keys_in_other_order() {
        let left = OrderedMap::from([("x", 0)]);
        let right = OrderedMap::from([("z", 2), ("y", 1), ("x", 9)]);
        assert_eq!(entries(&left.union(&right)), [("x", 9), ("z", 2), ("y", 1)]);
    }

    #[rstest]
    fn test_intersection_order_follows_other() {
        let left = OrderedMap::from([("a", 1), ("b", 2)]);
        let right = OrderedMap::from([("b", 2), ("a", 1)]);
        assert_eq!(entries(&left.intersection(&right)), [("b", 2), ("a", 1)]);
        assert_eq!(entries(&right.intersection(&left)), [("a", 1), ("b", 2)]);
    }

    #[rstest]
    fn test_intersection_keeps_false_values() {
        let left = OrderedMap::from([("X", false)]);
        let right = OrderedMap::from([("X", false)]);
        assert_eq!(entries(&left.intersection(&right)), [("X", false)]);
    }

    #[rstest]
    #[case(0)]
    #[case(i64::MIN)]
    fn test_zero_like_values_match(#[case] value: i64) {
        let left = OrderedMap::from([("k", value), ("other", 5)]);
        let right = OrderedMap::from([("k", value)]);
        assert!(left.is_superset_of(&right));
        assert_eq!(entries(&left.difference(&right)), [("other", 5)]);
        assert_eq!(entries(&left.symmetric_difference(&right)), [("other", 5)]);
    }

    #[rstest]
    fn test_empty_string_values_match() {
        let left = OrderedMap::from([("k", "")]);
        let right = OrderedMap::from([("k", "")]);
        assert_eq!(entries(&left.intersection(&right)), [("k", "")]);
    }

    #[rstest]
    fn test_superset_of_empty_is_true() {
        let map = OrderedMap::from([("a", 1)]);
        let empty = OrderedMap::new();
        assert!(map.is_superset_of(&empty));
        assert!(empty.is_superset_of(&empty));
        assert!(!empty.is_superset_of(&map));
        assert!(empty.is_subset_of(&map));
    }

    #[rstest]
    fn test_superset_requires_equal_values() {
        let map = OrderedMap::from([("a", 1), ("b", 2)]);
        assert!(!map.is_superset_of(&OrderedMap::from([("a", 2)])));
        assert!(!map.is_superset_of(&OrderedMap::from([("c", 1)])));
    }

    #[rstest]
    fn test_difference_ignores_keys_unique_to_other() {
        let left = OrderedMap::from([("a", 1)]);
        let right = OrderedMap::from([("b", 2)]);
        assert_eq!(entries(&left.difference(&right)), [("a", 1)]);
    }

    #[rstest]
    fn test_symmetric_difference_same_key_different_value_takes_other() {
        let left = OrderedMap::from([("a", 1), ("b", 2)]);
        let right = OrderedMap::from([("b", 3)]);
        assert_eq!(entries(&left.symmetric_difference(&right)), [("a", 1), ("b", 3)]);
    }

    #[rstest]
    fn test_operations_do_not_mutate_inputs() {
        let left = OrderedMap::from([("a", 1), ("b", 2)]);
        let right = OrderedMap::from([("b", 2), ("c", 3)]);
        let _ = left.union(&right);
        let _ = left.intersection(&right);
        let _ = left.difference(&right);
        let _ = left.symmetric_difference(&right);
        assert_eq!(entries(&left), [("a", 1), ("b", 2)]);
        assert_eq!(entries(&right), [("b", 2), ("c", 3)]);
    }

    #[rstest]
    fn test_associated_forms_match_methods() {
        let left = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let right = OrderedMap::from([("c", 3), ("b", 5), ("d", 4)]);

        assert_eq!(entries(&OrderedMap::union_of(&left, &right)), entries(&left.union(&right)));
        assert_eq!(
            entries(&OrderedMap::intersection_of(&left, &right)),
            entries(&left.intersection(&right))
        );
        assert_eq!(
            entries(&OrderedMap::difference_of(&left, &right)),
            entries(&left.difference(&right))
        );
        assert_eq!(
            entries(&OrderedMap::symmetric_difference_of(&left, &right)),
            entries(&left.symmetric_difference(&right))
        );
    }

    #[rstest]
    fn test_results_support_lookup_after_mixed_hashing() {
        let left = OrderedMap::from([("a", 1), ("b", 2)]);
        let right = OrderedMap::from([("c", 3), ("b", 20)]);
        let mut union = left.union(&right);
        assert_eq!(union.get("c"), Some(&3));
        assert_eq!(union.remove("b"), Some(20));

        let symmetric = left.symmetric_difference(&right);
        assert_eq!(symmetric.get("b"), Some(&20));
        assert_eq!(symmetric.get("c"), Some(&3));
    }
}
