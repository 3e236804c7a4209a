//! Insertion-ordered hash map.
//!
//! This module provides [`OrderedMap`], a hash map whose iteration order is
//! the order in which keys were first inserted.
//!
//! # Overview
//!
//! Entries live in a dense vector of buckets; a [`hashbrown::HashTable`]
//! maps each key's hash to its bucket position.
//!
//! - O(1) average `get`, `contains_key`, `insert`
//! - O(n) `remove` (later entries shift down to keep the order dense)
//! - O(1) `len` and `is_empty`
//!
//! Order rules:
//!
//! - inserting a new key appends it
//! - inserting an existing key replaces the value and keeps the position
//! - removing a key and inserting it again appends it
//!
//! # Examples
//!
//! ```rust
//! use fpmap::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//! map.insert("b", 20);
//!
//! let keys: Vec<_> = map.keys().iter().copied().collect();
//! assert_eq!(keys, ["b", "a"]);
//! assert_eq!(map.get("b"), Some(&20));
//!
//! map.remove("b");
//! map.insert("b", 200);
//! let keys: Vec<_> = map.keys().iter().copied().collect();
//! assert_eq!(keys, ["a", "b"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;
use std::ops::Index;

use hashbrown::HashTable;

use crate::hasher::DefaultHashBuilder;
use crate::view::{KeysView, ValuesView, View};

mod algebra;
mod iter;
#[cfg(feature = "serde")]
mod serialization;
mod traverse;

pub use iter::{IntoIter, Iter, IterMut};

// =============================================================================
// Storage
// =============================================================================

/// A stored entry together with the hash of its key.
#[derive(Clone)]
struct Bucket<K, V> {
    hash: u64,
    key: K,
    value: V,
}

impl<K, V> Bucket<K, V> {
    #[inline]
    const fn refs(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    fn ref_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    #[inline]
    fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Builds the equality probe for `HashTable` lookups: a slot matches when the
/// bucket it points at holds a key equal to `key`.
fn equivalent<'a, K, V, Q>(key: &'a Q, buckets: &'a [Bucket<K, V>]) -> impl Fn(&usize) -> bool + 'a
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    move |&index| {
        let stored: &Q = buckets[index].key.borrow();
        stored == key
    }
}

// =============================================================================
// OrderedMap Definition
// =============================================================================

/// A hash map that iterates in insertion order.
///
/// Besides the usual map operations, `OrderedMap` offers functional
/// traversal (`transform`, `select`, `fold`, `all`, `any`), set algebra
/// (`union`, `intersection`, `difference`, `symmetric_difference`,
/// `is_superset_of`) and decorated [`keys`](Self::keys) and
/// [`values`](Self::values) views.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `get` / `contains_key` | O(1) average      |
/// | `insert`               | O(1) amortized    |
/// | `remove`               | O(n)              |
/// | `len` / `is_empty`     | O(1)              |
/// | `transform` / `select` | O(n)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(m)              |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
///
/// # Equality
///
/// Two maps are equal when they hold the same keys with equal values,
/// regardless of order. Compare `iter()` sequences to check order too.
///
/// # Examples
///
/// ```rust
/// use fpmap::OrderedMap;
///
/// let map: OrderedMap<&str, i32> = [("one", 1), ("two", 2)].into_iter().collect();
/// assert_eq!(map["one"], 1);
/// assert_eq!(map.get("three"), None);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Bucket<K, V>>,
    indices: HashTable<usize>,
    hash_builder: S,
}

static_assertions::assert_impl_all!(OrderedMap<String, i32>: Clone, Send, Sync, Default);
static_assertions::assert_impl_all!(OrderedMap<String, std::rc::Rc<i32>>: Clone);
static_assertions::assert_not_impl_any!(OrderedMap<String, std::rc::Rc<i32>>: Send, Sync);

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map using the [`DefaultHashBuilder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let map: OrderedMap<String, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut map = OrderedMap::with_hasher(RandomState::new());
    /// map.insert(1, "one");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            buckets: Vec::new(),
            indices: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty map with room for `capacity` entries that hashes
    /// keys with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            buckets: Vec::with_capacity(capacity),
            indices: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Returns the number of entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the hash builder of this map.
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.indices.clear();
    }

    /// Returns the first entry in iteration order.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.buckets.first().map(Bucket::refs)
    }

    /// Returns the last entry in iteration order.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.buckets.last().map(Bucket::refs)
    }

    /// Returns an iterator over the entries in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("x", 1), ("y", 2)]);
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&"x", &1), (&"y", &2)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.buckets.iter())
    }

    /// Returns an iterator over the entries with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.buckets.iter_mut())
    }

    /// Returns a view over the keys in insertion order.
    ///
    /// Every call builds a new view; the view reads the map each time one of
    /// its operations runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("A", true), ("B", false), ("C", true)]);
    /// assert_eq!(map.keys().filter_to_vec(|key| *key != "B"), [&"A", &"C"]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> KeysView<'_, K, V, S> {
        View::new(self, |key, _| key)
    }

    /// Returns a view over the values in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("A", 1), ("B", 2)]);
    /// assert_eq!(map.values().fold(0, |sum, value| sum + value), 3);
    /// ```
    #[must_use]
    pub fn values(&self) -> ValuesView<'_, K, V, S> {
        View::new(self, |_, value| value)
    }

    /// Calls `function` with each value, its key and the map, in order.
    pub fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for bucket in &self.buckets {
            function(&bucket.value, &bucket.key, self);
        }
    }

    /// Appends an entry whose key is known to be absent, reusing a hash
    /// computed by a hash builder equivalent to this map's.
    fn push_unique(&mut self, hash: u64, key: K, value: V) {
        let index = self.buckets.len();
        self.buckets.push(Bucket { hash, key, value });
        let buckets = &self.buckets;
        self.indices
            .insert_unique(hash, index, |&slot| buckets[slot].hash);
    }
}

// =============================================================================
// Keyed Operations
// =============================================================================

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn hash_of<Q: Hash + ?Sized>(&self, key: &Q) -> u64 {
        self.hash_builder.hash_one(key)
    }

    fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.buckets.is_empty() {
            return None;
        }
        let hash = self.hash_of(key);
        self.indices
            .find(hash, equivalent(key, &self.buckets))
            .copied()
    }

    /// Returns a reference to the value stored for `key`, or `None` when the
    /// key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("flag".to_string(), false)]);
    /// assert_eq!(map.get("flag"), Some(&false));
    /// assert_eq!(map.get("other"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).map(|index| &self.buckets[index].value)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).map(|index| self.buckets[index].refs())
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key)?;
        Some(&mut self.buckets[index].value)
    }

    /// Returns `true` if the map holds `key`.
    ///
    /// This is a presence test; the stored value plays no part in it.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).is_some()
    }

    /// Inserts `value` for `key` and returns the value it replaced.
    ///
    /// A new key is appended to the iteration order. An existing key keeps
    /// its position and only its value changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// map.insert("b", 2);
    /// assert_eq!(map.insert("a", 10), Some(1));
    ///
    /// let entries: Vec<_> = map.into_iter().collect();
    /// assert_eq!(entries, [("a", 10), ("b", 2)]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_of(&key);
        let existing = self
            .indices
            .find(hash, equivalent(&key, &self.buckets))
            .copied();
        match existing {
            Some(index) => Some(mem::replace(&mut self.buckets[index].value, value)),
            None => {
                self.push_unique(hash, key, value);
                None
            }
        }
    }

    /// Removes `key` and returns its value.
    ///
    /// Entries after the removed one keep their relative order.
    ///
    /// # Complexity
    ///
    /// O(n): every later entry shifts down by one position.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` and returns the stored key together with its value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.buckets.is_empty() {
            return None;
        }
        let hash = self.hash_of(key);
        let Self {
            buckets, indices, ..
        } = self;

        let (index, _) = indices
            .find_entry(hash, equivalent(key, &buckets[..]))
            .ok()?
            .remove();
        let removed = buckets.remove(index);

        for (position, bucket) in buckets.iter().enumerate().skip(index) {
            if let Some(slot) = indices.find_mut(bucket.hash, |&slot| slot == position + 1) {
                *slot = position;
            }
        }
        Some(removed.into_pair())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        for (key, value) in iterable {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let iterator = iterable.into_iter();
        let mut map = Self::with_capacity_and_hasher(iterator.size_hint().0, S::default());
        map.extend(iterator);
        map
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, Q, V, S> Index<&Q> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("OrderedMap: key not found")
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets.into_iter())
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for OrderedMap<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for OrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for OrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<K, V, S> crate::typeclass::TypeConstructor for OrderedMap<K, V, S> {
    type Inner = V;
    type WithType<B> = OrderedMap<K, B, S>;
}

#[cfg(feature = "typeclass")]
impl<K, V, S> crate::typeclass::Foldable for OrderedMap<K, V, S> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, (_, value)| function(accumulator, value))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, (_, value)| function(value, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.buckets.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
