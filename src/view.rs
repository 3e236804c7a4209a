//! Decorated key and value views.
//!
//! This module provides [`View`], a restartable sequence over one component
//! of an [`OrderedMap`]'s entries, and the two views the map hands out:
//!
//! - [`KeysView`]: the keys, from [`OrderedMap::keys`]
//! - [`ValuesView`]: the values, from [`OrderedMap::values`]
//!
//! A view holds a shared borrow of its map and a selector that picks the
//! component out of an entry. It caches nothing: every operation, including
//! plain iteration, walks the map again. Views are `Copy` and offer no way to
//! modify the map.
//!
//! # Examples
//!
//! ```rust
//! use fpmap::OrderedMap;
//!
//! let map = OrderedMap::from([("A", true), ("B", false), ("C", true), ("D", true)]);
//! let keys = map.keys();
//!
//! assert_eq!(keys.filter_to_vec(|key| *key != "B"), [&"A", &"C", &"D"]);
//! assert_eq!(keys.map_to_vec(|key| key.repeat(2)), ["AA", "BB", "CC", "DD"]);
//!
//! // The same view can be traversed again.
//! assert_eq!(keys.iter().count(), 4);
//! assert_eq!(keys.iter().count(), 4);
//! ```
//!
//! # Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `keys`/`values` | O(1)       |
//! | `iter`          | O(1), O(n) to exhaust |
//! | `filter_to_vec` | O(n)       |
//! | `map_to_vec`    | O(n)       |
//! | `fold`          | O(n)       |
//! | `all` / `any`   | O(n), short-circuits |

use std::fmt;
use std::iter::FusedIterator;

use crate::hasher::DefaultHashBuilder;
use crate::map::{Iter, OrderedMap};

/// Picks one component out of an entry.
pub type Selector<'a, K, V, T> = fn(&'a K, &'a V) -> &'a T;

/// A restartable view over one component of an [`OrderedMap`]'s entries.
///
/// See the [module documentation](self) for details.
pub struct View<'a, K, V, S, T: ?Sized> {
    map: &'a OrderedMap<K, V, S>,
    selector: Selector<'a, K, V, T>,
}

/// A view over the keys of an [`OrderedMap`].
pub type KeysView<'a, K, V, S = DefaultHashBuilder> = View<'a, K, V, S, K>;

/// A view over the values of an [`OrderedMap`].
pub type ValuesView<'a, K, V, S = DefaultHashBuilder> = View<'a, K, V, S, V>;

static_assertions::assert_impl_all!(KeysView<'static, String, i32>: Copy, IntoIterator);
static_assertions::assert_impl_all!(ValuesView<'static, String, i32>: Copy, IntoIterator);

impl<'a, K, V, S, T: ?Sized> View<'a, K, V, S, T> {
    pub(crate) const fn new(map: &'a OrderedMap<K, V, S>, selector: Selector<'a, K, V, T>) -> Self {
        Self { map, selector }
    }

    /// Returns a fresh iterator over the view's elements in map order.
    ///
    /// Each call starts from the beginning, so a view can be traversed any
    /// number of times.
    #[must_use]
    pub fn iter(&self) -> ViewIter<'a, K, V, T> {
        ViewIter {
            entries: self.map.iter(),
            selector: self.selector,
        }
    }

    /// Returns the number of elements, which is the size of the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the elements for which `predicate` holds, in map order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("A", true), ("B", false), ("C", true)]);
    /// assert_eq!(map.values().filter_to_vec(|value| *value), [&true, &true]);
    /// ```
    #[must_use]
    pub fn filter_to_vec<P>(&self, mut predicate: P) -> Vec<&'a T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).collect()
    }

    /// Applies `function` to every element and collects the results, in map
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("A", true), ("B", false)]);
    /// assert_eq!(map.values().map_to_vec(|value| !value), [false, true]);
    /// ```
    #[must_use]
    pub fn map_to_vec<M, F>(&self, function: F) -> Vec<M>
    where
        F: FnMut(&'a T) -> M,
    {
        self.iter().map(function).collect()
    }

    /// Left fold over the elements, starting from `init`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let map = OrderedMap::from([("A", 1), ("b", 2), ("C", 3)]);
    /// let joined = map.keys().fold(String::new(), |joined, key| joined + *key);
    /// assert_eq!(joined, "AbC");
    /// ```
    pub fn fold<A, F>(&self, init: A, function: F) -> A
    where
        F: FnMut(A, &'a T) -> A,
    {
        self.iter().fold(init, function)
    }

    /// Returns `true` if `predicate` holds for every element. Stops at the
    /// first failure; an empty view returns `true`.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if `predicate` holds for some element. Stops at the
    /// first success; an empty view returns `false`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }
}

impl<K, V, S, T: ?Sized> Clone for View<'_, K, V, S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S, T: ?Sized> Copy for View<'_, K, V, S, T> {}

impl<K, V, S, T: ?Sized + fmt::Debug> fmt::Debug for View<'_, K, V, S, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, K, V, S, T: ?Sized> IntoIterator for View<'a, K, V, S, T> {
    type Item = &'a T;
    type IntoIter = ViewIter<'a, K, V, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S, T: ?Sized> IntoIterator for &View<'a, K, V, S, T> {
    type Item = &'a T;
    type IntoIter = ViewIter<'a, K, V, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// ViewIter
// =============================================================================

/// An iterator over the elements of a [`View`].
pub struct ViewIter<'a, K, V, T: ?Sized> {
    entries: Iter<'a, K, V>,
    selector: Selector<'a, K, V, T>,
}

impl<'a, K, V, T: ?Sized> Iterator for ViewIter<'a, K, V, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.next()?;
        Some((self.selector)(key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V, T: ?Sized> DoubleEndedIterator for ViewIter<'_, K, V, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.next_back()?;
        Some((self.selector)(key, value))
    }
}

impl<K, V, T: ?Sized> ExactSizeIterator for ViewIter<'_, K, V, T> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V, T: ?Sized> FusedIterator for ViewIter<'_, K, V, T> {}

impl<K, V, T: ?Sized> Clone for ViewIter<'_, K, V, T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            selector: self.selector,
        }
    }
}
