//! Functional traversal over the entries of an [`OrderedMap`].
//!
//! Every callback is called once per entry, in insertion order, with the
//! value, the key and a reference to the map being traversed. Derived maps
//! keep the receiver's key order and hash builder.

use super::OrderedMap;

impl<K, V, S> OrderedMap<K, V, S> {
    /// Applies `function` to every entry and collects the results into a new
    /// map with the same keys in the same order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let flags = OrderedMap::from([("A", true), ("B", false)]);
    /// let inverted = flags.transform(|value, _, _| !value);
    ///
    /// assert_eq!(inverted["A"], false);
    /// assert_eq!(inverted["B"], true);
    /// ```
    #[must_use]
    pub fn transform<T, F>(&self, mut function: F) -> OrderedMap<K, T, S>
    where
        K: Clone,
        S: Clone,
        F: FnMut(&V, &K, &Self) -> T,
    {
        let mut result = OrderedMap::with_capacity_and_hasher(self.len(), self.hash_builder.clone());
        for bucket in &self.buckets {
            let transformed = function(&bucket.value, &bucket.key, self);
            result.push_unique(bucket.hash, bucket.key.clone(), transformed);
        }
        result
    }

    /// Like [`transform`](Self::transform), but collects `(key, result)`
    /// pairs into a vector instead of building a map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let flags = OrderedMap::from([("A", true), ("B", false)]);
    /// assert_eq!(flags.transform_to_vec(|value, _, _| !value), [(&"A", false), (&"B", true)]);
    /// ```
    #[must_use]
    pub fn transform_to_vec<T, F>(&self, mut function: F) -> Vec<(&K, T)>
    where
        F: FnMut(&V, &K, &Self) -> T,
    {
        self.buckets
            .iter()
            .map(|bucket| (&bucket.key, function(&bucket.value, &bucket.key, self)))
            .collect()
    }

    /// Returns a new map holding the entries for which `predicate` returns
    /// `true`, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let flags = OrderedMap::from([("A", true), ("B", false), ("C", true)]);
    /// let enabled = flags.select(|value, _, _| *value);
    ///
    /// assert_eq!(enabled.len(), 2);
    /// assert!(!enabled.contains_key("B"));
    /// ```
    #[must_use]
    pub fn select<P>(&self, mut predicate: P) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
        P: FnMut(&V, &K, &Self) -> bool,
    {
        let mut result = Self::with_hasher(self.hash_builder.clone());
        for bucket in &self.buckets {
            if predicate(&bucket.value, &bucket.key, self) {
                result.push_unique(bucket.hash, bucket.key.clone(), bucket.value.clone());
            }
        }
        result
    }

    /// Like [`select`](Self::select), but returns the kept entries as a
    /// vector of borrowed pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let flags = OrderedMap::from([("A", true), ("B", false), ("C", true)]);
    /// assert_eq!(flags.select_to_vec(|value, _, _| *value), [(&"A", &true), (&"C", &true)]);
    /// ```
    #[must_use]
    pub fn select_to_vec<P>(&self, mut predicate: P) -> Vec<(&K, &V)>
    where
        P: FnMut(&V, &K, &Self) -> bool,
    {
        self.buckets
            .iter()
            .filter(|bucket| predicate(&bucket.value, &bucket.key, self))
            .map(|bucket| bucket.refs())
            .collect()
    }

    /// Left fold over the entries, starting from `init`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let flags = OrderedMap::from([("A", true), ("B", false), ("C", true)]);
    /// let count = flags.fold(0, |count, value, _, _| count + i32::from(*value));
    /// assert_eq!(count, 2);
    /// ```
    pub fn fold<A, F>(&self, init: A, mut function: F) -> A
    where
        F: FnMut(A, &V, &K, &Self) -> A,
    {
        self.buckets.iter().fold(init, |accumulator, bucket| {
            function(accumulator, &bucket.value, &bucket.key, self)
        })
    }

    /// Fallible left fold: stops at the first `Err` and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let stock = OrderedMap::from([("apples", 3_u32), ("pears", 0)]);
    /// let total: Result<u32, String> = stock.try_fold(0, |total, count, name, _| {
    ///     if *count == 0 {
    ///         Err(format!("{name} sold out"))
    ///     } else {
    ///         Ok(total + count)
    ///     }
    /// });
    /// assert_eq!(total, Err("pears sold out".to_string()));
    /// ```
    pub fn try_fold<A, E, F>(&self, init: A, mut function: F) -> Result<A, E>
    where
        F: FnMut(A, &V, &K, &Self) -> Result<A, E>,
    {
        let mut accumulator = init;
        for bucket in &self.buckets {
            accumulator = function(accumulator, &bucket.value, &bucket.key, self)?;
        }
        Ok(accumulator)
    }

    /// Fallible [`transform`](Self::transform): stops at the first `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_transform<T, E, F>(&self, mut function: F) -> Result<OrderedMap<K, T, S>, E>
    where
        K: Clone,
        S: Clone,
        F: FnMut(&V, &K, &Self) -> Result<T, E>,
    {
        let mut result = OrderedMap::with_capacity_and_hasher(self.len(), self.hash_builder.clone());
        for bucket in &self.buckets {
            let transformed = function(&bucket.value, &bucket.key, self)?;
            result.push_unique(bucket.hash, bucket.key.clone(), transformed);
        }
        Ok(result)
    }

    /// Returns `true` if `predicate` holds for every entry.
    ///
    /// Stops at the first entry that fails. An empty map returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpmap::OrderedMap;
    ///
    /// let flags = OrderedMap::from([("A", true), ("B", false)]);
    /// assert!(!flags.all(|value, _, _| *value));
    /// assert!(flags.all(|_, key, _| !key.is_empty()));
    /// ```
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K, &Self) -> bool,
    {
        self.buckets
            .iter()
            .all(|bucket| predicate(&bucket.value, &bucket.key, self))
    }

    /// Returns `true` if `predicate` holds for at least one entry.
    ///
    /// Stops at the first entry that passes. An empty map returns `false`.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K, &Self) -> bool,
    {
        self.buckets
            .iter()
            .any(|bucket| predicate(&bucket.value, &bucket.key, self))
    }
}
