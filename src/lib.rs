//! # fpmap
//!
//! An insertion-ordered hash map with functional traversal operations,
//! set algebra and decorated key/value views.
//!
//! ## Overview
//!
//! - **[`OrderedMap`]**: a hash map that iterates in insertion order.
//!   Re-inserting an existing key updates its value in place; removing and
//!   re-inserting moves it to the end.
//! - **Traversal**: `transform`, `select`, `fold`, `all`, `any` and their
//!   vector-producing and fallible counterparts. Callbacks receive the value,
//!   the key and the map being traversed.
//! - **Set algebra**: `union`, `intersection`, `difference`,
//!   `symmetric_difference` and `is_superset_of`, keyed on key presence plus
//!   value equality.
//! - **Views**: [`KeysView`] and [`ValuesView`] re-derive their elements from
//!   the map on every call and carry `filter_to_vec`, `map_to_vec`, `fold`,
//!   `all` and `any`.
//! - **Type classes**: [`typeclass::Foldable`] for the map and a few standard
//!   containers.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `TypeConstructor` and `Foldable`
//! - `serde`: `Serialize`/`Deserialize` for [`OrderedMap`]
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher
//! - `full`: `typeclass` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use fpmap::OrderedMap;
//!
//! let flags = OrderedMap::from([("A", true), ("B", false), ("C", true), ("D", true)]);
//!
//! let enabled = flags.select(|value, _, _| *value);
//! assert_eq!(enabled.keys().map_to_vec(|key| key.to_string()), ["A", "C", "D"]);
//!
//! let count = flags.fold(0, |accumulator, value, _, _| accumulator + i32::from(*value));
//! assert_eq!(count, 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use fpmap::prelude::*;
///
/// let map: OrderedMap<&str, i32> = OrderedMap::new();
/// assert!(map.is_empty());
/// ```
pub mod prelude {
    pub use crate::hasher::DefaultHashBuilder;
    pub use crate::map::OrderedMap;
    pub use crate::view::{KeysView, ValuesView, View};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod hasher;
pub mod map;
pub mod view;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use hasher::DefaultHashBuilder;
pub use map::OrderedMap;
pub use view::{KeysView, ValuesView, View};
