//! Default hash builder selection.
//!
//! [`OrderedMap`](crate::OrderedMap) is generic over any
//! [`BuildHasher`](std::hash::BuildHasher). When none is named, the
//! [`DefaultHashBuilder`] alias is used, which the feature flags pick:
//!
//! | Feature   | `DefaultHashBuilder`                          |
//! |-----------|-----------------------------------------------|
//! | `fxhash`  | `rustc_hash::FxBuildHasher`                   |
//! | `ahash`   | `ahash::RandomState`                          |
//! | (neither) | `std::collections::hash_map::RandomState`     |
//!
//! `fxhash` takes precedence when both are enabled.
//!
//! A cloned hash builder must hash every key to the same value as the
//! original. All three defaults satisfy this; derived maps reuse the stored
//! hashes of the receiver, so a custom builder has to as well.

/// The hash builder used by [`OrderedMap::new`](crate::OrderedMap::new).
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by [`OrderedMap::new`](crate::OrderedMap::new).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by [`OrderedMap::new`](crate::OrderedMap::new).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
