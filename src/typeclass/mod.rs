//! Type class traits shared by the crate's containers.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through generic
//!   associated types
//! - [`Foldable`]: reducing a container's elements to a summary value
//!
//! [`OrderedMap`](crate::OrderedMap) implements both, with its values as the
//! inner type. `Option` and `Vec` implement them too, so generic code can
//! fold any of them the same way.
//!
//! # Examples
//!
//! ```rust
//! use fpmap::OrderedMap;
//! use fpmap::typeclass::Foldable;
//!
//! fn total<F: Foldable<Inner = u32>>(container: F) -> u32 {
//!     container.fold_left(0, |sum, element| sum + element)
//! }
//!
//! assert_eq!(total(vec![1, 2, 3]), 6);
//! assert_eq!(total(Some(4)), 4);
//! assert_eq!(total(OrderedMap::from([("a", 5_u32), ("b", 6)])), 11);
//! ```

mod foldable;
mod higher;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
