//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! [`TypeConstructor`] names the element type a container is applied to and
//! the same container applied to another element type, which is enough to
//! state container-generic traits like [`Foldable`](super::Foldable).
//!
//! ```rust
//! use fpmap::OrderedMap;
//! use fpmap::typeclass::TypeConstructor;
//!
//! fn relabel<T: TypeConstructor>(_container: &T) -> Option<T::WithType<String>> {
//!     None
//! }
//!
//! let map = OrderedMap::from([("a", 1)]);
//! let relabeled: Option<OrderedMap<&str, String>> = relabel(&map);
//! assert!(relabeled.is_none());
//! ```

/// A container type applied to an element type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The element type this container is applied to.
    type Inner;

    /// The same container applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderedMap;

    fn assert_inner<T: TypeConstructor<Inner = i32>>() {}

    #[test]
    fn inner_types_are_element_types() {
        assert_inner::<Option<i32>>();
        assert_inner::<Vec<i32>>();
        assert_inner::<OrderedMap<String, i32>>();
    }

    #[test]
    fn ordered_map_with_type_keeps_keys() {
        fn rebuild<T: TypeConstructor>(_value: &T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let map = OrderedMap::from([(1, 10)]);
        let rebuilt: OrderedMap<i32, String> = rebuild(&map);
        assert!(rebuilt.is_empty());
    }
}
