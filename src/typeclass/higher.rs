//! Type constructor emulation through generic associated types.
//!
//! Rust cannot abstract over `Option<_>` or `Vec<_>` as type constructors
//! directly. [`TypeConstructor`] names the element type a container is applied
//! to, and the same container applied to another element type, which is what
//! [`Foldable`](super::Foldable) needs to speak about "the values inside".
//!
//! # Examples
//!
//! ```rust
//! use wbtree::persistent::PersistentWeightMap;
//! use wbtree::typeclass::TypeConstructor;
//!
//! fn element_of<T: TypeConstructor<Inner = i32>>(_: &T) {}
//!
//! // A map is a container of its values; the key type is fixed.
//! element_of(&PersistentWeightMap::singleton("key", 1));
//! element_of(&vec![1, 2, 3]);
//! ```

/// A container type applied to an element type.
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
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

    fn assert_inner<T: TypeConstructor<Inner = I>, I>() {}

    fn assert_same<T, U>()
    where
        T: TypeConstructor,
        U: TypeConstructor<WithType<i32> = T>,
    {
    }

    #[test]
    fn option_and_vec_expose_their_element() {
        assert_inner::<Option<String>, String>();
        assert_inner::<Vec<u8>, u8>();
    }

    #[test]
    fn with_type_keeps_the_constructor() {
        assert_same::<Option<i32>, Option<String>>();
        assert_same::<Vec<i32>, Vec<()>>();
    }

    #[cfg(feature = "persistent")]
    #[test]
    fn weight_map_exposes_value_type_and_fixes_key() {
        use crate::persistent::PersistentWeightMap;

        assert_inner::<PersistentWeightMap<String, u64>, u64>();
        assert_same::<PersistentWeightMap<char, i32>, PersistentWeightMap<char, ()>>();
    }
}
