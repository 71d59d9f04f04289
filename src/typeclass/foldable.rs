//! Foldable type class: structures that can be reduced to a summary value.
//!
//! Only [`fold_left`](Foldable::fold_left) and
//! [`fold_right`](Foldable::fold_right) are required; everything else is
//! derived from them. Implementors with a cheaper way to answer
//! [`is_empty`](Foldable::is_empty) or [`length`](Foldable::length) should
//! override those.
//!
//! # Examples
//!
//! ```rust
//! use wbtree::persistent::PersistentWeightMap;
//! use wbtree::typeclass::{All, Foldable};
//!
//! let ages = PersistentWeightMap::from_array(vec![("ada", 36), ("alan", 41)]);
//! assert!(ages.for_all(|age| *age > 30));
//! assert_eq!(ages.clone().find(|age| *age > 40), Some(41));
//! assert_eq!(ages.fold_map(|age| All::new(age % 2 == 0)), All::new(false));
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A structure whose elements can be folded in a fixed order.
///
/// For ordered containers such as
/// [`PersistentWeightMap`](crate::persistent::PersistentWeightMap) the order is
/// ascending key order.
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].fold_left(0, |number, digit| number * 10 + digit);
    /// assert_eq!(digits, 123);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the last element to the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].fold_right(0, |digit, number| number * 10 + digit);
    /// assert_eq!(digits, 321);
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::typeclass::{Foldable, Sum};
    ///
    /// let total: Sum<i32> = vec![1, 2, 3].fold_map(Sum::new);
    /// assert_eq!(total, Sum::new(6));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if the structure has no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
