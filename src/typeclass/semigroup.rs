//! Semigroup type class: types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wbtree::typeclass::Semigroup;
//!
//! assert_eq!(String::from("weight-").combine(String::from("balanced")), "weight-balanced");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!(Some(String::from("a")).combine(None), Some(String::from("a")));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{All, Any, Dual, First, Last, Max, Min, Product, Sum};

/// A type with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use wbtree::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(2).combine(Sum::new(40)), Sum::new(42));
/// ```
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values.
    ///
    /// The default clones both operands; implementors may avoid that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::typeclass::Semigroup;
    ///
    /// let left = String::from("left");
    /// let right = String::from("right");
    /// assert_eq!(left.combine_ref(&right), "leftright");
    /// assert_eq!(left, "left");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero, since a semigroup has no identity to return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");
        (1..count).fold(self.clone(), |accumulator, _| {
            accumulator.combine(self.clone())
        })
    }

    /// Combines every element of `iterator` from left to right.
    ///
    /// Returns `None` for an empty iterator. See
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for the total form.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed: two `Some` values combine their contents, otherwise
/// whichever side is present wins.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (present, None) | (None, present) => present,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        other
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl<A: Semigroup> Semigroup for Dual<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.combine(self.0))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "")]
    #[case("ab", "", "ab")]
    #[case("", "cd", "cd")]
    #[case("ab", "cd", "abcd")]
    fn test_string_combine(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        assert_eq!(left.to_string().combine(right.to_string()), expected);
    }

    #[rstest]
    fn test_string_combine_ref_keeps_operands() {
        let left = String::from("x");
        let right = String::from("y");
        assert_eq!(left.combine_ref(&right), "xy");
        assert_eq!((left.as_str(), right.as_str()), ("x", "y"));
    }

    #[rstest]
    #[case(Some(Sum(1)), Some(Sum(2)), Some(Sum(3)))]
    #[case(Some(Sum(1)), None, Some(Sum(1)))]
    #[case(None, Some(Sum(2)), Some(Sum(2)))]
    #[case(None, None, None)]
    fn test_option_combine(
        #[case] left: Option<Sum<i32>>,
        #[case] right: Option<Sum<i32>>,
        #[case] expected: Option<Sum<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn test_tuple_combines_componentwise() {
        let left = (Sum(1), String::from("a"), Max(3));
        let right = (Sum(2), String::from("b"), Max(7));
        assert_eq!(left.combine(right), (Sum(3), String::from("ab"), Max(7)));
    }

    #[rstest]
    fn test_max_and_min_keep_left_on_tie() {
        assert_eq!(Max((1, "left")).combine(Max((1, "left"))), Max((1, "left")));
        assert_eq!(Min(2).combine(Min(5)), Min(2));
        assert_eq!(Max(2).combine(Max(5)), Max(5));
    }

    #[rstest]
    fn test_first_and_last() {
        assert_eq!(First('a').combine(First('b')), First('a'));
        assert_eq!(Last('a').combine(Last('b')), Last('b'));
    }

    #[rstest]
    #[case(true, true, true, true)]
    #[case(true, false, false, true)]
    #[case(false, false, false, false)]
    fn test_all_and_any(
        #[case] left: bool,
        #[case] right: bool,
        #[case] conjunction: bool,
        #[case] disjunction: bool,
    ) {
        assert_eq!(All(left).combine(All(right)), All(conjunction));
        assert_eq!(Any(left).combine(Any(right)), Any(disjunction));
    }

    #[rstest]
    fn test_dual_flips_operands() {
        let joined = Dual(vec![1]).combine(Dual(vec![2]));
        assert_eq!(joined, Dual(vec![2, 1]));
    }

    #[rstest]
    fn test_combine_n() {
        assert_eq!(Sum(4).combine_n(3), Sum(12));
        assert_eq!(vec!['x'].combine_n(1), vec!['x']);
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn test_combine_n_zero_panics() {
        let _ = Sum(1).combine_n(0);
    }

    #[rstest]
    fn test_reduce_all() {
        assert_eq!(Product::reduce_all(vec![Product(2), Product(3), Product(4)]), Some(Product(24)));
        assert_eq!(Last::<i32>::reduce_all(Vec::new()), None);
    }
}
