//! Monoid type class: semigroups with an identity element.
//!
//! # Laws
//!
//! In addition to associativity, for all `a`:
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wbtree::typeclass::{All, Monoid, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2), Sum::new(3)]), Sum::new(6));
//! assert_eq!(All::combine_all(Vec::new()), All::new(true));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, Dual, Max, Min, Product, Sum};

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert_eq!(Option::<String>::empty(), None);
    /// ```
    fn empty() -> Self;

    /// Combines every element of `iterator`, starting from [`empty`](Self::empty).
    ///
    /// Unlike [`Semigroup::reduce_all`] this always returns a value.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }

    /// Returns whether this value equals the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::typeclass::{Any, Monoid};
    ///
    /// assert!(Any::new(false).is_empty_value());
    /// assert!(!Any::new(true).is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `None` is the identity, which makes any semigroup a monoid once lifted
/// into `Option`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($one:literal => $($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_identity!(1.0 => f32, f64);

impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl<A: Monoid> Monoid for Dual<A> {
    fn empty() -> Self {
        Self(A::empty())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{First, Last};
    use rstest::rstest;

    #[rstest]
    fn test_identities() {
        assert_eq!(Sum::<i64>::empty(), Sum(0));
        assert_eq!(Product::<u8>::empty(), Product(1));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
        assert_eq!(Max::<i32>::empty(), Max(i32::MIN));
        assert_eq!(Min::<char>::empty(), Min(char::MAX));
        assert_eq!(<(Sum<i32>, String)>::empty(), (Sum(0), String::new()));
    }

    #[rstest]
    #[case(vec![], Max(i32::MIN))]
    #[case(vec![Max(4), Max(-2), Max(9)], Max(9))]
    fn test_max_combine_all(#[case] values: Vec<Max<i32>>, #[case] expected: Max<i32>) {
        assert_eq!(Max::combine_all(values), expected);
    }

    #[rstest]
    fn test_optional_first_and_last_are_monoids() {
        let letters = ['x', 'y', 'z'];
        let first = Option::combine_all(letters.map(|letter| Some(First(letter))));
        let last = Option::combine_all(letters.map(|letter| Some(Last(letter))));
        assert_eq!(first, Some(First('x')));
        assert_eq!(last, Some(Last('z')));
        assert_eq!(Option::<First<char>>::combine_all(Vec::new()), None);
    }

    #[rstest]
    fn test_dual_combine_all_reverses() {
        let reversed = Dual::combine_all(vec![
            Dual(String::from("c")),
            Dual(String::from("b")),
            Dual(String::from("a")),
        ]);
        assert_eq!(reversed.into_inner(), "abc");
    }

    #[rstest]
    fn test_is_empty_value() {
        assert!(String::new().is_empty_value());
        assert!(All(true).is_empty_value());
        assert!(!Sum(1).is_empty_value());
    }
}
