//! Newtype wrappers selecting a particular monoid for an underlying type.
//!
//! The same type often combines in more than one lawful way: integers add or
//! multiply, booleans conjoin or disjoin, and any value can keep the first or
//! the last of two. Each wrapper here picks one of those operations, so that
//! [`fold_map`](super::Foldable::fold_map) over a map's values can compute
//! different summaries of the same data.
//!
//! | Wrapper        | `combine`               | `empty`             |
//! |----------------|-------------------------|---------------------|
//! | [`Sum`]        | `a + b`                 | `A::default()`      |
//! | [`Product`]    | `a * b`                 | one                 |
//! | [`Max`]        | greater of the two      | [`Bounded::MIN_VALUE`] |
//! | [`Min`]        | lesser of the two       | [`Bounded::MAX_VALUE`] |
//! | [`First`]      | left operand            | none (semigroup)    |
//! | [`Last`]       | right operand           | none (semigroup)    |
//! | [`All`]        | `a && b`                | `true`              |
//! | [`Any`]        | `a \|\| b`              | `false`             |
//! | [`Dual`]       | `b.combine(a)`          | `A::empty()`        |
//!
//! [`First`] and [`Last`] have no identity element; wrap them in `Option` to
//! obtain a monoid.
//!
//! # Examples
//!
//! ```rust
//! use wbtree::persistent::PersistentWeightMap;
//! use wbtree::typeclass::{Foldable, Max, Sum};
//!
//! let stock = PersistentWeightMap::from_array(vec![("apples", 4), ("pears", 9), ("plums", 2)]);
//!
//! let total: Sum<i32> = stock.clone().fold_map(Sum::new);
//! let largest: Max<i32> = stock.fold_map(Max::new);
//! assert_eq!(total.into_inner(), 15);
//! assert_eq!(largest.into_inner(), 9);
//! ```

/// Generates the constructor, accessors and `From` conversion shared by every
/// wrapper.
macro_rules! newtype_wrapper {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<A> $wrapper<A> {
                #[doc = concat!("Wraps `value` in a `", stringify!($wrapper), "`.")]
                #[inline]
                pub const fn new(value: A) -> Self {
                    Self(value)
                }

                /// Consumes the wrapper and returns the inner value.
                #[inline]
                pub fn into_inner(self) -> A {
                    self.0
                }

                /// Returns a reference to the inner value.
                #[inline]
                pub const fn as_inner(&self) -> &A {
                    &self.0
                }
            }

            impl<A> From<A> for $wrapper<A> {
                fn from(value: A) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

/// Combines by addition. The identity is `A::default()`, which is zero for
/// the numeric types.
///
/// # Examples
///
/// ```rust
/// use wbtree::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Combines by multiplication. The identity is one.
///
/// # Examples
///
/// ```rust
/// use wbtree::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
/// assert_eq!(Product::<u64>::empty(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

/// Keeps the greater value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

/// Keeps the lesser value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

/// Keeps the left operand.
///
/// # Examples
///
/// ```rust
/// use wbtree::typeclass::{First, Semigroup};
///
/// let first = First::reduce_all(["a", "b", "c"].map(First::new));
/// assert_eq!(first, Some(First::new("a")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<A>(pub A);

/// Keeps the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last<A>(pub A);

/// Boolean conjunction. The identity is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All<A = bool>(pub A);

/// Boolean disjunction. The identity is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Any<A = bool>(pub A);

/// Reverses the operand order of the wrapped semigroup.
///
/// # Examples
///
/// ```rust
/// use wbtree::typeclass::{Dual, Semigroup};
///
/// let joined = Dual::new(String::from("world")).combine(Dual::new(String::from("hello ")));
/// assert_eq!(joined.into_inner(), "hello world");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dual<A>(pub A);

newtype_wrapper!(Sum, Product, Max, Min, First, Last, All, Any, Dual);

// =============================================================================
// Bounded
// =============================================================================

/// Types with a least and a greatest value.
///
/// `Max<A>` uses [`MIN_VALUE`](Self::MIN_VALUE) as its identity and `Min<A>`
/// uses [`MAX_VALUE`](Self::MAX_VALUE).
///
/// # Examples
///
/// ```rust
/// use wbtree::typeclass::{Bounded, Max, Monoid};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Max::<Score>::empty(), Max::new(Score(0)));
/// ```
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;

    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_constants {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_by_constants!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
