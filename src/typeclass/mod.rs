//! Type classes for summarising the contents of a map.
//!
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroups with an identity element
//! - [`Foldable`]: structures that reduce to a summary value
//! - [`TypeConstructor`]: names the element type of a container
//!
//! The wrappers ([`Sum`], [`Product`], [`Max`], [`Min`], [`First`], [`Last`],
//! [`All`], [`Any`], [`Dual`]) select one particular monoid for an underlying
//! type, and [`Bounded`] supplies the identities of [`Max`] and [`Min`].
//!
//! # Examples
//!
//! ```rust
//! use wbtree::persistent::PersistentWeightMap;
//! use wbtree::typeclass::{Foldable, Monoid, Semigroup, Sum};
//!
//! let january = PersistentWeightMap::from_array(vec![("rent", 900), ("food", 300)]);
//! let february = PersistentWeightMap::from_array(vec![("food", 280), ("travel", 120)]);
//!
//! // Left-biased union: January's "food" entry wins.
//! let merged = january.combine(february);
//! assert_eq!(merged.to_array(), vec![("food", 300), ("rent", 900), ("travel", 120)]);
//!
//! let total: Sum<i32> = merged.fold_map(Sum::new);
//! assert_eq!(total, Sum::new(1320));
//!
//! assert!(PersistentWeightMap::<&str, i32>::empty().is_empty());
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Bounded, Dual, First, Last, Max, Min, Product, Sum};
