//! # wbtree
//!
//! A persistent ordered map built on a weight-balanced binary search tree.
//!
//! ## Overview
//!
//! [`PersistentWeightMap`](persistent::PersistentWeightMap) is an immutable
//! map in the style of Adams' bounded-balance trees. Every node caches the
//! size of its subtree, and a node whose children drift beyond a fixed size
//! ratio is restored with a single or double rotation. Updates return a new
//! map that shares all untouched subtrees with the original.
//!
//! - **Persistent map**: insert, delete, lookup and extremal extraction in
//!   O(log N), conversion to and from association lists
//! - **Type classes**: `Semigroup`, `Monoid`, `Foldable` and the usual
//!   monoid wrappers, implemented for the map and the standard containers
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and monoid wrappers
//! - `persistent`: the persistent weight-balanced map (implies `typeclass`)
//! - `arc`: share tree nodes through `Arc` instead of `Rc`, making maps
//!   `Send + Sync`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use wbtree::prelude::*;
//!
//! let map = PersistentWeightMap::from_array((1..=5).map(|key| (key, key * key)));
//! let smaller = map.delete(&3);
//!
//! assert_eq!(map.len(), 5);
//! assert_eq!(smaller.to_array(), vec![(1, 1), (2, 4), (4, 16), (5, 25)]);
//!
//! let total: Sum<i32> = smaller.fold_map(Sum::new);
//! assert_eq!(total.into_inner(), 46);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use wbtree::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
