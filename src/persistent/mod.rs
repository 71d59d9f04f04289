//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentWeightMap`], an ordered map built on a
//! weight-balanced binary search tree. Every update returns a new map and
//! shares the untouched subtrees with the map it was derived from.
//!
//! # Structural Sharing
//!
//! ```rust
//! use wbtree::persistent::PersistentWeightMap;
//!
//! let map = PersistentWeightMap::new()
//!     .insert(3, "three")
//!     .insert(1, "one")
//!     .insert(2, "two");
//!
//! // Entries are always in sorted order
//! assert_eq!(map.to_array(), vec![(1, "one"), (2, "two"), (3, "three")]);
//!
//! // The original map is preserved
//! let updated = map.insert(1, "ONE");
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(updated.get(&1), Some(&"ONE"));
//!
//! let removed = updated.delete(&2);
//! assert_eq!(removed.len(), 2);
//! assert_eq!(updated.len(), 3);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod balance;
mod error;
mod tree;
mod weight_map;

pub use error::WeightMapError;
pub use weight_map::PersistentWeightMap;
pub use weight_map::PersistentWeightMapIntoIterator;
pub use weight_map::PersistentWeightMapIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
