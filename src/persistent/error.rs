//! Error types for the persistent map.
//!
//! Both kinds describe programmer errors rather than runtime conditions:
//! extracting an extremal entry from an empty map, and reaching a rotation
//! with a tree shape that the balance invariant rules out. The extremal
//! operations exist in a panicking form and a `try_` form that returns these
//! values instead.

use thiserror::Error;

/// Errors reported by [`PersistentWeightMap`](super::PersistentWeightMap).
///
/// # Examples
///
/// ```rust
/// use wbtree::persistent::{PersistentWeightMap, WeightMapError};
///
/// let map: PersistentWeightMap<i32, &str> = PersistentWeightMap::new();
/// let error = map.try_delete_find_min().unwrap_err();
/// assert_eq!(
///     error,
///     WeightMapError::EmptyMap { operation: "delete the minimal element" }
/// );
/// assert_eq!(
///     error.to_string(),
///     "cannot delete the minimal element of an empty map"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightMapError {
    /// An operation that needs at least one entry was applied to an empty map.
    #[error("cannot {operation} of an empty map")]
    EmptyMap {
        /// What was attempted.
        operation: &'static str,
    },

    /// A rotation helper met a subtree shape that cannot occur while the
    /// weight-balance invariant holds.
    #[error("{helper} called on a shape that violates the weight-balance invariant")]
    MalformedShape {
        /// The internal helper that detected the shape.
        helper: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        WeightMapError::EmptyMap { operation: "delete the maximal element" },
        "cannot delete the maximal element of an empty map"
    )]
    #[case(
        WeightMapError::MalformedShape { helper: "single_left" },
        "single_left called on a shape that violates the weight-balance invariant"
    )]
    fn test_error_display(#[case] error: WeightMapError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&WeightMapError::EmptyMap { operation: "x" });
    }
}
