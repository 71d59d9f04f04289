//! Node representation and the recursive algorithms of the weight-balanced tree.
//!
//! A [`Tree`] is either `Empty` or a `Node` holding a cached subtree size, a
//! key/value pair and two children. Nodes are never mutated once built; every
//! operation here returns a fresh root that shares the untouched children of
//! its input.
//!
//! Invariants maintained by every function in this module (and assumed on
//! entry):
//!
//! 1. In-order traversal yields strictly ascending keys.
//! 2. `size == 1 + size(left) + size(right)` and `Empty` has size 0.
//! 3. For every node whose children hold at least two entries together,
//!    neither child is more than [`DELTA`] times the size of the other.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::ReferenceCounter;
use super::balance::{DELTA, balance};
use super::error::WeightMapError;

// =============================================================================
// Node Definition
// =============================================================================

/// A weight-balanced binary search tree.
pub(crate) enum Tree<K, V> {
    Empty,
    Node(ReferenceCounter<Node<K, V>>),
}

/// An interior node. `size` counts every entry in the subtree rooted here.
pub(crate) struct Node<K, V> {
    pub(crate) size: usize,
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Tree<K, V>,
    pub(crate) right: Tree<K, V>,
}

impl<K, V> Clone for Tree<K, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => Self::Node(ReferenceCounter::clone(node)),
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Number of entries in this subtree.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(node) => node.size,
        }
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub(crate) fn as_node(&self) -> Option<&Node<K, V>> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&**node),
        }
    }

    pub(crate) fn singleton(key: K, value: V) -> Self {
        Self::bin(key, value, Self::Empty, Self::Empty)
    }

    /// Raw constructor. Computes the size from the children and performs no
    /// rebalancing; the caller guarantees the resulting shape is balanced.
    pub(crate) fn bin(key: K, value: V, left: Self, right: Self) -> Self {
        Self::Node(ReferenceCounter::new(Node {
            size: left.size() + right.size() + 1,
            key,
            value,
            left,
            right,
        }))
    }

    /// Length of the longest root-to-leaf path.
    pub(crate) fn depth(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(node) => 1 + node.left.depth().max(node.right.depth()),
        }
    }

    pub(crate) fn min(&self) -> Option<(&K, &V)> {
        let mut current = self.as_node()?;
        while let Some(next) = current.left.as_node() {
            current = next;
        }
        Some((&current.key, &current.value))
    }

    pub(crate) fn max(&self) -> Option<(&K, &V)> {
        let mut current = self.as_node()?;
        while let Some(next) = current.right.as_node() {
            current = next;
        }
        Some((&current.key, &current.value))
    }

    /// Right fold over the entries in ascending key order: the function is
    /// applied to the greatest key first and the accumulator flows leftward.
    pub(crate) fn fold_right_with_key<'a, B, F>(&'a self, init: B, function: &mut F) -> B
    where
        F: FnMut(&'a K, &'a V, B) -> B,
    {
        match self {
            Self::Empty => init,
            Self::Node(node) => {
                let accumulator = node.right.fold_right_with_key(init, function);
                let accumulator = function(&node.key, &node.value, accumulator);
                node.left.fold_right_with_key(accumulator, function)
            }
        }
    }

    /// Left fold over the entries in ascending key order.
    pub(crate) fn fold_left_with_key<'a, B, F>(&'a self, init: B, function: &mut F) -> B
    where
        F: FnMut(B, &'a K, &'a V) -> B,
    {
        match self {
            Self::Empty => init,
            Self::Node(node) => {
                let accumulator = node.left.fold_left_with_key(init, function);
                let accumulator = function(accumulator, &node.key, &node.value);
                node.right.fold_left_with_key(accumulator, function)
            }
        }
    }

    /// Checks the size invariant at every node.
    pub(crate) fn has_consistent_sizes(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Node(node) => {
                node.size == 1 + node.left.size() + node.right.size()
                    && node.left.has_consistent_sizes()
                    && node.right.has_consistent_sizes()
            }
        }
    }

    /// Checks the weight-balance invariant at every node.
    pub(crate) fn is_balanced(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Node(node) => {
                let left_size = node.left.size();
                let right_size = node.right.size();
                (left_size + right_size <= 1
                    || (left_size <= DELTA * right_size && right_size <= DELTA * left_size))
                    && node.left.is_balanced()
                    && node.right.is_balanced()
            }
        }
    }
}

impl<K: Ord, V> Tree<K, V> {
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self;
        while let Self::Node(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Checks that every key lies strictly between its ancestors' bounds.
    pub(crate) fn is_ordered(&self) -> bool {
        self.is_ordered_within(None, None)
    }

    fn is_ordered_within(&self, lower: Option<&K>, upper: Option<&K>) -> bool {
        match self {
            Self::Empty => true,
            Self::Node(node) => {
                lower.is_none_or(|bound| *bound < node.key)
                    && upper.is_none_or(|bound| node.key < *bound)
                    && node.left.is_ordered_within(lower, Some(&node.key))
                    && node.right.is_ordered_within(Some(&node.key), upper)
            }
        }
    }
}

// =============================================================================
// Insertion
// =============================================================================

impl<K: Clone + Ord, V: Clone> Tree<K, V> {
    /// Inserts `key`, overwriting the value of an equal key.
    pub(crate) fn insert(&self, key: K, value: V) -> Self {
        self.insert_with_key(key, value, |_, new_value, _| new_value)
    }

    /// Inserts `key`; on an equal-key hit the stored value becomes
    /// `combine(&key, new_value, old_value)`.
    pub(crate) fn insert_with_key<F>(&self, key: K, value: V, combine: F) -> Self
    where
        F: FnOnce(&K, V, V) -> V,
    {
        match self {
            Self::Empty => Self::singleton(key, value),
            Self::Node(node) => match key.cmp(&node.key) {
                Ordering::Less => balance(
                    node.key.clone(),
                    node.value.clone(),
                    node.left.insert_with_key(key, value, combine),
                    node.right.clone(),
                ),
                Ordering::Greater => balance(
                    node.key.clone(),
                    node.value.clone(),
                    node.left.clone(),
                    node.right.insert_with_key(key, value, combine),
                ),
                Ordering::Equal => {
                    // Shape is unchanged, so the cached size carries over.
                    let combined = combine(&key, value, node.value.clone());
                    Self::Node(ReferenceCounter::new(Node {
                        size: node.size,
                        key,
                        value: combined,
                        left: node.left.clone(),
                        right: node.right.clone(),
                    }))
                }
            },
        }
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Removes `key`. An absent key leaves the entries unchanged.
    pub(crate) fn delete<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => match key.cmp(node.key.borrow()) {
                Ordering::Less => balance(
                    node.key.clone(),
                    node.value.clone(),
                    node.left.delete(key),
                    node.right.clone(),
                ),
                Ordering::Greater => balance(
                    node.key.clone(),
                    node.value.clone(),
                    node.left.clone(),
                    node.right.delete(key),
                ),
                Ordering::Equal => glue(&node.left, &node.right),
            },
        }
    }

    /// Removes the minimal entry and returns it with the remaining tree.
    ///
    /// # Errors
    ///
    /// Returns [`WeightMapError::EmptyMap`] if the tree is empty.
    pub(crate) fn delete_find_min(&self) -> Result<((K, V), Self), WeightMapError> {
        self.as_node()
            .map(Node::extract_min)
            .ok_or(WeightMapError::EmptyMap {
                operation: "delete the minimal element",
            })
    }

    /// Removes the maximal entry and returns it with the remaining tree.
    ///
    /// # Errors
    ///
    /// Returns [`WeightMapError::EmptyMap`] if the tree is empty.
    pub(crate) fn delete_find_max(&self) -> Result<((K, V), Self), WeightMapError> {
        self.as_node()
            .map(Node::extract_max)
            .ok_or(WeightMapError::EmptyMap {
                operation: "delete the maximal element",
            })
    }
}

impl<K: Clone, V: Clone> Node<K, V> {
    fn extract_min(&self) -> ((K, V), Tree<K, V>) {
        match self.left.as_node() {
            None => ((self.key.clone(), self.value.clone()), self.right.clone()),
            Some(left) => {
                let (minimum, remainder) = left.extract_min();
                let rebuilt = balance(
                    self.key.clone(),
                    self.value.clone(),
                    remainder,
                    self.right.clone(),
                );
                (minimum, rebuilt)
            }
        }
    }

    fn extract_max(&self) -> ((K, V), Tree<K, V>) {
        match self.right.as_node() {
            None => ((self.key.clone(), self.value.clone()), self.left.clone()),
            Some(right) => {
                let (maximum, remainder) = right.extract_max();
                let rebuilt = balance(
                    self.key.clone(),
                    self.value.clone(),
                    self.left.clone(),
                    remainder,
                );
                (maximum, rebuilt)
            }
        }
    }
}

/// Joins two trees where every key of `left` is less than every key of
/// `right`. The new root is pulled from the larger side so that a single
/// [`balance`] restores the invariant.
pub(crate) fn glue<K: Clone, V: Clone>(left: &Tree<K, V>, right: &Tree<K, V>) -> Tree<K, V> {
    match (left.as_node(), right.as_node()) {
        (None, _) => right.clone(),
        (_, None) => left.clone(),
        (Some(left_node), Some(right_node)) => {
            if left_node.size > right_node.size {
                tracing::trace!(
                    target: "wbtree::tree",
                    left_size = left_node.size,
                    right_size = right_node.size,
                    pulled = "max",
                    "glue"
                );
                let ((key, value), remainder) = left_node.extract_max();
                balance(key, value, remainder, right.clone())
            } else {
                tracing::trace!(
                    target: "wbtree::tree",
                    left_size = left_node.size,
                    right_size = right_node.size,
                    pulled = "min",
                    "glue"
                );
                let ((key, value), remainder) = right_node.extract_min();
                balance(key, value, left.clone(), remainder)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
