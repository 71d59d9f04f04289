//! Persistent (immutable) ordered map based on a weight-balanced tree.
//!
//! This module provides [`PersistentWeightMap`], an immutable ordered map
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentWeightMap` is an Adams-style bounded-balance tree: every node
//! caches the size of its subtree, and a node is rebuilt with a single or
//! double rotation whenever one child grows to more than three times the size
//! of its sibling.
//!
//! - O(log N) get
//! - O(log N) insert
//! - O(log N) delete
//! - O(log N) min/max and extraction of either extreme
//! - O(1) len and `is_empty`
//!
//! All operations return new maps without modifying the original, and
//! structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use wbtree::persistent::PersistentWeightMap;
//!
//! let map = PersistentWeightMap::from_array(vec![(3, "c"), (1, "a"), (2, "b"), (1, "z")]);
//!
//! // The later duplicate wins, and entries come back in key order
//! assert_eq!(map.to_array(), vec![(1, "z"), (2, "b"), (3, "c")]);
//!
//! let ((key, value), rest) = map.delete_find_min();
//! assert_eq!((key, value), (1, "z"));
//! assert_eq!(rest.len(), 2);
//! ```

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::error::WeightMapError;
use super::tree::{Node, Tree};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// PersistentWeightMap Definition
// =============================================================================

/// A persistent (immutable) ordered map based on a weight-balanced tree.
///
/// Keys must implement `Ord`. The map keeps its entries in ascending key
/// order, so iteration, [`to_array`](Self::to_array) and the folds all visit
/// keys from smallest to largest.
///
/// # Time Complexity
///
/// | Operation                        | Complexity |
/// |----------------------------------|------------|
/// | `new` / `singleton`              | O(1)       |
/// | `get` / `contains_key`           | O(log N)   |
/// | `insert` / `insert_with(_key)`   | O(log N)   |
/// | `delete`                         | O(log N)   |
/// | `delete_find_min` / `_max`       | O(log N)   |
/// | `from_array`                     | O(N log N) |
/// | `to_array`                       | O(N)       |
/// | `len` / `is_empty`               | O(1)       |
///
/// # Examples
///
/// ```rust
/// use wbtree::persistent::PersistentWeightMap;
///
/// let map = PersistentWeightMap::singleton(42, "answer");
/// assert_eq!(map.get(&42), Some(&"answer"));
///
/// let counts = PersistentWeightMap::new()
///     .insert_with("a", 1, |new, old| new + old)
///     .insert_with("b", 1, |new, old| new + old)
///     .insert_with("a", 1, |new, old| new + old);
/// assert_eq!(counts.get("a"), Some(&2));
/// ```
pub struct PersistentWeightMap<K, V> {
    root: Tree<K, V>,
}

impl<K, V> Clone for PersistentWeightMap<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<K, V> PersistentWeightMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map: PersistentWeightMap<i32, String> = PersistentWeightMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: Tree::Empty }
    }

    /// Creates a new empty map. Equivalent to [`new`](Self::new).
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Creates a map containing a single key-value pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::singleton(1, "one");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self {
            root: Tree::singleton(key, value),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1): the size is cached at the root.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.size()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the length of the longest path from the root to a leaf.
    ///
    /// The balance invariant keeps this logarithmic in [`len`](Self::len).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::from_array(vec![(3, 'c'), (1, 'a')]);
    /// assert_eq!(map.min(), Some((&1, &'a')));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root.min()
    }

    /// Returns the entry with the maximum key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.root.max()
    }

    /// Returns an iterator over entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> PersistentWeightMapIterator<'_, K, V> {
        PersistentWeightMapIterator::new(&self.root)
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Folds the entries from the greatest key down to the smallest.
    ///
    /// `fold_right_with_key(init, f)` computes
    /// `f(k1, v1, f(k2, v2, ... f(kn, vn, init)))` for keys `k1 < ... < kn`,
    /// so consing onto the accumulator yields an ascending sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::from_array(vec![(2, "b"), (1, "a"), (3, "c")]);
    /// let rendered = map.fold_right_with_key(String::new(), |key, value, rest| {
    ///     format!("{key}{value}{rest}")
    /// });
    /// assert_eq!(rendered, "1a2b3c");
    /// ```
    pub fn fold_right_with_key<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a K, &'a V, B) -> B,
    {
        self.root.fold_right_with_key(init, &mut function)
    }

    /// Folds the entries from the smallest key up to the greatest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::from_array(vec![(2, 20), (1, 10)]);
    /// let weighted = map.fold_left_with_key(0, |sum, key, value| sum + key * value);
    /// assert_eq!(weighted, 50);
    /// ```
    pub fn fold_left_with_key<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &'a K, &'a V) -> B,
    {
        self.root.fold_left_with_key(init, &mut function)
    }
}

impl<K: Ord, V> PersistentWeightMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::singleton("hello".to_string(), 42);
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Checks the ordering, size and weight-balance invariants at every node.
    ///
    /// Always `true` for maps built through this API; exposed for tests and
    /// debugging.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.root.is_ordered() && self.root.has_consistent_sizes() && self.root.is_balanced()
    }
}

impl<K: Clone + Ord, V: Clone> PersistentWeightMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contains the key, the value is replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map1 = PersistentWeightMap::new().insert(1, "one");
    /// let map2 = map1.insert(1, "ONE");
    ///
    /// assert_eq!(map1.get(&1), Some(&"one")); // Original unchanged
    /// assert_eq!(map2.get(&1), Some(&"ONE")); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        Self {
            root: self.root.insert(key, value),
        }
    }

    /// Inserts a key-value pair, combining with an existing value.
    ///
    /// If the key is absent the pair is inserted as-is. Otherwise the stored
    /// value becomes `combine(new_value, old_value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::singleton("xs", vec![1]);
    /// let appended = map.insert_with("xs", vec![2], |mut new, old| {
    ///     new.extend(old);
    ///     new
    /// });
    /// assert_eq!(appended.get("xs"), Some(&vec![2, 1]));
    /// ```
    #[must_use]
    pub fn insert_with<F>(&self, key: K, value: V, combine: F) -> Self
    where
        F: FnOnce(V, V) -> V,
    {
        self.insert_with_key(key, value, |_, new_value, old_value| {
            combine(new_value, old_value)
        })
    }

    /// Inserts a key-value pair, combining with an existing value using the key.
    ///
    /// If the key is absent the pair is inserted as-is. Otherwise the stored
    /// value becomes `combine(&key, new_value, old_value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::singleton(5, "old".to_string());
    /// let updated = map.insert_with_key(5, "new".to_string(), |key, new, old| {
    ///     format!("{key}:{new}|{old}")
    /// });
    /// assert_eq!(updated.get(&5).map(String::as_str), Some("5:new|old"));
    /// ```
    #[must_use]
    pub fn insert_with_key<F>(&self, key: K, value: V, combine: F) -> Self
    where
        F: FnOnce(&K, V, V) -> V,
    {
        Self {
            root: self.root.insert_with_key(key, value, combine),
        }
    }

    /// Removes a key from the map.
    ///
    /// If the key is absent the returned map shares its whole tree with
    /// `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::from_array(vec![(1, "one"), (2, "two")]);
    /// let removed = map.delete(&1);
    ///
    /// assert_eq!(map.len(), 2);     // Original unchanged
    /// assert_eq!(removed.len(), 1); // New version
    /// assert_eq!(removed.get(&1), None);
    /// ```
    #[must_use]
    pub fn delete<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            return self.clone();
        }
        Self {
            root: self.root.delete(key),
        }
    }

    /// Removes the entry with the smallest key, returning it together with
    /// the remaining map.
    ///
    /// # Panics
    ///
    /// Panics if the map is empty. Use
    /// [`try_delete_find_min`](Self::try_delete_find_min) for a fallible form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::from_array(vec![(2, 'b'), (1, 'a'), (3, 'c')]);
    /// let ((key, value), rest) = map.delete_find_min();
    /// assert_eq!((key, value), (1, 'a'));
    /// assert_eq!(rest.to_array(), vec![(2, 'b'), (3, 'c')]);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn delete_find_min(&self) -> ((K, V), Self) {
        self.try_delete_find_min()
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Removes the entry with the greatest key, returning it together with
    /// the remaining map.
    ///
    /// # Panics
    ///
    /// Panics if the map is empty. Use
    /// [`try_delete_find_max`](Self::try_delete_find_max) for a fallible form.
    #[must_use]
    #[track_caller]
    pub fn delete_find_max(&self) -> ((K, V), Self) {
        self.try_delete_find_max()
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Fallible form of [`delete_find_min`](Self::delete_find_min).
    ///
    /// # Errors
    ///
    /// Returns [`WeightMapError::EmptyMap`] if the map is empty.
    pub fn try_delete_find_min(&self) -> Result<((K, V), Self), WeightMapError> {
        let (entry, remainder) = self.root.delete_find_min()?;
        Ok((entry, Self { root: remainder }))
    }

    /// Fallible form of [`delete_find_max`](Self::delete_find_max).
    ///
    /// # Errors
    ///
    /// Returns [`WeightMapError::EmptyMap`] if the map is empty.
    pub fn try_delete_find_max(&self) -> Result<((K, V), Self), WeightMapError> {
        let (entry, remainder) = self.root.delete_find_max()?;
        Ok((entry, Self { root: remainder }))
    }

    /// Builds a map from an association list.
    ///
    /// Pairs are inserted from first to last, so when a key occurs more than
    /// once the value from its last occurrence is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let map = PersistentWeightMap::from_array([(1, "first"), (1, "second")]);
    /// assert_eq!(map.get(&1), Some(&"second"));
    /// ```
    #[must_use]
    pub fn from_array<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut inserted = 0_usize;
        let map = pairs.into_iter().fold(Self::new(), |map, (key, value)| {
            inserted += 1;
            map.insert(key, value)
        });
        tracing::debug!(
            target: "wbtree::weight_map",
            inserted,
            size = map.len(),
            "built map from association list"
        );
        map
    }

    /// Returns the entries as an association list in ascending key order.
    ///
    /// Built with [`fold_right_with_key`](Self::fold_right_with_key) by
    /// prepending each entry, which yields the ascending order directly.
    #[must_use]
    pub fn to_array(&self) -> Vec<(K, V)> {
        self.fold_right_with_key(
            VecDeque::with_capacity(self.len()),
            |key, value, mut entries| {
                entries.push_front((key.clone(), value.clone()));
                entries
            },
        )
        .into()
    }

    /// Left-biased union: entries of `self` win over entries of `other` with
    /// an equal key.
    ///
    /// The smaller map is folded into the larger one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wbtree::persistent::PersistentWeightMap;
    ///
    /// let left = PersistentWeightMap::from_array(vec![(1, "left"), (2, "left")]);
    /// let right = PersistentWeightMap::from_array(vec![(2, "right"), (3, "right")]);
    /// assert_eq!(
    ///     left.union(&right).to_array(),
    ///     vec![(1, "left"), (2, "left"), (3, "right")]
    /// );
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.len() >= other.len() {
            other.fold_left_with_key(self.clone(), |map, key, value| {
                map.insert_with(key.clone(), value.clone(), |_, existing| existing)
            })
        } else {
            self.fold_left_with_key(other.clone(), |map, key, value| {
                map.insert(key.clone(), value.clone())
            })
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over key-value pairs of a [`PersistentWeightMap`].
///
/// Walks the tree in order with an explicit stack holding the left spine of
/// the unvisited part, so no entries are collected up front.
pub struct PersistentWeightMapIterator<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> PersistentWeightMapIterator<'a, K, V> {
    fn new(root: &'a Tree<K, V>) -> Self {
        let mut iterator = Self {
            stack: Vec::new(),
            remaining: root.size(),
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<K, V>) {
        while let Some(node) = tree.as_node() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for PersistentWeightMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for PersistentWeightMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over key-value pairs of a [`PersistentWeightMap`].
pub struct PersistentWeightMapIntoIterator<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for PersistentWeightMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for PersistentWeightMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for PersistentWeightMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Ord, V: Clone> FromIterator<(K, V)> for PersistentWeightMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_array(iter)
    }
}

impl<K: Clone + Ord, V: Clone> IntoIterator for PersistentWeightMap<K, V> {
    type Item = (K, V);
    type IntoIter = PersistentWeightMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentWeightMapIntoIterator {
            entries: self.to_array().into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a PersistentWeightMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = PersistentWeightMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two maps are equal when they hold the same key-value pairs, regardless of
/// the shape their insertion history produced.
impl<K: PartialEq, V: PartialEq> PartialEq for PersistentWeightMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for PersistentWeightMap<K, V> {}

impl<K: Hash, V: Hash> Hash for PersistentWeightMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PersistentWeightMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for PersistentWeightMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// The map is treated as a container of `V` values with `K` fixed.
impl<K, V> TypeConstructor for PersistentWeightMap<K, V> {
    type Inner = V;
    type WithType<B> = PersistentWeightMap<K, B>;
}

impl<K: Clone + Ord, V: Clone> Foldable for PersistentWeightMap<K, V> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.fold_left_with_key(init, |accumulator, _, value| {
            function(accumulator, value.clone())
        })
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        self.fold_right_with_key(init, |_, value, accumulator| {
            function(value.clone(), accumulator)
        })
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K: Clone + Ord, V: Clone> Semigroup for PersistentWeightMap<K, V> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }
}

impl<K: Clone + Ord, V: Clone> Monoid for PersistentWeightMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
