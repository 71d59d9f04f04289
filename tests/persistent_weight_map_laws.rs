#![cfg(feature = "persistent")]
//! Property-based tests for PersistentWeightMap.
//!
//! Every operation is checked against `std::collections::BTreeMap` as a
//! model, and every produced map is checked for the ordering, size and
//! weight-balance invariants.

use std::collections::BTreeMap;

use proptest::prelude::*;
use wbtree::persistent::PersistentWeightMap;
use wbtree::typeclass::{Foldable, Semigroup, Sum};

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Small key range so that duplicates and hits on delete are common.
fn entries(max_size: usize) -> impl Strategy<Value = Vec<(i16, i32)>> {
    prop::collection::vec((-64_i16..64, any::<i32>()), 0..max_size)
}

fn model_of(entries: &[(i16, i32)]) -> BTreeMap<i16, i32> {
    entries.iter().copied().collect()
}

fn model_pairs(model: &BTreeMap<i16, i32>) -> Vec<(i16, i32)> {
    model.iter().map(|(key, value)| (*key, *value)).collect()
}

// =============================================================================
// Structural Invariants
// =============================================================================

proptest! {
    /// Any map built by from_array satisfies all invariants.
    #[test]
    fn prop_from_array_is_valid(pairs in entries(200)) {
        let map = PersistentWeightMap::from_array(pairs);
        prop_assert!(map.is_valid());
    }

    /// Every intermediate map of an insert sequence satisfies all invariants.
    #[test]
    fn prop_every_insert_preserves_invariants(pairs in entries(100)) {
        let mut map = PersistentWeightMap::new();
        for (key, value) in pairs {
            map = map.insert(key, value);
            prop_assert!(map.is_valid());
        }
    }

    /// Every intermediate map of a delete sequence satisfies all invariants.
    #[test]
    fn prop_every_delete_preserves_invariants(
        pairs in entries(150),
        deletions in prop::collection::vec(-64_i16..64, 0..100)
    ) {
        let mut map = PersistentWeightMap::from_array(pairs);
        for key in deletions {
            map = map.delete(&key);
            prop_assert!(map.is_valid());
        }
    }

    /// Depth stays within the logarithmic bound a weight-balanced tree allows.
    #[test]
    fn prop_depth_is_logarithmic(keys in prop::collection::btree_set(any::<i32>(), 1..512)) {
        let map: PersistentWeightMap<i32, ()> = keys.into_iter().map(|key| (key, ())).collect();
        // Each step down keeps at most DELTA / (DELTA + 1) of the entries.
        let bound = (map.len() as f64 + 1.0).log(4.0 / 3.0).ceil() as usize + 1;
        prop_assert!(map.depth() <= bound);
    }
}

// =============================================================================
// Model Laws
// =============================================================================

proptest! {
    /// from_array then to_array agrees with a BTreeMap built the same way.
    #[test]
    fn prop_round_trip_matches_model(pairs in entries(200)) {
        let model = model_of(&pairs);
        let map = PersistentWeightMap::from_array(pairs);
        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.to_array(), model_pairs(&model));
    }

    /// Lookup after insert finds the inserted value.
    #[test]
    fn prop_get_after_insert(pairs in entries(50), key in -64_i16..64, value: i32) {
        let map = PersistentWeightMap::from_array(pairs).insert(key, value);
        prop_assert_eq!(map.get(&key), Some(&value));
    }

    /// Insert does not affect other keys.
    #[test]
    fn prop_insert_leaves_other_keys(
        pairs in entries(50),
        key in -64_i16..64,
        other in -64_i16..64,
        value: i32
    ) {
        prop_assume!(key != other);
        let map = PersistentWeightMap::from_array(pairs);
        let updated = map.insert(key, value);
        prop_assert_eq!(updated.get(&other), map.get(&other));
    }

    /// The second of two inserts at the same key wins.
    #[test]
    fn prop_insert_overwrites(pairs in entries(50), key in -64_i16..64, first: i32, second: i32) {
        let map = PersistentWeightMap::from_array(pairs);
        prop_assert_eq!(map.insert(key, first).insert(key, second), map.insert(key, second));
    }

    /// insert_with applies the combiner to the new and the old value.
    #[test]
    fn prop_insert_with_combines(pairs in entries(50), key in -64_i16..64, value in -1000_i32..1000) {
        let map: PersistentWeightMap<i16, i64> = pairs
            .into_iter()
            .map(|(key, value)| (key, i64::from(value)))
            .collect();
        let combined = map.insert_with(key, i64::from(value), |new, old| new - old);
        let expected = map.get(&key).map_or(i64::from(value), |old| i64::from(value) - old);
        prop_assert_eq!(combined.get(&key), Some(&expected));
    }

    /// Delete removes exactly the requested key.
    #[test]
    fn prop_delete_matches_model(pairs in entries(100), key in -64_i16..64) {
        let mut model = model_of(&pairs);
        let map = PersistentWeightMap::from_array(pairs).delete(&key);
        model.remove(&key);
        prop_assert_eq!(map.get(&key), None);
        prop_assert_eq!(map.to_array(), model_pairs(&model));
    }

    /// Deleting a freshly inserted absent key restores the original entries.
    #[test]
    fn prop_insert_then_delete_absent_key(pairs in entries(50), key in 64_i16..128, value: i32) {
        let map = PersistentWeightMap::from_array(pairs);
        prop_assert_eq!(map.insert(key, value).delete(&key), map);
    }

    /// Persistence: updates never change the map they start from.
    #[test]
    fn prop_updates_do_not_mutate_source(pairs in entries(60), key in -64_i16..64, value: i32) {
        let map = PersistentWeightMap::from_array(pairs);
        let snapshot = map.to_array();
        let _ = map.insert(key, value);
        let _ = map.delete(&key);
        let _ = map.try_delete_find_min();
        prop_assert_eq!(map.to_array(), snapshot);
    }
}

// =============================================================================
// Extremal Laws
// =============================================================================

proptest! {
    /// delete_find_min returns the model's first entry, and the rest equals
    /// deleting that key.
    #[test]
    fn prop_delete_find_min_matches_model(pairs in entries(100)) {
        prop_assume!(!pairs.is_empty());
        let mut model = model_of(&pairs);
        let map = PersistentWeightMap::from_array(pairs);
        let ((key, value), rest) = map.delete_find_min();
        prop_assert_eq!(&rest, &map.delete(&key));
        prop_assert_eq!(model.pop_first(), Some((key, value)));
        prop_assert_eq!(rest.to_array(), model_pairs(&model));
        prop_assert!(rest.is_valid());
    }

    /// delete_find_max returns the model's last entry and the rest.
    #[test]
    fn prop_delete_find_max_matches_model(pairs in entries(100)) {
        prop_assume!(!pairs.is_empty());
        let mut model = model_of(&pairs);
        let map = PersistentWeightMap::from_array(pairs);
        let ((key, value), rest) = map.delete_find_max();
        prop_assert_eq!(&rest, &map.delete(&key));
        prop_assert_eq!(model.pop_last(), Some((key, value)));
        prop_assert_eq!(rest.to_array(), model_pairs(&model));
        prop_assert!(rest.is_valid());
    }

    /// min and max agree with the first and last entries of to_array.
    #[test]
    fn prop_min_max_agree_with_to_array(pairs in entries(100)) {
        let map = PersistentWeightMap::from_array(pairs);
        let array = map.to_array();
        prop_assert_eq!(map.min().map(|(key, value)| (*key, *value)), array.first().copied());
        prop_assert_eq!(map.max().map(|(key, value)| (*key, *value)), array.last().copied());
    }
}

// =============================================================================
// Type Class Laws
// =============================================================================

proptest! {
    /// Union is associative.
    #[test]
    fn prop_combine_is_associative(a in entries(30), b in entries(30), c in entries(30)) {
        let (a, b, c) = (
            PersistentWeightMap::from_array(a),
            PersistentWeightMap::from_array(b),
            PersistentWeightMap::from_array(c),
        );
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    /// Union agrees with a left-biased model merge.
    #[test]
    fn prop_union_matches_model(a in entries(60), b in entries(60)) {
        let mut model = model_of(&b);
        model.extend(model_of(&a));
        let merged = PersistentWeightMap::from_array(a).union(&PersistentWeightMap::from_array(b));
        prop_assert_eq!(merged.to_array(), model_pairs(&model));
        prop_assert!(merged.is_valid());
    }

    /// fold_map with Sum equals the sum of the values.
    #[test]
    fn prop_fold_map_sum(pairs in prop::collection::vec((any::<u8>(), 0_i64..1000), 0..60)) {
        let map = PersistentWeightMap::from_array(pairs);
        let expected: i64 = map.values().sum();
        prop_assert_eq!(map.fold_map(Sum::new), Sum::new(expected));
    }

    /// Iterator, to_array and the keyed folds all visit the same sequence.
    #[test]
    fn prop_traversals_agree(pairs in entries(80)) {
        let map = PersistentWeightMap::from_array(pairs);
        let iterated: Vec<(i16, i32)> = map.iter().map(|(key, value)| (*key, *value)).collect();
        let folded_left = map.fold_left_with_key(Vec::new(), |mut out, key, value| {
            out.push((*key, *value));
            out
        });
        prop_assert_eq!(&iterated, &map.to_array());
        prop_assert_eq!(&iterated, &folded_left);
        prop_assert_eq!(map.iter().len(), map.len());
    }
}
