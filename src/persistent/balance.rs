//! Rebalancing for weight-balanced trees.
//!
//! Follows Adams' bounded-balance scheme with the parameters analysed by
//! Straka ("Adams' Trees Revisited"): a subtree may be at most [`DELTA`] times
//! the size of its sibling, and [`RATIO`] decides between a single and a
//! double rotation once that bound is exceeded.
//!
//! [`balance`] is the only entry point. It assumes its inputs are balanced
//! trees whose combined sizes differ from a balanced configuration by at most
//! one insertion or deletion, which is exactly what insert, delete and glue
//! hand it.

use super::error::WeightMapError;
use super::tree::Tree;

/// Maximum permitted size ratio between two sibling subtrees.
pub(crate) const DELTA: usize = 3;

/// Inner/outer grandchild ratio below which a single rotation suffices.
pub(crate) const RATIO: usize = 2;

/// Builds a node from `key`, `value` and two children, rotating if the
/// children's sizes are out of proportion.
pub(crate) fn balance<K: Clone, V: Clone>(
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
) -> Tree<K, V> {
    let left_size = left.size();
    let right_size = right.size();

    if left_size + right_size <= 1 {
        Tree::bin(key, value, left, right)
    } else if right_size > DELTA * left_size {
        rotate_left(key, value, left, right)
    } else if left_size > DELTA * right_size {
        rotate_right(key, value, left, right)
    } else {
        Tree::bin(key, value, left, right)
    }
}

#[cold]
#[track_caller]
fn malformed(helper: &'static str) -> ! {
    panic!("{}", WeightMapError::MalformedShape { helper })
}

/// The right subtree is too heavy.
fn rotate_left<K: Clone, V: Clone>(
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
) -> Tree<K, V> {
    let Some(heavy) = right.as_node() else {
        malformed("rotate_left")
    };
    if heavy.left.size() < RATIO * heavy.right.size() {
        single_left(key, value, left, &right)
    } else {
        double_left(key, value, left, &right)
    }
}

/// The left subtree is too heavy.
fn rotate_right<K: Clone, V: Clone>(
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
) -> Tree<K, V> {
    let Some(heavy) = left.as_node() else {
        malformed("rotate_right")
    };
    if heavy.right.size() < RATIO * heavy.left.size() {
        single_right(key, value, &left, right)
    } else {
        double_right(key, value, &left, right)
    }
}

//        k1                 k2
//       /  \               /  \
//     t1    k2     =>    k1    t3
//          /  \         /  \
//        t2    t3     t1    t2
fn single_left<K: Clone, V: Clone>(
    key: K,
    value: V,
    outer: Tree<K, V>,
    heavy: &Tree<K, V>,
) -> Tree<K, V> {
    let Some(pivot) = heavy.as_node() else {
        malformed("single_left")
    };
    tracing::trace!(
        target: "wbtree::balance",
        rotation = "single_left",
        light_size = outer.size(),
        heavy_size = pivot.size,
        "rotated subtree"
    );
    Tree::bin(
        pivot.key.clone(),
        pivot.value.clone(),
        Tree::bin(key, value, outer, pivot.left.clone()),
        pivot.right.clone(),
    )
}

fn single_right<K: Clone, V: Clone>(
    key: K,
    value: V,
    heavy: &Tree<K, V>,
    outer: Tree<K, V>,
) -> Tree<K, V> {
    let Some(pivot) = heavy.as_node() else {
        malformed("single_right")
    };
    tracing::trace!(
        target: "wbtree::balance",
        rotation = "single_right",
        light_size = outer.size(),
        heavy_size = pivot.size,
        "rotated subtree"
    );
    Tree::bin(
        pivot.key.clone(),
        pivot.value.clone(),
        pivot.left.clone(),
        Tree::bin(key, value, pivot.right.clone(), outer),
    )
}

//        k1                      k3
//       /  \                   /    \
//     t1    k2               k1      k2
//          /  \     =>      /  \    /  \
//        k3    t4         t1   t2  t3   t4
//       /  \
//     t2    t3
fn double_left<K: Clone, V: Clone>(
    key: K,
    value: V,
    outer: Tree<K, V>,
    heavy: &Tree<K, V>,
) -> Tree<K, V> {
    let Some(pivot) = heavy.as_node() else {
        malformed("double_left")
    };
    let Some(inner) = pivot.left.as_node() else {
        malformed("double_left")
    };
    tracing::trace!(
        target: "wbtree::balance",
        rotation = "double_left",
        light_size = outer.size(),
        heavy_size = pivot.size,
        "rotated subtree"
    );
    Tree::bin(
        inner.key.clone(),
        inner.value.clone(),
        Tree::bin(key, value, outer, inner.left.clone()),
        Tree::bin(
            pivot.key.clone(),
            pivot.value.clone(),
            inner.right.clone(),
            pivot.right.clone(),
        ),
    )
}

fn double_right<K: Clone, V: Clone>(
    key: K,
    value: V,
    heavy: &Tree<K, V>,
    outer: Tree<K, V>,
) -> Tree<K, V> {
    let Some(pivot) = heavy.as_node() else {
        malformed("double_right")
    };
    let Some(inner) = pivot.right.as_node() else {
        malformed("double_right")
    };
    tracing::trace!(
        target: "wbtree::balance",
        rotation = "double_right",
        light_size = outer.size(),
        heavy_size = pivot.size,
        "rotated subtree"
    );
    Tree::bin(
        inner.key.clone(),
        inner.value.clone(),
        Tree::bin(
            pivot.key.clone(),
            pivot.value.clone(),
            pivot.left.clone(),
            inner.left.clone(),
        ),
        Tree::bin(key, value, inner.right.clone(), outer),
    )
}

// =============================================================================
// Tests
// =============================================================================
