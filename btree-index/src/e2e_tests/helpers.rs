//! Builders shared across the end-to-end tests.

use crate::BPlusTree;

/// Build a tree of the given order where every key maps to itself.
pub fn tree_of(order: usize, keys: &[i32]) -> BPlusTree<i32, i32> {
    let mut tree = BPlusTree::with_order(order).expect("order is valid");
    for &key in keys {
        tree.add(key, key);
    }
    tree
}

/// Sort borrowed query results into owned, comparable form.
pub fn sorted<T: Ord + Copy>(values: Vec<&T>) -> Vec<T> {
    let mut owned: Vec<T> = values.into_iter().copied().collect();
    owned.sort_unstable();
    owned
}
