//! Node splits, root splits, and height growth.

use crate::BPlusTree;
use crate::e2e_tests::helpers::*;
use crate::testing::assert_invariants;

#[test]
fn test_height_grows_once_per_root_split() {
    let mut tree = BPlusTree::with_order(4).expect("order is valid");
    let mut heights = Vec::new();
    for key in [5, 3, 8, 1, 9, 2, 7] {
        tree.add(key, key);
        heights.push(tree.height());
    }

    // Four keys rest in the root leaf; the fifth splits it.
    assert_eq!(heights, vec![1, 1, 1, 1, 2, 2, 2]);
    assert_invariants(&tree);
}

#[test]
fn test_queries_after_splits() {
    let tree = tree_of(4, &[5, 3, 8, 1, 9, 2, 7]);

    assert_eq!(tree.find(&8), &[8]);
    assert_eq!(sorted(tree.lt(&5)), vec![1, 2, 3]);
    assert_eq!(
        sorted(tree.ge_and_le(&3, &8).expect("bounds are valid")),
        vec![3, 5, 7, 8]
    );
}

#[test]
fn test_height_is_monotone() {
    let mut tree = BPlusTree::with_order(2).expect("order is valid");
    let mut last = tree.height();
    for key in 0..64 {
        tree.add(key, key);
        assert!(tree.height() >= last);
        last = tree.height();
    }

    assert!(tree.height() > 1);
}

#[test]
fn test_descending_inserts_keep_left_edge_reachable() {
    let mut tree = BPlusTree::with_order(2).expect("order is valid");
    for key in (0..50).rev() {
        tree.add(key, key);
    }

    assert_invariants(&tree);
    assert_eq!(sorted(tree.lt(&10)), (0..10).collect::<Vec<_>>());
}

#[test]
fn test_large_order_defers_splitting() {
    let mut tree = BPlusTree::with_order(1000).expect("order is valid");
    for key in 0..500 {
        tree.add(key, key);
    }

    assert_eq!(tree.height(), 1);
    assert_invariants(&tree);
}

#[test]
fn test_odd_orders_split_cleanly() {
    let mut tree = BPlusTree::with_order(5).expect("order is valid");
    for key in 0..100 {
        tree.add(key, key);
    }

    assert_invariants(&tree);
    for key in 0..100 {
        assert_eq!(tree.find(&key), &[key]);
    }
}
