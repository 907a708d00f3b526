//! Duplicate keys accumulate values in place and never force splits.

use crate::BPlusTree;
use crate::testing::assert_invariants;

#[test]
fn test_duplicate_key_accumulates_values_in_insertion_order() {
    let mut tree = BPlusTree::with_order(4).expect("order is valid");
    tree.add(10, 100);
    tree.add(10, 200);

    assert_eq!(tree.find(&10), &[100, 200]);
}

#[test]
fn test_duplicate_into_full_leaf_does_not_split() {
    let mut tree = BPlusTree::with_order(2).expect("order is valid");
    tree.add(1, 1);
    tree.add(2, 2);
    assert_eq!(tree.height(), 1);

    // The leaf is at capacity, but existing keys accumulate in place.
    tree.add(2, 22);
    tree.add(1, 11);

    assert_eq!(tree.height(), 1);
    assert_eq!(tree.find(&1), &[1, 11]);
    assert_eq!(tree.find(&2), &[2, 22]);
}

#[test]
fn test_one_key_holds_many_values() {
    let mut tree = BPlusTree::with_order(4).expect("order is valid");
    for n in 0..50 {
        tree.add(7, n);
    }

    assert_eq!(tree.height(), 1);
    assert_eq!(tree.len(), 50);
    let expected: Vec<i32> = (0..50).collect();
    assert_eq!(tree.find(&7), expected.as_slice());
}

#[test]
fn test_duplicates_survive_splits_around_them() {
    let mut tree = BPlusTree::with_order(2).expect("order is valid");
    for key in 0..40 {
        tree.add(key, key);
    }
    for round in 1..=3 {
        tree.add(20, 20 + round * 1000);
    }

    assert_invariants(&tree);
    assert_eq!(tree.find(&20), &[20, 1020, 2020, 3020]);
}
