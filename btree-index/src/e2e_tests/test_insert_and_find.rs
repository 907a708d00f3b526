//! Inserting values and reading them back through exact lookup.

use crate::BPlusTree;
use crate::e2e_tests::helpers::*;
use crate::testing::assert_invariants;

#[test]
fn test_find_returns_every_value_for_a_key() {
    let mut tree = BPlusTree::with_order(8).expect("order is valid");
    tree.add("apple", 1);
    tree.add("pear", 2);
    tree.add("apple", 3);

    assert_eq!(tree.find(&"apple"), &[1, 3]);
    assert_eq!(tree.find(&"pear"), &[2]);
    assert!(tree.find(&"plum").is_empty());
}

#[test]
fn test_absent_keys_return_empty_slices() {
    let tree = tree_of(4, &[10, 20, 30, 40, 50]);

    assert!(tree.find(&5).is_empty());
    assert!(tree.find(&25).is_empty());
    assert!(tree.find(&55).is_empty());
}

#[test]
fn test_ascending_inserts_stay_consistent() {
    let mut tree = BPlusTree::with_order(2).expect("order is valid");
    for key in 0..200 {
        tree.add(key, key * 3);
    }

    assert_invariants(&tree);
    assert_eq!(tree.len(), 200);
    for key in 0..200 {
        assert_eq!(tree.find(&key), &[key * 3], "lost key {key}");
    }
}

#[test]
fn test_descending_inserts_stay_consistent() {
    let mut tree = BPlusTree::with_order(2).expect("order is valid");
    for key in (0..200).rev() {
        tree.add(key, key * 3);
    }

    assert_invariants(&tree);
    assert_eq!(tree.len(), 200);
    for key in 0..200 {
        assert_eq!(tree.find(&key), &[key * 3], "lost key {key}");
    }
}

#[test]
fn test_len_counts_values_not_keys() {
    let mut tree = BPlusTree::with_order(4).expect("order is valid");
    tree.add(1, 1);
    tree.add(1, 2);
    tree.add(2, 1);

    assert_eq!(tree.len(), 3);
    assert!(!tree.is_empty());
}
