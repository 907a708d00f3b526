//! Query behavior on a tree holding no values.

use crate::{BPlusTree, DEFAULT_ORDER};

#[test]
fn test_empty_tree_shape() {
    let tree: BPlusTree<i32, i32> = BPlusTree::default();

    assert_eq!(tree.order(), DEFAULT_ORDER);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
}

#[test]
fn test_find_on_empty_tree() {
    let tree: BPlusTree<i32, i32> = BPlusTree::new();
    assert!(tree.find(&1).is_empty());
}

#[test]
fn test_single_bound_operators_on_empty_tree() {
    let tree: BPlusTree<i32, i32> = BPlusTree::new();

    assert!(tree.lt(&10).is_empty());
    assert!(tree.le(&10).is_empty());
    assert!(tree.gt(&10).is_empty());
    assert!(tree.ge(&10).is_empty());
}

#[test]
fn test_two_bound_operators_on_empty_tree() {
    let tree: BPlusTree<i32, i32> = BPlusTree::new();

    assert_eq!(tree.gt_and_lt(&1, &9), Ok(vec![]));
    assert_eq!(tree.ge_and_lt(&1, &9), Ok(vec![]));
    assert_eq!(tree.gt_and_le(&1, &9), Ok(vec![]));
    assert_eq!(tree.ge_and_le(&1, &9), Ok(vec![]));
}
