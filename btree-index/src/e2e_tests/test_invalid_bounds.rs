//! Validation of two-bound ranges and tree orders.

use crate::e2e_tests::helpers::*;
use crate::{BPlusTree, TreeError};

#[test]
fn test_equal_bounds_are_rejected() {
    let tree = tree_of(4, &[1, 2, 3]);

    assert_eq!(tree.gt_and_lt(&2, &2), Err(TreeError::InvalidRange));
    assert_eq!(tree.ge_and_lt(&2, &2), Err(TreeError::InvalidRange));
    assert_eq!(tree.gt_and_le(&2, &2), Err(TreeError::InvalidRange));
    assert_eq!(tree.ge_and_le(&2, &2), Err(TreeError::InvalidRange));
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let tree = tree_of(4, &[1, 2, 3]);

    assert_eq!(tree.gt_and_lt(&9, &1), Err(TreeError::InvalidRange));
    assert_eq!(tree.ge_and_lt(&9, &1), Err(TreeError::InvalidRange));
    assert_eq!(tree.gt_and_le(&9, &1), Err(TreeError::InvalidRange));
    assert_eq!(tree.ge_and_le(&9, &1), Err(TreeError::InvalidRange));
}

#[test]
fn test_bounds_are_checked_before_the_empty_shortcut() {
    let tree: BPlusTree<i32, i32> = BPlusTree::new();

    assert_eq!(tree.gt_and_lt(&5, &5), Err(TreeError::InvalidRange));
    assert_eq!(tree.ge_and_le(&6, &2), Err(TreeError::InvalidRange));
}

#[test]
fn test_orders_below_two_are_rejected() {
    assert_eq!(
        BPlusTree::<i32, i32>::with_order(0).err(),
        Some(TreeError::InvalidOrder(0))
    );
    assert_eq!(
        BPlusTree::<i32, i32>::with_order(1).err(),
        Some(TreeError::InvalidOrder(1))
    );
    assert!(BPlusTree::<i32, i32>::with_order(2).is_ok());
}
