//! The eight range operators against a fixed fixture.
//!
//! Keys are multiples of ten, so a bound like 55 falls between keys
//! while 50 sits exactly on one.

use crate::BPlusTree;
use crate::e2e_tests::helpers::*;

const KEYS: [i32; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

fn fixture() -> BPlusTree<i32, i32> {
    tree_of(4, &KEYS)
}

#[test]
fn test_lt_excludes_the_bound() {
    let tree = fixture();

    assert_eq!(sorted(tree.lt(&50)), vec![10, 20, 30, 40]);
    assert_eq!(sorted(tree.lt(&55)), vec![10, 20, 30, 40, 50]);
    assert!(tree.lt(&10).is_empty());
}

#[test]
fn test_le_includes_the_bound() {
    let tree = fixture();

    assert_eq!(sorted(tree.le(&50)), vec![10, 20, 30, 40, 50]);
    assert_eq!(sorted(tree.le(&10)), vec![10]);
    assert!(tree.le(&5).is_empty());
}

#[test]
fn test_gt_excludes_the_bound() {
    let tree = fixture();

    assert_eq!(sorted(tree.gt(&80)), vec![90, 100]);
    assert_eq!(sorted(tree.gt(&85)), vec![90, 100]);
    assert!(tree.gt(&100).is_empty());
}

#[test]
fn test_ge_includes_the_bound() {
    let tree = fixture();

    assert_eq!(sorted(tree.ge(&80)), vec![80, 90, 100]);
    assert_eq!(sorted(tree.ge(&100)), vec![100]);
    assert!(tree.ge(&101).is_empty());
}

#[test]
fn test_gt_and_lt_excludes_both_bounds() {
    let tree = fixture();
    let values = tree.gt_and_lt(&30, &70).expect("bounds are valid");
    assert_eq!(sorted(values), vec![40, 50, 60]);
}

#[test]
fn test_ge_and_lt_includes_only_the_lower_bound() {
    let tree = fixture();
    let values = tree.ge_and_lt(&30, &70).expect("bounds are valid");
    assert_eq!(sorted(values), vec![30, 40, 50, 60]);
}

#[test]
fn test_gt_and_le_includes_only_the_upper_bound() {
    let tree = fixture();
    let values = tree.gt_and_le(&30, &70).expect("bounds are valid");
    assert_eq!(sorted(values), vec![40, 50, 60, 70]);
}

#[test]
fn test_ge_and_le_includes_both_bounds() {
    let tree = fixture();
    let values = tree.ge_and_le(&30, &70).expect("bounds are valid");
    assert_eq!(sorted(values), vec![30, 40, 50, 60, 70]);
}

#[test]
fn test_valid_ranges_may_match_nothing() {
    let tree = fixture();

    // No key lies inside (41, 49), or even [41, 49].
    assert!(tree.gt_and_lt(&41, &49).expect("bounds are valid").is_empty());
    assert!(tree.ge_and_le(&41, &49).expect("bounds are valid").is_empty());

    // Adjacent keys under exclusive bounds leave nothing between them.
    assert!(tree.gt_and_lt(&40, &50).expect("bounds are valid").is_empty());
}

#[test]
fn test_bounds_outside_the_key_span() {
    let tree = fixture();

    assert_eq!(
        sorted(tree.ge_and_le(&-100, &1000).expect("bounds are valid")),
        KEYS.to_vec()
    );
    assert_eq!(sorted(tree.lt(&1000)), KEYS.to_vec());
    assert_eq!(sorted(tree.gt(&-100)), KEYS.to_vec());
}
