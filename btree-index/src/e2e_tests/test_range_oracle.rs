//! Randomized comparison of every operator against a linear scan.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::BPlusTree;
use crate::e2e_tests::helpers::*;
use crate::testing::assert_invariants;

fn oracle<F: Fn(i32) -> bool>(pairs: &[(i32, i32)], in_range: F) -> Vec<i32> {
    let mut values: Vec<i32> = pairs
        .iter()
        .filter(|&&(key, _)| in_range(key))
        .map(|&(_, value)| value)
        .collect();
    values.sort_unstable();
    values
}

#[test]
fn test_operators_agree_with_a_linear_scan() {
    let mut rng = StdRng::seed_from_u64(42);

    for order in [2, 4, 5, 8, 32] {
        let mut tree = BPlusTree::with_order(order).expect("order is valid");
        let mut pairs = Vec::new();
        for n in 0..400 {
            let key = rng.random_range(0..120);
            tree.add(key, n);
            pairs.push((key, n));
        }
        assert_invariants(&tree);

        for _ in 0..50 {
            let low = rng.random_range(0..119);
            let high = rng.random_range((low + 1)..=120);

            assert_eq!(sorted(tree.lt(&low)), oracle(&pairs, |k| k < low));
            assert_eq!(sorted(tree.le(&low)), oracle(&pairs, |k| k <= low));
            assert_eq!(sorted(tree.gt(&low)), oracle(&pairs, |k| k > low));
            assert_eq!(sorted(tree.ge(&low)), oracle(&pairs, |k| k >= low));

            assert_eq!(
                sorted(tree.gt_and_lt(&low, &high).expect("low is below high")),
                oracle(&pairs, |k| k > low && k < high)
            );
            assert_eq!(
                sorted(tree.ge_and_lt(&low, &high).expect("low is below high")),
                oracle(&pairs, |k| k >= low && k < high)
            );
            assert_eq!(
                sorted(tree.gt_and_le(&low, &high).expect("low is below high")),
                oracle(&pairs, |k| k > low && k <= high)
            );
            assert_eq!(
                sorted(tree.ge_and_le(&low, &high).expect("low is below high")),
                oracle(&pairs, |k| k >= low && k <= high)
            );
        }
    }
}

#[test]
fn test_find_agrees_with_a_linear_scan() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tree = BPlusTree::with_order(4).expect("order is valid");
    let mut pairs = Vec::new();

    for n in 0..300 {
        let key = rng.random_range(0..60);
        tree.add(key, n);
        pairs.push((key, n));
    }

    for key in 0..60 {
        let expected: Vec<i32> = pairs
            .iter()
            .filter(|&&(k, _)| k == key)
            .map(|&(_, value)| value)
            .collect();
        assert_eq!(
            tree.find(&key),
            expected.as_slice(),
            "mismatch for key {key}"
        );
    }
}
