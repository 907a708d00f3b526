//! Shared helpers for unit and end-to-end tests: a structural invariant
//! walker and a deterministic sample-record generator.
#![cfg(test)]

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::BPlusTree;
use crate::node::Node;

/// Walk the whole tree and assert every structural invariant.
///
/// Panics with the violated property when the tree is malformed.
pub fn assert_invariants<K: Ord + Debug, V>(tree: &BPlusTree<K, V>) {
    check_node(tree.root(), tree.order(), tree.height(), 1, true);
}

fn check_node<K: Ord + Debug, V>(
    node: &Node<K, V>,
    order: usize,
    height: usize,
    depth: usize,
    is_root: bool,
) {
    match node {
        Node::Leaf(leaf) => {
            assert!(leaf.entries.len() <= order, "leaf holds more than `order` entries");
            if !is_root {
                assert!(!leaf.entries.is_empty(), "non-root leaf is empty");
            }
            assert_eq!(depth, height, "leaf sits at the wrong depth");
            for pair in leaf.entries.windows(2) {
                assert!(
                    pair[0].key < pair[1].key,
                    "leaf keys not strictly ascending: {:?} then {:?}",
                    pair[0].key,
                    pair[1].key
                );
            }
            for entry in &leaf.entries {
                assert!(!entry.values.is_empty(), "leaf entry holds no values");
            }
        }
        Node::Internal(internal) => {
            assert!(
                internal.entries.len() <= order,
                "internal node holds more than `order` entries"
            );
            assert!(!internal.entries.is_empty(), "internal node is empty");
            for pair in internal.entries.windows(2) {
                assert!(
                    pair[0].key < pair[1].key,
                    "routing keys not strictly ascending: {:?} then {:?}",
                    pair[0].key,
                    pair[1].key
                );
            }
            for entry in &internal.entries {
                assert_eq!(
                    &entry.key,
                    entry.child.min_key(),
                    "routing key is not the subtree minimum"
                );
                check_node(&entry.child, order, height, depth + 1, false);
            }
        }
    }
}

/// A row shaped like the relation scans the index accelerates: an id,
/// a low-cardinality category, and a unix timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    pub id: i64,
    pub category: u8,
    pub timestamp: i64,
}

/// Midnight 2016-01-01 UTC, the anchor for generated timestamps.
pub const SAMPLE_EPOCH: i64 = 1_451_606_400;

/// Generate `count` records with ids `1..=count`, pseudo-random
/// categories in `0..8`, and timestamps within half a year of
/// [`SAMPLE_EPOCH`]. The same seed always yields the same records.
pub fn sample_records(count: i64, seed: u64) -> Vec<SampleRecord> {
    const HALF_YEAR: i64 = 180 * 86_400;

    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|id| SampleRecord {
            id,
            category: rng.random_range(0..8),
            timestamp: SAMPLE_EPOCH + rng.random_range(-HALF_YEAR..HALF_YEAR),
        })
        .collect()
}
