//! Classified range scans over the node tree.
//!
//! Every range operator reduces to one shape: a classifier maps each key
//! to a [`RangePosition`], and [`scan`] walks the tree collecting the
//! values of every `Within` key. Because keys are sorted, a single
//! classification can also prune whole regions:
//!
//! - a leaf is scanned from its highest key downward, so a `Below`
//!   verdict ends the leaf (everything further left is below the range)
//! - internal entries are visited from lowest routing key upward, and an
//!   `Above` routing key ends the node (that subtree's minimum already
//!   sits past the range, as does everything to its right)
//!
//! Result order is unspecified; callers that need sorted output sort it
//! themselves.

use crate::node::Node;

/// Where a key falls relative to the range being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePosition {
    /// Before the range: every smaller key is out as well.
    Below,
    /// Inside the range: collect this key's values.
    Within,
    /// Past the range: every larger key is out as well.
    Above,
}

/// Collect references to every value whose key classifies as `Within`.
///
/// The classifier must be monotone over the key order (`Below` keys,
/// then `Within`, then `Above`); the pruning rules are unsound for any
/// other shape.
pub fn scan<'t, K, V, F>(node: &'t Node<K, V>, classify: &F, results: &mut Vec<&'t V>)
where
    F: Fn(&K) -> RangePosition,
{
    match node {
        Node::Leaf(leaf) => {
            for entry in leaf.entries.iter().rev() {
                match classify(&entry.key) {
                    RangePosition::Within => results.extend(entry.values.iter()),
                    RangePosition::Below => break,
                    RangePosition::Above => {}
                }
            }
        }
        Node::Internal(internal) => {
            for entry in &internal.entries {
                if classify(&entry.key) == RangePosition::Above {
                    break;
                }
                scan(&entry.child, classify, results);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{InternalEntry, InternalNode, LeafEntry, LeafNode};

    fn leaf(keys: &[i32]) -> Node<i32, i32> {
        let entries = keys
            .iter()
            .map(|&key| LeafEntry {
                key,
                values: vec![key * 10],
            })
            .collect();
        Node::Leaf(LeafNode { entries })
    }

    fn collected<F: Fn(&i32) -> RangePosition>(node: &Node<i32, i32>, classify: F) -> Vec<i32> {
        let mut results = Vec::new();
        scan(node, &classify, &mut results);
        results.into_iter().copied().collect()
    }

    #[test]
    fn test_leaf_scans_highest_key_first() {
        let node = leaf(&[1, 2, 3]);
        let results = collected(&node, |_| RangePosition::Within);
        assert_eq!(results, vec![30, 20, 10]);
    }

    #[test]
    fn test_leaf_stops_at_first_below() {
        let node = leaf(&[1, 2, 3]);
        let results = collected(&node, |&key| {
            if key < 2 {
                RangePosition::Below
            } else {
                RangePosition::Within
            }
        });
        assert_eq!(results, vec![30, 20]);
    }

    #[test]
    fn test_leaf_skips_above_keys() {
        let node = leaf(&[1, 2, 3]);
        let results = collected(&node, |&key| {
            if key > 2 {
                RangePosition::Above
            } else {
                RangePosition::Within
            }
        });
        assert_eq!(results, vec![20, 10]);
    }

    #[test]
    fn test_leaf_collects_every_value_of_a_key() {
        let node = Node::Leaf(LeafNode {
            entries: vec![LeafEntry {
                key: 10,
                values: vec![100, 200],
            }],
        });
        let results = collected(&node, |_| RangePosition::Within);
        assert_eq!(results, vec![100, 200]);
    }

    #[test]
    fn test_internal_stops_at_first_above_routing_key() {
        let node = Node::Internal(InternalNode {
            entries: vec![
                InternalEntry {
                    key: 1,
                    child: leaf(&[1, 2]),
                },
                InternalEntry {
                    key: 5,
                    child: leaf(&[5, 6]),
                },
                InternalEntry {
                    key: 9,
                    child: leaf(&[9]),
                },
            ],
        });

        // Keys past 6 classify as above, so the third subtree is never
        // visited at all.
        let mut results = collected(&node, |&key| {
            if key > 6 {
                RangePosition::Above
            } else {
                RangePosition::Within
            }
        });
        results.sort_unstable();
        assert_eq!(results, vec![10, 20, 50, 60]);
    }

    #[test]
    fn test_internal_descends_below_subtrees_without_collecting() {
        let node = Node::Internal(InternalNode {
            entries: vec![
                InternalEntry {
                    key: 1,
                    child: leaf(&[1, 2]),
                },
                InternalEntry {
                    key: 5,
                    child: leaf(&[5, 6]),
                },
            ],
        });

        let results = collected(&node, |&key| {
            if key < 5 {
                RangePosition::Below
            } else {
                RangePosition::Within
            }
        });
        assert_eq!(results, vec![60, 50]);
    }
}
