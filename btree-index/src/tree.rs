//! The B+Tree engine: construction, insertion, and exact lookup.
//!
//! The tree owns its root node exclusively and grows only through
//! [`BPlusTree::add`]. Split results propagate upward out of the
//! recursive descent; when the root itself splits, a new two-entry
//! internal root adopts both halves and the height grows by one.
//!
//! # Invariants
//!
//! - No node holds more than `order` entries
//! - Node entries are strictly ascending by key
//! - An internal entry's routing key equals the minimum key in its
//!   child subtree
//! - Every leaf sits at depth `height`
//!
//! A node may rest at exactly `order` entries; it splits only when one
//! more distinct key lands in it. A duplicate key never splits anything,
//! because it accumulates into an existing entry.

use crate::node::{InternalNode, LeafEntry, LeafNode, Node};
use crate::range::{RangePosition, scan};

/// Default maximum number of entries per node.
pub const DEFAULT_ORDER: usize = 1000;

/// Smallest usable order: a node must be able to split into two
/// non-empty halves.
pub const MIN_ORDER: usize = 2;

/// An in-memory B+Tree mapping each key to one or more values.
///
/// Duplicate keys accumulate values instead of overwriting; `find`
/// returns everything stored under a key. Range operators return
/// borrowed values, so a result cannot outlive the next mutation.
///
/// Not synchronized: callers that share a tree across threads must
/// serialize access themselves.
#[derive(Debug)]
pub struct BPlusTree<K, V> {
    root: Node<K, V>,
    order: usize,
    height: usize,
    len: usize,
}

/// Errors reported by tree construction and two-bound range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The requested order is too small for a node to ever split.
    InvalidOrder(usize),
    /// A two-bound query whose lower bound is not below its upper bound.
    InvalidRange,
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrder(order) => {
                write!(f, "order must be at least {MIN_ORDER}, got {order}")
            }
            Self::InvalidRange => {
                write!(f, "range lower bound must be strictly below the upper bound")
            }
        }
    }
}

impl std::error::Error for TreeError {}

impl<K, V> BPlusTree<K, V> {
    /// Create an empty tree with [`DEFAULT_ORDER`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: Node::Leaf(LeafNode::new()),
            order: DEFAULT_ORDER,
            height: 1,
            len: 0,
        }
    }

    /// Create an empty tree with an explicit order, the maximum number
    /// of entries per node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidOrder`] when `order` is below
    /// [`MIN_ORDER`].
    pub fn with_order(order: usize) -> Result<Self, TreeError> {
        if order < MIN_ORDER {
            return Err(TreeError::InvalidOrder(order));
        }
        tracing::debug!(order, "created tree");

        Ok(Self {
            root: Node::Leaf(LeafNode::new()),
            order,
            height: 1,
            len: 0,
        })
    }

    /// Maximum number of entries per node.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Number of node levels from root to leaf inclusive.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of stored values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root access for the structural checks in the test support module.
    #[cfg(test)]
    pub(crate) const fn root(&self) -> &Node<K, V> {
        &self.root
    }
}

impl<K, V> Default for BPlusTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Build a tree from key/value pairs, equivalent to constructing
    /// empty and calling [`BPlusTree::add`] for each pair in sequence
    /// order. There is no separate bulk-load path.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidOrder`] when `order` is below
    /// [`MIN_ORDER`].
    pub fn from_pairs<I>(pairs: I, order: usize) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut tree = Self::with_order(order)?;
        for (key, value) in pairs {
            tree.add(key, value);
        }
        Ok(tree)
    }

    /// Insert a value under a key. A key already present accumulates the
    /// new value; insertion never fails.
    pub fn add(&mut self, key: K, value: V) {
        if let Some((split_key, right)) = Self::insert_into(&mut self.root, self.order, key, value)
        {
            // The root itself split: adopt both halves under a new root.
            let left = std::mem::replace(&mut self.root, Node::Leaf(LeafNode::new()));
            let left_key = left.min_key().clone();
            self.root =
                Node::Internal(InternalNode::with_children(left_key, left, split_key, right));
            self.height += 1;
            tracing::debug!(height = self.height, "root split");
        }
        self.len += 1;
    }

    /// Recursive descent insert. Returns the split result (promoted key
    /// and new right sibling) when this node overflowed.
    fn insert_into(
        node: &mut Node<K, V>,
        order: usize,
        key: K,
        value: V,
    ) -> Option<(K, Node<K, V>)> {
        match node {
            Node::Leaf(leaf) => Self::insert_into_leaf(leaf, order, key, value),
            Node::Internal(internal) => {
                let idx = internal.child_index(&key);
                let target = &mut internal.entries[idx];
                if key < target.key {
                    // New subtree minimum: the routing key follows it down.
                    target.key = key.clone();
                }

                let (split_key, right) = Self::insert_into(&mut target.child, order, key, value)?;
                Self::splice(internal, order, split_key, right)
            }
        }
    }

    fn insert_into_leaf(
        leaf: &mut LeafNode<K, V>,
        order: usize,
        key: K,
        value: V,
    ) -> Option<(K, Node<K, V>)> {
        match leaf.find_index(&key) {
            // An existing key accumulates in place, so a full node stays
            // legal.
            Ok(idx) => {
                leaf.entries[idx].values.push(value);
                None
            }
            Err(idx) => {
                if !leaf.is_full(order) {
                    leaf.entries.insert(idx, LeafEntry::new(key, value));
                    return None;
                }

                let (split_key, mut right) = leaf.split();
                if key < split_key {
                    leaf.insert_new(key, value);
                } else {
                    right.insert_new(key, value);
                }
                Some((split_key, Node::Leaf(right)))
            }
        }
    }

    /// Splice a child's split result into an internal node, splitting
    /// this node too when it is already full.
    fn splice(
        internal: &mut InternalNode<K, V>,
        order: usize,
        key: K,
        child: Node<K, V>,
    ) -> Option<(K, Node<K, V>)> {
        if !internal.is_full(order) {
            internal.insert(key, child);
            return None;
        }

        let (promoted, mut right) = internal.split();
        if key < promoted {
            internal.insert(key, child);
        } else {
            right.insert(key, child);
        }
        Some((promoted, Node::Internal(right)))
    }

    /// Every value stored under a key, or an empty slice when absent.
    #[must_use]
    pub fn find(&self, key: &K) -> &[V] {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf.get(key),
                Node::Internal(internal) => {
                    node = &internal.entries[internal.child_index(key)].child;
                }
            }
        }
    }

    /// Values under keys strictly below `bound`.
    #[must_use]
    pub fn lt(&self, bound: &K) -> Vec<&V> {
        self.collect_range(|key| {
            if key < bound {
                RangePosition::Within
            } else {
                RangePosition::Above
            }
        })
    }

    /// Values under keys at or below `bound`.
    #[must_use]
    pub fn le(&self, bound: &K) -> Vec<&V> {
        self.collect_range(|key| {
            if key <= bound {
                RangePosition::Within
            } else {
                RangePosition::Above
            }
        })
    }

    /// Values under keys strictly above `bound`.
    #[must_use]
    pub fn gt(&self, bound: &K) -> Vec<&V> {
        self.collect_range(|key| {
            if key > bound {
                RangePosition::Within
            } else {
                RangePosition::Below
            }
        })
    }

    /// Values under keys at or above `bound`.
    #[must_use]
    pub fn ge(&self, bound: &K) -> Vec<&V> {
        self.collect_range(|key| {
            if key >= bound {
                RangePosition::Within
            } else {
                RangePosition::Below
            }
        })
    }

    /// Values under keys in `(low, high)`, both bounds exclusive.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidRange`] unless `low < high`.
    pub fn gt_and_lt(&self, low: &K, high: &K) -> Result<Vec<&V>, TreeError> {
        Self::check_bounds(low, high)?;
        Ok(self.collect_range(|key| {
            if key <= low {
                RangePosition::Below
            } else if key >= high {
                RangePosition::Above
            } else {
                RangePosition::Within
            }
        }))
    }

    /// Values under keys in `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidRange`] unless `low < high`.
    pub fn ge_and_lt(&self, low: &K, high: &K) -> Result<Vec<&V>, TreeError> {
        Self::check_bounds(low, high)?;
        Ok(self.collect_range(|key| {
            if key < low {
                RangePosition::Below
            } else if key >= high {
                RangePosition::Above
            } else {
                RangePosition::Within
            }
        }))
    }

    /// Values under keys in `(low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidRange`] unless `low < high`.
    pub fn gt_and_le(&self, low: &K, high: &K) -> Result<Vec<&V>, TreeError> {
        Self::check_bounds(low, high)?;
        Ok(self.collect_range(|key| {
            if key <= low {
                RangePosition::Below
            } else if key > high {
                RangePosition::Above
            } else {
                RangePosition::Within
            }
        }))
    }

    /// Values under keys in `[low, high]`, both bounds inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidRange`] unless `low < high`.
    pub fn ge_and_le(&self, low: &K, high: &K) -> Result<Vec<&V>, TreeError> {
        Self::check_bounds(low, high)?;
        Ok(self.collect_range(|key| {
            if key < low {
                RangePosition::Below
            } else if key > high {
                RangePosition::Above
            } else {
                RangePosition::Within
            }
        }))
    }

    /// Two-bound queries require `low < high`, checked before any
    /// traversal (even on an empty tree).
    fn check_bounds(low: &K, high: &K) -> Result<(), TreeError> {
        if low < high {
            Ok(())
        } else {
            Err(TreeError::InvalidRange)
        }
    }

    /// Run one classified scan over the whole tree.
    fn collect_range<F>(&self, classify: F) -> Vec<&V>
    where
        F: Fn(&K) -> RangePosition,
    {
        let mut results = Vec::new();
        if self.is_empty() {
            return results;
        }
        scan(&self.root, &classify, &mut results);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: Vec<&i32>) -> Vec<i32> {
        let mut owned: Vec<i32> = values.into_iter().copied().collect();
        owned.sort_unstable();
        owned
    }

    #[test]
    fn test_new_uses_default_order() {
        let tree: BPlusTree<i32, i32> = BPlusTree::new();
        assert_eq!(tree.order(), DEFAULT_ORDER);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_with_order_rejects_small_orders() {
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

    #[test]
    fn test_add_and_find() {
        let mut tree = BPlusTree::with_order(4).expect("valid order");
        tree.add(2, 20);
        tree.add(1, 10);
        tree.add(3, 30);

        assert_eq!(tree.find(&1), &[10]);
        assert_eq!(tree.find(&2), &[20]);
        assert_eq!(tree.find(&3), &[30]);
        assert!(tree.find(&4).is_empty());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_duplicate_keys_accumulate() {
        let mut tree = BPlusTree::with_order(4).expect("valid order");
        tree.add(10, 100);
        tree.add(10, 200);

        assert_eq!(tree.find(&10), &[100, 200]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_root_split_grows_height() {
        let mut tree = BPlusTree::with_order(2).expect("valid order");
        tree.add(1, 1);
        tree.add(2, 2);
        assert_eq!(tree.height(), 1);

        // The root leaf rests at capacity; the next distinct key splits it.
        tree.add(3, 3);
        assert_eq!(tree.height(), 2);

        assert_eq!(tree.find(&1), &[1]);
        assert_eq!(tree.find(&2), &[2]);
        assert_eq!(tree.find(&3), &[3]);
    }

    #[test]
    fn test_many_inserts_stay_searchable() {
        let mut tree = BPlusTree::with_order(4).expect("valid order");
        let n = 500;
        for i in 0..n {
            tree.add(i, i * 2);
        }

        assert_eq!(tree.len(), 500);
        assert!(tree.height() > 1);
        for i in 0..n {
            assert_eq!(tree.find(&i), &[i * 2], "mismatch at {i}");
        }
    }

    #[test]
    fn test_new_minimum_key_stays_reachable() {
        let mut tree = BPlusTree::with_order(2).expect("valid order");
        for i in [5, 6, 7, 8, 9] {
            tree.add(i, i);
        }

        // Inserting below the current minimum must update routing keys on
        // the way down, or later scans would prune the leftmost subtree.
        tree.add(0, 0);
        assert_eq!(tree.find(&0), &[0]);
        assert_eq!(sorted(tree.lt(&5)), vec![0]);
    }

    #[test]
    fn test_from_pairs_inserts_in_sequence_order() {
        let tree = BPlusTree::from_pairs([(2, "b"), (1, "a"), (1, "aa")], 4).expect("valid order");

        assert_eq!(tree.find(&1), &["a", "aa"]);
        assert_eq!(tree.find(&2), &["b"]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.order(), 4);
    }

    #[test]
    fn test_from_pairs_rejects_invalid_order() {
        let result = BPlusTree::from_pairs([(1, 1)], 1);
        assert_eq!(result.err(), Some(TreeError::InvalidOrder(1)));
    }

    #[test]
    fn test_mixed_key_types_with_unconstrained_values() {
        let mut tree: BPlusTree<&str, Vec<u8>> = BPlusTree::with_order(4).expect("valid order");
        tree.add("b", vec![2]);
        tree.add("a", vec![1]);
        tree.add("a", vec![1, 1]);

        assert_eq!(tree.find(&"a"), &[vec![1], vec![1, 1]]);
        assert_eq!(tree.find(&"b"), &[vec![2]]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_single_bound_operators() {
        let mut tree = BPlusTree::with_order(4).expect("valid order");
        for key in [1, 3, 5, 7] {
            tree.add(key, key);
        }

        assert_eq!(sorted(tree.lt(&5)), vec![1, 3]);
        assert_eq!(sorted(tree.le(&5)), vec![1, 3, 5]);
        assert_eq!(sorted(tree.gt(&5)), vec![7]);
        assert_eq!(sorted(tree.ge(&5)), vec![5, 7]);
    }

    #[test]
    fn test_two_bound_operators() {
        let mut tree = BPlusTree::with_order(4).expect("valid order");
        for key in [1, 3, 5, 7] {
            tree.add(key, key);
        }

        assert_eq!(sorted(tree.gt_and_lt(&1, &7).expect("bounds")), vec![3, 5]);
        assert_eq!(
            sorted(tree.ge_and_lt(&1, &7).expect("bounds")),
            vec![1, 3, 5]
        );
        assert_eq!(
            sorted(tree.gt_and_le(&1, &7).expect("bounds")),
            vec![3, 5, 7]
        );
        assert_eq!(
            sorted(tree.ge_and_le(&1, &7).expect("bounds")),
            vec![1, 3, 5, 7]
        );
    }

    #[test]
    fn test_two_bound_operators_reject_bad_bounds() {
        let tree: BPlusTree<i32, i32> = BPlusTree::new();
        assert_eq!(tree.gt_and_lt(&3, &3), Err(TreeError::InvalidRange));
        assert_eq!(tree.ge_and_le(&4, &3), Err(TreeError::InvalidRange));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TreeError::InvalidOrder(1).to_string(),
            "order must be at least 2, got 1"
        );
        assert_eq!(
            TreeError::InvalidRange.to_string(),
            "range lower bound must be strictly below the upper bound"
        );
    }
}
