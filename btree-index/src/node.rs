//! B+Tree node and entry types.
//!
//! A node is an ordered, capacity-bounded run of entries:
//! - Leaf entries: a key plus every value stored under that key
//! - Internal entries: a routing key plus the child subtree it leads to
//!
//! The routing key of an internal entry always equals the smallest key
//! reachable through its child. A node never mixes entry kinds; the
//! [`Node`] enum makes a mixed node unrepresentable.
//!
//! Capacity is a per-tree setting (the order), so it is passed into the
//! operations that need it rather than stored on every node.

/// One level of the tree.
#[derive(Debug)]
pub enum Node<K, V> {
    Leaf(LeafNode<K, V>),
    Internal(InternalNode<K, V>),
}

impl<K, V> Node<K, V> {
    /// The smallest key in this subtree.
    ///
    /// Nodes reachable from a non-empty tree are never empty, which is
    /// the only context this is called in.
    pub fn min_key(&self) -> &K {
        match self {
            Self::Leaf(leaf) => &leaf.entries[0].key,
            Self::Internal(internal) => &internal.entries[0].key,
        }
    }
}

/// A leaf node: keys with their accumulated values.
#[derive(Debug)]
pub struct LeafNode<K, V> {
    /// Entries in strictly ascending key order.
    pub entries: Vec<LeafEntry<K, V>>,
}

/// A key and every value stored under it, in insertion order.
#[derive(Debug)]
pub struct LeafEntry<K, V> {
    pub key: K,
    /// Never empty: an entry exists only once a value is stored.
    pub values: Vec<V>,
}

impl<K, V> LeafEntry<K, V> {
    /// Create an entry holding a single value.
    #[must_use]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            values: vec![value],
        }
    }
}

impl<K, V> LeafNode<K, V> {
    /// Create a new empty leaf node.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether the node is at capacity for the given order.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len() is not const-stable
    pub fn is_full(&self, order: usize) -> bool {
        self.entries.len() >= order
    }
}

impl<K, V> Default for LeafNode<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V> LeafNode<K, V> {
    /// Find the index where a key exists (`Ok`) or belongs (`Err`).
    pub fn find_index(&self, key: &K) -> Result<usize, usize> {
        self.entries.binary_search_by(|entry| entry.key.cmp(key))
    }

    /// The values stored under a key, or an empty slice when absent.
    #[must_use]
    pub fn get(&self, key: &K) -> &[V] {
        match self.find_index(key) {
            Ok(idx) => &self.entries[idx].values,
            Err(_) => &[],
        }
    }

    /// Insert a new key at its sorted position.
    ///
    /// The caller has already ruled out an existing entry for this key
    /// and made room: a full node must be split before inserting.
    pub fn insert_new(&mut self, key: K, value: V) {
        let idx = self.find_index(&key).unwrap_or_else(|idx| idx);
        self.entries.insert(idx, LeafEntry::new(key, value));
    }

    /// Split a full node, returning the split key and the new right
    /// sibling.
    ///
    /// The lower half of the entries stays in place; the sibling takes
    /// the upper half. The split key is a copy of the sibling's smallest
    /// key, ready to become the sibling's routing key in the parent.
    #[must_use]
    pub fn split(&mut self) -> (K, Self) {
        let mid = self.entries.len() / 2;
        let right_entries: Vec<LeafEntry<K, V>> = self.entries.drain(mid..).collect();
        let split_key = right_entries[0].key.clone();

        (
            split_key,
            Self {
                entries: right_entries,
            },
        )
    }
}

/// An internal node: routing keys with the subtrees they lead to.
#[derive(Debug)]
pub struct InternalNode<K, V> {
    /// Entries in strictly ascending key order, one per child.
    pub entries: Vec<InternalEntry<K, V>>,
}

/// A routing slot in an internal node.
#[derive(Debug)]
pub struct InternalEntry<K, V> {
    /// The minimum key reachable through `child`.
    pub key: K,
    pub child: Node<K, V>,
}

impl<K, V> InternalNode<K, V> {
    /// Create an internal node over the two halves of a split.
    #[must_use]
    pub fn with_children(left_key: K, left: Node<K, V>, right_key: K, right: Node<K, V>) -> Self {
        Self {
            entries: vec![
                InternalEntry {
                    key: left_key,
                    child: left,
                },
                InternalEntry {
                    key: right_key,
                    child: right,
                },
            ],
        }
    }

    /// Whether the node is at capacity for the given order.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len() is not const-stable
    pub fn is_full(&self, order: usize) -> bool {
        self.entries.len() >= order
    }
}

impl<K: Ord + Clone, V> InternalNode<K, V> {
    /// Find the index of the child to descend into for a key: the
    /// rightmost entry whose routing key does not exceed the key, or the
    /// first entry when every routing key exceeds it.
    #[must_use]
    pub fn child_index(&self, key: &K) -> usize {
        // Binary search for the first routing key > target
        match self.entries.binary_search_by(|entry| entry.key.cmp(key)) {
            Ok(idx) => idx,
            Err(0) => 0,
            Err(idx) => idx - 1,
        }
    }

    /// Splice a routing entry in at its sorted position.
    pub fn insert(&mut self, key: K, child: Node<K, V>) {
        let idx = self
            .entries
            .binary_search_by(|entry| entry.key.cmp(&key))
            .unwrap_or_else(|idx| idx);
        self.entries.insert(idx, InternalEntry { key, child });
    }

    /// Split a full node, returning the promoted key and the new right
    /// sibling.
    ///
    /// Unlike a separator-key B-tree, the promoted key is not removed:
    /// it stays in the sibling as its first routing key, and the parent
    /// receives a copy.
    #[must_use]
    pub fn split(&mut self) -> (K, Self) {
        let mid = self.entries.len() / 2;
        let right_entries: Vec<InternalEntry<K, V>> = self.entries.drain(mid..).collect();
        let split_key = right_entries[0].key.clone();

        (
            split_key,
            Self {
                entries: right_entries,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(keys: &[i32]) -> LeafNode<i32, i32> {
        let mut node = LeafNode::new();
        for &key in keys {
            node.insert_new(key, key * 10);
        }
        node
    }

    fn internal(keys: &[i32]) -> InternalNode<i32, i32> {
        let entries = keys
            .iter()
            .map(|&key| InternalEntry {
                key,
                child: Node::Leaf(leaf(&[key])),
            })
            .collect();
        InternalNode { entries }
    }

    #[test]
    fn test_leaf_insert_keeps_sorted_order() {
        let node = leaf(&[30, 10, 20]);
        let keys: Vec<i32> = node.entries.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![10, 20, 30]);
    }

    #[test]
    fn test_leaf_get() {
        let node = leaf(&[10, 20, 30]);
        assert_eq!(node.get(&20), &[200]);
        assert_eq!(node.get(&15), &[] as &[i32]);
    }

    #[test]
    fn test_leaf_find_index() {
        let node = leaf(&[10, 20, 30]);
        assert_eq!(node.find_index(&10), Ok(0));
        assert_eq!(node.find_index(&30), Ok(2));
        assert_eq!(node.find_index(&5), Err(0));
        assert_eq!(node.find_index(&25), Err(2));
        assert_eq!(node.find_index(&35), Err(3));
    }

    #[test]
    fn test_leaf_is_full() {
        let node = leaf(&[10, 20, 30, 40]);
        assert!(node.is_full(4));
        assert!(!node.is_full(5));
    }

    #[test]
    fn test_leaf_split_even() {
        let mut node = leaf(&[10, 20, 30, 40]);
        let (split_key, right) = node.split();

        assert_eq!(split_key, 30);
        assert_eq!(node.entries.len(), 2);
        assert_eq!(right.entries.len(), 2);
        assert_eq!(node.entries[0].key, 10);
        assert_eq!(right.entries[0].key, 30);
    }

    #[test]
    fn test_leaf_split_odd_gives_larger_right_half() {
        let mut node = leaf(&[10, 20, 30, 40, 50]);
        let (split_key, right) = node.split();

        assert_eq!(split_key, 30);
        assert_eq!(node.entries.len(), 2);
        assert_eq!(right.entries.len(), 3);
    }

    #[test]
    fn test_leaf_split_keeps_values_with_their_keys() {
        let mut node = leaf(&[10, 20, 30, 40]);
        let (_, right) = node.split();

        assert_eq!(node.get(&20), &[200]);
        assert_eq!(right.get(&40), &[400]);
        assert_eq!(node.get(&40), &[] as &[i32]);
    }

    #[test]
    fn test_internal_child_index() {
        let node = internal(&[10, 20, 30]);

        // Key below every routing key -> first child
        assert_eq!(node.child_index(&5), 0);

        // Key equal to a routing key -> that child
        assert_eq!(node.child_index(&10), 0);
        assert_eq!(node.child_index(&20), 1);

        // Key between routing keys -> the child on the left
        assert_eq!(node.child_index(&15), 0);
        assert_eq!(node.child_index(&25), 1);

        // Key above every routing key -> last child
        assert_eq!(node.child_index(&35), 2);
    }

    #[test]
    fn test_internal_insert_keeps_sorted_order() {
        let mut node = internal(&[10, 30]);
        node.insert(20, Node::Leaf(leaf(&[20])));

        let keys: Vec<i32> = node.entries.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![10, 20, 30]);
    }

    #[test]
    fn test_internal_split_promotes_copy_of_right_minimum() {
        let mut node = internal(&[10, 20, 30, 40]);
        let (promoted, right) = node.split();

        assert_eq!(promoted, 30);
        assert_eq!(node.entries.len(), 2);
        assert_eq!(right.entries.len(), 2);
        // The promoted key stays in the sibling as its first routing key.
        assert_eq!(right.entries[0].key, 30);
    }

    #[test]
    fn test_min_key() {
        let node = Node::Leaf(leaf(&[10, 20]));
        assert_eq!(*node.min_key(), 10);

        let node = Node::Internal(internal(&[10, 20]));
        assert_eq!(*node.min_key(), 10);
    }
}
