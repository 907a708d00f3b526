//! An in-memory B+Tree index over ordered keys.
//!
//! [`BPlusTree`] maps keys to one or more values: adding an existing key
//! accumulates another value instead of overwriting. Exact lookup walks
//! one root-to-leaf path; the range operators (`lt`, `le`, `gt`, `ge`
//! and the four two-bound forms) classify keys against the bounds and
//! prune whole subtrees while collecting.
//!
//! # Structure
//!
//! - `node`: leaf and internal nodes, their entries, and node splitting
//! - `tree`: the tree itself, insertion with upward split propagation,
//!   and the public query surface
//! - `range`: the classified scan the range operators share
//!
//! # Usage
//!
//! ```
//! use btree_index::BPlusTree;
//!
//! let mut index = BPlusTree::new();
//! index.add("b", 2);
//! index.add("a", 1);
//! index.add("a", 10);
//!
//! assert_eq!(index.find(&"a"), &[1, 10]);
//! assert_eq!(index.lt(&"b"), vec![&1, &10]);
//! ```

mod e2e_tests;
mod node;
mod range;
mod testing;
mod tree;

pub use tree::{BPlusTree, DEFAULT_ORDER, MIN_ORDER, TreeError};
