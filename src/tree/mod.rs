//! Single-owner tree structures.
//!
//! - [`BinaryNode`]: a binary tree node with in/pre/post-order traversal
//! - [`BinarySearchTree`]: an unbalanced ordered tree over [`BinaryNode`]
//! - [`TreeNode`]: a general tree with depth-first and level-order traversal
//!
//! Nodes own their children directly; none of these structures share nodes,
//! so no copy-on-write is involved.
//!
//! # Examples
//!
//! ```rust
//! use cowseq::tree::BinarySearchTree;
//!
//! let tree: BinarySearchTree<i32> = [3, 1, 4].into_iter().collect();
//! assert_eq!(tree.to_string(), "┌──4\n3\n└──1\n");
//! ```

mod binary_node;
mod binary_search_tree;
mod tree_node;

pub use binary_node::BinaryNode;
pub use binary_search_tree::BinarySearchTree;
pub use tree_node::TreeNode;
