//! Unbalanced binary search tree.

use std::cmp::Ordering;
use std::fmt;

use super::binary_node::BinaryNode;

type Subtree<T> = Option<Box<BinaryNode<T>>>;

/// An unbalanced binary search tree.
///
/// Values smaller than a node go to its left subtree; equal or larger values
/// go to its right subtree, so duplicates are kept.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `insert`   | O(h)       |
/// | `contains` | O(h)       |
/// | `remove`   | O(h)       |
///
/// where h is the height of the tree (n in the worst case).
///
/// # Examples
///
/// ```rust
/// use cowseq::tree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for value in [3, 1, 4, 0, 2, 5] {
///     tree.insert(value);
/// }
/// assert!(tree.contains(&5));
///
/// tree.remove(&3);
/// assert!(!tree.contains(&3));
/// assert_eq!(tree.root().map(|root| *root.value()), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearchTree<T> {
    root: Subtree<T>,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns the root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<&BinaryNode<T>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value`, keeping duplicates.
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(BinaryNode::new(value)));
    }

    /// Returns `true` if an equal value is stored.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes one occurrence of `value`, if present.
    ///
    /// A node with two children takes the smallest value of its right subtree.
    pub fn remove(&mut self, value: &T) {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return,
            };
            if ordering == Ordering::Equal {
                break;
            }
            if let Some(node) = slot {
                slot = if ordering == Ordering::Less {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
        if let Some(node) = slot.take() {
            *slot = Self::splice_out(node);
        }
    }

    /// Returns what replaces `node` once its value is removed.
    fn splice_out(mut node: Box<BinaryNode<T>>) -> Subtree<T> {
        match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                node.value = Self::take_min(&mut right)?;
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        }
    }

    /// Detaches the leftmost node of `subtree` and returns its value.
    fn take_min(subtree: &mut Subtree<T>) -> Option<T> {
        let mut slot = subtree;
        while slot.as_ref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }
        let minimum = slot.take()?;
        let BinaryNode { value, right, .. } = *minimum;
        *slot = right;
        Some(value)
    }
}

impl<T> Drop for BinarySearchTree<T> {
    /// Frees the nodes one at a time, so a degenerate tree does not recurse
    /// once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<BinaryNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(formatter, "{root}"),
            None => write!(formatter, "empty tree"),
        }
    }
}
