//! Binary tree nodes.

use std::fmt;

/// A node of a binary tree, owning its two optional children.
///
/// # Examples
///
/// ```rust
/// use cowseq::tree::BinaryNode;
///
/// let tree = BinaryNode::new(7)
///     .with_left(BinaryNode::new(1).with_left(BinaryNode::new(0)).with_right(BinaryNode::new(5)))
///     .with_right(BinaryNode::new(9).with_left(BinaryNode::new(8)));
///
/// let mut visited = Vec::new();
/// tree.traverse_in_order(|value| visited.push(*value));
/// assert_eq!(visited, vec![0, 1, 5, 7, 8, 9]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Self>>,
    pub(crate) right: Option<Box<Self>>,
}

impl<T> BinaryNode<T> {
    /// Creates a leaf node.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the node with `child` as its left child.
    #[must_use]
    pub fn with_left(mut self, child: Self) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Returns the node with `child` as its right child.
    #[must_use]
    pub fn with_right(mut self, child: Self) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// Returns the stored value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the left child, if any.
    pub fn left_child(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right_child(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the leftmost node of this subtree.
    pub fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// Visits left subtree, node, right subtree.
    pub fn traverse_in_order<F: FnMut(&T)>(&self, mut visit: F) {
        self.in_order(&mut visit);
    }

    /// Visits node, left subtree, right subtree.
    pub fn traverse_pre_order<F: FnMut(&T)>(&self, mut visit: F) {
        self.pre_order(&mut visit);
    }

    /// Visits left subtree, right subtree, node.
    pub fn traverse_post_order<F: FnMut(&T)>(&self, mut visit: F) {
        self.post_order(&mut visit);
    }

    fn in_order<F: FnMut(&T)>(&self, visit: &mut F) {
        if let Some(left) = &self.left {
            left.in_order(visit);
        }
        visit(&self.value);
        if let Some(right) = &self.right {
            right.in_order(visit);
        }
    }

    fn pre_order<F: FnMut(&T)>(&self, visit: &mut F) {
        visit(&self.value);
        if let Some(left) = &self.left {
            left.pre_order(visit);
        }
        if let Some(right) = &self.right {
            right.pre_order(visit);
        }
    }

    fn post_order<F: FnMut(&T)>(&self, visit: &mut F) {
        if let Some(left) = &self.left {
            left.post_order(visit);
        }
        if let Some(right) = &self.right {
            right.post_order(visit);
        }
        visit(&self.value);
    }
}

impl<T: fmt::Display> BinaryNode<T> {
    /// Draws the subtree sideways: right children above, left children below.
    fn fmt_diagram(
        node: Option<&Self>,
        top: &str,
        root: &str,
        bottom: &str,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let Some(node) = node else {
            return writeln!(formatter, "{root}nil");
        };
        if node.left.is_none() && node.right.is_none() {
            return writeln!(formatter, "{root}{}", node.value);
        }
        Self::fmt_diagram(
            node.right.as_deref(),
            &format!("{top} "),
            &format!("{top}┌──"),
            &format!("{top}│ "),
            formatter,
        )?;
        writeln!(formatter, "{root}{}", node.value)?;
        Self::fmt_diagram(
            node.left.as_deref(),
            &format!("{bottom}│ "),
            &format!("{bottom}└──"),
            &format!("{bottom} "),
            formatter,
        )
    }
}

impl<T: fmt::Display> fmt::Display for BinaryNode<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_diagram(Some(self), "", "", "", formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> BinaryNode<i32> {
        BinaryNode::new(7)
            .with_left(
                BinaryNode::new(1)
                    .with_left(BinaryNode::new(0))
                    .with_right(BinaryNode::new(5)),
            )
            .with_right(BinaryNode::new(9).with_left(BinaryNode::new(8)))
    }

    fn collect(traverse: impl FnOnce(&mut dyn FnMut(&i32))) -> Vec<i32> {
        let mut visited = Vec::new();
        traverse(&mut |value: &i32| visited.push(*value));
        visited
    }

    #[rstest]
    fn test_traversal_orders() {
        let tree = sample();
        assert_eq!(
            collect(|visit| tree.traverse_in_order(visit)),
            vec![0, 1, 5, 7, 8, 9]
        );
        assert_eq!(
            collect(|visit| tree.traverse_pre_order(visit)),
            vec![7, 1, 0, 5, 9, 8]
        );
        assert_eq!(
            collect(|visit| tree.traverse_post_order(visit)),
            vec![0, 5, 1, 8, 9, 7]
        );
    }

    #[rstest]
    fn test_min_is_leftmost() {
        assert_eq!(*sample().min().value(), 0);
        assert_eq!(*BinaryNode::new(3).min().value(), 3);
    }

    #[rstest]
    fn test_children_accessors() {
        let tree = sample();
        assert_eq!(tree.left_child().map(BinaryNode::value), Some(&1));
        assert_eq!(tree.right_child().map(BinaryNode::value), Some(&9));
        assert!(tree.right_child().unwrap().right_child().is_none());
    }

    #[rstest]
    fn test_diagram() {
        let expected = [" ┌──nil", "┌──9", "│ └──8", "7", "│ ┌──5", "└──1", " └──0"];
        let rendered = sample().to_string();
        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_leaf_diagram() {
        assert_eq!(BinaryNode::new(4).to_string(), "4\n");
    }
}
