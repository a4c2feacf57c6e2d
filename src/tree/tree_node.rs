//! General trees with any number of children per node.

use std::collections::VecDeque;

use smallvec::SmallVec;

/// Inline capacity of the explicit depth-first stack.
const DEPTH_FIRST_INLINE: usize = 16;

/// A tree node owning an ordered list of children.
///
/// # Examples
///
/// ```rust
/// use cowseq::tree::TreeNode;
///
/// let mut beverages = TreeNode::new("beverages");
/// beverages.add(TreeNode::new("hot")).add(TreeNode::new("tea"));
/// beverages.add(TreeNode::new("cold"));
///
/// let mut visited = Vec::new();
/// beverages.for_each_level_order(|node| visited.push(*node.value()));
/// assert_eq!(visited, vec!["beverages", "hot", "cold", "tea"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    value: T,
    children: Vec<Self>,
}

impl<T> TreeNode<T> {
    /// Creates a node without children.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Returns the stored value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Appends `child` and returns a mutable reference to it, so that
    /// grandchildren can be attached in place.
    pub fn add(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Visits every node, each node before its children (pre-order).
    pub fn for_each_depth_first<F: FnMut(&Self)>(&self, mut visit: F) {
        let mut pending: SmallVec<[&Self; DEPTH_FIRST_INLINE]> = SmallVec::new();
        pending.push(self);
        while let Some(node) = pending.pop() {
            visit(node);
            pending.extend(node.children.iter().rev());
        }
    }

    /// Visits every node level by level, left to right.
    pub fn for_each_level_order<F: FnMut(&Self)>(&self, mut visit: F) {
        let mut pending = VecDeque::from([self]);
        while let Some(node) = pending.pop_front() {
            visit(node);
            pending.extend(node.children.iter());
        }
    }

    /// Returns the first node, in depth-first order, holding `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn search(&self, value: &T) -> Option<&Self>
    where
        T: PartialEq,
    {
        let mut pending: SmallVec<[&Self; DEPTH_FIRST_INLINE]> = SmallVec::new();
        pending.push(self);
        while let Some(node) = pending.pop() {
            if node.value == *value {
                return Some(node);
            }
            pending.extend(node.children.iter().rev());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn beverages() -> TreeNode<&'static str> {
        let mut tree = TreeNode::new("beverages");

        let hot = tree.add(TreeNode::new("hot"));
        let tea = hot.add(TreeNode::new("tea"));
        tea.add(TreeNode::new("black"));
        tea.add(TreeNode::new("green"));
        tea.add(TreeNode::new("chai"));
        hot.add(TreeNode::new("coffee"));
        hot.add(TreeNode::new("cocoa"));

        let cold = tree.add(TreeNode::new("cold"));
        let soda = cold.add(TreeNode::new("soda"));
        soda.add(TreeNode::new("ginger ale"));
        soda.add(TreeNode::new("bitter lemon"));
        cold.add(TreeNode::new("milk"));

        tree
    }

    #[rstest]
    fn test_depth_first(beverages: TreeNode<&'static str>) {
        let mut visited = Vec::new();
        beverages.for_each_depth_first(|node| visited.push(*node.value()));
        assert_eq!(
            visited,
            vec![
                "beverages",
                "hot",
                "tea",
                "black",
                "green",
                "chai",
                "coffee",
                "cocoa",
                "cold",
                "soda",
                "ginger ale",
                "bitter lemon",
                "milk",
            ]
        );
    }

    #[rstest]
    fn test_level_order(beverages: TreeNode<&'static str>) {
        let mut visited = Vec::new();
        beverages.for_each_level_order(|node| visited.push(*node.value()));
        assert_eq!(
            visited,
            vec![
                "beverages",
                "hot",
                "cold",
                "tea",
                "coffee",
                "cocoa",
                "soda",
                "milk",
                "black",
                "green",
                "chai",
                "ginger ale",
                "bitter lemon",
            ]
        );
    }

    #[rstest]
    fn test_search(beverages: TreeNode<&'static str>) {
        let found = beverages.search(&"ginger ale");
        assert_eq!(found.map(|node| *node.value()), Some("ginger ale"));
        assert!(beverages.search(&"WKD Blue").is_none());
    }

    #[rstest]
    fn test_search_returns_subtree(beverages: TreeNode<&'static str>) {
        let soda = beverages.search(&"soda").unwrap();
        let children: Vec<_> = soda.children().iter().map(|child| *child.value()).collect();
        assert_eq!(children, vec!["ginger ale", "bitter lemon"]);
    }

    #[rstest]
    fn test_single_node() {
        let leaf = TreeNode::new(1);
        let mut count = 0;
        leaf.for_each_depth_first(|_| count += 1);
        leaf.for_each_level_order(|_| count += 1);
        assert_eq!(count, 2);
        assert!(leaf.children().is_empty());
    }
}
