//! Opaque traversal cursors over a node chain.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::node::{Link, NodeRef, successor};

/// A position in a [`LinkedSequence`](super::LinkedSequence).
///
/// A position references one node of the chain, or nothing at all for the
/// end sentinel ("one past the last element"). Positions are obtained through
/// the [`Collection`](crate::collection::Collection) implementation of the
/// sequence and never expose a way to mutate the chain.
///
/// Two positions are equal iff they reference the same node, or are both the
/// end sentinel. Position `a` precedes position `b` iff `b` is reachable from
/// `a` by following successors; the end sentinel follows every node. Positions
/// on unrelated chains are unordered.
///
/// A position taken before the sequence duplicated a shared chain keeps
/// pointing into the old chain. It stays memory safe but no longer describes
/// the sequence.
///
/// # Examples
///
/// ```rust
/// use cowseq::collection::Collection;
/// use cowseq::sequence::LinkedSequence;
///
/// let sequence: LinkedSequence<i32> = (1..=3).collect();
/// let start = sequence.start_position();
/// let second = sequence.advance(&start);
///
/// assert!(start < second);
/// assert!(second < sequence.end_position());
/// assert_eq!(sequence.value_at(&second), Some(2));
/// ```
pub struct SequencePosition<T> {
    node: Link<T>,
}

impl<T> SequencePosition<T> {
    pub(crate) const fn new(node: Link<T>) -> Self {
        Self { node }
    }

    /// Returns the end sentinel.
    #[must_use]
    pub const fn end() -> Self {
        Self { node: None }
    }

    /// Returns `true` if this is the end sentinel.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The position of the successor node; the end sentinel stays put.
    pub(crate) fn successor(&self) -> Self {
        Self::new(self.node.as_ref().and_then(successor))
    }

    /// The referenced value, `None` for the end sentinel.
    pub(crate) fn value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.node.as_ref().map(|node| node.borrow().value.clone())
    }

    /// Returns `true` if `other` is reachable from `self` in one or more steps.
    fn reaches(&self, other: &Self) -> bool {
        let Some(start) = &self.node else {
            return false;
        };
        let mut current = successor(start);
        while let Some(node) = current {
            if other
                .node
                .as_ref()
                .is_some_and(|target| Rc::ptr_eq(&node, target))
            {
                return true;
            }
            current = successor(&node);
        }
        other.node.is_none()
    }
}

impl<T> From<&NodeRef<T>> for SequencePosition<T> {
    fn from(node: &NodeRef<T>) -> Self {
        Self::new(Some(Rc::clone(&node.node)))
    }
}

impl<T> Clone for SequencePosition<T> {
    fn clone(&self) -> Self {
        Self::new(self.node.clone())
    }
}

impl<T> PartialEq for SequencePosition<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for SequencePosition<T> {}

impl<T> PartialOrd for SequencePosition<T> {
    /// Orders positions by reachability.
    ///
    /// # Complexity
    ///
    /// O(n), a linear scan along the chain
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.reaches(other) {
            Some(Ordering::Less)
        } else if other.reaches(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SequencePosition<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            Some(node) => formatter
                .debug_tuple("SequencePosition")
                .field(&node.borrow().value)
                .finish(),
            None => write!(formatter, "SequencePosition(<end>)"),
        }
    }
}
