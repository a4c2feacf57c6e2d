//! Chain cells and the public node handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A shared, mutable link to a node.
pub(crate) type NodeLink<T> = Rc<RefCell<Node<T>>>;

/// An optional link; `None` terminates a chain.
pub(crate) type Link<T> = Option<NodeLink<T>>;

/// A singly linked cell.
///
/// Nodes carry no invariants of their own; every rule about who may
/// rewrite `next` is enforced by [`LinkedSequence`](super::LinkedSequence).
pub(crate) struct Node<T> {
    /// The element stored in this node.
    pub(crate) value: T,
    /// The successor, if any.
    pub(crate) next: Link<T>,
    /// Set once the node has been unlinked from its chain.
    pub(crate) detached: bool,
}

impl<T> Node<T> {
    /// Allocates a new node.
    pub(crate) fn new(value: T, next: Link<T>) -> NodeLink<T> {
        Rc::new(RefCell::new(Self {
            value,
            next,
            detached: false,
        }))
    }
}

/// Marks `node` as no longer part of any chain, so handles to it are refused.
pub(crate) fn detach<T>(node: &NodeLink<T>) {
    let mut cell = node.borrow_mut();
    cell.next = None;
    cell.detached = true;
}

/// Returns the successor link of `node`.
pub(crate) fn successor<T>(node: &NodeLink<T>) -> Link<T> {
    node.borrow().next.clone()
}

/// Releases a chain front to back without recursing once per node.
///
/// Stops at the first node that is still referenced from elsewhere; that
/// owner becomes responsible for the rest of the chain.
pub(crate) fn unlink_chain<T>(mut link: Link<T>) {
    while let Some(node) = link {
        link = match Rc::try_unwrap(node) {
            Ok(cell) => cell.into_inner().next,
            Err(_) => None,
        };
    }
}

/// Writes `v1 -> v2 -> ... -> vn` for the chain starting at `start`.
pub(crate) fn fmt_chain<T: fmt::Display>(
    start: &NodeLink<T>,
    formatter: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(formatter, "{}", start.borrow().value)?;
    let mut current = successor(start);
    while let Some(node) = current {
        write!(formatter, " -> {}", node.borrow().value)?;
        current = successor(&node);
    }
    Ok(())
}

/// A read-only handle to a node of a [`LinkedSequence`](super::LinkedSequence).
///
/// Handles are returned by [`node_at`](super::LinkedSequence::node_at) and
/// [`insert_after`](super::LinkedSequence::insert_after), and name the anchor
/// of [`insert_after`](super::LinkedSequence::insert_after) and
/// [`remove_after`](super::LinkedSequence::remove_after).
///
/// A handle remembers which chain it was taken from. When the sequence later
/// duplicates a shared chain, the sequence translates the handle to the
/// matching node of its own copy; a handle taken from an unrelated sequence is
/// rejected.
///
/// Handles never count as owners of a chain: holding one does not force a
/// copy on the next mutation.
///
/// # Examples
///
/// ```rust
/// use cowseq::sequence::LinkedSequence;
///
/// let sequence: LinkedSequence<i32> = (1..=3).collect();
/// let node = sequence.node_at(1).unwrap();
/// assert_eq!(node.value(), 2);
/// assert_eq!(node.to_string(), "2 -> 3");
/// ```
pub struct NodeRef<T> {
    pub(crate) node: NodeLink<T>,
    chain: Weak<()>,
}

impl<T> NodeRef<T> {
    pub(crate) fn new(node: NodeLink<T>, owners: &Rc<()>) -> Self {
        Self {
            node,
            chain: Rc::downgrade(owners),
        }
    }

    /// Returns a copy of the stored value.
    #[must_use]
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.node.borrow().value.clone()
    }

    /// Calls `function` with a reference to the stored value.
    ///
    /// # Panics
    ///
    /// Panics if `function` mutates the sequence that owns this node.
    pub fn with_value<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        function(&self.node.borrow().value)
    }

    /// Returns a handle to the successor node, if any.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        successor(&self.node).map(|node| Self {
            node,
            chain: self.chain.clone(),
        })
    }

    /// Returns `true` if both handles denote the same node.
    ///
    /// This is identity, not value equality.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Returns `true` if the handle was taken from the chain owned by `owners`.
    pub(crate) fn belongs_to(&self, owners: &Rc<()>) -> bool {
        Weak::ptr_eq(&self.chain, &Rc::downgrade(owners))
    }

    /// Returns `true` if the node has been removed from its chain.
    pub(crate) fn is_detached(&self) -> bool {
        self.node.borrow().detached
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
            chain: self.chain.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("NodeRef")
            .field(&self.node.borrow().value)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_chain(&self.node, formatter)
    }
}
