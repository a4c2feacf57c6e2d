//! Copy-on-write singly linked sequence.
//!
//! This module provides [`LinkedSequence`], a singly linked list with a tail
//! link that behaves as an independent value even though clones share their
//! node chain.
//!
//! # Copy-on-Write
//!
//! Cloning a sequence is O(1): the clone shares the whole chain. Every
//! mutating method first runs the copy-on-write gate. If the chain is shared
//! with another sequence, the gate duplicates every node from head to tail and
//! repoints this sequence at the copy before the edit is applied:
//!
//! ```text
//! a = [1 -> 2 -> 3]          a ─┐
//! b = a.clone()                 ├─> 1 -> 2 -> 3     (shared, no copy yet)
//!                            b ─┘
//! b.push(0)                  a ───> 1 -> 2 -> 3
//!                            b ───> 0 -> 1' -> 2' -> 3'
//! ```
//!
//! Sharing is tracked by an ownership token that every clone of the sequence
//! holds. Node handles and positions do not hold the token, so they never
//! trigger a copy by themselves.
//!
//! # Examples
//!
//! ```rust
//! use cowseq::sequence::LinkedSequence;
//!
//! let mut original = LinkedSequence::new();
//! original.append(1);
//! original.append(2);
//!
//! let mut copy = original.clone();
//! copy.append(3);
//!
//! assert_eq!(original.to_string(), "1 -> 2");
//! assert_eq!(copy.to_string(), "1 -> 2 -> 3");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use log::{debug, trace};
use static_assertions::assert_not_impl_any;

use super::node::{Link, Node, NodeLink, NodeRef, detach, fmt_chain, successor, unlink_chain};
use super::position::SequencePosition;
use crate::collection::{Collection, Values};

/// Outcome of the translating copy-on-write gate.
enum Ownership<T> {
    /// The chain was not shared; no copy happened.
    Exclusive,
    /// The chain was duplicated. Carries the copy of the requested node, or
    /// `None` if that node was not part of the chain.
    Copied(Option<NodeLink<T>>),
}

/// A singly linked sequence with value semantics.
///
/// # Time Complexity
///
/// | Operation      | Complexity           |
/// |----------------|----------------------|
/// | `clone`        | O(1)                 |
/// | `push`         | O(1) + copy          |
/// | `append`       | O(1) + copy          |
/// | `insert_after` | O(1) + copy          |
/// | `pop`          | O(1) + copy          |
/// | `remove_after` | O(1) + copy          |
/// | `remove_last`  | O(n)                 |
/// | `node_at`      | O(index)             |
/// | `len`          | O(n)                 |
///
/// "copy" is the O(n) duplication paid by the first mutation after the chain
/// became shared.
///
/// # Examples
///
/// ```rust
/// use cowseq::sequence::LinkedSequence;
///
/// let mut sequence = LinkedSequence::new();
/// sequence.push(3);
/// sequence.push(2);
/// sequence.push(1);
/// assert_eq!(sequence.to_string(), "1 -> 2 -> 3");
/// ```
pub struct LinkedSequence<T> {
    /// First node of the chain.
    head: Link<T>,
    /// Last node of the chain.
    tail: Link<T>,
    /// Ownership token; its strong count is the number of sequences sharing
    /// the chain.
    owners: Rc<()>,
}

assert_not_impl_any!(LinkedSequence<i32>: Send, Sync);
assert_not_impl_any!(NodeRef<i32>: Send, Sync);
assert_not_impl_any!(SequencePosition<i32>: Send, Sync);

impl<T> LinkedSequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let sequence: LinkedSequence<i32> = LinkedSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            owners: Rc::new(()),
        }
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(n), the chain is walked
    #[must_use]
    pub fn len(&self) -> usize {
        let mut length = 0;
        let mut current = self.head.clone();
        while let Some(node) = current {
            length += 1;
            current = successor(&node);
        }
        length
    }

    /// Returns `true` if another sequence currently shares this chain, i.e.
    /// the next mutation will duplicate it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let mut sequence: LinkedSequence<i32> = (1..=3).collect();
    /// let copy = sequence.clone();
    /// assert!(sequence.is_shared());
    ///
    /// sequence.push(0);
    /// assert!(!sequence.is_shared());
    /// assert!(!copy.is_shared());
    /// ```
    #[must_use]
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.owners) > 1
    }

    /// Returns a handle to the node at `index`, or `None` past the end.
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let sequence: LinkedSequence<i32> = (1..=3).collect();
    /// assert_eq!(sequence.node_at(2).map(|node| node.value()), Some(3));
    /// assert!(sequence.node_at(3).is_none());
    /// ```
    #[must_use]
    pub fn node_at(&self, index: usize) -> Option<NodeRef<T>> {
        let mut current = self.head.clone();
        for _ in 0..index {
            current = successor(current.as_ref()?);
        }
        current.map(|node| self.handle(node))
    }

    /// Returns a copy of the last value.
    ///
    /// # Complexity
    ///
    /// O(1), the tail link is maintained
    #[must_use]
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.tail.as_ref().map(|node| node.borrow().value.clone())
    }

    /// Removes every element.
    ///
    /// Clearing never copies: a shared chain is simply released and the
    /// sequence starts over with a fresh ownership token.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn handle(&self, node: NodeLink<T>) -> NodeRef<T> {
        NodeRef::new(node, &self.owners)
    }

    fn is_tail(&self, node: &NodeLink<T>) -> bool {
        self.tail.as_ref().is_some_and(|tail| Rc::ptr_eq(tail, node))
    }

    /// Takes the value out of a node that has just been unlinked.
    ///
    /// Stale handles or positions may still reference the node, in which case
    /// the value is cloned instead of moved.
    fn into_value(node: NodeLink<T>) -> T
    where
        T: Clone,
    {
        Rc::try_unwrap(node).map_or_else(
            |shared| shared.borrow().value.clone(),
            |cell| cell.into_inner().value,
        )
    }
}

impl<T: Clone> LinkedSequence<T> {
    // =========================================================================
    // Copy-on-Write Gate
    // =========================================================================

    /// Duplicates the chain if another sequence shares it.
    fn copy_nodes(&mut self) {
        if self.is_shared() {
            let _ = self.duplicate_chain(None);
        }
    }

    /// Duplicates the chain if it is shared and reports where `node` landed.
    fn copy_nodes_translating(&mut self, node: &NodeLink<T>) -> Ownership<T> {
        if self.is_shared() {
            Ownership::Copied(self.duplicate_chain(Some(node)))
        } else {
            Ownership::Exclusive
        }
    }

    /// Replaces the chain with a private copy of every node from head to tail.
    ///
    /// Returns the copy of `target` when `target` is part of the chain.
    fn duplicate_chain(&mut self, target: Option<&NodeLink<T>>) -> Option<NodeLink<T>> {
        let mut translated = None;
        let mut head: Link<T> = None;
        let mut tail: Link<T> = None;
        let mut duplicated = 0_usize;

        let mut source = self.head.clone();
        while let Some(original) = source {
            let copy = Node::new(original.borrow().value.clone(), None);
            if target.is_some_and(|target| Rc::ptr_eq(target, &original)) {
                translated = Some(Rc::clone(&copy));
            }
            match &tail {
                Some(last) => last.borrow_mut().next = Some(Rc::clone(&copy)),
                None => head = Some(Rc::clone(&copy)),
            }
            tail = Some(copy);
            duplicated += 1;
            source = successor(&original);
        }

        if duplicated > 0 {
            debug!("copy-on-write: duplicated {duplicated} shared nodes");
        }
        self.head = head;
        self.tail = tail;
        self.owners = Rc::new(());
        translated
    }

    /// Runs the translating gate for a caller-supplied handle and returns the
    /// node to edit in this sequence's own chain.
    fn resolve(&mut self, node: &NodeRef<T>) -> Option<NodeLink<T>> {
        if !node.belongs_to(&self.owners) {
            trace!("rejected a node handle that does not belong to this sequence");
            return None;
        }
        match self.copy_nodes_translating(&node.node) {
            Ownership::Exclusive if node.is_detached() => {
                trace!("rejected a handle to a node that was already removed");
                None
            }
            Ownership::Exclusive => Some(Rc::clone(&node.node)),
            Ownership::Copied(translated) => {
                if translated.is_none() {
                    trace!("node handle no longer part of the duplicated chain");
                }
                translated
            }
        }
    }

    // =========================================================================
    // Mutating API
    // =========================================================================

    /// Inserts `value` at the front.
    ///
    /// # Complexity
    ///
    /// O(1), plus the copy if the chain is shared
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let mut sequence = LinkedSequence::new();
    /// sequence.push(2);
    /// sequence.push(1);
    /// assert_eq!(sequence.to_string(), "1 -> 2");
    /// ```
    pub fn push(&mut self, value: T) {
        self.copy_nodes();
        let node = Node::new(value, self.head.take());
        if self.tail.is_none() {
            self.tail = Some(Rc::clone(&node));
        }
        self.head = Some(node);
    }

    /// Inserts `value` at the back.
    ///
    /// # Complexity
    ///
    /// O(1), plus the copy if the chain is shared
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let mut sequence = LinkedSequence::new();
    /// sequence.append(1);
    /// sequence.append(2);
    /// assert_eq!(sequence.last(), Some(2));
    /// ```
    pub fn append(&mut self, value: T) {
        self.copy_nodes();
        let _ = self.link_last(value);
    }

    /// Links a new tail node; the gate must already have run.
    fn link_last(&mut self, value: T) -> NodeLink<T> {
        let node = Node::new(value, None);
        match self.tail.replace(Rc::clone(&node)) {
            Some(last) => last.borrow_mut().next = Some(Rc::clone(&node)),
            None => self.head = Some(Rc::clone(&node)),
        }
        node
    }

    /// Inserts `value` right after `node` and returns a handle to the new node.
    ///
    /// Inserting after the current tail is exactly [`append`](Self::append).
    /// If the chain is shared it is duplicated first and `node` is translated
    /// to its copy, so the returned handle always lives in this sequence's
    /// own chain.
    ///
    /// Returns `None`, leaving the sequence untouched, if `node` was taken
    /// from another sequence or has already been removed from it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let mut sequence: LinkedSequence<i32> = (1..=3).collect();
    /// let mut anchor = sequence.node_at(1).unwrap();
    /// for _ in 0..2 {
    ///     anchor = sequence.insert_after(-1, &anchor).unwrap();
    /// }
    /// assert_eq!(sequence.to_string(), "1 -> 2 -> -1 -> -1 -> 3");
    /// ```
    pub fn insert_after(&mut self, value: T, node: &NodeRef<T>) -> Option<NodeRef<T>> {
        let anchor = self.resolve(node)?;
        if self.is_tail(&anchor) {
            let inserted = self.link_last(value);
            return Some(self.handle(inserted));
        }
        let inserted = {
            let mut anchor_node = anchor.borrow_mut();
            let inserted = Node::new(value, anchor_node.next.take());
            anchor_node.next = Some(Rc::clone(&inserted));
            inserted
        };
        Some(self.handle(inserted))
    }

    /// Removes and returns the first value, or `None` if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let mut sequence: LinkedSequence<i32> = (1..=2).collect();
    /// assert_eq!(sequence.pop(), Some(1));
    /// assert_eq!(sequence.pop(), Some(2));
    /// assert_eq!(sequence.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.copy_nodes();
        let head = self.head.take()?;
        self.head = head.borrow_mut().next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        detach(&head);
        Some(Self::into_value(head))
    }

    /// Removes and returns the last value, or `None` if empty.
    ///
    /// # Complexity
    ///
    /// O(n): without backward links the node before the tail has to be found
    /// by walking from the head
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let mut sequence: LinkedSequence<i32> = (1..=3).collect();
    /// assert_eq!(sequence.remove_last(), Some(3));
    /// assert_eq!(sequence.last(), Some(2));
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        self.copy_nodes();
        let head = self.head.clone()?;
        if head.borrow().next.is_none() {
            drop(head);
            return self.pop();
        }

        let mut previous = head;
        while let Some(next) = successor(&previous).filter(|next| next.borrow().next.is_some()) {
            previous = next;
        }
        let last = previous.borrow_mut().next.take()?;
        self.tail = Some(previous);
        detach(&last);
        Some(Self::into_value(last))
    }

    /// Removes and returns the value right after `node`.
    ///
    /// Returns `None` if `node` has no successor, was taken from another
    /// sequence, or has already been removed. If the removed node was
    /// the tail, `node` becomes the tail.
    ///
    /// A handle taken before this sequence was cloned is translated to the
    /// matching node of the private copy, so the copy loses the corresponding
    /// element while the other sequence keeps it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::LinkedSequence;
    ///
    /// let original: LinkedSequence<i32> = (1..=3).collect();
    /// let first = original.node_at(0).unwrap();
    ///
    /// let mut copy = original.clone();
    /// assert_eq!(copy.remove_after(&first), Some(2));
    ///
    /// assert_eq!(copy.to_string(), "1 -> 3");
    /// assert_eq!(original.to_string(), "1 -> 2 -> 3");
    /// ```
    pub fn remove_after(&mut self, node: &NodeRef<T>) -> Option<T> {
        let anchor = self.resolve(node)?;
        let removed = {
            let mut anchor_node = anchor.borrow_mut();
            let removed = anchor_node.next.take()?;
            anchor_node.next = removed.borrow_mut().next.take();
            removed
        };
        if self.is_tail(&removed) {
            self.tail = Some(anchor);
        }
        detach(&removed);
        Some(Self::into_value(removed))
    }

    /// Returns an iterator over copies of the values, front to back.
    #[inline]
    pub fn iter(&self) -> Values<'_, Self> {
        self.values()
    }
}

// =============================================================================
// Collection Implementation
// =============================================================================

impl<T: Clone> Collection for LinkedSequence<T> {
    type Element = T;
    type Position = SequencePosition<T>;

    fn start_position(&self) -> SequencePosition<T> {
        SequencePosition::new(self.head.clone())
    }

    fn end_position(&self) -> SequencePosition<T> {
        SequencePosition::end()
    }

    fn advance(&self, position: &SequencePosition<T>) -> SequencePosition<T> {
        position.successor()
    }

    fn value_at(&self, position: &SequencePosition<T>) -> Option<T> {
        position.value()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An owning iterator over the values of a [`LinkedSequence`].
///
/// Values are moved out when the chain is exclusively owned and cloned
/// otherwise.
pub struct IntoValues<T> {
    sequence: LinkedSequence<T>,
}

impl<T: Clone> Iterator for IntoValues<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for LinkedSequence<T> {
    /// Shares the chain; no node is copied until one side mutates.
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            tail: self.tail.clone(),
            owners: Rc::clone(&self.owners),
        }
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        drop(self.tail.take());
        unlink_chain(self.head.take());
    }
}

impl<T> Default for LinkedSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.copy_nodes();
        for value in iter {
            let _ = self.link_last(value);
        }
    }
}

impl<T: Clone> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T: Clone> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoValues<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoValues { sequence: self }
    }
}

impl<'a, T: Clone> IntoIterator for &'a LinkedSequence<T> {
    type Item = T;
    type IntoIter = Values<'a, LinkedSequence<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        // A shared chain is never mutated in place
        if Rc::ptr_eq(&self.owners, &other.owners) {
            return true;
        }
        let mut left = self.head.clone();
        let mut right = other.head.clone();
        loop {
            match (left, right) {
                (None, None) => return true,
                (Some(left_node), Some(right_node)) => {
                    if left_node.borrow().value != right_node.borrow().value {
                        return false;
                    }
                    left = successor(&left_node);
                    right = successor(&right_node);
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

/// Hashes every value in order, followed by the length, so that equal
/// sequences hash equally regardless of whether they share a chain.
impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut length = 0_usize;
        let mut current = self.head.clone();
        while let Some(node) = current {
            node.borrow().value.hash(state);
            length += 1;
            current = successor(&node);
        }
        length.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = formatter.debug_list();
        let mut current = self.head.clone();
        while let Some(node) = current {
            list.entry(&node.borrow().value);
            current = successor(&node);
        }
        list.finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.head {
            Some(head) => fmt_chain(head, formatter),
            None => write!(formatter, "Empty list"),
        }
    }
}
