//! First-in, first-out queue capability.
//!
//! This module provides the [`Queue`] trait, the minimal contract shared by
//! queue implementations, together with two implementations:
//!
//! - [`ArrayQueue`]: a ring buffer over a `VecDeque`
//! - [`LinkedSequence`]: enqueue appends at the tail, dequeue pops the head
//!
//! # Examples
//!
//! ```rust
//! use cowseq::queue::{ArrayQueue, Queue};
//!
//! let mut queue = ArrayQueue::new();
//! assert!(queue.enqueue("Ray"));
//! assert!(queue.enqueue("Brian"));
//!
//! assert_eq!(queue.peek(), Some("Ray"));
//! assert_eq!(queue.dequeue(), Some("Ray"));
//! assert_eq!(queue.dequeue(), Some("Brian"));
//! assert!(queue.is_empty());
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::collection::Collection;
use crate::sequence::LinkedSequence;

/// The minimal first-in, first-out contract.
pub trait Queue {
    /// The type of the queued elements.
    type Element;

    /// Adds `element` at the back. Returns `true` if the element was accepted.
    fn enqueue(&mut self, element: Self::Element) -> bool;

    /// Removes and returns the front element, or `None` if empty.
    fn dequeue(&mut self) -> Option<Self::Element>;

    /// Returns `true` if the queue holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns a copy of the front element without removing it.
    fn peek(&self) -> Option<Self::Element>;
}

/// A queue backed by a growable ring buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayQueue<T> {
    storage: VecDeque<T>,
}

impl<T> ArrayQueue<T> {
    /// Creates a new empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: VecDeque::new(),
        }
    }

    /// Returns the number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Queue for ArrayQueue<T> {
    type Element = T;

    fn enqueue(&mut self, element: T) -> bool {
        self.storage.push_back(element);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        self.storage.pop_front()
    }

    fn is_empty(&self) -> bool {
        ArrayQueue::is_empty(self)
    }

    fn peek(&self) -> Option<T> {
        self.storage.front().cloned()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T: Clone> Queue for LinkedSequence<T> {
    type Element = T;

    fn enqueue(&mut self, element: T) -> bool {
        self.append(element);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        LinkedSequence::is_empty(self)
    }

    fn peek(&self) -> Option<T> {
        self.first()
    }
}
