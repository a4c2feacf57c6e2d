//! Last-in, first-out stacks over contiguous buffers.
//!
//! This module provides:
//!
//! - [`Stack`]: a growable stack backed by a `Vec`
//! - [`BoundedStack`]: a fixed-capacity stack backed by an inline
//!   `ArrayVec`, whose `push` hands the element back when the buffer is full
//!
//! # Examples
//!
//! ```rust
//! use cowseq::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(5);
//! stack.push(7);
//! stack.push(9);
//!
//! assert_eq!(stack.pop(), Some(9));
//! assert_eq!(stack.top(), Some(&7));
//! assert_eq!(stack.count(), 2);
//! ```

use std::fmt;

use arrayvec::ArrayVec;

/// Writes the stack banner: `----top----`, one element per line from the
/// top down, then a closing rule.
fn fmt_banner<'a, T, I>(elements: I, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
{
    writeln!(formatter, "----top----")?;
    for element in elements.rev() {
        writeln!(formatter, "{element}")?;
    }
    write!(formatter, "-----------")
}

/// A growable last-in, first-out stack.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    storage: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.storage.len()
    }

    /// Pushes `element` on top.
    pub fn push(&mut self, element: T) {
        self.storage.push(element);
    }

    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Returns the top element without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.storage.last()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the elements in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_banner(self.storage.iter(), formatter)
    }
}

// =============================================================================
// BoundedStack
// =============================================================================

/// Error returned when pushing onto a full [`BoundedStack`].
///
/// The rejected element is handed back to the caller.
///
/// # Examples
///
/// ```rust
/// use cowseq::stack::BoundedStack;
///
/// let mut stack: BoundedStack<i32, 1> = BoundedStack::new();
/// stack.push(1).unwrap();
///
/// let error = stack.push(2).unwrap_err();
/// assert_eq!(error.element(), &2);
/// assert_eq!(error.to_string(), "stack overflow: capacity of 1 reached");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOverflowError<T> {
    element: T,
    capacity: usize,
}

impl<T> StackOverflowError<T> {
    /// Returns a reference to the rejected element.
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Returns the rejected element.
    pub fn into_element(self) -> T {
        self.element
    }

    /// Returns the capacity of the stack that rejected the element.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> fmt::Display for StackOverflowError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "stack overflow: capacity of {} reached",
            self.capacity
        )
    }
}

impl<T: fmt::Debug> std::error::Error for StackOverflowError<T> {}

/// A last-in, first-out stack with a fixed capacity of `CAPACITY` elements
/// stored inline.
///
/// # Examples
///
/// ```rust
/// use cowseq::stack::BoundedStack;
///
/// let mut stack: BoundedStack<&str, 2> = BoundedStack::new();
/// assert!(stack.push("a").is_ok());
/// assert!(stack.push("b").is_ok());
/// assert!(stack.is_full());
/// assert!(stack.push("c").is_err());
/// assert_eq!(stack.pop(), Some("b"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedStack<T, const CAPACITY: usize> {
    storage: ArrayVec<T, CAPACITY>,
}

impl<T, const CAPACITY: usize> BoundedStack<T, CAPACITY> {
    /// Creates a new empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: ArrayVec::new(),
        }
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` if no more elements fit.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.storage.is_full()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.storage.len()
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Pushes `element` on top.
    ///
    /// # Errors
    ///
    /// Returns [`StackOverflowError`] carrying `element` if the stack is full.
    pub fn push(&mut self, element: T) -> Result<(), StackOverflowError<T>> {
        self.storage
            .try_push(element)
            .map_err(|error| StackOverflowError {
                element: error.element(),
                capacity: CAPACITY,
            })
    }

    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Returns the top element without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.storage.last()
    }
}

impl<T, const CAPACITY: usize> Default for BoundedStack<T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const CAPACITY: usize> fmt::Debug for BoundedStack<T, CAPACITY> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T: fmt::Display, const CAPACITY: usize> fmt::Display for BoundedStack<T, CAPACITY> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_banner(self.storage.iter(), formatter)
    }
}
