//! # cowseq
//!
//! A singly linked sequence with value semantics, built on copy-on-write,
//! together with a few small single-owner containers.
//!
//! ## Overview
//!
//! - **Sequence**: [`LinkedSequence`](sequence::LinkedSequence), whose clones
//!   share their node chain until one of them mutates
//! - **Collection**: a position-based traversal trait with generic prefix,
//!   suffix and fold algorithms
//! - **Queue**: the minimal FIFO contract and its implementations
//! - **Stack**: growable and fixed-capacity LIFO stacks
//! - **Tree**: binary search tree and general tree
//!
//! ## Feature Flags
//!
//! - `sequence`: the copy-on-write linked sequence
//! - `queue`: the queue contract (requires `sequence`)
//! - `stack`: stacks
//! - `tree`: trees
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use cowseq::prelude::*;
//!
//! let mut list = LinkedSequence::new();
//! list.push(3);
//! list.push(2);
//! list.push(1);
//!
//! let mut middle = list.node_at(1).unwrap();
//! for _ in 0..4 {
//!     middle = list.insert_after(-1, &middle).unwrap();
//! }
//! assert_eq!(list.to_string(), "1 -> 2 -> -1 -> -1 -> -1 -> -1 -> 3");
//!
//! assert_eq!(list.pop(), Some(1));
//! assert_eq!(list.prefix(2), vec![2, -1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use cowseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "queue")]
    pub use crate::queue::*;

    #[cfg(feature = "stack")]
    pub use crate::stack::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

pub mod collection;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "queue")]
pub mod queue;

#[cfg(feature = "stack")]
pub mod stack;

#[cfg(feature = "tree")]
pub mod tree;
