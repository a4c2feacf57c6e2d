//! Copy-on-write linked sequence.
//!
//! This module provides:
//!
//! - [`LinkedSequence`]: a singly linked list with head and tail links whose
//!   clones share nodes until one of them mutates
//! - [`NodeRef`]: a read-only handle to a node, used as the anchor of
//!   `insert_after` and `remove_after`
//! - [`SequencePosition`]: the opaque cursor used by the
//!   [`Collection`](crate::collection::Collection) implementation
//!
//! # Value Semantics
//!
//! ```rust
//! use cowseq::sequence::LinkedSequence;
//!
//! let mut first = LinkedSequence::new();
//! first.append(1);
//! first.append(2);
//!
//! let mut second = first.clone();
//! second.append(3);
//! first.pop();
//!
//! assert_eq!(first.to_string(), "2");
//! assert_eq!(second.to_string(), "1 -> 2 -> 3");
//! ```
//!
//! # Positions
//!
//! ```rust
//! use cowseq::collection::Collection;
//! use cowseq::sequence::LinkedSequence;
//!
//! let sequence: LinkedSequence<i32> = (0..=9).collect();
//! assert_eq!(sequence.value_at(&sequence.start_position()), Some(0));
//! assert_eq!(sequence.prefix(3), vec![0, 1, 2]);
//! assert_eq!(sequence.suffix(3), vec![7, 8, 9]);
//! assert_eq!(sequence.fold_left(0, |sum, value| sum + value), 45);
//! ```

mod linked;
mod node;
mod position;

pub use linked::IntoValues;
pub use linked::LinkedSequence;
pub use node::NodeRef;
pub use position::SequencePosition;
