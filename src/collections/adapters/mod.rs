//! Restricted interfaces over the other collections.
//!
//! Each adapter owns a backing collection and only exposes the operations of its abstract data
//! type. None of them hand out positions or iterators, so the backing collection's ordering can't
//! be observed or disturbed from outside.
//!
//! - [`Stack`]: last in, first out, over a [`Vector`](super::contiguous::Vector).
//! - [`Queue`]: first in, first out, over a [`Deque`](super::circ::Deque).
//! - [`PriorityQueue`]: greatest first under a comparator, as a heap over a
//!   [`Vector`](super::contiguous::Vector).

mod priority_queue;
mod queue;
mod stack;

pub use priority_queue::*;
pub use queue::*;
pub use stack::*;
