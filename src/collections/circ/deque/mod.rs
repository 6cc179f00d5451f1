//! A module containing [`Deque`] and associtated types.
//!
//! The other included types are for owned and borrowed iteration. Borrowed iteration walks the two
//! contiguous halves of the ring one after the other.
//!
//! [`Deque`] is also re-exported under the parent module.

mod deque;
mod iter;

pub use deque::*;
pub use iter::*;
