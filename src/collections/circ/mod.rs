//! Circular collection types. Currently just [`Deque`], a ring buffer that can grow and shrink at
//! both ends.

pub mod deque;

#[doc(inline)]
pub use deque::Deque;
