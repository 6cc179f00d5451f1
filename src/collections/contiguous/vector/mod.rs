//! [`Vector`], the growable contiguous sequence, and its owned iterator.
//!
//! Positions into a Vector are plain indices and `len()` is the end position. Borrowed iteration
//! goes through the slice iterators reached by deref, and owned iteration reuses
//! [`array::IntoIter`](super::array::IntoIter).

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
