//! [`Array`], a heap allocation sized at runtime, and its owned iterator.
//!
//! Array is the storage the contiguous and ring buffer collections grow within. It has no spare
//! capacity of its own, so it implements [`Traverse`](crate::collections::traits::Traverse) over
//! exactly its elements.

mod array;
mod iter;
mod tests;

pub use array::*;
pub use iter::*;
