//! Generic algorithms over any collection that can be walked with positions.
//!
//! Every algorithm takes a collection implementing [`Traverse`](crate::collections::traits::Traverse)
//! (or one of its refinements) together with a half-open [`Range`](std::ops::Range) of its
//! positions, usually `collection.all()`. Algorithms never change the length of a collection. The
//! ones that "remove" elements ([`remove`], [`remove_if`], [`unique`]) move the kept elements to
//! the front and return the new end, leaving the caller to erase the rest.
//!
//! Not finding something is never an error: searches return the end of the range and predicates
//! return false.
//!
//! Algorithms that need to jump around the range, like sorting and the heap operations, require
//! [`RandomAccess`](crate::collections::traits::RandomAccess) collections. Orderings are given as
//! [`Compare`](crate::collections::traits::Compare) implementations through the `_by` variants,
//! and default to [`Ord`] otherwise.
//!
//! # Examples
//! ```
//! # use standard_collections::algorithms;
//! # use standard_collections::collections::contiguous::Vector;
//! # use standard_collections::collections::traits::Traverse;
//! let mut vec: Vector<_> = [3, 1, 3, 2, 1].into_iter().collect();
//! let all = vec.all();
//! algorithms::sort(&mut vec, all.clone());
//! let new_last = algorithms::unique(&mut vec, all);
//! vec.erase(new_last..vec.len());
//! assert_eq!(&*vec, &[1, 2, 3]);
//! ```

mod heap;
mod modify;
mod search;
mod sort;
mod tests;

pub use heap::{
    is_heap, is_heap_by, make_heap, make_heap_by, pop_heap, pop_heap_by, push_heap, push_heap_by,
};
pub use modify::*;
pub use search::*;
pub use sort::*;
