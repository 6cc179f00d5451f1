//! [`HashSet`], a set of unique elements stored as the keys of a [`HashMap`](super::HashMap),
//! and its iterators.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;

pub use hash_set::*;
pub use iter::*;
