//! A module containing [`BinaryTreeSet`] and associated types for owned and borrowed iteration.
//!
//! [`BinaryTreeSet`] is also re-exported under the parent module.

mod binary_tree_set;
mod iter;

pub use binary_tree_set::*;
pub use iter::*;
