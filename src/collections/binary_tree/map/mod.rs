//! A module containing [`BinaryTreeMap`] and associated types: the [`TreePos`] position handle and
//! the types for owned and borrowed iteration.
//!
//! [`BinaryTreeMap`] and [`TreePos`] are also re-exported under the parent module.

mod binary_tree_map;
mod iter;
mod node;
mod tests;

pub use binary_tree_map::*;
pub use iter::*;
pub(crate) use node::*;
