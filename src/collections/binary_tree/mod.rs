//! Ordered associative collections backed by a height-balanced binary search tree:
//! [`BinaryTreeMap`] and [`BinaryTreeSet`], which share the [`TreePos`] position handle.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::{BinaryTreeMap, TreePos};
#[doc(inline)]
pub use set::BinaryTreeSet;
