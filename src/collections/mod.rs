//! Various general-purpose collection types.
//!
//! # Purpose
//! These types cover the classic container families. Each one is written on top of the crate's
//! own storage primitives rather than the standard library's collections.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality. The node-based collections keep their
//! nodes in an internal arena instead, so that their position handles can be checked.
//!
//! Every collection implements [`Traverse`](traits::Traverse), so the
//! [`algorithms`](crate::algorithms) module can run over any of them.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(any(feature = "linked", feature = "binary_tree"))]
pub(crate) mod arena;
#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
