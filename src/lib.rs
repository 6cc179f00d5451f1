//! This crate is a collection of generic containers and the algorithms that operate over them,
//! written from scratch on top of a small set of storage primitives.
//!
//! # Purpose
//! The crate covers the classic container families: a growable contiguous sequence, a
//! double-ended ring buffer, a doubly linked list, ordered (balanced tree) and hashed associative
//! containers, and the stack / queue / priority queue adapters built on top of them. Alongside the
//! containers, the [`algorithms`] module provides searching, counting, modifying, sorting,
//! partitioning and heap algorithms that work over any container through a common notion of
//! positions.
//!
//! # Positions
//! Every container hands out position handles ([`Traverse::Pos`](collections::traits::Traverse)).
//! For contiguous containers a position is just an index. For node-based containers (the linked
//! list and the ordered map/set) a position is a generation-checked key into the container's node
//! storage, so a handle to an erased node is always detected instead of silently reading freed
//! memory. Algorithms take a container and a half-open [`Range`](std::ops::Range) of positions and
//! return positions, counts or booleans. They never own or resize containers.
//!
//! # Error Handling
//! Lookups that "fail" because something isn't present aren't errors: they return the end
//! position, [`None`] or `false`. Actual misuse, such as checked access out of bounds, strict key
//! lookup of a missing key or using a stale position, is reported through small, strongly typed
//! error structs that implement [`Error`](std::error::Error). Each of these has a panicking
//! counterpart for when the caller knows the access is valid. Enums group errors with static
//! dispatch rather than boxing them.
//!
//! # Logging
//! The crate doesn't install a logger. It emits `trace` level records through the [`log`] facade
//! whenever a container reallocates its storage, which is useful when tracking down unexpected
//! growth.
//!
//! # Dependencies
//! The crate doesn't use [`Vec`] internally. The contiguous types are built on
//! [`Array`](collections::contiguous::Array), a runtime-sized heap allocation, and everything else
//! is built on those. Derive macros from `derive_more` remove some of the repetitive error
//! boilerplate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithms")]
pub mod algorithms;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
