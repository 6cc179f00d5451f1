//! Traits shared by the collections and the [`algorithms`](crate::algorithms) module.
//!
//! [`Compare`] abstracts over orderings, so that ordered containers and sorting algorithms can be
//! parameterized with something other than [`Ord`]. [`Traverse`] and its refinements describe how
//! to walk a collection through position handles, which is what lets a single algorithm run over
//! a [`Vector`](crate::collections::contiguous::Vector), a
//! [`LinkedList`](crate::collections::linked::LinkedList) or a slice alike.

mod compare;
mod traverse;

pub use compare::*;
pub use traverse::{RandomAccess, Traverse, TraverseMut};
pub(crate) use traverse::{check_bound, check_index, traverse_as_slice};
