//! Slot storage for the node-based collections.
//!
//! An [`Arena`] owns a [`Vector`](crate::collections::contiguous::Vector) of slots, each of which
//! is either occupied by a value or vacant and threaded onto a free list. Inserting hands out a
//! [`Key`], which pairs a slot index with the generation of the slot at the time of insertion.
//! Vacating a slot bumps its generation, so a key to a removed value never matches again, even
//! after the slot is reused.

mod arena;

pub(crate) use arena::*;
