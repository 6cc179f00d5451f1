//! Crate internal helpers. Only [`error`] is public, re-exported at the crate root.
#![warn(missing_docs)]

pub mod alloc;
pub mod error;
pub mod fmt;
pub mod hash;
pub mod option;
pub mod panic;
pub mod result;
