//! Contiguous collection types: the fixed-size [`Array`] storage primitive and the growable
//! [`Vector`] built on it.

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;
