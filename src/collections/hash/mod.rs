//! Hash-based collections: [`HashMap`] and [`HashSet`], both using open addressing with linear
//! probing. Positions into either are [`BucketPos`] values, which are bucket indices.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::{BucketPos, HashMap};
#[doc(inline)]
pub use set::HashSet;
