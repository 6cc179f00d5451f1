//! A module containing [`LinkedList`] and associated types: the [`ListPos`] position handle and
//! the types for owned and borrowed iteration.
//!
//! [`LinkedList`] and [`ListPos`] are also re-exported under the parent module.

mod iter;
mod linked_list;
mod node;
mod tests;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
