//! Linked collection types. Currently just [`LinkedList`] and its [`ListPos`] position handle.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, ListPos};
