use crate::collections::arena::Key;

/// A single link of a [`LinkedList`](super::LinkedList), stored in the list's arena. `prev` and
/// `next` are None at the head and tail respectively.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<Key>,
    pub next: Option<Key>,
}
