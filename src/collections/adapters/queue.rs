use std::fmt::{self, Debug, Formatter};

use crate::collections::circ::Deque;
use crate::util::fmt::DebugWith;

/// A first in, first out queue backed by a [`Deque`].
///
/// Elements join at the back and leave from the front.
///
/// # Examples
/// ```
/// # use standard_collections::collections::adapters::Queue;
/// let mut queue = Queue::new();
/// queue.push(4);
/// queue.push(5);
/// assert_eq!((queue.front(), queue.back(), queue.len()), (Some(&4), Some(&5), 2));
/// assert_eq!(queue.pop(), Some(4));
/// assert!(!queue.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    deque: Deque<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub fn new() -> Queue<T> {
        Queue { deque: Deque::new() }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.deque.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.deque.push_back(value)
    }

    /// Removes and returns the front element, or None if the Queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    /// Returns a reference to the front element, the next one to be popped.
    pub fn front(&self) -> Option<&T> {
        self.deque.front()
    }

    /// Returns a mutable reference to the front element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.deque.front_mut()
    }

    /// Returns a reference to the back element, the most recently pushed one.
    pub fn back(&self) -> Option<&T> {
        self.deque.back()
    }

    /// Returns a mutable reference to the back element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.deque.back_mut()
    }

    /// Consumes the Queue, returning the backing Deque with the front element first.
    pub fn into_inner(self) -> Deque<T> {
        self.deque
    }
}

impl<T> From<Deque<T>> for Queue<T> {
    fn from(deque: Deque<T>) -> Self {
        Queue { deque }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue { deque: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.deque.extend(iter)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugWith(|f| f.debug_list().entries(self.deque.iter()).finish()))
            .field("len", &self.len())
            .finish()
    }
}
