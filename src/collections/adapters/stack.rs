use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;
use crate::util::fmt::DebugWith;

/// A last in, first out stack backed by a [`Vector`].
///
/// The top of the stack is the back of the Vector, so every operation is `O(1)` (amortized for
/// [`push`](Stack::push)).
///
/// # Examples
/// ```
/// # use standard_collections::collections::adapters::Stack;
/// let mut stack = Stack::new();
/// stack.push(2);
/// stack.push(3);
/// assert_eq!((stack.top(), stack.len()), (Some(&3), 2));
/// assert_eq!(stack.pop(), Some(3));
/// assert!(!stack.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    vec: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub fn new() -> Stack<T> {
        Stack { vec: Vector::new() }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.vec.push(value)
    }

    /// Removes and returns the top element, or None if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }

    /// Returns a reference to the top element, if there is one.
    pub fn top(&self) -> Option<&T> {
        self.vec.back()
    }

    /// Returns a mutable reference to the top element, if there is one.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.vec.back_mut()
    }

    /// Consumes the Stack, returning the backing Vector with the top element last.
    pub fn into_inner(self) -> Vector<T> {
        self.vec
    }
}

/// Uses the Vector's elements as the stack, with its back element on top.
impl<T> From<Vector<T>> for Stack<T> {
    fn from(vec: Vector<T>) -> Self {
        Stack { vec }
    }
}

/// Pushes every element in order, so the last one yielded ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack { vec: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend(iter)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field(
                "contents",
                &DebugWith(|f| f.debug_list().entries(self.vec.iter().rev()).finish()),
            )
            .field("len", &self.len())
            .finish()
    }
}
