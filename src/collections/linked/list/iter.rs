use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedList, Node};
use crate::collections::arena::{Key, Slot};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over the elements of a [`LinkedList`].
pub struct IntoIter<T> {
    // The iterator can just hold the list and pop from either end.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            len: self.len(),
        }
    }
}

/// A borrowed iterator over the elements of a [`LinkedList`].
pub struct Iter<'a, T> {
    pub(crate) list: &'a LinkedList<T>,
    pub(crate) front: Option<Key>,
    pub(crate) back: Option<Key>,
    // The number of elements left, which stops the two ends from crossing.
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            front: self.head,
            back: self.tail,
            len: self.len(),
            slots: self.nodes.slots_ptr(),
            _phantom: PhantomData,
        }
    }
}

/// A mutable borrowed iterator over the elements of a [`LinkedList`].
pub struct IterMut<'a, T> {
    pub(crate) slots: *mut Slot<Node<T>>,
    pub(crate) front: Option<Key>,
    pub(crate) back: Option<Key>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// Produces a reference to the node at `key` for the rest of the borrow.
    ///
    /// # Safety
    /// `key` must be a live node of the list this iterator borrows, and no reference to the same
    /// node may be handed out twice.
    unsafe fn node(&self, key: Key) -> &'a mut Node<T> {
        // SAFETY: The list is mutably borrowed for 'a, so its slots can't move or be freed.
        // Every key reached by following links is in bounds and occupied. The caller guarantees
        // uniqueness.
        match unsafe { &mut *self.slots.add(key.index) } {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("list links always refer to live nodes"),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: len tracks the number of nodes that haven't been yielded from either end, so
        // the front node hasn't been handed out yet.
        let node = unsafe { self.node(self.front?) };
        self.front = node.next;
        self.len -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: len tracks the number of nodes that haven't been yielded from either end, so
        // the back node hasn't been handed out yet.
        let node = unsafe { self.node(self.back?) };
        self.back = node.prev;
        self.len -= 1;
        Some(&mut node.value)
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
