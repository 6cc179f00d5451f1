use std::iter::{Chain, FusedIterator};
use std::slice::{Iter as SliceIter, IterMut as SliceIterMut};

use super::Deque;

impl<T> IntoIterator for Deque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            deque: self,
        }
    }
}

/// An owned iterator over the elements of a [`Deque`].
pub struct IntoIter<T> {
    pub(crate) deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (first, second) = self.ranges();
        Iter {
            inner: self.arr[first].iter().chain(self.arr[second].iter()),
            len: self.len(),
        }
    }
}

/// A borrowed iterator over the elements of a [`Deque`].
pub struct Iter<'a, T> {
    pub(crate) inner: Chain<SliceIter<'a, Option<T>>, SliceIter<'a, Option<T>>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Every bucket in the occupied ranges holds a value.
        let next = self.inner.next()?.as_ref();
        self.len -= 1;
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let next = self.inner.next_back()?.as_ref();
        self.len -= 1;
        next
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        let (first, second) = self.ranges();
        // The first range always starts at or after the end of the second one.
        let (low, high) = self.arr.split_at_mut(first.start);
        IterMut {
            inner: high[..first.len()].iter_mut().chain(low[second].iter_mut()),
            len,
        }
    }
}

/// A mutable borrowed iterator over the elements of a [`Deque`].
pub struct IterMut<'a, T> {
    pub(crate) inner: Chain<SliceIterMut<'a, Option<T>>, SliceIterMut<'a, Option<T>>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next()?.as_mut();
        self.len -= 1;
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let next = self.inner.next_back()?.as_mut();
        self.len -= 1;
        next
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
