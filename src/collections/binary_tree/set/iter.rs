use std::iter::FusedIterator;

use super::BinaryTreeSet;
use crate::collections::binary_tree::map::{self, Keys};

impl<T, C> IntoIterator for BinaryTreeSet<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

/// An owned iterator over the elements of a [`BinaryTreeSet`], in ascending order.
pub struct IntoIter<T, C>(pub(crate) map::IntoIter<T, (), C>);

impl<T, C> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, C> DoubleEndedIterator for IntoIter<T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|e| e.0)
    }
}

impl<T, C> FusedIterator for IntoIter<T, C> {}

impl<T, C> ExactSizeIterator for IntoIter<T, C> {}

impl<'a, T, C> IntoIterator for &'a BinaryTreeSet<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

/// A borrowed iterator over the elements of a [`BinaryTreeSet`], in ascending order.
pub struct Iter<'a, T, C>(pub(crate) Keys<'a, T, (), C>);

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, C> DoubleEndedIterator for Iter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {}
