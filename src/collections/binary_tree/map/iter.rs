use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{BinaryTreeMap, Node};
use crate::collections::arena::{Key, Slot};
use crate::collections::contiguous::array;

impl<K, V, C> IntoIterator for BinaryTreeMap<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { map: self }
    }
}

/// An owned iterator over the entries of a [`BinaryTreeMap`], in ascending order.
pub struct IntoIter<K, V, C> {
    pub(crate) map: BinaryTreeMap<K, V, C>,
}

impl<K, V, C> Iterator for IntoIter<K, V, C> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.map.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.map.len(), Some(self.map.len()))
    }
}

impl<K, V, C> DoubleEndedIterator for IntoIter<K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map.pop_last()
    }
}

impl<K, V, C> FusedIterator for IntoIter<K, V, C> {}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a BinaryTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            front: self.begin().0,
            back: self.prev(self.end()).0,
            len: self.len(),
            map: self,
        }
    }
}

/// A borrowed iterator over the entries of a [`BinaryTreeMap`], in ascending order.
pub struct Iter<'a, K, V, C> {
    pub(crate) map: &'a BinaryTreeMap<K, V, C>,
    pub(crate) front: Option<Key>,
    pub(crate) back: Option<Key>,
    pub(crate) len: usize,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let key = self.front?;
        self.front = self.map.successor(key);
        self.len -= 1;
        let (k, v) = &self.map.node(key).entry;
        Some((k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let key = self.back?;
        self.back = self.map.predecessor(key);
        self.len -= 1;
        let (k, v) = &self.map.node(key).entry;
        Some((k, v))
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

/// A borrowed iterator over the keys of a [`BinaryTreeMap`], in ascending order.
///
/// See [`BinaryTreeMap::keys`].
pub struct Keys<'a, K, V, C>(pub(crate) Iter<'a, K, V, C>);

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|e| e.0)
    }
}

impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {}

/// A borrowed iterator over the values of a [`BinaryTreeMap`], in the ascending order of their
/// keys.
///
/// See [`BinaryTreeMap::values`].
pub struct Values<'a, K, V, C>(pub(crate) Iter<'a, K, V, C>);

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|e| e.1)
    }
}

impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {}

/// A mutable borrowed iterator over the values of a [`BinaryTreeMap`], in the ascending order of
/// their keys.
///
/// The order is resolved up front, so that no node links are read once values have been handed
/// out.
pub struct ValuesMut<'a, K, V> {
    pub(crate) slots: *mut Slot<Node<K, V>>,
    pub(crate) order: array::IntoIter<Key>,
    pub(crate) _phantom: PhantomData<&'a mut V>,
}

impl<'a, K, V> ValuesMut<'a, K, V> {
    /// # Safety
    /// `key` must be a live node of the map this iterator borrows, and must not be passed twice.
    unsafe fn value(&self, key: Key) -> &'a mut V {
        // SAFETY: The map is mutably borrowed for 'a, so its slots can't move or be freed. The
        // order holds every live node exactly once.
        match unsafe { &mut *self.slots.add(key.index) } {
            Slot::Occupied { value, .. } => &mut value.entry.1,
            Slot::Vacant { .. } => unreachable!("tree links always refer to live nodes"),
        }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.order.next()?;
        // SAFETY: Each key leaves the order once.
        Some(unsafe { self.value(key) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.order.next_back()?;
        // SAFETY: Each key leaves the order once.
        Some(unsafe { self.value(key) })
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
