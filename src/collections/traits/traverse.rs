use std::fmt::Debug;
use std::mem;
use std::ops::Range;

use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A collection that can be walked from front to back using position handles.
///
/// A position (`Pos`) refers either to one element of the collection, or to the end position,
/// which is one past the last element. Positions are cheap, [`Copy`] values that don't borrow the
/// collection, so it is up to the collection to detect (or tolerate) positions that have been
/// invalidated by a structural mutation. Each implementor documents when its positions are
/// invalidated.
///
/// The half-open range `begin()..end()` covers every element. All algorithms in
/// [`algorithms`](crate::algorithms) take a collection alongside such a range.
pub trait Traverse {
    /// The element type, as seen through a position.
    type Item;

    /// The position handle type.
    type Pos: Copy + Eq + Debug;

    /// Returns the position of the first element, or [`end`](Traverse::end) if there isn't one.
    fn begin(&self) -> Self::Pos;

    /// Returns the end position.
    fn end(&self) -> Self::Pos;

    /// Returns the position following `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or doesn't refer to an element of this collection.
    fn step(&self, pos: Self::Pos) -> Self::Pos;

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or doesn't refer to an element of this collection.
    fn read(&self, pos: Self::Pos) -> &Self::Item;

    /// Returns the range covering the whole collection.
    fn all(&self) -> Range<Self::Pos> {
        self.begin()..self.end()
    }

    /// Returns the position `n` steps after `pos`. Linear in `n` unless the collection is
    /// [`RandomAccess`].
    ///
    /// # Panics
    /// Panics if this would step past the end position.
    fn advance(&self, mut pos: Self::Pos, n: usize) -> Self::Pos {
        for _ in 0..n {
            pos = self.step(pos);
        }
        pos
    }

    /// Returns the number of steps from `from` to `to`. Linear in the result unless the collection
    /// is [`RandomAccess`].
    ///
    /// # Panics
    /// Panics if `to` isn't reachable from `from`.
    fn distance(&self, mut from: Self::Pos, to: Self::Pos) -> usize {
        let mut count = 0;
        while from != to {
            from = self.step(from);
            count += 1;
        }
        count
    }
}

/// A [`Traverse`] collection whose elements can be mutated in place through positions.
///
/// Associative collections don't implement this, because changing a key in place would break
/// their ordering or hashing.
pub trait TraverseMut: Traverse {
    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or doesn't refer to an element of this collection.
    fn read_mut(&mut self, pos: Self::Pos) -> &mut Self::Item;

    /// Swaps the elements at positions `a` and `b`. Swapping a position with itself is a no-op.
    ///
    /// # Panics
    /// Panics if either position is the end position or doesn't refer to an element of this
    /// collection.
    fn swap_at(&mut self, a: Self::Pos, b: Self::Pos);

    /// Replaces the element at `pos` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or doesn't refer to an element of this collection.
    fn put(&mut self, pos: Self::Pos, value: Self::Item) -> Self::Item
    where
        Self::Item: Sized,
    {
        mem::replace(self.read_mut(pos), value)
    }
}

/// A marker for [`Traverse`] collections where [`advance`](Traverse::advance) and
/// [`distance`](Traverse::distance) take constant time. Sorting algorithms require this.
pub trait RandomAccess: Traverse {}

/// Checks an index-based position against the length of a collection.
#[track_caller]
pub(crate) fn check_index(index: usize, len: usize) {
    if index >= len {
        Err(IndexOutOfBounds { index, len }).throw()
    }
}

/// Checks that an index-based position lies within `0..=len`, allowing the end position.
#[track_caller]
pub(crate) fn check_bound(index: usize, len: usize) {
    if index > len {
        Err(IndexOutOfBounds { index, len }).throw()
    }
}

impl<T> Traverse for [T] {
    type Item = T;

    type Pos = usize;

    fn begin(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn step(&self, pos: usize) -> usize {
        check_index(pos, self.len());
        pos + 1
    }

    fn read(&self, pos: usize) -> &T {
        check_index(pos, self.len());
        &self[pos]
    }

    fn advance(&self, pos: usize, n: usize) -> usize {
        let new_pos = pos.saturating_add(n);
        check_bound(new_pos, self.len());
        new_pos
    }

    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

impl<T> TraverseMut for [T] {
    fn read_mut(&mut self, pos: usize) -> &mut T {
        check_index(pos, self.len());
        &mut self[pos]
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        check_index(a, self.len());
        check_index(b, self.len());
        self.swap(a, b);
    }
}

impl<T> RandomAccess for [T] {}

/// Implements the position traits for a type that dereferences to a slice by forwarding to the
/// slice implementation.
macro_rules! traverse_as_slice {
    ($type:ident) => {
        impl<T> $crate::collections::traits::Traverse for $type<T> {
            type Item = T;

            type Pos = usize;

            fn begin(&self) -> usize {
                0
            }

            fn end(&self) -> usize {
                self.len()
            }

            fn step(&self, pos: usize) -> usize {
                <[T] as $crate::collections::traits::Traverse>::step(self, pos)
            }

            fn read(&self, pos: usize) -> &T {
                <[T] as $crate::collections::traits::Traverse>::read(self, pos)
            }

            fn advance(&self, pos: usize, n: usize) -> usize {
                <[T] as $crate::collections::traits::Traverse>::advance(self, pos, n)
            }

            fn distance(&self, from: usize, to: usize) -> usize {
                to - from
            }
        }

        impl<T> $crate::collections::traits::TraverseMut for $type<T> {
            fn read_mut(&mut self, pos: usize) -> &mut T {
                <[T] as $crate::collections::traits::TraverseMut>::read_mut(self, pos)
            }

            fn swap_at(&mut self, a: usize, b: usize) {
                <[T] as $crate::collections::traits::TraverseMut>::swap_at(self, a, b)
            }
        }

        impl<T> $crate::collections::traits::RandomAccess for $type<T> {}
    };
}

pub(crate) use traverse_as_slice;
