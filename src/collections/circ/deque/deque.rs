use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut, Range};

use super::{Iter, IterMut};
use crate::collections::contiguous::Array;
use crate::collections::traits::{RandomAccess, Traverse, TraverseMut, check_bound, check_index};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A double-ended queue, implemented as a growable ring buffer.
///
/// Elements are stored in an [`Array`] of buckets, starting at `head` and wrapping around at the
/// capacity. Positions are logical indices (0 is always the front), with `len()` as the end
/// position. Any push or pop invalidates every position, because the logical index of each
/// remaining element may change.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Deque.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` / `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_front/back` | `O(1)`*, `O(n)` |
/// | `pop_front/back` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the Deque doesn't have enough capacity for the new element, pushing will take `O(n)`.
pub struct Deque<T> {
    pub(crate) arr: Array<Option<T>>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl<T> Deque<T> {
    /// Creates a new Deque with length and capacity 0. Memory will be allocated when the first
    /// element is pushed.
    pub fn new() -> Deque<T> {
        Deque {
            arr: Array::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates a new Deque with capacity exactly equal to the provided value.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Deque<T> {
        Deque {
            arr: Array::repeat_default(cap),
            head: 0,
            len: 0,
        }
    }

    /// Returns the length of the Deque.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Deque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the Deque.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    /// Returns a reference to the element at logical `index`, or None if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.arr[self.physical(index)].as_ref()
    }

    /// Returns a mutable reference to the element at logical `index`, or None if it is out of
    /// bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let physical = self.physical(index);
        self.arr[physical].as_mut()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error describing
    /// the failed access.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::circ::Deque;
    /// let mut deque: Deque<_> = [2, 3].into_iter().collect();
    /// deque.push_front(1);
    /// assert_eq!(deque.at(0), Ok(&1));
    /// assert!(deque.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error
    /// describing the failed access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Adds `value` to the back of the Deque, growing it if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Deque would have a size that exceeds [`isize::MAX`].
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        let physical = self.physical(self.len);
        self.arr[physical] = Some(value);
        self.len += 1;
    }

    /// Adds `value` to the front of the Deque, growing it if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Deque would have a size that exceeds [`isize::MAX`].
    pub fn push_front(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.head = (self.head + self.cap() - 1) % self.cap();
        self.arr[self.head] = Some(value);
        self.len += 1;
    }

    /// Removes the first element and returns it, if the Deque isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.arr[self.head].take();
        self.head = (self.head + 1) % self.cap();
        self.len -= 1;
        value
    }

    /// Removes the last element and returns it, if the Deque isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let physical = self.physical(self.len);
        self.arr[physical].take()
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        let (first, second) = self.ranges();
        for i in first.chain(second) {
            self.arr[i] = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Returns an iterator over references to each element, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to each element, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> Deque<T> {
    /// Maps a logical index onto a bucket of the Array. Only valid while the capacity is non-zero.
    pub(crate) const fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.arr.size()
    }

    /// Returns the two ranges of buckets holding elements, in logical order. The second range is
    /// empty unless the elements wrap around the end of the Array.
    pub(crate) fn ranges(&self) -> (Range<usize>, Range<usize>) {
        let first_end = cmp::min(self.head + self.len, self.cap());
        let wrapped = self.head + self.len - first_end;
        (self.head..first_end, 0..wrapped)
    }

    /// Doubles the capacity (with a minimum of 2), moving the elements so that the front is at
    /// bucket 0.
    ///
    /// # Panics
    /// Panics if the memory layout of the Deque would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_CAP,
        );

        log::trace!(
            "reallocating Deque<{}> from capacity {} to {}",
            std::any::type_name::<T>(),
            self.cap(),
            new_cap,
        );

        let (first, second) = self.ranges();
        let mut old_arr = mem::replace(&mut self.arr, Array::repeat_default(new_cap));
        for (new_index, old_index) in first.chain(second).enumerate() {
            self.arr[new_index] = old_arr[old_index].take();
        }
        self.head = 0;
    }
}

impl<T: Default> Deque<T> {
    /// Creates a new Deque holding `len` default values.
    pub fn with_len(len: usize) -> Deque<T> {
        Deque {
            arr: Array::repeat_with(|| Some(T::default()), len),
            head: 0,
            len,
        }
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).throw()
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).throw()
    }
}

impl<T> Traverse for Deque<T> {
    type Item = T;

    type Pos = usize;

    fn begin(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len
    }

    fn step(&self, pos: usize) -> usize {
        check_index(pos, self.len);
        pos + 1
    }

    fn read(&self, pos: usize) -> &T {
        &self[pos]
    }

    fn advance(&self, pos: usize, n: usize) -> usize {
        let new_pos = pos.saturating_add(n);
        check_bound(new_pos, self.len);
        new_pos
    }

    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

impl<T> TraverseMut for Deque<T> {
    fn read_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        check_index(a, self.len);
        check_index(b, self.len);
        let (a, b) = (self.physical(a), self.physical(b));
        self.arr.swap(a, b);
    }
}

impl<T> RandomAccess for Deque<T> {}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("contents", &DebugWith(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
