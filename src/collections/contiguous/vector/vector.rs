use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut, Range};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::collections::traits::{check_bound, check_index, traverse_as_slice};
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Positions into a Vector are plain indices, with `len()` as the end position. Any reallocation
/// invalidates every position (in the sense that the values they refer to may have moved), and
/// insertion or erasure invalidates every position at or after the point of mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items inserted, erased or in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` / `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `insert_n` / `insert_iter` | `O(n-i+m)` |
/// | `remove` | `O(n-i)` |
/// | `erase` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `adjust_cap` | `O(n)` |
/// | `append` | `O(n+m)` |
/// | `contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the first element, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a mutable reference to the first element, if there is one.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a mutable reference to the last element, if there is one.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error describing
    /// the failed access. The Vector isn't modified either way.
    ///
    /// Indexing (`vec[index]`) is the panicking equivalent.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let vec = Vector::from_iter_sized(10..13);
    /// assert_eq!(vec.at(2), Ok(&12));
    /// assert!(vec.at(3).is_err());
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

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve), [`adjust_cap`](Vector::adjust_cap)
    /// or [`with_cap`](Vector::with_cap) to do so. Using this method on a Vector without enough
    /// capacity is undefined behavior.
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the object.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..5);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector.
            // size_of::<T>() * self.len can't overflow isize::MAX, and all values < len are
            // initialized. Decrementing len means the copy on the heap is forgotten, which is as
            // close as we can get to actually moving the value off of the heap.
            let value = unsafe {
                self.arr.ptr.add(self.len).read().assume_init()
            };
            Some(value)
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at `len()` is equivalent to a push.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..3);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// vec.insert(6, 400);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2, 400]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at the given index, returning an error rather than panicking if the index
    /// is out of bounds or the new length would overflow. On an error the Vector is unchanged and
    /// `value` is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            Err(IndexOutOfBounds { index, len: self.len })?
        }
        self.len.checked_add(1).ok_or(CapacityOverflow)?;

        if self.len == self.cap() {
            self.grow()
        }

        // SAFETY: index <= len < cap, so both the source and destination ranges of the copy lie
        // within the allocation. The slot at index is overwritten after its value has been moved
        // up by one.
        unsafe {
            let hole = self.arr.ptr.add(index).as_ptr();
            ptr::copy(hole, hole.add(1), self.len - index);
            hole.write(MaybeUninit::new(value));
        }

        self.len += 1;
        Ok(())
    }

    /// Inserts `count` clones of `value` at the given index, moving all following items up by
    /// `count`. The Vector grows at most once.
    ///
    /// # Panics
    /// Panics if `index > len()` or if the new length would overflow.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..3);
    /// vec.insert_n(1, 2, 9);
    /// assert_eq!(&*vec, &[0, 9, 9, 1, 2]);
    /// ```
    pub fn insert_n(&mut self, index: usize, count: usize, value: T)
    where
        T: Clone,
    {
        self.try_insert_n(index, count, value).throw()
    }

    /// Inserts `count` clones of `value` at the given index, returning an error rather than
    /// panicking if the index is out of bounds or the new length would overflow. On an error the
    /// Vector is unchanged.
    pub fn try_insert_n(
        &mut self,
        index: usize,
        count: usize,
        value: T,
    ) -> Result<(), IndexOrCapOverflow>
    where
        T: Clone,
    {
        if index > self.len {
            Err(IndexOutOfBounds { index, len: self.len })?
        }
        self.len.checked_add(count).ok_or(CapacityOverflow)?;

        let old_len = self.open_gap(index, count);

        for offset in 0..count {
            // SAFETY: open_gap has left count uninitialized slots starting at index, all within
            // the allocation. len has been set to index, so a panic in clone leaks the tail
            // rather than dropping uninitialized values.
            unsafe {
                self.arr.ptr.add(index + offset).write(MaybeUninit::new(value.clone()));
            }
        }

        self.len = old_len + count;
        Ok(())
    }

    /// Inserts every item produced by `iter` at the given index, preserving their order.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..3);
    /// vec.insert_iter(3, [7, 8]);
    /// vec.insert_iter(0, [5]);
    /// assert_eq!(&*vec, &[5, 0, 1, 2, 7, 8]);
    /// ```
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) {
        check_bound(index, self.len);

        // Collecting first means the gap is opened exactly once and a panicking iterator leaves
        // self untouched.
        let mut items: Vector<T> = iter.into_iter().collect();
        let count = items.len;

        let old_len = self.open_gap(index, count);

        // SAFETY: open_gap has left count uninitialized slots starting at index. items holds count
        // initialized values in a separate allocation, which are forgotten by setting its length
        // to zero once copied.
        unsafe {
            ptr::copy_nonoverlapping(
                items.arr.ptr.as_ptr().cast_const(),
                self.arr.ptr.add(index).as_ptr(),
                count,
            );
        }
        items.len = 0;

        self.len = old_len + count;
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        check_index(index, self.len);

        // SAFETY: index < len, so the value at index is initialized. It is read out before the
        // following values are moved down over it, all within the initialized range.
        let value = unsafe {
            let hole = self.arr.ptr.add(index).as_ptr();
            let value = hole.read().assume_init();
            ptr::copy(hole.add(1), hole, self.len - index - 1);
            value
        };

        self.len -= 1;
        value
    }

    /// Removes (and drops) every element in `range`, moving all following values down to fill the
    /// gap. Returns the index of the element that now follows the erased block, which is always
    /// `range.start`.
    ///
    /// Combined with the [`remove`](crate::algorithms::remove) and
    /// [`unique`](crate::algorithms::unique) algorithms, this completes the removal of elements
    /// that those algorithms have moved to the tail of the Vector.
    ///
    /// # Panics
    /// Panics if `range.start > range.end` or `range.end > len()`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..6);
    /// assert_eq!(vec.erase(1..3), 1);
    /// assert_eq!(&*vec, &[0, 3, 4, 5]);
    /// ```
    pub fn erase(&mut self, range: Range<usize>) -> usize {
        let Range { start, end } = range;
        check_bound(end, self.len);
        check_bound(start, end);

        let old_len = self.len;
        // Anything after start is leaked rather than double dropped if a destructor panics.
        self.len = start;

        for i in start..end {
            // SAFETY: i < old_len, so the value is initialized and is dropped exactly once.
            unsafe { self.arr.ptr.add(i).as_mut().assume_init_drop(); }
        }

        // SAFETY: Both ranges are within 0..old_len, and the values in end..old_len are moved
        // down into the slots that have just been dropped.
        unsafe {
            ptr::copy(
                self.arr.ptr.add(end).as_ptr().cast_const(),
                self.arr.ptr.add(start).as_ptr(),
                old_len - end,
            );
        }

        self.len = old_len - (end - start);
        start
    }

    /// Shortens the Vector to `len` elements, dropping the rest. Does nothing if the Vector is
    /// already no longer than `len`. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.erase(len..self.len);
        }
    }

    /// Drops every element, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        check_index(index, self.len);

        // SAFETY: index is < len and all values < len are initialized.
        unsafe {
            mem::replace(
                &mut self.arr[index],
                MaybeUninit::new(new_value)
            ).assume_init()
        }
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the new capacity overflows, or if the memory layout of the Vector would have a
    /// size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Adjusts the capacity of the Vector to `new_cap`, dropping elements if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn adjust_cap(&mut self, new_cap: usize) {
        // Drop the values that are about to be deallocated.
        self.truncate(new_cap);

        self.realloc_with_cap(new_cap);
    }

    /// Appends all elements from `other` to self, leaving the allocation of `other` to be freed.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn append(&mut self, mut other: Vector<T>) {
        self.reserve(other.len);

        // SAFETY: self is valid for writes from len to len + other.len and other is valid for
        // reads from 0 to other.len. They are separate allocations so they don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                other.arr.ptr.as_ptr().cast_const(),
                self.arr.ptr.add(self.len).as_ptr(),
                other.len,
            );
        }

        self.len += other.len;

        // The values now belong to self. Dropping other only frees its allocation.
        other.len = 0;
    }

    /// Creates a Vector from an [`ExactSizeIterator`], allocating exactly once.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn from_iter_sized<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + ExactSizeIterator,
    {
        let mut vec = Vector::with_cap(iter.len());

        // A checked push means an iterator misreporting its length can't cause an overflow.
        for item in iter {
            vec.push(item);
        }

        vec
    }

    /// Reallocates the internal Array with the provided capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        log::trace!(
            "reallocating Vector<{}> from capacity {} to {}",
            std::any::type_name::<T>(),
            self.cap(),
            new_cap,
        );
        self.arr.realloc(new_cap);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_CAP,
        );

        self.realloc_with_cap(new_cap);
    }

    /// Moves everything from `index` onwards up by `count` slots, reserving capacity as needed, and
    /// returns the previous length. Afterwards, len is set to `index`, so the moved tail is leaked
    /// rather than double dropped if a panic occurs before the caller restores the length.
    fn open_gap(&mut self, index: usize, count: usize) -> usize {
        self.reserve(count);

        let old_len = self.len;
        // SAFETY: The capacity is at least len + count, so the destination range
        // index + count..len + count lies within the allocation.
        unsafe {
            let src = self.arr.ptr.add(index).as_ptr();
            ptr::copy(src, src.add(count), old_len - index);
        }

        self.len = index;
        old_len
    }
}

impl<T: Default> Vector<T> {
    /// Creates a new Vector holding `len` default values.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_len(3);
    /// assert_eq!(&*vec, &[0, 0, 0]);
    /// ```
    pub fn with_len(len: usize) -> Vector<T> {
        Array::repeat_default(len).into()
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a new Vector holding `count` clones of `value`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let vec = Vector::repeat("a", 2);
    /// assert_eq!(&*vec, &["a", "a"]);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T> {
        Array::repeat_item(value, count).into()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { self.arr.ptr.add(i).as_mut().assume_init_drop(); }
        }

        // Implicitly drop self.arr, containing only MaybeUninit values without a no-op drop.
        // Doing so also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't mutated due to this function taking a &self.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't accessed due to this function taking a
        // &mut self. The total size is < isize::MAX as the result of being a valid Vector.
        unsafe {
            slice::from_raw_parts_mut(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        // Dealloc all uninit values > len.
        value.shrink_to_fit();

        let arr = mem::take(&mut value.arr);
        // value no longer owns anything, so it has nothing left to drop.
        value.len = 0;

        // SAFETY: After shrinking, the Array holds exactly len values, all of which are
        // initialized.
        unsafe { arr.assume_init() }
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_iter_sized(value.into_iter())
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    /// Clones every element of the slice, which may be any sub-range of another collection.
    fn from(value: &[T]) -> Self {
        Vector::from_iter_sized(value.iter().cloned())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        Vector::from_iter_sized(value.into_iter())
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugWith(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

traverse_as_slice!(Vector);
