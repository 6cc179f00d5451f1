use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Range;

use super::Iter;
use crate::collections::binary_tree::map::{BinaryTreeMap, TreePos};
use crate::collections::traits::{Compare, Less, Traverse};
use crate::util::error::InvalidPosition;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// A set of unique values ordered by the comparator `C`, implemented as a [`BinaryTreeMap`] with
/// unit values.
///
/// Two values are the same element when the comparator finds them equivalent. [`TreePos`]
/// positions behave exactly as they do for the map, and elements are never reachable mutably.
///
/// # Examples
/// ```
/// # use standard_collections::collections::binary_tree::BinaryTreeSet;
/// # use standard_collections::collections::traits::Greater;
/// let set: BinaryTreeSet<_> = [2, 1, 3].into_iter().collect();
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
///
/// let mut desc = BinaryTreeSet::with_cmp(Greater);
/// desc.extend([2, 1, 3]);
/// assert_eq!(desc.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub struct BinaryTreeSet<T, C = Less> {
    pub(crate) inner: BinaryTreeMap<T, (), C>,
}

impl<T> BinaryTreeSet<T> {
    /// Creates a new, empty BinaryTreeSet ordered by [`Ord`].
    pub fn new() -> BinaryTreeSet<T> {
        BinaryTreeSet {
            inner: BinaryTreeMap::new(),
        }
    }
}

impl<T, C> BinaryTreeSet<T, C> {
    /// Creates a new, empty BinaryTreeSet ordered by `cmp`.
    pub fn with_cmp(cmp: C) -> BinaryTreeSet<T, C> {
        BinaryTreeSet {
            inner: BinaryTreeMap::with_cmp(cmp),
        }
    }

    /// Returns the comparator ordering this set.
    pub const fn comparator(&self) -> &C {
        self.inner.comparator()
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drops every element, invalidating every position.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns the position of the least element, or the end position if the set is empty.
    pub fn begin(&self) -> TreePos {
        self.inner.begin()
    }

    /// Returns the end position.
    pub const fn end(&self) -> TreePos {
        self.inner.end()
    }

    /// Returns the position following `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn next(&self, pos: TreePos) -> TreePos {
        self.inner.next(pos)
    }

    /// Returns the position preceding `pos`, wrapping through the end position.
    ///
    /// # Panics
    /// Panics if `pos` has been invalidated.
    pub fn prev(&self, pos: TreePos) -> TreePos {
        self.inner.prev(pos)
    }

    /// Returns the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn get(&self, pos: TreePos) -> &T {
        self.try_get(pos).throw()
    }

    /// Returns the element at `pos`, or an [`InvalidPosition`] error if there isn't one.
    pub fn try_get(&self, pos: TreePos) -> Result<&T, InvalidPosition> {
        self.inner.try_entry(pos).map(|e| e.0)
    }

    /// Returns the least element, if any.
    pub fn first(&self) -> Option<&T> {
        self.inner.first().map(|e| e.0)
    }

    /// Returns the greatest element, if any.
    pub fn last(&self) -> Option<&T> {
        self.inner.last().map(|e| e.0)
    }

    /// Removes and returns the least element, if any.
    pub fn pop_first(&mut self) -> Option<T> {
        self.inner.pop_first().map(|e| e.0)
    }

    /// Removes and returns the greatest element, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        self.inner.pop_last().map(|e| e.0)
    }

    /// Erases the element at `pos`, returning the position of the element that followed it.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn erase_at(&mut self, pos: TreePos) -> TreePos {
        self.inner.erase_at(pos)
    }

    /// Erases every element in `range`, returning `range.end`. See
    /// [`BinaryTreeMap::erase_range`].
    pub fn erase_range(&mut self, range: Range<TreePos>) -> TreePos {
        self.inner.erase_range(range)
    }

    /// Returns a double-ended iterator over the elements, in ascending order.
    pub fn iter(&self) -> Iter<'_, T, C> {
        self.into_iter()
    }

    /// Returns true if the set contains an element equivalent to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns the position of the element equivalent to `item`, or the end position.
    pub fn find<Q>(&self, item: &Q) -> TreePos
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.inner.find(item)
    }

    /// Erases the element equivalent to `item`, returning it if it was present.
    pub fn erase<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.inner.erase_entry(item).map(|e| e.0)
    }

    /// Returns the position of the first element not less than `item`, or the end position.
    pub fn lower_bound<Q>(&self, item: &Q) -> TreePos
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.inner.lower_bound(item)
    }

    /// Returns the position of the first element greater than `item`, or the end position.
    pub fn upper_bound<Q>(&self, item: &Q) -> TreePos
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.inner.upper_bound(item)
    }

    /// Returns the range of positions holding elements equivalent to `item`.
    pub fn equal_range<Q>(&self, item: &Q) -> Range<TreePos>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.inner.equal_range(item)
    }
}

impl<T, C: Compare<T>> BinaryTreeSet<T, C> {
    /// Inserts `item` if the set doesn't already contain an equivalent element. Returns the
    /// position of the element equivalent to `item` and whether an insertion took place.
    pub fn insert(&mut self, item: T) -> (TreePos, bool) {
        self.inner.insert(item, ())
    }
}

impl<T, C> Traverse for BinaryTreeSet<T, C> {
    type Item = T;

    type Pos = TreePos;

    fn begin(&self) -> TreePos {
        BinaryTreeSet::begin(self)
    }

    fn end(&self) -> TreePos {
        BinaryTreeSet::end(self)
    }

    fn step(&self, pos: TreePos) -> TreePos {
        self.next(pos)
    }

    fn read(&self, pos: TreePos) -> &T {
        self.get(pos)
    }
}

impl<T> Default for BinaryTreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryTreeSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BinaryTreeSet::with_cmp(C::default());
        set.extend(iter);
        set
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryTreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Clone, C: Clone> Clone for BinaryTreeSet<T, C> {
    fn clone(&self) -> Self {
        BinaryTreeSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq, C> PartialEq for BinaryTreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, C> Eq for BinaryTreeSet<T, C> {}

impl<T: Hash, C> Hash for BinaryTreeSet<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}

impl<T: Debug, C> Debug for BinaryTreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTreeSet")
            .field("contents", &DebugWith(|f| f.debug_set().entries(self.iter()).finish()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug, C> Display for BinaryTreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
