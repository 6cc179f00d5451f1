use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::Iter;
use crate::collections::contiguous::Vector;
use crate::collections::hash::map::{BucketPos, HashMap};
use crate::collections::traits::Traverse;
use crate::util::error::InvalidPosition;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// A set of unique values, implemented as a [`HashMap`] with unit values.
///
/// All of the map's guarantees carry over, including the invalidation rules for [`BucketPos`].
/// Elements are never reachable mutably.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with capacity 0 and the default hasher.
    pub fn new() -> HashSet<T, B> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity and the default hasher.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Returns the length of the HashSet.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current capacity of the HashSet.
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Inserts `item` if the set doesn't already contain an equal element. Returns the position of
    /// the element equal to `item` and whether an insertion took place.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::hash::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(set.insert(5).1);
    /// let (pos, inserted) = set.insert(5);
    /// assert!(!inserted);
    /// assert_eq!(set.get(pos), &5);
    /// ```
    pub fn insert(&mut self, item: T) -> (BucketPos, bool) {
        self.inner.insert(item, ())
    }

    /// Returns true if the set contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns the position of the element equal to `item`, or the end position.
    pub fn find<Q>(&self, item: &Q) -> BucketPos
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.find(item)
    }

    /// Erases the element equal to `item`, returning it if it exists.
    pub fn erase<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.erase_entry(item).map(|e| e.0)
    }

    /// Erases the element at `pos`, returning the position to continue iterating from. See
    /// [`HashMap::erase_at`].
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an occupied bucket.
    pub fn erase_at(&mut self, pos: BucketPos) -> BucketPos {
        self.inner.erase_at(pos)
    }

    /// Returns the position of the first element, or the end position.
    pub fn begin(&self) -> BucketPos {
        self.inner.begin()
    }

    /// Returns the end position.
    pub const fn end(&self) -> BucketPos {
        self.inner.end()
    }

    /// Returns the position of the element after `pos`, or the end position.
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an occupied bucket.
    pub fn next(&self, pos: BucketPos) -> BucketPos {
        self.inner.next(pos)
    }

    /// Returns the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an occupied bucket.
    pub fn get(&self, pos: BucketPos) -> &T {
        self.try_get(pos).throw()
    }

    /// Returns the element at `pos`, or an [`InvalidPosition`] error if there isn't one.
    pub fn try_get(&self, pos: BucketPos) -> Result<&T, InvalidPosition> {
        self.inner.bucket(pos).map(|e| &e.0)
    }

    /// Increases the capacity so that len + `extra` elements fit without exceeding the load factor.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over references to every element, in bucket order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.keys())
    }
}

impl<T: Hash + Eq, B: BuildHasher> Traverse for HashSet<T, B> {
    type Item = T;

    type Pos = BucketPos;

    fn begin(&self) -> BucketPos {
        HashSet::begin(self)
    }

    fn end(&self) -> BucketPos {
        HashSet::end(self)
    }

    fn step(&self, pos: BucketPos) -> BucketPos {
        self.next(pos)
    }

    fn read(&self, pos: BucketPos) -> &T {
        self.get(pos)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = HashSet::new();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugWith(|f| write!(
                f, "#{{{}}}",
                self.iter()
                    .map(|i| format!("{i:?}"))
                    .collect::<Vector<String>>()
                    .join(", ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", &self.inner.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vector<String>>()
                .join(", ")
        )
    }
}
