use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::ops::Index;

use super::{IntoKeys, IntoValues, Iter, Keys, Values, ValuesMut};
use crate::collections::contiguous::Array;
use crate::collections::traits::Traverse;
use crate::util::error::{CapacityOverflow, InvalidPosition, KeyNotFound};
use crate::util::fmt::{DebugRaw, DebugWith};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A position within a [`HashMap`] or [`HashSet`](crate::collections::hash::HashSet): the index
/// of an occupied bucket, or the end position (equal to the capacity).
///
/// Any growth rehashes every entry and invalidates every BucketPos. Erasing an entry may shift
/// later entries of the same probe run back by one or more buckets, so erasure invalidates
/// positions to other entries too. A stale BucketPos either refers to an empty bucket (which is
/// detected) or to whichever entry now occupies the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketPos(pub(crate) usize);

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Entries are stored in a single [`Array`] of buckets using open addressing: a key is placed in
/// the first free bucket at or after the bucket its hash selects, wrapping at the capacity.
/// Erasure shifts later entries of the same run backwards instead of leaving tombstones.
///
/// A custom load factor is not supported at this point, with the default being 4/5.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` / `assign` / `get_or_default` | `O(1)`**, `O(n)` |
/// | `get` / `at` / `find` | `O(1)`* |
/// | `erase` / `erase_at` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
/// | `next` | `O(c / n)` average |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct location is found. This additional time is kept at a minimum and hash collisions are
/// unlikely especially with a large capacity.
///
/// \** If the HashMap doesn't have enough capacity for the new element, inserting will take
/// `O(n)`. \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Array<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the default value for `B`. Memory will be
    /// allocated when the capacity changes.
    pub fn new() -> HashMap<K, V, B> {
        HashMap {
            arr: Array::new(),
            len: 0,
            hasher: B::default(),
        }
    }

    /// Creates a new HashMap with the provided `cap`acity, allowing insertions without
    /// reallocation. The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap {
            arr: Array::repeat_default(cap),
            len: 0,
            hasher: B::default(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: Array::new(),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: Array::repeat_default(cap),
            len: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Inserts the provided `key`-`value` pair if the map doesn't already contain an equal key,
    /// increasing the capacity if required. Returns the position of the entry for `key` and
    /// whether an insertion took place. An existing entry is never overwritten: `value` is dropped
    /// instead. See [`assign`](HashMap::assign) to overwrite.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::hash::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// let (pos, inserted) = map.insert("a", 1);
    /// assert!(inserted);
    /// assert_eq!(map.insert("a", 2), (pos, false));
    /// assert_eq!(map.get("a"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (BucketPos, bool) {
        let index = self.find_or_make_room(&key);

        let bucket = &mut self.arr[index];
        let inserted = bucket.is_none();
        if inserted {
            *bucket = Some((key, value));
            self.len += 1;
        }

        (BucketPos(index), inserted)
    }

    /// Inserts the provided `key`-`value` pair, replacing the value of an existing entry with an
    /// equal key. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn assign(&mut self, key: K, value: V) -> Option<V> {
        let index = self.find_or_make_room(&key);

        // The bucket at index is either empty or contains an equal key.
        let bucket = &mut self.arr[index];
        match bucket {
            Some((_, existing)) => Some(mem::replace(existing, value)),
            None => {
                *bucket = Some((key, value));
                self.len += 1;
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the map doesn't contain the key.
        self.arr[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        match &mut self.arr[index] {
            Some(existing) => Some(&mut existing.1),
            None => None,
        }
    }

    /// Returns a reference to the value associated with `key`, or a [`KeyNotFound`] error carrying
    /// the key. Indexing (`map[&key]`) is the panicking equivalent.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::hash::HashMap;
    /// let map: HashMap<_, _> = [(1, "one")].into_iter().collect();
    /// assert_eq!(map.at(&1).ok(), Some(&"one"));
    /// assert_eq!(map.at(&2).map_err(|e| *e.key), Err(2));
    /// ```
    pub fn at<'k, Q>(&self, key: &'k Q) -> Result<&V, KeyNotFound<'k, Q>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(KeyNotFound { key })
    }

    /// Returns a mutable reference to the value associated with `key`, or a [`KeyNotFound`] error
    /// carrying the key.
    pub fn at_mut<'k, Q>(&mut self, key: &'k Q) -> Result<&mut V, KeyNotFound<'k, Q>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).ok_or(KeyNotFound { key })
    }

    /// Returns a mutable reference to the value associated with `key`, first inserting
    /// [`V::default()`](Default::default) if there is no such entry.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let index = self.find_or_make_room(&key);

        let bucket = &mut self.arr[index];
        if bucket.is_none() {
            self.len += 1;
        }
        &mut bucket.get_or_insert_with(|| (key, V::default())).1
    }

    /// Returns the position of the entry for `key`, or the end position if there isn't one.
    pub fn find<Q>(&self, key: &Q) -> BucketPos
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find_index_for_key(key) {
            Some(index) if self.arr[index].is_some() => BucketPos(index),
            _ => self.end(),
        }
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Erases the entry associated with `key`, returning it if it exists.
    pub fn erase_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;
        self.remove_bucket(index)
    }

    /// Erases the entry associated with `key`, returning the value if it exists.
    pub fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.erase_entry(key).map(|(_, v)| v)
    }

    /// Erases the entry at `pos`, returning the position to continue iterating from.
    ///
    /// If erasure shifted a later entry into the bucket at `pos`, `pos` itself is returned.
    /// Otherwise, the next occupied bucket is returned. An entry that had wrapped around from the
    /// start of the table may be moved to a bucket after `pos`, in which case it is visited again.
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an occupied bucket.
    pub fn erase_at(&mut self, pos: BucketPos) -> BucketPos {
        let index = self.check(pos).throw();
        self.remove_bucket(index);

        if self.arr[index].is_some() {
            pos
        } else {
            self.first_occupied_from(index + 1)
        }
    }

    /// Returns the position of the first occupied bucket, or the end position.
    pub fn begin(&self) -> BucketPos {
        self.first_occupied_from(0)
    }

    /// Returns the end position, which is equal to the capacity.
    pub const fn end(&self) -> BucketPos {
        BucketPos(self.cap())
    }

    /// Returns the position of the next occupied bucket after `pos`, or the end position.
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an occupied bucket.
    pub fn next(&self, pos: BucketPos) -> BucketPos {
        let index = self.check(pos).throw();
        self.first_occupied_from(index + 1)
    }

    /// Returns the entry at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an occupied bucket.
    pub fn entry(&self, pos: BucketPos) -> (&K, &V) {
        self.try_entry(pos).throw()
    }

    /// Returns the entry at `pos`, or an [`InvalidPosition`] error if the bucket is empty or out of
    /// range.
    pub fn try_entry(&self, pos: BucketPos) -> Result<(&K, &V), InvalidPosition> {
        self.bucket(pos).map(|(k, v)| (k, v))
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra)
            .and_then(|n| n.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .ok_or(CapacityOverflow)
            .throw()
            .div_ceil(LOAD_FACTOR_NUMERATOR);
        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Drops every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        for bucket in self.arr.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }

    /// Returns and iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns and iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns and iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            len: self.len(),
            inner: self.arr.iter_mut(),
        }
    }

    /// Returns and iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length exceeds the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len >= self.arr.size() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_ALLOCATED_CAP,
        );

        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the HashMap to have capacity equal to `new_cap`, if doing so wouldn't cause the
    /// map to overload. (There isn't a logical way for the map to shrink and drop entries, so this
    /// isn't allowed.)
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        // Can't handle dropping values at this point.
        if new_cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < self.len { return; }

        log::trace!(
            "rehashing HashMap<{}, {}> with {} entries from capacity {} to {}",
            std::any::type_name::<K>(),
            std::any::type_name::<V>(),
            self.len,
            self.cap(),
            new_cap,
        );

        // Replace the Array first so that we can consume the old Array.
        let old_arr = mem::replace(&mut self.arr, Array::repeat_default(new_cap));

        for entry in old_arr.into_iter().flatten() {
            // SAFETY: If the new capacity is 0, the old_arr has no items and we can't enter this
            // loop.
            let index = unsafe { self.find_index_for_key(&entry.0).unreachable() };

            // Move the bucket into the new Array.
            self.arr[index] = Some(entry);
        }
    }

    /// Finds the bucket for inserting `key`, growing first if `key` is absent and the map is at its
    /// load capacity. The returned bucket is either empty or contains an equal key.
    pub(crate) fn find_or_make_room(&mut self, key: &K) -> usize {
        if let Some(index) = self.find_index_for_key(key) {
            if self.arr[index].is_some() || !self.should_grow() {
                return index;
            }
        }

        self.grow();
        // SAFETY: The capacity is at least MIN_ALLOCATED_CAP after growing.
        unsafe { self.find_index_for_key(key).unreachable() }
    }

    /// Calculates the ideal index of a bucket for the provided `hashable` (or None if the HashMap
    /// has 0 capacity). This method doesn't consider hash collisions, see
    /// [`HashMap::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Finds the first valid index for the provided `key` (or None if the HashMap has 0 capacity).
    /// This is done by calculating the ideal index and then iterating until a bucket is found that
    /// is empty or has an equal key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // This is where Eq comes in: while there is a value at the current index, but the key
        // isn't equal, increment the index (wrapping at the capacity) and check again. The load
        // factor guarantees an empty bucket, so this terminates.
        loop {
            match &self.arr[index] {
                Some(existing) if existing.0.borrow() != key => {
                    index = (index + 1) % self.cap();
                },
                _ => return Some(index),
            }
        }
    }

    /// Takes the entry out of the bucket at `index`, then closes the gap by shifting back later
    /// entries of the same run that are allowed to move into it.
    pub(crate) fn remove_bucket(&mut self, index: usize) -> Option<(K, V)> {
        let removed = self.arr[index].take()?;
        self.len -= 1;

        let cap = self.cap();
        let mut hole = index;
        let mut next = (index + 1) % cap;

        // The run ends at the first empty bucket, which is at worst the hole itself.
        while let Some(ideal) = self.arr[next].as_ref().and_then(|(k, _)| self.index_from_key(k)) {
            // An entry can fill the hole unless its ideal bucket lies cyclically within
            // (hole, next], in which case moving it would put it before its ideal bucket.
            if (next + cap - ideal) % cap >= (next + cap - hole) % cap {
                self.arr[hole] = self.arr[next].take();
                hole = next;
            }
            next = (next + 1) % cap;
        }

        Some(removed)
    }

    pub(crate) fn first_occupied_from(&self, start: usize) -> BucketPos {
        let index = (start..self.cap())
            .find(|&i| self.arr[i].is_some())
            .unwrap_or(self.cap());
        BucketPos(index)
    }

    pub(crate) fn check(&self, pos: BucketPos) -> Result<usize, InvalidPosition> {
        match self.arr.get(pos.0) {
            Some(Some(_)) => Ok(pos.0),
            _ => Err(InvalidPosition),
        }
    }

    pub(crate) fn bucket(&self, pos: BucketPos) -> Result<&(K, V), InvalidPosition> {
        self.arr.get(pos.0).and_then(Option::as_ref).ok_or(InvalidPosition)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Traverse for HashMap<K, V, B> {
    type Item = (K, V);

    type Pos = BucketPos;

    fn begin(&self) -> BucketPos {
        HashMap::begin(self)
    }

    fn end(&self) -> BucketPos {
        HashMap::end(self)
    }

    fn step(&self, pos: BucketPos) -> BucketPos {
        self.next(pos)
    }

    fn read(&self, pos: BucketPos) -> &(K, V) {
        self.bucket(pos).throw()
    }
}

impl<K, V, B, Q> Index<&Q> for HashMap<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    B: BuildHasher,
    Q: Hash + Eq + Debug + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.at(key).throw()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for (key, value) in iter {
            self.assign(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            arr: self.arr.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("buckets", &DebugWith(|f| f.debug_list().entries(
                self.arr.iter()
                    .map(|o| DebugRaw(match o {
                        Some((k, v)) => format!("({k:?}: {v:?})"),
                        None => "-".into(),
                    }))
            ).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter().map(|(k, v)| (k, v))).finish()
    }
}
