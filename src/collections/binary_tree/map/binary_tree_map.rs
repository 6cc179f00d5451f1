use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, Range};

use super::{Iter, Keys, Node, Values, ValuesMut};
use crate::collections::arena::{Arena, Key, Owner};
use crate::collections::contiguous::Vector;
use crate::collections::traits::{Compare, Less, Traverse};
#[doc(inline)]
pub use crate::util::error::{InvalidPosition, KeyNotFound};
use crate::util::fmt::{DebugRaw, DebugWith};
use crate::util::result::ResultExtension;

/// A position within a [`BinaryTreeMap`] or [`BinaryTreeSet`](super::super::BinaryTreeSet):
/// either one of its entries or the end position.
///
/// Entries never move between tree nodes, so a TreePos keeps referring to the same entry while
/// others are inserted or erased. It is invalidated only when its own entry is erased, or when
/// the tree is cleared. A TreePos only works with the tree it came from: handing it to any other
/// tree, a clone included, is reported as an [`InvalidPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreePos(pub(crate) Option<Key>, pub(crate) Owner);

impl TreePos {
    /// Returns true if this is the end position.
    pub const fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

/// A map of keys to values, ordered by the comparator `C`.
///
/// The map is a height-balanced (AVL) binary search tree. Two keys are considered the same key
/// when the comparator finds them equivalent, that is, when neither precedes the other. Iteration
/// visits the entries in ascending order according to `C`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the BinaryTreeMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` / `assign` | `O(log n)` |
/// | `get` / `at` / `find` / `contains` | `O(log n)` |
/// | `erase` / `erase_at` | `O(log n)` |
/// | `lower_bound` / `upper_bound` | `O(log n)` |
/// | `begin` / `next` / `prev` | `O(log n)`* |
/// | `clear` | `O(n)` |
///
/// \* Stepping through the whole map is `O(n)` in total.
pub struct BinaryTreeMap<K, V, C = Less> {
    pub(crate) nodes: Arena<Node<K, V>>,
    pub(crate) root: Option<Key>,
    pub(crate) cmp: C,
}

impl<K, V> BinaryTreeMap<K, V> {
    /// Creates a new, empty BinaryTreeMap ordered by [`Ord`].
    pub fn new() -> BinaryTreeMap<K, V> {
        BinaryTreeMap::with_cmp(Less)
    }
}

impl<K, V, C> BinaryTreeMap<K, V, C> {
    /// Creates a new, empty BinaryTreeMap ordered by `cmp`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinaryTreeMap;
    /// # use standard_collections::collections::traits::Greater;
    /// let mut map = BinaryTreeMap::with_cmp(Greater);
    /// map.insert(1, "one");
    /// map.insert(3, "three");
    /// map.insert(2, "two");
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> BinaryTreeMap<K, V, C> {
        BinaryTreeMap {
            nodes: Arena::new(),
            root: None,
            cmp,
        }
    }

    /// Returns the comparator ordering this map.
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of entries in the map.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry, invalidating every position.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the position of the first (least) entry, or the end position if the map is empty.
    pub fn begin(&self) -> TreePos {
        self.pos(self.root.map(|root| self.min_from(root)))
    }

    /// Returns the end position, one past the last entry.
    pub const fn end(&self) -> TreePos {
        self.pos(None)
    }

    /// Returns the position following `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn next(&self, pos: TreePos) -> TreePos {
        let key = self.check(pos).throw();
        self.pos(self.successor(key))
    }

    /// Returns the position preceding `pos`. The position preceding the end is the last entry, and
    /// the position preceding the first entry is the end.
    ///
    /// # Panics
    /// Panics if `pos` has been invalidated.
    pub fn prev(&self, pos: TreePos) -> TreePos {
        match self.check_bound(pos).throw() {
            None => self.pos(self.root.map(|root| self.max_from(root))),
            Some(key) => self.pos(self.predecessor(key)),
        }
    }

    /// Returns the entry at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn entry(&self, pos: TreePos) -> (&K, &V) {
        self.try_entry(pos).throw()
    }

    /// Returns the entry at `pos`, or an [`InvalidPosition`] error if there isn't one.
    pub fn try_entry(&self, pos: TreePos) -> Result<(&K, &V), InvalidPosition> {
        let (key, value) = &self.node(self.check(pos)?).entry;
        Ok((key, value))
    }

    /// Returns the entry at `pos`, with the value borrowed mutably. Keys are never mutable.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn entry_mut(&mut self, pos: TreePos) -> (&K, &mut V) {
        self.try_entry_mut(pos).throw()
    }

    /// Returns the entry at `pos` with the value borrowed mutably, or an [`InvalidPosition`] error
    /// if there isn't one.
    pub fn try_entry_mut(&mut self, pos: TreePos) -> Result<(&K, &mut V), InvalidPosition> {
        let key = self.check(pos)?;
        let (key, value) = &mut self.node_mut(key).entry;
        Ok((key, value))
    }

    /// Returns the first (least) entry, if any.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.try_entry(self.begin()).ok()
    }

    /// Returns the last (greatest) entry, if any.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.try_entry(self.prev(self.end())).ok()
    }

    /// Removes and returns the first (least) entry, if any.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let key = self.begin().0?;
        Some(self.unlink(key))
    }

    /// Removes and returns the last (greatest) entry, if any.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let key = self.prev(self.end()).0?;
        Some(self.unlink(key))
    }

    /// Erases the entry at `pos`, returning the position of the entry that followed it. Positions
    /// of other entries remain valid.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinaryTreeMap;
    /// let mut map: BinaryTreeMap<_, _> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
    /// let three = map.find(&3);
    /// let next = map.erase_at(map.find(&2));
    /// assert_eq!(next, three);
    /// assert_eq!(map.entry(three), (&3, &'c'));
    /// ```
    pub fn erase_at(&mut self, pos: TreePos) -> TreePos {
        let key = self.check(pos).throw();
        let next = self.successor(key);
        self.unlink(key);
        self.pos(next)
    }

    /// Erases every entry from `range.start` up to (but excluding) `range.end`, returning
    /// `range.end`.
    ///
    /// # Panics
    /// Panics if either bound has been invalidated, or if `range.end` can't be reached from
    /// `range.start`.
    pub fn erase_range(&mut self, range: Range<TreePos>) -> TreePos {
        self.check_bound(range.end).throw();
        let mut pos = range.start;
        while pos != range.end {
            pos = self.erase_at(pos);
        }
        pos
    }

    /// Returns a double-ended iterator over the entries, in ascending order.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        self.into_iter()
    }

    /// Returns an iterator over the keys, in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys(self.iter())
    }

    /// Returns an iterator over the values, in the ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values(self.iter())
    }

    /// Returns an iterator over mutable references to the values, in the ascending order of their
    /// keys.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        let mut order = Vector::with_cap(self.len());
        let mut curr = self.begin().0;
        while let Some(key) = curr {
            order.push(key);
            curr = self.successor(key);
        }

        ValuesMut {
            slots: self.nodes.slots_ptr(),
            order: order.into_iter(),
            _phantom: PhantomData,
        }
    }

    pub(crate) const fn pos(&self, node: Option<Key>) -> TreePos {
        TreePos(node, self.nodes.owner)
    }

    /// Resolves a position that must refer to an entry.
    pub(crate) fn check(&self, pos: TreePos) -> Result<Key, InvalidPosition> {
        match pos.0 {
            Some(key) if pos.1 == self.nodes.owner && self.nodes.contains(key) => Ok(key),
            _ => Err(InvalidPosition),
        }
    }

    /// Resolves a position that may also be the end position.
    pub(crate) fn check_bound(&self, pos: TreePos) -> Result<Option<Key>, InvalidPosition> {
        match pos.0 {
            None if pos.1 == self.nodes.owner => Ok(None),
            None => Err(InvalidPosition),
            Some(_) => self.check(pos).map(Some),
        }
    }

    /// Descends from the root looking for `key`. On a miss, returns the node that a new entry
    /// would hang off of, and on which side.
    fn search<Q>(&self, key: &Q) -> Result<Key, (Option<Key>, bool)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut parent = None;
        let mut go_left = false;
        let mut curr = self.root;

        while let Some(node_key) = curr {
            let node = self.node(node_key);
            let stored: &Q = node.entry.0.borrow();

            if self.cmp.less(key, stored) {
                go_left = true;
                curr = node.left;
            } else if self.cmp.less(stored, key) {
                go_left = false;
                curr = node.right;
            } else {
                return Ok(node_key);
            }
            parent = Some(node_key);
        }

        Err((parent, go_left))
    }

    /// Returns the deepest-leftmost node for which `goes_left` holds, where `goes_left` must be
    /// false for a prefix of the ordered entries and true for the rest.
    fn partition_point(&self, goes_left: impl Fn(&K) -> bool) -> TreePos {
        let mut candidate = None;
        let mut curr = self.root;

        while let Some(node_key) = curr {
            let node = self.node(node_key);
            if goes_left(&node.entry.0) {
                candidate = Some(node_key);
                curr = node.left;
            } else {
                curr = node.right;
            }
        }

        self.pos(candidate)
    }

    /// Checks the ordering, links, heights and balance of every node.
    #[cfg(test)]
    pub(crate) fn verify_invariants(&self)
    where
        C: Compare<K>,
    {
        fn visit<K, V, C: Compare<K>>(
            map: &BinaryTreeMap<K, V, C>,
            link: Option<Key>,
            parent: Option<Key>,
            count: &mut usize,
        ) -> usize {
            let Some(key) = link else {
                return 0;
            };
            let node = map.node(key);
            assert!(node.parent == parent, "parent link should point at the parent node");

            let left = visit(map, node.left, Some(key), count);
            *count += 1;
            let right = visit(map, node.right, Some(key), count);

            assert!(left.abs_diff(right) <= 1, "subtree heights should differ by at most one");
            assert_eq!(node.height, 1 + left.max(right), "stored height should be accurate");
            node.height
        }

        let mut count = 0;
        visit(self, self.root, None, &mut count);
        assert_eq!(count, self.len(), "every stored node should be linked");

        let keys: Vector<&K> = self.keys().collect();
        for pair in keys.windows(2) {
            assert!(self.cmp.less(pair[0], pair[1]), "keys should be strictly ascending");
        }
    }
}

impl<K, V, C: Compare<K>> BinaryTreeMap<K, V, C> {
    /// Inserts `value` under `key` if there is no equivalent key in the map already. Returns the
    /// position of the entry with that key and whether an insertion took place. An existing value
    /// is never overwritten, see [`assign`](BinaryTreeMap::assign) for that.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinaryTreeMap;
    /// let mut map = BinaryTreeMap::new();
    /// assert!(map.insert("a", 1).1);
    /// let (pos, inserted) = map.insert("a", 2);
    /// assert!(!inserted);
    /// assert_eq!(map.entry(pos), (&"a", &1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (TreePos, bool) {
        match self.search(&key) {
            Ok(found) => (self.pos(Some(found)), false),
            Err((parent, go_left)) => {
                let leaf = self.link_leaf(parent, go_left, (key, value));
                (self.pos(Some(leaf)), true)
            },
        }
    }

    /// Inserts `value` under `key`, overwriting and returning the previous value if the key was
    /// already present. The stored key is kept in that case.
    pub fn assign(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(found) => Some(mem::replace(&mut self.node_mut(found).entry.1, value)),
            Err((parent, go_left)) => {
                self.link_leaf(parent, go_left, (key, value));
                None
            },
        }
    }

    /// Returns a mutable reference to the value under `key`, inserting `V::default()` first if
    /// the key is absent.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinaryTreeMap;
    /// let mut counts = BinaryTreeMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_default(word) += 1;
    /// }
    /// assert_eq!(counts.get("a"), Some(&2));
    /// ```
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let node_key = match self.search(&key) {
            Ok(found) => found,
            Err((parent, go_left)) => self.link_leaf(parent, go_left, (key, V::default())),
        };
        &mut self.node_mut(node_key).entry.1
    }
}

impl<K, V, C> BinaryTreeMap<K, V, C> {
    /// Returns the entry under `key`, if present.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let (key, value) = &self.node(self.search(key).ok()?).entry;
        Some((key, value))
    }

    /// Returns a reference to the value under `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    /// Returns a mutable reference to the value under `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let node_key = self.search(key).ok()?;
        Some(&mut self.node_mut(node_key).entry.1)
    }

    /// Returns a reference to the value under `key`, or a [`KeyNotFound`] error if it is absent.
    pub fn at<'k, Q>(&self, key: &'k Q) -> Result<&V, KeyNotFound<'k, Q>>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get(key).ok_or(KeyNotFound { key })
    }

    /// Returns a mutable reference to the value under `key`, or a [`KeyNotFound`] error if it is
    /// absent.
    pub fn at_mut<'k, Q>(&mut self, key: &'k Q) -> Result<&mut V, KeyNotFound<'k, Q>>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get_mut(key).ok_or(KeyNotFound { key })
    }

    /// Returns the position of the entry under `key`, or the end position if it is absent.
    pub fn find<Q>(&self, key: &Q) -> TreePos
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.pos(self.search(key).ok())
    }

    /// Returns true if the map contains `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.search(key).is_ok()
    }

    /// Erases the entry under `key`, returning it if it was present.
    pub fn erase_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let node_key = self.search(key).ok()?;
        Some(self.unlink(node_key))
    }

    /// Erases the entry under `key`, returning its value if it was present.
    pub fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.erase_entry(key).map(|e| e.1)
    }

    /// Returns the position of the first entry whose key isn't less than `key`, or the end
    /// position if there is none.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::binary_tree::BinaryTreeMap;
    /// let map: BinaryTreeMap<_, _> = [(10, ()), (20, ()), (30, ())].into_iter().collect();
    /// assert_eq!(map.entry(map.lower_bound(&20)).0, &20);
    /// assert_eq!(map.entry(map.upper_bound(&20)).0, &30);
    /// assert_eq!(map.entry(map.lower_bound(&15)).0, &20);
    /// assert!(map.lower_bound(&31).is_end());
    /// ```
    pub fn lower_bound<Q>(&self, key: &Q) -> TreePos
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.partition_point(|stored| !self.cmp.less(Borrow::<Q>::borrow(stored), key))
    }

    /// Returns the position of the first entry whose key is greater than `key`, or the end
    /// position if there is none.
    pub fn upper_bound<Q>(&self, key: &Q) -> TreePos
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.partition_point(|stored| self.cmp.less(key, Borrow::<Q>::borrow(stored)))
    }

    /// Returns the range of positions holding keys equivalent to `key`. It is empty (with both
    /// bounds equal) when `key` is absent, and holds at most one entry otherwise.
    pub fn equal_range<Q>(&self, key: &Q) -> Range<TreePos>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.lower_bound(key)..self.upper_bound(key)
    }
}

impl<K, V, C> Traverse for BinaryTreeMap<K, V, C> {
    type Item = (K, V);

    type Pos = TreePos;

    fn begin(&self) -> TreePos {
        BinaryTreeMap::begin(self)
    }

    fn end(&self) -> TreePos {
        BinaryTreeMap::end(self)
    }

    fn step(&self, pos: TreePos) -> TreePos {
        self.next(pos)
    }

    fn read(&self, pos: TreePos) -> &(K, V) {
        &self.node(self.check(pos).throw()).entry
    }
}

impl<K, V, C, Q> Index<&Q> for BinaryTreeMap<K, V, C>
where
    K: Borrow<Q>,
    C: Compare<Q>,
    Q: Debug + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.at(key).throw()
    }
}

impl<K, V> Default for BinaryTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for BinaryTreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BinaryTreeMap::with_cmp(C::default());
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for BinaryTreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.assign(key, value);
        }
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for BinaryTreeMap<K, V, C> {
    fn clone(&self) -> Self {
        BinaryTreeMap {
            nodes: self.nodes.clone(),
            root: self.root,
            cmp: self.cmp.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for BinaryTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for BinaryTreeMap<K, V, C> {}

impl<K: Hash, V: Hash, C> Hash for BinaryTreeMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for entry in self.iter() {
            entry.hash(state);
        }
    }
}

impl<K: Debug, V: Debug, C> Debug for BinaryTreeMap<K, V, C> {
    /// The alternate form (`{:#?}`) also draws the shape of the tree.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let alternate = f.alternate();
        let mut out = f.debug_struct("BinaryTreeMap");
        out.field("contents", &DebugWith(|f| f.debug_map().entries(self.iter()).finish()))
            .field("len", &self.len());
        if alternate {
            out.field("tree", &DebugRaw(self.draw(self.root)));
        }
        out.finish()
    }
}

impl<K: Debug, V: Debug, C> Display for BinaryTreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
