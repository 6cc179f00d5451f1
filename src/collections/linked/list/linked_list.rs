use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::Range;

use super::{Iter, IterMut, Node};
use crate::collections::arena::{Arena, Key, Owner};
use crate::collections::contiguous::Vector;
use crate::collections::traits::{Compare, Less, Traverse, TraverseMut};
#[doc(inline)]
pub use crate::util::error::InvalidPosition;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// A position within a [`LinkedList`]: either one of its elements or the end position.
///
/// A ListPos stays valid while other elements are inserted or erased, and while the list is
/// sorted or reversed (it keeps referring to the same value). It is invalidated only when the
/// element it refers to is erased, or when the list is cleared. Using an invalidated ListPos is
/// always detected, as is using a ListPos taken from a different list (a clone included):
/// panicking accessors panic and `try_` accessors return [`InvalidPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListPos(pub(crate) Option<Key>, pub(crate) Owner);

impl ListPos {
    /// Returns true if this is the end position.
    pub const fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

/// A list with links in both directions.
///
/// Nodes are kept in an arena owned by the list rather than in individual allocations, which lets
/// [`ListPos`] handles be checked for validity instead of trusted. The list is circular through
/// its end position: stepping forward from the last element gives [`end`](LinkedList::end), and
/// stepping back from `end` gives the last element.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `m`: The number of items being inserted or erased.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `get` / `next` / `prev` | `O(1)` |
/// | `insert` / `erase` | `O(1)`* |
/// | `insert_n` / `insert_iter` / `erase_range` | `O(m)` |
/// | `append` | `O(m)` |
/// | `reverse` | `O(n)` |
/// | `sort` | `O(n log n)` |
/// | `remove` / `remove_if` / `unique` | `O(n)` |
/// | `find` / `contains` | `O(n)` |
///
/// \* Amortized, the node arena occasionally grows.
///
/// As a general note, modern computer architecture isn't kind to linked lists, because traversal
/// consists primarily of cache misses. [`Vector`] should be preferred for most applications unless
/// the list's `O(1)` insertion and erasure at known positions is being heavily utilized.
pub struct LinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Option<Key>,
    pub(crate) tail: Option<Key>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|key| &self.node(key).value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(key) => Some(&mut self.node_mut(key).value),
            None => None,
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|key| &self.node(key).value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.tail {
            Some(key) => Some(&mut self.node_mut(key).value),
            None => None,
        }
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head, value);
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|key| self.unlink(key).0)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|key| self.unlink(key).0)
    }

    /// Returns the position of the first element, or the end position for an empty list.
    pub const fn begin(&self) -> ListPos {
        self.pos(self.head)
    }

    /// Returns the end position, one past the last element.
    pub const fn end(&self) -> ListPos {
        self.pos(None)
    }

    /// Returns the position following `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn next(&self, pos: ListPos) -> ListPos {
        let key = self.check(pos).throw();
        self.pos(self.node(key).next)
    }

    /// Returns the position preceding `pos`. The position preceding the end is the last element,
    /// and the position preceding the first element is the end.
    ///
    /// # Panics
    /// Panics if `pos` has been invalidated.
    pub fn prev(&self, pos: ListPos) -> ListPos {
        match self.check_bound(pos).throw() {
            None => self.pos(self.tail),
            Some(key) => self.pos(self.node(key).prev),
        }
    }

    /// Returns a reference to the element at `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn get(&self, pos: ListPos) -> &T {
        self.try_get(pos).throw()
    }

    /// Returns a reference to the element at `pos`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_get(&self, pos: ListPos) -> Result<&T, InvalidPosition> {
        let key = self.check(pos)?;
        Ok(&self.node(key).value)
    }

    /// Returns a mutable reference to the element at `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn get_mut(&mut self, pos: ListPos) -> &mut T {
        self.try_get_mut(pos).throw()
    }

    /// Returns a mutable reference to the element at `pos`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, pos: ListPos) -> Result<&mut T, InvalidPosition> {
        let key = self.check(pos)?;
        Ok(&mut self.node_mut(key).value)
    }

    /// Inserts `value` before `pos` (at the back if `pos` is the end position), returning the
    /// position of the new element. No existing position is invalidated.
    ///
    /// # Panics
    /// Panics if `pos` has been invalidated.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 3].into_iter().collect();
    /// let three = list.next(list.begin());
    /// let two = list.insert(three, 2);
    /// list.insert(list.end(), 4);
    /// assert_eq!(list.get(two), &2);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, pos: ListPos, value: T) -> ListPos {
        let next = self.check_bound(pos).throw();
        let key = self.link_before(next, value);
        self.pos(Some(key))
    }

    /// Inserts `count` clones of `value` before `pos`, returning the position of the first
    /// inserted element, or `pos` if `count` is zero.
    ///
    /// # Panics
    /// Panics if `pos` has been invalidated.
    pub fn insert_n(&mut self, pos: ListPos, count: usize, value: T) -> ListPos
    where
        T: Clone,
    {
        self.insert_iter(pos, (0..count).map(|_| value.clone()))
    }

    /// Inserts every item produced by `iter` before `pos`, preserving their order. Returns the
    /// position of the first inserted element, or `pos` if nothing was inserted.
    ///
    /// # Panics
    /// Panics if `pos` has been invalidated.
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, pos: ListPos, iter: I) -> ListPos {
        let next = self.check_bound(pos).throw();
        let mut first = None;

        for item in iter {
            let key = self.link_before(next, item);
            first.get_or_insert(key);
        }

        match first {
            Some(key) => self.pos(Some(key)),
            None => pos,
        }
    }

    /// Erases the element at `pos`, returning the position that followed it. Only positions
    /// referring to the erased element are invalidated.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn erase(&mut self, pos: ListPos) -> ListPos {
        self.try_erase(pos).throw()
    }

    /// Erases the element at `pos`, returning the position that followed it, or an [`Err`] rather
    /// than panicking if `pos` doesn't refer to an element.
    pub fn try_erase(&mut self, pos: ListPos) -> Result<ListPos, InvalidPosition> {
        let key = self.check(pos)?;
        let (_, next) = self.unlink(key);
        Ok(self.pos(next))
    }

    /// Removes the element at `pos` and returns it, along with the position that followed it.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or has been invalidated.
    pub fn take(&mut self, pos: ListPos) -> (T, ListPos) {
        let key = self.check(pos).throw();
        let (value, next) = self.unlink(key);
        (value, self.pos(next))
    }

    /// Erases every element in the half-open `range`, returning `range.end`.
    ///
    /// # Panics
    /// Panics if a position in the range has been invalidated, or if `range.end` isn't reachable
    /// from `range.start`. In the latter case, every element from `range.start` to the end of the
    /// list has been erased by the time the panic occurs.
    pub fn erase_range(&mut self, range: Range<ListPos>) -> ListPos {
        self.check_bound(range.end).throw();
        let mut pos = range.start;
        while pos != range.end {
            pos = self.erase(pos);
        }
        pos
    }

    /// Removes every element, invalidating all positions except the end position.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Appends every element of `other` to the back of self.
    pub fn append(&mut self, other: LinkedList<T>) {
        self.extend(other);
    }

    /// Reverses the order of the list by relinking its nodes. No element is moved and every
    /// position stays attached to its value.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (1..=3).collect();
    /// let first = list.begin();
    /// list.reverse();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// assert_eq!(list.get(first), &1);
    /// assert_eq!(list.next(first), list.end());
    /// ```
    pub fn reverse(&mut self) {
        let mut curr = self.head;
        while let Some(key) = curr {
            let node = self.node_mut(key);
            mem::swap(&mut node.prev, &mut node.next);
            // The old next link is now stored in prev.
            curr = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Sorts the list with a stable merge sort over its links, using the natural ordering.
    /// Elements are never moved or cloned, and every position stays attached to its value.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [3, 1, 2].into_iter().collect();
    /// list.sort();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Less);
    }

    /// Sorts the list with a stable merge sort over its links, using the provided comparator.
    pub fn sort_by<C: Compare<T>>(&mut self, cmp: C) {
        let len = self.len();
        self.head = self.merge_sort(self.head, len, &cmp);

        // The sort only maintains next links, so restore prev links and the tail afterwards.
        let mut prev = None;
        let mut curr = self.head;
        while let Some(key) = curr {
            let node = self.node_mut(key);
            node.prev = prev;
            prev = Some(key);
            curr = node.next;
        }
        self.tail = prev;
    }

    /// Erases every element for which `pred` returns true, returning the number erased. The order
    /// of the remaining elements is preserved.
    pub fn remove_if<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let mut count = 0;
        let mut curr = self.head;

        while let Some(key) = curr {
            let node = self.node(key);
            curr = node.next;
            if pred(&node.value) {
                self.unlink(key);
                count += 1;
            }
        }

        count
    }

    /// Erases every element after the first of each run of consecutive elements considered equal
    /// by `eq`, returning the number erased. Each element is compared against the last element
    /// that was kept.
    ///
    /// Equal elements that aren't adjacent are not affected. Sort the list first to remove all
    /// duplicates.
    pub fn unique_by<F: FnMut(&T, &T) -> bool>(&mut self, mut eq: F) -> usize {
        let mut count = 0;
        let Some(mut kept) = self.head else {
            return 0;
        };
        let mut curr = self.node(kept).next;

        while let Some(key) = curr {
            curr = self.node(key).next;
            if eq(&self.node(kept).value, &self.node(key).value) {
                self.unlink(key);
                count += 1;
            } else {
                kept = key;
            }
        }

        count
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

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first element equal to `item`, or the end position.
    pub fn find(&self, item: &T) -> ListPos {
        let mut curr = self.head;
        while let Some(key) = curr {
            let node = self.node(key);
            if node.value == *item {
                break;
            }
            curr = node.next;
        }
        self.pos(curr)
    }

    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        !self.find(item).is_end()
    }

    /// Erases every element equal to `item`, returning the number erased.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 2, 3, 2].into_iter().collect();
    /// assert_eq!(list.remove(&2), 2);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn remove(&mut self, item: &T) -> usize {
        self.remove_if(|value| value == item)
    }

    /// Erases consecutive duplicate elements, keeping the first of each run and returning the
    /// number erased.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 1, 2, 2, 2, 1].into_iter().collect();
    /// assert_eq!(list.unique(), 3);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 1]);
    /// ```
    pub fn unique(&mut self) -> usize {
        self.unique_by(|a, b| a == b)
    }
}

impl<T: Default> LinkedList<T> {
    /// Creates a new LinkedList holding `len` default values.
    pub fn with_len(len: usize) -> LinkedList<T> {
        (0..len).map(|_| T::default()).collect()
    }
}

impl<T: Clone> LinkedList<T> {
    /// Creates a new LinkedList holding `count` clones of `value`.
    pub fn repeat(value: T, count: usize) -> LinkedList<T> {
        let mut list = LinkedList::new();
        list.insert_n(list.end(), count, value);
        list
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn pos(&self, node: Option<Key>) -> ListPos {
        ListPos(node, self.nodes.owner)
    }

    pub(crate) fn node(&self, key: Key) -> &Node<T> {
        match self.nodes.get(key) {
            Some(node) => node,
            None => unreachable!("list links always refer to live nodes"),
        }
    }

    pub(crate) fn node_mut(&mut self, key: Key) -> &mut Node<T> {
        match self.nodes.get_mut(key) {
            Some(node) => node,
            None => unreachable!("list links always refer to live nodes"),
        }
    }

    /// Resolves a position that must refer to an element.
    pub(crate) fn check(&self, pos: ListPos) -> Result<Key, InvalidPosition> {
        match pos.0 {
            Some(key) if pos.1 == self.nodes.owner && self.nodes.contains(key) => Ok(key),
            _ => Err(InvalidPosition),
        }
    }

    /// Resolves a position that may also be the end position.
    pub(crate) fn check_bound(&self, pos: ListPos) -> Result<Option<Key>, InvalidPosition> {
        match pos.0 {
            None if pos.1 == self.nodes.owner => Ok(None),
            None => Err(InvalidPosition),
            Some(_) => self.check(pos).map(Some),
        }
    }

    /// Links a new node holding `value` in before `next` (or at the back if `next` is None).
    pub(crate) fn link_before(&mut self, next: Option<Key>, value: T) -> Key {
        let prev = match next {
            Some(next) => self.node(next).prev,
            None => self.tail,
        };

        let key = self.nodes.insert(Node { value, prev, next });

        match prev {
            Some(prev) => self.node_mut(prev).next = Some(key),
            None => self.head = Some(key),
        }
        match next {
            Some(next) => self.node_mut(next).prev = Some(key),
            None => self.tail = Some(key),
        }

        key
    }

    /// Unlinks and frees the node at `key`, returning its value and the key of the following node.
    pub(crate) fn unlink(&mut self, key: Key) -> (T, Option<Key>) {
        let Some(Node { value, prev, next }) = self.nodes.remove(key) else {
            unreachable!("list links always refer to live nodes")
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }

        (value, next)
    }

    /// Sorts the chain of `len` nodes starting at `head` by next links only, returning the new
    /// head. The last node of the returned chain has no next link.
    fn merge_sort<C: Compare<T>>(&mut self, head: Option<Key>, len: usize, cmp: &C) -> Option<Key> {
        let Some(first) = head else {
            return None;
        };
        if len <= 1 {
            self.node_mut(first).next = None;
            return head;
        }

        let left_len = len / 2;
        let mut left_last = first;
        for _ in 1..left_len {
            left_last = self.node(left_last).next.unwrap_or(left_last);
        }
        let right = self.node_mut(left_last).next.take();

        let left = self.merge_sort(head, left_len, cmp);
        let right = self.merge_sort(right, len - left_len, cmp);
        self.merge(left, right, cmp)
    }

    /// Merges two sorted chains, taking from `left` when elements are equivalent to keep the sort
    /// stable.
    fn merge<C: Compare<T>>(
        &mut self,
        mut left: Option<Key>,
        mut right: Option<Key>,
        cmp: &C,
    ) -> Option<Key> {
        let mut head = None;
        let mut last: Option<Key> = None;

        loop {
            let taken = match (left, right) {
                (Some(l), Some(r)) => {
                    if cmp.less(&self.node(r).value, &self.node(l).value) {
                        right = self.node(r).next;
                        r
                    } else {
                        left = self.node(l).next;
                        l
                    }
                },
                (rest, None) | (None, rest) => {
                    match last {
                        Some(last) => self.node_mut(last).next = rest,
                        None => head = rest,
                    }
                    return head;
                },
            };

            match last {
                Some(last) => self.node_mut(last).next = Some(taken),
                None => head = Some(taken),
            }
            last = Some(taken);
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut prev = None;
        let mut curr = self.head;
        let mut count = 0;
        while let Some(key) = curr {
            let node = self.node(key);
            assert!(node.prev == prev, "prev link should point at the previous node");
            prev = Some(key);
            curr = node.next;
            count += 1;
        }
        assert!(self.tail == prev, "tail should be the last node");
        assert_eq!(count, self.len(), "every stored node should be linked");
    }
}

impl<T> Traverse for LinkedList<T> {
    type Item = T;

    type Pos = ListPos;

    fn begin(&self) -> ListPos {
        LinkedList::begin(self)
    }

    fn end(&self) -> ListPos {
        LinkedList::end(self)
    }

    fn step(&self, pos: ListPos) -> ListPos {
        self.next(pos)
    }

    fn read(&self, pos: ListPos) -> &T {
        self.get(pos)
    }
}

impl<T> TraverseMut for LinkedList<T> {
    fn read_mut(&mut self, pos: ListPos) -> &mut T {
        self.get_mut(pos)
    }

    fn swap_at(&mut self, a: ListPos, b: ListPos) {
        let a = self.check(a).throw();
        let b = self.check(b).throw();
        if let Some((a, b)) = self.nodes.get2_mut(a, b) {
            mem::swap(&mut a.value, &mut b.value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Clones the nodes in place, so the slots and generations of the copy match self. Positions
    /// into self are still rejected by the copy.
    fn clone(&self) -> Self {
        LinkedList {
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugWith(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }

        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") -> (")
        )
    }
}
