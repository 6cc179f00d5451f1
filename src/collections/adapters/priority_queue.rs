use std::fmt::{self, Debug, Formatter};

use crate::algorithms::{make_heap_by, pop_heap_by, push_heap_by};
use crate::collections::contiguous::Vector;
use crate::collections::traits::{Compare, Less, Traverse};
use crate::util::fmt::DebugWith;

/// A priority queue backed by a binary heap in a [`Vector`].
///
/// The top of the queue is the greatest element under the comparator `C`: with the default
/// [`Less`] that is the maximum, and with [`Greater`](crate::collections::traits::Greater) the
/// minimum. Equivalent elements leave in an unspecified order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PriorityQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `top` | `O(1)` |
/// | `push` | `O(log n)`* |
/// | `pop` | `O(log n)` |
/// | `from` a Vector | `O(n)` |
///
/// \* Amortized, see [`Vector::push`].
///
/// # Examples
/// ```
/// # use standard_collections::collections::adapters::PriorityQueue;
/// # use standard_collections::collections::traits::Greater;
/// let mut max: PriorityQueue<_> = [10, 5, -1, 20].into_iter().collect();
/// assert_eq!(max.pop(), Some(20));
/// assert_eq!(max.top(), Some(&10));
///
/// let mut min = PriorityQueue::with_cmp(Greater);
/// min.extend([10, 5, -1, 20]);
/// assert_eq!(min.pop(), Some(-1));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, C = Less> {
    heap: Vector<T>,
    cmp: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates a new, empty max PriorityQueue.
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue::with_cmp(Less)
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates a new, empty PriorityQueue ordered by `cmp`.
    pub fn with_cmp(cmp: C) -> PriorityQueue<T, C> {
        PriorityQueue {
            heap: Vector::new(),
            cmp,
        }
    }

    /// Returns the number of elements in the PriorityQueue.
    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the PriorityQueue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns a reference to the greatest element, the next one to be popped.
    pub fn top(&self) -> Option<&T> {
        self.heap.front()
    }

    /// Returns a reference to the comparator ordering the PriorityQueue.
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Consumes the PriorityQueue, returning the backing Vector in heap order.
    pub fn into_inner(self) -> Vector<T> {
        self.heap
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Builds a PriorityQueue ordered by `cmp` from the elements of `vec`, in linear time.
    pub fn from_vector(mut vec: Vector<T>, cmp: C) -> PriorityQueue<T, C> {
        let all = vec.all();
        make_heap_by(&mut vec, all, |a: &T, b: &T| cmp.less(a, b));
        PriorityQueue { heap: vec, cmp }
    }

    /// Adds `value` to the PriorityQueue.
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        let all = self.heap.all();
        let cmp = &self.cmp;
        push_heap_by(&mut self.heap, all, |a: &T, b: &T| cmp.less(a, b));
    }

    /// Removes and returns the greatest element, or None if the PriorityQueue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let all = self.heap.all();
        let cmp = &self.cmp;
        pop_heap_by(&mut self.heap, all, |a: &T, b: &T| cmp.less(a, b));
        self.heap.pop()
    }
}

/// Heapifies the Vector under the natural ordering.
impl<T: Ord> From<Vector<T>> for PriorityQueue<T> {
    fn from(vec: Vector<T>) -> Self {
        PriorityQueue::from_vector(vec, Less)
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_vector(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, C> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("top", &self.top())
            .field("heap", &DebugWith(|f| f.debug_list().entries(self.heap.iter()).finish()))
            .field("len", &self.len())
            .finish()
    }
}
