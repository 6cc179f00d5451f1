//! Binary max-heaps laid out over a random access range: the element at offset `i` has its
//! children at `2i + 1` and `2i + 2`. "Max" is relative to the comparator, so with
//! [`Greater`](crate::collections::traits::Greater) the front of the heap is the least element.

use std::ops::Range;

use crate::collections::traits::{Compare, Less, RandomAccess, Traverse, TraverseMut};

/// Rearranges `range` into a heap.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let mut vec: Vector<_> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
/// let all = vec.all();
/// algorithms::make_heap(&mut vec, all.clone());
/// assert!(algorithms::is_heap(&vec, all));
/// assert_eq!(vec[0], 9);
/// ```
pub fn make_heap<S>(seq: &mut S, range: Range<S::Pos>)
where
    S: TraverseMut + RandomAccess + ?Sized,
    S::Item: Ord,
{
    make_heap_by(seq, range, Less)
}

/// Rearranges `range` into a heap ordered by `cmp`.
pub fn make_heap_by<S, C>(seq: &mut S, range: Range<S::Pos>, cmp: C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    let len = seq.distance(range.start, range.end);
    heapify(seq, range.start, len, &cmp);
}

/// Takes a heap followed by one extra element as `range`, and sifts that last element up so that
/// the whole range is a heap.
pub fn push_heap<S>(seq: &mut S, range: Range<S::Pos>)
where
    S: TraverseMut + RandomAccess + ?Sized,
    S::Item: Ord,
{
    push_heap_by(seq, range, Less)
}

/// Like [`push_heap`], for a heap ordered by `cmp`.
pub fn push_heap_by<S, C>(seq: &mut S, range: Range<S::Pos>, cmp: C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    let len = seq.distance(range.start, range.end);
    if len > 1 {
        sift_up(seq, range.start, len - 1, &cmp);
    }
}

/// Moves the front (greatest) element of the heap `range` to the last position of the range, and
/// restores the heap over the elements before it.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let mut vec: Vector<_> = [1, 5, 3].into_iter().collect();
/// let all = vec.all();
/// algorithms::make_heap(&mut vec, all.clone());
/// algorithms::pop_heap(&mut vec, all);
/// assert_eq!(vec.pop(), Some(5));
/// assert_eq!(vec[0], 3);
/// ```
pub fn pop_heap<S>(seq: &mut S, range: Range<S::Pos>)
where
    S: TraverseMut + RandomAccess + ?Sized,
    S::Item: Ord,
{
    pop_heap_by(seq, range, Less)
}

/// Like [`pop_heap`], for a heap ordered by `cmp`.
pub fn pop_heap_by<S, C>(seq: &mut S, range: Range<S::Pos>, cmp: C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    let len = seq.distance(range.start, range.end);
    if len > 1 {
        let last = seq.advance(range.start, len - 1);
        seq.swap_at(range.start, last);
        sift_down(seq, range.start, 0, len - 1, &cmp);
    }
}

/// Returns true if `range` is a heap.
pub fn is_heap<S>(seq: &S, range: Range<S::Pos>) -> bool
where
    S: Traverse + RandomAccess + ?Sized,
    S::Item: Ord,
{
    is_heap_by(seq, range, Less)
}

/// Returns true if `range` is a heap ordered by `cmp`.
pub fn is_heap_by<S, C>(seq: &S, range: Range<S::Pos>, cmp: C) -> bool
where
    S: Traverse + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    let len = seq.distance(range.start, range.end);
    (1..len).all(|child| {
        let parent = seq.advance(range.start, (child - 1) / 2);
        let child = seq.advance(range.start, child);
        !cmp.less(seq.read(parent), seq.read(child))
    })
}

/// Sorts the `len` elements from `first` in ascending order by `cmp`, using the heap.
pub(crate) fn heap_sort<S, C>(seq: &mut S, first: S::Pos, len: usize, cmp: &C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    heapify(seq, first, len, cmp);
    for end in (1..len).rev() {
        let last = seq.advance(first, end);
        seq.swap_at(first, last);
        sift_down(seq, first, 0, end, cmp);
    }
}

fn heapify<S, C>(seq: &mut S, first: S::Pos, len: usize, cmp: &C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    for hole in (0..len / 2).rev() {
        sift_down(seq, first, hole, len, cmp);
    }
}

/// Returns true if the element at offset `a` precedes the one at offset `b`.
pub(crate) fn less_at<S, C>(seq: &S, first: S::Pos, a: usize, b: usize, cmp: &C) -> bool
where
    S: Traverse + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    cmp.less(seq.read(seq.advance(first, a)), seq.read(seq.advance(first, b)))
}

pub(crate) fn swap_offsets<S>(seq: &mut S, first: S::Pos, a: usize, b: usize)
where
    S: TraverseMut + RandomAccess + ?Sized,
{
    let (a, b) = (seq.advance(first, a), seq.advance(first, b));
    seq.swap_at(a, b);
}

fn sift_up<S, C>(seq: &mut S, first: S::Pos, mut hole: usize, cmp: &C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    while hole > 0 {
        let parent = (hole - 1) / 2;
        if !less_at(seq, first, parent, hole, cmp) {
            break;
        }
        swap_offsets(seq, first, parent, hole);
        hole = parent;
    }
}

fn sift_down<S, C>(seq: &mut S, first: S::Pos, mut hole: usize, len: usize, cmp: &C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    loop {
        let left = 2 * hole + 1;
        if left >= len {
            break;
        }

        // Follow the greater child.
        let right = left + 1;
        let child = if right < len && less_at(seq, first, left, right, cmp) {
            right
        } else {
            left
        };

        if !less_at(seq, first, hole, child, cmp) {
            break;
        }
        swap_offsets(seq, first, hole, child);
        hole = child;
    }
}
