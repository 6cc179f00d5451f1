use std::mem;
use std::ops::Range;

use super::heap::{heap_sort, less_at, swap_offsets};
use crate::collections::contiguous::Vector;
use crate::collections::traits::{Compare, Less, RandomAccess, Traverse, TraverseMut};

/// Ranges at most this long are finished off with an insertion sort.
const INSERTION_THRESHOLD: usize = 16;

/// Sorts `range` in ascending order. The sort is unstable: equal elements may be reordered.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let mut vec: Vector<_> = [5, 2, 9, 1, 5, 6].into_iter().collect();
/// let all = vec.all();
/// algorithms::sort(&mut vec, all);
/// assert_eq!(&*vec, &[1, 2, 5, 5, 6, 9]);
/// ```
pub fn sort<S>(seq: &mut S, range: Range<S::Pos>)
where
    S: TraverseMut + RandomAccess + ?Sized,
    S::Item: Ord,
{
    sort_by(seq, range, Less)
}

/// Sorts `range` in ascending order by `cmp`. The sort is unstable.
///
/// This is an introsort: quicksort with a median of three pivot, falling back to heapsort once
/// the recursion gets too deep, which keeps the worst case at `O(n log n)` comparisons.
pub fn sort_by<S, C>(seq: &mut S, range: Range<S::Pos>, cmp: C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    let len = seq.distance(range.start, range.end);
    let depth_limit = 2 * (usize::BITS - len.leading_zeros()) as usize;
    introsort(seq, range.start, 0..len, depth_limit, &cmp);
}

fn introsort<S, C>(seq: &mut S, first: S::Pos, mut span: Range<usize>, mut depth: usize, cmp: &C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    while span.len() > INSERTION_THRESHOLD {
        if depth == 0 {
            let start = seq.advance(first, span.start);
            heap_sort(seq, start, span.len(), cmp);
            return;
        }
        depth -= 1;

        // Recurse into the smaller side, loop over the larger one.
        let pivot = partition_around_pivot(seq, first, span.clone(), cmp);
        if pivot - span.start < span.end - pivot {
            introsort(seq, first, span.start..pivot, depth, cmp);
            span.start = pivot + 1;
        } else {
            introsort(seq, first, pivot + 1..span.end, depth, cmp);
            span.end = pivot;
        }
    }

    insertion_sort(seq, first, span, cmp);
}

/// Partitions `span` around a median of three pivot, returning the offset the pivot ends up at.
/// Everything before it doesn't succeed it and everything after it doesn't precede it.
fn partition_around_pivot<S, C>(seq: &mut S, first: S::Pos, span: Range<usize>, cmp: &C) -> usize
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    let (lo, hi) = (span.start, span.end);
    let mid = lo + span.len() / 2;

    if less_at(seq, first, mid, lo, cmp) {
        swap_offsets(seq, first, mid, lo);
    }
    if less_at(seq, first, hi - 1, mid, cmp) {
        swap_offsets(seq, first, hi - 1, mid);
    }
    if less_at(seq, first, mid, lo, cmp) {
        swap_offsets(seq, first, mid, lo);
    }
    // The pivot waits at lo until its final position is known.
    swap_offsets(seq, first, mid, lo);

    let mut i = lo + 1;
    let mut j = hi - 1;
    loop {
        while i <= j && less_at(seq, first, i, lo, cmp) {
            i += 1;
        }
        while i <= j && less_at(seq, first, lo, j, cmp) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        swap_offsets(seq, first, i, j);
        i += 1;
        j -= 1;
    }

    swap_offsets(seq, first, lo, j);
    j
}

fn insertion_sort<S, C>(seq: &mut S, first: S::Pos, span: Range<usize>, cmp: &C)
where
    S: TraverseMut + RandomAccess + ?Sized,
    C: Compare<S::Item>,
{
    for i in span.start + 1..span.end {
        let mut j = i;
        while j > span.start && less_at(seq, first, j, j - 1, cmp) {
            swap_offsets(seq, first, j, j - 1);
            j -= 1;
        }
    }
}

/// Sorts `range` in ascending order, keeping equal elements in their original order.
///
/// Allocates a buffer of positions for the range. Works on any [`TraverseMut`] collection, not
/// just random access ones.
pub fn stable_sort<S>(seq: &mut S, range: Range<S::Pos>)
where
    S: TraverseMut + ?Sized,
    S::Item: Ord,
{
    stable_sort_by(seq, range, Less)
}

/// Sorts `range` in ascending order by `cmp`, keeping equivalent elements in their original order.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let mut vec: Vector<_> = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into_iter().collect();
/// let all = vec.all();
/// algorithms::stable_sort_by(&mut vec, all, |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
/// assert_eq!(&*vec, &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn stable_sort_by<S, C>(seq: &mut S, range: Range<S::Pos>, cmp: C)
where
    S: TraverseMut + ?Sized,
    C: Compare<S::Item>,
{
    let positions = positions_of(seq, range);
    let len = positions.len();

    // A bottom up merge sort over offsets into the range. Taking from the left run on ties keeps
    // the sort stable.
    let mut order: Vector<usize> = (0..len).collect();
    let mut buffer: Vector<usize> = Vector::repeat(0, len);
    let mut width = 1;
    while width < len {
        let mut lo = 0;
        while lo < len {
            let mid = (lo + width).min(len);
            let hi = (lo + 2 * width).min(len);
            let (mut left, mut right) = (lo, mid);
            for out in lo..hi {
                let take_right = right < hi
                    && (left >= mid
                        || cmp.less(
                            seq.read(positions[order[right]]),
                            seq.read(positions[order[left]]),
                        ));
                if take_right {
                    buffer[out] = order[right];
                    right += 1;
                } else {
                    buffer[out] = order[left];
                    left += 1;
                }
            }
            lo = hi;
        }
        mem::swap(&mut order, &mut buffer);
        width *= 2;
    }

    permute(seq, &positions, &order);
}

/// Moves the elements of `range` satisfying `pred` before those that don't, keeping the relative
/// order within both groups. Returns the position of the first element of the second group.
///
/// Allocates a buffer of positions for the range.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let mut vec: Vector<_> = (1..=8).collect();
/// let all = vec.all();
/// let boundary = algorithms::stable_partition(&mut vec, all, |i| i % 2 == 0);
/// assert_eq!(boundary, 4);
/// assert_eq!(&*vec, &[2, 4, 6, 8, 1, 3, 5, 7]);
/// ```
pub fn stable_partition<S, P>(seq: &mut S, range: Range<S::Pos>, mut pred: P) -> S::Pos
where
    S: TraverseMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let end = range.end;
    let positions = positions_of(seq, range);

    let mut order = Vector::with_cap(positions.len());
    let mut rest = Vector::new();
    for (offset, pos) in positions.iter().enumerate() {
        if pred(seq.read(*pos)) {
            order.push(offset);
        } else {
            rest.push(offset);
        }
    }
    let boundary = positions.get(order.len()).copied().unwrap_or(end);
    order.append(rest);

    permute(seq, &positions, &order);
    boundary
}

/// Returns true if `range` is sorted in ascending order.
pub fn is_sorted<S>(seq: &S, range: Range<S::Pos>) -> bool
where
    S: Traverse + ?Sized,
    S::Item: Ord,
{
    is_sorted_by(seq, range, Less)
}

/// Returns true if `range` is sorted in ascending order by `cmp`, meaning no element precedes the
/// one before it.
pub fn is_sorted_by<S, C>(seq: &S, range: Range<S::Pos>, cmp: C) -> bool
where
    S: Traverse + ?Sized,
    C: Compare<S::Item>,
{
    if range.start == range.end {
        return true;
    }

    let mut prev = range.start;
    let mut pos = seq.step(prev);
    while pos != range.end {
        if cmp.less(seq.read(pos), seq.read(prev)) {
            return false;
        }
        prev = pos;
        pos = seq.step(pos);
    }
    true
}

fn positions_of<S: Traverse + ?Sized>(seq: &S, range: Range<S::Pos>) -> Vector<S::Pos> {
    let mut positions = Vector::new();
    let mut pos = range.start;
    while pos != range.end {
        positions.push(pos);
        pos = seq.step(pos);
    }
    positions
}

/// Rearranges the elements so that offset `i` ends up holding the element that was at offset
/// `order[i]`. `order` must be a permutation of the offsets.
fn permute<S>(seq: &mut S, positions: &[S::Pos], order: &[usize])
where
    S: TraverseMut + ?Sized,
{
    let mut placed = Vector::repeat(false, order.len());
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }

        // Walk the cycle through start, pulling each element into place with one swap.
        let mut curr = start;
        loop {
            placed[curr] = true;
            let next = order[curr];
            if next == start {
                break;
            }
            seq.swap_at(positions[curr], positions[next]);
            curr = next;
        }
    }
}
