use std::ops::Range;

use super::find_if;
use crate::collections::traits::{RandomAccess, Traverse, TraverseMut};

/// Assigns a clone of `value` to every element in `range`.
pub fn fill<S>(seq: &mut S, range: Range<S::Pos>, value: &S::Item)
where
    S: TraverseMut + ?Sized,
    S::Item: Clone,
{
    let mut pos = range.start;
    while pos != range.end {
        *seq.read_mut(pos) = value.clone();
        pos = seq.step(pos);
    }
}

/// Assigns the result of calling `generator` to every element in `range`. `generator` is called exactly once
/// per element, in order.
pub fn generate<S, G>(seq: &mut S, range: Range<S::Pos>, mut generator: G)
where
    S: TraverseMut + ?Sized,
    G: FnMut() -> S::Item,
{
    let mut pos = range.start;
    while pos != range.end {
        *seq.read_mut(pos) = generator();
        pos = seq.step(pos);
    }
}

/// Calls `f` on every element in `range`, in order, and hands `f` back so that any state it
/// accumulated can be inspected.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let vec: Vector<_> = [1, 2, 3].into_iter().collect();
/// let mut sum = 0;
/// algorithms::for_each(&vec, vec.all(), |i| sum += i);
/// assert_eq!(sum, 6);
/// ```
pub fn for_each<S, F>(seq: &S, range: Range<S::Pos>, mut f: F) -> F
where
    S: Traverse + ?Sized,
    F: FnMut(&S::Item),
{
    let mut pos = range.start;
    while pos != range.end {
        f(seq.read(pos));
        pos = seq.step(pos);
    }
    f
}

/// Writes `f(element)` for every element of `src[range]` into `dst`, starting at `dst_first`.
/// Returns the position after the last element written. The source is left untouched.
///
/// # Panics
/// Panics if `dst` runs out of elements before the source range does.
pub fn transform<S, D, F>(
    src: &S,
    range: Range<S::Pos>,
    dst: &mut D,
    dst_first: D::Pos,
    mut f: F,
) -> D::Pos
where
    S: Traverse + ?Sized,
    D: TraverseMut + ?Sized,
    F: FnMut(&S::Item) -> D::Item,
{
    let mut pos = range.start;
    let mut out = dst_first;
    while pos != range.end {
        *dst.read_mut(out) = f(src.read(pos));
        pos = src.step(pos);
        out = dst.step(out);
    }
    out
}

/// Writes `f(a, b)` for each pair of elements from `a[range]` and the equally long range of `b`
/// starting at `b_first`, into `dst` starting at `dst_first`. Returns the position after the last
/// element written.
///
/// # Panics
/// Panics if either `b` or `dst` runs out of elements before `a[range]` does.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let a: Vector<_> = [1, 2, 3].into_iter().collect();
/// let b: Vector<_> = [10, 20, 30].into_iter().collect();
/// let mut sums = Vector::with_len(3);
/// algorithms::transform2(&a, a.all(), &b, 0, &mut sums, 0, |x, y| x + y);
/// assert_eq!(&*sums, &[11, 22, 33]);
/// ```
pub fn transform2<A, B, D, F>(
    a: &A,
    range: Range<A::Pos>,
    b: &B,
    b_first: B::Pos,
    dst: &mut D,
    dst_first: D::Pos,
    mut f: F,
) -> D::Pos
where
    A: Traverse + ?Sized,
    B: Traverse + ?Sized,
    D: TraverseMut + ?Sized,
    F: FnMut(&A::Item, &B::Item) -> D::Item,
{
    let mut pos = range.start;
    let mut b_pos = b_first;
    let mut out = dst_first;
    while pos != range.end {
        *dst.read_mut(out) = f(a.read(pos), b.read(b_pos));
        pos = a.step(pos);
        b_pos = b.step(b_pos);
        out = dst.step(out);
    }
    out
}

/// Clones every element of `src[range]` into `dst`, starting at `dst_first`. Returns the position
/// after the last element written.
///
/// # Panics
/// Panics if `dst` runs out of elements before the source range does.
pub fn copy<S, D>(src: &S, range: Range<S::Pos>, dst: &mut D, dst_first: D::Pos) -> D::Pos
where
    S: Traverse + ?Sized,
    D: TraverseMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
{
    copy_if(src, range, dst, dst_first, |_| true)
}

/// Clones the elements of `src[range]` satisfying `pred` into `dst`, starting at `dst_first` and
/// keeping their relative order. Returns the position after the last element written.
///
/// # Panics
/// Panics if `dst` runs out of elements before every matching element is written.
pub fn copy_if<S, D, P>(
    src: &S,
    range: Range<S::Pos>,
    dst: &mut D,
    dst_first: D::Pos,
    mut pred: P,
) -> D::Pos
where
    S: Traverse + ?Sized,
    D: TraverseMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut pos = range.start;
    let mut out = dst_first;
    while pos != range.end {
        let item = src.read(pos);
        if pred(item) {
            *dst.read_mut(out) = item.clone();
            out = dst.step(out);
        }
        pos = src.step(pos);
    }
    out
}

/// Moves every element of `range` that isn't equal to `value` to the front of the range, keeping
/// their relative order, and returns the new end of the kept elements.
///
/// Nothing is dropped and the collection keeps its length: the elements from the returned
/// position to `range.end` are the removed ones, in an unspecified order. Erase them from the
/// collection to finish the removal.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let mut vec: Vector<_> = [1, 2, 3, 2, 4].into_iter().collect();
/// let all = vec.all();
/// let new_last = algorithms::remove(&mut vec, all, &2);
/// vec.erase(new_last..vec.len());
/// assert_eq!(&*vec, &[1, 3, 4]);
/// ```
pub fn remove<S>(seq: &mut S, range: Range<S::Pos>, value: &S::Item) -> S::Pos
where
    S: TraverseMut + ?Sized,
    S::Item: PartialEq,
{
    remove_if(seq, range, |item| item == value)
}

/// Moves every element of `range` not satisfying `pred` to the front of the range, keeping their
/// relative order, and returns the new end of the kept elements. See [`remove`].
pub fn remove_if<S, P>(seq: &mut S, range: Range<S::Pos>, mut pred: P) -> S::Pos
where
    S: TraverseMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut new_last = find_if(seq, range.start..range.end, &mut pred);
    if new_last == range.end {
        return new_last;
    }

    let mut pos = seq.step(new_last);
    while pos != range.end {
        if !pred(seq.read(pos)) {
            seq.swap_at(new_last, pos);
            new_last = seq.step(new_last);
        }
        pos = seq.step(pos);
    }
    new_last
}

/// Replaces every element of `range` equal to `old` with a clone of `new`.
pub fn replace<S>(seq: &mut S, range: Range<S::Pos>, old: &S::Item, new: &S::Item)
where
    S: TraverseMut + ?Sized,
    S::Item: PartialEq + Clone,
{
    replace_if(seq, range, |item| item == old, new)
}

/// Replaces every element of `range` satisfying `pred` with a clone of `new`.
pub fn replace_if<S, P>(seq: &mut S, range: Range<S::Pos>, mut pred: P, new: &S::Item)
where
    S: TraverseMut + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut pos = range.start;
    while pos != range.end {
        if pred(seq.read(pos)) {
            *seq.read_mut(pos) = new.clone();
        }
        pos = seq.step(pos);
    }
}

/// Removes all but the first element of every run of adjacent equal elements in `range`,
/// returning the new end of the kept elements. Works like [`remove`]: the collection keeps its
/// length and the caller erases the tail.
///
/// Only adjacent duplicates are found, so the range is usually sorted first.
pub fn unique<S>(seq: &mut S, range: Range<S::Pos>) -> S::Pos
where
    S: TraverseMut + ?Sized,
    S::Item: PartialEq,
{
    unique_by(seq, range, |a, b| a == b)
}

/// Like [`unique`], with equality decided by `eq`. Each element is compared against the last
/// element kept.
pub fn unique_by<S, E>(seq: &mut S, range: Range<S::Pos>, mut eq: E) -> S::Pos
where
    S: TraverseMut + ?Sized,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    if range.start == range.end {
        return range.end;
    }

    let mut kept = range.start;
    let mut pos = seq.step(kept);
    while pos != range.end {
        if !eq(seq.read(kept), seq.read(pos)) {
            kept = seq.step(kept);
            if kept != pos {
                seq.swap_at(kept, pos);
            }
        }
        pos = seq.step(pos);
    }
    seq.step(kept)
}

/// Reverses the order of the elements in `range`.
pub fn reverse<S>(seq: &mut S, range: Range<S::Pos>)
where
    S: TraverseMut + RandomAccess + ?Sized,
{
    let len = seq.distance(range.start, range.end);
    for i in 0..len / 2 {
        let front = seq.advance(range.start, i);
        let back = seq.advance(range.start, len - 1 - i);
        seq.swap_at(front, back);
    }
}

/// Moves the elements of `range` satisfying `pred` before those that don't, returning the
/// position of the first element of the second group. The order within each group is
/// unspecified.
pub fn partition<S, P>(seq: &mut S, range: Range<S::Pos>, mut pred: P) -> S::Pos
where
    S: TraverseMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut boundary = find_if(seq, range.start..range.end, |item| !pred(item));
    if boundary == range.end {
        return boundary;
    }

    let mut pos = seq.step(boundary);
    while pos != range.end {
        if pred(seq.read(pos)) {
            seq.swap_at(boundary, pos);
            boundary = seq.step(boundary);
        }
        pos = seq.step(pos);
    }
    boundary
}
