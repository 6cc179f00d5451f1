use std::ops::Range;

use crate::collections::traits::{Compare, Less, Traverse};

/// Returns the position of the first element in `range` equal to `value`, or `range.end` if there
/// is none.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let vec: Vector<_> = [1, 2, 3, 2].into_iter().collect();
/// assert_eq!(algorithms::find(&vec, vec.all(), &2), 1);
/// assert_eq!(algorithms::find(&vec, vec.all(), &5), vec.end());
/// ```
pub fn find<S>(seq: &S, range: Range<S::Pos>, value: &S::Item) -> S::Pos
where
    S: Traverse + ?Sized,
    S::Item: PartialEq,
{
    find_if(seq, range, |item| item == value)
}

/// Returns the position of the first element in `range` satisfying `pred`, or `range.end`.
pub fn find_if<S, P>(seq: &S, range: Range<S::Pos>, mut pred: P) -> S::Pos
where
    S: Traverse + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut pos = range.start;
    while pos != range.end {
        if pred(seq.read(pos)) {
            return pos;
        }
        pos = seq.step(pos);
    }
    range.end
}

/// Returns the position of the first element in `range` not satisfying `pred`, or `range.end`.
pub fn find_if_not<S, P>(seq: &S, range: Range<S::Pos>, mut pred: P) -> S::Pos
where
    S: Traverse + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    find_if(seq, range, |item| !pred(item))
}

/// Counts the elements in `range` equal to `value`.
pub fn count<S>(seq: &S, range: Range<S::Pos>, value: &S::Item) -> usize
where
    S: Traverse + ?Sized,
    S::Item: PartialEq,
{
    count_if(seq, range, |item| item == value)
}

/// Counts the elements in `range` satisfying `pred`.
pub fn count_if<S, P>(seq: &S, range: Range<S::Pos>, mut pred: P) -> usize
where
    S: Traverse + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut count = 0;
    let mut pos = range.start;
    while pos != range.end {
        if pred(seq.read(pos)) {
            count += 1;
        }
        pos = seq.step(pos);
    }
    count
}

/// Returns the start of the first occurrence of the subsequence `pattern[pattern_range]` within
/// `seq[range]`, or `range.end` if it doesn't occur. An empty pattern occurs at `range.start`.
///
/// The two collections don't have to be of the same type.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::linked::LinkedList;
/// # use standard_collections::collections::traits::Traverse;
/// let vec: Vector<_> = [1, 2, 3, 4, 5, 6].into_iter().collect();
/// let pattern: LinkedList<_> = [3, 4].into_iter().collect();
/// assert_eq!(algorithms::search(&vec, vec.all(), &pattern, pattern.all()), 2);
/// ```
pub fn search<S, P>(
    seq: &S,
    range: Range<S::Pos>,
    pattern: &P,
    pattern_range: Range<P::Pos>,
) -> S::Pos
where
    S: Traverse + ?Sized,
    P: Traverse + ?Sized,
    S::Item: PartialEq<P::Item>,
{
    let mut start = range.start;
    loop {
        let mut pos = start;
        let mut pattern_pos = pattern_range.start;
        loop {
            if pattern_pos == pattern_range.end {
                return start;
            }
            if pos == range.end {
                // What's left of the range is shorter than the pattern.
                return range.end;
            }
            if seq.read(pos) != pattern.read(pattern_pos) {
                break;
            }
            pos = seq.step(pos);
            pattern_pos = pattern.step(pattern_pos);
        }
        start = seq.step(start);
    }
}

/// Returns the start of the first run of `count` consecutive elements equal to `value`, or
/// `range.end` if there is none. A `count` of zero matches at `range.start`.
pub fn search_n<S>(seq: &S, range: Range<S::Pos>, count: usize, value: &S::Item) -> S::Pos
where
    S: Traverse + ?Sized,
    S::Item: PartialEq,
{
    if count == 0 {
        return range.start;
    }

    let mut pos = range.start;
    while pos != range.end {
        if seq.read(pos) != value {
            pos = seq.step(pos);
            continue;
        }

        let run_start = pos;
        let mut run = 0;
        while pos != range.end && seq.read(pos) == value {
            run += 1;
            if run == count {
                return run_start;
            }
            pos = seq.step(pos);
        }
    }
    range.end
}

/// Returns the first position in `range` for which `pred` is false, given that `pred` is true for
/// a prefix of the range and false for the rest.
pub(crate) fn partition_point<S, P>(seq: &S, range: Range<S::Pos>, mut pred: P) -> S::Pos
where
    S: Traverse + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut first = range.start;
    let mut len = seq.distance(range.start, range.end);

    while len > 0 {
        let half = len / 2;
        let mid = seq.advance(first, half);
        if pred(seq.read(mid)) {
            first = seq.step(mid);
            len -= half + 1;
        } else {
            len = half;
        }
    }
    first
}

/// Returns the position of the first element in the sorted `range` that isn't less than `value`,
/// or `range.end`.
///
/// Performs `O(log n)` comparisons. Positions are stepped in `O(log n)` for
/// [`RandomAccess`](crate::collections::traits::RandomAccess) collections and `O(n)` otherwise.
pub fn lower_bound<S>(seq: &S, range: Range<S::Pos>, value: &S::Item) -> S::Pos
where
    S: Traverse + ?Sized,
    S::Item: Ord,
{
    lower_bound_by(seq, range, value, Less)
}

/// Returns the position of the first element in `range` that isn't less than `value` under `cmp`,
/// or `range.end`. The range must be sorted by `cmp`.
pub fn lower_bound_by<S, C>(seq: &S, range: Range<S::Pos>, value: &S::Item, cmp: C) -> S::Pos
where
    S: Traverse + ?Sized,
    C: Compare<S::Item>,
{
    partition_point(seq, range, |item| cmp.less(item, value))
}

/// Returns the position of the first element in the sorted `range` that is greater than `value`,
/// or `range.end`.
pub fn upper_bound<S>(seq: &S, range: Range<S::Pos>, value: &S::Item) -> S::Pos
where
    S: Traverse + ?Sized,
    S::Item: Ord,
{
    upper_bound_by(seq, range, value, Less)
}

/// Returns the position of the first element in `range` that is greater than `value` under `cmp`,
/// or `range.end`. The range must be sorted by `cmp`.
pub fn upper_bound_by<S, C>(seq: &S, range: Range<S::Pos>, value: &S::Item, cmp: C) -> S::Pos
where
    S: Traverse + ?Sized,
    C: Compare<S::Item>,
{
    partition_point(seq, range, |item| !cmp.less(value, item))
}

/// Returns the range of elements in the sorted `range` equivalent to `value`. The returned range
/// is empty, positioned where `value` would be inserted, if there are none.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let vec: Vector<_> = [1, 2, 2, 2, 3].into_iter().collect();
/// assert_eq!(algorithms::equal_range(&vec, vec.all(), &2), 1..4);
/// assert_eq!(algorithms::equal_range(&vec, vec.all(), &0), 0..0);
/// ```
pub fn equal_range<S>(seq: &S, range: Range<S::Pos>, value: &S::Item) -> Range<S::Pos>
where
    S: Traverse + ?Sized,
    S::Item: Ord,
{
    equal_range_by(seq, range, value, Less)
}

/// Returns the range of elements in `range` equivalent to `value` under `cmp`. The range must be
/// sorted by `cmp`.
pub fn equal_range_by<S, C>(
    seq: &S,
    range: Range<S::Pos>,
    value: &S::Item,
    cmp: C,
) -> Range<S::Pos>
where
    S: Traverse + ?Sized,
    C: Compare<S::Item>,
{
    let lower = partition_point(seq, range.start..range.end, |item| cmp.less(item, value));
    let upper = partition_point(seq, lower..range.end, |item| !cmp.less(value, item));
    lower..upper
}

/// Returns true if the sorted `range` contains an element equal to `value`.
///
/// # Examples
/// ```
/// # use standard_collections::algorithms;
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::traits::Traverse;
/// let vec: Vector<_> = [1, 1, 2, 3, 3, 4].into_iter().collect();
/// assert!(algorithms::binary_search(&vec, vec.all(), &3));
/// assert!(!algorithms::binary_search(&vec, vec.all(), &5));
/// ```
pub fn binary_search<S>(seq: &S, range: Range<S::Pos>, value: &S::Item) -> bool
where
    S: Traverse + ?Sized,
    S::Item: Ord,
{
    binary_search_by(seq, range, value, Less)
}

/// Returns true if `range`, sorted by `cmp`, contains an element equivalent to `value`.
pub fn binary_search_by<S, C>(seq: &S, range: Range<S::Pos>, value: &S::Item, cmp: C) -> bool
where
    S: Traverse + ?Sized,
    C: Compare<S::Item>,
{
    let pos = partition_point(seq, range.start..range.end, |item| cmp.less(item, value));
    pos != range.end && !cmp.less(value, seq.read(pos))
}
