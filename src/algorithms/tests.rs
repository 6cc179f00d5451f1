#![cfg(test)]

use super::*;
use crate::collections::binary_tree::BinaryTreeSet;
use crate::collections::circ::Deque;
use crate::collections::contiguous::Vector;
use crate::collections::linked::LinkedList;
use crate::collections::traits::{Greater, Traverse};
use crate::util::panic::assert_panics;

fn vector(items: &[i32]) -> Vector<i32> {
    items.iter().copied().collect()
}

/// A deterministic, badly ordered sequence with plenty of duplicates.
fn scrambled(len: usize) -> Vector<u32> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state % 500
        })
        .collect()
}

fn is_even(i: &i32) -> bool {
    i % 2 == 0
}

#[test]
fn test_find_and_count() {
    let vec = vector(&[2017, 0, -1, 42, 10101, 25]);
    assert_eq!(find(&vec, vec.all(), &-1), 2);
    assert_eq!(find(&vec, vec.all(), &2), vec.end(), "A missing value should give the end.");
    assert_eq!(find_if(&vec, vec.all(), is_even), 1);
    assert_eq!(find_if_not(&vec, vec.all(), |i| *i > 0), 1);
    assert_eq!(find(&vec, 3..vec.len(), &0), vec.len(), "Only the range should be searched.");

    assert_eq!(count(&vec, vec.all(), &0), 1);
    assert_eq!(count_if(&vec, vec.all(), is_even), 2);
    assert_eq!(count_if(&vec, 0..0, |_| true), 0);
}

#[test]
fn test_search() {
    let vec = vector(&[2017, 0, -1, 42, 10101, 25, 9, 9, 9]);
    let in_order: LinkedList<_> = [-1, 42, 10101].into_iter().collect();
    let out_of_order: LinkedList<_> = [42, -1, 10101].into_iter().collect();

    assert_eq!(search(&vec, vec.all(), &in_order, in_order.all()), 2);
    assert_eq!(search(&vec, vec.all(), &out_of_order, out_of_order.all()), vec.end());
    assert_eq!(search(&vec, vec.all(), &in_order, in_order.end()..in_order.end()), 0);

    assert_eq!(search_n(&vec, vec.all(), 3, &9), 6);
    assert_eq!(search_n(&vec, vec.all(), 4, &9), vec.end());
    assert_eq!(search_n(&vec, vec.all(), 0, &7), 0, "A zero count should match at the start.");

    // Searching a list for a run from a vector.
    let list: LinkedList<_> = [1, 2, 3, 4].into_iter().collect();
    let pattern = vector(&[3, 4]);
    let found = search(&list, list.all(), &pattern, pattern.all());
    assert_eq!(list.get(found), &3);
}

#[test]
fn test_fill_and_generate() {
    let mut vec: Vector<i32> = Vector::with_len(5);
    let all = vec.all();
    fill(&mut vec, all.clone(), &1);
    assert_eq!(&*vec, &[1, 1, 1, 1, 1]);

    let mut calls = 0;
    generate(&mut vec, all, || {
        calls += 1;
        calls * 10
    });
    assert_eq!(calls, 5, "The generator should be called once per element.");
    assert_eq!(&*vec, &[10, 20, 30, 40, 50]);
}

#[test]
fn test_for_each() {
    let vec = vector(&[2017, 0, -1, 42, 10101, 25, 9, 9, 9]);
    let mut seen = 0;
    let mut counter = for_each(&vec, vec.all(), |_| seen += 1);
    counter(&0);
    drop(counter);
    assert_eq!(seen, 10, "The returned function should keep its state.");

    let set: BinaryTreeSet<_> = [3, 1, 2].into_iter().collect();
    let mut order = Vector::new();
    for_each(&set, set.all(), |i| order.push(*i));
    assert_eq!(&*order, &[1, 2, 3]);
}

#[test]
fn test_transform() {
    let src = vector(&[2017, 0, -1, 42]);
    let mut negated: Vector<i32> = Vector::with_len(src.len());
    let end = transform(&src, src.all(), &mut negated, 0, |i| -i);
    assert_eq!(end, 4);
    assert_eq!(&*negated, &[-2017, 0, 1, -42]);
    assert_eq!(&*src, &[2017, 0, -1, 42], "The source should be left untouched.");

    let offsets = Vector::repeat(-1, src.len());
    let mut sums: Vector<i32> = Vector::with_len(src.len());
    transform2(&src, src.all(), &offsets, 0, &mut sums, 0, |a, b| a + b);
    assert_eq!(&*sums, &[2016, -1, -2, 41]);

    let mut short: Vector<i32> = Vector::with_len(2);
    assert_panics!({
        transform(&src, src.all(), &mut short, 0, |i| *i);
    });
}

#[test]
fn test_copy() {
    let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    let mut all_of_it: Vector<i32> = Vector::with_len(3);
    assert_eq!(copy(&list, list.all(), &mut all_of_it, 0), 3);
    assert_eq!(&*all_of_it, &[1, 2, 3]);

    let mut evens: Vector<i32> = Vector::with_len(3);
    assert_eq!(copy_if(&list, list.all(), &mut evens, 0, is_even), 1);
    assert_eq!(&*evens, &[2, 0, 0]);

    // Into the middle of a list.
    let mut target: LinkedList<_> = [0, 0, 0, 0].into_iter().collect();
    let second = target.next(target.begin());
    let end = copy(&all_of_it, 0..2, &mut target, second);
    assert_eq!(target.get(end), &0);
    assert_eq!(&target.iter().copied().collect::<Vector<_>>()[..], &[0, 1, 2, 0]);
}

#[test]
fn test_remove() {
    let mut vec = vector(&[1, 2, 2, 3]);
    let all = vec.all();
    let new_last = remove(&mut vec, all, &2);
    assert_eq!(new_last, 2);
    assert_eq!(vec.len(), 4, "Removal shouldn't change the length.");
    vec.erase(new_last..vec.len());
    assert_eq!(&*vec, &[1, 3]);

    let mut vec = vector(&[5, 2, 8, 1, 4, 7]);
    let all = vec.all();
    let new_last = remove_if(&mut vec, all, is_even);
    assert_eq!(&vec[..new_last], &[5, 1, 7], "Kept elements should keep their order.");

    let mut list: LinkedList<_> = [1, 2, 3, 2].into_iter().collect();
    let all = list.all();
    let new_last = remove(&mut list, all, &2);
    list.erase_range(new_last..list.end());
    assert_eq!(&list.iter().copied().collect::<Vector<_>>()[..], &[1, 3]);

    let mut nothing = vector(&[1, 3]);
    let all = nothing.all();
    assert_eq!(remove(&mut nothing, all, &2), 2);
}

#[test]
fn test_replace() {
    let mut vec = vector(&[1, 2, 2, 3]);
    let all = vec.all();
    replace(&mut vec, all, &2, &5);
    assert_eq!(&*vec, &[1, 5, 5, 3]);

    let mut vec = vector(&[1, 2, 4, 3]);
    let all = vec.all();
    replace_if(&mut vec, all, is_even, &0);
    assert_eq!(&*vec, &[1, 0, 0, 3]);
}

#[test]
fn test_sort() {
    let mut vec = vector(&[3, 1, 4, 2, 3]);
    let all = vec.all();
    sort(&mut vec, all);
    assert_eq!(&*vec, &[1, 2, 3, 3, 4]);

    let mut vec = vector(&[3, 1, 4, 2, 3]);
    let all = vec.all();
    sort_by(&mut vec, all, Greater);
    assert_eq!(&*vec, &[4, 3, 3, 2, 1]);

    let mut big = scrambled(2000);
    let mut expected = big.clone();
    expected.sort();
    let all = big.all();
    sort(&mut big, all);
    assert_eq!(big, expected, "Long ranges should be sorted through partitioning.");

    // Only the range is sorted.
    let mut partial = vector(&[9, 8, 3, 1, 2, 0]);
    sort(&mut partial, 2..5);
    assert_eq!(&*partial, &[9, 8, 1, 2, 3, 0]);
}

#[test]
fn test_sort_adversarial_inputs() {
    let mut equal: Vector<u8> = Vector::repeat(7, 500);
    let all = equal.all();
    sort(&mut equal, all);
    assert!(equal.iter().all(|i| *i == 7));

    let mut organ_pipe: Vector<i32> = (0..300).chain((0..300).rev()).collect();
    let all = organ_pipe.all();
    sort(&mut organ_pipe, all.clone());
    assert!(is_sorted(&organ_pipe, all.clone()));

    sort_by(&mut organ_pipe, all.clone(), Greater);
    assert!(is_sorted_by(&organ_pipe, all, Greater));

    let mut deque: Deque<u32> = scrambled(100).into_iter().collect();
    deque.push_front(1000);
    let all = deque.all();
    sort(&mut deque, all.clone());
    assert!(is_sorted(&deque, all), "Sorting should work on any random access collection.");
    assert_eq!(deque.back(), Some(&1000));
}

#[test]
fn test_stable_sort() {
    let tagged: Vector<(u32, usize)> =
        scrambled(300).into_iter().map(|i| i % 10).enumerate().map(|(i, k)| (k, i)).collect();
    let by_key = |a: &(u32, usize), b: &(u32, usize)| a.0 < b.0;

    let mut vec = tagged.clone();
    let all = vec.all();
    stable_sort_by(&mut vec, all, by_key);
    let mut expected = tagged.clone();
    expected.sort_by_key(|e| e.0);
    assert_eq!(vec, expected, "Equal keys should keep their original order.");

    let mut list: LinkedList<_> = tagged.into_iter().collect();
    let all = list.all();
    stable_sort_by(&mut list, all, by_key);
    assert!(list.iter().eq(expected.iter()), "Stable sorting should work on lists too.");

    let mut plain = vector(&[5, 3, 9, 1]);
    let all = plain.all();
    stable_sort(&mut plain, all);
    assert_eq!(&*plain, &[1, 3, 5, 9]);
}

#[test]
fn test_unique() {
    let mut vec = vector(&[1, 2, 3, 3, 4]);
    let all = vec.all();
    let new_last = unique(&mut vec, all);
    assert_eq!(new_last, 4);
    vec.erase(new_last..vec.len());
    assert_eq!(&*vec, &[1, 2, 3, 4]);

    let mut unsorted = vector(&[3, 1, 4, 3, 2]);
    let all = unsorted.all();
    assert_eq!(
        unique(&mut unsorted, all),
        unsorted.end(),
        "Only adjacent duplicates should be removed."
    );

    let mut close = vector(&[1, 2, 10, 11, 12, 30]);
    let all = close.all();
    let new_last = unique_by(&mut close, all, |a, b| b - a < 5);
    assert_eq!(&close[..new_last], &[1, 10, 30]);

    let mut empty = Vector::<i32>::new();
    assert_eq!(unique(&mut empty, 0..0), 0);
}

#[test]
fn test_bounds_and_binary_search() {
    let vec = vector(&[1, 2, 3, 3, 4]);
    assert!(binary_search(&vec, vec.all(), &3));
    assert!(!binary_search(&vec, vec.all(), &5));
    assert!(!binary_search(&vec, 0..2, &3));

    assert_eq!(lower_bound(&vec, vec.all(), &3), 2);
    assert_eq!(upper_bound(&vec, vec.all(), &3), 4);
    assert_eq!(equal_range(&vec, vec.all(), &3), 2..4);
    assert_eq!(lower_bound(&vec, vec.all(), &9), vec.end());

    let desc = vector(&[9, 7, 7, 2]);
    assert_eq!(equal_range_by(&desc, desc.all(), &7, Greater), 1..3);
    assert!(binary_search_by(&desc, desc.all(), &2, Greater));

    // Bounds over a collection without random access.
    let list: LinkedList<_> = [10, 20, 30].into_iter().collect();
    assert_eq!(list.get(lower_bound(&list, list.all(), &15)), &20);
    assert_eq!(list.get(upper_bound(&list, list.all(), &20)), &30);
    assert_eq!(lower_bound_by(&list, list.all(), &40, |a: &i32, b: &i32| a < b), list.end());
}

#[test]
fn test_partition() {
    let mut vec: Vector<i32> = (1..=8).collect();
    let all = vec.all();
    let boundary = partition(&mut vec, all, is_even);
    assert_eq!(boundary, 4);
    assert!(vec[..boundary].iter().all(is_even));
    assert!(!vec[boundary..].iter().any(is_even));

    let mut vec: Vector<i32> = (1..=8).collect();
    let all = vec.all();
    let boundary = stable_partition(&mut vec, all, |i| !is_even(i));
    assert_eq!(boundary, 4);
    assert_eq!(&*vec, &[1, 3, 5, 7, 2, 4, 6, 8]);

    let mut none = vector(&[1, 3]);
    let all = none.all();
    assert_eq!(stable_partition(&mut none, all, is_even), 0);
    assert_eq!(&*none, &[1, 3]);
}

#[test]
fn test_heap() {
    let mut vec = vector(&[3, 1, 4, 1, 5, 9, 2, 6]);
    let all = vec.all();
    make_heap(&mut vec, all.clone());
    assert!(is_heap(&vec, all));
    assert_eq!(vec[0], 9);

    vec.push(10);
    let all = vec.all();
    assert!(!is_heap(&vec, all.clone()));
    push_heap(&mut vec, all);
    assert_eq!(vec[0], 10, "A pushed maximum should rise to the front.");

    let mut drained = Vector::new();
    while !vec.is_empty() {
        let all = vec.all();
        pop_heap(&mut vec, all);
        drained.extend(vec.pop());
    }
    assert_eq!(&*drained, &[10, 9, 6, 5, 4, 3, 2, 1, 1]);

    let mut min_heap = vector(&[5, 3, 8]);
    let all = min_heap.all();
    make_heap_by(&mut min_heap, all.clone(), Greater);
    assert!(is_heap_by(&min_heap, all.clone(), Greater));
    assert_eq!(min_heap[0], 3);
    pop_heap_by(&mut min_heap, all, Greater);
    assert_eq!(min_heap.back(), Some(&3));
    assert_eq!(min_heap[0], 5);
}

#[test]
fn test_reverse_and_is_sorted() {
    let mut vec = vector(&[1, 2, 3, 4, 5]);
    assert!(is_sorted(&vec, vec.all()));
    let all = vec.all();
    reverse(&mut vec, all);
    assert_eq!(&*vec, &[5, 4, 3, 2, 1]);
    assert!(!is_sorted(&vec, vec.all()));
    assert!(is_sorted_by(&vec, vec.all(), Greater));

    reverse(&mut vec, 1..3);
    assert_eq!(&*vec, &[5, 3, 4, 2, 1]);
    assert!(is_sorted(&vec, 2..2), "An empty range should be sorted.");
}
