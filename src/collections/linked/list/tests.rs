#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::{Greater, Traverse, TraverseMut};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn contents<T: Clone>(list: &LinkedList<T>) -> Vector<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_and_pop() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();
    assert_eq!(&*contents(&list), &[1, 2, 3]);
    assert_eq!((list.front(), list.back()), (Some(&1), Some(&3)));

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_front(), None, "Popping an empty list should return None.");
    assert!(list.is_empty());
    list.verify_double_links();
}

#[test]
fn test_positions_survive_mutation() {
    let mut list: LinkedList<_> = (1..=4).collect();
    let two = list.next(list.begin());
    let three = list.next(two);

    list.push_front(0);
    list.insert(three, 10);
    list.pop_back();
    list.verify_double_links();

    assert_eq!(list.get(two), &2, "Unrelated insertions and erasures shouldn't move positions.");
    assert_eq!(list.get(three), &3);
    assert_eq!(&*contents(&list), &[0, 1, 2, 10, 3]);
}

#[test]
fn test_stale_positions() {
    let mut list: LinkedList<_> = (1..=3).collect();
    let two = list.next(list.begin());

    let after = list.erase(two);
    assert_eq!(list.get(after), &3, "Erase should return the following position.");
    assert_eq!(list.try_get(two), Err(InvalidPosition), "Erased positions should be detected.");
    assert_eq!(list.try_erase(two), Err(InvalidPosition));
    assert_panics!({ list.get(two); });
    assert_panics!({ list.clone().erase(two); });

    // The freed node is reused, but the stale position still mustn't resolve.
    let reused = list.insert(after, 20);
    assert_eq!(list.get(reused), &20);
    assert!(list.try_get(two).is_err(), "A reused node shouldn't revive an old position.");

    assert_panics!({ list.get(list.end()); });
    assert_panics!({ list.next(list.end()); });
}

#[test]
fn test_positions_from_other_lists() {
    let mut list: LinkedList<_> = (1..=3).collect();
    let other: LinkedList<_> = [10, 20, 30].into_iter().collect();
    let two = list.next(list.begin());

    assert_eq!(other.try_get(two), Err(InvalidPosition), "Foreign positions should be caught.");
    assert_panics!({ other.clone().insert(list.end(), 0); });
    assert_panics!({ other.prev(list.end()); });

    let copy = list.clone();
    assert!(copy.try_get(two).is_err(), "A clone shouldn't accept the original's positions.");
    assert_eq!(copy.get(copy.next(copy.begin())), &2);

    // Stale positions stay stale in a clone of the list they came from.
    list.erase(two);
    let copy = list.clone();
    copy.verify_double_links();
    assert!(list.try_get(two).is_err());
    assert!(copy.try_get(two).is_err());
    assert_eq!(&*contents(&copy), &[1, 3]);
}

#[test]
fn test_circular_stepping() {
    let list: LinkedList<_> = (1..=3).collect();
    let last = list.prev(list.end());
    assert_eq!(list.get(last), &3, "The position before the end should be the last element.");
    assert_eq!(list.next(last), list.end());
    assert_eq!(list.prev(list.begin()), list.end(), "The first element should step back to end.");
    assert_eq!(list.distance(list.begin(), list.end()), 3);

    let empty = LinkedList::<u8>::new();
    assert_eq!(empty.begin(), empty.end());
    assert_eq!(empty.prev(empty.end()), empty.end());
}

#[test]
fn test_insert_and_erase_ranges() {
    let mut list: LinkedList<_> = [1, 5].into_iter().collect();
    let five = list.prev(list.end());

    let first = list.insert_iter(five, 2..=4);
    assert_eq!(list.get(first), &2, "insert_iter should return the first inserted position.");
    assert_eq!(list.insert_iter(five, []), five, "Inserting nothing should return pos.");

    let sixes = list.insert_n(list.end(), 2, 6);
    assert_eq!(&*contents(&list), &[1, 2, 3, 4, 5, 6, 6]);
    list.verify_double_links();

    let end = list.erase_range(first..five);
    assert_eq!(end, five);
    assert_eq!(&*contents(&list), &[1, 5, 6, 6]);

    list.erase_range(sixes..list.end());
    assert_eq!(&*contents(&list), &[1, 5]);
    list.verify_double_links();
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new(0);
    let mut list: LinkedList<_> = std::iter::repeat_with(|| counter.clone()).take(4).collect();
    let front = list.begin();

    list.clear();
    assert_eq!(counter.drops(), 4, "Clearing should drop every value.");
    assert!(list.is_empty());
    assert!(list.try_get(front).is_err(), "Clearing should invalidate every position.");

    list.push_back(counter.clone());
    drop(list);
    assert_eq!(counter.drops(), 5);
}

#[test]
fn test_take() {
    let mut list: LinkedList<_> = ["a", "b", "c"].into_iter().collect();
    let (value, next) = list.take(list.begin());
    assert_eq!(value, "a");
    assert_eq!(next, list.begin());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_reverse() {
    let mut list: LinkedList<_> = (1..=5).collect();
    let three = list.advance(list.begin(), 2);
    list.reverse();
    list.verify_double_links();

    assert_eq!(&*contents(&list), &[5, 4, 3, 2, 1]);
    assert_eq!(list.get(list.next(three)), &2, "Positions should follow their values.");

    let mut single: LinkedList<_> = [1].into_iter().collect();
    single.reverse();
    single.verify_double_links();
}

#[test]
fn test_sort_is_stable() {
    let mut list: LinkedList<_> = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')]
        .into_iter()
        .collect();
    let tagged_c = list.advance(list.begin(), 2);

    list.sort_by(|a: &(i32, char), b: &(i32, char)| a.0 < b.0);
    list.verify_double_links();
    assert_eq!(
        &*contents(&list),
        &[(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')],
        "Equivalent elements should keep their relative order."
    );
    assert_eq!(list.get(tagged_c), &(3, 'c'), "Sorting should relink nodes, not move values.");
    assert_eq!(list.next(tagged_c), list.end());

    let mut numbers: LinkedList<_> = [4, 9, 1, 7].into_iter().collect();
    numbers.sort_by(Greater);
    assert_eq!(&*contents(&numbers), &[9, 7, 4, 1]);
    numbers.sort();
    assert_eq!(&*contents(&numbers), &[1, 4, 7, 9]);
}

#[test]
fn test_remove_and_unique() {
    let mut list: LinkedList<_> = [1, 1, 2, 3, 3, 3, 1, 4].into_iter().collect();
    assert_eq!(list.unique(), 3);
    assert_eq!(&*contents(&list), &[1, 2, 3, 1, 4]);

    assert_eq!(list.remove(&1), 2);
    assert_eq!(list.remove(&8), 0, "Removing a missing value should erase nothing.");
    assert_eq!(list.remove_if(|v| v % 2 == 0), 2);
    assert_eq!(&*contents(&list), &[3]);
    list.verify_double_links();

    assert_eq!(LinkedList::<u8>::new().unique(), 0);
}

#[test]
fn test_find() {
    let list: LinkedList<_> = [4, 5, 6].into_iter().collect();
    assert_eq!(list.get(list.find(&5)), &5);
    assert!(list.find(&7).is_end(), "A missing value should produce the end position.");
    assert!(list.contains(&6));
}

#[test]
fn test_traverse_mut() {
    let mut list: LinkedList<_> = (1..=3).collect();
    let first = list.begin();
    let last = list.prev(list.end());

    list.swap_at(first, last);
    *list.read_mut(first) += 10;
    list.swap_at(last, last);
    assert_eq!(&*contents(&list), &[13, 2, 1]);
    assert_eq!(list.put(last, 0), 1);
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<_> = (1..=4).collect();
    for value in list.iter_mut() {
        *value *= 2;
    }

    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next_back(), Some(&8));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.collect::<Vector<_>>(), Vector::from([&4, &6]));

    let mut iter_mut = list.iter_mut();
    iter_mut.next();
    iter_mut.next_back();
    assert_eq!(iter_mut.count(), 2, "Mutable iterators shouldn't yield a node twice.");

    assert_eq!(list.into_iter().rev().collect::<Vector<_>>(), Vector::from([8, 6, 4, 2]));
}

#[test]
fn test_equality_and_format() {
    let list: LinkedList<_> = (1..=3).collect();
    assert_eq!(list, list.clone());
    assert_ne!(list, (1..=2).collect());
    assert_eq!(LinkedList::repeat(7, 2), [7, 7].into_iter().collect());
    assert_eq!(LinkedList::<u8>::with_len(2), [0, 0].into_iter().collect());

    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{}", LinkedList::<i32>::new()), "[]");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
}
