#![cfg(test)]

use super::*;
use crate::collections::contiguous::Array;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_back() {
    let mut vec = Vector::new();
    for i in 0..20 {
        vec.push(i);
        assert_eq!(vec.back(), Some(&i), "The pushed value should be at the back.");
        assert_eq!(vec.len(), i + 1, "Each push should increase the length by exactly one.");
        assert!(vec.cap() >= vec.len(), "Capacity should never be less than length.");
    }
    assert_eq!(vec.front(), Some(&0));
    assert_eq!(vec.cap(), 32, "Capacity should double when growing.");
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from_iter_sized(0..3);
    assert_eq!(vec.at(1), Ok(&1));
    assert_eq!(
        vec.at(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Checked access out of bounds should identify the index and length."
    );
    *vec.at_mut(2).expect("index 2 is in bounds") = 7;
    assert_eq!(&*vec, &[0, 1, 7], "A failed access shouldn't modify the Vector.");
    assert_panics!({ let _value = vec[3]; });
}

#[test]
fn test_insert_and_remove() {
    let mut vec: Vector<_> = [1, 2, 3].into();
    vec.insert(0, 0);
    vec.insert(4, 4);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Insertion should be allowed at both ends.");
    assert_panics!({ vec.clone().insert(6, 6) });
    assert_eq!(vec.try_insert(5, 5), Ok(()));
    assert!(vec.try_insert(7, 7).is_err_and(|e| e.is_index_out_of_bounds()));
    assert_eq!(vec.pop(), Some(5));

    assert_eq!(vec.remove(2), 2);
    assert_eq!(vec.remove(3), 4);
    assert_eq!(&*vec, &[0, 1, 3]);
    assert_panics!({ vec.clone().remove(3); });
}

#[test]
fn test_insert_n_and_iter() {
    let mut vec = Vector::repeat('a', 2);
    vec.insert_n(1, 3, 'b');
    assert_eq!(&*vec, &['a', 'b', 'b', 'b', 'a']);

    vec.insert_iter(5, "cd".chars());
    vec.insert_iter(0, "".chars());
    assert_eq!(&*vec, &['a', 'b', 'b', 'b', 'a', 'c', 'd']);

    assert!(
        vec.try_insert_n(9, 1, 'x').is_err_and(|e| e.is_index_out_of_bounds()),
        "Inserting past the end should be reported as out of bounds."
    );
    assert!(
        vec.try_insert_n(0, usize::MAX, 'x').is_err_and(|e| e.is_capacity_overflow()),
        "An overflowing length should be reported as a capacity overflow."
    );
    assert_eq!(vec.len(), 7, "A failed insertion should leave the Vector unchanged.");
}

#[test]
fn test_erase() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = std::iter::repeat_with(|| counter.clone()).take(6).collect();

    assert_eq!(vec.erase(1..4), 1, "Erase should return the index following the erased block.");
    assert_eq!(counter.drops(), 3, "Erased values should be dropped.");
    assert_eq!(vec.len(), 3);

    vec.erase(3..3);
    assert_eq!(vec.len(), 3, "Erasing an empty range should do nothing.");

    vec.clear();
    assert_eq!(counter.drops(), 6);
    assert!(vec.is_empty());
    assert_panics!({ vec.erase(0..1); });
}

#[test]
fn test_capacity() {
    let mut vec: Vector<u8> = Vector::with_cap(4);
    vec.extend([1, 2, 3]);
    vec.reserve(5);
    assert_eq!(vec.cap(), 8, "Reserve should allocate exactly the required capacity.");
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);

    vec.adjust_cap(1);
    assert_eq!(&*vec, &[1], "Adjusting the capacity below the length should drop elements.");
    assert_panics!({ Vector::<u8>::new().reserve(usize::MAX) });
}

#[test]
fn test_append() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = std::iter::repeat_with(|| counter.clone()).take(2).collect();
    let other: Vector<_> = std::iter::repeat_with(|| counter.clone()).take(3).collect();

    vec.append(other);
    assert_eq!(vec.len(), 5);
    assert_eq!(counter.drops(), 0, "Appending should move values, not drop them.");

    drop(vec);
    assert_eq!(counter.drops(), 5, "Appended values should be dropped exactly once.");
}

#[test]
fn test_conversions() {
    let vec = Vector::from(vec![1, 2, 3]);
    let arr = Array::from(vec.clone());
    assert_eq!(&*arr, &[1, 2, 3]);
    assert_eq!(Vec::from(vec.clone()), vec![1, 2, 3]);

    let partial = Vector::from(&vec[1..]);
    assert_eq!(&*partial, &[2, 3], "Constructing from a sub-range should copy only that range.");
    assert_eq!(&*Vector::<i32>::with_len(2), &[0, 0]);
    assert_eq!(vec.into_iter().rev().collect::<Vector<_>>(), Vector::from([3, 2, 1]));
}

#[test]
fn test_format() {
    let vec = Vector::from([1, 2]);
    assert_eq!(format!("{vec}"), "![1, 2]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 2 }");
}
