#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::mem::MaybeUninit;

use super::*;
use crate::collections::traits::{Traverse, TraverseMut};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");

    let old_ptr = arr.ptr;
    let mut arr = arr.forget_init();
    arr.realloc(30);
    assert_eq!(
        arr.ptr.cast::<ZeroSizedType>(), old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
}

#[test]
fn test_realloc() {
    let arr: Array<usize> = (0..5).collect();
    assert_eq!(arr.size(), 5);

    let mut arr = arr.forget_init();
    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(10);
    for i in 5..10 {
        arr[i] = MaybeUninit::new(i);
    }
    // SAFETY: The first 5 values were initialized before the reallocation, the rest after.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(
        *arr,
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        "When growing, all elements should remain in the Array."
    );

    let mut arr = arr.forget_init();
    arr.realloc(0);
    assert_eq!(arr.size(), 0, "Shrinking to zero should produce an empty Array.");

    assert_panics!({
        let mut arr = Array::<u64>::new_uninit(1);
        arr.realloc(isize::MAX as usize)
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::repeat_with(|| counter.clone(), 10);

    drop(arr);

    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_into_iter_drops_remaining() {
    let counter = CountedDrop::new(0);
    let mut iter = Array::repeat_with(|| counter.clone(), 6).into_iter();

    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.drops(), 2, "Values taken from either end should be dropped by the caller.");

    drop(iter);
    assert_eq!(counter.drops(), 6, "Remaining values should be dropped with the iterator.");
}

#[test]
fn test_equality_and_hash() {
    let arr: Array<usize> = (0..5).collect();

    assert_eq!(
        arr,
        [0, 1, 2, 3, 4].into_iter().collect(),
        "Different construction methods should produce equal results."
    );
    assert_ne!([0, 1, 2, 5, 4].into_iter().collect::<Array<_>>(), arr);

    assert_eq!(
        &arr.borrow(),
        &[0, 1, 2, 3, 4],
        "Borrow equality should be upheld."
    );

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr: Array<usize> = (0..5).collect();
    let collected: Array<_> = arr.iter().cloned().collect();
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );

    assert_eq!(
        arr.clone().into_iter().rev().collect::<Array<_>>(),
        [8, 6, 4, 2, 0].into_iter().collect(),
        "Owned iteration should work from the back."
    );
}

#[test]
fn test_traverse() {
    let mut arr = Array::repeat_item(1, 4);
    *arr.read_mut(2) = 5;
    arr.swap_at(2, 0);

    assert_eq!(*arr, [5, 1, 1, 1], "Positions of an Array should be indices.");
    assert_eq!(arr.advance(arr.begin(), 4), arr.end());
    assert_eq!(arr.distance(1, 3), 2);
    assert_panics!({ arr.read(4); });
    assert_panics!({ arr.advance(0, 5); });
}
