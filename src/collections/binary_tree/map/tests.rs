#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::{Greater, Traverse};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn keys<K: Clone, V, C>(map: &BinaryTreeMap<K, V, C>) -> Vector<K> {
    map.keys().cloned().collect()
}

#[test]
fn test_insert_and_assign() {
    let mut map = BinaryTreeMap::new();
    assert!(map.insert(2, "two").1);
    assert!(map.insert(1, "one").1);
    assert!(map.insert(3, "three").1);

    let (pos, inserted) = map.insert(2, "deux");
    assert!(!inserted, "Inserting an existing key should do nothing.");
    assert_eq!(map.entry(pos), (&2, &"two"), "Insert should never overwrite.");

    assert_eq!(map.assign(2, "deux"), Some("two"));
    assert_eq!(map.assign(4, "four"), None);
    assert_eq!(map.get(&2), Some(&"deux"));
    assert_eq!(map.len(), 4);
    assert_eq!(&*keys(&map), &[1, 2, 3, 4]);
    map.verify_invariants();
}

#[test]
fn test_get_or_default() {
    let mut map: BinaryTreeMap<&str, u32> = BinaryTreeMap::new();
    for word in "the cat and the hat and the bat".split(' ') {
        *map.get_or_default(word) += 1;
    }
    assert_eq!(map.get("the"), Some(&3));
    assert_eq!(map.get("and"), Some(&2));
    assert_eq!(map.get("cat"), Some(&1));
    assert_eq!(&*keys(&map), &["and", "bat", "cat", "hat", "the"]);
}

#[test]
fn test_strict_lookup() {
    let mut map: BinaryTreeMap<String, i32> = [("a".to_string(), 1)].into_iter().collect();
    assert_eq!(map.at("a").ok(), Some(&1));
    assert!(map.at("b").is_err(), "A missing key should be reported.");
    assert_eq!(map.at("b").map_err(|e| e.key).err(), Some("b"));

    *map.at_mut("a").unwrap() = 5;
    assert_eq!(map["a"], 5);
    assert_panics!({
        let _value = map["b"];
    });
    assert!(map.get_mut("b").is_none());
}

#[test]
fn test_balance_under_sorted_insertion() {
    let mut map = BinaryTreeMap::new();
    for i in 0..1000 {
        map.insert(i, i * 2);
    }
    map.verify_invariants();
    // An AVL tree with n nodes is never more than ~1.44 log2(n) high.
    assert!(map.height(map.root) <= 14, "Sorted insertion shouldn't degenerate the tree.");

    for i in (0..1000).step_by(3) {
        assert_eq!(map.erase(&i), Some(i * 2));
    }
    map.verify_invariants();
    assert_eq!(map.len(), 666);
    assert!(!map.contains(&3));
    assert!(map.contains(&4));
}

#[test]
fn test_erase() {
    let drops = CountedDrop::new(0);
    let mut map = BinaryTreeMap::new();
    for i in 0..10 {
        map.insert(i, drops.clone());
    }

    assert!(map.erase(&4).is_some());
    assert!(map.erase(&4).is_none(), "Erasing a missing key should return None.");
    assert_eq!(drops.drops(), 1);
    assert_eq!(map.erase_entry(&0).map(|e| e.0), Some(0));
    assert_eq!(drops.drops(), 2);
    map.verify_invariants();

    map.clear();
    assert_eq!(drops.drops(), 10, "Clearing should drop every value.");
    assert!(map.is_empty());
    assert!(map.begin().is_end());
}

#[test]
fn test_positions_survive_mutation() {
    let mut map: BinaryTreeMap<_, _> = (0..20).map(|i| (i, i)).collect();
    let root_key = *map.entry(map.pos(map.root)).0;
    let (a, b) = if root_key < 10 { (12, 13) } else { (6, 7) };
    let first = map.find(&a);
    let second = map.find(&b);

    // The root has two children, so it is replaced by relinking its successor node.
    map.erase(&root_key);
    for i in 20..40 {
        map.insert(i, i);
    }
    for i in 0..5 {
        map.erase(&i);
    }
    map.verify_invariants();

    assert_eq!(map.entry(first), (&a, &a));
    assert_eq!(map.next(first), second);
    assert_eq!(map.prev(second), first);

    let next = map.erase_at(first);
    assert_eq!(next, second, "Erasing at a position should return the following position.");
    assert!(map.try_entry(first).is_err(), "Erased positions should be detected.");
    assert_panics!({ map.next(first); });
}

#[test]
fn test_stale_positions() {
    let mut map = BinaryTreeMap::new();
    let (one, _) = map.insert(1, 'a');
    map.erase(&1);
    let (again, _) = map.insert(1, 'b');

    assert!(map.try_entry(one).is_err(), "A reused node shouldn't revive old positions.");
    assert_eq!(map.entry(again), (&1, &'b'));
    assert_panics!({ map.entry(map.end()); });
}

#[test]
fn test_positions_from_other_maps() {
    let mut map: BinaryTreeMap<_, _> = [(1, 'a'), (2, 'b')].into_iter().collect();
    let other: BinaryTreeMap<_, _> = [(1, 'x'), (2, 'y')].into_iter().collect();
    let one = map.find(&1);

    assert!(other.try_entry(one).is_err(), "Foreign positions should be caught.");
    assert_panics!({ other.clone().erase_at(one); });
    assert_panics!({ other.prev(map.end()); });
    assert_panics!({ other.clone().erase_range(other.begin()..map.end()); });

    let copy = map.clone();
    assert!(copy.try_entry(one).is_err(), "A clone shouldn't accept the original's positions.");
    assert_eq!(copy.entry(copy.find(&1)), (&1, &'a'));

    map.erase(&1);
    let copy = map.clone();
    copy.verify_invariants();
    assert!(copy.try_entry(one).is_err(), "Stale positions should stay stale in a clone.");
}

#[test]
fn test_navigation() {
    let mut map: BinaryTreeMap<_, _> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
    assert_eq!(map.entry(map.begin()), (&1, &'a'));
    assert_eq!(map.entry(map.prev(map.end())), (&3, &'c'));
    assert_eq!(map.prev(map.begin()), map.end(), "Stepping back from the first should end.");
    assert_eq!(map.next(map.prev(map.end())), map.end());

    assert_eq!(map.first(), Some((&1, &'a')));
    assert_eq!(map.last(), Some((&3, &'c')));
    *map.entry_mut(map.find(&2)).1 = 'B';
    assert_eq!(map.pop_first(), Some((1, 'a')));
    assert_eq!(map.pop_last(), Some((3, 'c')));
    assert_eq!(map.pop_last(), Some((2, 'B')));
    assert_eq!(map.pop_first(), None);
    assert_eq!(map.first(), None);
}

#[test]
fn test_bounds() {
    let map: BinaryTreeMap<_, _> = [10, 20, 30, 40].into_iter().map(|k| (k, ())).collect();
    assert_eq!(map.entry(map.lower_bound(&20)).0, &20);
    assert_eq!(map.entry(map.lower_bound(&25)).0, &30);
    assert_eq!(map.entry(map.upper_bound(&20)).0, &30);
    assert_eq!(map.entry(map.lower_bound(&0)).0, &10);
    assert!(map.lower_bound(&41).is_end());
    assert!(map.upper_bound(&40).is_end());

    let found = map.equal_range(&30);
    assert_eq!(map.distance(found.start, found.end), 1);
    let missing = map.equal_range(&35);
    assert_eq!(missing.start, missing.end, "A missing key should have an empty range.");
}

#[test]
fn test_erase_range() {
    let mut map: BinaryTreeMap<_, _> = (1..=10).map(|i| (i, i)).collect();
    let end = map.erase_range(map.lower_bound(&3)..map.upper_bound(&7));
    assert_eq!(map.entry(end).0, &8);
    assert_eq!(&*keys(&map), &[1, 2, 8, 9, 10]);
    map.verify_invariants();

    let end = map.erase_range(map.begin()..map.end());
    assert!(end.is_end());
    assert!(map.is_empty());
}

#[test]
fn test_custom_comparators() {
    let mut map = BinaryTreeMap::with_cmp(Greater);
    map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    assert_eq!(&*keys(&map), &[3, 2, 1]);
    assert_eq!(map.entry(map.lower_bound(&2)).0, &2);
    assert_eq!(map.entry(map.upper_bound(&2)).0, &1);

    // Keys that compare equivalent are the same key.
    let mut by_abs = BinaryTreeMap::with_cmp(|a: &i32, b: &i32| a.abs() < b.abs());
    by_abs.insert(-2, "minus two");
    assert!(!by_abs.insert(2, "two").1);
    by_abs.insert(1, "one");
    assert_eq!(by_abs.get(&2), Some(&"minus two"));
    assert_eq!(&*by_abs.keys().copied().collect::<Vector<_>>(), &[1, -2]);
    by_abs.verify_invariants();
}

#[test]
fn test_iterators() {
    let mut map: BinaryTreeMap<_, _> = (1..=5).map(|i| (i, i * 10)).collect();
    assert_eq!(map.iter().len(), 5);
    assert_eq!(map.iter().next_back(), Some((&5, &50)));
    assert_eq!(
        &*map.iter().rev().map(|e| *e.0).collect::<Vector<_>>(),
        &[5, 4, 3, 2, 1]
    );

    let mut both = map.keys();
    assert_eq!((both.next(), both.next_back()), (Some(&1), Some(&5)));
    assert_eq!(both.count(), 3, "The ends of an iterator shouldn't cross.");

    for value in map.values_mut() {
        *value += 1;
    }
    assert_eq!(&*map.values().copied().collect::<Vector<_>>(), &[11, 21, 31, 41, 51]);
    assert_eq!(map.values_mut().next_back().map(|v| *v), Some(51));

    let mut owned = map.clone().into_iter();
    assert_eq!(owned.next(), Some((1, 11)));
    assert_eq!(owned.next_back(), Some((5, 51)));
    assert_eq!(owned.len(), 3);
}

#[test]
fn test_traverse() {
    let map: BinaryTreeMap<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
    let mut pos = map.begin();
    let mut seen = Vector::new();
    while pos != map.end() {
        seen.push(*map.read(pos));
        pos = map.step(pos);
    }
    assert_eq!(&*seen, &[(1, 'a'), (2, 'b')]);
    assert_eq!(map.distance(map.begin(), map.end()), 2);
}

#[test]
fn test_equality_and_format() {
    let map: BinaryTreeMap<_, _> = [(2, "b"), (1, "a")].into_iter().collect();
    let mut other = BinaryTreeMap::new();
    other.insert(1, "a");
    other.insert(2, "b");
    assert_eq!(map, other);
    other.assign(2, "c");
    assert_ne!(map, other);

    assert_eq!(format!("{map}"), r#"{1: "a", 2: "b"}"#);
    assert_eq!(
        format!("{map:?}"),
        r#"BinaryTreeMap { contents: {1: "a", 2: "b"}, len: 2 }"#
    );
    assert!(format!("{map:#?}").contains("tree"), "The alternate form should draw the tree.");
}
