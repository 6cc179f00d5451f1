#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::Traverse;
use crate::util::alloc::CountedDrop;
use crate::util::error::InvalidPosition;
use crate::util::hash::{BadHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

#[test]
fn test_insert_and_assign() {
    let mut map: HashMap<&str, i32> = HashMap::new();
    let (pos, inserted) = map.insert("a", 1);
    assert!(inserted);
    assert_eq!(map.insert("a", 5), (pos, false), "Insert shouldn't replace an existing entry.");
    assert_eq!(map.get("a"), Some(&1));

    assert_eq!(map.assign("a", 2), Some(1), "Assign should return the replaced value.");
    assert_eq!(map.assign("b", 3), None);
    assert_eq!(map.len(), 2);
    assert_eq!((map["a"], map["b"]), (2, 3));
}

#[test]
fn test_get_or_default() {
    let mut map: HashMap<u8, Vector<u8>> = HashMap::new();
    map.get_or_default(3).push(1);
    map.get_or_default(3).push(2);

    assert_eq!(map.len(), 1, "The second call should find the inserted entry.");
    assert_eq!(&**map.entry(map.find(&3)).1, &[1, 2]);
}

#[test]
fn test_strict_lookup() {
    let mut map: HashMap<String, u8> = [("x".to_string(), 1)].into_iter().collect();
    assert_eq!(map.at("x").ok(), Some(&1));

    let error = map.at("y").expect_err("y isn't in the map");
    assert_eq!(error.key, "y", "The error should carry the missing key.");
    assert_eq!(error.to_string(), "Key \"y\" not found in collection!");

    *map.at_mut("x").expect("x is in the map") += 1;
    assert_eq!(map.get("x"), Some(&2));
    assert_panics!({ let _value = map["z"]; });
}

#[test]
fn test_erase() {
    let counter = CountedDrop::new(0);
    let mut map: HashMap<u8, CountedDrop> = HashMap::new();
    for i in 0..10 {
        map.assign(i, counter.clone());
    }

    assert!(map.erase(&3).is_some());
    assert!(map.erase(&3).is_none(), "Erasing a missing key should return None.");
    assert!(!map.contains(&3));
    assert_eq!(counter.drops(), 1);

    assert_eq!(map.erase_entry(&4).map(|(k, _)| k), Some(4));
    for i in (0..10).filter(|i| *i != 3 && *i != 4) {
        assert!(map.contains(&i), "Erasing should never lose other entries.");
    }

    map.clear();
    assert_eq!(counter.drops(), 10, "Clearing should drop every remaining value.");
    assert!(map.is_empty());
}

#[test]
fn test_erase_at_while_iterating() {
    let mut map: HashMap<u32, u32> = (0..50).map(|i| (i, i * 2)).collect();

    let mut pos = map.begin();
    while pos != map.end() {
        if map.entry(pos).0 % 2 == 0 {
            pos = map.erase_at(pos);
        } else {
            pos = map.next(pos);
        }
    }

    assert_eq!(map.len(), 25, "Every even key should have been erased.");
    for i in 0..50 {
        assert_eq!(map.contains(&i), i % 2 == 1);
    }
    assert_panics!({ map.clone().erase_at(map.end()); });
}

#[test]
fn test_positions() {
    let mut map: HashMap<char, u8> = HashMap::with_cap(8);
    assert_eq!(map.begin(), map.end(), "An empty map should begin at the end.");
    assert_eq!(map.end(), BucketPos(8), "The end position should be the capacity.");

    map.assign('a', 1);
    map.assign('b', 2);
    let pos = map.find(&'b');
    assert_eq!(map.entry(pos), (&'b', &2));
    assert_eq!(map.find(&'c'), map.end());
    assert_eq!(map.try_entry(map.end()), Err(InvalidPosition));

    let mut walked = Vector::new();
    let mut pos = map.begin();
    while pos != map.end() {
        walked.push(map.read(pos).0);
        pos = map.step(pos);
    }
    walked.sort();
    assert_eq!(&*walked, &['a', 'b'], "Stepping should visit every entry once.");
    assert_eq!(map.distance(map.begin(), map.end()), 2);
}

#[test]
fn test_growth() {
    let mut map: HashMap<usize, ()> = HashMap::new();
    assert_eq!(map.cap(), 0);
    map.assign(0, ());
    assert_eq!(map.cap(), 2, "The first insertion should allocate the minimum capacity.");

    for i in 1..100 {
        map.assign(i, ());
        assert!(
            map.len() * 5 <= map.cap() * 4,
            "The load factor should never be exceeded."
        );
    }

    let mut reserved: HashMap<usize, ()> = HashMap::new();
    reserved.reserve(8);
    let cap = reserved.cap();
    for i in 0..8 {
        reserved.assign(i, ());
    }
    assert_eq!(reserved.cap(), cap, "Reserved space should be enough to avoid growing.");
}

#[test]
fn test_iterators() {
    let mut map: HashMap<u8, u8> = (1..=4).map(|i| (i, i * 10)).collect();
    for value in map.values_mut() {
        *value += 1;
    }

    let mut keys: Vector<_> = map.keys().copied().collect();
    keys.sort();
    assert_eq!(&*keys, &[1, 2, 3, 4]);
    assert_eq!(map.values().copied().sum::<u8>(), 104);
    assert_eq!(map.iter().len(), 4);

    let mut owned: Vector<_> = map.clone().into_iter().collect();
    owned.sort();
    assert_eq!(&*owned, &[(1, 11), (2, 21), (3, 31), (4, 41)]);
    assert_eq!(map.clone().into_keys().count(), 4);
    assert_eq!(map.into_values().max(), Some(41));
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_hasher(BadHasherBuilder);
    map.assign(ManualHash::new(0, "zero"), 0);
    map.assign(ManualHash::new(0, "one"), 1);
    map.assign(ManualHash::new(2, "two"), 2);
    map.assign(ManualHash::new(0, "three"), 3);
    map.assign(ManualHash::new(2, "four"), 4);
    map.assign(ManualHash::new(1, "five"), 5);

    map.erase(&ManualHash::new(0, "zero"));
    map.erase(&ManualHash::new(2, "two"));

    assert_eq!(
        *map.into_iter().map(|(k, _)| k.value()).collect::<Vector<_>>(),
        ["one", "three", "four", "five"],
        "HashMap should handle hash collisions so that no elements are lost during removal."
    );

    let mut map = HashMap::with_cap_and_hasher(6, BadHasherBuilder);
    map.assign(ManualHash::new(5, "zero"), ());
    map.assign(ManualHash::new(5, "one"), ());
    map.assign(ManualHash::new(1, "two"), ());
    map.assign(ManualHash::new(5, "three"), ());

    map.erase(&ManualHash::new(5, "zero"));

    assert_eq!(
        *map.into_keys().map(|i| i.value()).collect::<Vector<_>>(),
        ["three", "two", "one"],
        "Hash collisions should be handled in a wrapping manner."
    );
}

#[test]
fn test_shift_past_settled_entry() {
    let mut map = HashMap::with_cap_and_hasher(8, BadHasherBuilder);
    map.assign(ManualHash::new(0, 'a'), ());
    map.assign(ManualHash::new(1, 'b'), ());
    map.assign(ManualHash::new(0, 'c'), ());

    // 'b' sits in its ideal bucket between 'a' and 'c', but 'c' still has to move back.
    map.erase(&ManualHash::new(0, 'a'));
    assert!(
        map.contains(&ManualHash::new(0, 'c')),
        "An entry after a settled one should still be reachable after erasure."
    );
    assert!(map.contains(&ManualHash::new(1, 'b')));
}

#[test]
fn test_equality_and_format() {
    let map: HashMap<u8, u8> = [(1, 2)].into_iter().collect();
    let mut other: HashMap<u8, u8> = HashMap::with_cap(16);
    other.assign(1, 2);
    assert_eq!(map, other, "Equality shouldn't depend on capacity.");
    other.assign(1, 3);
    assert_ne!(map, other);

    assert_eq!(format!("{map}"), "#{1: 2}");
}
