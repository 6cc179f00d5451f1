//! End to end walkthroughs of the containers and algorithms working together, the way a caller
//! would combine them.

use standard_collections::algorithms;
use standard_collections::collections::adapters::{PriorityQueue, Queue, Stack};
use standard_collections::collections::binary_tree::{BinaryTreeMap, BinaryTreeSet};
use standard_collections::collections::circ::Deque;
use standard_collections::collections::contiguous::Vector;
use standard_collections::collections::hash::{HashMap, HashSet};
use standard_collections::collections::linked::LinkedList;
use standard_collections::collections::traits::{Greater, Traverse};
use standard_collections::error::{InvalidPosition, KeyNotFound};

fn is_even(i: &i32) -> bool {
    i % 2 == 0
}

#[test]
fn find_the_first_even_number() {
    let mut vec = Vector::new();
    vec.extend([2017, 0, -1, 42, 10101, 25]);

    let pos = algorithms::find_if(&vec, vec.all(), is_even);
    assert_eq!(pos, 1);
    assert_eq!(vec[pos], 0);
}

#[test]
fn remove_then_erase() {
    let mut vec: Vector<_> = [1, 2, 2, 3].into_iter().collect();
    let all = vec.all();
    let new_last = algorithms::remove(&mut vec, all, &2);
    vec.erase(new_last..vec.len());

    assert_eq!(vec.len(), 2);
    assert_eq!(&*vec, &[1, 3]);
}

#[test]
fn ordered_sets_follow_their_comparator() {
    let ascending: BinaryTreeSet<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(ascending.to_string(), "{1, 2, 3}");

    let mut descending = BinaryTreeSet::with_cmp(Greater);
    descending.extend([2, 1, 3]);
    assert_eq!(descending.iter().copied().collect::<Vector<_>>(), Vector::from([3, 2, 1]));
}

#[test]
fn bounds_over_a_sorted_vector() {
    let vec = Vector::from([1, 2, 3, 3, 6]);
    assert_eq!(algorithms::lower_bound(&vec, vec.all(), &3), 2);
    assert_eq!(algorithms::upper_bound(&vec, vec.all(), &3), 4);
}

#[test]
fn indexing_a_map_inserts_defaults() {
    let mut map: BinaryTreeMap<i32, String> = BinaryTreeMap::new();
    map.insert(1, "one".to_string());

    assert_eq!(map.get_or_default(3), "");
    assert!(!map.find(&3).is_end(), "A defaulted key should be findable afterwards.");
    assert_eq!(map.len(), 2);

    map.get_or_default(3).push_str("three");
    assert_eq!(map.at(&3).ok().map(String::as_str), Some("three"));
    let missing: KeyNotFound<'_, i32> = map.at(&4).expect_err("4 was never inserted");
    assert_eq!(missing.key, &4);
}

#[test]
fn sequences_grow_at_both_ends() {
    let mut vec = Vector::from([1, 2, 3]);
    vec.insert(1, 10);
    vec.insert_n(0, 2, 0);
    assert_eq!(&*vec, &[0, 0, 1, 10, 2, 3]);
    assert_eq!(vec.remove(3), 10);

    let mut deque: Deque<_> = vec.into_iter().collect();
    deque.push_front(-1);
    deque.push_back(4);
    assert_eq!(deque.front(), Some(&-1));
    assert_eq!(deque.back(), Some(&4));
    assert_eq!(deque.len(), 7);

    let all = deque.all();
    algorithms::sort_by(&mut deque, all, Greater);
    assert_eq!(deque.iter().copied().collect::<Vector<_>>(), Vector::from([4, 3, 2, 1, 0, 0, -1]));
}

#[test]
fn lists_keep_positions_across_edits() {
    let mut list: LinkedList<_> = [40, 10, 30].into_iter().collect();
    let ten = list.find(&10);
    let twenty = list.insert(list.next(ten), 20);

    list.sort();
    assert_eq!(list.iter().copied().collect::<Vector<_>>(), Vector::from([10, 20, 30, 40]));
    assert_eq!(list.get(ten), &10, "Sorting should relink nodes rather than move values.");

    list.erase(twenty);
    assert_eq!(list.try_get(twenty), Err(InvalidPosition));
    assert_eq!(list.get(list.next(ten)), &30);

    list.reverse();
    list.push_back(10);
    assert_eq!(list.remove(&10), 2);
    assert_eq!(list.iter().copied().collect::<Vector<_>>(), Vector::from([40, 30]));
}

#[test]
fn counting_words() {
    let text = "the quick brown fox jumps over the lazy dog the end";

    let mut ordered: BinaryTreeMap<&str, usize> = BinaryTreeMap::new();
    let mut hashed: HashMap<&str, usize> = HashMap::new();
    for word in text.split_whitespace() {
        *ordered.get_or_default(word) += 1;
        *hashed.get_or_default(word) += 1;
    }

    assert_eq!(ordered["the"], 3);
    assert_eq!(hashed["the"], 3);
    assert_eq!(ordered.len(), hashed.len());
    assert_eq!(ordered.first(), Some((&"brown", &1)));
    for (word, count) in ordered.iter() {
        assert_eq!(hashed.get(word), Some(count));
    }

    let common = algorithms::find_if(&ordered, ordered.all(), |(_, count)| *count > 1);
    assert_eq!(ordered.entry(common), (&"the", &3));
}

#[test]
fn hash_sets_deduplicate() {
    let mut set: HashSet<i32> = HashSet::new();
    let (first, inserted) = set.insert(7);
    assert!(inserted);
    let (again, inserted) = set.insert(7);
    assert!(!inserted, "Inserting a duplicate should report the existing element.");
    assert_eq!(first, again);

    set.extend(0..20);
    assert_eq!(set.len(), 20);
    assert_eq!(algorithms::count_if(&set, set.all(), |i| is_even(i)), 10);
    assert_eq!(set.erase(&7), Some(7));
    assert!(!set.contains(&7));
}

#[test]
fn adapters_restrict_access() {
    let mut stack = Stack::new();
    let mut queue = Queue::new();
    let mut max = PriorityQueue::new();
    let mut min = PriorityQueue::with_cmp(Greater);

    for value in [10, 5, -1, 20] {
        stack.push(value);
        queue.push(value);
        max.push(value);
        min.push(value);
    }

    assert_eq!(stack.pop(), Some(20));
    assert_eq!(queue.pop(), Some(10));
    assert_eq!(max.pop(), Some(20));
    assert_eq!(min.pop(), Some(-1));
    assert_eq!((stack.len(), queue.len(), max.len(), min.len()), (3, 3, 3, 3));
}
