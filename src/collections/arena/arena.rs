use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, RandomState};
use std::mem;

use crate::collections::contiguous::Vector;

/// A generation-checked reference to a slot of an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Key {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Identifies the arena that handed out a position. Every arena, including a clone, draws a fresh
/// one, so positions taken from one container are rejected by every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Owner(u64);

impl Owner {
    fn fresh() -> Owner {
        // Each RandomState is seeded with new keys.
        Owner(RandomState::new().hash_one(()))
    }
}

#[derive(Clone)]
pub(crate) enum Slot<T> {
    Occupied {
        generation: u64,
        value: T,
    },
    Vacant {
        generation: u64,
        next_free: Option<usize>,
    },
}

impl<T> Slot<T> {
    const fn generation(&self) -> u64 {
        match self {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation, .. } => *generation,
        }
    }
}

/// Generation-checked slot storage. Values never move between slots, so a [`Key`] stays valid
/// until the value it refers to is removed.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)` |
/// | `get` | `O(1)` |
/// | `clear` | `O(c)` |
///
/// \* Amortized, the slot Vector grows like any other. `c` is the number of slots ever allocated.
pub(crate) struct Arena<T> {
    pub(crate) slots: Vector<Slot<T>>,
    pub(crate) free: Option<usize>,
    pub(crate) len: usize,
    pub(crate) owner: Owner,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Arena<T> {
        Arena {
            slots: Vector::new(),
            free: None,
            len: 0,
            owner: Owner::fresh(),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Stores `value` in a vacant slot (reusing one if possible) and returns its key.
    pub(crate) fn insert(&mut self, value: T) -> Key {
        self.len += 1;

        match self.free {
            Some(index) => {
                let generation = self.slots[index].generation();
                let old = mem::replace(
                    &mut self.slots[index],
                    Slot::Occupied { generation, value },
                );
                if let Slot::Vacant { next_free, .. } = old {
                    self.free = next_free;
                }
                Key { index, generation }
            },
            None => {
                let index = self.slots.len();
                self.slots.push(Slot::Occupied { generation: 0, value });
                Key { index, generation: 0 }
            },
        }
    }

    /// Removes the value referred to by `key`, returning it if the key was still valid. The slot's
    /// generation is bumped, invalidating `key` and all of its copies.
    pub(crate) fn remove(&mut self, key: Key) -> Option<T> {
        if !self.contains(key) {
            return None;
        }

        let vacant = Slot::Vacant {
            generation: key.generation.wrapping_add(1),
            next_free: self.free,
        };

        match mem::replace(&mut self.slots[key.index], vacant) {
            Slot::Occupied { value, .. } => {
                self.free = Some(key.index);
                self.len -= 1;
                Some(value)
            },
            // The contains check above rules this out.
            Slot::Vacant { .. } => None,
        }
    }

    /// Returns true if `key` refers to a value that hasn't been removed.
    pub(crate) fn contains(&self, key: Key) -> bool {
        matches!(
            self.slots.get(key.index),
            Some(Slot::Occupied { generation, .. }) if *generation == key.generation
        )
    }

    pub(crate) fn get(&self, key: Key) -> Option<&T> {
        match self.slots.get(key.index) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        match self.slots.get_mut(key.index) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns mutable references to two distinct values at once.
    pub(crate) fn get2_mut(&mut self, a: Key, b: Key) -> Option<(&mut T, &mut T)> {
        if a.index == b.index || !self.contains(a) || !self.contains(b) {
            return None;
        }

        let (low, high) = (a.index.min(b.index), a.index.max(b.index));
        let (head, tail) = self.slots.split_at_mut(high);

        match (&mut head[low], &mut tail[0]) {
            (Slot::Occupied { value: low_value, .. }, Slot::Occupied { value: high_value, .. }) => {
                if a.index < b.index {
                    Some((low_value, high_value))
                } else {
                    Some((high_value, low_value))
                }
            },
            _ => None,
        }
    }

    /// Removes every value. Generations are bumped, so no key handed out before the clear is valid
    /// afterwards. Slots are kept for reuse.
    pub(crate) fn clear(&mut self) {
        self.free = None;

        for index in (0..self.slots.len()).rev() {
            let slot = &mut self.slots[index];
            let generation = match slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            *slot = Slot::Vacant {
                generation,
                next_free: self.free,
            };
            self.free = Some(index);
        }

        self.len = 0;
    }

    /// Raw access to the slot buffer for iterators that hand out disjoint mutable references.
    pub(crate) fn slots_ptr(&mut self) -> *mut Slot<T> {
        self.slots.as_mut_ptr()
    }
}

impl<T: Clone> Clone for Arena<T> {
    /// Clones every slot along with its generation, so keys keep their meaning in the copy. The
    /// copy gets its own [`Owner`].
    fn clone(&self) -> Self {
        Arena {
            slots: self.slots.clone(),
            free: self.free,
            len: self.len,
            owner: Owner::fresh(),
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
