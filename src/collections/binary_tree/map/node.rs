use std::cmp;
use std::fmt::Debug;

use super::BinaryTreeMap;
use crate::collections::arena::Key;
use crate::collections::contiguous::Vector;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub entry: (K, V),
    pub parent: Option<Key>,
    pub left: Option<Key>,
    pub right: Option<Key>,
    // The number of nodes on the longest path down from (and including) this node.
    pub height: usize,
}

impl<K, V> Node<K, V> {
    pub const fn leaf(entry: (K, V), parent: Option<Key>) -> Node<K, V> {
        Node {
            entry,
            parent,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// Structural operations. These only relink nodes, no entry is ever moved between nodes, which is
/// what keeps positions attached to their entries.
impl<K, V, C> BinaryTreeMap<K, V, C> {
    pub(crate) fn node(&self, key: Key) -> &Node<K, V> {
        match self.nodes.get(key) {
            Some(node) => node,
            None => unreachable!("tree links always refer to live nodes"),
        }
    }

    pub(crate) fn node_mut(&mut self, key: Key) -> &mut Node<K, V> {
        match self.nodes.get_mut(key) {
            Some(node) => node,
            None => unreachable!("tree links always refer to live nodes"),
        }
    }

    pub(crate) fn height(&self, link: Option<Key>) -> usize {
        link.map_or(0, |key| self.node(key).height)
    }

    fn update_height(&mut self, key: Key) {
        let node = self.node(key);
        let height = 1 + cmp::max(self.height(node.left), self.height(node.right));
        self.node_mut(key).height = height;
    }

    /// Left height minus right height.
    fn balance_factor(&self, key: Key) -> isize {
        let node = self.node(key);
        self.height(node.left) as isize - self.height(node.right) as isize
    }

    /// Returns the leftmost node of the subtree rooted at `key`.
    pub(crate) fn min_from(&self, mut key: Key) -> Key {
        while let Some(left) = self.node(key).left {
            key = left;
        }
        key
    }

    /// Returns the rightmost node of the subtree rooted at `key`.
    pub(crate) fn max_from(&self, mut key: Key) -> Key {
        while let Some(right) = self.node(key).right {
            key = right;
        }
        key
    }

    /// Returns the in-order successor of `key`, if it has one.
    pub(crate) fn successor(&self, key: Key) -> Option<Key> {
        if let Some(right) = self.node(key).right {
            return Some(self.min_from(right));
        }

        // Climb until we arrive from a left child.
        let mut child = key;
        let mut parent = self.node(key).parent;
        while let Some(p) = parent {
            if self.node(p).left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node(p).parent;
        }
        None
    }

    /// Returns the in-order predecessor of `key`, if it has one.
    pub(crate) fn predecessor(&self, key: Key) -> Option<Key> {
        if let Some(left) = self.node(key).left {
            return Some(self.max_from(left));
        }

        let mut child = key;
        let mut parent = self.node(key).parent;
        while let Some(p) = parent {
            if self.node(p).right == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node(p).parent;
        }
        None
    }

    /// Makes `new` take the place of `old` as a child of `parent` (or as the root).
    fn replace_child(&mut self, parent: Option<Key>, old: Key, new: Option<Key>) {
        match parent {
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            },
            None => self.root = new,
        }
    }

    /// Replaces the subtree rooted at `old` with the one rooted at `new`. The children of `old` are
    /// left untouched.
    fn transplant(&mut self, old: Key, new: Option<Key>) {
        let parent = self.node(old).parent;
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.node_mut(new).parent = parent;
        }
    }

    /// Rotates the subtree rooted at `top` to the left, returning the new root of the subtree.
    fn rotate_left(&mut self, top: Key) -> Key {
        let Some(pivot) = self.node(top).right else {
            return top;
        };

        let inner = self.node(pivot).left;
        self.node_mut(top).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(top);
        }

        self.transplant(top, Some(pivot));
        self.node_mut(pivot).left = Some(top);
        self.node_mut(top).parent = Some(pivot);

        self.update_height(top);
        self.update_height(pivot);
        pivot
    }

    /// Rotates the subtree rooted at `top` to the right, returning the new root of the subtree.
    fn rotate_right(&mut self, top: Key) -> Key {
        let Some(pivot) = self.node(top).left else {
            return top;
        };

        let inner = self.node(pivot).right;
        self.node_mut(top).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(top);
        }

        self.transplant(top, Some(pivot));
        self.node_mut(pivot).right = Some(top);
        self.node_mut(top).parent = Some(pivot);

        self.update_height(top);
        self.update_height(pivot);
        pivot
    }

    /// Restores heights and the AVL balance on the path from `start` up to the root.
    pub(crate) fn rebalance_from(&mut self, start: Option<Key>) {
        let mut curr = start;

        while let Some(mut key) = curr {
            self.update_height(key);
            let balance = self.balance_factor(key);

            if balance > 1 {
                if let Some(left) = self.node(key).left {
                    if self.balance_factor(left) < 0 {
                        self.rotate_left(left);
                    }
                }
                key = self.rotate_right(key);
            } else if balance < -1 {
                if let Some(right) = self.node(key).right {
                    if self.balance_factor(right) > 0 {
                        self.rotate_right(right);
                    }
                }
                key = self.rotate_left(key);
            }

            curr = self.node(key).parent;
        }
    }

    /// Links a new leaf holding `entry` below `parent`, then rebalances.
    pub(crate) fn link_leaf(&mut self, parent: Option<Key>, go_left: bool, entry: (K, V)) -> Key {
        let key = self.nodes.insert(Node::leaf(entry, parent));

        match parent {
            Some(parent) if go_left => self.node_mut(parent).left = Some(key),
            Some(parent) => self.node_mut(parent).right = Some(key),
            None => self.root = Some(key),
        }

        self.rebalance_from(parent);
        key
    }

    /// Unlinks and frees the node at `key`, returning its entry. A node with two children is
    /// replaced by its successor node (not by a copy of the successor's entry).
    pub(crate) fn unlink(&mut self, key: Key) -> (K, V) {
        let node = self.node(key);
        let (left, right, parent) = (node.left, node.right, node.parent);

        let rebalance_start = match (left, right) {
            (None, _) => {
                self.transplant(key, right);
                parent
            },
            (_, None) => {
                self.transplant(key, left);
                parent
            },
            (Some(left), Some(right)) => {
                let successor = self.min_from(right);
                let start = if successor == right {
                    successor
                } else {
                    let start = self.node(successor).parent;
                    let successor_right = self.node(successor).right;
                    self.transplant(successor, successor_right);
                    self.node_mut(successor).right = Some(right);
                    self.node_mut(right).parent = Some(successor);
                    start.unwrap_or(successor)
                };

                self.transplant(key, Some(successor));
                self.node_mut(successor).left = Some(left);
                self.node_mut(left).parent = Some(successor);
                Some(start)
            },
        };

        let Some(node) = self.nodes.remove(key) else {
            unreachable!("tree links always refer to live nodes")
        };
        self.rebalance_from(rebalance_start);
        node.entry
    }

    /// Draws the subtree rooted at `link` sideways, with left children above their parent.
    pub(crate) fn draw(&self, link: Option<Key>) -> String
    where
        K: Debug,
        V: Debug,
    {
        match link {
            Some(key) => {
                let node = self.node(key);
                format!(
                    "{}\n({:?}: {:?})\n{}",
                    self.draw(node.left)
                        .lines()
                        .map(|l| String::from("┌    ") + l)
                        .collect::<Vector<_>>()
                        .join("\n"),
                    node.entry.0,
                    node.entry.1,
                    self.draw(node.right)
                        .lines()
                        .map(|l| String::from("└    ") + l)
                        .collect::<Vector<_>>()
                        .join("\n")
                )
            },
            None => String::from("-"),
        }
    }
}
