//! The AVL tree itself: node representation, lookup, insertion, removal and
//! rotation-based rebalancing.

use std::cmp::{self, Ordering};
use std::fmt;
use std::mem;

/// An ordered set of unique keys stored in an AVL tree.
///
/// Sibling subtree heights never differ by more than one, so lookups,
/// insertions and removals all run in O(log n).
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<K> {
    pub(crate) root: Subtree<K>,
    num_nodes: usize,
}

/// A subtree position. Leaf positions are materialized as `Empty` instead of
/// being absent, so every position answers `height()` without a presence check.
#[derive(Clone, PartialEq, Eq)]
pub(crate) enum Subtree<K> {
    Empty,
    Node(Box<Node<K>>),
}

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) left: Subtree<K>,
    pub(crate) right: Subtree<K>,
}

impl<K: Ord> Tree<K> {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: Subtree::Empty,
            num_nodes: 0,
        }
    }

    /// Returns a reference to the stored key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut current = &self.root;
        while let Subtree::Node(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// Returns true if the tree contains `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key into the tree.
    /// Returns false and leaves the tree untouched if the key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = self.root.insert(key);
        if inserted {
            self.num_nodes += 1;
        }
        inserted
    }

    /// Removes a key from the tree.
    /// Returns whether the key was previously in the tree.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes and returns the stored key equal to `key`.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let removed = self.root.remove(key);
        if removed.is_some() {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        removed
    }
}

impl<K> Tree<K> {
    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree. An empty tree has height 0, a single
    /// key height 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Clears the tree, deallocating all nodes.
    pub fn clear(&mut self) {
        self.root = Subtree::Empty;
        self.num_nodes = 0;
    }

    /// Gets an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: Vec::with_capacity(self.height()),
            remaining: self.num_nodes,
        };
        iter.push_left_spine(&self.root);
        iter
    }
}

impl<K> Subtree<K> {
    pub(crate) fn height(&self) -> usize {
        match self {
            Subtree::Empty => 0,
            Subtree::Node(node) => node.height,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.height() == 0
    }

    fn leaf(key: K) -> Self {
        Subtree::Node(Box::new(Node {
            key,
            height: 1,
            left: Subtree::Empty,
            right: Subtree::Empty,
        }))
    }

    fn left_height(&self) -> usize {
        match self {
            Subtree::Empty => 0,
            Subtree::Node(node) => node.left.height(),
        }
    }

    fn right_height(&self) -> usize {
        match self {
            Subtree::Empty => 0,
            Subtree::Node(node) => node.right.height(),
        }
    }

    // Replaces the node at this position by the node `f` returns.
    fn map_node<F>(&mut self, f: F)
    where
        F: FnOnce(Box<Node<K>>) -> Box<Node<K>>,
    {
        if let Subtree::Node(node) = mem::take(self) {
            *self = Subtree::Node(f(node));
        }
    }

    fn rebalance(&mut self) {
        self.map_node(Node::rebalance);
    }

    // Unlinks the node at this position and returns its key.
    // A node with two children is replaced by its in-order successor.
    fn unlink(&mut self) -> Option<K> {
        let Subtree::Node(mut node) = mem::take(self) else {
            return None;
        };
        match (mem::take(&mut node.left), mem::take(&mut node.right)) {
            (Subtree::Empty, child) | (child, Subtree::Empty) => {
                *self = child;
                Some(node.key)
            }
            (left, mut right) => match right.remove_min() {
                Some(successor) => {
                    let removed = mem::replace(&mut node.key, successor);
                    node.left = left;
                    node.right = right;
                    *self = Subtree::Node(node.rebalance());
                    Some(removed)
                }
                None => {
                    *self = left;
                    Some(node.key)
                }
            },
        }
    }

    fn remove_min(&mut self) -> Option<K> {
        let Subtree::Node(node) = self else {
            return None;
        };
        if node.left.is_empty() {
            return self.unlink();
        }
        let removed = node.left.remove_min();
        self.rebalance();
        removed
    }
}

impl<K: Ord> Subtree<K> {
    fn insert(&mut self, key: K) -> bool {
        let inserted = match self {
            Subtree::Empty => {
                *self = Subtree::leaf(key);
                return true;
            }
            Subtree::Node(node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.insert(key),
                Ordering::Greater => node.right.insert(key),
                Ordering::Equal => false,
            },
        };
        // Heights only change when the tree grew below this node
        if inserted {
            self.rebalance();
        }
        inserted
    }

    fn remove(&mut self, key: &K) -> Option<K> {
        let Subtree::Node(node) = self else {
            return None;
        };
        let removed = match key.cmp(&node.key) {
            Ordering::Equal => return self.unlink(),
            Ordering::Less => node.left.remove(key),
            Ordering::Greater => node.right.remove(key),
        };
        if removed.is_some() {
            self.rebalance();
        }
        removed
    }
}

impl<K> Default for Subtree<K> {
    fn default() -> Self {
        Subtree::Empty
    }
}

impl<K> Node<K> {
    pub(crate) fn expected_height(&self) -> usize {
        1 + cmp::max(self.left.height(), self.right.height())
    }

    fn adjust_height(&mut self) {
        self.height = self.expected_height();
    }

    //   n           r
    //  / \         / \
    // a   r   ->  n   c
    //    / \     / \
    //   b   c   a   b
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut right = match mem::take(&mut self.right) {
            Subtree::Node(right) => right,
            Subtree::Empty => return self,
        };
        self.right = mem::take(&mut right.left);
        self.adjust_height();
        right.left = Subtree::Node(self);
        right.adjust_height();
        right
    }

    //     n         l
    //    / \       / \
    //   l   c ->  a   n
    //  / \           / \
    // a   b         b   c
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut left = match mem::take(&mut self.left) {
            Subtree::Node(left) => left,
            Subtree::Empty => return self,
        };
        self.left = mem::take(&mut left.right);
        self.adjust_height();
        left.right = Subtree::Node(self);
        left.adjust_height();
        left
    }

    /// Restores the AVL condition at this node if necessary and adjusts its height.
    /// Children must already be balanced and differ in height by at most two.
    /// When the heavy child's grandchildren are of equal height a single
    /// rotation is used.
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.adjust_height();
        let left_height = self.left.height();
        let right_height = self.right.height();
        if left_height > right_height + 1 {
            // Left subtree too high
            if self.left.right_height() > self.left.left_height() {
                self.left.map_node(Node::rotate_left);
            }
            self.rotate_right()
        } else if right_height > left_height + 1 {
            // Right subtree too high
            if self.right.left_height() > self.right.right_height() {
                self.right.map_node(Node::rotate_right);
            }
            self.rotate_left()
        } else {
            self
        }
    }
}

impl<K: Ord> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    #[inline]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Ord + Copy + 'a> Extend<&'a K> for Tree<K> {
    #[inline]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a K>,
    {
        self.extend(iter.into_iter().copied());
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys of a tree in ascending order.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut current: &'a Subtree<K>) {
        while let Subtree::Node(node) = current {
            self.stack.push(node);
            current = &node.left;
        }
    }
}

impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
