//! Unbalanced binary search tree with per-value frequency counts.
//!
//! Equal values never create a second node; they bump the existing node's
//! `frequency`. The tree is built for duplicate detection: [`contains`]
//! reports a value only while its node has been seen exactly once, and
//! marks it as seen again when it does.
//!
//! Insertion and lookup are iterative, so skewed trees (e.g. from sorted
//! input) never deepen the call stack. Dropping the tree is iterative too.
//!
//! [`contains`]: BinarySearchTree::contains

use core::cmp::Ordering;

use tracing::trace;

use crate::Queue;

/// A node of a [`BinarySearchTree`].
///
/// Everything in `left` is smaller than `value`, everything in `right` is
/// larger.
#[derive(Debug)]
pub struct TreeNode<T> {
    value: T,
    frequency: usize,
    left: Option<Box<TreeNode<T>>>,
    right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            frequency: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns how many times the value was inserted, plus one for each
    /// successful [`contains`](BinarySearchTree::contains).
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// Returns the subtree of smaller values.
    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    /// Returns the subtree of larger values.
    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }
}

/// Binary search tree that counts duplicates instead of storing them.
///
/// # Example
///
/// ```
/// use nexus_classic::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::with_root("bob");
/// tree.insert("amy");
/// tree.insert("zoe");
///
/// // First hit consumes the match...
/// assert!(tree.contains(&"bob"));
/// // ...so asking again finds nothing new.
/// assert!(!tree.contains(&"bob"));
/// assert!(!tree.contains(&"dan"));
/// ```
#[derive(Debug)]
pub struct BinarySearchTree<T> {
    root: Option<Box<TreeNode<T>>>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Creates a tree whose root holds `value`.
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(Box::new(TreeNode::new(value))),
            len: 1,
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Returns the number of distinct values (nodes).
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree has no nodes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of levels, 0 for an empty tree.
    pub fn depth(&self) -> usize {
        let mut pending = Queue::new();
        if let Some(root) = self.root() {
            pending.enqueue((root, 1));
        }

        let mut depth = 0;
        while let Some((node, level)) = pending.dequeue() {
            depth = depth.max(level);
            if let Some(left) = node.left() {
                pending.enqueue((left, level + 1));
            }
            if let Some(right) = node.right() {
                pending.enqueue((right, level + 1));
            }
        }
        depth
    }

    /// Returns an in-order iterator over `(value, frequency)` pairs.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root());
        iter
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value`, or bumps the frequency of the node already holding it.
    ///
    /// Pending nodes are visited breadth-first from the root through a
    /// [`Queue`]. Each comparison enqueues at most one child, so the walk
    /// follows the single root-to-leaf path the value belongs on. An empty
    /// tree takes `value` as its root.
    pub fn insert(&mut self, value: T) {
        let root = match self.root {
            Some(ref mut root) => root,
            None => {
                self.root = Some(Box::new(TreeNode::new(value)));
                self.len += 1;
                return;
            }
        };

        let mut pending: Queue<&mut TreeNode<T>> = Queue::new();
        pending.enqueue(&mut **root);

        while let Some(node) = pending.dequeue() {
            let slot = match value.cmp(&node.value) {
                Ordering::Equal => {
                    node.frequency += 1;
                    return;
                }
                Ordering::Greater => &mut node.right,
                Ordering::Less => &mut node.left,
            };

            if slot.is_none() {
                *slot = Some(Box::new(TreeNode::new(value)));
                self.len += 1;
                return;
            }
            if let Some(child) = slot.as_deref_mut() {
                pending.enqueue(child);
            }
        }
    }

    /// Reports whether `target` is held by a node that has been seen exactly
    /// once, and marks that node as seen again.
    ///
    /// This is a first-duplicate detector, not a plain membership test:
    ///
    /// - A node with `frequency == 1` matching `target` is bumped to 2 and
    ///   `true` is returned.
    /// - A matching node whose frequency is already above 1 counts as
    ///   consumed; the descent carries on into its right subtree, which holds
    ///   only larger values, so the call ends with `false`.
    ///
    /// Consequently a value inserted twice never matches, and repeated calls
    /// for the same value return `true` at most once. Building a tree from
    /// `["bob", "amy", "bob", "zoe"]` leaves `bob` at frequency 2, so
    /// `contains(&"bob")` is `false` from the start.
    pub fn contains(&mut self, target: &T) -> bool {
        let mut current = self.root.as_deref_mut();

        while let Some(node) = current {
            let ordering = target.cmp(&node.value);
            if ordering == Ordering::Equal && node.frequency == 1 {
                node.frequency += 1;
                trace!("duplicate consumed");
                return true;
            }

            current = match ordering {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal | Ordering::Greater => node.right.as_deref_mut(),
            };
        }

        false
    }

    /// Returns the frequency recorded for `value`, without side effects.
    pub fn frequency(&self, value: &T) -> Option<usize> {
        let mut current = self.root();

        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node.frequency),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }

        None
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    /// The first value becomes the root.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// In-order iterator over a [`BinarySearchTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right());
        Some((&node.value, node.frequency))
    }
}
