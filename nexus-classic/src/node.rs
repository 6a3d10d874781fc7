//! Doubly-linked cells and the splice operations that act on them.
//!
//! A [`ListNode`] holds a value plus `prev`/`next` keys into the same
//! [`Nodes`] arena. The operations here relink a node and its immediate
//! neighbors only. They know nothing about a list's head, tail or length;
//! keeping those consistent is the container's job.
//!
//! # Example
//!
//! ```
//! use nexus_classic::Nodes;
//!
//! let mut nodes = Nodes::new();
//! let a = nodes.insert(1);
//! let c = nodes.insert_after(a, 3).unwrap();
//! let b = nodes.insert_before(c, 2).unwrap();
//!
//! assert_eq!(nodes.get(a).unwrap().next(), Some(b));
//! assert_eq!(nodes.get(c).unwrap().prev(), Some(b));
//!
//! // Splice the middle cell out; its neighbors now point at each other.
//! assert_eq!(nodes.delete(b), Some(2));
//! assert_eq!(nodes.get(a).unwrap().next(), Some(c));
//! assert_eq!(nodes.get(c).unwrap().prev(), Some(a));
//! ```

use crate::{NodeKey, Nodes};

/// A single storage cell: one value and links to its neighbors.
///
/// Invariant: when `prev` is set, `prev.next` is this node, and when `next`
/// is set, `next.prev` is this node.
#[derive(Debug)]
pub struct ListNode<T> {
    pub(crate) value: T,
    pub(crate) prev: NodeKey,
    pub(crate) next: NodeKey,
}

impl<T> ListNode<T> {
    /// Creates a new unlinked node.
    #[inline]
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            prev: NodeKey::NONE,
            next: NodeKey::NONE,
        }
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the stored value mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the previous node's key, or `None` if nothing precedes this node.
    #[inline]
    pub fn prev(&self) -> Option<NodeKey> {
        self.prev.into_option()
    }

    /// Returns the next node's key, or `None` if nothing follows this node.
    #[inline]
    pub fn next(&self) -> Option<NodeKey> {
        self.next.into_option()
    }

    /// Consumes the node, returning its value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Nodes<T> {
    /// Creates a node holding `value` between `at` and its current successor.
    ///
    /// Works when `at` has no successor: the new node simply becomes the last
    /// in the chain. A list holding a tail reference must update it itself.
    ///
    /// Returns `None` (and stores nothing) if `at` is not a live node.
    pub fn insert_after(&mut self, at: NodeKey, value: T) -> Option<NodeKey> {
        let next = self.get(at)?.next;
        let key = self.insert(value);

        let node = self.node_mut(key);
        node.prev = at;
        node.next = next;

        self.node_mut(at).next = key;
        if next.is_some() {
            self.node_mut(next).prev = key;
        }

        Some(key)
    }

    /// Creates a node holding `value` between `at` and its current predecessor.
    ///
    /// Returns `None` (and stores nothing) if `at` is not a live node.
    pub fn insert_before(&mut self, at: NodeKey, value: T) -> Option<NodeKey> {
        let prev = self.get(at)?.prev;
        let key = self.insert(value);

        let node = self.node_mut(key);
        node.prev = prev;
        node.next = at;

        self.node_mut(at).prev = key;
        if prev.is_some() {
            self.node_mut(prev).next = key;
        }

        Some(key)
    }

    /// Splices `key` out of its chain and releases it, returning its value.
    ///
    /// `prev.next` and `next.prev` are relinked around the node. Any head,
    /// tail or length a container tracks is left untouched.
    ///
    /// Returns `None` if `key` is not a live node.
    pub fn delete(&mut self, key: NodeKey) -> Option<T> {
        let node = self.remove(key)?;

        if node.prev.is_some() {
            self.node_mut(node.prev).next = node.next;
        }
        if node.next.is_some() {
            self.node_mut(node.next).prev = node.prev;
        }

        Some(node.value)
    }
}
