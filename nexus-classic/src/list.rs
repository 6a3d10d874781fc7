//! Doubly-linked list over an owned node arena.
//!
//! The list tracks head, tail and length; the nodes themselves live in a
//! [`Nodes`] arena the list owns exclusively. Every insertion returns a
//! [`NodeKey`] that can later be used for O(1) lookup, deletion, or
//! relocation of that node.
//!
//! # Example
//!
//! ```
//! use nexus_classic::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//!
//! let a = list.add_to_tail(1);
//! let b = list.add_to_tail(2);
//! let _c = list.add_to_tail(3);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(b), Some(&2));
//!
//! // Remove from the middle
//! assert_eq!(list.delete(b), Some(2));
//! assert!(!list.contains(b));
//!
//! // Relocate the head to the tail; the value moves into a new node.
//! let a = list.move_to_end(a).unwrap();
//! assert_eq!(list.tail(), Some(a));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
//!
//! assert_eq!(list.remove_from_head(), Some(3));
//! assert_eq!(list.remove_from_head(), Some(1));
//! assert_eq!(list.remove_from_head(), None);
//! ```

use core::fmt;
use core::iter::FusedIterator;

use tracing::trace;

use crate::{Error, NodeKey, Nodes, Result};

/// A doubly-linked list that owns its nodes.
///
/// # Invariants
///
/// - `len == 0` exactly when both `head` and `tail` are absent.
/// - `len == 1` implies `head == tail`.
/// - Following `next` from `head` visits exactly `len` nodes, the same nodes
///   that following `prev` from `tail` visits in reverse.
pub struct DoublyLinkedList<T> {
    nodes: Nodes<T>,
    head: NodeKey,
    tail: NodeKey,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Nodes::new(),
            head: NodeKey::NONE,
            tail: NodeKey::NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Nodes::with_capacity(capacity),
            head: NodeKey::NONE,
            tail: NodeKey::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<NodeKey> {
        self.head.into_option()
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<NodeKey> {
        self.tail.into_option()
    }

    /// Returns `true` if `key` is currently the head.
    #[inline]
    pub fn is_head(&self, key: NodeKey) -> bool {
        self.head.is_some() && self.head == key
    }

    /// Returns `true` if `key` is currently the tail.
    #[inline]
    pub fn is_tail(&self, key: NodeKey) -> bool {
        self.tail.is_some() && self.tail == key
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the value stored at `key`.
    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored at `key`.
    ///
    /// Overwriting a value in place does not change the list's shape.
    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut T> {
        self.nodes.get_mut(key).map(|node| &mut node.value)
    }

    /// Replaces the value of a node the caller knows to be live.
    ///
    /// # Panics
    ///
    /// Panics if `key` does not refer to a live node.
    #[inline]
    pub(crate) fn overwrite(&mut self, key: NodeKey, value: T) {
        self.nodes.node_mut(key).value = value;
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.head)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail)
    }

    /// Returns the key of the node after `key`.
    ///
    /// Returns `None` if `key` is the tail or not in the list.
    #[inline]
    pub fn next_key(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key)?.next()
    }

    /// Returns the key of the node before `key`.
    ///
    /// Returns `None` if `key` is the head or not in the list.
    #[inline]
    pub fn prev_key(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key)?.prev()
    }

    // ========================================================================
    // Boundary insert / remove
    // ========================================================================

    /// Inserts `value` as the new head. O(1).
    pub fn add_to_head(&mut self, value: T) -> NodeKey {
        let key = self.nodes.insert(value);
        self.nodes.node_mut(key).next = self.head;

        if self.head.is_some() {
            self.nodes.node_mut(self.head).prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
        key
    }

    /// Inserts `value` as the new tail. O(1).
    pub fn add_to_tail(&mut self, value: T) -> NodeKey {
        let key = self.nodes.insert(value);
        self.nodes.node_mut(key).prev = self.tail;

        if self.tail.is_some() {
            self.nodes.node_mut(self.tail).next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
        key
    }

    /// Removes and returns the head value. O(1).
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn remove_from_head(&mut self) -> Option<T> {
        self.take(self.head)
    }

    /// Removes and returns the tail value. O(1).
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn remove_from_tail(&mut self) -> Option<T> {
        self.take(self.tail)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns `true` if the node behind `key` is in this list.
    ///
    /// Compares node identity, not value: a deleted node is never found even
    /// if an equal value is still present.
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains(key)
    }

    /// Returns `true` if any node holds a value equal to `value`. O(n).
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Returns the largest value in the list. O(n).
    ///
    /// When several nodes hold the maximum, the one nearest the tail is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list has no elements.
    pub fn get_max(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.iter().max().ok_or(Error::Empty)
    }

    // ========================================================================
    // Arbitrary removal and relocation
    // ========================================================================

    /// Removes the node behind `key`, returning its value.
    ///
    /// Boundary nodes update `head`/`tail`; interior nodes are spliced out in
    /// place. Does nothing and returns `None` if the node is not in the list.
    pub fn delete(&mut self, key: NodeKey) -> Option<T> {
        let value = self.take(key);
        if value.is_none() {
            trace!(?key, "delete: node not in list");
        }
        value
    }

    /// Moves the value at `key` into a new head node and drops the old node.
    ///
    /// Length is unchanged. Returns the new head's key, or `None` (leaving the
    /// list untouched) if `key` is not in the list.
    pub fn move_to_front(&mut self, key: NodeKey) -> Option<NodeKey> {
        let Some(value) = self.take(key) else {
            trace!(?key, "move_to_front: node not in list");
            return None;
        };
        Some(self.add_to_head(value))
    }

    /// Moves the value at `key` into a new tail node and drops the old node.
    ///
    /// Length is unchanged. Returns the new tail's key, or `None` (leaving the
    /// list untouched) if `key` is not in the list.
    pub fn move_to_end(&mut self, key: NodeKey) -> Option<NodeKey> {
        let Some(value) = self.take(key) else {
            trace!(?key, "move_to_end: node not in list");
            return None;
        };
        Some(self.add_to_tail(value))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NodeKey::NONE;
        self.tail = NodeKey::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over values from head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns an iterator over node keys from head to tail.
    #[inline]
    pub fn keys(&self) -> Keys<'_, T> {
        Keys {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Splices `key` out, fixing up head, tail and length.
    fn take(&mut self, key: NodeKey) -> Option<T> {
        let node = self.nodes.get(key)?;
        let prev = node.prev;
        let next = node.next;

        let value = self.nodes.delete(key)?;

        if prev.is_none() {
            self.head = next;
        }
        if next.is_none() {
            self.tail = prev;
        }

        self.len -= 1;
        Some(value)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_to_tail(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list values.
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    front: NodeKey,
    back: NodeKey,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.nodes.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.nodes.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over node keys.
pub struct Keys<'a, T> {
    nodes: &'a Nodes<T>,
    front: NodeKey,
    back: NodeKey,
    remaining: usize,
}

impl<T> Iterator for Keys<'_, T> {
    type Item = NodeKey;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.front;
        self.front = self.nodes.node(key).next;
        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Keys<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.back;
        self.back = self.nodes.node(key).prev;
        self.remaining -= 1;
        Some(key)
    }
}

impl<T> ExactSizeIterator for Keys<'_, T> {}
impl<T> FusedIterator for Keys<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks both directions and checks every structural invariant.
    fn assert_consistent<T>(list: &DoublyLinkedList<T>) {
        assert_eq!(list.nodes.len(), list.len());
        assert_eq!(list.is_empty(), list.head().is_none());
        assert_eq!(list.is_empty(), list.tail().is_none());
        if list.len() == 1 {
            assert_eq!(list.head(), list.tail());
        }

        let mut forward = Vec::new();
        let mut key = list.head;
        while key.is_some() {
            let node = list.nodes.node(key);
            if node.next.is_some() {
                assert_eq!(list.nodes.node(node.next).prev, key);
            }
            forward.push(key);
            key = node.next;
        }
        assert_eq!(forward.len(), list.len());

        let mut backward = Vec::new();
        let mut key = list.tail;
        while key.is_some() {
            backward.push(key);
            key = list.nodes.node(key).prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }

    fn values(list: &DoublyLinkedList<u64>) -> Vec<u64> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert!(list.front().is_none());
        assert_consistent(&list);
    }

    #[test]
    fn add_to_tail_single() {
        let mut list = DoublyLinkedList::new();

        let a = list.add_to_tail(1u64);

        assert_eq!(list.len(), 1);
        assert_eq!(list.head(), Some(a));
        assert_eq!(list.tail(), Some(a));
        assert_eq!(list.get(a), Some(&1));
        assert!(list.front().is_some_and(|&front| front == 1));
        assert!(list.back().is_some_and(|&back| back == 1));
        assert_consistent(&list);
    }

    #[test]
    fn add_to_tail_preserves_order() {
        let list: DoublyLinkedList<u64> = (1..=5).collect();
        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
        assert_consistent(&list);
    }

    #[test]
    fn add_to_head_multiple() {
        let mut list = DoublyLinkedList::new();

        let a = list.add_to_head(1u64);
        let _b = list.add_to_head(2);
        let c = list.add_to_head(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.head(), Some(c));
        assert_eq!(list.tail(), Some(a));
        assert_eq!(values(&list), vec![3, 2, 1]);
        assert_consistent(&list);
    }

    #[test]
    fn remove_from_head() {
        let mut list: DoublyLinkedList<u64> = (1..=3).collect();

        assert_eq!(list.remove_from_head(), Some(1));
        assert_eq!(list.len(), 2);
        assert_consistent(&list);

        assert_eq!(list.remove_from_head(), Some(2));
        assert_eq!(list.remove_from_head(), Some(3));
        assert_eq!(list.remove_from_head(), None);
        assert!(list.is_empty());
        assert_consistent(&list);
    }

    #[test]
    fn remove_from_tail() {
        let mut list: DoublyLinkedList<u64> = (1..=3).collect();

        assert_eq!(list.remove_from_tail(), Some(3));
        assert_eq!(list.remove_from_tail(), Some(2));
        assert_consistent(&list);
        assert_eq!(list.remove_from_tail(), Some(1));
        assert_eq!(list.remove_from_tail(), None);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
    }

    #[test]
    fn remove_sole_element_clears_both_ends() {
        let mut list = DoublyLinkedList::new();
        list.add_to_head(9u64);

        assert_eq!(list.remove_from_tail(), Some(9));
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert_consistent(&list);

        list.add_to_tail(10);
        assert_eq!(list.remove_from_head(), Some(10));
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
    }

    #[test]
    fn contains_is_identity() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        let b = list.add_to_tail(1);

        assert!(list.contains(a));
        assert!(list.contains(b));

        list.delete(a);
        assert!(!list.contains(a));
        assert!(list.contains(b));
        assert!(list.contains_value(&1));
    }

    #[test]
    fn contains_value() {
        let list: DoublyLinkedList<u64> = [4, 8, 15].into_iter().collect();
        assert!(list.contains_value(&8));
        assert!(!list.contains_value(&16));
        assert!(!DoublyLinkedList::<u64>::new().contains_value(&0));
    }

    #[test]
    fn delete_middle() {
        let mut list = DoublyLinkedList::new();
        let _a = list.add_to_tail(1u64);
        let b = list.add_to_tail(2);
        let _c = list.add_to_tail(3);

        assert_eq!(list.delete(b), Some(2));
        assert_eq!(list.len(), 2);
        assert_eq!(values(&list), vec![1, 3]);
        assert_consistent(&list);
    }

    #[test]
    fn delete_head_and_tail() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        let b = list.add_to_tail(2);
        let c = list.add_to_tail(3);

        assert_eq!(list.delete(a), Some(1));
        assert_eq!(list.head(), Some(b));
        assert_consistent(&list);

        assert_eq!(list.delete(c), Some(3));
        assert_eq!(list.tail(), Some(b));
        assert_eq!(list.head(), Some(b));
        assert_consistent(&list);
    }

    #[test]
    fn delete_absent_is_noop() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        list.add_to_tail(2);

        assert_eq!(list.delete(a), Some(1));
        assert_eq!(list.delete(a), None);
        assert_eq!(list.len(), 1);
        assert_consistent(&list);
    }

    #[test]
    fn key_from_other_list_is_not_contained() {
        let mut a = DoublyLinkedList::new();
        let mut b = DoublyLinkedList::new();

        let from_a = a.add_to_tail("from-a");
        let first_b = b.add_to_tail("from-b");
        b.add_to_tail("b2");
        assert_eq!(from_a.index(), first_b.index());

        assert!(!b.contains(from_a));
        assert_eq!(b.delete(from_a), None);
        assert_eq!(b.move_to_front(from_a), None);
        assert_eq!(b.move_to_end(from_a), None);
        assert_eq!(b.len(), 2);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec!["from-b", "b2"]);
        assert_consistent(&b);

        assert_eq!(a.get(from_a), Some(&"from-a"));
    }

    #[test]
    fn stale_key_after_slot_reuse() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        list.delete(a);

        // Reuses a's slot with a fresh generation.
        let b = list.add_to_tail(2);
        assert_eq!(a.index(), b.index());

        assert!(!list.contains(a));
        assert_eq!(list.delete(a), None);
        assert_eq!(list.move_to_front(a), None);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(b), Some(&2));
    }

    #[test]
    fn move_to_front() {
        let mut list = DoublyLinkedList::new();
        let _a = list.add_to_tail(1u64);
        let _b = list.add_to_tail(2);
        let c = list.add_to_tail(3);

        let moved = list.move_to_front(c).unwrap();

        assert_eq!(list.head(), Some(moved));
        assert_eq!(list.front(), Some(&3));
        assert!(!list.contains(c));
        assert_eq!(list.len(), 3);
        assert_eq!(values(&list), vec![3, 1, 2]);
        assert_consistent(&list);
    }

    #[test]
    fn move_to_end() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        let _b = list.add_to_tail(2);
        let _c = list.add_to_tail(3);

        let moved = list.move_to_end(a).unwrap();

        assert_eq!(list.tail(), Some(moved));
        assert_eq!(list.len(), 3);
        assert_eq!(values(&list), vec![2, 3, 1]);
        assert_consistent(&list);
    }

    #[test]
    fn move_single_element() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);

        let a = list.move_to_front(a).unwrap();
        assert_eq!(list.head(), Some(a));
        assert_eq!(list.tail(), Some(a));

        let a = list.move_to_end(a).unwrap();
        assert_eq!(list.head(), Some(a));
        assert_eq!(list.len(), 1);
        assert_consistent(&list);
    }

    #[test]
    fn move_absent_is_noop() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        list.add_to_tail(2);
        list.delete(a);

        assert_eq!(list.move_to_front(a), None);
        assert_eq!(list.move_to_end(a), None);
        assert_eq!(values(&list), vec![2]);
    }

    #[test]
    fn get_max() {
        let list: DoublyLinkedList<u64> = [3, 9, 1, 9, 4].into_iter().collect();
        assert_eq!(list.get_max(), Ok(&9));

        let single: DoublyLinkedList<u64> = [7].into_iter().collect();
        assert_eq!(single.get_max(), Ok(&7));
    }

    #[test]
    fn get_max_empty() {
        let list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert_eq!(list.get_max(), Err(Error::Empty));
    }

    #[test]
    fn get_mut_overwrites_in_place() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        list.add_to_tail(2);

        *list.get_mut(a).unwrap() = 10;
        assert_eq!(values(&list), vec![10, 2]);
        assert_eq!(list.head(), Some(a));
    }

    #[test]
    fn overwrite_keeps_shape() {
        let mut list: DoublyLinkedList<u64> = (1..=3).collect();
        let key = list.keys().nth(1).unwrap();

        list.overwrite(key, 20);

        assert_eq!(values(&list), vec![1, 20, 3]);
        assert!(list.contains(key));
        assert_consistent(&list);
    }

    #[test]
    #[should_panic]
    fn overwrite_dead_node_panics() {
        let mut list = DoublyLinkedList::new();
        let key = list.add_to_tail(1u64);
        list.delete(key);

        list.overwrite(key, 2);
    }

    #[test]
    fn navigation() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        let b = list.add_to_tail(2);
        let c = list.add_to_tail(3);

        assert_eq!(list.next_key(a), Some(b));
        assert_eq!(list.next_key(c), None);
        assert_eq!(list.prev_key(c), Some(b));
        assert_eq!(list.prev_key(a), None);
        assert!(list.is_head(a));
        assert!(list.is_tail(c));
        assert!(!list.is_head(b));
    }

    #[test]
    fn iter_double_ended() {
        let list: DoublyLinkedList<u64> = (1..=4).collect();

        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let rev: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(rev, vec![4, 3, 2, 1]);
    }

    #[test]
    fn keys_match_iteration_order() {
        let mut list = DoublyLinkedList::new();
        let a = list.add_to_tail(1u64);
        let b = list.add_to_tail(2);
        let c = list.add_to_head(0);

        assert_eq!(list.keys().collect::<Vec<_>>(), vec![c, a, b]);
        assert_eq!(list.keys().rev().collect::<Vec<_>>(), vec![b, a, c]);
    }

    #[test]
    fn clear() {
        let mut list: DoublyLinkedList<u64> = (0..10).collect();
        let key = list.head().unwrap();

        list.clear();

        assert!(list.is_empty());
        assert!(!list.contains(key));
        assert_consistent(&list);

        list.add_to_tail(1);
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn debug_lists_values() {
        let list: DoublyLinkedList<u64> = (1..=3).collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn mixed_operations_keep_invariants() {
        let mut list = DoublyLinkedList::new();
        let mut keys = Vec::new();

        for i in 0..32u64 {
            let key = if i % 3 == 0 {
                list.add_to_head(i)
            } else {
                list.add_to_tail(i)
            };
            keys.push(key);
            assert_consistent(&list);
        }

        for (i, key) in keys.iter().enumerate() {
            match i % 4 {
                0 => {
                    list.delete(*key);
                }
                1 => {
                    list.move_to_front(*key);
                }
                2 => {
                    list.move_to_end(*key);
                }
                _ => {
                    list.remove_from_tail();
                }
            }
            assert_consistent(&list);
        }
    }
}

#[cfg(test)]
mod bench_list {
    use super::*;
    use hdrhistogram::Histogram;
    use std::time::Instant;

    fn print_histogram(name: &str, hist: &Histogram<u64>) {
        println!(
            "{:24} p50: {:5} ns | p99: {:5} ns | p999: {:6} ns | min: {:4} | max: {:6}",
            name,
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.99),
            hist.value_at_quantile(0.999),
            hist.min(),
            hist.max(),
        );
    }

    const WARMUP: usize = 10_000;
    const ITERATIONS: usize = 100_000;

    #[test]
    #[ignore]
    fn bench_list_boundary_ops() {
        let mut list: DoublyLinkedList<u64> = DoublyLinkedList::with_capacity(WARMUP);
        let mut add_hist = Histogram::<u64>::new(3).unwrap();
        let mut remove_hist = Histogram::<u64>::new(3).unwrap();
        let mut move_hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..WARMUP {
            list.add_to_tail(i as u64);
        }

        for i in 0..ITERATIONS {
            let start = Instant::now();
            list.add_to_tail(i as u64);
            add_hist.record(start.elapsed().as_nanos() as u64).unwrap();

            let key = list.head().unwrap();
            let start = Instant::now();
            let _ = std::hint::black_box(list.move_to_end(key));
            move_hist.record(start.elapsed().as_nanos() as u64).unwrap();

            let start = Instant::now();
            let _ = std::hint::black_box(list.remove_from_head());
            remove_hist.record(start.elapsed().as_nanos() as u64).unwrap();
        }

        println!("\nDoublyLinkedList<u64> ({ITERATIONS} iterations)");
        print_histogram("add_to_tail", &add_hist);
        print_histogram("move_to_end", &move_hist);
        print_histogram("remove_from_head", &remove_hist);
    }
}
