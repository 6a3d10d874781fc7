//! FIFO queue adapter over [`DoublyLinkedList`].
//!
//! The list head is the front of the queue: `enqueue` appends at the tail,
//! `dequeue` removes from the head. Both are O(1).

use crate::DoublyLinkedList;

/// First-in, first-out queue.
///
/// # Example
///
/// ```
/// use nexus_classic::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.size(), 1);
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    storage: DoublyLinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: DoublyLinkedList::new(),
        }
    }

    /// Adds `value` at the back.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.storage.add_to_tail(value);
    }

    /// Removes and returns the front value, or `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.storage.remove_from_head()
    }

    /// Returns the front value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.storage.front()
    }

    /// Returns the number of queued values.
    #[inline]
    pub const fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}
