//! Fixed-capacity ring buffers that overwrite their oldest entry when full.
//!
//! Two layouts with identical observable behavior:
//!
//! - [`RingBuffer`] grows a [`DoublyLinkedList`] one tail node at a time until
//!   it reaches capacity, then stops allocating and overwrites node values in
//!   place, cycling head → … → tail → head.
//! - [`ArrayRingBuffer`] does the same over a contiguous `Vec`.
//!
//! Both reject a capacity of 0 at construction.
//!
//! ```text
//! capacity 3:   append 1,2,3   ->  [1, 2, 3]   (full; current = tail)
//!               append 4       ->  [4, 2, 3]   (wrapped to head)
//!               append 5       ->  [4, 5, 3]
//! ```

use tracing::{debug, trace};

use crate::{DoublyLinkedList, Error, NodeKey, Result, list};

/// Ring buffer over a doubly-linked list.
///
/// # Example
///
/// ```
/// use nexus_classic::RingBuffer;
///
/// let mut ring = RingBuffer::new(3).unwrap();
/// for i in 1..=4 {
///     ring.append(i);
/// }
///
/// // Storage order: the head slot was overwritten.
/// assert_eq!(ring.get(), vec![4, 2, 3]);
/// // Oldest-to-newest order.
/// assert_eq!(ring.chronological().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct RingBuffer<T> {
    capacity: usize,
    storage: DoublyLinkedList<T>,
    current: Option<NodeKey>,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            capacity,
            storage: DoublyLinkedList::with_capacity(capacity),
            current: None,
        })
    }

    /// Returns the maximum number of items held.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items currently held.
    #[inline]
    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if nothing has been appended yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` once the buffer has reached capacity. It stays full.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// Returns the most recently appended item.
    #[inline]
    pub fn latest(&self) -> Option<&T> {
        self.current.and_then(|key| self.storage.get(key))
    }

    /// Writes `item`.
    ///
    /// While filling, a node is appended at the tail. Once full, the node
    /// after the last write is overwritten, wrapping from the tail back to
    /// the head.
    pub fn append(&mut self, item: T) {
        if !self.is_full() {
            self.current = Some(self.storage.add_to_tail(item));
            if self.is_full() {
                debug!(capacity = self.capacity, "ring buffer full");
            }
            return;
        }

        // A full buffer holds at least one node, so head is always set here.
        let target = match self.current.and_then(|key| self.storage.next_key(key)) {
            Some(next) => next,
            None => {
                trace!("ring buffer wrapped to head");
                self.storage.head().unwrap_or(NodeKey::NONE)
            }
        };
        self.storage.overwrite(target, item);
        self.current = Some(target);
    }

    /// Returns the contents in storage order, head to tail.
    ///
    /// Before the first wraparound this is insertion order. Afterwards the
    /// head holds whichever item last overwrote it; use
    /// [`chronological`](Self::chronological) for oldest-to-newest order.
    pub fn get(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Iterates the contents in storage order, head to tail.
    #[inline]
    pub fn iter(&self) -> list::Iter<'_, T> {
        self.storage.iter()
    }

    /// Iterates the contents from oldest to newest.
    pub fn chronological(&self) -> impl Iterator<Item = &T> + '_ {
        let mut key = self
            .current
            .and_then(|key| self.storage.next_key(key))
            .or_else(|| self.storage.head());

        (0..self.storage.len()).filter_map(move |_| {
            let at = key?;
            key = self.storage.next_key(at).or_else(|| self.storage.head());
            self.storage.get(at)
        })
    }
}

/// Ring buffer over a contiguous `Vec`.
///
/// Behaves exactly like [`RingBuffer`]: same overwrite order, same
/// [`get`](Self::get) order.
///
/// # Example
///
/// ```
/// use nexus_classic::ArrayRingBuffer;
///
/// let mut ring = ArrayRingBuffer::new(3).unwrap();
/// for i in 1..=5 {
///     ring.append(i);
/// }
/// assert_eq!(ring.get(), vec![4, 5, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayRingBuffer<T> {
    storage: Vec<T>,
    capacity: usize,
    /// Slot the next overwrite lands in.
    cursor: usize,
}

impl<T> ArrayRingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            storage: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        })
    }

    /// Returns the maximum number of items held.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if nothing has been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` once the buffer has reached capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// Writes `item`, overwriting the oldest slot once full.
    pub fn append(&mut self, item: T) {
        if !self.is_full() {
            self.storage.push(item);
            return;
        }

        self.storage[self.cursor] = item;
        self.cursor = (self.cursor + 1) % self.capacity;
    }

    /// Returns the contents in storage order.
    pub fn get(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.storage.clone()
    }

    /// Iterates the contents in storage order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Iterates the contents from oldest to newest.
    pub fn chronological(&self) -> impl Iterator<Item = &T> + '_ {
        let (newer, older) = self.storage.split_at(self.cursor);
        older.iter().chain(newer)
    }
}
