//! Generational handles for list nodes.
//!
//! A [`NodeKey`] pairs a slot index with the generation stamped on the node
//! when it was written. Generations come from one process-wide counter, so
//! no two nodes ever share a stamp: a key to a deleted node can't alias the
//! node that later takes its slot, and a key issued by one list never
//! resolves in another.

use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

/// Handle to a single node in a [`DoublyLinkedList`](crate::DoublyLinkedList).
///
/// Keys are cheap to copy and compare by identity, not by value: two nodes
/// holding equal values have different keys. Keys are unique across lists:
/// handing one list a key from another finds nothing.
///
/// # Example
///
/// ```
/// use nexus_classic::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// let a = list.add_to_tail(7);
/// let b = list.add_to_tail(7);
///
/// assert_ne!(a, b);
/// assert_eq!(list.get(a), list.get(b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    index: u32,
    generation: u64,
}

impl NodeKey {
    /// Sentinel for "no node". Used for empty `prev`/`next` links.
    pub(crate) const NONE: Self = Self {
        index: u32::MAX,
        generation: u64::MAX,
    };

    #[inline]
    pub(crate) fn new(index: usize, generation: u64) -> Self {
        debug_assert!(index < u32::MAX as usize, "node index out of range");
        Self {
            index: index as u32,
            generation,
        }
    }

    /// Returns the slot index this key points at.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Returns the generation stamped on the node when this key was issued.
    #[inline]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    /// Claims a generation no other node has used.
    #[inline]
    pub(crate) fn next_generation() -> u64 {
        NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub(crate) fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel into `None`.
    #[inline]
    pub(crate) fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}
