//! Slab-backed node arena with generational keys.
//!
//! [`Nodes`] owns every node of one list. Nodes refer to each other through
//! [`NodeKey`] indices, so `prev` never owns its target and the link graph
//! has no ownership cycle. Vacated slots are recycled by the slab; the
//! generation stamp keeps stale keys from resolving to the new occupant, and
//! keys from other arenas from resolving at all.

use slab::Slab;

use crate::NodeKey;
use crate::node::ListNode;

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    node: ListNode<T>,
}

/// Arena that owns list nodes and issues stable [`NodeKey`]s.
///
/// Insert, remove and lookup are O(1). A key stays valid until its node is
/// removed; after that every lookup through it returns `None`, even once the
/// slot has been reused. A key issued by a different arena never resolves.
#[derive(Debug)]
pub struct Nodes<T> {
    slots: Slab<Slot<T>>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Nodes<T> {
    /// Creates an empty arena.
    pub const fn new() -> Self {
        Self { slots: Slab::new() }
    }

    /// Creates an arena with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
        }
    }

    /// Returns the number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no nodes are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stores an unlinked node holding `value`, returning its key.
    pub fn insert(&mut self, value: T) -> NodeKey {
        let generation = NodeKey::next_generation();
        let index = self.slots.insert(Slot {
            generation,
            node: ListNode::new(value),
        });
        NodeKey::new(index, generation)
    }

    /// Removes the node behind `key`, if it is still live.
    ///
    /// Does not touch neighbors' links; use [`delete`](Self::delete) to
    /// splice a linked node out.
    pub fn remove(&mut self, key: NodeKey) -> Option<ListNode<T>> {
        if !self.contains(key) {
            return None;
        }
        Some(self.slots.remove(key.index()).node)
    }

    /// Returns `true` if `key` refers to a live node.
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.slots
            .get(key.index())
            .is_some_and(|slot| slot.generation == key.generation())
    }

    /// Returns the node behind `key`, if live.
    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&ListNode<T>> {
        self.slots
            .get(key.index())
            .filter(|slot| slot.generation == key.generation())
            .map(|slot| &slot.node)
    }

    /// Returns the node behind `key` mutably, if live.
    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut ListNode<T>> {
        self.slots
            .get_mut(key.index())
            .filter(|slot| slot.generation == key.generation())
            .map(|slot| &mut slot.node)
    }

    /// Returns the node behind a key the caller knows to be live.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant. Link fields only ever hold live keys.
    #[inline]
    pub(crate) fn node(&self, key: NodeKey) -> &ListNode<T> {
        let slot = &self.slots[key.index()];
        debug_assert_eq!(slot.generation, key.generation(), "stale link");
        &slot.node
    }

    /// Mutable counterpart of [`node`](Self::node).
    #[inline]
    pub(crate) fn node_mut(&mut self, key: NodeKey) -> &mut ListNode<T> {
        let slot = &mut self.slots[key.index()];
        debug_assert_eq!(slot.generation, key.generation(), "stale link");
        &mut slot.node
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}
