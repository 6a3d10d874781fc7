//! Classic linked structures over arena storage.
//!
//! This crate provides a small set of textbook data structures built so that
//! node-level link manipulation stays correct in every edge case: single
//! elements, boundary deletion, and wraparound overwrite.
//!
//! # Design
//!
//! Lists never hold pointers to their nodes. Nodes live in a slab-backed
//! arena ([`Nodes`]) and link to each other by [`NodeKey`]:
//!
//! ```text
//! Nodes (slab)            - owns every ListNode, recycles vacated slots
//! DoublyLinkedList        - head / tail / len over its own Nodes
//! Queue, RingBuffer       - adapters over DoublyLinkedList
//! BinarySearchTree        - Box-owned children, Queue-driven insertion
//! ```
//!
//! `prev` is a plain index, so the back-link never owns its target and there
//! is no ownership cycle to break. Keys carry a generation stamp drawn from
//! a process-wide counter: once a node is deleted its key stops resolving,
//! even after the slot is reused, and a key never resolves in another list.
//!
//! # Quick Start
//!
//! ```
//! use nexus_classic::{BinarySearchTree, DoublyLinkedList, Queue, RingBuffer};
//!
//! let mut list = DoublyLinkedList::new();
//! let key = list.add_to_tail("a");
//! list.add_to_tail("b");
//! list.move_to_end(key);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! assert_eq!(queue.dequeue(), Some(1));
//!
//! let mut tree = BinarySearchTree::with_root("amy");
//! tree.insert("bob");
//! assert!(tree.contains(&"bob"));
//!
//! let mut ring = RingBuffer::new(2).unwrap();
//! ring.append(1);
//! ring.append(2);
//! ring.append(3);
//! assert_eq!(ring.get(), vec![3, 2]);
//! ```
//!
//! # Error Model
//!
//! Absence is not an error. Removing from an empty list or queue returns
//! `None`; deleting or relocating a node the list does not hold is a no-op.
//! Only [`DoublyLinkedList::get_max`] on an empty list and a zero ring buffer
//! capacity produce an [`Error`].
//!
//! # Logging
//!
//! Structural transitions (ring buffer filling up and wrapping, ignored
//! relocations, consumed duplicates) are emitted as `tracing` events at
//! `debug`/`trace` level. Install a subscriber to see them.

#![warn(missing_docs)]

pub mod dedup;
pub mod error;
pub mod key;
pub mod list;
pub mod node;
pub mod queue;
pub mod ring;
pub mod storage;
pub mod tree;

pub use dedup::{Strategy, find_duplicates};
pub use error::{Error, Result};
pub use key::NodeKey;
pub use list::DoublyLinkedList;
pub use node::ListNode;
pub use queue::Queue;
pub use ring::{ArrayRingBuffer, RingBuffer};
pub use storage::Nodes;
pub use tree::{BinarySearchTree, TreeNode};
