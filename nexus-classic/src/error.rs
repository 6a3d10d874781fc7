//! Error types for operations whose preconditions can be violated.
//!
//! Absence is not an error here: removing from an empty list returns `None`,
//! and deleting a node the list does not hold is a no-op. Only calls that have
//! no meaningful answer surface an [`Error`].

/// Errors returned by `nexus-classic` structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one element (e.g. `get_max`).
    #[error("list is empty")]
    Empty,

    /// A ring buffer was requested with room for nothing.
    #[error("ring buffer capacity must be > 0")]
    ZeroCapacity,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
