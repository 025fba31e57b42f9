//! Error types for Young diagram operations.
//!
//! Every fallible operation in this crate returns a [`DiagramError`].
//! Errors are produced before any new diagram is built, so a failed
//! operation never leaves a partially constructed value behind.

use thiserror::Error;

use crate::cell::Cell;

/// A type alias for `Result<T, DiagramError>`.
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Errors raised by [`YoungDiagram`](crate::YoungDiagram) construction,
/// queries and transforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// A row is longer than the row above it.
    #[error(
        "Invalid partition: row {row} has length {length} but the row above has length {above}; partition must be non-increasing"
    )]
    InvalidPartition {
        row: usize,
        length: usize,
        above: usize,
    },

    /// A partition entry is zero.
    #[error("Invalid partition: row {row} has length 0; partition entries must be positive")]
    ZeroPart { row: usize },

    #[error("cell ({x}, {y}) is outside the diagram")]
    OutOfRange { x: usize, y: usize },

    #[error("cell {0} is not addable")]
    NotAddable(Cell),

    #[error("cell {0} is not removable")]
    NotRemovable(Cell),

    /// The operation has no defined result for a diagram without rows.
    #[error("{operation} is undefined for the empty diagram")]
    EmptyDiagram { operation: &'static str },
}

impl DiagramError {
    /// Returns `true` if this error reports a malformed partition.
    pub fn is_invalid_partition(&self) -> bool {
        matches!(
            self,
            DiagramError::InvalidPartition { .. } | DiagramError::ZeroPart { .. }
        )
    }
}
