//! Error types shared by the collections and graph layers.

use thiserror::Error;

/// Every failure the crate reports.
///
/// All errors are raised before any mutation takes place, so a caller that
/// receives one observes the structure exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index is not below the current vertex count.
    #[error("vertex index {index} out of range for graph with {count} vertices")]
    VertexOutOfRange {
        /// The offending index.
        index: usize,
        /// Vertex count at the time of the call.
        count: usize,
    },

    /// A vertex value was looked up but is not part of the graph.
    #[error("vertex does not exist")]
    VertexNotFound,

    /// An element was read or removed from an empty ring, queue or stack.
    #[error("{operation} on empty {container}")]
    Empty {
        /// Which adapter was accessed (`"ring"`, `"queue"`, `"stack"`).
        container: &'static str,
        /// The rejected operation.
        operation: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn empty(container: &'static str, operation: &'static str) -> Self {
        Self::Empty {
            container,
            operation,
        }
    }
}
