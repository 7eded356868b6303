//! Error types for task graph operations.

use thiserror::Error;

/// Result type for task graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during task graph operations.
///
/// An unreachable sink is not an error: queries report it through
/// [`Path::is_reachable`](crate::Path::is_reachable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Storage for a graph, matrix or path could not be obtained.
    #[error("Failed to allocate {what} for {requested} entries")]
    Allocation {
        /// What was being allocated.
        what: &'static str,
        /// Number of entries requested.
        requested: usize,
    },

    /// An edge references a vertex outside the graph, or uses the sink as its source.
    #[error("Invalid edge v{from} -> v{to} in a graph of {vertex_count} vertices")]
    InvalidVertex {
        /// Requested source vertex.
        from: usize,
        /// Requested target vertex.
        to: usize,
        /// Number of vertex slots in the graph, sink included.
        vertex_count: usize,
    },

    /// A query or lookup references a vertex outside the graph.
    #[error("Vertex v{vertex} does not exist in a graph of {vertex_count} vertices")]
    InvalidQuery {
        /// Requested vertex.
        vertex: usize,
        /// Number of vertex slots in the graph, sink included.
        vertex_count: usize,
    },

    /// A failure matrix cell lies outside the matrix.
    #[error("Cell [{row}][{col}] is outside a {height}x{width} failure matrix")]
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Rows in the matrix.
        height: usize,
        /// Columns in the matrix.
        width: usize,
    },

    /// Edge weights must be strictly positive.
    #[error("Edge v{from} -> v{to} must have a positive weight")]
    InvalidWeight {
        /// Requested source vertex.
        from: usize,
        /// Requested target vertex.
        to: usize,
    },

    /// A generator configuration cannot be honored.
    #[error("Invalid generator configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// A structural invariant of the graph does not hold.
    #[error("Graph invariant violated: {message}")]
    InvariantViolated {
        /// Human-readable description of the violation.
        message: String,
    },
}

impl Error {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invariant violation error.
    #[must_use]
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolated {
            message: message.into(),
        }
    }
}

/// Allocate a vector of `len` copies of `value`, reporting failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T, what: &'static str) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::Allocation {
            what,
            requested: len,
        })?;
    buffer.resize(len, value);
    Ok(buffer)
}
