//! Error taxonomy shared by every graph engine.
//!
//! Caller mistakes surface as [`GraphError`] and are never retried or
//! swallowed. Benign requests (self-loops, removing an absent edge, re-adding
//! a present edge) are not errors; the mutating operations report them by
//! returning `Ok(false)`.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Errors raised by graph construction, mutation, queries and traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge-list entry did not have exactly two endpoints.
    #[error("invalid edge {entry:?}: expected exactly two vertices")]
    InvalidEdge {
        /// The offending entry, verbatim.
        entry: Vec<usize>,
    },

    /// A vertex argument fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} does not exist (vertex count is {vertex_count})")]
    VertexOutOfRange {
        /// The rejected vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// A caller-supplied visited set does not match the graph's vertex count.
    #[error("visited set holds {actual} vertices, graph has {expected}")]
    VisitedSizeMismatch {
        /// The graph's vertex count.
        expected: usize,
        /// The visited set's length.
        actual: usize,
    },
}

impl GraphError {
    /// Shorthand for [`GraphError::VertexOutOfRange`].
    #[inline]
    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::VertexOutOfRange { vertex, vertex_count }
    }
}
