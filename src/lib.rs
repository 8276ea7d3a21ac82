//! # `adjgraph` - Interchangeable Graph Storage Engines
//!
//! Small in-memory graphs over the vertices `0..vertex_count`, with two
//! storage engines behind one [`Graph`] contract:
//!
//! - [`AdjacencyMatrixGraph`]: a dense `n x n` boolean grid. O(1) edge
//!   tests and toggles, O(n) degree and neighbor scans.
//! - [`AdjacencyListGraph`]: per-vertex singly-linked chains whose nodes live
//!   in one shared pool. Memory proportional to the edge count, O(degree)
//!   edge operations.
//!
//! Both engines share the same semantics because everything above the
//! storage primitives is defined once on the trait.
//!
//! ## Semantics
//!
//! ### Vertices
//! - Vertices are `0..vertex_count`, fixed at construction.
//! - Every operation taking a vertex rejects anything outside that range with
//!   [`GraphError::VertexOutOfRange`].
//!
//! ### Edges
//! - Unweighted, stored at most once per ordered pair: re-adding is a no-op.
//! - Self-loops are rejected as no-ops by both `add_edge` and `remove_edge`.
//! - Undirected graphs mirror every mutation, so `is_edge(a, b) == is_edge(b, a)`.
//! - Directed graphs keep both directions independent.
//!
//! ### Degrees
//! - Undirected degree: number of distinct `u` with `is_edge(v, u)`.
//! - Directed degree: incoming plus outgoing; both engines track both sides.
//!
//! ### Traversal
//! - [`Dfs`] yields pre-order, [`Bfs`] yields discovery order; both follow the
//!   engine's successor order (ascending for the matrix, insertion order for
//!   the list).
//! - Only the component reachable from the start vertex is visited.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from traversals and [`log_degrees`].
//! - `cli`: build the `graph-demo` binary.
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::{AdjacencyListGraph, AdjacencyMatrixGraph, Direction, Graph};
//!
//! let edges: [[usize; 2]; 6] = [[0, 1], [0, 2], [1, 2], [1, 3], [2, 3], [3, 4]];
//!
//! let matrix = AdjacencyMatrixGraph::from_edges(5, edges, Direction::Undirected)?;
//! let list = AdjacencyListGraph::from_edges(5, edges, Direction::Undirected)?;
//!
//! assert_eq!(matrix.traverse_breadth_first(0)?, vec![0, 1, 2, 3, 4]);
//! assert_eq!(list.traverse_depth_first(0)?, vec![0, 1, 2, 3, 4]);
//! assert_eq!(matrix.vertex_degree_undirected(3)?, list.vertex_degree_undirected(3)?);
//! # Ok::<(), adjgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` event at the given level when the `tracing` feature is on.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod alloc;
pub mod collections;
pub mod error;
pub mod graph;

pub use alloc::NodePool;
pub use collections::DenseMatrix;
pub use error::{GraphError, Result};
pub use graph::{
    log_degrees, AdjacencyListGraph, AdjacencyMatrixGraph, Bfs, DegreeTable, Dfs, Direction,
    DirectedDegree, Graph, GraphReport, GraphStatistics, VisitedSet,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Directedness is a one-byte tag.
    assert!(mem::size_of::<Direction>() == 1);

    // A degree split is two counters, no padding.
    assert!(mem::size_of::<DirectedDegree>() == 2 * mem::size_of::<usize>());
};
