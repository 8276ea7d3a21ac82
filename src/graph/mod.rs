//! Graph storage engines and the algorithms layered over them.
//!
//! Graph implementations are organized into categories:
//! - `contract`: the [`Graph`] trait both engines implement
//! - `basic`: the adjacency-matrix and adjacency-list engines
//! - `traversal`: depth-first and breadth-first iterators
//! - `degree` / `report`: degree tables, statistics and opt-in diagnostics

pub mod basic;
pub mod contract;
pub mod degree;
pub mod report;
pub mod traversal;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use access::visited::VisitedSet;
pub use basic::{AdjacencyListGraph, AdjacencyMatrixGraph, ListSuccessors, MatrixSuccessors};
pub use contract::{Direction, Graph};
pub use degree::{DegreeTable, DirectedDegree, GraphStatistics};
pub use report::{log_degrees, GraphReport};
pub use traversal::{Bfs, Dfs};
