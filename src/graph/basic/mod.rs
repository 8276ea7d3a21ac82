//! Basic graph implementations.
//!
//! Two interchangeable storage engines behind the same [`Graph`](super::Graph)
//! contract: a dense adjacency matrix and pooled singly-linked adjacency chains.

pub mod list_graph;
pub mod matrix_graph;

pub use list_graph::{AdjacencyListGraph, ListSuccessors};
pub use matrix_graph::{AdjacencyMatrixGraph, MatrixSuccessors};
