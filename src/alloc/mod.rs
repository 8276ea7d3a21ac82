//! Storage for linked structures.
//!
//! - `pool`: index-addressed node pool with free-list reuse, shared by every
//!   adjacency chain of an [`AdjacencyListGraph`](crate::graph::AdjacencyListGraph)

pub mod pool;

pub use pool::NodePool;
