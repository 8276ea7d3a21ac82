//! Collections backing the graph engines.
//!
//! - `matrix`: dense row-major 2D storage for the adjacency-matrix engine

pub mod matrix;

pub use matrix::DenseMatrix;
