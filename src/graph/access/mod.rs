//! Internal graph accessors and low-level building blocks.
//!
//! Graph implementations share traversal scratch state (visited markers)
//! through this module instead of each engine rolling its own.

pub(crate) mod visited;
