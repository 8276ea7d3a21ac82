//! The capability set every storage engine implements.
//!
//! Engines supply storage primitives (edge mutation, membership, successor
//! enumeration, degree counts, rendering). Everything built on top of them
//! (edge-list construction, degree tables, statistics, traversals) is a
//! provided method, so both engines share one set of semantics:
//!
//! - vertices are `0..vertex_count`; any other vertex argument fails with
//!   [`GraphError::VertexOutOfRange`] before a self-loop is even considered;
//! - self-loops are rejected as no-ops (`Ok(false)`), never stored;
//! - an ordered pair is stored at most once, so `add_edge` is idempotent.

use serde::{Deserialize, Serialize};

use super::access::visited::VisitedSet;
use super::degree::{DegreeTable, DirectedDegree, GraphStatistics};
use super::traversal::{Bfs, Dfs};
use crate::error::{GraphError, Result};

/// Whether edges are one-way or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `(a, b)` and `(b, a)` are independent edges.
    Directed,
    /// Adding or removing `(a, b)` also adds or removes `(b, a)`.
    Undirected,
}

impl Direction {
    /// Returns true for [`Direction::Directed`].
    #[inline(always)]
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl From<bool> for Direction {
    /// `true` maps to [`Direction::Directed`].
    fn from(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        })
    }
}

/// A graph over the vertices `0..vertex_count` with unweighted edges.
pub trait Graph {
    /// Iterator over the successors of one vertex, in the engine's natural order.
    type Successors<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Short engine name used in reports.
    const ENGINE: &'static str;

    /// Creates a graph with `vertex_count` vertices and no edges.
    fn new(vertex_count: usize, direction: Direction) -> Self
    where
        Self: Sized;

    /// Number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Directedness, fixed at construction.
    fn direction(&self) -> Direction;

    /// Inserts the edge `from -> to` (and `to -> from` when undirected).
    ///
    /// Returns `Ok(false)` for a self-loop or an edge that is already present.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if either vertex does not exist.
    fn add_edge(&mut self, from: usize, to: usize) -> Result<bool>;

    /// Deletes the edge `from -> to` (and `to -> from` when undirected).
    ///
    /// Returns `Ok(false)` for a self-loop or an edge that is not present.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if either vertex does not exist.
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool>;

    /// Returns whether the edge `from -> to` exists. Always `false` for `from == to`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if either vertex does not exist.
    fn is_edge(&self, from: usize, to: usize) -> Result<bool>;

    /// Successors of `vertex` in natural order. An out-of-range vertex has none.
    ///
    /// This is the enumeration primitive traversals run on; prefer
    /// [`neighbors`](Self::neighbors) for caller-supplied vertices.
    fn successors(&self, vertex: usize) -> Self::Successors<'_>;

    /// Number of edges `vertex -> u`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `vertex` does not exist.
    fn out_degree(&self, vertex: usize) -> Result<usize>;

    /// Number of edges `u -> vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `vertex` does not exist.
    fn in_degree(&self, vertex: usize) -> Result<usize>;

    /// Out-degree of every vertex, indexed by vertex.
    fn out_degrees(&self) -> Vec<usize>;

    /// In-degree of every vertex, indexed by vertex.
    fn in_degrees(&self) -> Vec<usize>;

    /// Deterministic dump of the internal representation. Debug aid only.
    fn render(&self) -> String;

    /// Builds a graph and applies `edges` in order.
    ///
    /// Every entry is validated before the first edge is applied.
    ///
    /// # Errors
    /// - [`GraphError::InvalidEdge`] for an entry without exactly two vertices.
    /// - [`GraphError::VertexOutOfRange`] for an endpoint outside `0..vertex_count`.
    fn from_edges<I, E>(vertex_count: usize, edges: I, direction: Direction) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = E>,
        E: AsRef<[usize]>,
    {
        let mut pairs = Vec::new();
        for entry in edges {
            let &[from, to] = entry.as_ref() else {
                return Err(GraphError::InvalidEdge {
                    entry: entry.as_ref().to_vec(),
                });
            };
            for vertex in [from, to] {
                if vertex >= vertex_count {
                    return Err(GraphError::out_of_range(vertex, vertex_count));
                }
            }
            pairs.push((from, to));
        }

        let mut graph = Self::new(vertex_count, direction);
        for (from, to) in pairs {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Returns true if the graph is directed.
    #[inline]
    fn is_directed(&self) -> bool {
        self.direction().is_directed()
    }

    /// Fails unless `vertex` is in `0..vertex_count`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `vertex` does not exist.
    #[inline]
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.vertex_count()))
        }
    }

    /// Returns true if `(from, to)` would be a self-loop.
    #[inline]
    fn is_self_loop(&self, from: usize, to: usize) -> bool {
        from == to
    }

    /// Successors of a caller-supplied vertex.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `vertex` does not exist.
    fn neighbors(&self, vertex: usize) -> Result<Self::Successors<'_>> {
        self.check_vertex(vertex)?;
        Ok(self.successors(vertex))
    }

    /// Number of distinct `u` with `is_edge(vertex, u)`.
    ///
    /// For an undirected graph this is the number of incident edges.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `vertex` does not exist.
    fn vertex_degree_undirected(&self, vertex: usize) -> Result<usize> {
        self.out_degree(vertex)
    }

    /// Undirected degree of every vertex.
    fn overall_vertex_degree_undirected(&self) -> DegreeTable<usize> {
        DegreeTable::from_vec(self.out_degrees())
    }

    /// Incoming/outgoing split for `vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `vertex` does not exist.
    fn directed_degree(&self, vertex: usize) -> Result<DirectedDegree> {
        Ok(DirectedDegree {
            incoming: self.in_degree(vertex)?,
            outgoing: self.out_degree(vertex)?,
        })
    }

    /// Incoming plus outgoing edge count for `vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `vertex` does not exist.
    fn vertex_degree_directed(&self, vertex: usize) -> Result<usize> {
        self.directed_degree(vertex).map(DirectedDegree::total)
    }

    /// Incoming/outgoing split for every vertex.
    fn overall_vertex_degree_directed(&self) -> DegreeTable<DirectedDegree> {
        let entries = self
            .in_degrees()
            .into_iter()
            .zip(self.out_degrees())
            .map(|(incoming, outgoing)| DirectedDegree { incoming, outgoing })
            .collect();
        DegreeTable::from_vec(entries)
    }

    /// Number of edges. An undirected edge counts once.
    fn edge_count(&self) -> usize {
        let stored: usize = self.out_degrees().iter().sum();
        if self.is_directed() {
            stored
        } else {
            stored / 2
        }
    }

    /// Computes basic graph statistics.
    fn statistics(&self) -> GraphStatistics {
        GraphStatistics::from_out_degrees(self.out_degrees(), self.edge_count())
    }

    /// Lazy depth-first traversal from `start`, with its own visited set.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `start` does not exist.
    fn dfs_iter(&self, start: usize) -> Result<Dfs<'_, Self>>
    where
        Self: Sized,
    {
        self.check_vertex(start)?;
        Ok(Dfs::new(self, start, VisitedSet::new(self.vertex_count())))
    }

    /// Lazy breadth-first traversal from `start`, with its own visited set.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `start` does not exist.
    fn bfs_iter(&self, start: usize) -> Result<Bfs<'_, Self>>
    where
        Self: Sized,
    {
        self.check_vertex(start)?;
        Ok(Bfs::new(self, start, VisitedSet::new(self.vertex_count())))
    }

    /// Depth-first discovery order from `start`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `start` does not exist.
    fn traverse_depth_first(&self, start: usize) -> Result<Vec<usize>>
    where
        Self: Sized,
    {
        Ok(self.dfs_iter(start)?.collect())
    }

    /// Depth-first discovery order from `start`, marking `visited`.
    ///
    /// Vertices already marked in `visited` are skipped, except `start`
    /// itself, which is always reported first.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if `start` does not exist.
    /// - [`GraphError::VisitedSizeMismatch`] if `visited` is not sized to the graph.
    fn dfs_with(&self, start: usize, visited: &mut VisitedSet) -> Result<Vec<usize>>
    where
        Self: Sized,
    {
        self.check_vertex(start)?;
        check_visited(self.vertex_count(), visited)?;
        Ok(Dfs::new(self, start, visited).collect())
    }

    /// Breadth-first discovery order from `start`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `start` does not exist.
    fn traverse_breadth_first(&self, start: usize) -> Result<Vec<usize>>
    where
        Self: Sized,
    {
        Ok(self.bfs_iter(start)?.collect())
    }

    /// Breadth-first discovery order from `start`, marking `visited`.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if `start` does not exist.
    /// - [`GraphError::VisitedSizeMismatch`] if `visited` is not sized to the graph.
    fn bfs_with(&self, start: usize, visited: &mut VisitedSet) -> Result<Vec<usize>>
    where
        Self: Sized,
    {
        self.check_vertex(start)?;
        check_visited(self.vertex_count(), visited)?;
        Ok(Bfs::new(self, start, visited).collect())
    }
}

fn check_visited(vertex_count: usize, visited: &VisitedSet) -> Result<()> {
    if visited.len() == vertex_count {
        Ok(())
    } else {
        Err(GraphError::VisitedSizeMismatch {
            expected: vertex_count,
            actual: visited.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_flag() {
        assert_eq!(Direction::from(true), Direction::Directed);
        assert_eq!(Direction::from(false), Direction::Undirected);
        assert!(Direction::Directed.is_directed());
        assert!(!Direction::Undirected.is_directed());
    }

    #[test]
    fn direction_display_and_serde_agree() {
        for direction in [Direction::Directed, Direction::Undirected] {
            let json = serde_json::to_string(&direction).unwrap();
            assert_eq!(json, format!("\"{direction}\""));
            let back: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(back, direction);
        }
    }

    #[test]
    fn visited_size_is_checked() {
        assert!(check_visited(3, &VisitedSet::new(3)).is_ok());
        assert_eq!(
            check_visited(3, &VisitedSet::new(4)),
            Err(GraphError::VisitedSizeMismatch { expected: 3, actual: 4 })
        );
    }
}
