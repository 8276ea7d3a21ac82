//! Degree values and whole-graph summaries.

use serde::{Deserialize, Serialize};

/// Incoming/outgoing split of a vertex's degree in a directed graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedDegree {
    /// Edges `u -> vertex`.
    pub incoming: usize,
    /// Edges `vertex -> u`.
    pub outgoing: usize,
}

impl DirectedDegree {
    /// `incoming + outgoing`.
    #[inline]
    pub fn total(self) -> usize {
        self.incoming + self.outgoing
    }
}

/// A per-vertex table, indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DegreeTable<T> {
    entries: Vec<T>,
}

impl<T> DegreeTable<T> {
    pub(crate) fn from_vec(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// Entry for `vertex`, if it exists.
    #[inline]
    pub fn get(&self, vertex: usize) -> Option<&T> {
        self.entries.get(vertex)
    }

    /// Number of vertices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for a graph without vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(vertex, entry)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.entries.iter().enumerate()
    }

    /// Entries as a slice indexed by vertex.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Unwraps the table into its vertex-indexed vector.
    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }
}

impl DegreeTable<DirectedDegree> {
    /// Total (`incoming + outgoing`) degree per vertex.
    pub fn totals(&self) -> Vec<usize> {
        self.entries.iter().map(|d| d.total()).collect()
    }
}

impl<T> core::ops::Index<usize> for DegreeTable<T> {
    type Output = T;

    fn index(&self, vertex: usize) -> &T {
        &self.entries[vertex]
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of stored edges; an undirected edge counts once.
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree.
    pub average_degree: f64,
}

impl GraphStatistics {
    /// Summarizes a vertex-indexed list of out-degrees.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn from_out_degrees(mut degrees: Vec<usize>, edge_count: usize) -> Self {
        let vertex_count = degrees.len();
        degrees.sort_unstable();

        let min_degree = degrees.first().copied().unwrap_or(0);
        let max_degree = degrees.last().copied().unwrap_or(0);
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };
        let average_degree = if vertex_count == 0 {
            0.0
        } else {
            degrees.iter().sum::<usize>() as f64 / vertex_count as f64
        };

        Self {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree,
        }
    }
}
