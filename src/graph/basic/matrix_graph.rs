//! A dense adjacency-matrix graph.
//!
//! Edge presence is one `bool` cell per ordered pair in a row-major
//! [`DenseMatrix`]: row `u` holds the out-edges of `u`, column `v` holds the
//! in-edges of `v`. Undirected graphs keep the matrix symmetric.

use core::fmt;

use crate::collections::matrix::DenseMatrix;
use crate::error::Result;
use crate::graph::contract::{Direction, Graph};

/// An adjacency-matrix graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) | Sets one or two cells |
/// | `remove_edge` | \(O(1)\) | Clears one or two cells |
/// | `is_edge` | \(O(1)\) | Single cell lookup |
/// | `out_degree` | \(O(n)\) | Row scan |
/// | `in_degree` | \(O(n)\) | Column scan |
/// | `successors` | \(O(n)\) | Row scan, ascending |
/// | memory | \(O(n^2)\) | Independent of edge count |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrixGraph {
    matrix: DenseMatrix<bool>,
    direction: Direction,
}

impl AdjacencyMatrixGraph {
    /// The underlying `vertex_count x vertex_count` grid.
    pub fn as_matrix(&self) -> &DenseMatrix<bool> {
        &self.matrix
    }

    #[inline(always)]
    fn cell(&self, row: usize, col: usize) -> bool {
        self.matrix.get(row, col).copied().unwrap_or(false)
    }

    #[inline(always)]
    fn set_cell(&mut self, row: usize, col: usize, value: bool) {
        let cell = self.matrix.get_mut(row, col);
        debug_assert!(cell.is_some(), "cell ({row}, {col}) outside the adjacency grid");
        if let Some(cell) = cell {
            *cell = value;
        }
    }
}

/// Successors of one vertex: the set columns of its row, ascending.
pub struct MatrixSuccessors<'a> {
    row: core::iter::Enumerate<core::slice::Iter<'a, bool>>,
}

impl Iterator for MatrixSuccessors<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.row.find_map(|(col, &set)| set.then_some(col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.row.size_hint().1)
    }
}

impl Graph for AdjacencyMatrixGraph {
    type Successors<'a> = MatrixSuccessors<'a>;

    const ENGINE: &'static str = "matrix";

    /// # Panics
    /// Panics if `vertex_count * vertex_count` overflows `usize`.
    fn new(vertex_count: usize, direction: Direction) -> Self {
        Self {
            matrix: DenseMatrix::new(vertex_count, vertex_count),
            direction,
        }
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.matrix.rows()
    }

    #[inline]
    fn direction(&self) -> Direction {
        self.direction
    }

    fn add_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if self.is_self_loop(from, to) {
            return Ok(false);
        }

        let inserted = !self.cell(from, to);
        self.set_cell(from, to, true);
        if !self.is_directed() {
            self.set_cell(to, from, true);
        }
        Ok(inserted)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if self.is_self_loop(from, to) {
            return Ok(false);
        }

        if self.is_directed() {
            let removed = self.cell(from, to);
            self.set_cell(from, to, false);
            return Ok(removed);
        }

        // A half-set pair cannot arise through this API; clear both cells regardless.
        let removed = self.cell(from, to) || self.cell(to, from);
        self.set_cell(from, to, false);
        self.set_cell(to, from, false);
        Ok(removed)
    }

    fn is_edge(&self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(!self.is_self_loop(from, to) && self.cell(from, to))
    }

    fn successors(&self, vertex: usize) -> MatrixSuccessors<'_> {
        let row = self.matrix.row(vertex).unwrap_or(&[]);
        MatrixSuccessors {
            row: row.iter().enumerate(),
        }
    }

    fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.successors(vertex).count())
    }

    fn in_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.matrix.column(vertex).filter(|&&set| set).count())
    }

    fn out_degrees(&self) -> Vec<usize> {
        self.matrix
            .iter_rows()
            .map(|row| row.iter().filter(|&&set| set).count())
            .collect()
    }

    fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertex_count()];
        for row in self.matrix.iter_rows() {
            for (col, &set) in row.iter().enumerate() {
                if set {
                    degrees[col] += 1;
                }
            }
        }
        degrees
    }

    /// One line per row, cells printed as `0`/`1` separated by spaces.
    fn render(&self) -> String {
        let mut out = String::with_capacity(self.vertex_count() * self.vertex_count() * 2);
        for row in self.matrix.iter_rows() {
            for (col, &set) in row.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                out.push(if set { '1' } else { '0' });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for AdjacencyMatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::DirectedDegree;

    const CANONICAL: [[usize; 2]; 6] = [[0, 1], [0, 2], [1, 2], [1, 3], [2, 3], [3, 4]];

    fn canonical(direction: Direction) -> AdjacencyMatrixGraph {
        AdjacencyMatrixGraph::from_edges(5, CANONICAL, direction).unwrap()
    }

    #[test]
    fn matrix_graph_construction() {
        let graph = canonical(Direction::Undirected);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.direction(), Direction::Undirected);
        assert!(!graph.is_directed());
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.as_matrix().cols(), 5);
    }

    #[test]
    #[should_panic(expected = "Matrix dimensions overflow")]
    fn matrix_graph_rejects_unaddressable_vertex_count() {
        // n * n cells do not fit in usize.
        let _ = AdjacencyMatrixGraph::new(usize::MAX / 2, Direction::Directed);
    }

    #[test]
    fn matrix_graph_add_is_stored() {
        let mut graph = AdjacencyMatrixGraph::new(3, Direction::Directed);
        assert_eq!(graph.add_edge(0, 1), Ok(true));
        assert_eq!(graph.is_edge(0, 1), Ok(true));
        assert_eq!(graph.out_degree(0), Ok(1));
    }

    #[test]
    fn matrix_graph_undirected_is_symmetric() {
        let mut graph = AdjacencyMatrixGraph::new(3, Direction::Undirected);
        assert_eq!(graph.add_edge(0, 2), Ok(true));
        assert_eq!(graph.is_edge(2, 0), Ok(true));

        assert_eq!(graph.remove_edge(2, 0), Ok(true));
        assert_eq!(graph.is_edge(0, 2), Ok(false));
        assert_eq!(graph.is_edge(2, 0), Ok(false));
    }

    #[test]
    fn matrix_graph_directed_edges_are_independent() {
        let mut graph = AdjacencyMatrixGraph::new(3, Direction::Directed);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();

        assert_eq!(graph.remove_edge(0, 1), Ok(true));
        assert_eq!(graph.is_edge(0, 1), Ok(false));
        assert_eq!(graph.is_edge(1, 0), Ok(true));
        assert_eq!(graph.remove_edge(0, 1), Ok(false));
    }

    #[test]
    fn matrix_graph_self_loops_are_ignored() {
        let mut graph = AdjacencyMatrixGraph::new(2, Direction::Directed);
        assert_eq!(graph.add_edge(1, 1), Ok(false));
        assert_eq!(graph.is_edge(1, 1), Ok(false));
        assert_eq!(graph.remove_edge(1, 1), Ok(false));
        assert_eq!(graph.render(), "0 0\n0 0\n");
    }

    #[test]
    fn matrix_graph_add_is_idempotent() {
        let mut graph = AdjacencyMatrixGraph::new(3, Direction::Undirected);
        assert_eq!(graph.add_edge(0, 1), Ok(true));
        assert_eq!(graph.add_edge(0, 1), Ok(false));
        assert_eq!(graph.add_edge(1, 0), Ok(false));
        assert_eq!(graph.vertex_degree_undirected(0), Ok(1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn matrix_graph_bounds_are_checked() {
        let mut graph = AdjacencyMatrixGraph::new(3, Direction::Directed);
        let err = GraphError::VertexOutOfRange { vertex: 3, vertex_count: 3 };
        assert_eq!(graph.add_edge(0, 3), Err(err.clone()));
        assert_eq!(graph.remove_edge(3, 0), Err(err.clone()));
        assert_eq!(graph.is_edge(3, 3), Err(err.clone()));
        assert_eq!(graph.out_degree(3), Err(err.clone()));
        assert_eq!(graph.in_degree(3), Err(err.clone()));
        assert!(graph.neighbors(3).is_err());
        assert_eq!(graph.successors(3).count(), 0);
    }

    #[test]
    fn matrix_graph_degrees() {
        let mut graph = AdjacencyMatrixGraph::new(3, Direction::Directed);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(graph.out_degree(0), Ok(2));
        assert_eq!(graph.in_degree(2), Ok(2));
        assert_eq!(
            graph.directed_degree(1),
            Ok(DirectedDegree { incoming: 1, outgoing: 1 })
        );
        assert_eq!(graph.vertex_degree_directed(2), Ok(2));
        assert_eq!(graph.out_degrees(), vec![2, 1, 0]);
        assert_eq!(graph.in_degrees(), vec![0, 1, 2]);
        assert_eq!(graph.overall_vertex_degree_directed().totals(), vec![2, 2, 2]);
    }

    #[test]
    fn matrix_graph_successors_ascend() {
        let mut graph = AdjacencyMatrixGraph::new(5, Direction::Directed);
        for to in [4, 1, 3] {
            graph.add_edge(0, to).unwrap();
        }
        assert_eq!(graph.neighbors(0).unwrap().collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn matrix_graph_render() {
        let graph = AdjacencyMatrixGraph::from_edges(3, [[0usize, 1], [1, 2]], Direction::Directed).unwrap();
        assert_eq!(graph.render(), "0 1 0\n0 0 1\n0 0 0\n");
        assert_eq!(graph.to_string(), graph.render());
        assert_eq!(AdjacencyMatrixGraph::new(0, Direction::Directed).render(), "");
    }

    #[test]
    fn matrix_graph_traversal() {
        let graph = canonical(Direction::Undirected);
        assert_eq!(graph.traverse_breadth_first(0), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(graph.traverse_depth_first(0), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(graph.traverse_breadth_first(4), Ok(vec![4, 3, 1, 2, 0]));
    }
}
