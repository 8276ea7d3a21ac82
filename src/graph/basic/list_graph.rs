//! A sparse adjacency-list graph built from singly-linked chains.
//!
//! Every vertex owns two chains: the vertices it points to (outgoing) and
//! the vertices pointing to it (incoming). Chain nodes for all vertices
//! share one [`NodePool`]; a node is a vertex id plus the pool index of the
//! next node. New nodes are linked after the chain's tail, so successors are
//! enumerated in insertion order.
//!
//! Keeping the incoming chain next to the outgoing one makes in-degree as
//! cheap as out-degree, so directed degree counts both directions.

use core::fmt;

use crate::alloc::pool::NodePool;
use crate::error::Result;
use crate::graph::contract::{Direction, Graph};

/// One link of an adjacency chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChainNode {
    vertex: usize,
    next: Option<usize>,
}

/// Head/tail of one singly-linked chain inside the shared pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Chain {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Chain {
    fn iter<'a>(&self, pool: &'a NodePool<ChainNode>) -> ListSuccessors<'a> {
        ListSuccessors {
            pool,
            cursor: self.head,
        }
    }

    fn contains(&self, pool: &NodePool<ChainNode>, vertex: usize) -> bool {
        self.iter(pool).any(|v| v == vertex)
    }

    /// Links a node for `vertex` after the current tail.
    fn push_back(&mut self, pool: &mut NodePool<ChainNode>, vertex: usize) {
        let idx = pool.alloc(ChainNode { vertex, next: None });
        match self.tail {
            Some(tail) => {
                if let Some(tail) = pool.get_mut(tail) {
                    tail.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Unlinks the first node carrying `vertex` and returns it to the pool.
    fn remove(&mut self, pool: &mut NodePool<ChainNode>, vertex: usize) -> bool {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(idx) = cursor {
            let Some(node) = pool.get(idx).copied() else {
                break;
            };

            if node.vertex == vertex {
                match prev {
                    Some(prev) => {
                        if let Some(prev) = pool.get_mut(prev) {
                            prev.next = node.next;
                        }
                    }
                    None => self.head = node.next,
                }
                if self.tail == Some(idx) {
                    self.tail = prev;
                }
                pool.take(idx);
                self.len -= 1;
                return true;
            }

            prev = Some(idx);
            cursor = node.next;
        }

        false
    }
}

/// Successors of one vertex: its outgoing chain, front to back.
pub struct ListSuccessors<'a> {
    pool: &'a NodePool<ChainNode>,
    cursor: Option<usize>,
}

impl Iterator for ListSuccessors<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let node = self.pool.get(self.cursor?)?;
        self.cursor = node.next;
        Some(node.vertex)
    }
}

/// An adjacency-list graph with pooled, singly-linked chains.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(\text{out-degree})\) | Duplicate check, then O(1) tail link |
/// | `remove_edge` | \(O(\text{out-degree} + \text{in-degree})\) | Walks both chains |
/// | `is_edge` | \(O(\text{out-degree})\) | Walks the outgoing chain |
/// | `out_degree` / `in_degree` | \(O(1)\) | Chain length |
/// | `successors` | \(O(1)\) | Lazily walks the chain |
/// | memory | \(O(n + m)\) | Two nodes per stored directed edge |
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph {
    pool: NodePool<ChainNode>,
    outgoing: Vec<Chain>,
    incoming: Vec<Chain>,
    direction: Direction,
}

impl AdjacencyListGraph {
    /// Number of chain nodes currently linked (two per stored directed edge).
    pub fn node_count(&self) -> usize {
        self.pool.len()
    }

    /// Vertices with an edge into `vertex`, in insertion order.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
    /// if `vertex` does not exist.
    pub fn predecessors(&self, vertex: usize) -> Result<ListSuccessors<'_>> {
        self.check_vertex(vertex)?;
        Ok(self.incoming[vertex].iter(&self.pool))
    }

    fn link(&mut self, from: usize, to: usize) -> bool {
        if self.outgoing[from].contains(&self.pool, to) {
            return false;
        }
        self.outgoing[from].push_back(&mut self.pool, to);
        self.incoming[to].push_back(&mut self.pool, from);
        true
    }

    fn unlink(&mut self, from: usize, to: usize) -> bool {
        if !self.outgoing[from].remove(&mut self.pool, to) {
            return false;
        }
        self.incoming[to].remove(&mut self.pool, from);
        true
    }
}

impl Graph for AdjacencyListGraph {
    type Successors<'a> = ListSuccessors<'a>;

    const ENGINE: &'static str = "list";

    fn new(vertex_count: usize, direction: Direction) -> Self {
        Self {
            pool: NodePool::new(),
            outgoing: vec![Chain::default(); vertex_count],
            incoming: vec![Chain::default(); vertex_count],
            direction,
        }
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
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

        let inserted = self.link(from, to);
        if !self.is_directed() {
            self.link(to, from);
        }
        Ok(inserted)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if self.is_self_loop(from, to) {
            return Ok(false);
        }

        let mut removed = self.unlink(from, to);
        if !self.is_directed() {
            removed |= self.unlink(to, from);
        }
        Ok(removed)
    }

    fn is_edge(&self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(!self.is_self_loop(from, to) && self.outgoing[from].contains(&self.pool, to))
    }

    fn successors(&self, vertex: usize) -> ListSuccessors<'_> {
        ListSuccessors {
            pool: &self.pool,
            cursor: self.outgoing.get(vertex).and_then(|chain| chain.head),
        }
    }

    fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.outgoing[vertex].len)
    }

    fn in_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.incoming[vertex].len)
    }

    fn out_degrees(&self) -> Vec<usize> {
        self.outgoing.iter().map(|chain| chain.len).collect()
    }

    fn in_degrees(&self) -> Vec<usize> {
        self.incoming.iter().map(|chain| chain.len).collect()
    }

    /// One line per vertex: `v -> n1 -> n2 -> null`.
    fn render(&self) -> String {
        let mut out = String::new();
        for (vertex, chain) in self.outgoing.iter().enumerate() {
            out.push_str(&vertex.to_string());
            for next in chain.iter(&self.pool) {
                out.push_str(" -> ");
                out.push_str(&next.to_string());
            }
            out.push_str(" -> null\n");
        }
        out
    }
}

impl fmt::Display for AdjacencyListGraph {
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

    fn canonical(direction: Direction) -> AdjacencyListGraph {
        AdjacencyListGraph::from_edges(5, CANONICAL, direction).unwrap()
    }

    #[test]
    fn chain_links_in_insertion_order() {
        let mut pool = NodePool::new();
        let mut chain = Chain::default();
        for v in [3, 1, 2] {
            chain.push_back(&mut pool, v);
        }
        assert_eq!(chain.iter(&pool).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(chain.len, 3);
        assert!(chain.contains(&pool, 1));
        assert!(!chain.contains(&pool, 0));
    }

    #[test]
    fn chain_remove_head_middle_tail() {
        let mut pool = NodePool::new();
        let mut chain = Chain::default();
        for v in 0..5 {
            chain.push_back(&mut pool, v);
        }

        assert!(chain.remove(&mut pool, 0));
        assert!(chain.remove(&mut pool, 2));
        assert!(chain.remove(&mut pool, 4));
        assert!(!chain.remove(&mut pool, 4));
        assert_eq!(chain.iter(&pool).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(chain.len, 2);
        assert_eq!(pool.len(), 2);

        // Tail was repaired: appends land after 3.
        chain.push_back(&mut pool, 9);
        assert_eq!(chain.iter(&pool).collect::<Vec<_>>(), vec![1, 3, 9]);
    }

    #[test]
    fn chain_remove_last_node_empties_chain() {
        let mut pool = NodePool::new();
        let mut chain = Chain::default();
        chain.push_back(&mut pool, 7);
        assert!(chain.remove(&mut pool, 7));
        assert_eq!(chain, Chain::default());

        chain.push_back(&mut pool, 8);
        assert_eq!(chain.iter(&pool).collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn list_graph_construction() {
        let graph = canonical(Direction::Undirected);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        // Undirected: both directions, each with an outgoing and an incoming node.
        assert_eq!(graph.node_count(), 24);
    }

    #[test]
    fn list_graph_undirected_is_symmetric() {
        let mut graph = AdjacencyListGraph::new(4, Direction::Undirected);
        assert_eq!(graph.add_edge(3, 1), Ok(true));
        assert_eq!(graph.is_edge(1, 3), Ok(true));
        assert_eq!(graph.remove_edge(1, 3), Ok(true));
        assert_eq!(graph.is_edge(3, 1), Ok(false));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn list_graph_add_is_idempotent() {
        let mut graph = AdjacencyListGraph::new(3, Direction::Directed);
        assert_eq!(graph.add_edge(0, 1), Ok(true));
        assert_eq!(graph.add_edge(0, 1), Ok(false));
        assert_eq!(graph.out_degree(0), Ok(1));
        assert_eq!(graph.render(), "0 -> 1 -> null\n1 -> null\n2 -> null\n");
    }

    #[test]
    fn list_graph_directed_degree_counts_incoming() {
        let mut graph = AdjacencyListGraph::new(3, Direction::Directed);
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 0).unwrap();

        assert_eq!(
            graph.directed_degree(2),
            Ok(DirectedDegree { incoming: 2, outgoing: 1 })
        );
        assert_eq!(graph.vertex_degree_directed(2), Ok(3));
        assert_eq!(graph.predecessors(2).unwrap().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(graph.in_degrees(), vec![1, 0, 2]);
    }

    #[test]
    fn list_graph_remove_missing_edge_is_noop() {
        let mut graph = canonical(Direction::Directed);
        let before = graph.render();
        assert_eq!(graph.remove_edge(4, 3), Ok(false));
        assert_eq!(graph.remove_edge(2, 2), Ok(false));
        assert_eq!(graph.render(), before);
    }

    #[test]
    fn list_graph_bounds_are_checked() {
        let mut graph = AdjacencyListGraph::new(2, Direction::Undirected);
        let err = GraphError::VertexOutOfRange { vertex: 5, vertex_count: 2 };
        assert_eq!(graph.add_edge(5, 0), Err(err.clone()));
        assert_eq!(graph.remove_edge(0, 5), Err(err.clone()));
        assert_eq!(graph.is_edge(5, 5), Err(err.clone()));
        assert_eq!(graph.vertex_degree_undirected(5), Err(err.clone()));
        assert!(graph.predecessors(5).is_err());
        assert_eq!(graph.successors(5).count(), 0);
    }

    #[test]
    fn list_graph_pool_slots_are_reused() {
        let mut graph = AdjacencyListGraph::new(3, Direction::Directed);
        graph.add_edge(0, 1).unwrap();
        graph.remove_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.pool.slots(), 2);
    }

    #[test]
    fn list_graph_render() {
        let graph = canonical(Direction::Undirected);
        assert_eq!(
            graph.render(),
            "0 -> 1 -> 2 -> null\n\
             1 -> 0 -> 2 -> 3 -> null\n\
             2 -> 0 -> 1 -> 3 -> null\n\
             3 -> 1 -> 2 -> 4 -> null\n\
             4 -> 3 -> null\n"
        );
        assert_eq!(format!("{graph}"), graph.render());
    }

    #[test]
    fn list_graph_traversal() {
        let graph = canonical(Direction::Undirected);
        assert_eq!(graph.traverse_breadth_first(0), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(graph.traverse_depth_first(0), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(graph.traverse_depth_first(4), Ok(vec![4, 3, 1, 0, 2]));
    }
}
