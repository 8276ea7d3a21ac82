//! Depth-first and breadth-first traversals over any [`Graph`].
//!
//! Both traversals are iterators yielding vertices in discovery order and
//! run on the engine's [`successors`](Graph::successors) primitive, so they
//! visit neighbors in the engine's natural order (ascending for the matrix,
//! insertion order for the list).
//!
//! The visited state is either owned by the iterator or borrowed from the
//! caller (`S = &mut VisitedSet`); borrowed sets stay marked afterwards.

use core::borrow::BorrowMut;

use super::access::visited::VisitedSet;
use super::contract::Graph;

/// Depth-first pre-order traversal.
///
/// Equivalent to the recursive formulation (visit a vertex, then recurse
/// into each unvisited successor in order) but driven by an explicit stack of
/// successor iterators, so path length is bounded by memory rather than by
/// the call stack.
pub struct Dfs<'a, G: Graph + 'a, S = VisitedSet> {
    graph: &'a G,
    visited: S,
    stack: Vec<G::Successors<'a>>,
    pending: Option<usize>,
}

impl<'a, G, S> Dfs<'a, G, S>
where
    G: Graph + 'a,
    S: BorrowMut<VisitedSet>,
{
    /// Starts a traversal at `start`.
    ///
    /// `start` is always yielded first, even if `visited` already marks it.
    /// An out-of-range `start` yields nothing.
    pub fn new(graph: &'a G, start: usize, mut visited: S) -> Self {
        let mut stack = Vec::new();
        let pending = if start < graph.vertex_count() {
            visited.borrow_mut().try_visit(start);
            stack.push(graph.successors(start));
            Some(start)
        } else {
            None
        };

        Self {
            graph,
            visited,
            stack,
            pending,
        }
    }

    /// The visited markers accumulated so far.
    pub fn visited(&self) -> &VisitedSet {
        self.visited.borrow()
    }
}

impl<'a, G, S> Iterator for Dfs<'a, G, S>
where
    G: Graph + 'a,
    S: BorrowMut<VisitedSet>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if let Some(start) = self.pending.take() {
            trace_event!(trace, vertex = start, "dfs discovered");
            return Some(start);
        }

        let graph = self.graph;
        while let Some(successors) = self.stack.last_mut() {
            match successors.next() {
                Some(v) => {
                    if self.visited.borrow_mut().try_visit(v) {
                        self.stack.push(graph.successors(v));
                        trace_event!(trace, vertex = v, "dfs discovered");
                        return Some(v);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Breadth-first traversal.
///
/// The queue is one buffer with room for `vertex_count` entries, read
/// through a cursor. Vertices are marked visited when enqueued, not when
/// dequeued, so no vertex is enqueued twice and the buffer never grows past
/// its initial capacity. Once exhausted, the buffer holds the discovery order.
pub struct Bfs<'a, G: Graph + 'a, S = VisitedSet> {
    graph: &'a G,
    visited: S,
    queue: Vec<usize>,
    first: usize,
}

impl<'a, G, S> Bfs<'a, G, S>
where
    G: Graph + 'a,
    S: BorrowMut<VisitedSet>,
{
    /// Starts a traversal at `start`.
    ///
    /// `start` is always yielded first, even if `visited` already marks it.
    /// An out-of-range `start` yields nothing.
    pub fn new(graph: &'a G, start: usize, mut visited: S) -> Self {
        let mut queue = Vec::with_capacity(graph.vertex_count());
        if start < graph.vertex_count() {
            visited.borrow_mut().try_visit(start);
            queue.push(start);
        }

        Self {
            graph,
            visited,
            queue,
            first: 0,
        }
    }

    /// The visited markers accumulated so far.
    pub fn visited(&self) -> &VisitedSet {
        self.visited.borrow()
    }

    /// Runs the traversal to completion and returns the queue buffer,
    /// which is the full discovery order.
    pub fn into_queue(mut self) -> Vec<usize> {
        while self.next().is_some() {}
        self.queue
    }
}

impl<'a, G, S> Iterator for Bfs<'a, G, S>
where
    G: Graph + 'a,
    S: BorrowMut<VisitedSet>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let &vertex = self.queue.get(self.first)?;
        self.first += 1;

        let visited = self.visited.borrow_mut();
        for v in self.graph.successors(vertex) {
            if visited.try_visit(v) {
                self.queue.push(v);
            }
        }

        trace_event!(trace, vertex, "bfs dequeued");
        Some(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Direction};

    fn chain<G: Graph>(n: usize) -> G {
        let edges: Vec<[usize; 2]> = (1..n).map(|v| [v - 1, v]).collect();
        G::from_edges(n, edges, Direction::Directed).unwrap()
    }

    #[test]
    fn dfs_on_long_chain_does_not_recurse() {
        let g: AdjacencyListGraph = chain(50_000);
        let order: Vec<usize> = Dfs::new(&g, 0, VisitedSet::new(g.vertex_count())).collect();
        assert_eq!(order.len(), 50_000);
        assert_eq!(order.last(), Some(&49_999));
    }

    #[test]
    fn dfs_is_preorder_in_successor_order() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
        let g = AdjacencyMatrixGraph::from_edges(
            4,
            [[0usize, 1], [0, 2], [1, 3], [2, 3]],
            Direction::Directed,
        )
        .unwrap();
        let order: Vec<usize> = Dfs::new(&g, 0, VisitedSet::new(4)).collect();
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn bfs_queue_never_outgrows_vertex_count() {
        let g = AdjacencyMatrixGraph::from_edges(
            4,
            [[0usize, 1], [0, 2], [0, 3], [1, 2], [2, 3], [3, 1]],
            Direction::Undirected,
        )
        .unwrap();
        let bfs = Bfs::new(&g, 0, VisitedSet::new(4));
        let queue = bfs.into_queue();
        assert_eq!(queue, vec![0, 1, 2, 3]);
        assert_eq!(queue.capacity(), 4);
    }

    #[test]
    fn borrowed_visited_set_stays_marked() {
        let g: AdjacencyMatrixGraph = chain(3);
        let mut visited = VisitedSet::new(3);
        let order: Vec<usize> = Bfs::new(&g, 1, &mut visited).collect();
        assert_eq!(order, vec![1, 2]);
        assert!(visited.is_visited(1) && visited.is_visited(2));
        assert!(!visited.is_visited(0));

        // Reusing without clearing skips what the first run saw.
        let order: Vec<usize> = Dfs::new(&g, 0, &mut visited).collect();
        assert_eq!(order, vec![0]);
    }

    #[test]
    fn out_of_range_start_yields_nothing() {
        let g: AdjacencyListGraph = chain(3);
        assert_eq!(Dfs::new(&g, 3, VisitedSet::new(3)).count(), 0);
        assert_eq!(Bfs::new(&g, 7, VisitedSet::new(3)).count(), 0);
    }

    #[test]
    fn iterators_expose_visited_progress() {
        let g: AdjacencyListGraph = chain(4);
        let mut dfs = Dfs::new(&g, 0, VisitedSet::new(4));
        assert_eq!(dfs.next(), Some(0));
        assert_eq!(dfs.visited().marked(), 1);
        assert_eq!(dfs.next(), Some(1));
        assert_eq!(dfs.visited().marked(), 2);

        let mut bfs = Bfs::new(&g, 0, VisitedSet::new(4));
        assert_eq!(bfs.next(), Some(0));
        // Marked on enqueue: 1 is discovered while 0 is dequeued.
        assert_eq!(bfs.visited().marked(), 2);
    }
}
