//! Opt-in diagnostics for any [`Graph`].
//!
//! Nothing in the engines prints. Callers that want to look at a graph
//! either capture a [`GraphReport`] (human-readable via `Display`, or JSON)
//! or call [`log_degrees`], which emits one `tracing` event per vertex when
//! the `tracing` feature is enabled.

use core::fmt;

use serde::Serialize;

use super::contract::{Direction, Graph};
use super::degree::{DegreeTable, DirectedDegree, GraphStatistics};

/// A point-in-time snapshot of a graph's shape and degrees.
///
/// A report is write-only: it carries the debug rendering, not the edges,
/// and cannot be turned back into a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport {
    /// Engine that produced the report (`"matrix"` or `"list"`).
    pub engine: &'static str,
    /// Directedness of the graph.
    pub direction: Direction,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges; undirected edges count once.
    pub edge_count: usize,
    /// The engine's [`render`](Graph::render) output.
    pub rendering: String,
    /// Undirected degree per vertex.
    pub undirected_degrees: DegreeTable<usize>,
    /// Incoming/outgoing degree per vertex.
    pub directed_degrees: DegreeTable<DirectedDegree>,
    /// Out-degree summary.
    pub statistics: GraphStatistics,
}

impl GraphReport {
    /// Snapshots `graph`.
    pub fn capture<G: Graph>(graph: &G) -> Self {
        Self {
            engine: G::ENGINE,
            direction: graph.direction(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            rendering: graph.render(),
            undirected_degrees: graph.overall_vertex_degree_undirected(),
            directed_degrees: graph.overall_vertex_degree_directed(),
            statistics: graph.statistics(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} graph ({}, {} vertices, {} edges)",
            self.engine, self.direction, self.vertex_count, self.edge_count
        )?;
        f.write_str(&self.rendering)?;
        for ((vertex, undirected), (_, directed)) in
            self.undirected_degrees.iter().zip(self.directed_degrees.iter())
        {
            writeln!(
                f,
                "vertex {vertex}: degree {undirected}, in {}, out {}, total {}",
                directed.incoming,
                directed.outgoing,
                directed.total()
            )?;
        }
        Ok(())
    }
}

/// Emits the undirected and directed degree of every vertex as `DEBUG` events.
///
/// Compiles to a no-op without the `tracing` feature.
pub fn log_degrees<G: Graph>(graph: &G) {
    #[cfg(feature = "tracing")]
    {
        let undirected = graph.overall_vertex_degree_undirected();
        let directed = graph.overall_vertex_degree_directed();
        for ((vertex, degree), (_, split)) in undirected.iter().zip(directed.iter()) {
            tracing::debug!(
                engine = G::ENGINE,
                vertex,
                degree,
                incoming = split.incoming,
                outgoing = split.outgoing,
                total = split.total(),
                "vertex degree"
            );
        }
    }
    #[cfg(not(feature = "tracing"))]
    let _ = graph;
}
