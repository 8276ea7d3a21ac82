//! Builds the five-vertex sample graph, prints it, and runs one BFS and one DFS.

use adjgraph::{
    log_degrees, AdjacencyListGraph, AdjacencyMatrixGraph, Direction, Graph, GraphReport,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

const SAMPLE_VERTICES: usize = 5;
const SAMPLE_EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [1, 2], [1, 3], [2, 3], [3, 4]];

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Engine {
    Matrix,
    List,
    Both,
}

#[derive(Parser)]
#[command(name = "graph-demo")]
#[command(about = "Inspect the sample graph with either storage engine", long_about = None)]
struct Cli {
    /// Storage engine to build
    #[arg(long, value_enum, default_value_t = Engine::Both)]
    engine: Engine,

    /// Treat the sample edges as directed
    #[arg(long, default_value_t = false)]
    directed: bool,

    /// Start vertex for both traversals
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let direction = Direction::from(cli.directed);

    if matches!(cli.engine, Engine::Matrix | Engine::Both) {
        let graph = AdjacencyMatrixGraph::from_edges(SAMPLE_VERTICES, SAMPLE_EDGES, direction)?;
        inspect(&graph, &cli)?;
    }
    if matches!(cli.engine, Engine::List | Engine::Both) {
        let graph = AdjacencyListGraph::from_edges(SAMPLE_VERTICES, SAMPLE_EDGES, direction)?;
        inspect(&graph, &cli)?;
    }

    Ok(())
}

fn inspect<G: Graph>(graph: &G, cli: &Cli) -> Result<()> {
    let report = GraphReport::capture(graph);
    if cli.json {
        println!("{}", report.to_json().context("serializing report")?);
    } else {
        print!("{report}");
    }
    log_degrees(graph);

    let bfs = graph
        .traverse_breadth_first(cli.start)
        .with_context(|| format!("BFS from vertex {}", cli.start))?;
    let dfs = graph
        .traverse_depth_first(cli.start)
        .with_context(|| format!("DFS from vertex {}", cli.start))?;

    println!("bfs from {}: {bfs:?}", cli.start);
    println!("dfs from {}: {dfs:?}", cli.start);
    println!();
    Ok(())
}
