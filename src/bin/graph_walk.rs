//! `graph-walk`: run a traversal or search over a graph loaded from JSON.
//!
//! The graph file has the form `{ "vertices": [..], "edges": [[from, to], ..] }`
//! with integer vertex ids. Without `--graph` the bundled seven-vertex fixture
//! is used. Set `RUST_LOG=debug` (or `trace`) to follow the walk.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pathwise::{DirectedGraph, Traversal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FIXTURE: &str = include_str!("../../demos/fixture_graph.json");

type Id = i64;

#[derive(Parser)]
#[command(name = "graph-walk")]
#[command(about = "Breadth-first and depth-first walks over a directed graph", long_about = None)]
struct Cli {
    /// JSON graph file (defaults to the bundled fixture graph)
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Also print the traversal pattern and the number of checks
    #[arg(long, global = true, default_value_t = false)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the loaded graph as JSON
    Show,
    /// Breadth-first traversal
    Bft { start: Id },
    /// Iterative depth-first traversal
    Dft { start: Id },
    /// Recursive depth-first traversal
    DftRecursive { start: Id },
    /// Shortest path by breadth-first search
    Bfs { start: Id, target: Id },
    /// Some path by depth-first search
    Dfs { start: Id, target: Id },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    print!("{}", run(&cli)?);
    Ok(())
}

/// Loads the graph and runs the requested command, returning what to print.
fn run(cli: &Cli) -> Result<String> {
    let graph = load_graph(cli.graph.as_deref())?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let output = match cli.command {
        Commands::Show => format!("{}\n", serde_json::to_string_pretty(&graph)?),
        Commands::Bft { start } => format_traversal(&graph.bft_report(&start)?, cli.stats),
        Commands::Dft { start } => format_traversal(&graph.dft_report(&start)?, cli.stats),
        Commands::DftRecursive { start } => {
            format!("vertices traversed: {}\n", join(&graph.dft_recursive(&start)?))
        }
        Commands::Bfs { start, target } => format_path(graph.bfs(&start, &target)?, start, target),
        Commands::Dfs { start, target } => format_path(graph.dfs(&start, &target)?, start, target),
    };
    Ok(output)
}

fn load_graph(path: Option<&Path>) -> Result<DirectedGraph<Id>> {
    let Some(path) = path else {
        return serde_json::from_str(FIXTURE).context("bundled fixture graph is malformed");
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse graph file {}", path.display()))
}

fn format_traversal(report: &Traversal<Id>, stats: bool) -> String {
    let mut out = format!("vertices traversed: {}\n", join(&report.order));
    if stats {
        let _ = writeln!(out, "traversal pattern: {}", join(&report.pattern));
        let _ = writeln!(out, "vertices checked: {}", report.checks);
    }
    out
}

fn format_path(path: Option<Vec<Id>>, start: Id, target: Id) -> String {
    match path {
        Some(path) => format!("{}\n", join(&path)),
        None => format!("no path from {start} to {target}\n"),
    }
}

fn join(ids: &[Id]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
