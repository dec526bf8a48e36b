use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dualgraph::graph::{
    add_edge, add_vertices, breadth_first_traverse, depth_first_traverse,
    depth_first_traverse_non_recursive, render, AdjacencyList, AdjacencyMatrix, Directed, Graph,
    Undirected,
};
use std::fmt::Display;

#[derive(Parser)]
#[command(name = "dualgraph")]
#[command(about = "Traverse a sample graph on both storage backends", long_about = None)]
struct Cli {
    /// Storage backend (both when omitted)
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// Build a directed graph (both directednesses when omitted)
    #[arg(long)]
    directed: Option<bool>,

    /// Emit traversal events on stderr
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    Matrix,
    List,
}

const VERTICES: [&str; 8] = ["v1", "v2", "v3", "v4", "v5", "v6", "v7", "v8"];

const EDGES: [(&str, &str); 9] = [
    ("v1", "v2"),
    ("v1", "v3"),
    ("v2", "v4"),
    ("v2", "v5"),
    ("v8", "v4"),
    ("v8", "v5"),
    ("v3", "v6"),
    ("v3", "v7"),
    ("v6", "v7"),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let backends = match cli.backend {
        Some(backend) => vec![backend],
        None => vec![Backend::Matrix, Backend::List],
    };
    let directednesses = match cli.directed {
        Some(directed) => vec![directed],
        None => vec![false, true],
    };

    for &backend in &backends {
        for &directed in &directednesses {
            match (backend, directed) {
                (Backend::Matrix, false) => run(
                    "undirected graph with adjacency matrix",
                    AdjacencyMatrix::<Undirected, &str>::new(),
                )?,
                (Backend::Matrix, true) => run(
                    "directed graph with adjacency matrix",
                    AdjacencyMatrix::<Directed, &str>::new(),
                )?,
                (Backend::List, false) => run(
                    "undirected graph with adjacency list",
                    AdjacencyList::<Undirected, &str>::new(),
                )?,
                (Backend::List, true) => run(
                    "directed graph with adjacency list",
                    AdjacencyList::<Directed, &str>::new(),
                )?,
            }
        }
    }
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter("dualgraph=debug")
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: bool) {
    if verbose {
        eprintln!("dualgraph was built without the `tracing` feature; --verbose has no effect");
    }
}

fn run<G>(title: &str, mut graph: G) -> Result<()>
where
    G: Graph<Vertex = &'static str, Edge = bool>,
{
    add_vertices(&mut graph, VERTICES);
    for (from, to) in EDGES {
        add_edge(&mut graph, from, to).with_context(|| format!("adding edge {from}-{to}"))?;
    }

    println!("----- Test {title} -----");
    print!("{}", render::table(&graph));

    println!("Depth first traverse:");
    let mut line = String::from("Recursive:\t");
    depth_first_traverse(&graph, |g, _, v| push_label(&mut line, label(g, v)))?;
    println!("{line}");

    let mut line = String::from("Non-recursive:\t");
    depth_first_traverse_non_recursive(&graph, |g, v| push_label(&mut line, label(g, v)))?;
    println!("{line}");

    let mut line = String::new();
    depth_first_traverse(&graph, |g, parent, v| push_label(&mut line, tree_edge(g, parent, v)))?;
    println!("{line}");

    println!("Breadth first traverse:");
    let mut line = String::from("Non-recursive:\t");
    breadth_first_traverse(&graph, |g, _, v| push_label(&mut line, label(g, v)))?;
    println!("{line}");

    let mut line = String::new();
    breadth_first_traverse(&graph, |g, parent, v| push_label(&mut line, tree_edge(g, parent, v)))?;
    println!("{line}");
    println!();
    Ok(())
}

fn label<G: Graph>(graph: &G, index: usize) -> String
where
    G::Vertex: Display,
{
    graph
        .vertex(index)
        .map_or_else(|_| format!("#{index}"), ToString::to_string)
}

/// `(root)` for a traversal root, `parent->vertex` otherwise.
fn tree_edge<G: Graph>(graph: &G, parent: Option<usize>, index: usize) -> String
where
    G::Vertex: Display,
{
    match parent {
        None => format!("({})", label(graph, index)),
        Some(parent) => format!("{}->{}", label(graph, parent), label(graph, index)),
    }
}

fn push_label(line: &mut String, label: String) {
    line.push_str(&label);
    line.push(' ');
}
