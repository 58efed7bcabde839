use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use undirected_sssp::graph::generators::random_connected_graph;
use undirected_sssp::graph::Graph;
use undirected_sssp::{Dijkstra, EdgeId, ShortestPathAlgorithm};

/// Generate a random connected graph and find the shortest path between two vertices
#[derive(Debug, Parser)]
#[command(name = "shortest-path", version, about)]
struct RunConfig {
    /// Number of vertices
    #[arg(short = 'n', long, default_value_t = 10)]
    vertices: usize,

    /// Number of edges, at least vertices - 1
    #[arg(short = 'm', long, default_value_t = 15)]
    edges: usize,

    /// Start vertex
    #[arg(short, long, default_value_t = 1)]
    source: usize,

    /// End vertex
    #[arg(short = 't', long, default_value_t = 9)]
    sink: usize,

    /// Largest integer edge weight
    #[arg(long, default_value_t = 100)]
    max_weight: u32,

    /// Seed for the graph generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct PathReport {
    vertices: usize,
    edges: usize,
    source: usize,
    sink: usize,
    path: Vec<usize>,
    path_edges: Vec<EdgeId>,
    total_weight: Option<f64>,
    generator_attempts: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = RunConfig::parse();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated =
        random_connected_graph(config.vertices, config.edges, config.max_weight, &mut rng)?;
    let attempts = generated.attempts;
    let graph = generated.into_graph()?;

    let dijkstra = Dijkstra::new();
    let path = dijkstra.shortest_path(&graph, config.source, config.sink)?;
    let path_edges = graph.path_edges(&path).unwrap_or_default();
    let total_weight = graph.path_weight(&path).map(|w| w.into_inner());

    let report = PathReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        source: config.source,
        sink: config.sink,
        path,
        path_edges,
        total_weight,
        generator_attempts: attempts,
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Graph has {} vertices and {} edges", report.vertices, report.edges);
    for (id, (u, v, w)) in graph.edges().iter().enumerate() {
        println!("  edge {:>3}: {} -- {} (weight {})", id, u, v, w);
    }

    match report.total_weight {
        Some(weight) => {
            println!("Shortest path: {:?}", report.path);
            println!("Edges in shortest path: {:?}", report.path_edges);
            println!("Total weight: {}", weight);
        }
        None => println!("No path from {} to {}", report.source, report.sink),
    }

    Ok(())
}
