//! Undirected SSSP - shortest paths on weighted undirected graphs
//!
//! The crate builds an immutable adjacency representation from an edge list,
//! runs Dijkstra's algorithm from a single source and reconstructs the vertex
//! sequence to a target. Edge weights must be finite and non-negative.
//!
//! The flat entry point [`compute_shortest_path`] mirrors the shape that a
//! binding layer hands over: a vertex count, raw edge and weight lists and two
//! integer vertex indices.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    batch::solve_batch, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::{EdgeId, UndirectedGraph};

use graph::undirected::check_weight;
use ordered_float::OrderedFloat;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Edge list has {edges} entries but weight list has {weights}")]
    DimensionMismatch { edges: usize, weights: usize },

    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: i64, vertex_count: usize },

    #[error("Negative weight {weight} on edge {index}")]
    NegativeWeight { index: usize, weight: f64 },

    #[error("Non-finite weight {weight} on edge {index}")]
    NonFiniteWeight { index: usize, weight: f64 },

    #[error("Invalid generator parameters: {0}")]
    InvalidGenerator(String),
}

impl Error {
    /// Indices above `i64::MAX` cannot be represented and are reported as `i64::MAX`
    pub(crate) fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Error::VertexOutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes the shortest path between `source` and `target`.
///
/// Builds an [`UndirectedGraph`] from `edges` and `weights`, then runs
/// [`Dijkstra`] from `source`. Returns the vertices from source to target
/// inclusive, or an empty vector when the target cannot be reached.
pub fn compute_shortest_path(
    num_vertices: usize,
    edges: &[(i64, i64)],
    weights: &[f64],
    source: i64,
    target: i64,
) -> Result<Vec<usize>> {
    if edges.len() != weights.len() {
        return Err(Error::DimensionMismatch {
            edges: edges.len(),
            weights: weights.len(),
        });
    }

    let to_index = |vertex: i64| -> Result<usize> {
        usize::try_from(vertex)
            .ok()
            .filter(|&v| v < num_vertices)
            .ok_or(Error::VertexOutOfRange {
                vertex,
                vertex_count: num_vertices,
            })
    };

    // Endpoints and weight of each edge are checked together, in edge order
    let mut edge_list = Vec::with_capacity(edges.len());
    for (index, (&(u, v), &weight)) in edges.iter().zip(weights).enumerate() {
        edge_list.push((to_index(u)?, to_index(v)?));
        check_weight(index, weight)?;
    }
    let weight_list: Vec<OrderedFloat<f64>> = weights.iter().copied().map(OrderedFloat).collect();

    let graph = UndirectedGraph::build(num_vertices, &edge_list, &weight_list)?;
    let source = to_index(source)?;
    let target = to_index(target)?;

    Dijkstra::new().shortest_path(&graph, source, target)
}
