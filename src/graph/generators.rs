use crate::graph::undirected::check_weight;
use crate::graph::UndirectedGraph;
use crate::{Error, Result};
use log::{debug, warn};
use ordered_float::OrderedFloat;
use rand::seq::index;
use rand::Rng;

/// Give up on a connected sample after this many draws
pub const MAX_ATTEMPTS: usize = 10_000;

/// Edge and weight lists of a randomly generated graph
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize)>,
    pub weights: Vec<f64>,
    /// Number of samples drawn before a connected one came up
    pub attempts: usize,
}

impl RandomGraph {
    pub fn into_graph(self) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
        let weights: Vec<OrderedFloat<f64>> = self.weights.into_iter().map(OrderedFloat).collect();
        UndirectedGraph::build(self.vertex_count, &self.edges, &weights)
    }
}

/// Generates a connected Erdős–Rényi G(n, m) graph with integer weights.
///
/// Edges are drawn uniformly without replacement from all `n(n-1)/2` vertex
/// pairs (no self-loops, no parallel edges) and the draw is repeated until
/// the graph is connected. Weights are uniform in `1..=max_weight`.
pub fn random_connected_graph<R: Rng + ?Sized>(
    n_vertices: usize,
    n_edges: usize,
    max_weight: u32,
    rng: &mut R,
) -> Result<RandomGraph> {
    if max_weight < 1 {
        return Err(Error::InvalidGenerator("max_weight must be at least 1".to_string()));
    }
    sample_connected(n_vertices, n_edges, rng, |rng| {
        (0..n_edges)
            .map(|_| f64::from(rng.gen_range(1..=max_weight)))
            .collect()
    })
}

/// Generates a connected G(n, m) graph carrying caller-supplied weights.
///
/// One edge is drawn per weight; `weights[i]` goes to the `i`-th sampled
/// edge. Weights are checked before any sampling starts.
pub fn random_connected_graph_with_weights<R: Rng + ?Sized>(
    n_vertices: usize,
    weights: &[f64],
    rng: &mut R,
) -> Result<RandomGraph> {
    for (index, &weight) in weights.iter().enumerate() {
        check_weight(index, weight)?;
    }
    sample_connected(n_vertices, weights.len(), rng, |_| weights.to_vec())
}

fn sample_connected<R, F>(
    n_vertices: usize,
    n_edges: usize,
    rng: &mut R,
    mut draw_weights: F,
) -> Result<RandomGraph>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Vec<f64>,
{
    if n_edges < n_vertices.saturating_sub(1) {
        return Err(Error::InvalidGenerator(format!(
            "{} edges cannot connect {} vertices",
            n_edges, n_vertices
        )));
    }
    let pair_count = n_vertices
        .checked_mul(n_vertices.saturating_sub(1))
        .map(|pairs| pairs / 2)
        .ok_or_else(|| {
            Error::InvalidGenerator(format!("{} vertices overflow the pair count", n_vertices))
        })?;
    if n_edges > pair_count {
        return Err(Error::InvalidGenerator(format!(
            "{} edges exceed the {} vertex pairs of a simple graph",
            n_edges, pair_count
        )));
    }

    let unit: Vec<OrderedFloat<f64>> = vec![OrderedFloat(1.0); n_edges];
    for attempt in 1..=MAX_ATTEMPTS {
        let edges: Vec<(usize, usize)> = index::sample(&mut *rng, pair_count, n_edges)
            .into_iter()
            .map(|k| pair_from_index(k, n_vertices))
            .collect();
        let weights = draw_weights(&mut *rng);

        if UndirectedGraph::build(n_vertices, &edges, &unit)?.is_connected() {
            debug!(
                "connected G({}, {}) found after {} attempt(s)",
                n_vertices, n_edges, attempt
            );
            return Ok(RandomGraph {
                vertex_count: n_vertices,
                edges,
                weights,
                attempts: attempt,
            });
        }

        if attempt % 1_000 == 0 {
            warn!(
                "still no connected G({}, {}) after {} attempts",
                n_vertices, n_edges, attempt
            );
        }
    }

    Err(Error::InvalidGenerator(format!(
        "no connected G({}, {}) sample within {} attempts",
        n_vertices, n_edges, MAX_ATTEMPTS
    )))
}

/// Maps `0..n(n-1)/2` onto the pairs `(i, j)` with `i < j`, row by row
fn pair_from_index(mut k: usize, n: usize) -> (usize, usize) {
    let mut i = 0;
    while k >= n - 1 - i {
        k -= n - 1 - i;
        i += 1;
    }
    (i, i + 1 + k)
}
