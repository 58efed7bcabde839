use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::Graph;
use crate::Result;

/// Answers independent `(source, target)` queries against one graph in parallel.
///
/// Each query runs its own search with private tables, so the graph is only
/// ever read. Results come back in query order; a failing query does not
/// affect the others.
pub fn solve_batch<W, G, A>(
    algorithm: &A,
    graph: &G,
    queries: &[(usize, usize)],
) -> Vec<Result<Vec<usize>>>
where
    W: Float + Zero + Debug + Copy + Send + Sync,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W> + Sync,
{
    debug!("{}: answering {} queries in parallel", algorithm.name(), queries.len());

    queries
        .par_iter()
        .map(|&(source, target)| algorithm.shortest_path(graph, source, target))
        .collect()
}
