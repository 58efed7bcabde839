use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a binary heap.
///
/// The unsettled vertex with the smallest tentative distance is settled
/// next, the lowest vertex index winning ties, so results are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    /// Stop as soon as the target of a point-to-point query is settled
    early_exit: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { early_exit: true }
    }

    /// Enable or disable stopping once the target is settled
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    fn run<W, G>(
        &self,
        graph: &G,
        source: usize,
        stop_at: Option<usize>,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::vertex_out_of_range(source, graph.vertex_count()));
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut settled_count = 0;

        distances[source] = Some(W::zero());

        let mut queue = MinQueue::with_capacity(n);
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry left behind by a later improvement
            if settled[u] {
                continue;
            }
            settled[u] = true;
            settled_count += 1;
            trace!("settled vertex {} at distance {:?}", u, dist_u);

            if stop_at == Some(u) {
                break;
            }

            for (v, weight) in graph.neighbors(u) {
                if settled[v] {
                    continue;
                }

                let candidate = dist_u + weight;
                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        debug!(
            "dijkstra from {} settled {} of {} vertices",
            source, settled_count, n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<G: Graph<W>>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<ShortestPathResult<W>> {
        self.run(graph, source, None)
    }

    fn compute_towards<G: Graph<W>>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<ShortestPathResult<W>> {
        let stop_at = if self.early_exit { Some(target) } else { None };
        self.run(graph, source, stop_at)
    }
}
