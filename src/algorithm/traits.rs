use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex; `None` means not reached
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Shortest distance to `vertex`, `None` if it was not reached
    pub fn distance_to(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns true if the search reached `vertex`
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Walks the predecessor links back from `target` to the source.
    ///
    /// Returns the vertices from source to target inclusive, or an empty
    /// vector if the chain breaks before reaching the source.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        if target >= self.predecessors.len() {
            return Vec::new();
        }
        if target == self.source {
            return vec![self.source];
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            match self.predecessors[current] {
                Some(pred) => {
                    current = pred;
                    path.push(current);
                }
                None => return Vec::new(),
            }

            // A predecessor chain longer than the vertex count loops
            if path.len() > self.predecessors.len() {
                warn!("predecessor chain from {} does not reach source {}", target, self.source);
                return Vec::new();
            }
        }

        path.reverse();
        path
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<G: Graph<W>>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<ShortestPathResult<W>>;

    /// Compute enough of the shortest path tree to settle `target`.
    ///
    /// Vertices other than `target` may be left with tentative distances.
    fn compute_towards<G: Graph<W>>(
        &self,
        graph: &G,
        source: usize,
        _target: usize,
    ) -> Result<ShortestPathResult<W>> {
        self.compute_shortest_paths(graph, source)
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Vec<usize> {
        result.path_to(target)
    }

    /// Shortest path between two vertices, empty when `target` is unreachable.
    ///
    /// Both vertices are range-checked before any traversal starts.
    fn shortest_path<G: Graph<W>>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<Vec<usize>> {
        for vertex in [source, target] {
            if !graph.has_vertex(vertex) {
                return Err(Error::vertex_out_of_range(vertex, graph.vertex_count()));
            }
        }
        if source == target {
            return Ok(vec![source]);
        }

        let result = self.compute_towards(graph, source, target)?;
        Ok(self.get_path(&result, target))
    }
}
