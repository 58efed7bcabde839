use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted graph that can be traversed from any vertex.
///
/// Implementations are read-only: once built, a graph only answers queries,
/// which is what allows several searches to share it across threads.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges the graph was built from
    fn edge_count(&self) -> usize;

    /// Returns an iterator over `(neighbor, weight)` pairs reachable by one edge
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the lightest edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best, weight| match best {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }
}
