use crate::graph::traits::Graph;
use crate::{Error, Result};
use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Position of an edge in the list the graph was built from
pub type EdgeId = usize;

/// One entry of a vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacency<W> {
    /// Vertex at the other end of the edge
    pub neighbor: usize,
    /// Weight of the edge
    pub weight: W,
    /// Input position of the edge, shared by both directions
    pub edge: EdgeId,
}

/// An immutable undirected graph backed by per-vertex adjacency lists.
///
/// Every input edge `(u, v)` appears in the lists of both `u` and `v`, in
/// input order. Parallel edges are kept as separate entries. A self-loop is
/// listed once on its vertex.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Edges in input order: (u, v, weight)
    edges: Vec<(usize, usize, W)>,

    /// vertex_id -> [(neighbor, weight, edge_id)]
    adjacency: Vec<Vec<Adjacency<W>>>,
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a graph from an edge list and a parallel list of weights.
    ///
    /// Fails on the first problem found, checking the list lengths before
    /// looking at any edge, then each edge's endpoints and weight in input
    /// order. No graph is returned unless every edge is valid.
    pub fn build(vertex_count: usize, edges: &[(usize, usize)], weights: &[W]) -> Result<Self> {
        if edges.len() != weights.len() {
            return Err(Error::DimensionMismatch {
                edges: edges.len(),
                weights: weights.len(),
            });
        }

        for (index, (&(u, v), &weight)) in edges.iter().zip(weights).enumerate() {
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(Error::vertex_out_of_range(vertex, vertex_count));
                }
            }
            check_weight(index, weight)?;
        }

        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut edge_list = Vec::with_capacity(edges.len());
        for (edge, (&(u, v), &weight)) in edges.iter().zip(weights).enumerate() {
            adjacency[u].push(Adjacency { neighbor: v, weight, edge });
            if u != v {
                adjacency[v].push(Adjacency { neighbor: u, weight, edge });
            }
            edge_list.push((u, v, weight));
        }

        debug!(
            "built undirected graph with {} vertices and {} edges",
            vertex_count,
            edge_list.len()
        );

        Ok(UndirectedGraph {
            vertex_count,
            edges: edge_list,
            adjacency,
        })
    }

    /// Edges in the order they were supplied
    pub fn edges(&self) -> &[(usize, usize, W)] {
        &self.edges
    }

    /// Adjacency list of a vertex; empty for unknown vertices
    pub fn adjacent(&self, vertex: usize) -> &[Adjacency<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of adjacency entries of a vertex, parallel edges included
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacent(vertex).len()
    }

    /// Returns the lightest edge joining `u` and `v`.
    ///
    /// Among parallel edges of equal weight the one supplied first wins.
    pub fn edge_between(&self, u: usize, v: usize) -> Option<(EdgeId, W)> {
        self.adjacent(u)
            .iter()
            .filter(|entry| entry.neighbor == v)
            .fold(None, |best: Option<(EdgeId, W)>, entry| match best {
                Some((_, weight)) if weight <= entry.weight => best,
                _ => Some((entry.edge, entry.weight)),
            })
    }

    /// Maps a vertex path to the ids of the edges it walks along.
    ///
    /// Returns `None` if two consecutive vertices are not adjacent. A path
    /// with fewer than two vertices walks no edges.
    pub fn path_edges(&self, path: &[usize]) -> Option<Vec<EdgeId>> {
        path.windows(2)
            .map(|pair| self.edge_between(pair[0], pair[1]).map(|(edge, _)| edge))
            .collect()
    }

    /// Total weight of a vertex path, or `None` for an empty or broken path
    pub fn path_weight(&self, path: &[usize]) -> Option<W> {
        if path.is_empty() {
            return None;
        }
        path.windows(2).try_fold(W::zero(), |total, pair| {
            self.edge_between(pair[0], pair[1])
                .map(|(_, weight)| total + weight)
        })
    }

    /// Number of connected components; isolated vertices count as one each
    pub fn component_count(&self) -> usize {
        let mut visited = vec![false; self.vertex_count];
        let mut stack = Vec::new();
        let mut components = 0;

        for start in 0..self.vertex_count {
            if visited[start] {
                continue;
            }
            components += 1;
            visited[start] = true;
            stack.push(start);

            while let Some(u) = stack.pop() {
                for entry in &self.adjacency[u] {
                    if !visited[entry.neighbor] {
                        visited[entry.neighbor] = true;
                        stack.push(entry.neighbor);
                    }
                }
            }
        }

        components
    }

    /// True when every vertex can reach every other one
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }
}

/// Rejects NaN, negative and infinite weights; `index` names the edge
pub(crate) fn check_weight<W: Float>(index: usize, weight: W) -> Result<()> {
    let as_f64 = weight.to_f64().unwrap_or(f64::NAN);
    if weight.is_nan() {
        return Err(Error::NonFiniteWeight { index, weight: as_f64 });
    }
    if weight < W::zero() {
        return Err(Error::NegativeWeight { index, weight: as_f64 });
    }
    if weight.is_infinite() {
        return Err(Error::NonFiniteWeight { index, weight: as_f64 });
    }
    Ok(())
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.adjacent(vertex).iter().map(|entry| (entry.neighbor, entry.weight)))
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacent(from).iter().any(|entry| entry.neighbor == to)
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.edge_between(from, to).map(|(_, weight)| weight)
    }
}
