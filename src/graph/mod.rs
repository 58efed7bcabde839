pub mod traits;
pub mod undirected;
pub mod generators;

pub use traits::Graph;
pub use undirected::{Adjacency, EdgeId, UndirectedGraph};
