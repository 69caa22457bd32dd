pub mod traits;
pub mod edge;
pub mod directed;
pub mod undirected;
pub mod io;
pub mod generators;

pub use traits::{MutableGraph, WeightedDigraph, WeightedGraph};
pub use edge::{DirectedEdge, Edge};
pub use directed::EdgeWeightedDigraph;
pub use undirected::EdgeWeightedGraph;
