pub mod traits;
pub mod cycle;
pub mod topological;
pub mod dijkstra;
pub mod acyclic;
pub mod bellman_ford;
pub mod floyd_warshall;

pub use traits::{PathObjective, ShortestPathAlgorithm, ShortestPathResult};
pub use cycle::DirectedCycle;
pub use topological::{DepthFirstOrder, Topological};
pub use dijkstra::Dijkstra;
pub use acyclic::AcyclicPaths;
pub use bellman_ford::{BellmanFord, BellmanFordResult};
pub use floyd_warshall::FloydWarshall;
