//! Graph Relax - edge relaxation over edge-weighted graphs
//!
//! This library implements the classic relaxation-based algorithms on
//! edge-weighted graphs: Dijkstra, acyclic shortest/longest paths and
//! queue-based Bellman–Ford for single-source shortest paths, and the eager
//! Prim, lazy Prim and Kruskal minimum spanning tree algorithms.
//!
//! The supporting machinery (an indexed min priority queue, weighted
//! union-find and a directed cycle detector) is exposed as well, since it is
//! useful on its own.

pub mod algorithm;
pub mod applications;
pub mod data_structures;
pub mod graph;
pub mod mst;

pub use algorithm::{
    acyclic::AcyclicPaths, bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use mst::{EagerPrim, Kruskal, LazyPrim, MinimumSpanningTree, MstResult};
/// Re-export main types for convenient use
pub use graph::{DirectedEdge, Edge, EdgeWeightedDigraph, EdgeWeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Vertex {vertex} is not an endpoint of edge {either}-{other}")]
    NotAnEndpoint {
        vertex: usize,
        either: usize,
        other: usize,
    },

    #[error("Negative edge weight on {from}->{to}: {weight}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("Digraph is not acyclic, found cycle {0:?}")]
    NotAcyclic(Vec<usize>),

    #[error("Negative cycle reachable from source {origin}: {cycle:?}")]
    NegativeCycle { origin: usize, cycle: Vec<usize> },

    #[error("Digraph has a negative cycle: the closed walk from {vertex} has negative weight")]
    NegativeClosedWalk { vertex: usize },

    #[error("Row {row} of the rate table has {found} entries, expected {expected}")]
    RaggedTable {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Vertex {0} is not in the priority queue")]
    NotInQueue(usize),

    #[error("Vertex {0} is already in the priority queue")]
    AlreadyInQueue(usize),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
