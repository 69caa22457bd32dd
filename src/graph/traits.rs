use std::fmt::Debug;
use num_traits::Float;

use crate::graph::edge::{DirectedEdge, Edge};
use crate::Result;

/// Trait representing a weighted directed graph over vertices `0..V`
pub trait WeightedDigraph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the edges leaving a vertex
    fn edges_from(&self, vertex: usize) -> Box<dyn Iterator<Item = DirectedEdge<W>> + '_>;

    /// Returns an iterator over every edge of the graph
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = DirectedEdge<W>> + 'a>
    where
        W: 'a,
    {
        Box::new((0..self.vertex_count()).flat_map(move |v| self.edges_from(v)))
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait representing a weighted undirected graph over vertices `0..V`
pub trait WeightedGraph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the edges incident to a vertex
    fn edges_from(&self, vertex: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns an iterator yielding each edge of the graph exactly once
    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds an edge between existing vertices with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
