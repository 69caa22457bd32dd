use crate::graph::edge::DirectedEdge;
use crate::graph::traits::{MutableGraph, WeightedDigraph};
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// An edge-weighted digraph using adjacency lists indexed by vertex
///
/// Every edge in `adjacency[v]` has `from() == v`.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Outgoing edges for each vertex
    adjacency: Vec<Vec<DirectedEdge<W>>>,

    /// Number of edges added so far
    edge_count: usize,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty digraph
    pub fn new() -> Self {
        EdgeWeightedDigraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a digraph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        EdgeWeightedDigraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a digraph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds an already built edge
    pub fn add_directed_edge(&mut self, edge: DirectedEdge<W>) -> Result<()> {
        if !self.has_vertex(edge.from()) || !self.has_vertex(edge.to()) {
            return Err(Error::InvalidEdge(edge.from(), edge.to()));
        }
        self.adjacency[edge.from()].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `vertex` as a slice
    pub fn adjacent(&self, vertex: usize) -> Result<&[DirectedEdge<W>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |edges| edges.iter().any(|e| e.to() == to))
    }

    /// Validate that the digraph doesn't have negative weights
    pub fn validate_non_negative(&self) -> Result<()> {
        validate_non_negative(self)
    }
}

impl<W> Default for EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> WeightedDigraph<W> for EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges_from(&self, vertex: usize) -> Box<dyn Iterator<Item = DirectedEdge<W>> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.add_directed_edge(DirectedEdge::new(from, to, weight))
    }
}

/// Returns the first edge of `graph` with a negative weight as an error
pub fn validate_non_negative<W, G>(graph: &G) -> Result<()>
where
    W: Float + Debug + Copy,
    G: WeightedDigraph<W>,
{
    match graph.edges().find(|e| e.weight() < W::zero()) {
        Some(edge) => Err(Error::NegativeWeight {
            from: edge.from(),
            to: edge.to(),
            weight: edge.weight().to_f64().unwrap_or(f64::NAN),
        }),
        None => Ok(()),
    }
}
