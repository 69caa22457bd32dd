use crate::graph::edge::Edge;
use crate::graph::traits::{MutableGraph, WeightedGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// An edge-weighted undirected graph
///
/// Edges live once in an arena; each vertex's adjacency list holds arena
/// indices of the edges incident to it. A self-loop is listed once.
#[derive(Debug, Clone)]
pub struct EdgeWeightedGraph<W>
where
    W: Float + Debug + Copy,
{
    edges: Vec<Edge<W>>,
    adjacency: Vec<Vec<usize>>,
}

impl<W> EdgeWeightedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        EdgeWeightedGraph {
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates a graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        EdgeWeightedGraph {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from `(v, w, weight)` triples
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (v, w, weight) in edges {
            graph.add_edge(v, w, weight)?;
        }
        Ok(graph)
    }

    /// Degree of `vertex`
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.adjacency
            .get(vertex)
            .map(Vec::len)
            .ok_or(Error::InvalidVertex(vertex))
    }
}

impl<W> Default for EdgeWeightedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> WeightedGraph<W> for EdgeWeightedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges_from(&self, vertex: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        match self.adjacency.get(vertex) {
            Some(ids) => Box::new(ids.iter().map(move |&id| self.edges[id])),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.edges.iter().copied())
    }
}

impl<W> MutableGraph<W> for EdgeWeightedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        let id = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        self.adjacency[from].push(id);
        if from != to {
            self.adjacency[to].push(id);
        }
        Ok(())
    }
}
