use std::fmt::Debug;
use log::warn;
use num_traits::Float;
use crate::graph::{DirectedEdge, WeightedDigraph};
use crate::{Error, Result};

/// Whether distances are minimised or maximised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathObjective {
    Shortest,
    Longest,
}

impl PathObjective {
    /// Distance of a vertex that has not been reached yet
    pub fn unreached<W: Float>(self) -> W {
        match self {
            PathObjective::Shortest => W::infinity(),
            PathObjective::Longest => W::neg_infinity(),
        }
    }

    /// True if `candidate` is strictly better than `current`
    pub fn improves<W: Float>(self, candidate: W, current: W) -> bool {
        match self {
            PathObjective::Shortest => candidate < current,
            PathObjective::Longest => candidate > current,
        }
    }
}

/// Result of a single-source path algorithm execution
///
/// `edge_to` restricted to the reached vertices is a tree rooted at the
/// source; paths are rebuilt by walking it backwards.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Source vertex ID
    source: usize,

    objective: PathObjective,

    /// Best known distance from the source, `±∞` when unreached
    dist_to: Vec<W>,

    /// Last edge on the best known path to each vertex
    edge_to: Vec<Option<DirectedEdge<W>>>,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    pub(crate) fn new(
        source: usize,
        objective: PathObjective,
        dist_to: Vec<W>,
        edge_to: Vec<Option<DirectedEdge<W>>>,
    ) -> Self {
        ShortestPathResult {
            source,
            objective,
            dist_to,
            edge_to,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn objective(&self) -> PathObjective {
        self.objective
    }

    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    /// All distances, with the `±∞` sentinel for unreached vertices
    pub fn distances(&self) -> &[W] {
        &self.dist_to
    }

    /// Distance from the source to `vertex`
    pub fn dist_to(&self, vertex: usize) -> Result<W> {
        self.dist_to
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }

    pub fn has_path_to(&self, vertex: usize) -> Result<bool> {
        Ok(self.dist_to(vertex)? != self.objective.unreached())
    }

    /// Last edge on the path to `vertex`; `None` for the source and for
    /// unreached vertices
    pub fn edge_to(&self, vertex: usize) -> Result<Option<DirectedEdge<W>>> {
        self.edge_to
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Edges of the path from the source to `vertex`
    ///
    /// `Ok(None)` means `vertex` was not reached; the source itself has an
    /// empty path.
    pub fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        if !self.has_path_to(vertex)? {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = vertex;
        while current != self.source {
            let edge = match self.edge_to[current] {
                Some(edge) => edge,
                None => {
                    warn!("vertex {} reached without a tree edge", current);
                    return Ok(None);
                }
            };
            path.push(edge);
            if path.len() > self.edge_to.len() {
                warn!("path to {} does not lead back to the source", vertex);
                return Ok(None);
            }
            current = edge.from();
        }

        path.reverse();
        Ok(Some(path))
    }

    /// Vertices along the path from the source to `vertex`, both included
    pub fn path_vertices(&self, vertex: usize) -> Result<Option<Vec<usize>>> {
        Ok(self.path_to(vertex)?.map(|edges| {
            std::iter::once(self.source)
                .chain(edges.iter().map(|e| e.to()))
                .collect()
        }))
    }
}

/// Trait for single-source path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: WeightedDigraph<W>,
{
    /// Compute paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Per-run `dist_to` / `edge_to` arrays and the relaxation step shared by
/// the single-source algorithms
#[derive(Debug)]
pub(crate) struct Relaxation<W>
where
    W: Float + Debug + Copy,
{
    pub(crate) objective: PathObjective,
    pub(crate) dist_to: Vec<W>,
    pub(crate) edge_to: Vec<Option<DirectedEdge<W>>>,
}

impl<W> Relaxation<W>
where
    W: Float + Debug + Copy,
{
    pub(crate) fn new(vertex_count: usize, source: usize, objective: PathObjective) -> Self {
        let mut dist_to = vec![objective.unreached(); vertex_count];
        dist_to[source] = W::zero();
        Relaxation {
            objective,
            dist_to,
            edge_to: vec![None; vertex_count],
        }
    }

    /// Relaxes `edge`, returning true if it improved the distance of its head
    pub(crate) fn relax(&mut self, edge: DirectedEdge<W>) -> bool {
        let (v, w) = (edge.from(), edge.to());
        if self.dist_to[v] == self.objective.unreached() {
            return false;
        }
        let candidate = self.dist_to[v] + edge.weight();
        if self.objective.improves(candidate, self.dist_to[w]) {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(edge);
            true
        } else {
            false
        }
    }

    pub(crate) fn into_result(self, source: usize) -> ShortestPathResult<W> {
        ShortestPathResult::new(source, self.objective, self.dist_to, self.edge_to)
    }
}

/// Fails with `InvalidVertex` unless `source` belongs to `graph`
pub(crate) fn validate_source<W, G>(graph: &G, source: usize) -> Result<()>
where
    W: Float + Debug + Copy,
    G: WeightedDigraph<W>,
{
    if !graph.has_vertex(source) {
        return Err(Error::InvalidVertex(source));
    }
    Ok(())
}
