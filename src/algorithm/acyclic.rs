use std::fmt::Debug;
use log::trace;
use num_traits::Float;

use crate::algorithm::topological::Topological;
use crate::algorithm::traits::{validate_source, PathObjective, Relaxation};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::WeightedDigraph;
use crate::Result;

/// Shortest or longest paths in an edge-weighted DAG
///
/// Vertices are relaxed in topological order, so every predecessor of a
/// vertex is final before the vertex itself is processed. Weights may be
/// negative. A digraph with a cycle is rejected with
/// [`crate::Error::NotAcyclic`]. O(V + E).
#[derive(Debug, Clone, Copy)]
pub struct AcyclicPaths {
    objective: PathObjective,
}

impl AcyclicPaths {
    pub fn new(objective: PathObjective) -> Self {
        AcyclicPaths { objective }
    }

    /// Minimise total weight (`dist_to` starts at `+∞`)
    pub fn shortest() -> Self {
        Self::new(PathObjective::Shortest)
    }

    /// Maximise total weight (`dist_to` starts at `-∞`)
    pub fn longest() -> Self {
        Self::new(PathObjective::Longest)
    }

    pub fn objective(&self) -> PathObjective {
        self.objective
    }
}

impl Default for AcyclicPaths {
    fn default() -> Self {
        Self::shortest()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for AcyclicPaths
where
    W: Float + Debug + Copy,
    G: WeightedDigraph<W>,
{
    fn name(&self) -> &'static str {
        match self.objective {
            PathObjective::Shortest => "AcyclicShortestPaths",
            PathObjective::Longest => "AcyclicLongestPaths",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        validate_source::<W, G>(graph, source)?;
        let topological = Topological::new::<W, G>(graph)?;

        let mut relaxation = Relaxation::new(graph.vertex_count(), source, self.objective);
        for &v in topological.order() {
            trace!("acyclic: relaxing edges of {}", v);
            for edge in graph.edges_from(v) {
                relaxation.relax(edge);
            }
        }

        Ok(relaxation.into_result(source))
    }
}
