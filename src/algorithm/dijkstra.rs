use std::fmt::Debug;
use log::trace;
use num_traits::Float;

use crate::algorithm::traits::{validate_source, PathObjective, Relaxation};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexMinPQ;
use crate::graph::directed::validate_non_negative;
use crate::graph::WeightedDigraph;
use crate::Result;

/// Classic Dijkstra's algorithm over an indexed min priority queue
///
/// Requires non-negative edge weights; a negative edge is reported as
/// [`crate::Error::NegativeWeight`] before any distance is computed. Once a
/// vertex leaves the queue its distance is final. O((E + V) log V).
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug + Copy,
    G: WeightedDigraph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        validate_source::<W, G>(graph, source)?;
        validate_non_negative::<W, G>(graph)?;

        let n = graph.vertex_count();
        let mut relaxation = Relaxation::new(n, source, PathObjective::Shortest);

        let mut queue = IndexMinPQ::new(n);
        queue.insert(source, W::zero())?;

        // Main Dijkstra loop
        while !queue.is_empty() {
            let v = queue.del_min()?;
            trace!("dijkstra: settled {} at {:?}", v, relaxation.dist_to[v]);

            for edge in graph.edges_from(v) {
                if !relaxation.relax(edge) {
                    continue;
                }
                let w = edge.to();
                let dist = relaxation.dist_to[w];
                if queue.contains(w) {
                    queue.change(w, dist)?;
                } else {
                    queue.insert(w, dist)?;
                }
            }
        }

        Ok(relaxation.into_result(source))
    }
}
