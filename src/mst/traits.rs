use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{Edge, WeightedGraph};
use crate::Result;

/// Edges of a minimum spanning forest
///
/// On a connected graph this is a spanning tree with `V - 1` edges; on a
/// disconnected one, one tree per component.
#[derive(Debug, Clone)]
pub struct MstResult<W>
where
    W: Float + Debug + Copy,
{
    edges: Vec<Edge<W>>,
}

impl<W> MstResult<W>
where
    W: Float + Debug + Copy,
{
    pub(crate) fn new(edges: Vec<Edge<W>>) -> Self {
        MstResult { edges }
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Total weight of the forest
    pub fn weight(&self) -> W {
        self.edges.iter().fold(W::zero(), |acc, e| acc + e.weight())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Trait for minimum spanning tree algorithms
pub trait MinimumSpanningTree<W, G>
where
    W: Float + Debug + Copy,
    G: WeightedGraph<W>,
{
    /// Compute a minimum spanning forest of the graph
    fn compute_mst(&self, graph: &G) -> Result<MstResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
