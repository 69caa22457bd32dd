use std::fmt::Debug;
use log::trace;
use num_traits::Float;

use crate::data_structures::{MinPriorityQueue, UnionFind};
use crate::graph::WeightedGraph;
use crate::mst::{MinimumSpanningTree, MstResult};
use crate::Result;

/// Kruskal: takes edges in increasing weight order, skipping any edge whose
/// endpoints the union-find already reports as connected
///
/// Stops after `V - 1` accepted edges or when the edges run out (spanning
/// forest). O(E log E).
#[derive(Debug, Default, Clone, Copy)]
pub struct Kruskal;

impl Kruskal {
    pub fn new() -> Self {
        Kruskal
    }
}

impl<W, G> MinimumSpanningTree<W, G> for Kruskal
where
    W: Float + Debug + Copy + Ord,
    G: WeightedGraph<W>,
{
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn compute_mst(&self, graph: &G) -> Result<MstResult<W>> {
        let n = graph.vertex_count();
        let target = n.saturating_sub(1);
        let mut queue = MinPriorityQueue::from_items(graph.edges().map(|e| (e, e.weight())));
        let mut components = UnionFind::new(n);
        let mut mst = Vec::with_capacity(target);

        while mst.len() < target {
            let edge = match queue.pop() {
                Some((edge, _)) => edge,
                None => break,
            };
            let (v, w) = edge.endpoints();
            if components.connected(v, w)? {
                trace!("kruskal: {} would close a cycle", edge);
                continue;
            }
            components.union(v, w)?;
            mst.push(edge);
        }

        Ok(MstResult::new(mst))
    }
}
