use std::fmt::Debug;
use log::debug;
use num_traits::Float;

use crate::data_structures::IndexMinPQ;
use crate::graph::WeightedGraph;
use crate::mst::{MinimumSpanningTree, MstResult};
use crate::Result;

/// Eager Prim: grows the tree from vertex 0, keeping for every vertex
/// outside it only the lightest edge that connects it to the tree
///
/// Every vertex starts in the indexed queue at `+∞`; popping one whose key
/// is still infinite starts a new tree, which yields a spanning forest on
/// disconnected graphs. O(E log V).
#[derive(Debug, Default, Clone, Copy)]
pub struct EagerPrim;

impl EagerPrim {
    pub fn new() -> Self {
        EagerPrim
    }
}

impl<W, G> MinimumSpanningTree<W, G> for EagerPrim
where
    W: Float + Debug + Copy,
    G: WeightedGraph<W>,
{
    fn name(&self) -> &'static str {
        "EagerPrim"
    }

    fn compute_mst(&self, graph: &G) -> Result<MstResult<W>> {
        let n = graph.vertex_count();
        let mut edge_to = vec![None; n];
        let mut dist_to = vec![W::infinity(); n];
        let mut in_tree = vec![false; n];

        let mut queue = IndexMinPQ::new(n);
        for v in 0..n {
            queue.insert(v, W::infinity())?;
        }
        if n > 0 {
            dist_to[0] = W::zero();
            queue.change(0, W::zero())?;
        }

        while !queue.is_empty() {
            let v = queue.del_min()?;
            in_tree[v] = true;
            if dist_to[v] == W::infinity() {
                debug!("eager prim: vertex {} unreachable, starting a new tree", v);
            }

            for edge in graph.edges_from(v) {
                let w = edge.other(v)?;
                if in_tree[w] || edge.weight() >= dist_to[w] {
                    continue;
                }
                dist_to[w] = edge.weight();
                edge_to[w] = Some(edge);
                if queue.contains(w) {
                    queue.change(w, edge.weight())?;
                } else {
                    queue.insert(w, edge.weight())?;
                }
            }
        }

        Ok(MstResult::new(edge_to.into_iter().flatten().collect()))
    }
}
