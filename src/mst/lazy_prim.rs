use std::fmt::Debug;
use log::trace;
use num_traits::Float;

use crate::data_structures::MinPriorityQueue;
use crate::graph::{Edge, WeightedGraph};
use crate::mst::{MinimumSpanningTree, MstResult};
use crate::Result;

/// Lazy Prim: keeps every crossing edge in an ordinary min priority queue
/// and discards the ones that went stale (both endpoints already in the
/// tree) when they surface
///
/// Restarts from the lowest unvisited vertex so disconnected graphs get a
/// spanning forest. O(E log E).
#[derive(Debug, Default, Clone, Copy)]
pub struct LazyPrim;

impl LazyPrim {
    pub fn new() -> Self {
        LazyPrim
    }
}

impl<W, G> MinimumSpanningTree<W, G> for LazyPrim
where
    W: Float + Debug + Copy + Ord,
    G: WeightedGraph<W>,
{
    fn name(&self) -> &'static str {
        "LazyPrim"
    }

    fn compute_mst(&self, graph: &G) -> Result<MstResult<W>> {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut queue = MinPriorityQueue::new();
        let mut mst = Vec::with_capacity(n.saturating_sub(1));

        for start in 0..n {
            if marked[start] {
                continue;
            }
            visit(graph, start, &mut marked, &mut queue)?;

            while let Some((edge, _)) = queue.pop() {
                let (v, w) = edge.endpoints();
                if marked[v] && marked[w] {
                    trace!("lazy prim: dropping stale edge {}", edge);
                    continue;
                }
                mst.push(edge);
                if !marked[v] {
                    visit(graph, v, &mut marked, &mut queue)?;
                }
                if !marked[w] {
                    visit(graph, w, &mut marked, &mut queue)?;
                }
            }
        }

        Ok(MstResult::new(mst))
    }
}

/// Adds `v` to the tree and queues its edges to vertices still outside it
fn visit<W, G>(
    graph: &G,
    v: usize,
    marked: &mut [bool],
    queue: &mut MinPriorityQueue<Edge<W>, W>,
) -> Result<()>
where
    W: Float + Debug + Copy + Ord,
    G: WeightedGraph<W>,
{
    marked[v] = true;
    for edge in graph.edges_from(v) {
        if !marked[edge.other(v)?] {
            queue.push(edge, edge.weight());
        }
    }
    Ok(())
}
