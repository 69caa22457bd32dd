use std::fmt::Debug;
use log::debug;
use num_traits::Float;

use crate::algorithm::cycle::DirectedCycle;
use crate::graph::WeightedDigraph;
use crate::{Error, Result};

/// Depth-first vertex orderings of a digraph
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl DepthFirstOrder {
    /// Runs a DFS from every unvisited vertex in index order
    pub fn new<W, G>(graph: &G) -> Self
    where
        W: Float + Debug + Copy,
        G: WeightedDigraph<W>,
    {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut preorder = Vec::with_capacity(n);
        let mut postorder = Vec::with_capacity(n);

        for start in 0..n {
            if marked[start] {
                continue;
            }
            marked[start] = true;
            preorder.push(start);
            let mut stack = vec![(start, graph.edges_from(start))];

            while let Some(frame) = stack.last_mut() {
                let v = frame.0;
                match frame.1.next() {
                    Some(edge) => {
                        let w = edge.to();
                        if !marked[w] {
                            marked[w] = true;
                            preorder.push(w);
                            stack.push((w, graph.edges_from(w)));
                        }
                    }
                    None => {
                        postorder.push(v);
                        stack.pop();
                    }
                }
            }
        }

        DepthFirstOrder {
            preorder,
            postorder,
        }
    }

    /// Vertices in the order the DFS first reached them
    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    /// Vertices in the order the DFS finished them
    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    pub fn reverse_postorder(&self) -> Vec<usize> {
        self.postorder.iter().rev().copied().collect()
    }
}

/// Topological order of a DAG: every edge points from an earlier vertex to
/// a later one
#[derive(Debug, Clone)]
pub struct Topological {
    order: Vec<usize>,
    rank: Vec<usize>,
}

impl Topological {
    /// Fails with [`Error::NotAcyclic`] carrying a cycle if `graph` has one
    pub fn new<W, G>(graph: &G) -> Result<Self>
    where
        W: Float + Debug + Copy,
        G: WeightedDigraph<W>,
    {
        let finder = DirectedCycle::<W>::new(graph);
        if let Some(cycle) = finder.cycle() {
            debug!("topological sort rejected, cycle {:?}", cycle);
            return Err(Error::NotAcyclic(cycle));
        }

        let order = DepthFirstOrder::new::<W, G>(graph).reverse_postorder();
        let mut rank = vec![0; order.len()];
        for (i, &v) in order.iter().enumerate() {
            rank[v] = i;
        }
        Ok(Topological { order, rank })
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Position of `vertex` in the order
    pub fn rank(&self, vertex: usize) -> Result<usize> {
        self.rank
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }
}
