use std::fmt::Debug;
use log::debug;
use num_traits::Float;

use crate::graph::{DirectedEdge, WeightedDigraph};
use crate::{Error, Result};

/// All-pairs shortest paths by dynamic programming over intermediate vertices
///
/// O(V³) time, O(V²) space. Negative weights are fine; a negative cycle
/// anywhere in the digraph shows up as a negative diagonal entry and is
/// reported through [`FloydWarshall::has_negative_cycle`]. Queries on such
/// a digraph fail with [`Error::NegativeClosedWalk`] naming the vertex whose
/// diagonal went negative.
#[derive(Debug, Clone)]
pub struct FloydWarshall<W>
where
    W: Float + Debug + Copy,
{
    dist: Vec<Vec<W>>,
    edge_to: Vec<Vec<Option<DirectedEdge<W>>>>,
    /// Vertex whose closed walk was found to have negative weight
    negative_cycle: Option<usize>,
}

impl<W> FloydWarshall<W>
where
    W: Float + Debug + Copy,
{
    pub fn new<G>(graph: &G) -> Self
    where
        G: WeightedDigraph<W>,
    {
        let n = graph.vertex_count();
        let mut dist = vec![vec![W::infinity(); n]; n];
        let mut edge_to = vec![vec![None; n]; n];

        // Parallel edges: keep the lightest
        for edge in graph.edges() {
            let (v, w) = (edge.from(), edge.to());
            if edge.weight() < dist[v][w] {
                dist[v][w] = edge.weight();
                edge_to[v][w] = Some(edge);
            }
        }
        for v in 0..n {
            if dist[v][v] >= W::zero() {
                dist[v][v] = W::zero();
                edge_to[v][v] = None;
            }
        }

        // A negative self-loop is already a negative cycle
        let mut negative_cycle = (0..n).find(|&v| dist[v][v] < W::zero());
        'outer: for k in 0..n {
            if negative_cycle.is_some() {
                break;
            }
            for i in 0..n {
                if edge_to[i][k].is_none() {
                    continue;
                }
                for j in 0..n {
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                        edge_to[i][j] = edge_to[k][j];
                    }
                }
                if dist[i][i] < W::zero() {
                    debug!("floyd-warshall: negative cycle through {}", i);
                    negative_cycle = Some(i);
                    break 'outer;
                }
            }
        }

        FloydWarshall {
            dist,
            edge_to,
            negative_cycle,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// A vertex with a negative-weight closed walk, if the digraph has a
    /// negative cycle
    pub fn negative_cycle_vertex(&self) -> Option<usize> {
        self.negative_cycle
    }

    /// Shortest distance from `u` to `v` (`+∞` if unreachable)
    pub fn dist(&self, u: usize, v: usize) -> Result<W> {
        self.check(u, v)?;
        Ok(self.dist[u][v])
    }

    pub fn has_path(&self, u: usize, v: usize) -> Result<bool> {
        Ok(self.dist(u, v)? < W::infinity())
    }

    /// Edges of a shortest path from `u` to `v`, `Ok(None)` if unreachable
    pub fn path(&self, u: usize, v: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        if !self.has_path(u, v)? {
            return Ok(None);
        }
        let mut path = Vec::new();
        let mut edge = self.edge_to[u][v];
        while let Some(e) = edge {
            path.push(e);
            if path.len() > self.vertex_count() {
                return Ok(None);
            }
            edge = self.edge_to[u][e.from()];
        }
        path.reverse();
        Ok(Some(path))
    }

    fn check(&self, u: usize, v: usize) -> Result<()> {
        let n = self.vertex_count();
        if u >= n {
            return Err(Error::InvalidVertex(u));
        }
        if v >= n {
            return Err(Error::InvalidVertex(v));
        }
        if let Some(vertex) = self.negative_cycle {
            return Err(Error::NegativeClosedWalk { vertex });
        }
        Ok(())
    }
}
