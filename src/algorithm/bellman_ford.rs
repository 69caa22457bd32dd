use std::collections::VecDeque;
use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::cycle::{cycle_vertices, DirectedCycle};
use crate::algorithm::traits::{validate_source, PathObjective, Relaxation};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, WeightedDigraph};
use crate::{Error, Result};

/// Queue-based Bellman–Ford shortest paths
///
/// Accepts negative weights. Only vertices whose distance changed are
/// re-examined, pass by pass; a pass holds exactly the vertices queued
/// during the previous one. Without a negative cycle reachable from the
/// source the queue drains within `V` passes, so a pass counter above `V`
/// means such a cycle exists. It is then recovered by running
/// [`DirectedCycle`] on the digraph formed by the `edge_to` entries.
///
/// O(V·E) worst case, O(E) best case, O(V) extra space.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

/// Outcome of a Bellman–Ford run
///
/// Distance and path queries are rejected with [`Error::NegativeCycle`]
/// when a negative cycle is reachable from the source; check
/// [`BellmanFordResult::has_negative_cycle`] first.
#[derive(Debug, Clone)]
pub struct BellmanFordResult<W>
where
    W: Float + Debug + Copy,
{
    paths: ShortestPathResult<W>,
    negative_cycle: Option<Vec<DirectedEdge<W>>>,
    passes: usize,
}

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }

    /// Runs the algorithm from `source`
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<BellmanFordResult<W>>
    where
        W: Float + Debug + Copy,
        G: WeightedDigraph<W>,
    {
        validate_source::<W, G>(graph, source)?;

        let n = graph.vertex_count();
        let mut relaxation = Relaxation::new(n, source, PathObjective::Shortest);

        let mut queue = VecDeque::with_capacity(n);
        let mut on_queue = vec![false; n];
        queue.push_back(source);
        on_queue[source] = true;

        // Vertices of the current pass still in the queue, and vertices
        // queued so far for the next one
        let mut remaining_in_pass = 1usize;
        let mut queued_for_next = 0usize;
        let mut pass = 1usize;
        let mut negative_cycle = None;

        loop {
            if pass > n && remaining_in_pass == 0 {
                if let Some(cycle) = find_negative_cycle(n, &relaxation.edge_to)? {
                    debug!(
                        "bellman-ford: negative cycle {:?} reachable from {} after {} passes",
                        cycle_vertices(&cycle),
                        source,
                        pass
                    );
                    negative_cycle = Some(cycle);
                    break;
                }
                warn!("bellman-ford: pass {} exceeds {} but edge_to has no cycle yet", pass, n);
            }

            let v = match queue.pop_front() {
                Some(v) => v,
                None => break,
            };
            on_queue[v] = false;

            if remaining_in_pass == 0 {
                remaining_in_pass = queued_for_next;
                queued_for_next = 0;
                pass += 1;
                trace!("bellman-ford: pass {} over {} vertices", pass, remaining_in_pass);
            }

            for edge in graph.edges_from(v) {
                if relaxation.relax(edge) {
                    let w = edge.to();
                    if !on_queue[w] {
                        queue.push_back(w);
                        on_queue[w] = true;
                        queued_for_next += 1;
                    }
                }
            }
            remaining_in_pass -= 1;
        }

        Ok(BellmanFordResult {
            paths: relaxation.into_result(source),
            negative_cycle,
            passes: pass,
        })
    }
}

/// Looks for a cycle among the `edge_to` entries; any cycle there is negative
fn find_negative_cycle<W>(
    vertex_count: usize,
    edge_to: &[Option<DirectedEdge<W>>],
) -> Result<Option<Vec<DirectedEdge<W>>>>
where
    W: Float + Debug + Copy,
{
    let mut tree = EdgeWeightedDigraph::with_vertices(vertex_count);
    for edge in edge_to.iter().flatten() {
        tree.add_directed_edge(*edge)?;
    }
    let finder = DirectedCycle::new(&tree);
    Ok(finder.cycle_edges().map(|edges| edges.to_vec()))
}

impl<W> BellmanFordResult<W>
where
    W: Float + Debug + Copy,
{
    pub fn source(&self) -> usize {
        self.paths.source()
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// Edges of a negative cycle reachable from the source, in cycle order
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.negative_cycle.as_deref()
    }

    /// Vertices of the negative cycle; the first equals the last
    pub fn negative_cycle_vertices(&self) -> Option<Vec<usize>> {
        self.negative_cycle.as_deref().map(cycle_vertices)
    }

    /// Number of passes the run took
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// The path tree, unless a negative cycle made it meaningless
    pub fn paths(&self) -> Result<&ShortestPathResult<W>> {
        match self.negative_cycle_error() {
            Some(err) => Err(err),
            None => Ok(&self.paths),
        }
    }

    pub fn into_paths(self) -> Result<ShortestPathResult<W>> {
        match self.negative_cycle_error() {
            Some(err) => Err(err),
            None => Ok(self.paths),
        }
    }

    pub fn dist_to(&self, vertex: usize) -> Result<W> {
        self.paths()?.dist_to(vertex)
    }

    pub fn has_path_to(&self, vertex: usize) -> Result<bool> {
        self.paths()?.has_path_to(vertex)
    }

    pub fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        self.paths()?.path_to(vertex)
    }

    fn negative_cycle_error(&self) -> Option<Error> {
        self.negative_cycle_vertices().map(|cycle| Error::NegativeCycle {
            origin: self.paths.source(),
            cycle,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Debug + Copy,
    G: WeightedDigraph<W>,
{
    fn name(&self) -> &'static str {
        "BellmanFord"
    }

    /// Reports a reachable negative cycle as [`Error::NegativeCycle`]
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.run(graph, source)?.into_paths()
    }
}
