use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{DirectedEdge, WeightedDigraph};

/// Depth-first directed cycle finder
///
/// Each vertex moves `unvisited -> on stack -> done`. Meeting an edge into a
/// vertex that is still on the stack closes a cycle, which is rebuilt from
/// the tree edges leading back to it. The search stops at the first cycle
/// found, which is not necessarily the shortest one.
///
/// The DFS keeps its own frame stack, so deep graphs cannot overflow the
/// thread stack.
#[derive(Debug, Clone)]
pub struct DirectedCycle<W>
where
    W: Float + Debug + Copy,
{
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> DirectedCycle<W>
where
    W: Float + Debug + Copy,
{
    /// Searches the whole digraph, one DFS per unvisited vertex
    pub fn new<G>(graph: &G) -> Self
    where
        G: WeightedDigraph<W>,
    {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_into: Vec<Option<DirectedEdge<W>>> = vec![None; n];

        for start in 0..n {
            if marked[start] {
                continue;
            }
            marked[start] = true;
            on_stack[start] = true;
            let mut stack = vec![(start, graph.edges_from(start))];

            while let Some(frame) = stack.last_mut() {
                let v = frame.0;
                match frame.1.next() {
                    Some(edge) => {
                        let w = edge.to();
                        if !marked[w] {
                            marked[w] = true;
                            on_stack[w] = true;
                            edge_into[w] = Some(edge);
                            stack.push((w, graph.edges_from(w)));
                        } else if on_stack[w] {
                            return DirectedCycle {
                                cycle: Some(trace_cycle(edge, &edge_into)),
                            };
                        }
                    }
                    None => {
                        on_stack[v] = false;
                        stack.pop();
                    }
                }
            }
        }

        DirectedCycle { cycle: None }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Vertices of the cycle in edge order; the first equals the last
    pub fn cycle(&self) -> Option<Vec<usize>> {
        self.cycle.as_ref().map(|edges| cycle_vertices(edges))
    }

    /// Edges of the cycle in traversal order
    pub fn cycle_edges(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }

    /// Total weight of the cycle
    pub fn cycle_weight(&self) -> Option<W> {
        self.cycle
            .as_ref()
            .map(|edges| edges.iter().fold(W::zero(), |acc, e| acc + e.weight()))
    }
}

/// Walks the tree edges back from the tail of `closing` to its head
fn trace_cycle<W>(closing: DirectedEdge<W>, edge_into: &[Option<DirectedEdge<W>>]) -> Vec<DirectedEdge<W>>
where
    W: Float + Debug + Copy,
{
    let mut edges = vec![closing];
    let mut x = closing.from();
    while x != closing.to() {
        match edge_into[x] {
            Some(edge) => {
                edges.push(edge);
                x = edge.from();
            }
            None => break,
        }
    }
    edges.reverse();
    edges
}

/// `[from(e0), to(e0), to(e1), ...]`
pub(crate) fn cycle_vertices<W>(edges: &[DirectedEdge<W>]) -> Vec<usize>
where
    W: Float + Debug + Copy,
{
    edges
        .first()
        .map(|first| first.from())
        .into_iter()
        .chain(edges.iter().map(|e| e.to()))
        .collect()
}
