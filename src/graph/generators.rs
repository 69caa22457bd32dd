use crate::graph::{EdgeWeightedDigraph, EdgeWeightedGraph, MutableGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::ops::Range;

/// Generates a random digraph with `n` vertices and `m` edges
/// Weights are drawn uniformly from `weights`; self-loops are skipped
pub fn generate_random_digraph<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    weights: Range<f64>,
) -> Result<EdgeWeightedDigraph<OrderedFloat<f64>>> {
    let mut graph = EdgeWeightedDigraph::with_vertices(n);
    if n < 2 {
        return Ok(graph);
    }

    let mut added = 0;
    while added < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(weights.clone()));
            graph.add_edge(u, v, weight)?;
            added += 1;
        }
    }

    Ok(graph)
}

/// Generates a random DAG: every edge points from a lower to a higher vertex
/// index, so `0..n` is a topological order
pub fn generate_random_dag<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    weights: Range<f64>,
) -> Result<EdgeWeightedDigraph<OrderedFloat<f64>>> {
    let mut graph = EdgeWeightedDigraph::with_vertices(n);
    if n < 2 {
        return Ok(graph);
    }

    for _ in 0..m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b {
            continue;
        }
        let (from, to) = if a < b { (a, b) } else { (b, a) };
        let weight = OrderedFloat(rng.gen_range(weights.clone()));
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}

/// Generates a 2D grid digraph with unit-weight edges in both directions
/// between horizontal and vertical neighbours
pub fn generate_grid(width: usize, height: usize) -> Result<EdgeWeightedDigraph<OrderedFloat<f64>>> {
    let mut graph = EdgeWeightedDigraph::with_vertices(width * height);
    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), OrderedFloat(1.0))?;
                graph.add_edge(index(x + 1, y), current, OrderedFloat(1.0))?;
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), OrderedFloat(1.0))?;
                graph.add_edge(index(x, y + 1), current, OrderedFloat(1.0))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a connected undirected graph: a random spanning tree plus
/// `extra` random edges (parallel edges allowed)
pub fn generate_connected_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    extra: usize,
    weights: Range<f64>,
) -> Result<EdgeWeightedGraph<OrderedFloat<f64>>> {
    let mut graph = EdgeWeightedGraph::with_vertices(n);
    if n < 2 {
        return Ok(graph);
    }

    // Attach each vertex to a random earlier one
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    for i in 1..n {
        let parent = order[rng.gen_range(0..i)];
        let weight = OrderedFloat(rng.gen_range(weights.clone()));
        graph.add_edge(order[i], parent, weight)?;
    }

    for _ in 0..extra {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(weights.clone()));
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}
