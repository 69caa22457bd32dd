//! Reader for the plain-text edge list format
//!
//! ```text
//! 4          <- number of vertices
//! 4          <- number of edges (informational)
//! 0 1 1.0    <- one `v w weight` line per edge
//! 0 2 4.0
//! 1 2 2.0
//! 2 3 1.0
//! ```
//!
//! Blank lines are skipped. The declared edge count is not authoritative;
//! a mismatch with the lines actually present is logged and ignored.

use std::fmt::Debug;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::warn;
use num_traits::Float;

use crate::graph::{EdgeWeightedDigraph, EdgeWeightedGraph, MutableGraph};
use crate::{Error, Result};

/// A parsed edge list, not yet committed to a graph type
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList {
    pub vertices: usize,
    pub edges: Vec<(usize, usize, f64)>,
    // Source line of each entry in `edges`
    lines: Vec<usize>,
}

impl EdgeList {
    /// Builds a digraph, one edge `v -> w` per line
    pub fn to_digraph<W>(&self) -> Result<EdgeWeightedDigraph<W>>
    where
        W: Float + Debug + Copy,
    {
        let mut graph = EdgeWeightedDigraph::with_vertices(self.vertices);
        for (&(v, w, weight), &line) in self.edges.iter().zip(&self.lines) {
            graph.add_edge(v, w, convert_weight(weight, line)?)?;
        }
        Ok(graph)
    }

    /// Builds an undirected graph, one edge `v - w` per line
    pub fn to_graph<W>(&self) -> Result<EdgeWeightedGraph<W>>
    where
        W: Float + Debug + Copy,
    {
        let mut graph = EdgeWeightedGraph::with_vertices(self.vertices);
        for (&(v, w, weight), &line) in self.edges.iter().zip(&self.lines) {
            graph.add_edge(v, w, convert_weight(weight, line)?)?;
        }
        Ok(graph)
    }
}

impl FromStr for EdgeList {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let vertices = match lines.next() {
            Some((line, l)) => parse_token::<usize>(l, line, "vertex count")?,
            None => {
                return Err(Error::Parse {
                    line: 1,
                    message: "missing vertex count".to_string(),
                })
            }
        };
        let declared = match lines.next() {
            Some((line, l)) => parse_token::<usize>(l, line, "edge count")?,
            None => 0,
        };

        let mut edges = Vec::with_capacity(declared);
        let mut edge_lines = Vec::with_capacity(declared);
        for (line, l) in lines {
            let tokens: Vec<&str> = l.split_whitespace().collect();
            if tokens.len() != 3 {
                return Err(Error::Parse {
                    line,
                    message: format!("expected `v w weight`, got {} fields", tokens.len()),
                });
            }
            let v = parse_token::<usize>(tokens[0], line, "vertex")?;
            let w = parse_token::<usize>(tokens[1], line, "vertex")?;
            let weight = parse_token::<f64>(tokens[2], line, "weight")?;
            if v >= vertices || w >= vertices {
                return Err(Error::Parse {
                    line,
                    message: format!("edge {}-{} outside 0..{}", v, w, vertices),
                });
            }
            edges.push((v, w, weight));
            edge_lines.push(line);
        }

        if edges.len() != declared {
            warn!(
                "edge list declares {} edges but contains {}",
                declared,
                edges.len()
            );
        }

        Ok(EdgeList {
            vertices,
            edges,
            lines: edge_lines,
        })
    }
}

/// Reads and parses an edge list file
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    fs::read_to_string(path)?.parse()
}

fn parse_token<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {}: {:?}", what, token),
    })
}

// Float casts saturate instead of failing, so an overflow shows up as a
// finite weight turning infinite
fn convert_weight<W: Float>(weight: f64, line: usize) -> Result<W> {
    match num_traits::cast::<f64, W>(weight) {
        Some(converted) if converted.is_finite() || !weight.is_finite() => Ok(converted),
        _ => Err(Error::Parse {
            line,
            message: format!("weight {} does not fit the weight type", weight),
        }),
    }
}
