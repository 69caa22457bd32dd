use std::fmt;
use std::fmt::Debug;
use num_traits::Float;

use crate::{Error, Result};

/// A weighted edge pointing from one vertex to another
///
/// Edges are plain values: algorithms keep copies of them in their
/// `edge_to` trees and never mutate the graph's own edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge<W> {
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new directed edge `from -> to`
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    /// Tail vertex
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head vertex
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<W> fmt::Display for DirectedEdge<W>
where
    W: Float + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.weight.to_f64().unwrap_or(f64::NAN);
        write!(f, "{}->{} {:.2}", self.from, self.to, weight)
    }
}

/// An undirected weighted edge
///
/// The endpoints are unordered, so callers get at them with [`Edge::either`]
/// and [`Edge::other`] rather than `from`/`to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<W> {
    v: usize,
    w: usize,
    weight: W,
}

impl<W> Edge<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new undirected edge between `v` and `w`
    pub fn new(v: usize, w: usize, weight: W) -> Self {
        Edge { v, w, weight }
    }

    /// Returns one of the endpoints
    pub fn either(&self) -> usize {
        self.v
    }

    /// Returns the endpoint that is not `vertex`
    pub fn other(&self, vertex: usize) -> Result<usize> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            Err(Error::NotAnEndpoint {
                vertex,
                either: self.v,
                other: self.w,
            })
        }
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Both endpoints as `(either, other)`
    pub fn endpoints(&self) -> (usize, usize) {
        (self.v, self.w)
    }
}

impl<W> fmt::Display for Edge<W>
where
    W: Float + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.weight.to_f64().unwrap_or(f64::NAN);
        write!(f, "{}-{} {:.2}", self.v, self.w, weight)
    }
}
