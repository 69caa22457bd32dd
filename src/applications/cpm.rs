//! Critical path method for parallel precedence-constrained job scheduling
//!
//! Each job `i` of `N` becomes a start vertex `i` and an end vertex `i + N`
//! joined by an edge weighted with its duration. A virtual source `2N`
//! feeds every start vertex and every end vertex feeds a virtual sink
//! `2N + 1`; a constraint "`i` must finish before `j` starts" is the
//! zero-weight edge `i + N -> j`. Longest paths from the source give the
//! earliest start of each job, and the longest path to the sink is the
//! length of the whole schedule.

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::{AcyclicPaths, ShortestPathAlgorithm};
use crate::graph::{EdgeWeightedDigraph, MutableGraph};
use crate::{Error, Result};

/// A job and the jobs that may only start once it has finished
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub duration: f64,
    pub successors: Vec<usize>,
}

impl Job {
    pub fn new(duration: f64, successors: Vec<usize>) -> Self {
        Job {
            duration,
            successors,
        }
    }
}

/// Earliest start time of every job plus the overall finish time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub start_times: Vec<f64>,
    pub finish_time: f64,
}

/// Computes the earliest schedule; a precedence cycle is reported as
/// [`Error::NotAcyclic`]
pub fn schedule(jobs: &[Job]) -> Result<Schedule> {
    let n = jobs.len();
    let source = 2 * n;
    let sink = 2 * n + 1;
    let mut graph = EdgeWeightedDigraph::with_vertices(2 * n + 2);
    // Keeps the sink reachable when there are no jobs
    graph.add_edge(source, sink, OrderedFloat(0.0))?;

    for (i, job) in jobs.iter().enumerate() {
        graph.add_edge(source, i, OrderedFloat(0.0))?;
        graph.add_edge(i, i + n, OrderedFloat(job.duration))?;
        graph.add_edge(i + n, sink, OrderedFloat(0.0))?;
        for &j in &job.successors {
            if j >= n {
                return Err(Error::InvalidVertex(j));
            }
            graph.add_edge(i + n, j, OrderedFloat(0.0))?;
        }
    }

    let paths = AcyclicPaths::longest().compute_shortest_paths(&graph, source)?;
    let start_times = (0..n)
        .map(|i| paths.dist_to(i).map(|d| d.into_inner()))
        .collect::<Result<Vec<_>>>()?;
    let finish_time = paths.dist_to(sink)?.into_inner();

    Ok(Schedule {
        start_times,
        finish_time,
    })
}

/// Parses the job list format: a job count, then one line per job with its
/// duration followed by the indices of its successors
pub fn parse_jobs(text: &str) -> Result<Vec<Job>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let count: usize = match lines.next() {
        Some((line, l)) => l.parse().map_err(|_| Error::Parse {
            line,
            message: format!("invalid job count: {:?}", l),
        })?,
        None => return Ok(Vec::new()),
    };

    let mut jobs = Vec::with_capacity(count);
    for (line, l) in lines.take(count) {
        let mut tokens = l.split_whitespace();
        let duration = tokens
            .next()
            .and_then(|t| t.parse::<f64>().ok())
            .ok_or_else(|| Error::Parse {
                line,
                message: "missing or invalid duration".to_string(),
            })?;
        let successors = tokens
            .map(|t| {
                t.parse::<usize>().map_err(|_| Error::Parse {
                    line,
                    message: format!("invalid successor: {:?}", t),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        jobs.push(Job::new(duration, successors));
    }

    if jobs.len() != count {
        return Err(Error::Parse {
            line: 0,
            message: format!("expected {} jobs, found {}", count, jobs.len()),
        });
    }
    Ok(jobs)
}
