//! Currency arbitrage as negative cycle detection
//!
//! An exchange table becomes a complete digraph with edge `i -> j` weighted
//! `-ln(rate[i][j])`. A cycle whose rates multiply to more than 1 has a
//! negative total weight, so any negative cycle Bellman–Ford finds is a
//! profitable sequence of trades. It is not necessarily the best one.

use log::debug;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::BellmanFord;
use crate::graph::{EdgeWeightedDigraph, MutableGraph};
use crate::{Error, Result};

/// One conversion along an arbitrage cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    pub from: usize,
    pub to: usize,
    pub rate: f64,
}

/// A profitable cycle of trades
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageCycle {
    pub trades: Vec<Trade>,
    /// Product of the rates along the cycle, greater than 1
    pub gain: f64,
}

impl ArbitrageCycle {
    /// Currencies visited, starting and ending at the same one
    pub fn currencies(&self) -> Vec<usize> {
        self.trades
            .first()
            .map(|t| t.from)
            .into_iter()
            .chain(self.trades.iter().map(|t| t.to))
            .collect()
    }

    /// Amount held after running `stake` once around the cycle
    pub fn convert(&self, stake: f64) -> f64 {
        self.trades.iter().fold(stake, |amount, t| amount * t.rate)
    }
}

/// Looks for an arbitrage opportunity in a square table of positive rates,
/// where `rates[i][j]` is the units of currency `j` one unit of `i` buys
pub fn find_arbitrage(rates: &[Vec<f64>]) -> Result<Option<ArbitrageCycle>> {
    let n = rates.len();
    let mut graph = EdgeWeightedDigraph::with_vertices(n);
    for (i, row) in rates.iter().enumerate() {
        if row.len() != n {
            return Err(Error::RaggedTable {
                row: i,
                found: row.len(),
                expected: n,
            });
        }
        for (j, &rate) in row.iter().enumerate() {
            if i == j {
                continue;
            }
            if !(rate > 0.0) {
                return Err(Error::InvalidEdge(i, j));
            }
            graph.add_edge(i, j, OrderedFloat(-rate.ln()))?;
        }
    }
    if n == 0 {
        return Ok(None);
    }

    let result = BellmanFord::new().run(&graph, 0)?;
    let cycle = match result.negative_cycle() {
        Some(cycle) => cycle,
        None => return Ok(None),
    };

    let trades: Vec<Trade> = cycle
        .iter()
        .map(|e| Trade {
            from: e.from(),
            to: e.to(),
            rate: (-e.weight().into_inner()).exp(),
        })
        .collect();
    let gain: f64 = trades.iter().map(|t| t.rate).product();
    debug!("arbitrage: cycle of {} trades with gain {}", trades.len(), gain);

    Ok(Some(ArbitrageCycle { trades, gain }))
}

/// Parses a rate table: a currency count, then one line per currency with
/// its name followed by its rate to every currency (itself included)
pub fn parse_rates(text: &str) -> Result<(Vec<String>, Vec<Vec<f64>>)> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let count: usize = match lines.next() {
        Some((line, l)) => l.parse().map_err(|_| Error::Parse {
            line,
            message: format!("invalid currency count: {:?}", l),
        })?,
        None => return Ok((Vec::new(), Vec::new())),
    };

    let mut names = Vec::with_capacity(count);
    let mut rates = Vec::with_capacity(count);
    for (line, l) in lines.take(count) {
        let mut tokens = l.split_whitespace();
        let name = tokens.next().unwrap_or_default().to_string();
        let row = tokens
            .map(|t| {
                t.parse::<f64>().map_err(|_| Error::Parse {
                    line,
                    message: format!("invalid rate: {:?}", t),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if row.len() != count {
            return Err(Error::Parse {
                line,
                message: format!("expected {} rates, found {}", count, row.len()),
            });
        }
        names.push(name);
        rates.push(row);
    }

    if rates.len() != count {
        return Err(Error::Parse {
            line: 0,
            message: format!("expected {} currencies, found {}", count, rates.len()),
        });
    }
    Ok((names, rates))
}
