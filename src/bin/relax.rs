use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use graph_relax::algorithm::{
    AcyclicPaths, BellmanFord, Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
use graph_relax::applications::{find_arbitrage, parse_jobs, parse_rates, schedule};
use graph_relax::graph::io::read_edge_list;
use graph_relax::mst::{EagerPrim, Kruskal, LazyPrim, MinimumSpanningTree, MstResult};
use log::info;
use ordered_float::OrderedFloat;
use serde::Serialize;

type Weight = OrderedFloat<f64>;

const USAGE: &str = "usage: relax <dijkstra|acyclic-sp|acyclic-lp|bellman-ford|eager-prim|lazy-prim|kruskal|cpm|arbitrage> <file> [source] [--json]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Dijkstra,
    AcyclicShortest,
    AcyclicLongest,
    BellmanFord,
    EagerPrim,
    LazyPrim,
    Kruskal,
    CriticalPath,
    Arbitrage,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Command::Dijkstra),
            "acyclic-sp" => Ok(Command::AcyclicShortest),
            "acyclic-lp" => Ok(Command::AcyclicLongest),
            "bellman-ford" => Ok(Command::BellmanFord),
            "eager-prim" => Ok(Command::EagerPrim),
            "lazy-prim" => Ok(Command::LazyPrim),
            "kruskal" => Ok(Command::Kruskal),
            "cpm" => Ok(Command::CriticalPath),
            "arbitrage" => Ok(Command::Arbitrage),
            other => Err(format!("unknown algorithm {:?}\n{}", other, USAGE)),
        }
    }
}

/// Command line configuration
#[derive(Debug, Clone)]
struct RunConfig {
    command: Command,
    input: PathBuf,
    source: usize,
    json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            command: Command::Dijkstra,
            input: PathBuf::new(),
            source: 0,
            json: false,
        }
    }
}

impl RunConfig {
    fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--json" {
                config.json = true;
            } else {
                positional.push(arg.as_str());
            }
        }

        match positional.as_slice() {
            [command, input, rest @ ..] if rest.len() <= 1 => {
                config.command = command.parse()?;
                config.input = PathBuf::from(*input);
                if let Some(source) = rest.first() {
                    config.source = source
                        .parse()
                        .map_err(|_| format!("invalid source vertex {:?}", source))?;
                }
                Ok(config)
            }
            _ => Err(USAGE.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct PathReport {
    vertex: usize,
    distance: Option<f64>,
    path: Vec<(usize, usize, f64)>,
}

#[derive(Debug, Serialize)]
struct MstReport {
    algorithm: &'static str,
    weight: f64,
    edges: Vec<(usize, usize, f64)>,
}

fn path_reports(result: &ShortestPathResult<Weight>) -> graph_relax::Result<Vec<PathReport>> {
    (0..result.vertex_count())
        .map(|v| {
            let path = result.path_to(v)?;
            Ok(PathReport {
                vertex: v,
                distance: path.as_ref().map(|_| result.distances()[v].into_inner()),
                path: path
                    .unwrap_or_default()
                    .iter()
                    .map(|e| (e.from(), e.to(), e.weight().into_inner()))
                    .collect(),
            })
        })
        .collect()
}

fn print_paths(config: &RunConfig, reports: &[PathReport]) -> Result<(), Box<dyn std::error::Error>> {
    if config.json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }
    for report in reports {
        match report.distance {
            Some(distance) => {
                let hops: Vec<String> = report
                    .path
                    .iter()
                    .map(|(from, to, w)| format!("{}->{} {:.2}", from, to, w))
                    .collect();
                println!(
                    "{} to {} ({:.2}): {}",
                    config.source,
                    report.vertex,
                    distance,
                    hops.join("  ")
                );
            }
            None => println!("{} to {}: no path", config.source, report.vertex),
        }
    }
    Ok(())
}

fn run_paths<A>(config: &RunConfig, algorithm: &A) -> Result<(), Box<dyn std::error::Error>>
where
    A: ShortestPathAlgorithm<Weight, graph_relax::EdgeWeightedDigraph<Weight>>,
{
    let graph = read_edge_list(&config.input)?.to_digraph::<Weight>()?;
    info!("running {} from {}", algorithm.name(), config.source);
    let result = algorithm.compute_shortest_paths(&graph, config.source)?;
    print_paths(config, &path_reports(&result)?)
}

fn run_mst<A>(config: &RunConfig, algorithm: &A) -> Result<(), Box<dyn std::error::Error>>
where
    A: MinimumSpanningTree<Weight, graph_relax::EdgeWeightedGraph<Weight>>,
{
    let graph = read_edge_list(&config.input)?.to_graph::<Weight>()?;
    info!("running {}", algorithm.name());
    let mst: MstResult<Weight> = algorithm.compute_mst(&graph)?;
    let report = MstReport {
        algorithm: algorithm.name(),
        weight: mst.weight().into_inner(),
        edges: mst
            .edges()
            .iter()
            .map(|e| {
                let (v, w) = e.endpoints();
                (v, w, e.weight().into_inner())
            })
            .collect(),
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (v, w, weight) in &report.edges {
            println!("{}-{} {:.5}", v, w, weight);
        }
        println!("{:.5}", report.weight);
    }
    Ok(())
}

fn run_bellman_ford(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let graph = read_edge_list(&config.input)?.to_digraph::<Weight>()?;
    let result = BellmanFord::new().run(&graph, config.source)?;

    if let Some(cycle) = result.negative_cycle() {
        let edges: Vec<(usize, usize, f64)> = cycle
            .iter()
            .map(|e| (e.from(), e.to(), e.weight().into_inner()))
            .collect();
        if config.json {
            println!("{}", serde_json::json!({ "negative_cycle": edges }));
        } else {
            println!("negative cycle reachable from {}:", config.source);
            for (from, to, w) in edges {
                println!("  {}->{} {:.2}", from, to, w);
            }
        }
        return Ok(());
    }

    info!("bellman-ford finished after {} passes", result.passes());
    print_paths(config, &path_reports(result.paths()?)?)
}

fn run_cpm(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let jobs = parse_jobs(&fs::read_to_string(&config.input)?)?;
    let plan = schedule(&jobs)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("Start times:");
        for (job, start) in plan.start_times.iter().enumerate() {
            println!("{:>4}: {:>7.1}", job, start);
        }
        println!("Finish time: {:>7.1}", plan.finish_time);
    }
    Ok(())
}

fn run_arbitrage(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (names, rates) = parse_rates(&fs::read_to_string(&config.input)?)?;
    let cycle = find_arbitrage(&rates)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&cycle)?);
        return Ok(());
    }
    match cycle {
        Some(cycle) => {
            let mut stake = 1000.0;
            for trade in &cycle.trades {
                let next = stake * trade.rate;
                println!(
                    "{:10.5} {} = {:10.5} {}",
                    stake, names[trade.from], next, names[trade.to]
                );
                stake = next;
            }
        }
        None => println!("No arbitrage opportunity"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = RunConfig::from_args(&args)?;
    info!("configuration: {:?}", config);

    match config.command {
        Command::Dijkstra => run_paths(&config, &Dijkstra::new()),
        Command::AcyclicShortest => run_paths(&config, &AcyclicPaths::shortest()),
        Command::AcyclicLongest => run_paths(&config, &AcyclicPaths::longest()),
        Command::BellmanFord => run_bellman_ford(&config),
        Command::EagerPrim => run_mst(&config, &EagerPrim::new()),
        Command::LazyPrim => run_mst(&config, &LazyPrim::new()),
        Command::Kruskal => run_mst(&config, &Kruskal::new()),
        Command::CriticalPath => run_cpm(&config),
        Command::Arbitrage => run_arbitrage(&config),
    }
}
