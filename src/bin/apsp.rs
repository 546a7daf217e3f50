use std::env;
use std::fmt::Display;
use std::process;

use fast_apsp::algorithm::AllPairsShortestPaths;
use fast_apsp::graph::{DirectedGraph, Graph};
use fast_apsp::{exists_negative_cycle, FloydWarshall, Johnson, Weight};
use log::info;
use ordered_float::OrderedFloat;
use serde::Serialize;

const USAGE: &str = "usage: apsp <graph-file> [johnson|johnson-par|floyd-warshall] [--float] [--json]";

/// Command line options
#[derive(Debug)]
struct Options {
    path: String,
    algorithm: String,
    float_weights: bool,
    json: bool,
}

impl Options {
    fn from_args(args: &[String]) -> Result<Self, String> {
        let mut positional = Vec::new();
        let mut float_weights = false;
        let mut json = false;

        for arg in args {
            match arg.as_str() {
                "--float" => float_weights = true,
                "--json" => json = true,
                flag if flag.starts_with("--") => return Err(format!("unknown flag {}", flag)),
                value => positional.push(value.to_string()),
            }
        }

        let mut positional = positional.into_iter();
        let path = positional.next().ok_or_else(|| USAGE.to_string())?;
        let algorithm = positional.next().unwrap_or_else(|| "johnson".to_string());
        if positional.next().is_some() {
            return Err(USAGE.to_string());
        }

        Ok(Options {
            path,
            algorithm,
            float_weights,
            json,
        })
    }
}

/// JSON report of one run
#[derive(Debug, Serialize)]
struct ApspReport<W: Serialize> {
    algorithm: &'static str,
    vertices: usize,
    edges: usize,
    negative_cycle: bool,
    /// Row per source; `null` marks an unreachable vertex
    distances: Option<Vec<Vec<Option<W>>>>,
}

fn run_with<W, A>(graph: &DirectedGraph<W>, algorithm: &A, json: bool) -> Result<bool, String>
where
    W: Weight + Display + Serialize,
    A: AllPairsShortestPaths<W, DirectedGraph<W>>,
{
    info!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let negative_cycle = exists_negative_cycle(graph);
    let distances = if negative_cycle {
        None
    } else {
        Some(algorithm.compute_all_pairs(graph))
    };

    if json {
        let report = ApspReport {
            algorithm: algorithm.name(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            negative_cycle,
            distances: distances.as_ref().map(|matrix| matrix.to_options()),
        };
        let output = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", output);
    } else if let Some(matrix) = &distances {
        for row in matrix.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|d| if d.is_infinite() { "inf".to_string() } else { d.to_string() })
                .collect();
            println!("{}", cells.join(" "));
        }
    } else {
        eprintln!("graph contains a negative-weight cycle");
    }

    Ok(!negative_cycle)
}

fn run<W>(options: &Options) -> Result<bool, String>
where
    W: Weight + Display + Serialize,
{
    let graph: DirectedGraph<W> = DirectedGraph::from_file(&options.path).map_err(|e| e.to_string())?;
    match options.algorithm.as_str() {
        "johnson" => run_with(&graph, &Johnson::new(), options.json),
        "johnson-par" => run_with(&graph, &Johnson::new().with_parallel(true), options.json),
        "floyd-warshall" => run_with(&graph, &FloydWarshall::new(), options.json),
        other => Err(format!("unknown algorithm {:?}\n{}", other, USAGE)),
    }
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let outcome = Options::from_args(&args).and_then(|options| {
        if options.float_weights {
            run::<OrderedFloat<f64>>(&options)
        } else {
            run::<i64>(&options)
        }
    });

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}
