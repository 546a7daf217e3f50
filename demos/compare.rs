use colored::*;
use std::time::Instant;

use fast_apsp::graph::generators::{random_graph, random_graph_without_negative_cycle};
use fast_apsp::graph::{DirectedGraph, Graph, MutableGraph};
use fast_apsp::{exists_negative_cycle, floyd_warshall_apsp, johnson_apsp};

fn main() {
    println!("{}", "Johnson vs Floyd-Warshall".green().bold());

    small_example();
    negative_cycle_survey();
    timing_comparison();
}

/// Prints both matrices for a small graph with a negative edge
fn small_example() {
    println!("\n{}", "Small graph with a negative edge".yellow().bold());

    let mut graph = DirectedGraph::new(5);
    for &(u, v, w) in &[(0, 1, 1i64), (0, 2, 4), (2, 1, -4), (1, 3, 1), (3, 4, 1)] {
        graph.add_edge(u, v, w).expect("edge endpoints are in range");
    }

    let matrix = johnson_apsp(&graph);
    for row in matrix.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&d| if d == i64::MAX { "inf".dimmed().to_string() } else { format!("{:>3}", d) })
            .collect();
        println!("  {}", cells.join(" "));
    }

    if matrix == floyd_warshall_apsp(&graph) {
        println!("{}", "Floyd-Warshall agrees".green());
    } else {
        println!("{}", "Floyd-Warshall disagrees".red().bold());
    }
}

/// How often random graphs with weights in -1..=100 contain a negative cycle
fn negative_cycle_survey() {
    println!("\n{}", "Negative cycles in random graphs".yellow().bold());

    let total = 20;
    let cyclic = (0..total)
        .filter(|&seed| exists_negative_cycle(&random_graph(100, 0.15, -1i64..=100, seed)))
        .count();
    println!("  {} of {} graphs contain a negative cycle", cyclic.to_string().cyan(), total);
}

fn timing_comparison() {
    println!("\n{}", "Timing on sparse graphs".yellow().bold());

    for &(n, p) in &[(200usize, 0.05f64), (400, 0.02)] {
        let graph = random_graph_without_negative_cycle(n, p, 100, 50, n as u64);

        let start = Instant::now();
        let johnson = johnson_apsp(&graph);
        let johnson_time = start.elapsed();

        let start = Instant::now();
        let floyd = floyd_warshall_apsp(&graph);
        let floyd_time = start.elapsed();

        let verdict = if johnson == floyd { "match".green() } else { "MISMATCH".red().bold() };
        println!(
            "  n = {:<4} m = {:<6} Johnson {:>10?}  Floyd-Warshall {:>10?}  {}",
            n,
            graph.edge_count(),
            johnson_time,
            floyd_time,
            verdict
        );
    }
}
