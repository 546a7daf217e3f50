use std::time::{Duration, Instant};

use fast_apsp::algorithm::AllPairsShortestPaths;
use fast_apsp::graph::generators::random_graph_without_negative_cycle;
use fast_apsp::graph::{DirectedGraph, Graph};
use fast_apsp::{DistanceMatrix, FloydWarshall, Johnson};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &DirectedGraph<i64>) -> (Duration, DistanceMatrix<i64>)
where
    A: AllPairsShortestPaths<i64, DirectedGraph<i64>>,
{
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_all_pairs(graph);
    let duration = start.elapsed();

    let reachable = result
        .rows()
        .map(|row| row.iter().filter(|d| **d != i64::MAX).count())
        .sum::<usize>();
    println!("  - Found {} reachable pairs in {:?}", reachable, duration);

    (duration, result)
}

fn main() {
    env_logger::init();

    // (vertices, edge probability): sparse graphs are where Johnson should win
    let graph_sizes = vec![(100, 0.1), (200, 0.05), (400, 0.02), (800, 0.01)];

    println!("=====================================================");
    println!("Benchmark: Johnson vs Floyd-Warshall");
    println!("=====================================================");

    let johnson = Johnson::new();
    let johnson_parallel = Johnson::new().with_parallel(true);
    let floyd_warshall = FloydWarshall::new();

    let mut results = Vec::new();

    for (seed, &(size, p)) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices (p = {})...", size, p);
        let graph = random_graph_without_negative_cycle(size, p, 100, 50, seed as u64);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (johnson_time, johnson_result) = benchmark_algorithm(&johnson, &graph);
        let (parallel_time, parallel_result) = benchmark_algorithm(&johnson_parallel, &graph);
        let (floyd_time, floyd_result) = benchmark_algorithm(&floyd_warshall, &graph);

        if johnson_result != floyd_result || johnson_result != parallel_result {
            println!("WARNING: algorithms disagree on graph with {} vertices", size);
        }

        let speedup = floyd_time.as_secs_f64() / johnson_time.as_secs_f64();
        println!("Speedup - Johnson vs Floyd-Warshall: {:.2}x", speedup);

        results.push((size, johnson_time, parallel_time, floyd_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Johnson (ms)", "Johnson-Par (ms)", "Floyd (ms)", "SpeedUp"
    );
    println!("-----------------------------------------------------");

    for (size, johnson_time, parallel_time, floyd_time) in &results {
        let speedup = floyd_time.as_secs_f64() / johnson_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15} | {:<10.2}",
            size,
            johnson_time.as_millis(),
            parallel_time.as_millis(),
            floyd_time.as_millis(),
            speedup
        );
    }
}
