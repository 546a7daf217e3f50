use crate::graph::{DirectedGraph, MutableGraph};
use rand::distributions::uniform::SampleUniform;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::ops::RangeInclusive;

use crate::graph::Weight;

/// Generates a random directed graph on `n` vertices.
///
/// Every ordered pair `(i, j)`, self pairs included, receives an edge with
/// probability `p` and a weight drawn uniformly from `weights`. The same seed
/// always produces the same graph.
pub fn random_graph<W>(n: usize, p: f64, weights: RangeInclusive<W>, seed: u64) -> DirectedGraph<W>
where
    W: Weight + SampleUniform,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::new(n);

    for i in 0..n {
        for j in 0..n {
            if rng.gen_bool(p) {
                let weight = rng.gen_range(weights.clone());
                graph
                    .add_edge(i, j, weight)
                    .expect("endpoints are in range by construction");
            }
        }
    }

    graph
}

/// Generates a random graph that may have negative edges but never a negative cycle.
///
/// Each vertex gets a hidden potential `φ(v)` in `0..=max_potential`, and each
/// edge `u -> v` the weight `base + φ(u) - φ(v)` with `base` in `0..=max_weight`.
/// Around any cycle the potentials cancel, so every cycle weighs at least zero.
pub fn random_graph_without_negative_cycle(
    n: usize,
    p: f64,
    max_weight: i64,
    max_potential: i64,
    seed: u64,
) -> DirectedGraph<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let potentials: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=max_potential)).collect();
    let mut graph = DirectedGraph::new(n);

    for i in 0..n {
        for j in 0..n {
            if rng.gen_bool(p) {
                let base = rng.gen_range(0..=max_weight);
                graph
                    .add_edge(i, j, base + potentials[i] - potentials[j])
                    .expect("endpoints are in range by construction");
            }
        }
    }

    graph
}
