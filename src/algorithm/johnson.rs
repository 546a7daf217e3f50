//! Johnson's all-pairs shortest paths.
//!
//! 1. Bellman-Ford from a virtual super-source gives a potential `h(v)` per vertex.
//! 2. Every edge `(u, v, w)` is reweighted to `w + h(u) - h(v)`, which is
//!    non-negative when the graph has no negative cycle.
//! 3. Dijkstra runs from every vertex on the reweighted graph.
//! 4. Distances are shifted back: `d(r, v) = d'(r, v) + h(v) - h(r)`.
//!
//! Step 3 dominates at O(n·m·log n). Its runs are independent of each other,
//! so [`Johnson::with_parallel`] spreads them over the rayon thread pool.

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::algorithm::bellman_ford::super_source_bellman_ford;
use crate::algorithm::dijkstra::dijkstra;
use crate::algorithm::{AllPairsShortestPaths, DistanceMatrix};
use crate::graph::{checked_shift, shift_finite, Graph, Weight};
use crate::{Error, Result};

/// Reweighted copy of a graph together with the potentials that produced it
#[derive(Debug)]
struct Reweighted<W> {
    /// `h(v)`: super-source distance of each vertex
    potentials: Vec<W>,

    /// Outgoing `(target, w + h(u) - h(v))` lists, indexed by source.
    /// Values here are plain weights: the maximum value is a usable edge.
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> Reweighted<W>
where
    W: Weight,
{
    fn new<G: Graph<W>>(graph: &G, potentials: Vec<W>) -> Self {
        let adjacency = (0..graph.vertex_count())
            .map(|u| {
                graph
                    .neighbours(u)
                    .filter_map(|(v, weight)| {
                        // Infinite edges, and edges whose reweighted value does
                        // not fit in W, are left out
                        match shift_finite(weight, potentials[u], potentials[v]) {
                            Some(reweighted) => Some((v, reweighted)),
                            None => {
                                trace!("Dropping edge {} -> {} of weight {:?}", u, v, weight);
                                None
                            }
                        }
                    })
                    .collect()
            })
            .collect();

        Reweighted {
            potentials,
            adjacency,
        }
    }

    /// Shortest distances from `source` in the original weights
    fn shortest_row(&self, source: usize) -> Vec<W> {
        let h_source = self.potentials[source];
        dijkstra(&self.adjacency, source)
            .into_iter()
            .zip(&self.potentials)
            .map(|(reweighted, &h_target)| {
                reweighted
                    .and_then(|d| checked_shift(d, h_target, h_source))
                    .unwrap_or_else(W::infinity)
            })
            .collect()
    }
}

/// Johnson's algorithm, sequential by default
#[derive(Debug, Default, Clone, Copy)]
pub struct Johnson {
    /// Run the per-source Dijkstra passes on the rayon thread pool
    parallel: bool,
}

impl Johnson {
    /// Create a new Johnson algorithm instance with default settings
    pub fn new() -> Self {
        Johnson { parallel: false }
    }

    /// Enable or disable parallel per-source computation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns true if per-source passes run in parallel
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn all_rows<W: Weight>(&self, reweighted: &Reweighted<W>) -> DistanceMatrix<W> {
        let n = reweighted.adjacency.len();
        let rows: Vec<Vec<W>> = if self.parallel {
            (0..n)
                .into_par_iter()
                .map(|source| reweighted.shortest_row(source))
                .collect()
        } else {
            (0..n).map(|source| reweighted.shortest_row(source)).collect()
        };
        DistanceMatrix::from_rows(rows)
    }
}

impl<W, G> AllPairsShortestPaths<W, G> for Johnson
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        if self.parallel {
            "Johnson (parallel)"
        } else {
            "Johnson"
        }
    }

    fn compute_all_pairs(&self, graph: &G) -> DistanceMatrix<W> {
        let potentials = super_source_bellman_ford(graph);
        if potentials.negative_cycle {
            warn!("Johnson called on a graph with a negative cycle; distances are unspecified");
        }

        let reweighted = Reweighted::new(graph, potentials.distances);
        debug!(
            "Johnson reweighted {} edges over {} vertices (parallel: {})",
            graph.edge_count(),
            graph.vertex_count(),
            self.parallel
        );
        self.all_rows(&reweighted)
    }

    fn compute_checked(&self, graph: &G) -> Result<DistanceMatrix<W>> {
        // The potential pass already answers the negative cycle question
        let potentials = super_source_bellman_ford(graph);
        if potentials.negative_cycle {
            return Err(Error::NegativeCycle);
        }
        Ok(self.all_rows(&Reweighted::new(graph, potentials.distances)))
    }
}

/// Computes all-pairs shortest distances with Johnson's algorithm.
///
/// The graph must not contain a negative cycle; check with
/// [`exists_negative_cycle`](crate::exists_negative_cycle) first. The result
/// equals [`floyd_warshall_apsp`](crate::floyd_warshall_apsp) up to
/// floating-point rounding (exactly, for integer weights) on every graph
/// where both are defined.
pub fn johnson_apsp<W, G>(graph: &G) -> DistanceMatrix<W>
where
    W: Weight,
    G: Graph<W>,
{
    Johnson::new().compute_all_pairs(graph)
}

/// Parallel variant of [`johnson_apsp`] with an identical result
pub fn johnson_apsp_parallel<W, G>(graph: &G) -> DistanceMatrix<W>
where
    W: Weight,
    G: Graph<W>,
{
    Johnson::new().with_parallel(true).compute_all_pairs(graph)
}
