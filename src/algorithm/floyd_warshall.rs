use log::debug;

use crate::algorithm::{AllPairsShortestPaths, DistanceMatrix};
use crate::graph::{add_finite, Graph, Weight};

/// Floyd-Warshall all-pairs shortest paths, O(n³) time and O(n²) space
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }
}

impl<W, G> AllPairsShortestPaths<W, G> for FloydWarshall
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_all_pairs(&self, graph: &G) -> DistanceMatrix<W> {
        let n = graph.vertex_count();
        let mut dist = vec![W::infinity(); n * n];

        // Direct edges; parallel edges contribute their minimum
        for (u, v, weight) in graph.edges() {
            let entry = &mut dist[u * n + v];
            if weight < *entry {
                *entry = weight;
            }
        }
        // Zero diagonal. A negative self-loop is itself a negative cycle and
        // is left in place so the diagonal shows it.
        for v in 0..n {
            let entry = &mut dist[v * n + v];
            if *entry > W::zero() {
                *entry = W::zero();
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    if let Some(via_k) = add_finite(d_ik, dist[k * n + j]) {
                        if via_k < dist[i * n + j] {
                            dist[i * n + j] = via_k;
                        }
                    }
                }
            }
        }

        let matrix = DistanceMatrix::from_flat(n, dist);
        debug!(
            "Floyd-Warshall finished on {} vertices and {} edges",
            n,
            graph.edge_count()
        );
        matrix
    }
}

/// Computes all-pairs shortest distances with Floyd-Warshall.
///
/// The graph must not contain a negative cycle; check with
/// [`exists_negative_cycle`](crate::exists_negative_cycle) first. On such a
/// graph some diagonal entries end up negative and the rest of the matrix is
/// meaningless.
pub fn floyd_warshall_apsp<W, G>(graph: &G) -> DistanceMatrix<W>
where
    W: Weight,
    G: Graph<W>,
{
    FloydWarshall::new().compute_all_pairs(graph)
}
