//! Bellman-Ford from a virtual super-source.
//!
//! The super-source `s` has a zero-weight edge to every real vertex, so every
//! vertex is reachable and a negative cycle anywhere in the graph shows up,
//! whatever the graph's own connectivity. `s` is never added to the graph; it
//! lives as the extra slot `n` of the distance array.

use log::{debug, trace};

use crate::graph::{add_finite, Graph, Weight};

/// Outcome of the super-source Bellman-Ford pass
#[derive(Debug, Clone)]
pub(crate) struct SuperSourceDistances<W> {
    /// Shortest distance from the super-source to each real vertex
    pub distances: Vec<W>,

    /// True if some edge could still be relaxed after `n` passes
    pub negative_cycle: bool,
}

/// Runs one relaxation pass over the virtual edges and then every real edge.
/// Returns true if any distance improved.
fn relax_all<W, G>(graph: &G, distance: &mut [W]) -> bool
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let source = distance[n];
    let mut changed = false;

    if let Some(candidate) = add_finite(source, W::zero()) {
        for d in distance[..n].iter_mut() {
            if candidate < *d {
                *d = candidate;
                changed = true;
            }
        }
    }

    for (u, v, weight) in graph.edges() {
        if let Some(candidate) = add_finite(distance[u], weight) {
            if candidate < distance[v] {
                distance[v] = candidate;
                changed = true;
            }
        }
    }

    changed
}

/// Returns true if any edge, virtual or real, can still improve a distance
fn any_relaxable<W, G>(graph: &G, distance: &[W]) -> bool
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let virtual_relaxable = add_finite(distance[n], W::zero())
        .map_or(false, |candidate| distance[..n].iter().any(|d| candidate < *d));

    virtual_relaxable
        || graph.edges().any(|(u, v, weight)| {
            add_finite(distance[u], weight).map_or(false, |candidate| candidate < distance[v])
        })
}

/// Shortest distances from the super-source, plus the negative cycle verdict.
///
/// Performs up to `n` relaxation passes followed by one check pass. A pass
/// that changes nothing is a fixed point, so the remaining passes are skipped;
/// the verdict is the same as running all `n`.
pub(crate) fn super_source_bellman_ford<W, G>(graph: &G) -> SuperSourceDistances<W>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let mut distance = vec![W::infinity(); n + 1];
    distance[n] = W::zero();

    let mut passes = 0;
    while passes < n {
        passes += 1;
        if !relax_all(graph, &mut distance) {
            break;
        }
        trace!("Bellman-Ford pass {} improved at least one distance", passes);
    }

    let negative_cycle = any_relaxable(graph, &distance);
    debug!(
        "Bellman-Ford over {} vertices and {} edges finished after {} passes (negative cycle: {})",
        n,
        graph.edge_count(),
        passes,
        negative_cycle
    );

    distance.truncate(n);
    SuperSourceDistances {
        distances: distance,
        negative_cycle,
    }
}

/// Returns true if the graph contains a negative-weight cycle.
///
/// Runs in O(n·m) and never modifies the graph.
pub fn exists_negative_cycle<W, G>(graph: &G) -> bool
where
    W: Weight,
    G: Graph<W>,
{
    super_source_bellman_ford(graph).negative_cycle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    #[test]
    fn test_potentials_are_super_source_distances() {
        let mut graph = DirectedGraph::new(4);
        graph.add_edge(0, 1, 1i64).unwrap();
        graph.add_edge(0, 2, 4).unwrap();
        graph.add_edge(2, 1, -4).unwrap();
        graph.add_edge(1, 3, 1).unwrap();

        let result = super_source_bellman_ford(&graph);
        assert!(!result.negative_cycle);
        assert_eq!(result.distances, vec![0, -4, 0, -3]);
    }

    #[test]
    fn test_disconnected_vertices_get_zero_potential() {
        let graph: DirectedGraph<i64> = DirectedGraph::new(3);
        let result = super_source_bellman_ford(&graph);
        assert_eq!(result.distances, vec![0, 0, 0]);
        assert!(!result.negative_cycle);
    }

    #[test]
    fn test_empty_graph_has_no_negative_cycle() {
        let graph: DirectedGraph<i64> = DirectedGraph::new(0);
        assert!(!exists_negative_cycle(&graph));
    }

    #[test]
    fn test_negative_self_loop() {
        let mut graph = DirectedGraph::new(1);
        graph.add_edge(0, 0, -1i64).unwrap();
        assert!(exists_negative_cycle(&graph));
    }

    #[test]
    fn test_negative_cycle_unreachable_from_vertex_zero() {
        let mut graph = DirectedGraph::new(4);
        graph.add_edge(0, 1, 3i64).unwrap();
        graph.add_edge(2, 3, -2).unwrap();
        graph.add_edge(3, 2, 1).unwrap();
        assert!(exists_negative_cycle(&graph));
    }

    #[test]
    fn test_infinite_weight_edges_are_never_relaxed() {
        let mut graph = DirectedGraph::new(2);
        graph.add_edge(0, 1, i32::MAX).unwrap();
        graph.add_edge(1, 0, -1).unwrap();
        assert!(!exists_negative_cycle(&graph));
    }
}
