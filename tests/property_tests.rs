use fast_apsp::graph::{DirectedGraph, MutableGraph};
use fast_apsp::{exists_negative_cycle, floyd_warshall_apsp, johnson_apsp, johnson_apsp_parallel};
use proptest::prelude::*;

const NUM_VERTICES_STRATEGY: std::ops::Range<usize> = 1usize..12;

/// Arbitrary small graphs, negative edges and parallel edges included
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|num_vertices| {
        let edge_generator = (0usize..num_vertices, 0usize..num_vertices, -5i64..50);
        let edges_generator = prop::collection::vec(edge_generator, 0..40);

        (Just(num_vertices), edges_generator)
    })
}

/// Graphs whose edges come from a hidden potential, so no cycle is negative
fn potential_graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|num_vertices| {
        let potentials = prop::collection::vec(0i64..30, num_vertices);
        let edges = prop::collection::vec(
            (0usize..num_vertices, 0usize..num_vertices, 0i64..20),
            0..40,
        );
        (Just(num_vertices), potentials, edges).prop_map(|(n, potentials, edges)| {
            let edges = edges
                .into_iter()
                .map(|(u, v, base)| (u, v, base + potentials[u] - potentials[v]))
                .collect();
            (n, edges)
        })
    })
}

fn build(num_vertices: usize, edges: &[(usize, usize, i64)]) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::new(num_vertices);
    for &(u, v, w) in edges {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}

proptest! {
    /// Property: Johnson and Floyd-Warshall agree whenever no negative cycle exists
    #[test]
    fn johnson_matches_floyd_warshall((num_vertices, edges) in graph_strategy()) {
        let graph = build(num_vertices, &edges);
        prop_assume!(!exists_negative_cycle(&graph));
        prop_assert_eq!(johnson_apsp(&graph), floyd_warshall_apsp(&graph));
    }

    /// Property: every row of the result is optimal and starts at zero
    #[test]
    fn no_edge_is_relaxable((num_vertices, edges) in potential_graph_strategy()) {
        let graph = build(num_vertices, &edges);
        let matrix = johnson_apsp(&graph);
        for v in 0..num_vertices {
            prop_assert_eq!(matrix[(v, v)], 0);
            prop_assert!(matrix.all_edges_relaxed(&graph, v));
        }
    }

    /// Property: the detector agrees with Floyd-Warshall's negative diagonal
    #[test]
    fn detector_matches_diagonal((num_vertices, edges) in graph_strategy()) {
        let graph = build(num_vertices, &edges);
        prop_assert_eq!(
            exists_negative_cycle(&graph),
            floyd_warshall_apsp(&graph).has_negative_diagonal()
        );
    }

    /// Property: the parallel variant is identical to the sequential one
    #[test]
    fn parallel_matches_sequential((num_vertices, edges) in potential_graph_strategy()) {
        let graph = build(num_vertices, &edges);
        prop_assert!(!exists_negative_cycle(&graph));
        prop_assert_eq!(johnson_apsp(&graph), johnson_apsp_parallel(&graph));
    }
}
