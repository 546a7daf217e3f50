use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::Weight;
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// The vertex set `0..n` is fixed at construction; edges are append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Total number of stored edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new directed graph with `vertices` vertices and no edges
    ///
    /// Panics if the adjacency table cannot be allocated; see [`try_new`](Self::try_new).
    pub fn new(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Like [`new`](Self::new), but returns `None` instead of aborting when
    /// `vertices` adjacency lists cannot be allocated
    pub fn try_new(vertices: usize) -> Option<Self> {
        let mut outgoing_edges = Vec::new();
        outgoing_edges.try_reserve_exact(vertices).ok()?;
        outgoing_edges.resize_with(vertices, Vec::new);

        Some(DirectedGraph {
            outgoing_edges,
            edge_count: 0,
        })
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.outgoing_edges.len()
    }

    /// Like [`Graph::neighbours`], but rejects vertices outside the graph
    pub fn try_neighbours(&self, vertex: usize) -> Result<impl Iterator<Item = (usize, W)> + '_> {
        self.outgoing_edges
            .get(vertex)
            .map(|edges| edges.iter().copied())
            .ok_or(Error::InvalidVertex(vertex))
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbours(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }

        self.outgoing_edges[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_new_graph_has_no_edges() {
        let graph: DirectedGraph<i64> = DirectedGraph::new(4);
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbours(2).count(), 0);
    }

    #[test]
    fn test_try_new() {
        let graph: DirectedGraph<i64> = DirectedGraph::try_new(3).unwrap();
        assert_eq!(graph, DirectedGraph::new(3));
        assert!(DirectedGraph::<i64>::try_new(usize::MAX).is_none());
    }

    #[test]
    fn test_empty_graph() {
        let graph: DirectedGraph<i64> = DirectedGraph::new(0);
        assert_eq!(graph.size(), 0);
        assert!(!graph.has_vertex(0));
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_neighbours_keep_insertion_order_and_parallel_edges() {
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(0, 2, 7i64).unwrap();
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(0, 2, -1).unwrap();

        let neighbours: Vec<_> = graph.neighbours(0).collect();
        assert_eq!(neighbours, vec![(2, 7), (1, 3), (2, -1)]);
        assert_eq!(graph.edge_count(), 3);

        // A second pass yields the same sequence
        assert_eq!(graph.neighbours(0).collect::<Vec<_>>(), neighbours);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = DirectedGraph::new(2);
        assert!(matches!(graph.add_edge(0, 2, 1i64), Err(Error::InvalidEdge(0, 2))));
        assert!(matches!(graph.add_edge(5, 1, 1i64), Err(Error::InvalidEdge(5, 1))));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_try_neighbours_rejects_unknown_vertex() {
        let mut graph = DirectedGraph::new(2);
        graph.add_edge(1, 0, OrderedFloat(0.5)).unwrap();
        assert_eq!(
            graph.try_neighbours(1).unwrap().collect::<Vec<_>>(),
            vec![(0, OrderedFloat(0.5))]
        );
        assert!(matches!(graph.try_neighbours(2), Err(Error::InvalidVertex(2))));
    }

    #[test]
    fn test_edges_grouped_by_source() {
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(2, 0, 1i64).unwrap();
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(2, 2, 3).unwrap();
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, 2), (2, 0, 1), (2, 2, 3)]);
    }
}
