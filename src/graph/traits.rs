use std::fmt::Debug;

use crate::graph::Weight;
use crate::Result;

/// Trait representing a weighted directed graph with vertices `0..n`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing `(target, weight)` pairs of a vertex,
    /// in insertion order. Unknown vertices have no neighbours.
    fn neighbours(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns every edge as `(source, target, weight)`, grouped by source
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new(
            (0..self.vertex_count())
                .flat_map(move |u| self.neighbours(u).map(move |(v, w)| (u, v, w))),
        )
    }
}

/// Trait for graphs that grow by appending edges
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Appends a directed edge `from -> to`. Parallel edges are kept as-is.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
