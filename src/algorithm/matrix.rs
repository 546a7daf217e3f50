use serde::Serialize;
use std::ops::Index;

use crate::graph::{add_finite, Graph, Weight};

/// Square matrix of shortest distances; row `i` holds the distances from vertex `i`.
///
/// Diagonal entries are zero for graphs without a negative cycle and
/// unreachable pairs hold [`Weight::infinity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix<W>
where
    W: Weight,
{
    /// Number of rows and columns
    size: usize,

    /// Row-major entries
    distances: Vec<W>,
}

impl<W> DistanceMatrix<W>
where
    W: Weight,
{
    /// Builds a matrix from row-major entries. `distances.len()` must be `size * size`.
    pub(crate) fn from_flat(size: usize, distances: Vec<W>) -> Self {
        debug_assert_eq!(distances.len(), size * size);
        DistanceMatrix { size, distances }
    }

    /// Builds a matrix from one row per source vertex
    pub(crate) fn from_rows(rows: Vec<Vec<W>>) -> Self {
        let size = rows.len();
        let distances: Vec<W> = rows.into_iter().flatten().collect();
        Self::from_flat(size, distances)
    }

    /// Number of vertices the matrix covers
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from `from` to `to`, or `None` if either index is out of range
    pub fn get(&self, from: usize, to: usize) -> Option<W> {
        if from < self.size && to < self.size {
            Some(self.distances[from * self.size + to])
        } else {
            None
        }
    }

    /// Distances from a single source. Panics if `source` is out of range.
    pub fn row(&self, source: usize) -> &[W] {
        &self.distances[source * self.size..(source + 1) * self.size]
    }

    /// Iterates over the rows in source order
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.distances.chunks(self.size.max(1))
    }

    /// Returns true if `to` is reachable from `from`
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).map_or(false, |d| !d.is_infinite())
    }

    /// Copies the matrix out with unreachable entries as `None`
    pub fn to_options(&self) -> Vec<Vec<Option<W>>> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|d| if d.is_infinite() { None } else { Some(*d) })
                    .collect()
            })
            .collect()
    }

    /// Consumes the matrix into one `Vec` per row
    pub fn into_rows(self) -> Vec<Vec<W>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Returns true if some vertex has a negative distance to itself.
    ///
    /// Floyd-Warshall leaves this mark on graphs with a negative cycle.
    pub fn has_negative_diagonal(&self) -> bool {
        (0..self.size).any(|v| self.distances[v * self.size + v] < W::zero())
    }

    /// Checks that row `source` is a fixed point of edge relaxation.
    ///
    /// The source must be at distance zero, and no edge `(u, v, w)` of the
    /// graph may satisfy `d[u] + w < d[v]` for a finite `d[u]`.
    pub fn all_edges_relaxed<G: Graph<W>>(&self, graph: &G, source: usize) -> bool {
        if source >= self.size || graph.vertex_count() != self.size {
            return false;
        }
        let row = self.row(source);
        if row[source] != W::zero() {
            return false;
        }

        graph.edges().all(|(u, v, weight)| match add_finite(row[u], weight) {
            Some(via_u) => row[v] <= via_u,
            None => true,
        })
    }
}

impl<W> Index<(usize, usize)> for DistanceMatrix<W>
where
    W: Weight,
{
    type Output = W;

    fn index(&self, (from, to): (usize, usize)) -> &W {
        assert!(from < self.size && to < self.size, "index ({}, {}) out of range", from, to);
        &self.distances[from * self.size + to]
    }
}
