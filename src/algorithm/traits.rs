use crate::algorithm::bellman_ford::exists_negative_cycle;
use crate::algorithm::DistanceMatrix;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsShortestPaths<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Computes the full distance matrix.
    ///
    /// The graph must not contain a negative cycle; if it does, the contents
    /// of the returned matrix are unspecified.
    fn compute_all_pairs(&self, graph: &G) -> DistanceMatrix<W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Like [`compute_all_pairs`](Self::compute_all_pairs), but refuses graphs
    /// with a negative cycle instead of returning an unspecified matrix
    fn compute_checked(&self, graph: &G) -> Result<DistanceMatrix<W>> {
        if exists_negative_cycle(graph) {
            return Err(Error::NegativeCycle);
        }
        Ok(self.compute_all_pairs(graph))
    }
}
