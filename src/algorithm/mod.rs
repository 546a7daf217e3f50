pub mod traits;
pub mod matrix;
pub mod bellman_ford;
pub(crate) mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;

pub use matrix::DistanceMatrix;
pub use traits::AllPairsShortestPaths;
