//! Fast APSP - negative cycle detection and all-pairs shortest paths
//!
//! This library works on directed graphs with generic edge weights (signed
//! integers or ordered IEEE floats) and provides:
//!
//! * [`exists_negative_cycle`]: Bellman-Ford from a virtual super-source.
//! * [`floyd_warshall_apsp`]: O(n³) dynamic programming over intermediate vertices.
//! * [`johnson_apsp`]: Bellman-Ford reweighting followed by one Dijkstra per
//!   vertex, O(n·m·log n), preferable on sparse graphs.
//!
//! Both APSP algorithms return the same [`DistanceMatrix`] for any graph
//! without a negative cycle. Unreachable pairs hold the weight type's
//! maximum value.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::exists_negative_cycle,
    floyd_warshall::{floyd_warshall_apsp, FloydWarshall},
    johnson::{johnson_apsp, johnson_apsp_parallel, Johnson},
    AllPairsShortestPaths, DistanceMatrix,
};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Malformed graph input at token {token}: {message}")]
    Parse { token: usize, message: String },

    #[error("Unexpected end of graph input: expected {0}")]
    UnexpectedEof(String),

    #[error("Graph contains a negative-weight cycle")]
    NegativeCycle,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
