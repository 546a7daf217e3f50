pub mod traits;
pub mod weight;
pub mod directed;
pub mod parse;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use weight::{add_finite, checked_shift, shift_finite, Weight};
pub use directed::DirectedGraph;
