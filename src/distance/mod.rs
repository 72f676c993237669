//! Planar points and Euclidean graph construction.
//!
//! Callers that place points on a plane turn them into a complete weighted
//! graph here; every other module only sees vertex ids and edge weights.

mod euclidean;

pub use euclidean::{complete_graph, Point};
