//! Undirected weighted graph storage and traversal.
//!
//! - [`WeightedGraph`] — adjacency lists plus a flat edge list, kept consistent
//! - [`Bfs`] / [`Dfs`] — lazy, restartable visit-order iterators
//! - [`EdgeLookup`] — dense index-to-weight table for the combinatorial searches

mod lookup;
mod traversal;
mod weighted;

use std::fmt::Debug;
use std::hash::Hash;

pub use lookup::EdgeLookup;
pub use traversal::{Bfs, Dfs};
pub use weighted::{Edge, WeightedGraph, DEFAULT_WEIGHT};

/// Requirements on a vertex identifier.
///
/// Any cloneable, hashable key works: string labels, integer handles, or a
/// caller-defined newtype. `Debug` is used for error messages and logs.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}
