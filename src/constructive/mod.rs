//! Constructive tour heuristics.
//!
//! - [`nearest_neighbor_route`] — greedy nearest unvisited neighbor, O(n² log n)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_route;
