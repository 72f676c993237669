//! # roadtrip-graph
//!
//! Weighted undirected graphs with shortest paths, minimum spanning trees,
//! and round-trip (tour) construction: exact, greedy, and Christofides-style.
//!
//! ## Modules
//!
//! - [`graph`] — Weighted graph storage, traversal, dense edge lookup
//! - [`distance`] — Planar points and complete Euclidean graphs
//! - [`models`] — Route (closed tour) and Path (point-to-point) results
//! - [`evaluation`] — Route pricing, lower bound, tour validation
//! - [`shortest_path`] — Dijkstra distances and point-to-point routes
//! - [`spanning_tree`] — Disjoint sets and Kruskal's minimum spanning tree
//! - [`constructive`] — Nearest-neighbor tour heuristic
//! - [`exact`] — Brute-force optimal tours for small graphs
//! - [`approx`] — Christofides-style tours and the cached-tree router
//! - [`tour`] — Strategy dispatch and comparison
//!
//! ## Example
//!
//! ```
//! use roadtrip_graph::distance::{complete_graph, Point};
//! use roadtrip_graph::tour::{compare_strategies, Strategy};
//!
//! let g = complete_graph([
//!     ("home", Point::new(0.0, 0.0)),
//!     ("park", Point::new(3.0, 0.0)),
//!     ("shop", Point::new(3.0, 4.0)),
//! ]);
//! for (strategy, outcome) in compare_strategies(&g, &"home", &Strategy::ALL) {
//!     let route = outcome.unwrap();
//!     assert_eq!(route.cost(), 12.0, "{strategy}");
//! }
//! ```

pub mod approx;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod graph;
pub mod models;
pub mod shortest_path;
pub mod spanning_tree;
pub mod tour;

pub use error::{GraphError, Result};
