//! Single-source shortest paths.
//!
//! - [`dijkstra`] — lazy-deletion Dijkstra producing a [`DistanceTable`]
//! - [`shortest_route`] — point-to-point path rebuilt from the table

mod dijkstra;

pub use dijkstra::{dijkstra, shortest_route, DistanceTable};
