//! Euclidean points and complete graphs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{Vertex, WeightedGraph};

/// A location on the plane.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::distance::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Builds a complete graph over the given points.
///
/// Each `(id, point)` becomes a vertex; every unordered pair gets one edge
/// weighted by Euclidean distance. A repeated id keeps its first point.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::distance::{complete_graph, Point};
///
/// let g = complete_graph([
///     ("depot", Point::new(0.0, 0.0)),
///     ("north", Point::new(0.0, 8.0)),
///     ("east", Point::new(6.0, 0.0)),
/// ]);
/// assert_eq!(g.edge_count(), 3);
/// assert_eq!(g.edge_weight(&"north", &"east"), Some(10.0));
/// ```
pub fn complete_graph<V, I>(points: I) -> WeightedGraph<V>
where
    V: Vertex,
    I: IntoIterator<Item = (V, Point)>,
{
    let mut placed: Vec<(V, Point)> = Vec::new();
    let mut graph = WeightedGraph::new();
    for (id, p) in points {
        if graph.add_vertex(id.clone()) {
            placed.push((id, p));
        }
    }

    let n = placed.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let d = placed[i].1.distance_to(&placed[j].1);
            graph.push_edge(placed[i].0.clone(), placed[j].0.clone(), d);
        }
    }
    debug!(vertices = n, edges = graph.edge_count(), "built complete euclidean graph");
    graph
}
