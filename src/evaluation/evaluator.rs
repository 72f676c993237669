//! Route evaluator that prices vertex sequences against a graph.

use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};
use crate::models::Route;
use crate::spanning_tree::minimum_spanning_tree;

/// Ways in which a route can fail to be a valid tour of a graph.
#[derive(Debug, Clone, PartialEq)]
pub enum TourViolation {
    /// The route is empty or does not end at its start.
    NotClosed,
    /// A vertex is visited more than once (besides the closing return).
    Revisited(String),
    /// A graph vertex is never visited.
    Unvisited(String),
    /// The route names a vertex the graph does not have.
    UnknownVertex(String),
    /// Two consecutive stops have no direct edge.
    MissingEdge {
        /// Stop before the gap.
        from: String,
        /// Stop after the gap.
        to: String,
    },
    /// The stored cost differs from the recomputed cost.
    CostMismatch {
        /// Cost recorded on the route.
        recorded: f64,
        /// Cost recomputed from the graph.
        actual: f64,
    },
}

/// Prices and checks routes against one graph.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
/// use roadtrip_graph::evaluation::RouteEvaluator;
///
/// let g = WeightedGraph::from_edges([(1, 2, 3.0), (2, 3, 4.0), (3, 1, 5.0)]);
/// let eval = RouteEvaluator::new(&g);
///
/// let route = eval.build_route(vec![1, 2, 3, 1]).unwrap();
/// assert_eq!(route.cost(), 12.0);
/// assert!(eval.validate_tour(&route).is_empty());
/// ```
pub struct RouteEvaluator<'a, V> {
    graph: &'a WeightedGraph<V>,
}

impl<'a, V: Vertex> RouteEvaluator<'a, V> {
    /// Creates an evaluator for `graph`.
    pub fn new(graph: &'a WeightedGraph<V>) -> Self {
        Self { graph }
    }

    /// Sums the weight of each consecutive pair in `vertices`.
    ///
    /// Each weight is the first matching entry in the earlier vertex's
    /// neighbor list. Fewer than two vertices cost nothing.
    pub fn route_cost(&self, vertices: &[V]) -> Result<f64> {
        if let Some(v) = vertices.iter().find(|v| !self.graph.contains_vertex(v)) {
            return Err(GraphError::invalid_vertex(v));
        }
        vertices
            .windows(2)
            .map(|pair| self.graph.require_edge(&pair[0], &pair[1]))
            .sum()
    }

    /// Wraps `vertices` in a [`Route`] priced by [`route_cost`](Self::route_cost).
    pub fn build_route(&self, vertices: Vec<V>) -> Result<Route<V>> {
        let cost = self.route_cost(&vertices)?;
        Ok(Route::new(vertices, cost))
    }

    /// Weight of a minimum spanning tree of the graph.
    ///
    /// Removing any edge from a tour leaves a spanning path, so no tour can
    /// be cheaper than this.
    pub fn lower_bound(&self) -> f64 {
        minimum_spanning_tree(self.graph).total_weight()
    }

    /// Checks that `route` is a closed tour visiting every vertex exactly
    /// once with a correctly recorded cost.
    ///
    /// Returns every violation found; an empty list means the tour is valid.
    pub fn validate_tour(&self, route: &Route<V>) -> Vec<TourViolation> {
        let mut violations = Vec::new();
        let stops = route.vertices();

        if !route.is_closed() {
            violations.push(TourViolation::NotClosed);
        }

        let body = if route.is_closed() {
            &stops[..stops.len() - 1]
        } else {
            stops
        };
        let mut seen = HashSet::new();
        for v in body {
            if !self.graph.contains_vertex(v) {
                violations.push(TourViolation::UnknownVertex(format!("{v:?}")));
            } else if !seen.insert(v) {
                violations.push(TourViolation::Revisited(format!("{v:?}")));
            }
        }
        for v in self.graph.vertices() {
            if !seen.contains(v) {
                violations.push(TourViolation::Unvisited(format!("{v:?}")));
            }
        }

        // A one-stop tour never leaves its start.
        let priced = if body.len() == 1 {
            Ok(0.0)
        } else {
            self.route_cost(stops)
        };
        match priced {
            Ok(actual) => {
                if (actual - route.cost()).abs() > 1e-9 * actual.abs().max(1.0) {
                    violations.push(TourViolation::CostMismatch {
                        recorded: route.cost(),
                        actual,
                    });
                }
            }
            Err(GraphError::MissingEdge { from, to }) => {
                violations.push(TourViolation::MissingEdge { from, to });
            }
            // Unknown vertices were already reported above.
            Err(_) => {}
        }

        violations
    }
}
