//! Strategy dispatch and side-by-side comparison.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::approx::{christofides_route, ChristofidesConfig};
use crate::constructive::nearest_neighbor_route;
use crate::error::Result;
use crate::exact::brute_force_route;
use crate::graph::{Vertex, WeightedGraph};
use crate::models::Route;

/// A tour construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Greedy cheapest-next-step walk. Fast, no quality guarantee.
    NearestNeighbor,
    /// Exhaustive search. Optimal, factorial time.
    BruteForce,
    /// Spanning tree plus matching. Bounded by twice the tree weight on
    /// metric graphs.
    Christofides,
}

impl Strategy {
    /// Every strategy, cheapest to run first.
    pub const ALL: [Strategy; 3] = [
        Strategy::NearestNeighbor,
        Strategy::Christofides,
        Strategy::BruteForce,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::NearestNeighbor => "nearest_neighbor",
            Strategy::BruteForce => "brute_force",
            Strategy::Christofides => "christofides",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds a tour from `start` with `strategy`, using the default
/// [`ChristofidesConfig`].
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
/// use roadtrip_graph::tour::{plan_tour, Strategy};
///
/// let g = WeightedGraph::from_edges([
///     ('A', 'B', 1.0), ('B', 'C', 1.0), ('C', 'D', 1.0), ('D', 'A', 1.0),
///     ('A', 'C', 2f64.sqrt()), ('B', 'D', 2f64.sqrt()),
/// ]);
/// let route = plan_tour(&g, &'A', Strategy::BruteForce).unwrap();
/// assert_eq!(route.cost(), 4.0);
/// ```
pub fn plan_tour<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    strategy: Strategy,
) -> Result<Route<V>> {
    plan_tour_with(graph, start, strategy, &ChristofidesConfig::default())
}

/// Like [`plan_tour`], with explicit Christofides settings.
pub fn plan_tour_with<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    strategy: Strategy,
    config: &ChristofidesConfig,
) -> Result<Route<V>> {
    debug!(%strategy, "planning tour");
    match strategy {
        Strategy::NearestNeighbor => nearest_neighbor_route(graph, start),
        Strategy::BruteForce => brute_force_route(graph, start),
        Strategy::Christofides => christofides_route(graph, start, config),
    }
}

/// Runs each of `strategies` from `start` and returns every outcome, in
/// order. A failing strategy does not stop the others.
///
/// No fallback is applied: picking among the results is left to the caller.
#[tracing::instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count(), strategies = strategies.len()))]
pub fn compare_strategies<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    strategies: &[Strategy],
) -> Vec<(Strategy, Result<Route<V>>)> {
    strategies
        .iter()
        .map(|&strategy| {
            let outcome = plan_tour(graph, start, strategy);
            match &outcome {
                Ok(route) => info!(%strategy, cost = route.cost(), "tour planned"),
                Err(e) => info!(%strategy, error = %e, "tour failed"),
            }
            (strategy, outcome)
        })
        .collect()
}
