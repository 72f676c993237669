//! Exhaustive optimal tour search.
//!
//! # Algorithm
//!
//! Fix the start vertex and enumerate every ordering of the remaining
//! `n − 1` vertices, keeping only one ordering of each mirror pair (see
//! [`CycleOrders`]). Each candidate `[start, …, start]` is priced by direct
//! edge lookups; a candidate that needs a missing edge is dropped. The
//! cheapest candidate wins; on equal cost the first one enumerated is kept.
//!
//! # Complexity
//!
//! O((n−1)!/2 · n). Only intended for small instances; nothing here bounds
//! the running time, so callers must limit the vertex count themselves.

use tracing::{debug, trace};

use super::CycleOrders;
use crate::error::{GraphError, Result};
use crate::graph::{EdgeLookup, Vertex, WeightedGraph};
use crate::models::Route;

/// Finds a minimum-cost tour from `start` by exhaustive search.
///
/// # Errors
///
/// - [`GraphError::EmptyGraph`] if the graph has no vertices
/// - [`GraphError::InvalidVertex`] if `start` is unknown
/// - [`GraphError::MissingEdge`] if no candidate tour exists; the reported
///   edge is the first gap met during enumeration
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
/// use roadtrip_graph::exact::brute_force_route;
///
/// let g = WeightedGraph::from_edges([
///     ('A', 'B', 1.0), ('B', 'C', 1.0), ('C', 'D', 1.0), ('D', 'A', 1.0),
///     ('A', 'C', 2f64.sqrt()), ('B', 'D', 2f64.sqrt()),
/// ]);
/// let route = brute_force_route(&g, &'A').unwrap();
/// assert_eq!(route.cost(), 4.0);
/// assert_eq!(route.vertices(), &['A', 'B', 'C', 'D', 'A']);
/// ```
#[tracing::instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count()))]
pub fn brute_force_route<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<Route<V>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let s = graph.index_of(start)?;
    let n = graph.vertex_count();
    if n == 1 {
        return Ok(Route::trivial(start.clone()));
    }

    let lookup = EdgeLookup::new(graph);
    let others: Vec<usize> = (0..n).filter(|&i| i != s).collect();

    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut first_gap: Option<(usize, usize)> = None;
    let mut candidates = 0usize;
    let mut dropped = 0usize;

    let mut tour = Vec::with_capacity(n + 1);
    for order in CycleOrders::new(others.len()) {
        candidates += 1;
        tour.clear();
        tour.push(s);
        tour.extend(order.iter().map(|&k| others[k]));
        tour.push(s);

        match lookup.walk_cost(&tour) {
            Ok(cost) => {
                if best.as_ref().map_or(true, |(_, c)| cost < *c) {
                    trace!(cost, "new best tour");
                    best = Some((tour.clone(), cost));
                }
            }
            Err(gap) => {
                dropped += 1;
                first_gap.get_or_insert(gap);
            }
        }
    }

    debug!(candidates, dropped, "brute-force enumeration finished");
    match best {
        Some((order, cost)) => {
            let vertices = order.iter().map(|&i| graph.vertex_at(i).clone()).collect();
            Ok(Route::new(vertices, cost))
        }
        None => {
            let (a, b) = first_gap.unwrap_or((s, others[0]));
            Err(GraphError::missing_edge(graph.vertex_at(a), graph.vertex_at(b)))
        }
    }
}
