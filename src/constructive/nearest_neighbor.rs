//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the given vertex, always move to
//! the cheapest adjacent vertex not yet visited, then return to the start.
//!
//! # Complexity
//!
//! O(n² log n) on a complete graph: each neighbor list is sorted once, and
//! each step scans the current vertex's list.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM J. Comput.*
//! 6(3), 563-581.

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{EdgeLookup, Vertex, WeightedGraph};
use crate::models::Route;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Each vertex's neighbors are ranked by weight (ties keep insertion order).
/// Between parallel edges the first one added prices the step, as in
/// [`RouteEvaluator::route_cost`](crate::evaluation::RouteEvaluator::route_cost).
/// The graph itself is not reordered.
///
/// # Errors
///
/// - [`GraphError::EmptyGraph`] if the graph has no vertices
/// - [`GraphError::InvalidVertex`] if `start` is unknown
/// - [`GraphError::NoFeasibleExtension`] if the walk reaches a vertex whose
///   neighbors are all visited while other vertices remain
/// - [`GraphError::MissingEdge`] if the last vertex has no edge back to `start`
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
/// use roadtrip_graph::constructive::nearest_neighbor_route;
///
/// let g = WeightedGraph::from_edges([
///     (0, 1, 1.0), (0, 2, 2.0), (0, 3, 3.0),
///     (1, 2, 1.0), (1, 3, 2.0), (2, 3, 1.0),
/// ]);
/// let route = nearest_neighbor_route(&g, &0).unwrap();
/// assert_eq!(route.vertices(), &[0, 1, 2, 3, 0]);
/// assert_eq!(route.cost(), 6.0);
/// ```
#[tracing::instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count()))]
pub fn nearest_neighbor_route<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<Route<V>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let s = graph.index_of(start)?;
    let n = graph.vertex_count();
    if n == 1 {
        return Ok(Route::trivial(start.clone()));
    }

    // Each neighbor appears once, priced by its first edge, so parallel
    // edges cost the same here as in every other route computation.
    let direct = EdgeLookup::new(graph);
    let ranked: Vec<Vec<(usize, f64)>> = (0..n)
        .map(|i| {
            let mut list: Vec<(usize, f64)> = Vec::new();
            for (j, _) in graph.neighbor_indices(i) {
                if list.iter().all(|&(k, _)| k != j) {
                    if let Some(w) = direct.get(i, j) {
                        list.push((j, w));
                    }
                }
            }
            list.sort_by(|a, b| a.1.total_cmp(&b.1));
            list
        })
        .collect();

    let mut visited = vec![false; n];
    visited[s] = true;
    let mut order = Vec::with_capacity(n + 1);
    order.push(s);
    let mut cost = 0.0;
    let mut current = s;

    while order.len() < n {
        let next = ranked[current].iter().find(|(j, _)| !visited[*j]);
        match next {
            Some(&(j, w)) => {
                visited[j] = true;
                order.push(j);
                cost += w;
                current = j;
            }
            None => {
                debug!(at = ?graph.vertex_at(current), visited = order.len(), "dead end");
                return Err(GraphError::no_feasible_extension(graph.vertex_at(current)));
            }
        }
    }

    cost += graph.require_edge(graph.vertex_at(current), start)?;
    order.push(s);

    let vertices: Vec<V> = order.iter().map(|&i| graph.vertex_at(i).clone()).collect();
    debug!(cost, "nearest-neighbor tour built");
    Ok(Route::new(vertices, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{complete_graph, Point};

    fn line_points() -> WeightedGraph<u32> {
        complete_graph([
            (0, Point::new(0.0, 0.0)),
            (1, Point::new(1.0, 0.0)),
            (2, Point::new(2.0, 0.0)),
            (3, Point::new(3.0, 0.0)),
        ])
    }

    #[test]
    fn test_nn_line() {
        let g = line_points();
        let r = nearest_neighbor_route(&g, &0).unwrap();
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        assert_eq!(r.vertices(), &[0, 1, 2, 3, 0]);
        assert!((r.cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let g = complete_graph([
            ('d', Point::new(0.0, 0.0)),
            ('f', Point::new(10.0, 0.0)),
            ('n', Point::new(1.0, 0.0)),
        ]);
        let r = nearest_neighbor_route(&g, &'d').unwrap();
        assert_eq!(r.vertices(), &['d', 'n', 'f', 'd']);
    }

    #[test]
    fn test_nn_does_not_reorder_graph() {
        let g = WeightedGraph::from_edges([(0, 1, 5.0), (0, 2, 1.0), (1, 2, 1.0)]);
        let before = g.clone();
        let r = nearest_neighbor_route(&g, &0).unwrap();
        assert_eq!(r.vertices(), &[0, 2, 1, 0]);
        assert_eq!(g, before);
    }

    #[test]
    fn test_nn_dead_end() {
        // Star: after visiting one leaf there is no way to another.
        let g = WeightedGraph::from_edges([("hub", "x", 1.0), ("hub", "y", 2.0)]);
        assert_eq!(
            nearest_neighbor_route(&g, &"hub"),
            Err(GraphError::NoFeasibleExtension("\"x\"".to_string()))
        );
    }

    #[test]
    fn test_nn_missing_closing_edge() {
        // Path a-b-c: every vertex reached, but c has no edge back to a.
        let g = WeightedGraph::from_edges([('a', 'b', 1.0), ('b', 'c', 1.0)]);
        assert!(matches!(
            nearest_neighbor_route(&g, &'a'),
            Err(GraphError::MissingEdge { .. })
        ));
    }

    #[test]
    fn test_nn_empty_and_unknown() {
        let g: WeightedGraph<u8> = WeightedGraph::new();
        assert_eq!(nearest_neighbor_route(&g, &0), Err(GraphError::EmptyGraph));
        let g = line_points();
        assert!(matches!(
            nearest_neighbor_route(&g, &42),
            Err(GraphError::InvalidVertex(_))
        ));
    }

    #[test]
    fn test_nn_single_vertex() {
        let mut g = WeightedGraph::new();
        g.add_vertex("solo");
        let r = nearest_neighbor_route(&g, &"solo").unwrap();
        assert_eq!(r.vertices(), &["solo", "solo"]);
        assert_eq!(r.cost(), 0.0);
    }

    #[test]
    fn test_nn_two_vertices() {
        let g = WeightedGraph::from_edges([(1, 2, 2.5)]);
        let r = nearest_neighbor_route(&g, &2).unwrap();
        assert_eq!(r.vertices(), &[2, 1, 2]);
        assert_eq!(r.cost(), 5.0);
    }

    #[test]
    fn test_nn_prices_parallel_edges_by_first_edge() {
        use crate::evaluation::RouteEvaluator;
        use crate::exact::brute_force_route;

        let mut g = WeightedGraph::from_edges([('A', 'B', 5.0), ('B', 'C', 1.0), ('C', 'A', 1.0)]);
        g.add_edge(&'A', &'B', 0.5).unwrap();

        let nn = nearest_neighbor_route(&g, &'A').unwrap();
        let eval = RouteEvaluator::new(&g);
        assert!(eval.validate_tour(&nn).is_empty());
        assert_eq!(eval.route_cost(nn.vertices()).unwrap(), nn.cost());
        assert_eq!(nn.vertices(), &['A', 'C', 'B', 'A']);
        assert_eq!(nn.cost(), 7.0);
        assert!(brute_force_route(&g, &'A').unwrap().cost() <= nn.cost());
    }
}
