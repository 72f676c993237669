//! Christofides-style approximate tour.
//!
//! # Algorithm
//!
//! 1. Take a minimum spanning tree of the graph.
//! 2. Collect the tree's odd-degree vertices (always an even count).
//! 3. Pair them up with a minimum-weight perfect matching over direct edges.
//! 4. Add the matching edges to a copy of the tree; every degree is now even.
//! 5. Linearize the augmented multigraph into a vertex order starting at
//!    `start` (see [`Linearization`](super::Linearization)).
//! 6. Close the cycle and price it with direct edges of the source graph.
//!
//! # Complexity
//!
//! Dominated by the matching step: (k−1)!! pairings for k odd vertices.
//!
//! # Reference
//!
//! Christofides, N. (1976). "Worst-case analysis of a new heuristic for the
//! travelling salesman problem", Report 388, GSIA, Carnegie-Mellon University.

use std::collections::HashSet;

use tracing::debug;

use super::linearize::{euler_shortcut, greedy_backtrack, Stuck};
use super::matching::{min_weight_perfect_matching, odd_degree_vertices};
use super::{ChristofidesConfig, Linearization};
use crate::error::{GraphError, Result};
use crate::graph::{EdgeLookup, Vertex, WeightedGraph};
use crate::models::Route;
use crate::spanning_tree::minimum_spanning_tree;

/// Builds an approximate tour from `start`, computing a fresh spanning tree.
///
/// Use [`ApproxRouter`](super::ApproxRouter) to reuse the tree across calls.
///
/// # Errors
///
/// - [`GraphError::EmptyGraph`] if the graph has no vertices
/// - [`GraphError::InvalidVertex`] if `start` is unknown
/// - [`GraphError::Unreachable`] if the graph is disconnected
/// - [`GraphError::MissingEdge`] if the matching or a shortcut needs an edge
///   the graph lacks
/// - [`GraphError::NoFeasibleExtension`] if greedy linearization finds no
///   repair point
///
/// # Examples
///
/// ```
/// use roadtrip_graph::approx::{christofides_route, ChristofidesConfig};
/// use roadtrip_graph::distance::{complete_graph, Point};
///
/// let g = complete_graph([
///     ("a", Point::new(0.0, 0.0)),
///     ("b", Point::new(4.0, 0.0)),
///     ("c", Point::new(4.0, 3.0)),
///     ("d", Point::new(0.0, 3.0)),
/// ]);
/// let route = christofides_route(&g, &"a", &ChristofidesConfig::default()).unwrap();
/// assert_eq!(route.num_stops(), 4);
/// assert!((route.cost() - 14.0).abs() < 1e-10);
/// ```
pub fn christofides_route<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    config: &ChristofidesConfig,
) -> Result<Route<V>> {
    let tree = minimum_spanning_tree(graph);
    route_with_tree(graph, &tree, start, config)
}

/// Christofides steps 2-6 on a caller-supplied spanning tree.
#[tracing::instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count(), linearization = ?config.linearization()))]
pub(crate) fn route_with_tree<V: Vertex>(
    graph: &WeightedGraph<V>,
    tree: &WeightedGraph<V>,
    start: &V,
    config: &ChristofidesConfig,
) -> Result<Route<V>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let s = graph.index_of(start)?;
    if graph.vertex_count() == 1 {
        return Ok(Route::trivial(start.clone()));
    }

    // Re-key the tree onto the graph's vertex order.
    let mut augmented = graph.empty_like();
    for e in tree.edges() {
        augmented.add_edge(&e.a, &e.b, e.weight)?;
    }

    {
        let reached: HashSet<&V> = augmented.bfs(start)?.collect();
        if let Some(missing) = graph.vertices().find(|v| !reached.contains(v)) {
            return Err(GraphError::unreachable(start, missing));
        }
    }

    let direct = EdgeLookup::new(graph);
    let odd = odd_degree_vertices(&augmented);
    let matching = min_weight_perfect_matching(&direct, &odd, config.matching_pruning())
        .map_err(|(a, b)| GraphError::missing_edge(graph.vertex_at(a), graph.vertex_at(b)))?;
    debug!(
        odd_vertices = odd.len(),
        matching_cost = matching.cost,
        tree_weight = tree.total_weight(),
        "odd vertices matched"
    );

    for &(a, b) in &matching.pairs {
        let (va, vb) = (graph.vertex_at(a), graph.vertex_at(b));
        let w = graph.require_edge(va, vb)?;
        augmented.add_edge(va, vb, w)?;
    }

    let order = match config.linearization() {
        Linearization::Hierholzer => euler_shortcut(&augmented, s),
        Linearization::GreedyBacktrack => greedy_backtrack(&augmented, &direct, s),
    }
    .map_err(|stuck| match stuck {
        Stuck::Unreached(v) => GraphError::unreachable(start, graph.vertex_at(v)),
        Stuck::DeadEnd(v) => GraphError::no_feasible_extension(graph.vertex_at(v)),
    })?;

    let mut tour = order;
    tour.push(s);
    let cost = direct
        .walk_cost(&tour)
        .map_err(|(a, b)| GraphError::missing_edge(graph.vertex_at(a), graph.vertex_at(b)))?;

    debug!(cost, "christofides tour built");
    let vertices = tour.iter().map(|&i| graph.vertex_at(i).clone()).collect();
    Ok(Route::new(vertices, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{complete_graph, Point};
    use crate::evaluation::RouteEvaluator;
    use crate::exact::brute_force_route;

    fn unit_square() -> WeightedGraph<char> {
        let d = 2f64.sqrt();
        WeightedGraph::from_edges([
            ('A', 'B', 1.0),
            ('B', 'C', 1.0),
            ('C', 'D', 1.0),
            ('D', 'A', 1.0),
            ('A', 'C', d),
            ('B', 'D', d),
        ])
    }

    fn hexagon_with_center() -> WeightedGraph<usize> {
        let mut pts: Vec<(usize, Point)> = (0..6)
            .map(|i| {
                let a = std::f64::consts::PI / 3.0 * i as f64;
                (i, Point::new(a.cos() * 10.0, a.sin() * 10.0))
            })
            .collect();
        pts.push((6, Point::new(0.0, 0.0)));
        complete_graph(pts)
    }

    #[test]
    fn test_unit_square_both_linearizations() {
        let g = unit_square();
        for lin in [Linearization::Hierholzer, Linearization::GreedyBacktrack] {
            let config = ChristofidesConfig::default().with_linearization(lin);
            let r = christofides_route(&g, &'A', &config).unwrap();
            assert!(RouteEvaluator::new(&g).validate_tour(&r).is_empty());
            assert!((r.cost() - 4.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_bounds_against_optimum() {
        let g = hexagon_with_center();
        let opt = brute_force_route(&g, &0).unwrap();
        let mst_weight = minimum_spanning_tree(&g).total_weight();

        let r = christofides_route(&g, &0, &ChristofidesConfig::default()).unwrap();
        assert!(RouteEvaluator::new(&g).validate_tour(&r).is_empty());
        assert!(r.cost() >= opt.cost() - 1e-9);
        assert!(r.cost() <= 2.0 * mst_weight + 1e-9);

        // The greedy walk has no weight guarantee, only validity.
        let config =
            ChristofidesConfig::default().with_linearization(Linearization::GreedyBacktrack);
        let r = christofides_route(&g, &0, &config).unwrap();
        assert!(RouteEvaluator::new(&g).validate_tour(&r).is_empty());
        assert!(r.cost() >= opt.cost() - 1e-9);
    }

    #[test]
    fn test_starts_where_asked() {
        let g = hexagon_with_center();
        let r = christofides_route(&g, &6, &ChristofidesConfig::default()).unwrap();
        assert_eq!(r.start(), Some(&6));
        assert_eq!(r.vertices().last(), Some(&6));
        assert_eq!(r.num_stops(), 7);
    }

    #[test]
    fn test_disconnected_graph() {
        let g = WeightedGraph::from_edges([(1, 2, 1.0), (3, 4, 1.0)]);
        assert!(matches!(
            christofides_route(&g, &1, &ChristofidesConfig::default()),
            Err(GraphError::Unreachable { .. })
        ));
    }

    #[test]
    fn test_incomplete_graph_missing_matching_edge() {
        // Path a-b-c-d: odd vertices a and d have no direct edge.
        let g = WeightedGraph::from_edges([('a', 'b', 1.0), ('b', 'c', 1.0), ('c', 'd', 1.0)]);
        assert_eq!(
            christofides_route(&g, &'a', &ChristofidesConfig::default()),
            Err(GraphError::MissingEdge {
                from: "'a'".to_string(),
                to: "'d'".to_string(),
            })
        );
    }

    #[test]
    fn test_small_cases() {
        let config = ChristofidesConfig::default();
        let g: WeightedGraph<u8> = WeightedGraph::new();
        assert_eq!(christofides_route(&g, &1, &config), Err(GraphError::EmptyGraph));

        let mut g = WeightedGraph::new();
        g.add_vertex(1u8);
        assert_eq!(christofides_route(&g, &1, &config).unwrap(), Route::trivial(1));
        assert!(matches!(
            christofides_route(&g, &2, &config),
            Err(GraphError::InvalidVertex(_))
        ));

        let g = WeightedGraph::from_edges([(1u8, 2u8, 2.0)]);
        let r = christofides_route(&g, &1, &config).unwrap();
        assert_eq!(r.vertices(), &[1, 2, 1]);
        assert_eq!(r.cost(), 4.0);
    }

    #[test]
    fn test_tree_from_another_graph_rejected() {
        let g = unit_square();
        let foreign = WeightedGraph::from_edges([('A', 'Z', 1.0)]);
        assert!(matches!(
            route_with_tree(&g, &foreign, &'A', &ChristofidesConfig::default()),
            Err(GraphError::InvalidVertex(_))
        ));
    }
}
