//! Kruskal's minimum spanning tree.
//!
//! # Algorithm
//!
//! Sort the edge list ascending by weight (stable, so equal weights keep
//! insertion order), then add each edge whose endpoints are still in
//! different groups of a [`DisjointSet`]. An edge joining two vertices of
//! the same group would close a cycle and is skipped.
//!
//! # Complexity
//!
//! O(E log E).
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and
//! the traveling salesman problem", *Proc. AMS* 7(1), 48-50.

use tracing::debug;

use super::DisjointSet;
use crate::graph::{Vertex, WeightedGraph};

/// Builds a minimum spanning tree (a forest, if the graph is disconnected).
///
/// The result is a new graph with the same vertices in the same order; the
/// source graph is never modified. A connected graph yields exactly
/// `vertex_count() - 1` edges.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
/// use roadtrip_graph::spanning_tree::minimum_spanning_tree;
///
/// let g = WeightedGraph::from_edges([
///     ('a', 'b', 1.0),
///     ('b', 'c', 2.0),
///     ('a', 'c', 3.0),
/// ]);
/// let mst = minimum_spanning_tree(&g);
/// assert_eq!(mst.edge_count(), 2);
/// assert_eq!(mst.total_weight(), 3.0);
/// ```
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_tree<V: Vertex>(graph: &WeightedGraph<V>) -> WeightedGraph<V> {
    let mut sorted: Vec<(f64, usize, usize)> = graph.indexed_edges().collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n = graph.vertex_count();
    let mut groups = DisjointSet::new(n);
    let mut tree = graph.empty_like();

    for (weight, a, b) in sorted {
        if groups.union(a, b) {
            // `tree` mirrors the vertices of `graph`.
            tree.push_edge(graph.vertex_at(a).clone(), graph.vertex_at(b).clone(), weight);
            if tree.edge_count() + 1 == n {
                break;
            }
        }
    }

    debug!(
        tree_edges = tree.edge_count(),
        components = groups.num_sets(),
        weight = tree.total_weight(),
        "spanning tree built"
    );
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_unit_square_weight() {
        let g = unit_square();
        let mst = minimum_spanning_tree(&g);
        assert_eq!(mst.edge_count(), 3);
        assert!((mst.total_weight() - 3.0).abs() < 1e-10);
        // Ties resolved in insertion order: A-B, B-C, C-D.
        assert_eq!(mst.edge_weight(&'A', &'B'), Some(1.0));
        assert_eq!(mst.edge_weight(&'C', &'D'), Some(1.0));
        assert_eq!(mst.edge_weight(&'D', &'A'), None);
    }

    #[test]
    fn test_source_untouched() {
        let g = unit_square();
        let before = g.clone();
        let _ = minimum_spanning_tree(&g);
        assert_eq!(g, before);
    }

    #[test]
    fn test_forest_on_disconnected_graph() {
        let mut g = WeightedGraph::from_edges([(1, 2, 1.0), (2, 3, 5.0), (1, 3, 2.0), (7, 8, 4.0)]);
        g.add_vertex(9);
        let mst = minimum_spanning_tree(&g);
        assert_eq!(mst.vertex_count(), 6);
        assert_eq!(mst.edge_count(), 3);
        assert!((mst.total_weight() - 7.0).abs() < 1e-10);
        assert_eq!(mst.degree(&9).unwrap(), 0);
    }

    #[test]
    fn test_skips_cycle_edges() {
        let g = WeightedGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 0, 0.5), (2, 3, 10.0)]);
        let mst = minimum_spanning_tree(&g);
        assert_eq!(mst.edge_count(), 3);
        assert!((mst.total_weight() - 11.5).abs() < 1e-10);
    }

    #[test]
    fn test_idempotent() {
        let g = unit_square();
        let a = minimum_spanning_tree(&g);
        let b = minimum_spanning_tree(&g);
        assert_eq!(a.total_weight(), b.total_weight());
    }

    #[test]
    fn test_empty_graph() {
        let g: WeightedGraph<u8> = WeightedGraph::new();
        let mst = minimum_spanning_tree(&g);
        assert!(mst.is_empty());
    }
}
