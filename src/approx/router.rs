//! Approximate tour builder with a cached spanning tree.

use tracing::debug;

use super::christofides::route_with_tree;
use super::ChristofidesConfig;
use crate::error::Result;
use crate::graph::{Vertex, WeightedGraph};
use crate::models::Route;
use crate::spanning_tree::minimum_spanning_tree;

/// Owns a graph and memoizes its minimum spanning tree across
/// [`christofides_route`](Self::christofides_route) calls.
///
/// The cache is filled lazily on first use. Every mutable access to the
/// graph ([`graph_mut`](Self::graph_mut), [`add_vertex`](Self::add_vertex),
/// [`add_edge`](Self::add_edge)) drops it, and [`invalidate`](Self::invalidate)
/// drops it explicitly.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::approx::ApproxRouter;
/// use roadtrip_graph::graph::WeightedGraph;
///
/// let g = WeightedGraph::from_edges([
///     (1, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0),
/// ]);
/// let mut router = ApproxRouter::new(g);
/// let route = router.christofides_route(&1).unwrap();
/// assert_eq!(route.cost(), 3.0);
/// assert!(router.is_cached());
///
/// router.add_vertex(4);
/// assert!(!router.is_cached());
/// ```
#[derive(Debug, Clone)]
pub struct ApproxRouter<V> {
    graph: WeightedGraph<V>,
    config: ChristofidesConfig,
    spanning_tree: Option<WeightedGraph<V>>,
}

impl<V: Vertex> ApproxRouter<V> {
    /// Creates a router with the default configuration.
    pub fn new(graph: WeightedGraph<V>) -> Self {
        Self::with_config(graph, ChristofidesConfig::default())
    }

    /// Creates a router with an explicit configuration.
    pub fn with_config(graph: WeightedGraph<V>, config: ChristofidesConfig) -> Self {
        Self {
            graph,
            config,
            spanning_tree: None,
        }
    }

    pub fn config(&self) -> &ChristofidesConfig {
        &self.config
    }

    /// Replaces the configuration. The cached tree does not depend on it.
    pub fn set_config(&mut self, config: ChristofidesConfig) {
        self.config = config;
    }

    pub fn graph(&self) -> &WeightedGraph<V> {
        &self.graph
    }

    /// Mutable access to the graph. Drops the cached tree.
    pub fn graph_mut(&mut self) -> &mut WeightedGraph<V> {
        self.invalidate();
        &mut self.graph
    }

    /// Adds a vertex to the owned graph. Drops the cached tree.
    pub fn add_vertex(&mut self, v: V) -> bool {
        self.invalidate();
        self.graph.add_vertex(v)
    }

    /// Adds an edge to the owned graph. Drops the cached tree, even if the
    /// edge is rejected.
    pub fn add_edge(&mut self, a: &V, b: &V, weight: f64) -> Result<()> {
        self.invalidate();
        self.graph.add_edge(a, b, weight)
    }

    /// Discards the cached spanning tree.
    pub fn invalidate(&mut self) {
        if self.spanning_tree.take().is_some() {
            debug!("spanning tree cache invalidated");
        }
    }

    /// Whether a spanning tree is currently cached.
    pub fn is_cached(&self) -> bool {
        self.spanning_tree.is_some()
    }

    /// The graph's minimum spanning tree, computed on first call.
    pub fn spanning_tree(&mut self) -> &WeightedGraph<V> {
        cached_tree(&mut self.spanning_tree, &self.graph)
    }

    /// Installs a precomputed spanning tree in place of the cached one.
    ///
    /// The tree is not checked for minimality; tours built from it carry
    /// whatever weight it implies.
    ///
    /// # Errors
    ///
    /// - [`InvalidVertex`](crate::GraphError::InvalidVertex) if the tree names
    ///   a vertex the graph lacks
    /// - [`MissingEdge`](crate::GraphError::MissingEdge) if the graph does not
    ///   contain one of its edges
    pub fn set_spanning_tree(&mut self, tree: WeightedGraph<V>) -> Result<()> {
        for v in tree.vertices() {
            self.graph.check_vertex(v)?;
        }
        for e in tree.edges() {
            self.graph.require_edge(&e.a, &e.b)?;
        }
        debug!(tree_edges = tree.edge_count(), "spanning tree installed");
        self.spanning_tree = Some(tree);
        Ok(())
    }

    /// Weight of the (cached) spanning tree, a lower bound on any tour.
    pub fn lower_bound(&mut self) -> f64 {
        self.spanning_tree().total_weight()
    }

    /// Builds an approximate tour from `start` using the cached tree.
    ///
    /// Errors are those of
    /// [`christofides_route`](super::christofides_route).
    pub fn christofides_route(&mut self, start: &V) -> Result<Route<V>> {
        let tree = cached_tree(&mut self.spanning_tree, &self.graph);
        route_with_tree(&self.graph, tree, start, &self.config)
    }

    /// Gives back the owned graph.
    pub fn into_graph(self) -> WeightedGraph<V> {
        self.graph
    }
}

fn cached_tree<'a, V: Vertex>(
    slot: &'a mut Option<WeightedGraph<V>>,
    graph: &WeightedGraph<V>,
) -> &'a WeightedGraph<V> {
    if slot.is_some() {
        debug!("spanning tree cache hit");
    }
    slot.get_or_insert_with(|| {
        debug!("spanning tree cache miss");
        minimum_spanning_tree(graph)
    })
}
