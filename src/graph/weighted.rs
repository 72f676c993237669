//! Adjacency-list graph with a parallel edge list.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Bfs, Dfs, Vertex};
use crate::error::{GraphError, Result};

/// Weight used by [`WeightedGraph::add_unit_edge`].
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// An undirected weighted edge as stored in the flat edge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    /// Edge weight.
    pub weight: f64,
    /// First endpoint, as given to `add_edge`.
    pub a: V,
    /// Second endpoint.
    pub b: V,
}

/// An undirected weighted graph over caller-chosen vertex identifiers.
///
/// Every edge appears in both endpoints' neighbor lists and exactly once in
/// the edge list. Vertices and edges keep insertion order, so iteration and
/// every algorithm built on top of it are deterministic. Parallel edges are
/// allowed (the Christofides step relies on them); weights are not validated,
/// but shortest-path results are only meaningful for non-negative weights.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
///
/// let mut g = WeightedGraph::new();
/// g.add_vertex("A");
/// g.add_vertex("B");
/// g.add_edge(&"A", &"B", 2.5).unwrap();
///
/// assert_eq!(g.edge_weight(&"B", &"A"), Some(2.5));
/// assert!(g.add_edge(&"A", &"C", 1.0).is_err());
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    adjacency: IndexMap<V, Vec<(V, f64)>>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> WeightedGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `(v1, v2, weight)` triples, adding endpoints as
    /// they first appear.
    pub fn from_edges<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut g = Self::new();
        for (a, b, weight) in triples {
            g.add_vertex(a.clone());
            g.add_vertex(b.clone());
            g.push_edge(a, b, weight);
        }
        g
    }

    /// Adds a vertex. Returns `false` (and changes nothing) if it already exists.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Adds an undirected edge between two existing vertices.
    ///
    /// Fails with [`GraphError::InvalidVertex`] without touching the graph
    /// if either endpoint is unknown.
    pub fn add_edge(&mut self, a: &V, b: &V, weight: f64) -> Result<()> {
        for v in [a, b] {
            if !self.adjacency.contains_key(v) {
                return Err(GraphError::invalid_vertex(v));
            }
        }
        self.push_edge(a.clone(), b.clone(), weight);
        Ok(())
    }

    /// Adds an edge with [`DEFAULT_WEIGHT`].
    pub fn add_unit_edge(&mut self, a: &V, b: &V) -> Result<()> {
        self.add_edge(a, b, DEFAULT_WEIGHT)
    }

    /// Records an edge without checking its endpoints. Callers guarantee
    /// both are vertices of this graph.
    pub(crate) fn push_edge(&mut self, a: V, b: V, weight: f64) {
        if let Some(list) = self.adjacency.get_mut(&a) {
            list.push((b.clone(), weight));
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.push((a.clone(), weight));
        }
        self.edges.push(Edge { weight, a, b });
    }

    /// Returns `true` if `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// Neighbors of `v` with edge weights, in insertion order.
    pub fn neighbors(&self, v: &V) -> Result<&[(V, f64)]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::invalid_vertex(v))
    }

    /// Number of edge endpoints at `v`.
    pub fn degree(&self, v: &V) -> Result<usize> {
        self.neighbors(v).map(<[_]>::len)
    }

    /// Weight of the first edge between `a` and `b` found by scanning `a`'s
    /// neighbor list, or `None` if there is no such edge (or `a` is unknown).
    pub fn edge_weight(&self, a: &V, b: &V) -> Option<f64> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|(n, _)| n == b)
            .map(|&(_, w)| w)
    }

    /// Like [`edge_weight`](Self::edge_weight) but reports a missing edge as
    /// [`GraphError::MissingEdge`].
    pub fn require_edge(&self, a: &V, b: &V) -> Result<f64> {
        self.edge_weight(a, b)
            .ok_or_else(|| GraphError::missing_edge(a, b))
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Returns an error unless `v` is a vertex of this graph.
    pub fn check_vertex(&self, v: &V) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::invalid_vertex(v))
        }
    }

    /// Breadth-first visit order from `start`.
    pub fn bfs(&self, start: &V) -> Result<Bfs<'_, V>> {
        let idx = self.index_of(start)?;
        Ok(Bfs::new(self, idx))
    }

    /// Depth-first (LIFO frontier) visit order from `start`.
    pub fn dfs(&self, start: &V) -> Result<Dfs<'_, V>> {
        let idx = self.index_of(start)?;
        Ok(Dfs::new(self, idx))
    }

    /// Insertion index of `v`.
    pub(crate) fn index_of(&self, v: &V) -> Result<usize> {
        self.adjacency
            .get_index_of(v)
            .ok_or_else(|| GraphError::invalid_vertex(v))
    }

    /// Vertex at insertion index `idx`.
    ///
    /// Indices come from [`index_of`](Self::index_of) or `0..vertex_count()`.
    pub(crate) fn vertex_at(&self, idx: usize) -> &V {
        self.adjacency
            .get_index(idx)
            .map(|(v, _)| v)
            .expect("vertex index should be in range")
    }

    /// Neighbors of the vertex at `idx` as `(index, weight)` pairs.
    pub(crate) fn neighbor_indices(&self, idx: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency[idx]
            .iter()
            .filter_map(move |(n, w)| self.adjacency.get_index_of(n).map(|j| (j, *w)))
    }

    /// Edge list as `(weight, index_a, index_b)`.
    pub(crate) fn indexed_edges(&self) -> impl Iterator<Item = (f64, usize, usize)> + '_ {
        self.edges.iter().filter_map(move |e| {
            let a = self.adjacency.get_index_of(&e.a)?;
            let b = self.adjacency.get_index_of(&e.b)?;
            Some((e.weight, a, b))
        })
    }

    /// A graph with the same vertices (same order) and no edges.
    pub(crate) fn empty_like(&self) -> Self {
        let mut g = Self::new();
        for v in self.adjacency.keys() {
            g.add_vertex(v.clone());
        }
        g
    }
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two graphs are equal when they hold the same vertices, neighbor lists,
/// and edges in the same insertion order.
impl<V: Vertex> PartialEq for WeightedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges && self.adjacency.iter().eq(other.adjacency.iter())
    }
}

impl<V: Vertex> fmt::Display for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, neighbors) in &self.adjacency {
            write!(f, "{v:?}: [")?;
            for (i, (n, w)) in neighbors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({n:?}, {w})")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
