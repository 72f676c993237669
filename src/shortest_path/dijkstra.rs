//! Dijkstra's algorithm with predecessor reconstruction.
//!
//! # Algorithm
//!
//! A binary heap holds `(tentative distance, vertex)` entries. A vertex may
//! be pushed several times; only its first pop is final and later (stale)
//! pops are skipped. Edges are relaxed only when a strictly shorter distance
//! is found.
//!
//! Paths are not tracked during the search. Instead, [`shortest_route`]
//! scans every edge afterwards and records `u` as a predecessor of `v`
//! whenever `dist[v] == dist[u] + w`. Among tied shortest paths the last
//! matching edge in scan order wins; callers must not rely on which one.
//!
//! # Complexity
//!
//! O((V + E) log V).
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};
use crate::models::Path;

/// Minimum known distance from a source to every vertex.
///
/// Unreachable vertices hold `f64::INFINITY`.
#[derive(Debug, Clone)]
pub struct DistanceTable<V> {
    source: V,
    distances: IndexMap<V, f64>,
}

impl<V: Vertex> DistanceTable<V> {
    /// The vertex distances are measured from.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Distance to `v`, or `None` if `v` is not a vertex of the graph.
    pub fn get(&self, v: &V) -> Option<f64> {
        self.distances.get(v).copied()
    }

    /// Returns `true` if `v` has a finite distance.
    pub fn is_reachable(&self, v: &V) -> bool {
        self.get(v).is_some_and(f64::is_finite)
    }

    /// `(vertex, distance)` pairs in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, f64)> + '_ {
        self.distances.iter().map(|(v, &d)| (v, d))
    }

    /// Number of vertices in the table.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: f64,
    vertex: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Index-based search state shared by [`dijkstra`] and [`shortest_route`].
struct Search {
    dist: Vec<f64>,
    /// Position at which each vertex was finalized; `usize::MAX` if never.
    settled_at: Vec<usize>,
}

fn run<V: Vertex>(graph: &WeightedGraph<V>, start: usize) -> Search {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut settled_at = vec![usize::MAX; n];
    let mut settled = 0;
    let mut heap = BinaryHeap::new();

    dist[start] = 0.0;
    heap.push(HeapEntry {
        distance: 0.0,
        vertex: start,
    });

    while let Some(HeapEntry { distance, vertex }) = heap.pop() {
        if settled_at[vertex] != usize::MAX {
            continue;
        }
        settled_at[vertex] = settled;
        settled += 1;

        for (next, w) in graph.neighbor_indices(vertex) {
            if settled_at[next] != usize::MAX {
                continue;
            }
            let candidate = distance + w;
            if candidate < dist[next] {
                trace!(from = vertex, to = next, distance = candidate, "relaxed");
                dist[next] = candidate;
                heap.push(HeapEntry {
                    distance: candidate,
                    vertex: next,
                });
            }
        }
    }

    Search { dist, settled_at }
}

/// Computes shortest distances from `start` to every vertex.
///
/// Weights are assumed non-negative; with negative weights the result is
/// not guaranteed to be a shortest distance.
///
/// # Errors
///
/// [`GraphError::InvalidVertex`] if `start` is not in the graph.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
/// use roadtrip_graph::shortest_path::dijkstra;
///
/// let g = WeightedGraph::from_edges([("a", "b", 1.0), ("b", "c", 2.0), ("a", "c", 5.0)]);
/// let table = dijkstra(&g, &"a").unwrap();
/// assert_eq!(table.get(&"c"), Some(3.0));
/// ```
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn dijkstra<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<DistanceTable<V>> {
    let s = graph.index_of(start)?;
    let search = run(graph, s);
    let distances = graph
        .vertices()
        .cloned()
        .zip(search.dist.iter().copied())
        .collect();
    Ok(DistanceTable {
        source: start.clone(),
        distances,
    })
}

/// Finds a shortest path from `start` to `end`.
///
/// The returned cost equals the Dijkstra distance to `end`.
///
/// # Errors
///
/// - [`GraphError::InvalidVertex`] if either endpoint is unknown
/// - [`GraphError::Unreachable`] if `end` is in another component
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
/// use roadtrip_graph::shortest_path::shortest_route;
///
/// let g = WeightedGraph::from_edges([("a", "b", 1.0), ("b", "c", 2.0), ("a", "c", 5.0)]);
/// let path = shortest_route(&g, &"a", &"c").unwrap();
/// assert_eq!(path.vertices(), &["a", "b", "c"]);
/// assert_eq!(path.cost(), 3.0);
/// ```
#[tracing::instrument(skip_all, fields(start = ?start, end = ?end))]
pub fn shortest_route<V: Vertex>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<Path<V>> {
    let e = graph.index_of(end)?;
    let s = graph.index_of(start)?;
    let Search { dist, settled_at } = run(graph, s);

    if !dist[e].is_finite() {
        return Err(GraphError::unreachable(start, end));
    }

    // Relaxation-consistency scan. Only vertices finalized earlier may act as
    // predecessors, so zero-weight edges cannot form a predecessor loop.
    let n = graph.vertex_count();
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    for u in 0..n {
        if !dist[u].is_finite() {
            continue;
        }
        for (v, w) in graph.neighbor_indices(u) {
            if v == s || settled_at[u] >= settled_at[v] {
                continue;
            }
            if dist[v] == dist[u] + w {
                predecessor[v] = Some(u);
            }
        }
    }

    let mut indices = vec![e];
    let mut current = e;
    while current != s {
        match predecessor[current] {
            Some(p) => {
                indices.push(p);
                current = p;
            }
            None => return Err(GraphError::unreachable(start, end)),
        }
    }
    indices.reverse();

    let vertices: Vec<V> = indices.iter().map(|&i| graph.vertex_at(i).clone()).collect();
    debug!(hops = vertices.len() - 1, cost = dist[e], "shortest route found");
    Ok(Path::new(vertices, dist[e]))
}
