//! Breadth-first and depth-first visit iterators.
//!
//! Both iterators own their frontier and visited set, so every call to
//! [`WeightedGraph::bfs`] / [`WeightedGraph::dfs`] starts from scratch and
//! nothing is shared between runs. A vertex is marked visited when it enters
//! the frontier, which guarantees it is yielded exactly once.

use std::collections::VecDeque;

use super::{Vertex, WeightedGraph};

/// Breadth-first visit order (FIFO frontier).
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
///
/// let g = WeightedGraph::from_edges([(1, 2, 1.0), (1, 3, 1.0), (2, 4, 1.0)]);
/// let order: Vec<_> = g.bfs(&1).unwrap().copied().collect();
/// assert_eq!(order, vec![1, 2, 3, 4]);
/// ```
pub struct Bfs<'a, V> {
    graph: &'a WeightedGraph<V>,
    queue: VecDeque<usize>,
    seen: Vec<bool>,
}

impl<'a, V: Vertex> Bfs<'a, V> {
    pub(super) fn new(graph: &'a WeightedGraph<V>, start: usize) -> Self {
        let mut seen = vec![false; graph.vertex_count()];
        seen[start] = true;
        Self {
            graph,
            queue: VecDeque::from([start]),
            seen,
        }
    }
}

impl<'a, V: Vertex> Iterator for Bfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for (n, _) in self.graph.neighbor_indices(current) {
            if !self.seen[n] {
                self.seen[n] = true;
                self.queue.push_back(n);
            }
        }
        Some(self.graph.vertex_at(current))
    }
}

/// Depth-first visit order (LIFO frontier).
///
/// Neighbors are pushed in adjacency order, so the most recently added
/// neighbor is explored first.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::graph::WeightedGraph;
///
/// let g = WeightedGraph::from_edges([(1, 2, 1.0), (1, 3, 1.0), (2, 4, 1.0)]);
/// let order: Vec<_> = g.dfs(&1).unwrap().copied().collect();
/// assert_eq!(order, vec![1, 3, 2, 4]);
/// ```
pub struct Dfs<'a, V> {
    graph: &'a WeightedGraph<V>,
    stack: Vec<usize>,
    seen: Vec<bool>,
}

impl<'a, V: Vertex> Dfs<'a, V> {
    pub(super) fn new(graph: &'a WeightedGraph<V>, start: usize) -> Self {
        let mut seen = vec![false; graph.vertex_count()];
        seen[start] = true;
        Self {
            graph,
            stack: vec![start],
            seen,
        }
    }
}

impl<'a, V: Vertex> Iterator for Dfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        for (n, _) in self.graph.neighbor_indices(current) {
            if !self.seen[n] {
                self.seen[n] = true;
                self.stack.push(n);
            }
        }
        Some(self.graph.vertex_at(current))
    }
}
