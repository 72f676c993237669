//! Turning an even-degree multigraph into a vertex order.
//!
//! Both strategies work on vertex indices of the augmented tree, which
//! mirrors the source graph's vertex order, and return an open order that
//! starts at `start` and visits every vertex once.

use tracing::{debug, trace};

use crate::graph::{EdgeLookup, Vertex, WeightedGraph};

/// Why a linearization could not cover every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stuck {
    /// The walk never reached this vertex.
    Unreached(usize),
    /// The greedy walk dead-ended here with no repair point.
    DeadEnd(usize),
}

/// Eulerian circuit from `start` (Hierholzer), shortcut to first visits.
///
/// Every edge of `augmented` is traversed once; keeping only the first
/// occurrence of each vertex yields the order.
pub(crate) fn euler_shortcut<V: Vertex>(
    augmented: &WeightedGraph<V>,
    start: usize,
) -> Result<Vec<usize>, Stuck> {
    let n = augmented.vertex_count();
    let mut incident: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    let mut edge_total = 0;
    for (id, (_, a, b)) in augmented.indexed_edges().enumerate() {
        incident[a].push((b, id));
        incident[b].push((a, id));
        edge_total += 1;
    }

    let mut used = vec![false; edge_total];
    let mut cursor = vec![0usize; n];
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(edge_total + 1);

    while let Some(&v) = stack.last() {
        while cursor[v] < incident[v].len() && used[incident[v][cursor[v]].1] {
            cursor[v] += 1;
        }
        match incident[v].get(cursor[v]) {
            Some(&(next, id)) => {
                used[id] = true;
                stack.push(next);
            }
            None => {
                circuit.push(v);
                stack.pop();
            }
        }
    }
    circuit.reverse();
    trace!(circuit_len = circuit.len(), edges = edge_total, "eulerian circuit");

    let mut seen = vec![false; n];
    let order: Vec<usize> = circuit
        .into_iter()
        .filter(|&v| !std::mem::replace(&mut seen[v], true))
        .collect();

    match seen.iter().position(|s| !s) {
        Some(missing) => Err(Stuck::Unreached(missing)),
        None => Ok(order),
    }
}

/// Greedy walk over `augmented` with local dead-end repair.
///
/// From the last vertex, step to its first unvisited neighbor. At a dead
/// end, scan the route backwards for the most recent vertex that still has
/// an unvisited neighbor which the dead-end vertex can reach by a direct
/// edge in `direct`, and jump there.
pub(crate) fn greedy_backtrack<V: Vertex>(
    augmented: &WeightedGraph<V>,
    direct: &EdgeLookup,
    start: usize,
) -> Result<Vec<usize>, Stuck> {
    let n = augmented.vertex_count();
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut route = Vec::with_capacity(n);
    route.push(start);

    let first_unvisited = |v: usize, visited: &[bool]| {
        augmented
            .neighbor_indices(v)
            .map(|(u, _)| u)
            .find(|&u| !visited[u])
    };

    while route.len() < n {
        let last = route[route.len() - 1];
        if let Some(next) = first_unvisited(last, &visited) {
            visited[next] = true;
            route.push(next);
            continue;
        }

        let repair = route[..route.len() - 1].iter().rev().find_map(|&earlier| {
            first_unvisited(earlier, &visited)
                .filter(|&candidate| direct.get(last, candidate).is_some())
        });
        match repair {
            Some(next) => {
                debug!(from = last, to = next, "backtrack repair");
                visited[next] = true;
                route.push(next);
            }
            None => return Err(Stuck::DeadEnd(last)),
        }
    }
    Ok(route)
}
