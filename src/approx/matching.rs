//! Minimum-weight perfect matching by exhaustive pairing.
//!
//! # Algorithm
//!
//! Only who is paired with whom matters, so pairings are generated in a
//! canonical form: the lowest unpaired vertex is always paired next, with
//! each higher unpaired vertex in turn. Every perfect matching is produced
//! exactly once, (k−1)!! in total for k vertices. Pairs without a direct
//! edge are never formed. With pruning enabled, a branch is abandoned once
//! its partial cost reaches the best complete matching seen so far.
//!
//! # Complexity
//!
//! O((k−1)!!) in the worst case. Practical only for small odd-vertex counts.

use tracing::debug;

use crate::graph::{EdgeLookup, Vertex, WeightedGraph};

/// A perfect matching over vertex indices.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Matching {
    pub pairs: Vec<(usize, usize)>,
    pub cost: f64,
}

/// Indices of vertices with odd degree, in index order.
pub(crate) fn odd_degree_vertices<V: Vertex>(tree: &WeightedGraph<V>) -> Vec<usize> {
    (0..tree.vertex_count())
        .filter(|&i| tree.neighbor_indices(i).count() % 2 == 1)
        .collect()
}

struct PairingSearch<'a> {
    lookup: &'a EdgeLookup,
    vertices: &'a [usize],
    prune: bool,
    used: Vec<bool>,
    current: Vec<(usize, usize)>,
    best: Option<Matching>,
    first_gap: Option<(usize, usize)>,
    completed: usize,
}

impl PairingSearch<'_> {
    fn search(&mut self, partial: f64) {
        let Some(first) = self.used.iter().position(|u| !u) else {
            self.completed += 1;
            if self.best.as_ref().map_or(true, |b| partial < b.cost) {
                self.best = Some(Matching {
                    pairs: self.current.clone(),
                    cost: partial,
                });
            }
            return;
        };

        self.used[first] = true;
        for j in (first + 1)..self.vertices.len() {
            if self.used[j] {
                continue;
            }
            let (a, b) = (self.vertices[first], self.vertices[j]);
            let Some(w) = self.lookup.get(a, b) else {
                self.first_gap.get_or_insert((a, b));
                continue;
            };
            let cost = partial + w;
            if self.prune && self.best.as_ref().is_some_and(|best| cost >= best.cost) {
                continue;
            }
            self.used[j] = true;
            self.current.push((a, b));
            self.search(cost);
            self.current.pop();
            self.used[j] = false;
        }
        self.used[first] = false;
    }
}

/// Finds a minimum-weight perfect matching of `vertices` using direct edges
/// from `lookup`.
///
/// Returns the first missing pair met if no perfect matching exists. An
/// empty vertex set yields the empty matching.
pub(crate) fn min_weight_perfect_matching(
    lookup: &EdgeLookup,
    vertices: &[usize],
    prune: bool,
) -> Result<Matching, (usize, usize)> {
    let mut search = PairingSearch {
        lookup,
        vertices,
        prune,
        used: vec![false; vertices.len()],
        current: Vec::with_capacity(vertices.len() / 2),
        best: None,
        first_gap: None,
        completed: 0,
    };
    search.search(0.0);

    debug!(
        vertices = vertices.len(),
        completed = search.completed,
        cost = search.best.as_ref().map(|m| m.cost),
        "matching search finished"
    );
    match search.best {
        Some(m) => Ok(m),
        None => Err(search.first_gap.unwrap_or_else(|| {
            // Odd count: some vertex can never be paired.
            let last = vertices.last().copied().unwrap_or_default();
            (last, last)
        })),
    }
}
