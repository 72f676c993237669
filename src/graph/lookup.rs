//! Dense edge-weight lookup over vertex indices.

use super::{Vertex, WeightedGraph};

/// An n×n table of direct edge weights stored in row-major order.
///
/// Entry `(a, b)` holds the weight that [`WeightedGraph::edge_weight`] would
/// return: the first edge to `b` in `a`'s neighbor list, or `None`.
#[derive(Debug, Clone)]
pub struct EdgeLookup {
    data: Vec<Option<f64>>,
    size: usize,
}

impl EdgeLookup {
    /// Snapshots the direct edges of `graph`.
    pub fn new<V: Vertex>(graph: &WeightedGraph<V>) -> Self {
        let size = graph.vertex_count();
        let mut data = vec![None; size * size];
        for a in 0..size {
            for (b, w) in graph.neighbor_indices(a) {
                let slot = &mut data[a * size + b];
                if slot.is_none() {
                    *slot = Some(w);
                }
            }
        }
        Self { data, size }
    }

    /// Weight of the direct edge from index `a` to index `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, a: usize, b: usize) -> Option<f64> {
        self.data[a * self.size + b]
    }

    /// Number of vertices covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of consecutive weights along `order`, or the first missing pair.
    pub fn walk_cost(&self, order: &[usize]) -> Result<f64, (usize, usize)> {
        let mut total = 0.0;
        for pair in order.windows(2) {
            total += self.get(pair[0], pair[1]).ok_or((pair[0], pair[1]))?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_first_edge_wins() {
        let mut g = WeightedGraph::from_edges([('a', 'b', 2.0), ('b', 'c', 3.0)]);
        g.add_edge(&'a', &'b', 7.0).unwrap();
        let t = EdgeLookup::new(&g);
        assert_eq!(t.size(), 3);
        assert_eq!(t.get(0, 1), Some(2.0));
        assert_eq!(t.get(1, 0), Some(2.0));
        assert_eq!(t.get(0, 2), None);
        assert_eq!(t.get(1, 1), None);
    }

    #[test]
    fn test_walk_cost() {
        let g = WeightedGraph::from_edges([(0, 1, 1.0), (1, 2, 2.0)]);
        let t = EdgeLookup::new(&g);
        assert_eq!(t.walk_cost(&[0, 1, 2, 1]), Ok(5.0));
        assert_eq!(t.walk_cost(&[0, 1, 2, 0]), Err((2, 0)));
        assert_eq!(t.walk_cost(&[2]), Ok(0.0));
    }
}
