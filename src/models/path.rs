//! Point-to-point path type.

use serde::{Deserialize, Serialize};

/// An open walk from a source to a target with its total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<V> {
    vertices: Vec<V>,
    cost: f64,
}

impl<V> Path<V> {
    /// Creates a path from a vertex sequence and its total cost.
    pub fn new(vertices: Vec<V>, cost: f64) -> Self {
        Self { vertices, cost }
    }

    /// Vertex sequence from source to target, both inclusive.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Total weight.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_hops() {
        let p = Path::new(vec!["a", "b", "c"], 3.0);
        assert_eq!(p.hops(), 2);
        assert_eq!(Path::new(vec!["a"], 0.0).hops(), 0);
    }
}
