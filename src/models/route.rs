//! Closed tour type.

use serde::{Deserialize, Serialize};

/// A cycle that starts and ends at the same vertex, with its total weight.
///
/// The start vertex appears at both ends of [`vertices`](Self::vertices), so
/// a tour over `n` vertices has `n + 1` entries.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::models::Route;
///
/// let route = Route::new(vec!['A', 'B', 'C', 'A'], 6.0);
/// assert_eq!(route.start(), Some(&'A'));
/// assert_eq!(route.num_stops(), 3);
/// assert!(route.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<V> {
    vertices: Vec<V>,
    cost: f64,
}

impl<V> Route<V> {
    /// Creates a route from a vertex sequence and its total cost.
    pub fn new(vertices: Vec<V>, cost: f64) -> Self {
        Self { vertices, cost }
    }

    /// The tour of a one-vertex graph: `[v, v]` at zero cost.
    pub fn trivial(v: V) -> Self
    where
        V: Clone,
    {
        Self::new(vec![v.clone(), v], 0.0)
    }

    /// Vertex sequence, start repeated at the end.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Total weight of the traversed edges.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Start (and end) vertex.
    pub fn start(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Number of distinct stops (the closing vertex is not counted twice).
    pub fn num_stops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Consumes the route, returning `(vertices, cost)`.
    pub fn into_parts(self) -> (Vec<V>, f64) {
        (self.vertices, self.cost)
    }
}

impl<V: PartialEq> Route<V> {
    /// Returns `true` if the route has at least one vertex and ends where it
    /// starts.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(a), Some(b)) => self.vertices.len() >= 2 && a == b,
            _ => false,
        }
    }

    /// Returns `true` if `other` visits the same cycle in either direction
    /// from the same start.
    pub fn same_cycle(&self, other: &Route<V>) -> bool {
        self.vertices == other.vertices
            || self.vertices.iter().eq(other.vertices.iter().rev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_accessors() {
        let r = Route::new(vec![1, 2, 3, 1], 4.5);
        assert_eq!(r.vertices(), &[1, 2, 3, 1]);
        assert_eq!(r.cost(), 4.5);
        assert_eq!(r.num_stops(), 3);
        assert!(r.is_closed());
        assert_eq!(r.into_parts(), (vec![1, 2, 3, 1], 4.5));
    }

    #[test]
    fn test_trivial_route() {
        let r = Route::trivial("home");
        assert_eq!(r.vertices(), &["home", "home"]);
        assert_eq!(r.cost(), 0.0);
        assert!(r.is_closed());
        assert_eq!(r.num_stops(), 1);
    }

    #[test]
    fn test_open_or_empty_route() {
        assert!(!Route::new(vec![1, 2], 1.0).is_closed());
        assert!(!Route::<u8>::new(vec![], 0.0).is_closed());
        assert!(!Route::new(vec![1], 0.0).is_closed());
        assert_eq!(Route::<u8>::new(vec![], 0.0).num_stops(), 0);
    }

    #[test]
    fn test_same_cycle_mirror() {
        let a = Route::new(vec!['A', 'B', 'C', 'D', 'A'], 4.0);
        let b = Route::new(vec!['A', 'D', 'C', 'B', 'A'], 4.0);
        let c = Route::new(vec!['A', 'C', 'B', 'D', 'A'], 4.8);
        assert!(a.same_cycle(&b));
        assert!(!a.same_cycle(&c));
    }
}
