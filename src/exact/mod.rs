//! Exact tour search for small instances.
//!
//! - [`CycleOrders`] — one visiting order per undirected cycle class
//! - [`brute_force_route`] — exhaustive optimal tour, (n−1)!/2 candidates

mod brute_force;
mod permutations;

pub use brute_force::brute_force_route;
pub use permutations::{next_permutation, CycleOrders};
