//! Minimum spanning trees.
//!
//! - [`DisjointSet`] — union-find over vertex indices
//! - [`minimum_spanning_tree`] — Kruskal's algorithm, returning a new graph

mod disjoint_set;
mod kruskal;

pub use disjoint_set::DisjointSet;
pub use kruskal::minimum_spanning_tree;
