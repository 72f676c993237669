//! Approximate tours built from a minimum spanning tree.
//!
//! - [`christofides_route`] — MST + odd-vertex matching + linearization
//! - [`ApproxRouter`] — owns a graph and caches its spanning tree between calls
//! - [`ChristofidesConfig`] — linearization and matching settings

mod christofides;
mod config;
mod linearize;
mod matching;
mod router;

pub use christofides::christofides_route;
pub use config::{ChristofidesConfig, Linearization};
pub use router::ApproxRouter;
