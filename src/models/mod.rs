//! Result types returned by the routing algorithms.
//!
//! A [`Route`] is a closed tour with its total cost; a [`Path`] is an open
//! point-to-point walk with its total cost. Both are immutable once built.

mod path;
mod route;

pub use path::Path;
pub use route::Route;
