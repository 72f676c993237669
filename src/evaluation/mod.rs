//! Route cost evaluation and tour validation.

mod evaluator;

pub use evaluator::{RouteEvaluator, TourViolation};
