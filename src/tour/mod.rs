//! One entry point over every tour strategy.
//!
//! - [`Strategy`] — which tour builder to run
//! - [`plan_tour`] — run a single strategy
//! - [`compare_strategies`] — run several strategies on the same input

mod planner;

pub use planner::{compare_strategies, plan_tour, plan_tour_with, Strategy};
