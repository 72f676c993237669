//! Christofides configuration.

use serde::{Deserialize, Serialize};

/// How the augmented spanning tree is turned into a single cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Linearization {
    /// Eulerian circuit (Hierholzer) with repeated vertices shortcut.
    /// Always succeeds on a connected augmented tree over a complete graph.
    #[default]
    Hierholzer,
    /// Greedy walk to any unvisited tree neighbor, repairing dead ends by
    /// stepping back along the route to the most recent vertex with an
    /// unvisited neighbor reachable by a direct edge. Fails with
    /// `NoFeasibleExtension` when no repair point exists.
    GreedyBacktrack,
}

/// Settings for [`christofides_route`](super::christofides_route).
///
/// # Examples
///
/// ```
/// use roadtrip_graph::approx::{ChristofidesConfig, Linearization};
///
/// let config = ChristofidesConfig::default()
///     .with_linearization(Linearization::GreedyBacktrack)
///     .with_matching_pruning(false);
/// assert_eq!(config.linearization(), Linearization::GreedyBacktrack);
/// assert!(!config.matching_pruning());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChristofidesConfig {
    linearization: Linearization,
    prune_matching: bool,
}

impl Default for ChristofidesConfig {
    fn default() -> Self {
        Self {
            linearization: Linearization::Hierholzer,
            prune_matching: true,
        }
    }
}

impl ChristofidesConfig {
    /// Sets the linearization strategy.
    pub fn with_linearization(mut self, linearization: Linearization) -> Self {
        self.linearization = linearization;
        self
    }

    /// Enables or disables branch-and-bound cut-offs in the matching search.
    ///
    /// Cut-offs assume non-negative weights; disable them to enumerate every
    /// pairing when negative weights are present.
    pub fn with_matching_pruning(mut self, enabled: bool) -> Self {
        self.prune_matching = enabled;
        self
    }

    /// Configured linearization strategy.
    pub fn linearization(&self) -> Linearization {
        self.linearization
    }

    /// Whether the matching search prunes dominated branches.
    pub fn matching_pruning(&self) -> bool {
        self.prune_matching
    }
}
