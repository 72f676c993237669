//! Error types shared by every graph and routing operation.

use std::fmt::Debug;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures reported by graph construction and routing algorithms.
///
/// Vertex identifiers are rendered with their `Debug` form so the error type
/// stays independent of the vertex type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a vertex that is not in the graph.
    #[error("unknown vertex: {0}")]
    InvalidVertex(String),

    /// An algorithm needed a direct edge that the graph does not have.
    #[error("no edge between {from} and {to}")]
    MissingEdge {
        /// One endpoint of the missing edge.
        from: String,
        /// The other endpoint.
        to: String,
    },

    /// The operation needs at least one vertex.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A tour construction reached a vertex with no legal next step.
    #[error("no feasible extension from vertex {0}")]
    NoFeasibleExtension(String),

    /// No path connects the two vertices.
    #[error("{to} is unreachable from {from}")]
    Unreachable {
        /// Source vertex.
        from: String,
        /// Target vertex.
        to: String,
    },
}

impl GraphError {
    pub(crate) fn invalid_vertex<V: Debug>(v: &V) -> Self {
        Self::InvalidVertex(format!("{v:?}"))
    }

    pub(crate) fn missing_edge<V: Debug>(from: &V, to: &V) -> Self {
        Self::MissingEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn no_feasible_extension<V: Debug>(at: &V) -> Self {
        Self::NoFeasibleExtension(format!("{at:?}"))
    }

    pub(crate) fn unreachable<V: Debug>(from: &V, to: &V) -> Self {
        Self::Unreachable {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render_debug_form() {
        let err = GraphError::invalid_vertex(&"Harvard Square");
        assert_eq!(err.to_string(), "unknown vertex: \"Harvard Square\"");

        let err = GraphError::missing_edge(&1, &2);
        assert_eq!(err.to_string(), "no edge between 1 and 2");
    }

    #[test]
    fn test_unreachable_fields() {
        let err = GraphError::unreachable(&'a', &'z');
        assert_eq!(
            err,
            GraphError::Unreachable {
                from: "'a'".to_string(),
                to: "'z'".to_string(),
            }
        );
    }
}
