//! Error types for graph operations.

use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building graphs or computing spanning trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Extraction was attempted on a heap with no entries.
    #[error("cannot pop from an empty priority queue")]
    EmptyQueue,

    /// The start node, or a node referenced by an adjacency list, is not a key of the graph.
    #[error("node {node} not found in graph")]
    NodeNotFound { node: String },

    /// A condition state code outside the known variants.
    #[error("unmapped condition state code {code}")]
    UnmappedState { code: u8 },

    /// Edge interval bounds rejected by strict construction.
    #[error("invalid edge interval [{min}, {max}]: {reason}")]
    InvalidEdge { min: f64, max: f64, reason: String },

    /// Invalid configuration value.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
}

impl GraphError {
    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        Self::NodeNotFound {
            node: format!("{node:?}"),
        }
    }
}
