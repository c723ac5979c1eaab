//! Graph-subsystem error type.

use thiserror::Error;

use vr_core::NodeId;

/// Errors produced by `vr-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("matrix index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// No path between two matrix indices (index-level form of `Unreachable`).
    #[error("no path from index {from} to index {to}")]
    NoPath { from: usize, to: usize },

    #[error("no route from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },

    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
