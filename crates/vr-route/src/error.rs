//! Service-level error type.
//!
//! Graph and store errors are folded into the three kinds callers act on
//! (`NodeNotFound`/`PackageNotFound`, `Unreachable`, `InvalidGraph`); anything
//! else from the store is passed through as `Store`.

use thiserror::Error;

use vr_core::{NodeId, PackageId};
use vr_graph::GraphError;
use vr_store::StoreError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("package {0} not found")]
    PackageNotFound(PackageId),

    #[error("no route from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },

    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("store error: {0}")]
    Store(#[source] StoreError),
}

pub type RouteResult<T> = Result<T, RouteError>;

impl From<GraphError> for RouteError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::NodeNotFound(id) => RouteError::NodeNotFound(id),
            GraphError::Unreachable { from, to } => RouteError::Unreachable { from, to },
            GraphError::InvalidGraph(msg) => RouteError::InvalidGraph(msg),
            other @ (GraphError::IndexOutOfRange { .. } | GraphError::NoPath { .. }) => {
                RouteError::InvalidGraph(other.to_string())
            }
        }
    }
}

impl From<StoreError> for RouteError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NodeNotFound(id) => RouteError::NodeNotFound(id),
            StoreError::PackageNotFound(id) => RouteError::PackageNotFound(id),
            other => RouteError::Store(other),
        }
    }
}
