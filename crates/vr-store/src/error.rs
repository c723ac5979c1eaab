use thiserror::Error;

use vr_core::{NodeId, PackageId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("package {0} not found")]
    PackageNotFound(PackageId),

    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("{0} table is full")]
    TableFull(&'static str),

    #[error("store parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
