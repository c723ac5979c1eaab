//! Collaborator interfaces the routing core reads from and writes to.
//!
//! The core never assumes a backend: a SQL database, a remote service, or the
//! bundled [`InMemoryStore`](crate::InMemoryStore) all fit behind these
//! traits.  Implementations must be `Send + Sync`; the store is the
//! serialization point for concurrent route requests.

use vr_core::{Checkpoint, EdgeRecord, GeoPoint, NodeId, Package, PackageId};

use crate::StoreResult;

/// Read/write access to checkpoints.
pub trait NodeStore: Send + Sync {
    /// Every known checkpoint, ascending by id.
    fn list_nodes(&self) -> StoreResult<Vec<Checkpoint>>;

    /// `Ok(None)` when the id is unknown.
    fn get_node(&self, id: NodeId) -> StoreResult<Option<Checkpoint>>;

    /// Persist a new checkpoint and return it with its allocated id.
    fn create_node(&self, name: &str, pos: GeoPoint) -> StoreResult<Checkpoint>;
}

/// Read/write access to edges.
pub trait EdgeStore: Send + Sync {
    /// Every edge in creation order.
    fn list_edges(&self) -> StoreResult<Vec<EdgeRecord>>;

    /// Persist an edge.  `distance_m` has already been derived by the caller
    /// from the endpoints' coordinates.
    fn create_edge(&self, start: NodeId, end: NodeId, distance_m: f64) -> StoreResult<EdgeRecord>;
}

/// Read/write access to delivery packages.
pub trait PackageStore: Send + Sync {
    fn create_package(&self, description: &str, start: NodeId, end: NodeId)
        -> StoreResult<Package>;

    fn get_package(&self, id: PackageId) -> StoreResult<Option<Package>>;

    /// Every package in creation order.
    fn list_packages(&self) -> StoreResult<Vec<Package>>;
}
