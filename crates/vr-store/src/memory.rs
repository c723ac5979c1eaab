//! In-process store backend.
//!
//! All tables sit behind one `parking_lot::RwLock`, so readers never block
//! each other and every write is atomic with respect to route snapshots.
//! Foreign keys are enforced the way a relational backend would: an edge or
//! package may only reference existing checkpoints.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use vr_core::{Checkpoint, EdgeId, EdgeRecord, GeoPoint, NodeId, Package, PackageId};

use crate::store::{EdgeStore, NodeStore, PackageStore};
use crate::{StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    nodes: BTreeMap<NodeId, Checkpoint>,
    edges: Vec<EdgeRecord>,
    packages: Vec<Package>,
}

impl Tables {
    fn require_node(&self, id: NodeId) -> StoreResult<()> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::NodeNotFound(id))
        }
    }
}

/// Thread-safe in-memory implementation of every store trait.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with checkpoints that already carry their ids
    /// (e.g. rows read by [`load_checkpoints_reader`](crate::load_checkpoints_reader)).
    pub fn with_checkpoints(
        checkpoints: impl IntoIterator<Item = Checkpoint>,
    ) -> StoreResult<Self> {
        let store = Self::new();
        for c in checkpoints {
            store.insert_checkpoint(c)?;
        }
        Ok(store)
    }

    /// Insert a checkpoint with a caller-chosen id.  Fails on a duplicate id.
    pub fn insert_checkpoint(&self, checkpoint: Checkpoint) -> StoreResult<()> {
        let mut t = self.tables.write();
        if t.nodes.contains_key(&checkpoint.id) {
            return Err(StoreError::DuplicateNode(checkpoint.id));
        }
        t.nodes.insert(checkpoint.id, checkpoint);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.tables.read().nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.tables.read().edges.len()
    }
}

impl NodeStore for InMemoryStore {
    fn list_nodes(&self) -> StoreResult<Vec<Checkpoint>> {
        Ok(self.tables.read().nodes.values().cloned().collect())
    }

    fn get_node(&self, id: NodeId) -> StoreResult<Option<Checkpoint>> {
        Ok(self.tables.read().nodes.get(&id).cloned())
    }

    fn create_node(&self, name: &str, pos: GeoPoint) -> StoreResult<Checkpoint> {
        let mut t = self.tables.write();
        let id = match t.nodes.keys().next_back() {
            None => NodeId(0),
            Some(last) => last.next().ok_or(StoreError::TableFull("node"))?,
        };
        let checkpoint = Checkpoint::new(id, name, pos);
        t.nodes.insert(id, checkpoint.clone());
        debug!(%id, name, "created checkpoint");
        Ok(checkpoint)
    }
}

impl EdgeStore for InMemoryStore {
    fn list_edges(&self) -> StoreResult<Vec<EdgeRecord>> {
        Ok(self.tables.read().edges.clone())
    }

    fn create_edge(&self, start: NodeId, end: NodeId, distance_m: f64) -> StoreResult<EdgeRecord> {
        let mut t = self.tables.write();
        t.require_node(start)?;
        t.require_node(end)?;
        let id = EdgeId::try_from(t.edges.len())
            .map_err(|_| StoreError::TableFull("edge"))?;
        let edge = EdgeRecord { id, start, end, distance_m };
        t.edges.push(edge.clone());
        Ok(edge)
    }
}

impl PackageStore for InMemoryStore {
    fn create_package(
        &self,
        description: &str,
        start: NodeId,
        end: NodeId,
    ) -> StoreResult<Package> {
        let mut t = self.tables.write();
        t.require_node(start)?;
        t.require_node(end)?;
        let id = PackageId::try_from(t.packages.len())
            .map_err(|_| StoreError::TableFull("package"))?;
        let package = Package { id, description: description.to_owned(), start, end };
        t.packages.push(package.clone());
        Ok(package)
    }

    fn get_package(&self, id: PackageId) -> StoreResult<Option<Package>> {
        Ok(self.tables.read().packages.get(id.index()).cloned())
    }

    fn list_packages(&self) -> StoreResult<Vec<Package>> {
        Ok(self.tables.read().packages.clone())
    }
}
