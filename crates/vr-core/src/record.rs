//! Persisted record shapes shared by the store, graph, and service crates.

use crate::{EdgeId, GeoPoint, NodeId, PackageId};

/// A named geographic waypoint.  Identity is `id`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkpoint {
    pub id: NodeId,
    pub name: String,
    pub pos: GeoPoint,
}

impl Checkpoint {
    pub fn new(id: NodeId, name: impl Into<String>, pos: GeoPoint) -> Self {
        Self { id, name: name.into(), pos }
    }
}

/// A weighted connection between two checkpoints.
///
/// `distance_m` is always derived from the endpoints' coordinates when the
/// edge is created; it is never taken from external input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub start: NodeId,
    pub end: NodeId,
    pub distance_m: f64,
}

impl EdgeRecord {
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

/// A delivery request between two checkpoints.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub id: PackageId,
    pub description: String,
    pub start: NodeId,
    pub end: NodeId,
}
