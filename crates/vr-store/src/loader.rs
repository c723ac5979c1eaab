//! CSV loaders for seeding a store.
//!
//! # Checkpoints
//!
//! ```csv
//! id,name,lat,lon
//! 0,La Estrella,6.1599234,-75.6376913
//! 1,Sabaneta,6.1531035,-75.6167576
//! ```
//!
//! # Edges
//!
//! Only the endpoints are read.  There is no distance column:
//! edge lengths are always derived from the checkpoints' coordinates when
//! the edge is created.
//!
//! ```csv
//! start,end
//! 0,1
//! 0,2
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use vr_core::{Checkpoint, GeoPoint, NodeId};

use crate::{StoreError, StoreResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CheckpointRecord {
    id:   u32,
    name: String,
    lat:  f64,
    lon:  f64,
}

#[derive(Deserialize)]
struct EdgePairRecord {
    start: u32,
    end:   u32,
}

/// An edge request read from CSV: endpoints only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgePair {
    pub start: NodeId,
    pub end:   NodeId,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load checkpoints from a CSV file.
pub fn load_checkpoints_csv(path: &Path) -> StoreResult<Vec<Checkpoint>> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_checkpoints_reader(file)
}

/// Like [`load_checkpoints_csv`] but accepts any `Read` source.
pub fn load_checkpoints_reader<R: Read>(reader: R) -> StoreResult<Vec<Checkpoint>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<CheckpointRecord>()
        .map(|row| {
            let r = row.map_err(|e| StoreError::Parse(e.to_string()))?;
            Ok(Checkpoint::new(NodeId(r.id), r.name, GeoPoint::new(r.lat, r.lon)))
        })
        .collect()
}

/// Load edge endpoint pairs from a CSV file.
pub fn load_edge_pairs_csv(path: &Path) -> StoreResult<Vec<EdgePair>> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_edge_pairs_reader(file)
}

/// Like [`load_edge_pairs_csv`] but accepts any `Read` source.
pub fn load_edge_pairs_reader<R: Read>(reader: R) -> StoreResult<Vec<EdgePair>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<EdgePairRecord>()
        .map(|row| {
            let r = row.map_err(|e| StoreError::Parse(e.to_string()))?;
            Ok(EdgePair { start: NodeId(r.start), end: NodeId(r.end) })
        })
        .collect()
}
