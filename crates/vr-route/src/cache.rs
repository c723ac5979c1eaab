//! Content-keyed cache of the last solved graph.
//!
//! Solving all pairs is the expensive step of a route query.  The store
//! snapshot (nodes + edges) is cheap to list, so it is hashed with `FxHasher`
//! together with the graph-shaping config, and the solved graph is reused
//! while the key is unchanged.  Mutations through the service also call
//! [`SolutionCache::invalidate`] so a stale solution is dropped eagerly.
//!
//! Readers share the solution through an `Arc`; the mutex is only held to
//! read or swap that `Arc`, never while solving.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHasher};

use vr_core::{Checkpoint, EdgeRecord, NodeId};
use vr_graph::{AllPairs, Graph, Indexing};

/// A graph, its all-pairs solution, and the checkpoints it was built from.
pub struct SolvedGraph {
    pub graph: Graph,
    pub solution: AllPairs,
    pub checkpoints: FxHashMap<NodeId, Checkpoint>,
}

/// Hash of everything that determines a [`SolvedGraph`].
pub fn snapshot_key(
    nodes: &[Checkpoint],
    edges: &[EdgeRecord],
    indexing: Indexing,
    directed: bool,
) -> u64 {
    let mut h = FxHasher::default();
    indexing.hash(&mut h);
    directed.hash(&mut h);

    nodes.len().hash(&mut h);
    for n in nodes {
        n.id.hash(&mut h);
        n.name.hash(&mut h);
        n.pos.lat.to_bits().hash(&mut h);
        n.pos.lon.to_bits().hash(&mut h);
    }

    edges.len().hash(&mut h);
    for e in edges {
        e.start.hash(&mut h);
        e.end.hash(&mut h);
        e.distance_m.to_bits().hash(&mut h);
    }

    h.finish()
}

#[derive(Default)]
pub struct SolutionCache {
    slot: Mutex<Option<(u64, Arc<SolvedGraph>)>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached solution if its key matches.  Counts a hit or a miss.
    pub fn get(&self, key: u64) -> Option<Arc<SolvedGraph>> {
        let found = match &*self.slot.lock() {
            Some((k, solved)) if *k == key => Some(Arc::clone(solved)),
            _ => None,
        };
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn insert(&self, key: u64, solved: Arc<SolvedGraph>) {
        *self.slot.lock() = Some((key, solved));
    }

    pub fn invalidate(&self) {
        self.slot.lock().take();
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock().is_none()
    }

    /// `(hits, misses)` since construction.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits.load(Ordering::Relaxed), self.misses.load(Ordering::Relaxed))
    }
}
