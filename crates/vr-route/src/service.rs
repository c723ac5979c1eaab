//! Route resolution over the store collaborator.
//!
//! # Query flow
//!
//! ```text
//! list_nodes + list_edges ──► GraphBuilder::build ──► AllPairsSolver
//!                                   │                      │
//!                                   └──── SolvedGraph ◄────┘  (cached by content)
//!                                               │
//! resolve_route(a, b) ──► Graph::shortest_path ─┴─► PathResult { checkpoints, distance }
//! ```
//!
//! Mutations (`create_node`, `add_edge`, `import_edges`) go through the store
//! and invalidate the cached solution.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use vr_core::{Checkpoint, EdgeRecord, GeoPoint, NodeId, Package, PackageId};
use vr_graph::{AllPairsSolver, DijkstraAllPairs, Graph, GraphBuilder};
use vr_store::{EdgePair, EdgeStore, NodeStore, PackageStore};

use crate::cache::{snapshot_key, SolutionCache, SolvedGraph};
use crate::{RouteConfig, RouteError, RouteResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// A resolved route: checkpoints from source to destination inclusive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub path: Vec<Checkpoint>,
    pub distance_m: f64,
}

impl PathResult {
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.path.iter().map(|c| c.id).collect()
    }
}

/// A package together with the route between its endpoints.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageRoute {
    pub package: Package,
    pub route: PathResult,
}

/// How many packages start (or end) at one checkpoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckpointUsage {
    pub checkpoint: Checkpoint,
    pub packages: usize,
}

// ── RouteService ──────────────────────────────────────────────────────────────

/// Answers "what is the route and distance between A and B" for a store.
///
/// `S` is the store collaborator; `P` the all-pairs algorithm (Dijkstra by
/// default).  The service is `Send + Sync` whenever both are, so one
/// instance can serve concurrent requests.
pub struct RouteService<S, P = DijkstraAllPairs> {
    store: S,
    solver: P,
    config: RouteConfig,
    cache: SolutionCache,
}

impl<S: NodeStore + EdgeStore> RouteService<S, DijkstraAllPairs> {
    pub fn new(store: S, config: RouteConfig) -> Self {
        Self::with_solver(store, config, DijkstraAllPairs)
    }
}

impl<S: NodeStore + EdgeStore, P: AllPairsSolver> RouteService<S, P> {
    pub fn with_solver(store: S, config: RouteConfig, solver: P) -> Self {
        Self { store, solver, config, cache: SolutionCache::new() }
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    #[inline]
    pub fn cache(&self) -> &SolutionCache {
        &self.cache
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Shortest route `source → dest` over the store's current edges.
    ///
    /// Errors: `NodeNotFound` if either id is unknown, `Unreachable` if no
    /// path exists.
    pub fn resolve_route(&self, source: NodeId, dest: NodeId) -> RouteResult<PathResult> {
        let solved = self.solved_snapshot()?;
        resolve_in(&solved, source, dest)
    }

    /// Checkpoint closest to a free coordinate, if any exist.
    pub fn nearest_checkpoint(&self, pos: GeoPoint) -> RouteResult<Option<Checkpoint>> {
        let solved = self.solved_snapshot()?;
        Ok(solved
            .graph
            .nearest_node(pos)
            .and_then(|id| solved.checkpoints.get(&id).cloned()))
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    pub fn create_node(&self, name: &str, pos: GeoPoint) -> RouteResult<Checkpoint> {
        let checkpoint = self.store.create_node(name, pos)?;
        self.cache.invalidate();
        info!(id = %checkpoint.id, name, "checkpoint created");
        Ok(checkpoint)
    }

    /// Create an edge whose distance is derived from the endpoints.
    ///
    /// Errors: `NodeNotFound` for an unknown endpoint (checked first);
    /// `InvalidGraph` for a self-loop when `reject_self_loops` is set.
    pub fn add_edge(&self, start: NodeId, end: NodeId) -> RouteResult<EdgeRecord> {
        let edge = self.derive_and_store_edge(start, end)?;
        self.cache.invalidate();
        Ok(edge)
    }

    /// Add many edges, invalidating the cache once.
    ///
    /// Not transactional: edges created before a failing pair are kept.
    pub fn import_edges(&self, pairs: &[EdgePair]) -> RouteResult<Vec<EdgeRecord>> {
        let result = pairs
            .iter()
            .map(|p| self.derive_and_store_edge(p.start, p.end))
            .collect::<RouteResult<Vec<_>>>();
        self.cache.invalidate();
        let edges = result.inspect_err(|e| warn!(error = %e, "edge import stopped"))?;
        info!(count = edges.len(), "edges imported");
        Ok(edges)
    }

    fn derive_and_store_edge(&self, start: NodeId, end: NodeId) -> RouteResult<EdgeRecord> {
        let a = self.require_node(start)?;
        let b = self.require_node(end)?;
        if start == end && self.config.reject_self_loops {
            return Err(RouteError::InvalidGraph(format!("self-loop edge on {start}")));
        }
        let distance_m = a.pos.distance_m(b.pos, self.config.projection);
        let edge = self.store.create_edge(start, end, distance_m)?;
        debug!(id = %edge.id, %start, %end, distance_m, "edge created");
        Ok(edge)
    }

    fn require_node(&self, id: NodeId) -> RouteResult<Checkpoint> {
        self.store.get_node(id)?.ok_or(RouteError::NodeNotFound(id))
    }

    // ── Solving ───────────────────────────────────────────────────────────

    /// Current store snapshot, built and solved (or taken from the cache).
    pub fn solved_snapshot(&self) -> RouteResult<Arc<SolvedGraph>> {
        let nodes = self.store.list_nodes()?;
        let edges = self.store.list_edges()?;

        if !self.config.cache_solutions {
            return Ok(Arc::new(self.solve(nodes, &edges)?));
        }

        let key = snapshot_key(&nodes, &edges, self.config.indexing, self.config.directed);
        if let Some(hit) = self.cache.get(key) {
            debug!(key, "solution cache hit");
            return Ok(hit);
        }

        debug!(key, "solution cache miss");
        let solved = Arc::new(self.solve(nodes, &edges)?);
        self.cache.insert(key, Arc::clone(&solved));
        Ok(solved)
    }

    fn solve(&self, nodes: Vec<Checkpoint>, edges: &[EdgeRecord]) -> RouteResult<SolvedGraph> {
        let mut b = GraphBuilder::with_capacity(
            self.config.indexing,
            self.config.directed,
            nodes.len(),
            edges.len(),
        );
        for n in &nodes {
            b.add_checkpoint(n);
        }
        for e in edges {
            b.add_edge_record(e);
        }
        let graph: Graph = b.build()?;
        let solution = graph.solve(&self.solver);
        let checkpoints = nodes.into_iter().map(|c| (c.id, c)).collect();
        Ok(SolvedGraph { graph, solution, checkpoints })
    }
}

impl<S, P> RouteService<S, P>
where
    S: NodeStore + EdgeStore + PackageStore,
    P: AllPairsSolver,
{
    /// Register a package; both endpoints must exist.
    pub fn create_package(
        &self,
        description: &str,
        start: NodeId,
        end: NodeId,
    ) -> RouteResult<Package> {
        self.require_node(start)?;
        self.require_node(end)?;
        let package = self.store.create_package(description, start, end)?;
        info!(id = %package.id, %start, %end, "package created");
        Ok(package)
    }

    /// The package and its resolved route.
    pub fn package_route(&self, id: PackageId) -> RouteResult<PackageRoute> {
        let package = self.store.get_package(id)?.ok_or(RouteError::PackageNotFound(id))?;
        let route = self.resolve_route(package.start, package.end)?;
        Ok(PackageRoute { package, route })
    }

    /// Packages per start checkpoint, ascending by checkpoint id.
    pub fn package_counts_by_start(&self) -> RouteResult<Vec<CheckpointUsage>> {
        self.package_counts(|p| p.start)
    }

    /// Packages per end checkpoint, ascending by checkpoint id.
    pub fn package_counts_by_end(&self) -> RouteResult<Vec<CheckpointUsage>> {
        self.package_counts(|p| p.end)
    }

    fn package_counts(&self, key: impl Fn(&Package) -> NodeId) -> RouteResult<Vec<CheckpointUsage>> {
        let mut counts: FxHashMap<NodeId, usize> = FxHashMap::default();
        for p in self.store.list_packages()? {
            *counts.entry(key(&p)).or_default() += 1;
        }

        let mut usage = counts
            .into_iter()
            .map(|(id, packages)| {
                Ok(CheckpointUsage { checkpoint: self.require_node(id)?, packages })
            })
            .collect::<RouteResult<Vec<_>>>()?;
        usage.sort_unstable_by_key(|u| u.checkpoint.id);
        Ok(usage)
    }
}

fn resolve_in(solved: &SolvedGraph, source: NodeId, dest: NodeId) -> RouteResult<PathResult> {
    let node_path = solved.graph.shortest_path(&solved.solution, source, dest)?;
    let path = node_path
        .nodes
        .iter()
        .map(|id| solved.checkpoints.get(id).cloned().ok_or(RouteError::NodeNotFound(*id)))
        .collect::<RouteResult<Vec<_>>>()?;
    Ok(PathResult { path, distance_m: node_path.distance_m })
}
