//! Checkpoint graph representation and builder.
//!
//! # Data layout
//!
//! Edge weights live in a dense [`SquareMatrix<f64>`].  A missing edge is
//! `f64::INFINITY`, never `0.0`, so a zero-length edge between coincident
//! checkpoints is still a real edge.  The diagonal is `0.0`.
//!
//! # Indexing
//!
//! Node ids are mapped to matrix indices by a [`NodeIndex`]:
//!
//! | Mode               | index of `NodeId(n)`  | matrix size         |
//! |--------------------|-----------------------|---------------------|
//! | `Indexing::RawId`  | `n`                   | max observed id + 1 |
//! | `Indexing::Compact`| rank of `n` among ids | node count          |
//!
//! Raw-id slots without a node map to no id and have no edges.  Every `u32`
//! is a usable id.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `[lat, lon]` to the nearest checkpoint, so a
//! caller can snap a free coordinate onto the network.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use vr_core::{Checkpoint, EdgeRecord, GeoPoint, NodeId};

use crate::engine::{AllPairs, AllPairsSolver};
use crate::matrix::SquareMatrix;
use crate::path::{reconstruct, IndexPath};
use crate::{GraphError, GraphResult};

// ── Indexing ──────────────────────────────────────────────────────────────────

/// How node ids are turned into matrix indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Indexing {
    /// Use the id itself as the index.
    RawId,
    /// Map the sorted ids onto `0..N`.
    #[default]
    Compact,
}

/// Bidirectional `NodeId` ⇄ matrix-index mapping.
#[derive(Clone, Debug)]
pub struct NodeIndex {
    /// Index → id.  `None` marks an unused raw-id slot.
    ids: Vec<Option<NodeId>>,
    lookup: FxHashMap<NodeId, usize>,
}

impl NodeIndex {
    /// Build a mapping for `ids` (duplicates allowed, order irrelevant).
    pub fn new(indexing: Indexing, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let mut sorted: Vec<NodeId> = ids.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let ids = match indexing {
            Indexing::Compact => sorted.into_iter().map(Some).collect(),
            Indexing::RawId => {
                let size = sorted.last().map_or(0, |max| max.index() + 1);
                let mut slots = vec![None; size];
                for id in sorted {
                    slots[id.index()] = Some(id);
                }
                slots
            }
        };

        let lookup = ids
            .iter()
            .enumerate()
            .filter_map(|(i, id)| id.map(|id| (id, i)))
            .collect();

        Self { ids, lookup }
    }

    /// Matrix dimension.
    #[inline]
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Number of real nodes (excludes unused raw-id slots).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.lookup.len()
    }

    #[inline]
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.lookup.get(&id).copied()
    }

    /// Id stored at `index`, or `None` for unused slots and out-of-range
    /// indices.
    #[inline]
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        self.ids.get(index).copied().flatten()
    }
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in degree space; enough for picking the
    /// closest checkpoint inside one city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Weighted checkpoint graph.  Construct through [`GraphBuilder`].
pub struct Graph {
    index: NodeIndex,
    adjacency: SquareMatrix<f64>,
    directed: bool,
    edge_count: usize,
    spatial_idx: RTree<NodeEntry>,
}

impl Graph {
    pub fn builder(indexing: Indexing, directed: bool) -> GraphBuilder {
        GraphBuilder::new(indexing, directed)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Matrix dimension (see module docs for how it depends on indexing).
    #[inline]
    pub fn size(&self) -> usize {
        self.adjacency.size()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.index.node_count()
    }

    /// Number of edge writes applied (self-loops excluded, duplicates counted).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn adjacency(&self) -> &SquareMatrix<f64> {
        &self.adjacency
    }

    pub fn into_adjacency(self) -> SquareMatrix<f64> {
        self.adjacency
    }

    #[inline]
    pub fn node_index(&self) -> &NodeIndex {
        &self.index
    }

    #[inline]
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.index_of(id)
    }

    #[inline]
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        self.index.node_at(index)
    }

    /// Weight of the direct edge `a → b`, if one exists.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        if a == b {
            return None;
        }
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        let w = self.adjacency[(i, j)];
        w.is_finite().then_some(w)
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Checkpoint closest to `pos`; `None` only if the graph has no nodes.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Solve all pairs on this graph's adjacency.
    pub fn solve<S: AllPairsSolver + ?Sized>(&self, solver: &S) -> AllPairs {
        solver.compute_all_pairs(&self.adjacency, self.directed)
    }

    /// Shortest path `from → to` read out of a solution computed for this
    /// graph.
    pub fn shortest_path(
        &self,
        solution: &AllPairs,
        from: NodeId,
        to: NodeId,
    ) -> GraphResult<NodePath> {
        let source = self.index_of(from).ok_or(GraphError::NodeNotFound(from))?;
        let dest = self.index_of(to).ok_or(GraphError::NodeNotFound(to))?;

        let IndexPath { indices, distance } =
            reconstruct(solution, source, dest).map_err(|e| match e {
                GraphError::NoPath { .. } => GraphError::Unreachable { from, to },
                other => other,
            })?;

        let nodes = indices
            .into_iter()
            .map(|i| {
                self.node_at(i).ok_or_else(|| {
                    GraphError::InvalidGraph(format!("path passes through empty slot {i}"))
                })
            })
            .collect::<GraphResult<Vec<_>>>()?;

        Ok(NodePath { nodes, distance_m: distance })
    }
}

/// A reconstructed route expressed in node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct NodePath {
    /// Source first, destination last.
    pub nodes: Vec<NodeId>,
    pub distance_m: f64,
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Collect nodes and edges in any order, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use vr_core::{GeoPoint, NodeId};
/// use vr_graph::{Graph, Indexing};
///
/// let mut b = Graph::builder(Indexing::Compact, false);
/// b.add_node(NodeId(10), GeoPoint::new(6.16, -75.64));
/// b.add_node(NodeId(20), GeoPoint::new(6.15, -75.62));
/// b.add_edge(NodeId(10), NodeId(20), 2_400.0);
/// let g = b.build().unwrap();
/// assert_eq!(g.size(), 2);
/// assert!(g.has_edge(NodeId(20), NodeId(10))); // undirected
/// ```
pub struct GraphBuilder {
    indexing: Indexing,
    directed: bool,
    nodes: Vec<(NodeId, GeoPoint)>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    start: NodeId,
    end: NodeId,
    distance_m: f64,
}

impl GraphBuilder {
    pub fn new(indexing: Indexing, directed: bool) -> Self {
        Self { indexing, directed, nodes: Vec::new(), raw_edges: Vec::new() }
    }

    pub fn with_capacity(indexing: Indexing, directed: bool, nodes: usize, edges: usize) -> Self {
        Self {
            indexing,
            directed,
            nodes: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    pub fn add_node(&mut self, id: NodeId, pos: GeoPoint) -> &mut Self {
        self.nodes.push((id, pos));
        self
    }

    pub fn add_checkpoint(&mut self, checkpoint: &Checkpoint) -> &mut Self {
        self.add_node(checkpoint.id, checkpoint.pos)
    }

    pub fn add_edge(&mut self, start: NodeId, end: NodeId, distance_m: f64) -> &mut Self {
        self.raw_edges.push(RawEdge { start, end, distance_m });
        self
    }

    pub fn add_edge_record(&mut self, edge: &EdgeRecord) -> &mut Self {
        self.add_edge(edge.start, edge.end, edge.distance_m)
    }

    /// Consume the builder and produce a [`Graph`].
    ///
    /// Fails with `NodeNotFound` for an edge endpoint that was never added
    /// and with `InvalidGraph` for a negative or NaN distance.  Self-loops
    /// are skipped.  Repeated edges between one pair: last write wins.
    pub fn build(self) -> GraphResult<Graph> {
        let index = NodeIndex::new(self.indexing, self.nodes.iter().map(|(id, _)| *id));
        let size = index.size();

        let mut adjacency = SquareMatrix::filled(size, f64::INFINITY);
        for i in 0..size {
            adjacency[(i, i)] = 0.0;
        }

        let mut edge_count = 0;
        for e in &self.raw_edges {
            if e.distance_m.is_nan() || e.distance_m < 0.0 {
                return Err(GraphError::InvalidGraph(format!(
                    "edge {} -> {} has distance {}",
                    e.start, e.end, e.distance_m
                )));
            }
            let i = index.index_of(e.start).ok_or(GraphError::NodeNotFound(e.start))?;
            let j = index.index_of(e.end).ok_or(GraphError::NodeNotFound(e.end))?;
            if i == j {
                trace!(node = %e.start, "skipping self-loop edge");
                continue;
            }

            adjacency[(i, j)] = e.distance_m;
            if !self.directed {
                adjacency[(j, i)] = e.distance_m;
            }
            edge_count += 1;
        }

        // Later duplicates of a node id win, matching the edge policy.
        let mut positions: FxHashMap<NodeId, GeoPoint> = FxHashMap::default();
        positions.extend(self.nodes.iter().copied());
        let entries: Vec<NodeEntry> = positions
            .into_iter()
            .map(|(id, pos)| NodeEntry { point: [pos.lat, pos.lon], id })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(
            nodes = index.node_count(),
            edges = edge_count,
            size,
            indexing = ?self.indexing,
            directed = self.directed,
            "built checkpoint graph"
        );

        Ok(Graph { index, adjacency, directed: self.directed, edge_count, spatial_idx })
    }
}

// ── build_adjacency ───────────────────────────────────────────────────────────

/// Raw-id, undirected adjacency for a node/edge snapshot.
///
/// The matrix is sized `max id + 1`; unused indices have no edges.  Absent
/// edges are `f64::INFINITY`.
pub fn build_adjacency(
    nodes: &[Checkpoint],
    edges: &[EdgeRecord],
) -> GraphResult<SquareMatrix<f64>> {
    let mut b = GraphBuilder::with_capacity(Indexing::RawId, false, nodes.len(), edges.len());
    for n in nodes {
        b.add_checkpoint(n);
    }
    for e in edges {
        b.add_edge_record(e);
    }
    Ok(b.build()?.into_adjacency())
}
