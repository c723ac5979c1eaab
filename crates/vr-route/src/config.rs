//! Route-service configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and handed to [`RouteService::new`](crate::RouteService::new).

use vr_core::Projection;
use vr_graph::Indexing;

/// Knobs for graph construction, edge creation, and caching.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Projected CRS used to derive edge distances.  Default: auto UTM zone.
    pub projection: Projection,

    /// Treat edges as one-way `start → end`.  Default: `false`.
    pub directed: bool,

    /// Node-id → matrix-index mapping.  Default: `Compact`.
    pub indexing: Indexing,

    /// Refuse `add_edge(a, a)` with `InvalidGraph`.  Default: `true`.
    pub reject_self_loops: bool,

    /// Keep the last solved graph keyed by snapshot content.  When `false`,
    /// every route query recomputes the all-pairs solution.  Default: `true`.
    pub cache_solutions: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            projection: Projection::AutoUtm,
            directed: false,
            indexing: Indexing::Compact,
            reject_self_loops: true,
            cache_solutions: true,
        }
    }
}
