//! All-pairs shortest-path solvers.
//!
//! # Pluggability
//!
//! `vr-route` calls the solver through the [`AllPairsSolver`] trait, so a
//! caller can swap the algorithm without touching graph construction.  The
//! default [`DijkstraAllPairs`] runs a binary-heap Dijkstra from every source
//! (edge weights are non-negative by construction).  [`FloydWarshall`] is the
//! O(N³) alternative; both fill the same [`AllPairs`] tables.
//!
//! # Output
//!
//! - `distances[i][j]`: shortest distance `i → j`; `0` on the diagonal,
//!   `+∞` when unreachable.
//! - `predecessors[i][j]`: index just before `j` on that path, or
//!   [`NO_PREDECESSOR`] when `i == j` or `j` is unreachable.
//!
//! # Undirected input
//!
//! With `directed == false` the weight of `{i, j}` is
//! `min(M[i][j], M[j][i])`, so a one-sided matrix is still usable.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use tracing::debug;

use crate::matrix::SquareMatrix;

/// Sentinel in the predecessor matrix: outside every valid index.
pub const NO_PREDECESSOR: u32 = u32::MAX;

// ── AllPairs ──────────────────────────────────────────────────────────────────

/// Distance and predecessor tables for every (source, target) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct AllPairs {
    pub distances: SquareMatrix<f64>,
    pub predecessors: SquareMatrix<u32>,
}

impl AllPairs {
    #[inline]
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[(from, to)]
    }

    /// Predecessor of `to` on the shortest path from `from`.
    #[inline]
    pub fn predecessor(&self, from: usize, to: usize) -> Option<usize> {
        match self.predecessors[(from, to)] {
            NO_PREDECESSOR => None,
            p => Some(p as usize),
        }
    }

    #[inline]
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.distances[(from, to)].is_finite()
    }
}

// ── Solver trait ──────────────────────────────────────────────────────────────

/// Pluggable all-pairs shortest-path algorithm.
///
/// Implementations must be deterministic: identical input yields identical
/// tables.  They must be `Send + Sync` so one solver can serve concurrent
/// route requests.
pub trait AllPairsSolver: Send + Sync {
    /// Solve every pair of `adjacency` (absent edges are `+∞`).
    fn compute_all_pairs(&self, adjacency: &SquareMatrix<f64>, directed: bool) -> AllPairs;
}

#[inline]
fn weight(adjacency: &SquareMatrix<f64>, i: usize, j: usize, directed: bool) -> f64 {
    if directed {
        adjacency[(i, j)]
    } else {
        adjacency[(i, j)].min(adjacency[(j, i)])
    }
}

// ── DijkstraAllPairs ──────────────────────────────────────────────────────────

/// Dijkstra from every source.  O(N · (N + E) log N).
///
/// With the `parallel` feature the per-source passes run on the Rayon pool;
/// each pass only reads the shared neighbour lists, so the result is the
/// same as the sequential run.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraAllPairs;

impl AllPairsSolver for DijkstraAllPairs {
    fn compute_all_pairs(&self, adjacency: &SquareMatrix<f64>, directed: bool) -> AllPairs {
        let started = Instant::now();
        let n = adjacency.size();

        // Neighbour lists, ascending by index so relaxation order is fixed.
        let neighbours: Vec<Vec<(usize, f64)>> = (0..n)
            .map(|i| {
                (0..n)
                    .filter(|&j| j != i)
                    .filter_map(|j| {
                        let w = weight(adjacency, i, j, directed);
                        w.is_finite().then_some((j, w))
                    })
                    .collect()
            })
            .collect();

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<(Vec<f64>, Vec<u32>)> =
            (0..n).map(|s| single_source(&neighbours, s)).collect();

        #[cfg(feature = "parallel")]
        let rows: Vec<(Vec<f64>, Vec<u32>)> = {
            use rayon::prelude::*;
            (0..n).into_par_iter().map(|s| single_source(&neighbours, s)).collect()
        };

        let (dist_rows, pred_rows): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        let result = AllPairs {
            distances: SquareMatrix::from_rows(dist_rows),
            predecessors: SquareMatrix::from_rows(pred_rows),
        };

        debug!(size = n, elapsed = ?started.elapsed(), "dijkstra all-pairs solved");
        result
    }
}

/// Min-heap entry.  Ordered by cost, then index, both reversed so that
/// `BinaryHeap` (a max-heap) pops the cheapest, lowest-index entry first.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    cost: f64,
    node: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

fn single_source(neighbours: &[Vec<(usize, f64)>], source: usize) -> (Vec<f64>, Vec<u32>) {
    let n = neighbours.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred = vec![NO_PREDECESSOR; n];

    dist[source] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(Candidate { cost: 0.0, node: source });

    while let Some(Candidate { cost, node }) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node] {
            continue;
        }

        for &(next, w) in &neighbours[node] {
            let new_cost = cost + w;
            if new_cost < dist[next] {
                dist[next] = new_cost;
                pred[next] = node as u32;
                heap.push(Candidate { cost: new_cost, node: next });
            }
        }
    }

    (dist, pred)
}

// ── FloydWarshall ─────────────────────────────────────────────────────────────

/// Classic triple loop.  O(N³) time, no auxiliary structures.
#[derive(Copy, Clone, Debug, Default)]
pub struct FloydWarshall;

impl AllPairsSolver for FloydWarshall {
    fn compute_all_pairs(&self, adjacency: &SquareMatrix<f64>, directed: bool) -> AllPairs {
        let started = Instant::now();
        let n = adjacency.size();

        let mut dist = SquareMatrix::filled(n, f64::INFINITY);
        let mut pred = SquareMatrix::filled(n, NO_PREDECESSOR);
        for i in 0..n {
            dist[(i, i)] = 0.0;
            for j in (0..n).filter(|&j| j != i) {
                let w = weight(adjacency, i, j, directed);
                if w.is_finite() {
                    dist[(i, j)] = w;
                    pred[(i, j)] = i as u32;
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[(i, k)];
                if !d_ik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let through = d_ik + dist[(k, j)];
                    if through < dist[(i, j)] {
                        dist[(i, j)] = through;
                        pred[(i, j)] = pred[(k, j)];
                    }
                }
            }
        }

        debug!(size = n, elapsed = ?started.elapsed(), "floyd-warshall all-pairs solved");
        AllPairs { distances: dist, predecessors: pred }
    }
}
