//! Walk a predecessor table back from the destination.

use crate::engine::AllPairs;
use crate::{GraphError, GraphResult};

/// A path in matrix-index space.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexPath {
    /// Source first, destination last.
    pub indices: Vec<usize>,
    pub distance: f64,
}

/// Rebuild the shortest path `source → dest` from a solved [`AllPairs`].
///
/// Reachability is checked before the walk, so an infinite distance fails
/// fast with [`GraphError::NoPath`] instead of yielding a degenerate path.
/// A walk longer than the matrix size means the predecessor table is not a
/// shortest-path tree and is reported as [`GraphError::InvalidGraph`].
pub fn reconstruct(solution: &AllPairs, source: usize, dest: usize) -> GraphResult<IndexPath> {
    let size = solution.size();
    for index in [source, dest] {
        if index >= size {
            return Err(GraphError::IndexOutOfRange { index, size });
        }
    }

    if source == dest {
        return Ok(IndexPath { indices: vec![source], distance: 0.0 });
    }

    let distance = solution.distance(source, dest);
    if !distance.is_finite() {
        return Err(GraphError::NoPath { from: source, to: dest });
    }

    let mut indices = vec![dest];
    let mut current = dest;
    while let Some(prev) = solution.predecessor(source, current) {
        if indices.len() > size || prev >= size {
            return Err(GraphError::InvalidGraph(format!(
                "predecessor walk {source} -> {dest} does not terminate"
            )));
        }
        indices.push(prev);
        current = prev;
    }
    indices.reverse();

    if indices[0] != source {
        return Err(GraphError::InvalidGraph(format!(
            "predecessor walk {source} -> {dest} stopped at {}",
            indices[0]
        )));
    }

    Ok(IndexPath { indices, distance })
}
