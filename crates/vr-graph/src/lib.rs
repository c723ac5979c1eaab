//! `vr-graph` — checkpoint graph, all-pairs shortest paths, and path
//! reconstruction.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`matrix`] | `SquareMatrix<T>` (flat row-major)                         |
//! | [`graph`]  | `Graph`, `GraphBuilder`, `NodeIndex`, `build_adjacency`    |
//! | [`engine`] | `AllPairsSolver` trait, `DijkstraAllPairs`, `FloydWarshall`|
//! | [`path`]   | `reconstruct`, `IndexPath`                                 |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Per-source Dijkstra passes run on the Rayon pool.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Indexing`.        |

pub mod engine;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod path;


pub use engine::{AllPairs, AllPairsSolver, DijkstraAllPairs, FloydWarshall, NO_PREDECESSOR};
pub use error::{GraphError, GraphResult};
pub use graph::{build_adjacency, Graph, GraphBuilder, Indexing, NodeIndex, NodePath};
pub use matrix::SquareMatrix;
pub use path::{reconstruct, IndexPath};
