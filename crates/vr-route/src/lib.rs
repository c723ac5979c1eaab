//! `vr-route` — route resolution service.
//!
//! Ties the store collaborator (`vr-store`), graph construction and solving
//! (`vr-graph`), and geodesic edge lengths (`vr-core`) together.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`service`] | `RouteService`, `PathResult`, `PackageRoute`, `CheckpointUsage` |
//! | [`cache`]   | `SolutionCache`, `SolvedGraph`, `snapshot_key`            |
//! | [`config`]  | `RouteConfig`                                             |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Enables `vr-graph/parallel`.                            |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and results.|

pub mod cache;
pub mod config;
pub mod error;
pub mod service;


pub use cache::{SolutionCache, SolvedGraph};
pub use config::RouteConfig;
pub use error::{RouteError, RouteResult};
pub use service::{CheckpointUsage, PackageRoute, PathResult, RouteService};
