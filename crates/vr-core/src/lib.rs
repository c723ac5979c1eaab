//! `vr-core` — foundational types for the `valley_route` routing workspace.
//!
//! This crate is a dependency of every other `vr-*` crate.  It has no `vr-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`, `PackageId`                           |
//! | [`geo`]    | `GeoPoint`, `Projection`, UTM reprojection distance       |
//! | [`record`] | `Checkpoint`, `EdgeRecord`, `Package`                     |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod record;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, Hemisphere, PlanarPoint, Projection};
pub use ids::{EdgeId, NodeId, PackageId};
pub use record::{Checkpoint, EdgeRecord, Package};
