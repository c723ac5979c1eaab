//! `vr-store` — the collaborator side of the routing core.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`store`]  | `NodeStore`, `EdgeStore`, `PackageStore` traits            |
//! | [`memory`] | `InMemoryStore` (all three traits, `parking_lot::RwLock`)  |
//! | [`loader`] | `load_checkpoints_*`, `load_edge_pairs_*`, `EdgePair`      |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                             |

pub mod error;
pub mod loader;
pub mod memory;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use loader::{
    load_checkpoints_csv, load_checkpoints_reader, load_edge_pairs_csv, load_edge_pairs_reader,
    EdgePair,
};
pub use memory::InMemoryStore;
pub use store::{EdgeStore, NodeStore, PackageStore};
