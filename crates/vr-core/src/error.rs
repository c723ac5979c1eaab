//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers the
//! validation done by the value types in this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("UTM zone {0} is outside 1..=60")]
    InvalidUtmZone(u8),
}

/// Shorthand result type for `vr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
