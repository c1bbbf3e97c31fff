//! Core error type.
//!
//! Only parsing can fail at this level.  Sub-crates define their own error
//! enums for construction-time validation; nothing on the per-tick path
//! returns an error.

use thiserror::Error;

/// Errors produced by `haunt-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown ghost kind `{0}` (expected chaser, ambusher, flanker or shy)")]
    UnknownKind(String),
}

/// Shorthand result type for `haunt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
