//! Maze-construction error type.
//!
//! Only building a grid can fail.  Queries and searches never return errors;
//! out-of-range input is clamped or discarded instead.

use thiserror::Error;

/// Errors produced by `haunt-maze`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze spec: tile_size={tile_size}, cols={cols}, rows={rows}")]
    InvalidSpec { tile_size: i32, cols: i32, rows: i32 },

    #[error("ascii maze row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("ascii maze has no rows")]
    Empty,
}

pub type MazeResult<T> = Result<T, MazeError>;
