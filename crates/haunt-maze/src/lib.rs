//! `haunt-maze`: tile occupancy grid and first-step path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`grid`]   | `MazeSpec`, `Grid`, `GridBuilder`, `AsciiMaze`, `EdgeMode`    |
//! | [`lazy`]   | `LazyGrid` (build-once, read-many holder)                     |
//! | [`search`] | `bfs_next_step`, `astar_next_step`, `SearchSpec`, `NextStep`  |
//! | [`error`]  | `MazeError`, `MazeResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on configuration types.    |

pub mod error;
pub mod grid;
pub mod lazy;
pub mod search;


pub use error::{MazeError, MazeResult};
pub use grid::{AsciiMaze, EdgeMode, Grid, GridBuilder, MazeSpec};
pub use lazy::LazyGrid;
pub use search::{
    astar_next_step, astar_next_step_with_edges, bfs_next_step, bfs_next_step_with_edges,
    search, Algorithm, Heuristic, Manhattan, NextStep, SearchOutcome, SearchSpec, Zero,
    DEFAULT_ASTAR_CAP, DEFAULT_BFS_CAP,
};
