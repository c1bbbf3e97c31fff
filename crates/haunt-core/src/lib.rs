//! `haunt-core`: foundational types for the `haunt` ghost-AI engine.
//!
//! This crate is a dependency of every other `haunt-*` crate.  It has no
//! `haunt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`ids`]       | `AgentId`                                                |
//! | [`geom`]      | `Position`, `Tile`, `Direction`, `Playfield`             |
//! | [`kind`]      | `GhostKind`                                              |
//! | [`time`]      | `Tick`, `LogicClock`                                     |
//! | [`rng`]       | `AgentRng` (per-agent)                                   |
//! | [`error`]     | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geom;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geom::{Direction, Playfield, Position, Tile};
pub use ids::AgentId;
pub use kind::GhostKind;
pub use rng::AgentRng;
pub use time::{LogicClock, Tick};
