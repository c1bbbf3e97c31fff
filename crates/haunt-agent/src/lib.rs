//! `haunt-agent`: ghost records and their behavior-state data.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `BehaviorState`, `StateKind`, `ModeClock`                 |
//! | [`ghost`]     | `Ghost` record                                            |
//! | [`roster`]    | `Roster` (all ghosts), `AgentRngs` (per-ghost RNG)        |
//! | [`builder`]   | `RosterBuilder` (fluent construction)                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |
//!
//! This crate holds data only.  The rules that move a ghost between states
//! live in `haunt-behavior`.

pub mod builder;
pub mod ghost;
pub mod roster;
pub mod state;


pub use builder::RosterBuilder;
pub use ghost::Ghost;
pub use roster::{AgentRngs, Roster};
pub use state::{BehaviorState, ModeClock, StateKind};
