//! `haunt-behavior`: what each ghost does on each tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`config`]   | `BehaviorConfig`, `HouseConfig`                                |
//! | [`context`]  | `TickContext<'a>`, `Pursued`, `PeerView`                       |
//! | [`strategy`] | `Strategy`, `TargetRule`, `Corner`                             |
//! | [`navigate`] | `head_toward`, `greedy_direction`, `wander`                    |
//! | [`machine`]  | `step`, `on_signal`, `Step`                                    |
//! | [`intent`]   | `Intent` (`Move`, `Hold`)                                      |
//! | [`signal`]   | `Signal`, `Transition`, `TransitionCause`                      |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! A tick is split the same way for every ghost:
//!
//! 1. **Decide** (parallel-safe): [`step`] reads the shared [`TickContext`]
//!    and mutates only the one ghost's state and timers.  Peers are seen
//!    through the previous-tick snapshot in `ctx.peers`.
//!
//! 2. **Commit** (caller): the movement layer applies each [`Intent`] and
//!    writes the new position and facing back.
//!
//! Nothing on the per-tick path returns an error.  Search failures degrade
//! to steering at the raw target; a missing flanking peer degrades to
//! direct pursuit.

pub mod config;
pub mod context;
pub mod error;
pub mod intent;
pub mod machine;
pub mod navigate;
pub mod signal;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use config::{BehaviorConfig, HouseConfig};
pub use context::{PeerView, Pursued, TickContext};
pub use error::{BehaviorError, BehaviorResult};
pub use intent::Intent;
pub use machine::{on_signal, step, Step};
pub use signal::{Signal, Transition, TransitionCause};
pub use strategy::{Corner, Strategy, TargetRule};
