//! `haunt-sim`: composition root for the haunt ghost-AI engine.
//!
//! # Tick
//!
//! ```text
//! per logic tick:
//!   ① Snapshot: every ghost's position, facing and state as PeerViews.
//!   ② Decide:   haunt_behavior::step for each ghost against the snapshot
//!               (parallel with the `parallel` feature).
//!   ③ Report:   transitions and intents to the observer, ascending AgentId.
//!   ④ Advance:  clock += 1.
//! ```
//!
//! The caller owns movement: it applies each returned `Intent` and writes
//! the new position back with `Sim::commit` before the next tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.          |
//! | `serde`    | Propagates serde derives to the member crates.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use haunt_agent::RosterBuilder;
//! use haunt_behavior::{BehaviorConfig, Pursued, Signal};
//! use haunt_maze::AsciiMaze;
//! use haunt_sim::{NoopObserver, SimBuilder};
//!
//! let maze = AsciiMaze::parse(MAZE.lines(), 8)?;
//! let (roster, rngs) = RosterBuilder::new(42).ghost(..).build();
//! let mut sim = SimBuilder::new(BehaviorConfig::default(), maze.spec, maze.walls, roster, rngs)
//!     .build()?;
//! sim.signal(Signal::FirstInput, &mut NoopObserver);
//! let intents = sim.tick(pursued, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
