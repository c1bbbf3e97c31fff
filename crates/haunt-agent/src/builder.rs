//! Fluent builder for constructing `Roster` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use haunt_agent::RosterBuilder;
//! use haunt_core::{Direction, GhostKind, Position};
//!
//! let (roster, rngs) = RosterBuilder::new(/*seed=*/ 42)
//!     .ghost(GhostKind::Chaser, Position::new(208, 168), Direction::Left)
//!     .ghost(GhostKind::Ambusher, Position::new(208, 200), Direction::Up)
//!     .build();
//!
//! assert_eq!(roster.len(), 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use haunt_core::{AgentId, Direction, GhostKind, Position};

use crate::{AgentRngs, Ghost, Roster};

pub struct RosterBuilder {
    seed:   u64,
    ghosts: Vec<Ghost>,
    frozen: Vec<GhostKind>,
}

impl RosterBuilder {
    /// `seed` is the global seed every per-ghost RNG is derived from.
    pub fn new(seed: u64) -> Self {
        Self { seed, ghosts: Vec::new(), frozen: Vec::new() }
    }

    /// Append a ghost.  It gets the next `AgentId` and starts in `House`.
    pub fn ghost(mut self, kind: GhostKind, position: Position, facing: Direction) -> Self {
        let id = AgentId(self.ghosts.len() as u32);
        self.ghosts.push(Ghost::new(id, kind, position, facing));
        self
    }

    /// Freeze every ghost of `kind` (debug switch).
    pub fn frozen(mut self, kind: GhostKind) -> Self {
        self.frozen.push(kind);
        self
    }

    pub fn build(mut self) -> (Roster, AgentRngs) {
        for g in &mut self.ghosts {
            g.frozen = self.frozen.contains(&g.kind);
        }
        let rngs = AgentRngs::new(self.ghosts.len(), self.seed);
        (Roster::new(self.ghosts), rngs)
    }
}
