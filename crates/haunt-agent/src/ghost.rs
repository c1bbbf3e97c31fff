//! The ghost record.

use haunt_core::{AgentId, Direction, GhostKind, Position};

use crate::{BehaviorState, ModeClock};

/// One ghost.  Plain data; `haunt-behavior` decides what it does next and the
/// caller's movement layer writes `position` and `facing` back.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ghost {
    pub id:       AgentId,
    pub kind:     GhostKind,
    pub position: Position,
    pub facing:   Direction,
    pub state:    BehaviorState,
    pub mode:     ModeClock,
    /// Debug switch: a frozen ghost is skipped entirely each tick.
    pub frozen:   bool,
}

impl Ghost {
    pub fn new(id: AgentId, kind: GhostKind, position: Position, facing: Direction) -> Self {
        Self {
            id,
            kind,
            position,
            facing,
            state:  BehaviorState::House,
            mode:   ModeClock::default(),
            frozen: false,
        }
    }

    #[inline]
    pub fn is_on_grid(&self, tile_size: i32) -> bool {
        self.position.is_aligned(tile_size)
    }
}
