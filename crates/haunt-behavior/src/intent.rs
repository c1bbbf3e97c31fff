//! What a ghost wants to do this tick.

use haunt_core::{Direction, Position};

/// The decision handed to the caller's movement layer.  The engine never
/// moves a ghost itself.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Move one step along `direction`.
    Move {
        direction: Direction,
        /// The search kernel's answer: the adjacent tile on a shortest path
        /// when one was found, the raw target otherwise.
        next:      Position,
        /// The position the ghost is steering toward.
        target:    Position,
    },
    /// Stay put.  Produced while gated, frozen, or boxed in.
    Hold,
}

impl Intent {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Intent::Move { direction, .. } => Some(*direction),
            Intent::Hold                   => None,
        }
    }

    pub fn is_hold(&self) -> bool {
        matches!(self, Intent::Hold)
    }
}
