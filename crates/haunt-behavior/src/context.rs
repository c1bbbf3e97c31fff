//! Read-only world state passed to every ghost's tick.

use haunt_agent::{Ghost, StateKind};
use haunt_core::{AgentId, Direction, GhostKind, Playfield, Position, Tick};
use haunt_maze::Grid;

use crate::BehaviorConfig;

/// The agent the ghosts chase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pursued {
    pub position: Position,
    pub facing:   Direction,
}

/// What one ghost can see of another.  Taken before any ghost moves.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PeerView {
    pub id:       AgentId,
    pub kind:     GhostKind,
    pub position: Position,
    pub facing:   Direction,
    pub state:    StateKind,
}

impl From<&Ghost> for PeerView {
    fn from(g: &Ghost) -> Self {
        Self {
            id:       g.id,
            kind:     g.kind,
            position: g.position,
            facing:   g.facing,
            state:    g.state.kind(),
        }
    }
}

/// A snapshot shared by every ghost during one tick.
///
/// `peers` holds every ghost as it stood at the end of the previous tick,
/// indexed by `AgentId`, so the result of a tick does not depend on the
/// order ghosts are stepped in.
pub struct TickContext<'a> {
    pub tick:      Tick,
    pub grid:      &'a Grid,
    pub pursued:   Pursued,
    pub peers:     &'a [PeerView],
    pub playfield: Playfield,
    /// `false` until the surrounding game delivers its first input.
    pub started:   bool,
    pub config:    &'a BehaviorConfig,
}

impl<'a> TickContext<'a> {
    /// Look up a peer by id.  `None` when the id is not in the snapshot.
    #[inline]
    pub fn peer(&self, id: AgentId) -> Option<&PeerView> {
        self.peers.get(id.index()).filter(|p| p.id == id)
    }
}
