//! External signals and the state transitions they, and the timers, cause.

use std::fmt;

use haunt_agent::StateKind;
use haunt_core::AgentId;

/// Events delivered by the surrounding game.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// The player moved for the first time.  Ghosts stay idle until then.
    FirstInput,
    /// Frightens every ghost that is in `Scatter`, `Chase` or `Frightened`.
    PowerPelletConsumed,
    /// The given ghost was caught while frightened.
    GhostCaptured(AgentId),
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitionCause {
    ModeTimer,
    FrightenedTimer,
    LeftHouse,
    ReachedHouse,
    PowerPellet,
    Captured,
}

impl TransitionCause {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionCause::ModeTimer       => "mode_timer",
            TransitionCause::FrightenedTimer => "frightened_timer",
            TransitionCause::LeftHouse       => "left_house",
            TransitionCause::ReachedHouse    => "reached_house",
            TransitionCause::PowerPellet     => "power_pellet",
            TransitionCause::Captured        => "captured",
        }
    }
}

impl fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One state change of one ghost.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub agent: AgentId,
    pub from:  StateKind,
    pub to:    StateKind,
    pub cause: TransitionCause,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {} ({})", self.agent, self.from, self.to, self.cause)
    }
}
