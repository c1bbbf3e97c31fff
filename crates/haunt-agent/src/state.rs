//! Behavior state data.
//!
//! `BehaviorState` carries only the data each state needs: the frightened
//! countdown lives inside the `Frightened` variant, so leaving the state
//! discards it and re-entering starts from zero.  The chase/scatter toggle
//! outlives every state change and is kept apart in [`ModeClock`].

use std::fmt;

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// The five ghost behavior states.  Initial state is `House`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    /// Inside (or leaving) the ghost house.
    #[default]
    House,
    Scatter,
    Chase,
    /// Fleeing.  `elapsed` counts ticks spent in this state.
    Frightened { elapsed: u32 },
    /// Captured; returning to the house.
    Eaten,
}

impl BehaviorState {
    #[inline]
    pub fn kind(self) -> StateKind {
        match self {
            BehaviorState::House            => StateKind::House,
            BehaviorState::Scatter          => StateKind::Scatter,
            BehaviorState::Chase            => StateKind::Chase,
            BehaviorState::Frightened { .. } => StateKind::Frightened,
            BehaviorState::Eaten            => StateKind::Eaten,
        }
    }

    /// Entered fresh, with its timer at zero.
    #[inline]
    pub fn frightened() -> Self {
        BehaviorState::Frightened { elapsed: 0 }
    }

    #[inline]
    pub fn is_frightened(self) -> bool {
        matches!(self, BehaviorState::Frightened { .. })
    }

    /// A power pellet affects every state except `House` and `Eaten`.
    #[inline]
    pub fn can_be_frightened(self) -> bool {
        matches!(self, BehaviorState::Scatter | BehaviorState::Chase | BehaviorState::Frightened { .. })
    }
}

// ── StateKind ─────────────────────────────────────────────────────────────────

/// Fieldless mirror of [`BehaviorState`] for events, logs and counting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StateKind {
    House,
    Scatter,
    Chase,
    Frightened,
    Eaten,
}

impl StateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::House      => "house",
            StateKind::Scatter    => "scatter",
            StateKind::Chase      => "chase",
            StateKind::Frightened => "frightened",
            StateKind::Eaten      => "eaten",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ModeClock ─────────────────────────────────────────────────────────────────

/// The persisted chase/scatter toggle and the ticks spent in the current
/// phase.  Starts in scatter.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeClock {
    pub chasing: bool,
    pub elapsed: u32,
}

impl ModeClock {
    /// The state a ghost in the open should be in right now.
    #[inline]
    pub fn active_state(&self) -> BehaviorState {
        if self.chasing { BehaviorState::Chase } else { BehaviorState::Scatter }
    }

    /// Count one tick.  Returns `true` when the phase expired and flipped;
    /// the timer restarts from zero for the new phase.
    pub fn advance(&mut self, scatter_ticks: u32, chase_ticks: u32) -> bool {
        self.elapsed += 1;
        let limit = if self.chasing { chase_ticks } else { scatter_ticks };
        if self.elapsed >= limit {
            self.chasing = !self.chasing;
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}
