//! The per-ghost behavior state machine.
//!
//! ```text
//!            LeftHouse                 ModeTimer
//!   House ─────────────▶ Scatter ◀──────────────▶ Chase
//!     ▲                     │  ▲                  │  ▲
//!     │ ReachedHouse        │  │ FrightenedTimer  │  │
//!     │                     ▼  │                  ▼  │
//!   Eaten ◀───────────── Frightened ◀─────────────────┘
//!          Captured              PowerPellet
//! ```
//!
//! `LeftHouse` and `FrightenedTimer` go to whichever of Scatter/Chase the
//! ghost's [`ModeClock`](haunt_agent::ModeClock) currently selects.
//!
//! # Tick order
//!
//! [`step`] evaluates, in order:
//!
//! 1. **Gate**: frozen, or no first input yet → `Hold`, nothing else runs.
//! 2. **Frightened timer**: count; at `frightened_ticks` return to the mode.
//! 3. **Mode timer**: only in Scatter/Chase; on expiry flip the mode.
//! 4. **House triggers**: exact-position checks for exit and entry.
//! 5. **Intent**: target selection and search for the resulting state.
//!
//! Each stage sees the state left by the previous one.

use haunt_agent::{BehaviorState, Ghost};
use haunt_core::AgentRng;

use crate::navigate::{head_toward, wander};
use crate::{Intent, Signal, Strategy, TickContext, Transition, TransitionCause};

/// Everything one ghost's tick produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub intent:      Intent,
    pub transitions: Vec<Transition>,
}

impl Step {
    fn hold() -> Self {
        Self { intent: Intent::Hold, transitions: Vec::new() }
    }
}

/// Advance one ghost by one tick.
///
/// Mutates only the ghost's behavior data (state, timers).  Position and
/// facing are left for the caller to commit from the returned intent.
pub fn step(ghost: &mut Ghost, strategy: &Strategy, ctx: &TickContext<'_>, rng: &mut AgentRng) -> Step {
    if ghost.frozen || !ctx.started {
        return Step::hold();
    }

    let cfg = ctx.config;
    let mut transitions = Vec::new();

    if let BehaviorState::Frightened { elapsed } = &mut ghost.state {
        *elapsed += 1;
        if *elapsed >= cfg.frightened_ticks() {
            let to = ghost.mode.active_state();
            enter(ghost, to, TransitionCause::FrightenedTimer, &mut transitions);
        }
    }

    if matches!(ghost.state, BehaviorState::Scatter | BehaviorState::Chase)
        && ghost.mode.advance(cfg.scatter_ticks(), cfg.chase_ticks())
    {
        let to = ghost.mode.active_state();
        enter(ghost, to, TransitionCause::ModeTimer, &mut transitions);
    }

    if ghost.position == cfg.house.exit && ghost.state == BehaviorState::House {
        let to = ghost.mode.active_state();
        enter(ghost, to, TransitionCause::LeftHouse, &mut transitions);
    }
    if ghost.position == cfg.house.entry && ghost.state == BehaviorState::Eaten {
        enter(ghost, BehaviorState::House, TransitionCause::ReachedHouse, &mut transitions);
    }

    let intent = match ghost.state {
        BehaviorState::House   => head_toward(ghost, cfg.house.exit, &strategy.search, ctx.grid),
        BehaviorState::Eaten   => head_toward(ghost, cfg.house.entry, &strategy.search, ctx.grid),
        BehaviorState::Scatter => head_toward(ghost, strategy.scatter_target(ctx), &strategy.search, ctx.grid),
        BehaviorState::Chase   => {
            let target = strategy.chase_target(ghost.position, ctx);
            head_toward(ghost, target, &strategy.search, ctx.grid)
        }
        BehaviorState::Frightened { .. } => wander(ghost, ctx.grid, strategy.search.edges, rng),
    };

    Step { intent, transitions }
}

/// Apply an external signal to one ghost.
///
/// `FirstInput` never changes a ghost's state; the caller records it and
/// passes `started = true` in later contexts.  A power pellet on an already
/// frightened ghost restarts its timer without reporting a transition.
pub fn on_signal(ghost: &mut Ghost, signal: Signal) -> Option<Transition> {
    let mut out = Vec::with_capacity(1);
    match signal {
        Signal::FirstInput => {}
        Signal::PowerPelletConsumed => {
            if let BehaviorState::Frightened { elapsed } = &mut ghost.state {
                *elapsed = 0;
            } else if ghost.state.can_be_frightened() {
                enter(ghost, BehaviorState::frightened(), TransitionCause::PowerPellet, &mut out);
            }
        }
        Signal::GhostCaptured(id) => {
            if id == ghost.id && ghost.state.is_frightened() {
                enter(ghost, BehaviorState::Eaten, TransitionCause::Captured, &mut out);
            }
        }
    }
    out.pop()
}

fn enter(ghost: &mut Ghost, to: BehaviorState, cause: TransitionCause, out: &mut Vec<Transition>) {
    let t = Transition {
        agent: ghost.id,
        from:  ghost.state.kind(),
        to:    to.kind(),
        cause,
    };
    tracing::debug!(agent = %t.agent, kind = %ghost.kind, from = %t.from, to = %t.to, cause = %t.cause, "ghost state transition");
    ghost.state = to;
    out.push(t);
}
