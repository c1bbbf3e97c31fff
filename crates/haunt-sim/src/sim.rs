//! The `Sim` struct and its tick.

use haunt_agent::{AgentRngs, Ghost, Roster};
use haunt_behavior::{
    on_signal, step, BehaviorConfig, Intent, PeerView, Pursued, Signal, Step, Strategy,
    TickContext, Transition,
};
use haunt_core::{AgentId, Direction, LogicClock, Playfield, Position, Tick};
use haunt_maze::{Grid, LazyGrid};

use crate::{SimError, SimObserver, SimResult};

/// Owns every ghost, the shared grid, and the clock.
///
/// One call to [`Sim::tick`] is one logic tick:
///
/// 1. **Snapshot**: record every ghost as a [`PeerView`].
/// 2. **Decide** (optionally parallel with the `parallel` feature): run the
///    state machine for each ghost against the snapshot.
/// 3. **Report** (sequential, ascending `AgentId`): transitions then the
///    intent of each ghost go to the observer.
/// 4. Advance the clock.
///
/// Ghosts are never moved here.  The caller applies each returned
/// [`Intent`] and writes the result back with [`Sim::commit`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config:     BehaviorConfig,
    pub clock:      LogicClock,
    /// Built on first use and shared read-only by every ghost.
    pub grid:       LazyGrid,
    pub roster:     Roster,
    /// Per-ghost RNGs, kept apart from the roster for the split borrow.
    pub rngs:       AgentRngs,
    /// One per ghost, indexed by `AgentId`.  Fixed at build time.
    pub strategies: Vec<Strategy>,
    pub playfield:  Playfield,
    /// Set by [`Signal::FirstInput`].  Ghosts hold until then.
    pub started:    bool,
}

impl Sim {
    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn grid(&self) -> &Grid {
        self.grid.get()
    }

    pub fn ghost(&self, id: AgentId) -> Option<&Ghost> {
        self.roster.get(id)
    }

    pub fn strategy(&self, id: AgentId) -> Option<&Strategy> {
        self.strategies.get(id.index())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one logic tick and return every ghost's intent in `AgentId` order.
    pub fn tick<O: SimObserver>(&mut self, pursued: Pursued, observer: &mut O) -> Vec<(AgentId, Intent)> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let peers: Vec<PeerView> = self.roster.iter().map(PeerView::from).collect();

        let steps = self.step_all(now, pursued, &peers);

        let mut intents = Vec::with_capacity(steps.len());
        for (i, s) in steps.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            for t in &s.transitions {
                observer.on_transition(now, t);
            }
            observer.on_intent(now, agent, &s.intent);
            intents.push((agent, s.intent));
        }

        observer.on_tick_end(now, intents.len());
        self.clock.advance();
        intents
    }

    /// Decide for every ghost.  With the `parallel` feature the work runs on
    /// Rayon's pool; the indexed zip keeps output in `AgentId` order.
    fn step_all(&mut self, now: Tick, pursued: Pursued, peers: &[PeerView]) -> Vec<Step> {
        #[cfg(not(feature = "parallel"))]
        {
            self.step_in_order(now, pursued, peers)
        }

        #[cfg(feature = "parallel")]
        {
            self.step_on_pool(now, pursued, peers)
        }
    }

    /// Sequential decide pass.  Also the reference the parallel pass is
    /// checked against.
    #[cfg(any(test, not(feature = "parallel")))]
    pub(crate) fn step_in_order(&mut self, now: Tick, pursued: Pursued, peers: &[PeerView]) -> Vec<Step> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let grid       = self.grid.get();
        let strategies = self.strategies.as_slice();
        let ghosts     = self.roster.as_mut_slice();
        let rngs       = &mut self.rngs.inner;

        let ctx = TickContext {
            tick:      now,
            grid,
            pursued,
            peers,
            playfield: self.playfield,
            started:   self.started,
            config:    &self.config,
        };

        ghosts
            .iter_mut()
            .zip(strategies)
            .zip(rngs.iter_mut())
            .map(|((ghost, strategy), rng)| step(ghost, strategy, &ctx, rng))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn step_on_pool(&mut self, now: Tick, pursued: Pursued, peers: &[PeerView]) -> Vec<Step> {
        use rayon::prelude::*;

        let grid       = self.grid.get();
        let strategies = self.strategies.as_slice();
        let ghosts     = self.roster.as_mut_slice();
        let rngs       = &mut self.rngs.inner;

        let ctx = TickContext {
            tick:      now,
            grid,
            pursued,
            peers,
            playfield: self.playfield,
            started:   self.started,
            config:    &self.config,
        };

        ghosts
            .par_iter_mut()
            .zip(strategies.par_iter())
            .zip(rngs.par_iter_mut())
            .map(|((ghost, strategy), rng)| step(ghost, strategy, &ctx, rng))
            .collect()
    }

    // ── Signals and write-back ────────────────────────────────────────────

    /// Deliver an external signal to every ghost.  Returns the transitions it
    /// caused, in `AgentId` order; they are also reported to `observer`.
    pub fn signal<O: SimObserver>(&mut self, signal: Signal, observer: &mut O) -> Vec<Transition> {
        if signal == Signal::FirstInput && !self.started {
            self.started = true;
            tracing::debug!(tick = self.clock.current_tick.0, "first input received, ghosts released");
        }

        let now = self.clock.current_tick;
        let transitions: Vec<Transition> = self
            .roster
            .iter_mut()
            .filter_map(|g| on_signal(g, signal))
            .collect();
        for t in &transitions {
            observer.on_transition(now, t);
        }
        transitions
    }

    /// Write a ghost's new position and facing back after the movement layer
    /// has applied its intent.
    pub fn commit(&mut self, agent: AgentId, position: Position, facing: Direction) -> SimResult<()> {
        let ghost = self.roster.get_mut(agent).ok_or(SimError::AgentNotFound(agent))?;
        ghost.position = position;
        ghost.facing = facing;
        Ok(())
    }

    /// Debug switch: a frozen ghost holds and its timers stop.
    pub fn set_frozen(&mut self, agent: AgentId, frozen: bool) -> SimResult<()> {
        let ghost = self.roster.get_mut(agent).ok_or(SimError::AgentNotFound(agent))?;
        ghost.frozen = frozen;
        Ok(())
    }

    /// Replace the maze walls.  The grid is rebuilt on the next tick.
    pub fn rebuild_maze(&mut self, walls: Vec<Position>) {
        tracing::debug!(walls = walls.len(), "maze geometry replaced");
        self.grid.rebuild(walls);
    }
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("clock", &self.clock)
            .field("ghosts", &self.roster.len())
            .field("grid", &self.grid)
            .field("playfield", &self.playfield)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}
