//! Logic-tick time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter advanced once per call
//! into the engine.  The surrounding game loop owns real time; the engine
//! only knows how many logic ticks make up one second (`tick_rate`), which
//! is all that timer durations need:
//!
//!   duration_ticks = secs * tick_rate
//!
//! Integer ticks keep every timer exact, so a 7 s timer at 60 Hz expires on
//! tick 420 and never on 419 or 421.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute logic-tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── LogicClock ────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts seconds into tick counts.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicClock {
    /// Logic ticks per simulated second.  Default: 60.
    pub tick_rate: u32,
    /// The current tick.  Advanced by [`LogicClock::advance`].
    pub current_tick: Tick,
}

impl LogicClock {
    pub const DEFAULT_TICK_RATE: u32 = 60;

    pub fn new(tick_rate: u32) -> Self {
        Self { tick_rate, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// How many ticks make up `secs` seconds.  Saturates at `u32::MAX`.
    #[inline]
    pub fn ticks_for_secs(&self, secs: u32) -> u32 {
        secs.saturating_mul(self.tick_rate)
    }

    /// Whole seconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 / self.tick_rate.max(1) as u64
    }
}

impl Default for LogicClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICK_RATE)
    }
}

impl fmt::Display for LogicClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} s @ {} Hz)", self.current_tick, self.elapsed_secs(), self.tick_rate)
    }
}
