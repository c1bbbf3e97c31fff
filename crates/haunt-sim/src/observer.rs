//! Observer hooks for logging, replay capture and tests.

use haunt_behavior::{Intent, Transition};
use haunt_core::{AgentId, Tick};

/// Callbacks invoked by [`Sim::tick`][crate::Sim::tick] and
/// [`Sim::signal`][crate::Sim::signal].
///
/// All methods default to no-ops.  Within a tick, transitions and intents
/// arrive in ascending `AgentId` order whether or not ghosts were stepped in
/// parallel.
///
/// # Example: transition counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl SimObserver for Counter {
///     fn on_transition(&mut self, _tick: Tick, _t: &Transition) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A ghost changed state, either during a tick or from a signal.
    fn on_transition(&mut self, _tick: Tick, _transition: &Transition) {}

    fn on_intent(&mut self, _tick: Tick, _agent: AgentId, _intent: &Intent) {}

    /// `ghosts` is the number of ghosts stepped this tick.
    fn on_tick_end(&mut self, _tick: Tick, _ghosts: usize) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
