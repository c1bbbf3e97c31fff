//! Per-ghost random source.
//!
//! The only randomness in the engine is the frightened wander: a ghost that
//! is fleeing picks one of its open exits at random.  Each ghost draws from
//! its own `SmallRng` so a run is a pure function of the global seed, and the
//! draw of one ghost never shifts the stream of another, whether the tick
//! steps ghosts in order or on a thread pool.
//!
//!   seed(ghost) = global_seed XOR (agent_id * 0x9e37_79b9_7f4a_7c15)
//!
//! The multiplier is the 64-bit golden-ratio fraction; it scatters
//! neighbouring ids across the seed space.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::AgentId;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// One ghost's RNG.  Owned exclusively by that ghost's tick.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(GOLDEN_GAMMA);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform pick from `options`; `None` when it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.0)
    }
}

impl std::fmt::Debug for AgentRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AgentRng(..)")
    }
}
