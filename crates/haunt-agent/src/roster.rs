//! Ghost storage: `Roster` (records) and `AgentRngs` (per-ghost RNG).
//!
//! # Why two structs?
//!
//! The parallel tick needs `&mut` access to each ghost's record and RNG at
//! the same time while other threads read the previous-tick snapshot.
//! Keeping RNGs in their own `Vec` lets the tick zip two `par_iter_mut`s
//! without fighting the borrow checker:
//!
//! ```ignore
//! sim.roster.as_mut_slice()
//!     .par_iter_mut()
//!     .zip(sim.rngs.inner.par_iter_mut())
//!     .map(|(ghost, rng)| step(ghost, strategy, &ctx, rng))
//!     .collect::<Vec<_>>();
//! ```
//!
//! A ghost's `AgentId` is its index in both vectors.

use haunt_core::{AgentId, AgentRng, GhostKind};

use crate::Ghost;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-ghost deterministic RNG state.
///
/// `Send` but not `Sync`; each worker gets exclusive access via
/// `par_iter_mut()`.
#[derive(Debug)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Every ghost in the session, indexed by `AgentId`.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    ghosts: Vec<Ghost>,
}

impl Roster {
    /// Wrap a vector of ghosts.  Each ghost's `id` is rewritten to its index.
    pub fn new(mut ghosts: Vec<Ghost>) -> Self {
        for (i, g) in ghosts.iter_mut().enumerate() {
            g.id = AgentId(i as u32);
        }
        Self { ghosts }
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Ghost> {
        self.ghosts.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Ghost> {
        self.ghosts.get_mut(id.index())
    }

    /// Lowest-id ghost of the given kind.
    pub fn first_of_kind(&self, kind: GhostKind) -> Option<AgentId> {
        self.ghosts.iter().find(|g| g.kind == kind).map(|g| g.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ghost> {
        self.ghosts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ghost> {
        self.ghosts.iter_mut()
    }

    pub fn as_slice(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn as_mut_slice(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }

    pub fn len(&self) -> usize {
        self.ghosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ghosts.is_empty()
    }
}
