//! Fluent builder for constructing a [`Sim`].

use rustc_hash::FxHashMap;

use haunt_agent::{AgentRngs, Roster};
use haunt_behavior::{BehaviorConfig, Strategy};
use haunt_core::{AgentId, GhostKind, Playfield, Position};
use haunt_maze::{LazyGrid, MazeSpec, SearchSpec};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`BehaviorConfig`]: timings, distances, search budgets
/// - [`MazeSpec`] + wall positions; the grid is built on first use
/// - [`Roster`] + [`AgentRngs`] from [`haunt_agent::RosterBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                    |
/// |---------------------------|--------------------------------------------|
/// | `.playfield(p)`           | `maze.playfield()`                         |
/// | `.flank_peer(f, p)`       | every flanker reflects the first `Chaser`  |
/// | `.search_for(kind, spec)` | per-kind algorithm from `BehaviorConfig`   |
///
/// # Example
///
/// ```rust,ignore
/// let (roster, rngs) = RosterBuilder::new(seed)
///     .ghost(GhostKind::Chaser, Position::new(208, 168), Direction::Left)
///     .build();
/// let mut sim = SimBuilder::new(BehaviorConfig::default(), MazeSpec::default(), walls, roster, rngs)
///     .build()?;
/// ```
pub struct SimBuilder {
    config:    BehaviorConfig,
    maze:      MazeSpec,
    walls:     Vec<Position>,
    roster:    Roster,
    rngs:      AgentRngs,
    playfield: Option<Playfield>,
    peers:     FxHashMap<AgentId, AgentId>,
    searches:  FxHashMap<GhostKind, SearchSpec>,
}

impl SimBuilder {
    pub fn new(
        config: BehaviorConfig,
        maze:   MazeSpec,
        walls:  Vec<Position>,
        roster: Roster,
        rngs:   AgentRngs,
    ) -> Self {
        Self {
            config,
            maze,
            walls,
            roster,
            rngs,
            playfield: None,
            peers:     FxHashMap::default(),
            searches:  FxHashMap::default(),
        }
    }

    /// Override the extents used for scatter corners.
    pub fn playfield(mut self, playfield: Playfield) -> Self {
        self.playfield = Some(playfield);
        self
    }

    /// Make `flanker` reflect `peer` instead of the first `Chaser`.
    pub fn flank_peer(mut self, flanker: AgentId, peer: AgentId) -> Self {
        self.peers.insert(flanker, peer);
        self
    }

    /// Use `spec` for every ghost of `kind`.
    pub fn search_for(mut self, kind: GhostKind, spec: SearchSpec) -> Self {
        self.searches.insert(kind, spec);
        self
    }

    /// Validate inputs, assign one strategy per ghost, and return a ready
    /// [`Sim`].  The grid itself is not built until the first tick.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        self.maze.validate()?;

        if self.rngs.len() != self.roster.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.roster.len(),
                got:      self.rngs.len(),
                what:     "agent rngs",
            });
        }
        for (&flanker, &peer) in &self.peers {
            for id in [flanker, peer] {
                if self.roster.get(id).is_none() {
                    return Err(SimError::AgentNotFound(id));
                }
            }
        }

        let default_peer = self.roster.first_of_kind(GhostKind::Chaser);
        let strategies = self
            .roster
            .iter()
            .map(|g| {
                let peer = self.peers.get(&g.id).copied().or(default_peer);
                let strategy = Strategy::for_kind(g.kind, &self.config, peer);
                match self.searches.get(&g.kind) {
                    Some(&spec) => strategy.with_search(spec),
                    None        => strategy,
                }
            })
            .collect();

        tracing::debug!(
            ghosts = self.roster.len(),
            cols = self.maze.cols,
            rows = self.maze.rows,
            walls = self.walls.len(),
            "sim built"
        );

        Ok(Sim {
            clock:      self.config.clock(),
            playfield:  self.playfield.unwrap_or_else(|| self.maze.playfield()),
            grid:       LazyGrid::new(self.maze, self.walls),
            config:     self.config,
            roster:     self.roster,
            rngs:       self.rngs,
            strategies,
            started:    false,
        })
    }
}
