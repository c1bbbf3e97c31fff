//! Per-kind target selection.
//!
//! A [`Strategy`] is fixed when the ghost is created.  It pairs a
//! [`TargetRule`] (where to aim while chasing) with a scatter [`Corner`] and
//! the [`SearchSpec`] used to turn a target into a first step.  Every rule
//! is a pure function of the tick snapshot: the same snapshot always gives
//! the same target.
//!
//! | Kind       | Rule                 | Corner        | Search |
//! |------------|----------------------|---------------|--------|
//! | `Chaser`   | direct pursuit       | top-right     | BFS    |
//! | `Ambusher` | ambush, 4 tiles      | top-left      | A*     |
//! | `Flanker`  | flanking, 2 tiles    | bottom-right  | BFS    |
//! | `Shy`      | threshold, 8 tiles   | bottom-left   | A*     |

use haunt_core::{AgentId, GhostKind, Playfield, Position};
use haunt_maze::SearchSpec;

use crate::{BehaviorConfig, TickContext};

// ── Corner ────────────────────────────────────────────────────────────────────

/// A playfield corner, resolved against the current [`Playfield`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn resolve(self, field: Playfield) -> Position {
        match self {
            Corner::TopLeft     => field.top_left(),
            Corner::TopRight    => field.top_right(),
            Corner::BottomLeft  => field.bottom_left(),
            Corner::BottomRight => field.bottom_right(),
        }
    }

    pub fn for_kind(kind: GhostKind) -> Self {
        match kind {
            GhostKind::Chaser   => Corner::TopRight,
            GhostKind::Ambusher => Corner::TopLeft,
            GhostKind::Flanker  => Corner::BottomRight,
            GhostKind::Shy      => Corner::BottomLeft,
        }
    }
}

// ── TargetRule ────────────────────────────────────────────────────────────────

/// How a ghost picks its chase target.  Distances are in tiles.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetRule {
    /// The pursued agent's position.
    DirectPursuit,
    /// `lead` tiles ahead of the pursued agent along its facing.
    Ambush { lead: i32 },
    /// The peer's position reflected through a point `lead` tiles ahead of
    /// the pursued agent.  Without a peer in the snapshot this is direct
    /// pursuit.
    Flanking { lead: i32, peer: Option<AgentId> },
    /// The pursued agent while farther than `radius` tiles away, otherwise
    /// the ghost's own scatter corner.  The comparison is strict: at exactly
    /// `radius` tiles the ghost retreats.
    ThresholdSwitch { radius: i32 },
}

// ── Strategy ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Strategy {
    pub rule:   TargetRule,
    pub corner: Corner,
    pub search: SearchSpec,
}

impl Strategy {
    /// The standard strategy for `kind`.  `peer` is only used by `Flanker`.
    pub fn for_kind(kind: GhostKind, config: &BehaviorConfig, peer: Option<AgentId>) -> Self {
        let rule = match kind {
            GhostKind::Chaser   => TargetRule::DirectPursuit,
            GhostKind::Ambusher => TargetRule::Ambush { lead: config.ambush_lead_tiles },
            GhostKind::Flanker  => TargetRule::Flanking { lead: config.flank_lead_tiles, peer },
            GhostKind::Shy      => TargetRule::ThresholdSwitch { radius: config.retreat_radius_tiles },
        };
        let search = match kind {
            GhostKind::Chaser | GhostKind::Flanker => SearchSpec::bfs(config.bfs_cap),
            GhostKind::Ambusher | GhostKind::Shy   => SearchSpec::astar(config.astar_cap),
        };
        Self {
            rule,
            corner: Corner::for_kind(kind),
            search: search.with_edges(config.edge_mode()),
        }
    }

    pub fn with_search(mut self, search: SearchSpec) -> Self {
        self.search = search;
        self
    }

    /// Where to aim while in `Chase`.  `me` is the ghost's own position.
    pub fn chase_target(&self, me: Position, ctx: &TickContext<'_>) -> Position {
        let ts = ctx.grid.tile_size();
        let pursued = ctx.pursued;
        match self.rule {
            TargetRule::DirectPursuit => pursued.position,

            TargetRule::Ambush { lead } => pursued.position.project(lead.saturating_mul(ts), pursued.facing),

            TargetRule::Flanking { lead, peer } => {
                match peer.and_then(|id| ctx.peer(id)) {
                    Some(peer) => {
                        let pivot = pursued.position.project(lead.saturating_mul(ts), pursued.facing);
                        peer.position.reflect_through(pivot)
                    }
                    None => pursued.position,
                }
            }

            TargetRule::ThresholdSwitch { radius } => {
                let r = radius as i64 * ts as i64;
                if me.distance_sq(pursued.position) > r.saturating_mul(r) {
                    pursued.position
                } else {
                    self.scatter_target(ctx)
                }
            }
        }
    }

    /// Where to aim while in `Scatter`.
    #[inline]
    pub fn scatter_target(&self, ctx: &TickContext<'_>) -> Position {
        self.corner.resolve(ctx.playfield)
    }
}
