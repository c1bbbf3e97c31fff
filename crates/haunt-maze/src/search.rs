//! First-step grid search.
//!
//! # One kernel, two algorithms
//!
//! [`search`] is a best-first search over a min-heap keyed by
//! `(g + h, h, seq)`, where `g` is the step count from the start, `h` the
//! [`Heuristic`] estimate to the target, and `seq` a monotonically
//! increasing insertion counter.  With the [`Zero`] heuristic the key
//! reduces to `(depth, seq)`, which pops in exactly breadth-first order.
//! With [`Manhattan`] it is A*; the heuristic is admissible and consistent
//! on a 4-connected unit-cost grid, so both return a shortest path.
//!
//! Neighbours are expanded in [`Direction::ALL`] order (up, down, left,
//! right) and `seq` breaks remaining ties, so results are reproducible.
//!
//! # Only the first step
//!
//! Callers re-plan every tick, so only the first step of the path is
//! returned.  Parent links and best-known costs live in flat arrays sized
//! `cols × rows`; nothing is allocated per node.
//!
//! # Fallbacks
//!
//! No input makes the search fail.  When it cannot produce a step cheaply it
//! returns the raw, unsnapped target position and says why:
//!
//! | Outcome           | Condition                                     | Pops |
//! |-------------------|-----------------------------------------------|------|
//! | `TargetBlocked`   | clamped target tile is a wall                 | 0    |
//! | `AlreadyThere`    | clamped start tile == clamped target tile     | 0    |
//! | `BudgetExhausted` | `iteration_cap` pops made, target not reached | cap  |
//! | `Unreachable`     | frontier emptied, target not reached          | any  |

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use haunt_core::{Direction, Position, Tile};

use crate::{EdgeMode, Grid};

/// Pop budget used by the breadth-first ghosts.
pub const DEFAULT_BFS_CAP: u32 = 500;
/// Pop budget used by the A* ghosts.
pub const DEFAULT_ASTAR_CAP: u32 = 1000;

const NO_PARENT: u32 = u32::MAX;

// ── Heuristic ─────────────────────────────────────────────────────────────────

/// Cost-to-go estimate used to order the frontier.
///
/// Implementations must never overestimate the true step count, or the
/// returned step may not lie on a shortest path.
pub trait Heuristic {
    fn estimate(&self, from: Tile, to: Tile, cols: i32, edges: EdgeMode) -> u32;
}

/// Always zero.  Turns the kernel into breadth-first search.
#[derive(Copy, Clone, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Tile, _to: Tile, _cols: i32, _edges: EdgeMode) -> u32 {
        0
    }
}

/// Manhattan distance.  Under [`EdgeMode::TunnelWrap`] the horizontal term
/// is the shorter way round, `min(dx, cols - dx)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Tile, to: Tile, cols: i32, edges: EdgeMode) -> u32 {
        let mut dx = (from.col - to.col).abs();
        if edges == EdgeMode::TunnelWrap {
            dx = dx.min(cols - dx);
        }
        let dy = (from.row - to.row).abs();
        (dx + dy) as u32
    }
}

// ── Result types ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A path was found; `position` is the adjacent first step.
    Found,
    TargetBlocked,
    AlreadyThere,
    BudgetExhausted,
    Unreachable,
}

/// What one search call produced.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct NextStep {
    /// World position to head for.  The first-step tile's top-left corner on
    /// [`SearchOutcome::Found`], the raw target otherwise.
    pub position: Position,
    pub outcome:  SearchOutcome,
    /// Heap pops performed.
    pub expanded: u32,
}

impl NextStep {
    #[inline]
    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    fn fallback(target: Position, outcome: SearchOutcome, expanded: u32) -> Self {
        tracing::trace!(?outcome, expanded, x = target.x, y = target.y, "search fell back to raw target");
        Self { position: target, outcome, expanded }
    }
}

// ── Kernel ────────────────────────────────────────────────────────────────────

/// Run one first-step search from `start` toward `target` (world positions).
pub fn search<H: Heuristic>(
    grid:          &Grid,
    start:         Position,
    target:        Position,
    iteration_cap: u32,
    edges:         EdgeMode,
    heuristic:     &H,
) -> NextStep {
    let goal = grid.clamp(grid.tile_of(target));
    if grid.is_wall(goal.col, goal.row) {
        return NextStep::fallback(target, SearchOutcome::TargetBlocked, 0);
    }

    let origin = grid.clamp(grid.tile_of(start));
    if origin == goal {
        return NextStep::fallback(target, SearchOutcome::AlreadyThere, 0);
    }

    let n = grid.spec().cell_count();
    let cols = grid.cols();
    let origin_idx = grid.index(origin);
    let goal_idx = grid.index(goal);

    // best_g[i] = fewest steps known to reach cell i.
    let mut best_g = vec![u32::MAX; n];
    // parent[i] = cell that reached i with best_g[i]; NO_PARENT if unreached.
    let mut parent = vec![NO_PARENT; n];

    // Min-heap on (f, h, seq, cell).
    let mut heap: BinaryHeap<Reverse<(u32, u32, u64, u32)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    let h0 = heuristic.estimate(origin, goal, cols, edges);
    best_g[origin_idx] = 0;
    heap.push(Reverse((h0, h0, seq, origin_idx as u32)));

    let mut expanded: u32 = 0;
    loop {
        if expanded >= iteration_cap {
            return NextStep::fallback(target, SearchOutcome::BudgetExhausted, expanded);
        }
        let Some(Reverse((f, h, _, cell))) = heap.pop() else {
            return NextStep::fallback(target, SearchOutcome::Unreachable, expanded);
        };
        expanded += 1;

        let cell = cell as usize;
        if cell == goal_idx {
            let first = first_step(&parent, origin_idx, goal_idx);
            return NextStep {
                position: grid.tile_at(first).to_world(grid.tile_size()),
                outcome:  SearchOutcome::Found,
                expanded,
            };
        }

        let g = f - h;
        // Skip stale heap entries.
        if g > best_g[cell] {
            continue;
        }

        let tile = grid.tile_at(cell);
        for dir in Direction::ALL {
            let Some(next) = grid.neighbor(tile, dir, edges) else { continue };
            if grid.is_wall(next.col, next.row) {
                continue;
            }
            let next_idx = grid.index(next);
            let ng = g + 1;
            if ng < best_g[next_idx] {
                best_g[next_idx] = ng;
                parent[next_idx] = cell as u32;
                seq += 1;
                let nh = heuristic.estimate(next, goal, cols, edges);
                heap.push(Reverse((ng + nh, nh, seq, next_idx as u32)));
            }
        }
    }
}

/// Walk parent links back from `goal` to the child of `origin`.
fn first_step(parent: &[u32], origin: usize, goal: usize) -> usize {
    let mut cur = goal;
    loop {
        let p = parent[cur];
        if p == NO_PARENT || p as usize == origin {
            return cur;
        }
        cur = p as usize;
    }
}

// ── Public operations ─────────────────────────────────────────────────────────

/// Breadth-first first step on a bounded grid.
pub fn bfs_next_step(grid: &Grid, start: Position, target: Position, iteration_cap: u32) -> NextStep {
    search(grid, start, target, iteration_cap, EdgeMode::Bounded, &Zero)
}

/// A* first step on a bounded grid.
pub fn astar_next_step(grid: &Grid, start: Position, target: Position, iteration_cap: u32) -> NextStep {
    search(grid, start, target, iteration_cap, EdgeMode::Bounded, &Manhattan)
}

pub fn bfs_next_step_with_edges(
    grid:          &Grid,
    start:         Position,
    target:        Position,
    iteration_cap: u32,
    edges:         EdgeMode,
) -> NextStep {
    search(grid, start, target, iteration_cap, edges, &Zero)
}

pub fn astar_next_step_with_edges(
    grid:          &Grid,
    start:         Position,
    target:        Position,
    iteration_cap: u32,
    edges:         EdgeMode,
) -> NextStep {
    search(grid, start, target, iteration_cap, edges, &Manhattan)
}

// ── SearchSpec ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    #[default]
    Bfs,
    AStar,
}

/// A chosen algorithm plus its budget and edge treatment.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSpec {
    pub algorithm:     Algorithm,
    pub iteration_cap: u32,
    pub edges:         EdgeMode,
}

impl SearchSpec {
    pub fn bfs(iteration_cap: u32) -> Self {
        Self { algorithm: Algorithm::Bfs, iteration_cap, edges: EdgeMode::Bounded }
    }

    pub fn astar(iteration_cap: u32) -> Self {
        Self { algorithm: Algorithm::AStar, iteration_cap, edges: EdgeMode::Bounded }
    }

    pub fn with_edges(mut self, edges: EdgeMode) -> Self {
        self.edges = edges;
        self
    }

    pub fn next_step(&self, grid: &Grid, start: Position, target: Position) -> NextStep {
        match self.algorithm {
            Algorithm::Bfs   => bfs_next_step_with_edges(grid, start, target, self.iteration_cap, self.edges),
            Algorithm::AStar => astar_next_step_with_edges(grid, start, target, self.iteration_cap, self.edges),
        }
    }
}

impl Default for SearchSpec {
    fn default() -> Self {
        Self::bfs(DEFAULT_BFS_CAP)
    }
}
