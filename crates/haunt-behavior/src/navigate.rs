//! Turning a target into one cardinal direction.
//!
//! Search only runs while the ghost sits exactly on a tile.  Between tiles
//! the ghost keeps its heading; the movement layer carries it to the next
//! boundary where the decision is made again.

use haunt_agent::Ghost;
use haunt_core::{AgentRng, Direction, Position, Tile};
use haunt_maze::{EdgeMode, Grid, SearchSpec};

use crate::Intent;

/// Steer `ghost` toward `target` using `search`.
///
/// On a found path the direction leads to the adjacent first step.  On any
/// fallback the kernel's raw target is kept as `next` and the direction is
/// picked by [`greedy_direction`].
pub fn head_toward(ghost: &Ghost, target: Position, search: &SearchSpec, grid: &Grid) -> Intent {
    let ts = grid.tile_size();
    if !ghost.is_on_grid(ts) {
        return Intent::Move { direction: ghost.facing, next: target, target };
    }

    let here = grid.clamp(grid.tile_of(ghost.position));
    let step = search.next_step(grid, ghost.position, target);

    if step.is_found() {
        if let Some(direction) = grid.direction_between(here, grid.tile_of(step.position), search.edges) {
            return Intent::Move { direction, next: step.position, target };
        }
    }

    match greedy_direction(grid, here, ghost.facing, target, search.edges) {
        Some(direction) => Intent::Move { direction, next: step.position, target },
        None            => Intent::Hold,
    }
}

/// Among open neighbours of `here` that do not reverse `facing`, the one
/// whose world position is closest (squared Euclidean) to `target`.
/// Ties go to the earlier direction in [`Direction::ALL`].  A dead end
/// reverses; a fully enclosed tile yields `None`.
pub fn greedy_direction(
    grid:   &Grid,
    here:   Tile,
    facing: Direction,
    target: Position,
    edges:  EdgeMode,
) -> Option<Direction> {
    let ts = grid.tile_size();
    let mut best: Option<(i64, Direction)> = None;
    for dir in Direction::ALL {
        if dir == facing.opposite() {
            continue;
        }
        let Some(next) = open_neighbor(grid, here, dir, edges) else { continue };
        let d = next.to_world(ts).distance_sq(target);
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, dir));
        }
    }
    best.map(|(_, dir)| dir).or_else(|| reverse_if_open(grid, here, facing, edges))
}

/// Frightened movement: a uniformly random open, non-reversing neighbour.
/// Never looks at any target.
pub fn wander(ghost: &Ghost, grid: &Grid, edges: EdgeMode, rng: &mut AgentRng) -> Intent {
    let ts = grid.tile_size();
    if !ghost.is_on_grid(ts) {
        let ahead = ghost.position.project(ts, ghost.facing);
        return Intent::Move { direction: ghost.facing, next: ahead, target: ahead };
    }

    let here = grid.clamp(grid.tile_of(ghost.position));
    let mut options = [Direction::Up; 4];
    let mut n = 0;
    for dir in Direction::ALL {
        if dir != ghost.facing.opposite() && open_neighbor(grid, here, dir, edges).is_some() {
            options[n] = dir;
            n += 1;
        }
    }

    let choice = rng
        .choose(&options[..n])
        .copied()
        .or_else(|| reverse_if_open(grid, here, ghost.facing, edges));

    match choice.and_then(|dir| open_neighbor(grid, here, dir, edges).map(|t| (dir, t))) {
        Some((direction, tile)) => {
            let next = tile.to_world(ts);
            Intent::Move { direction, next, target: next }
        }
        None => Intent::Hold,
    }
}

#[inline]
fn open_neighbor(grid: &Grid, here: Tile, dir: Direction, edges: EdgeMode) -> Option<Tile> {
    grid.neighbor(here, dir, edges).filter(|t| grid.is_open(t.col, t.row))
}

#[inline]
fn reverse_if_open(grid: &Grid, here: Tile, facing: Direction, edges: EdgeMode) -> Option<Direction> {
    let back = facing.opposite();
    open_neighbor(grid, here, back, edges).map(|_| back)
}
