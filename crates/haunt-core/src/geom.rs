//! World and grid coordinates, cardinal directions, and playfield extents.
//!
//! Two coordinate spaces are in play:
//!
//! - **World** ([`Position`]): integer pixel coordinates as the movement and
//!   render layers see them.  `y` grows downward.
//! - **Grid** ([`Tile`]): `(col, row)` cell indices, `world / tile_size`.
//!
//! An agent is *on the grid* when both world coordinates are exact multiples
//! of the tile size.  Search only makes sense from such positions.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal headings.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Fixed neighbour expansion order.  Every tie-break in the search kernel
    /// and the greedy fallback follows this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` in grid space (`y` grows downward).
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tile ──────────────────────────────────────────────────────────────────────

/// A grid cell index.  May lie outside the grid until clamped by it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub col: i32,
    pub row: i32,
}

impl Tile {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// World position of this tile's top-left corner.
    #[inline]
    pub fn to_world(self, tile_size: i32) -> Position {
        Position::new(self.col * tile_size, self.row * tile_size)
    }

    /// The adjacent tile one step in `dir`, with no bounds handling.
    #[inline]
    pub fn step(self, dir: Direction) -> Tile {
        let (dx, dy) = dir.delta();
        Tile::new(self.col + dx, self.row + dy)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

/// An integer world (pixel) coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid cell containing this position.
    ///
    /// Uses Euclidean division so `-1` maps to tile `-1`, not `0`; the grid
    /// clamps out-of-range tiles afterwards.
    #[inline]
    pub fn tile(self, tile_size: i32) -> Tile {
        Tile::new(self.x.div_euclid(tile_size), self.y.div_euclid(tile_size))
    }

    /// `true` when both coordinates sit exactly on a tile boundary.
    #[inline]
    pub fn is_aligned(self, tile_size: i32) -> bool {
        self.x.rem_euclid(tile_size) == 0 && self.y.rem_euclid(tile_size) == 0
    }

    /// The point `distance` world units from `self` along `dir`.
    ///
    /// Saturates at the `i32` limits; targets that far out are clamped
    /// onto the grid by the search anyway.
    #[inline]
    pub fn project(self, distance: i32, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(
            self.x.saturating_add(dx.saturating_mul(distance)),
            self.y.saturating_add(dy.saturating_mul(distance)),
        )
    }

    /// Reflect `self` through `pivot`: `pivot + (pivot - self)`, saturating.
    #[inline]
    pub fn reflect_through(self, pivot: Position) -> Position {
        Position::new(reflect(pivot.x, self.x), reflect(pivot.y, self.y))
    }

    /// Squared Euclidean distance, saturating at `i64::MAX`.
    #[inline]
    pub fn distance_sq(self, other: Position) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }
}

#[inline]
fn reflect(pivot: i32, v: i32) -> i32 {
    (2 * pivot as i64 - v as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Playfield ─────────────────────────────────────────────────────────────────

/// World extents of the maze in pixels.  Scatter corners are derived from it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playfield {
    pub width:  i32,
    pub height: i32,
}

impl Playfield {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn top_left(self) -> Position {
        Position::ORIGIN
    }

    pub fn top_right(self) -> Position {
        Position::new(self.width, 0)
    }

    pub fn bottom_left(self) -> Position {
        Position::new(0, self.height)
    }

    pub fn bottom_right(self) -> Position {
        Position::new(self.width, self.height)
    }
}
