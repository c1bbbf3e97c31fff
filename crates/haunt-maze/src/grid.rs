//! Occupancy grid and its builder.
//!
//! # Data layout
//!
//! The grid is a flat row-major `Vec<bool>`: cell `(col, row)` lives at
//! index `row * cols + col`.  `true` means wall.  The search kernel indexes
//! its own per-call arrays the same way, so a cell index is interchangeable
//! between the two.
//!
//! # Bounds policy
//!
//! Every query accepts any `i32` pair.  Out-of-range cells read as "not a
//! wall" from [`Grid::is_wall`] and "not open" from [`Grid::is_open`];
//! nothing ever indexes out of bounds.  Walls given to the builder outside
//! the grid are dropped and counted.

use rustc_hash::FxHashSet;

use haunt_core::{Direction, Playfield, Position, Tile};

use crate::{MazeError, MazeResult};

// ── MazeSpec ──────────────────────────────────────────────────────────────────

/// Grid dimensions and the world-to-grid scale.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeSpec {
    /// World units per tile edge.
    pub tile_size: i32,
    pub cols:      i32,
    pub rows:      i32,
}

impl MazeSpec {
    /// Validate and construct.  All three values must be positive.
    pub fn new(tile_size: i32, cols: i32, rows: i32) -> MazeResult<Self> {
        let spec = Self { tile_size, cols, rows };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> MazeResult<()> {
        if self.tile_size <= 0 || self.cols <= 0 || self.rows <= 0 {
            return Err(MazeError::InvalidSpec {
                tile_size: self.tile_size,
                cols:      self.cols,
                rows:      self.rows,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// World extents covered by the grid.
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.cols * self.tile_size, self.rows * self.tile_size)
    }
}

impl Default for MazeSpec {
    /// The arcade board: 8 px tiles, 56 × 62 cells (448 × 496 px).
    fn default() -> Self {
        Self { tile_size: 8, cols: 56, rows: 62 }
    }
}

// ── EdgeMode ──────────────────────────────────────────────────────────────────

/// How a step off the left or right edge is treated.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeMode {
    /// Steps off any edge are rejected.
    #[default]
    Bounded,
    /// Horizontal steps wrap to the opposite column.  Vertical edges stay
    /// closed.
    TunnelWrap,
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Immutable wall occupancy map.  Build with [`GridBuilder`].
#[derive(Clone, Debug)]
pub struct Grid {
    spec:  MazeSpec,
    walls: Vec<bool>,
    wall_count: usize,
}

impl Grid {
    #[inline]
    pub fn spec(&self) -> MazeSpec {
        self.spec
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.spec.cols
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.spec.rows
    }

    #[inline]
    pub fn tile_size(&self) -> i32 {
        self.spec.tile_size
    }

    /// Number of distinct wall cells.
    #[inline]
    pub fn wall_count(&self) -> usize {
        self.wall_count
    }

    #[inline]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.spec.cols && row < self.spec.rows
    }

    /// Flat index of an in-range cell.
    #[inline]
    pub(crate) fn index(&self, tile: Tile) -> usize {
        (tile.row as usize) * (self.spec.cols as usize) + tile.col as usize
    }

    /// Inverse of [`Grid::index`].
    #[inline]
    pub(crate) fn tile_at(&self, index: usize) -> Tile {
        let cols = self.spec.cols as usize;
        Tile::new((index % cols) as i32, (index / cols) as i32)
    }

    /// `true` iff `(col, row)` is inside the grid and wall-occupied.
    #[inline]
    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        self.contains(col, row) && self.walls[self.index(Tile::new(col, row))]
    }

    /// `true` iff `(col, row)` is inside the grid and free.
    #[inline]
    pub fn is_open(&self, col: i32, row: i32) -> bool {
        self.contains(col, row) && !self.walls[self.index(Tile::new(col, row))]
    }

    /// Clamp a tile into `[0, cols-1] × [0, rows-1]`.
    #[inline]
    pub fn clamp(&self, tile: Tile) -> Tile {
        Tile::new(
            tile.col.clamp(0, self.spec.cols - 1),
            tile.row.clamp(0, self.spec.rows - 1),
        )
    }

    /// Tile containing a world position.  Not clamped.
    #[inline]
    pub fn tile_of(&self, pos: Position) -> Tile {
        pos.tile(self.spec.tile_size)
    }

    /// The in-range tile one step from `tile` in `dir`, or `None` when the
    /// step leaves the grid and `edges` does not wrap it.  Walls are not
    /// checked here.
    #[inline]
    pub fn neighbor(&self, tile: Tile, dir: Direction, edges: EdgeMode) -> Option<Tile> {
        let next = tile.step(dir);
        if next.row < 0 || next.row >= self.spec.rows {
            return None;
        }
        if next.col < 0 || next.col >= self.spec.cols {
            return match edges {
                EdgeMode::Bounded    => None,
                EdgeMode::TunnelWrap => Some(Tile::new(next.col.rem_euclid(self.spec.cols), next.row)),
            };
        }
        Some(next)
    }

    /// The direction whose single step leads from `from` to `to`, if they are
    /// adjacent under `edges`.  Under tunnel wrap a step across the seam is
    /// reported as the direction that crosses it.
    pub fn direction_between(&self, from: Tile, to: Tile, edges: EdgeMode) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.neighbor(from, d, edges) == Some(to))
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Collects wall positions and produces a [`Grid`].
pub struct GridBuilder {
    spec:      MazeSpec,
    tiles:     FxHashSet<Tile>,
    discarded: usize,
}

impl GridBuilder {
    pub fn new(spec: MazeSpec) -> Self {
        Self { spec, tiles: FxHashSet::default(), discarded: 0 }
    }

    /// Parse an ASCII picture (see [`AsciiMaze`]) into a builder.
    pub fn from_ascii<I, S>(lines: I, tile_size: i32) -> MazeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let maze = AsciiMaze::parse(lines, tile_size)?;
        let mut builder = Self::new(maze.spec);
        builder.add_walls(maze.walls);
        Ok(builder)
    }

    /// Add a wall at a world position.
    ///
    /// Returns `false` when the position falls outside the grid and was
    /// dropped.  Duplicates are accepted and collapse to one cell.
    pub fn add_wall(&mut self, pos: Position) -> bool {
        let tile = pos.tile(self.spec.tile_size);
        if tile.col < 0 || tile.row < 0 || tile.col >= self.spec.cols || tile.row >= self.spec.rows {
            self.discarded += 1;
            return false;
        }
        self.tiles.insert(tile);
        true
    }

    pub fn add_walls<I: IntoIterator<Item = Position>>(&mut self, walls: I) -> &mut Self {
        for pos in walls {
            self.add_wall(pos);
        }
        self
    }

    /// Number of walls dropped so far for being out of range.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn build(self) -> Grid {
        let mut walls = vec![false; self.spec.cell_count()];
        let cols = self.spec.cols as usize;
        for tile in &self.tiles {
            walls[(tile.row as usize) * cols + tile.col as usize] = true;
        }
        tracing::debug!(
            cols = self.spec.cols,
            rows = self.spec.rows,
            walls = self.tiles.len(),
            discarded = self.discarded,
            "grid built"
        );
        Grid { spec: self.spec, walls, wall_count: self.tiles.len() }
    }
}

// ── AsciiMaze ─────────────────────────────────────────────────────────────────

/// A maze drawn as text: one line per row, `#` for a wall, anything else open.
///
/// ```text
/// #####
/// #...#
/// .....   <- a row open at both ends can serve as a tunnel
/// #####
/// ```
#[derive(Clone, Debug)]
pub struct AsciiMaze {
    pub spec:  MazeSpec,
    /// World position (top-left corner) of every wall tile.
    pub walls: Vec<Position>,
}

impl AsciiMaze {
    pub fn parse<I, S>(lines: I, tile_size: i32) -> MazeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut width: Option<usize> = None;
        let mut rows = 0usize;
        let mut walls = Vec::new();

        for (row, line) in lines.into_iter().enumerate() {
            let bytes = line.as_ref().as_bytes();
            match width {
                None => width = Some(bytes.len()),
                Some(expected) if expected != bytes.len() => {
                    return Err(MazeError::RaggedRow { row, expected, found: bytes.len() });
                }
                Some(_) => {}
            }
            for (col, &b) in bytes.iter().enumerate() {
                if b == b'#' {
                    walls.push(Tile::new(col as i32, row as i32).to_world(tile_size));
                }
            }
            rows += 1;
        }

        let cols = match width {
            Some(w) if rows > 0 => w,
            _ => return Err(MazeError::Empty),
        };
        let spec = MazeSpec::new(tile_size, cols as i32, rows as i32)?;
        Ok(Self { spec, walls })
    }
}
