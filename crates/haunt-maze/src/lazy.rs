//! Build-once, read-many grid holder.
//!
//! `LazyGrid` keeps the wall list and defers building the [`Grid`] until the
//! first query.  The cell is a `std::sync::OnceLock`, so when several worker
//! threads race on the first [`LazyGrid::get`], exactly one of them runs the
//! build and the rest block until it finishes.  After that every access is a
//! plain shared reference.

use std::sync::OnceLock;

use haunt_core::Position;

use crate::{Grid, GridBuilder, MazeSpec};

pub struct LazyGrid {
    spec:  MazeSpec,
    walls: Vec<Position>,
    cell:  OnceLock<Grid>,
}

impl LazyGrid {
    pub fn new(spec: MazeSpec, walls: Vec<Position>) -> Self {
        Self { spec, walls, cell: OnceLock::new() }
    }

    /// Wrap an already-built grid.
    pub fn from_grid(grid: Grid) -> Self {
        let cell = OnceLock::new();
        let spec = grid.spec();
        let _ = cell.set(grid);
        Self { spec, walls: Vec::new(), cell }
    }

    pub fn spec(&self) -> MazeSpec {
        self.spec
    }

    /// The grid, building it on first call.
    pub fn get(&self) -> &Grid {
        self.cell.get_or_init(|| {
            let mut builder = GridBuilder::new(self.spec);
            builder.add_walls(self.walls.iter().copied());
            builder.build()
        })
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Replace the wall set.  The next [`LazyGrid::get`] builds a fresh grid.
    ///
    /// Needs `&mut self`, so no reader can hold the old grid across the swap.
    pub fn rebuild(&mut self, walls: Vec<Position>) {
        self.walls = walls;
        self.cell = OnceLock::new();
    }
}

impl std::fmt::Debug for LazyGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyGrid")
            .field("spec", &self.spec)
            .field("walls", &self.walls.len())
            .field("built", &self.is_built())
            .finish()
    }
}
