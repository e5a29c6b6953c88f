//! Grid module - manages the cell matrix for one simulation.
//!
//! The grid is a columns x rows matrix where every cell is alive or dead.
//! Uses a flat Vec for cache locality and O(1) indexed lookup.
//! Coordinates: (x, y) where x ranges 0..columns (left to right) and
//! y ranges 0..rows (top to bottom). Everything outside the grid reads as
//! dead, so edge cells simply see a partial neighborhood.

use std::fmt;

use crate::rng::SimpleRng;
use crate::rules::next_state;
use crate::types::CellState;

/// Error returned when a grid is constructed with negative dimensions.
///
/// Zero-sized grids are valid (they hold no cells and step to themselves),
/// so only negative inputs are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDimension {
    pub columns: i32,
    pub rows: i32,
}

impl fmt::Display for InvalidDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid grid dimensions: {} x {}",
            self.columns, self.rows
        )
    }
}

impl std::error::Error for InvalidDimension {}

/// The simulation grid, using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: i32,
    rows: i32,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(columns: i32, rows: i32) -> Result<Self, InvalidDimension> {
        if columns < 0 || rows < 0 {
            return Err(InvalidDimension { columns, rows });
        }
        let len = (columns as usize) * (rows as usize);
        Ok(Self {
            columns,
            rows,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Create a grid with every cell drawn alive or dead at even odds
    pub fn random(columns: i32, rows: i32, rng: &mut SimpleRng) -> Result<Self, InvalidDimension> {
        let mut grid = Self::new(columns, rows)?;
        grid.randomize(rng);
        Ok(grid)
    }

    /// Get number of columns
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Get number of rows
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.columns || y < 0 || y >= self.rows {
            return None;
        }
        Some((y as usize) * (self.columns as usize) + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// State at position (x, y), with everything off the grid reading as dead
    ///
    /// Total over all coordinate pairs; this is the lookup used for neighbor
    /// counting at the edges.
    pub fn state_at(&self, x: i32, y: i32) -> CellState {
        match self.get(x, y) {
            Some(state) => state,
            None => CellState::Dead,
        }
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    /// Count alive cells among the 8 neighbors of (x, y)
    ///
    /// Off-grid neighbors count as dead. The result is always in 0..=8.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0u8;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.state_at(x + dx, y + dy).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance one generation, producing a brand-new grid
    ///
    /// Every next state is computed against `self`, so the whole grid updates
    /// simultaneously; no cell observes a neighbor's already-updated state.
    pub fn step(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.rows {
            for x in 0..self.columns {
                cells.push(next_state(self.state_at(x, y), self.live_neighbors(x, y)));
            }
        }
        Grid {
            columns: self.columns,
            rows: self.rows,
            cells,
        }
    }

    /// Redraw every cell alive or dead at even odds
    pub fn randomize(&mut self, rng: &mut SimpleRng) {
        for cell in &mut self.cells {
            *cell = if rng.next_bool() {
                CellState::Alive
            } else {
                CellState::Dead
            };
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Iterate the coordinates of all alive cells, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            if cell.is_alive() {
                let x = (i as i32) % columns;
                let y = (i as i32) / columns;
                Some((x, y))
            } else {
                None
            }
        })
    }

    /// Number of alive cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}
