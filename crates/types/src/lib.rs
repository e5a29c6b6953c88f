//! Shared data structures and constants for the Game of Life crates
//!
//! Everything here is plain data with no dependencies, so the simulation
//! core, the terminal frontend, and headless tests all build on the same
//! definitions.
//!
//! # Timing Constants
//!
//! All timing values are expressed in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed UI timestep interval (~60 FPS) |
//! | `DEFAULT_STEP_MS` | 10 | Default interval between generations |
//! | `MIN_STEP_MS` | 10 | Fastest allowed step interval |
//! | `MAX_STEP_MS` | 1000 | Slowest allowed step interval |
//! | `SPEED_STEP_MS` | 10 | Interval change per speed keypress |
//!
//! # Cell Scaling
//!
//! Terminal glyphs are roughly twice as tall as they are wide, so an on-screen
//! cell of size `k` occupies `k * CELL_ASPECT` columns by `k` rows:
//!
//! - `DEFAULT_CELL_SIZE`: 1 - one terminal row per cell
//! - `MIN_CELL_SIZE` / `MAX_CELL_SIZE`: 1..4
//! - `CELL_ASPECT`: 2
//!
//! # Key Repeat Timing
//!
//! Held keys (single-step scrubbing, speed sweeps) repeat after an initial
//! delay at a fixed rate:
//!
//! - `REPEAT_DAS_MS`: 150ms - time before auto-repeat starts
//! - `REPEAT_ARR_MS`: 50ms - interval between auto-repeats
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{CellState, SimAction, DEFAULT_STEP_MS};
//!
//! // Cell states parse from their lowercase names (case-insensitive)
//! let state = CellState::from_str("Alive").unwrap();
//! assert_eq!(state, CellState::Alive);
//! assert!(state.is_alive());
//! assert_eq!(state.as_str(), "alive");
//!
//! // Control actions are plain enums shared by input mapping and the session
//! let action = SimAction::ToggleRun;
//! assert_ne!(action, SimAction::StepOnce);
//!
//! assert_eq!(DEFAULT_STEP_MS, 10);
//! ```

/// Fixed UI timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default interval between generations (10ms)
pub const DEFAULT_STEP_MS: u32 = 10;

/// Fastest allowed step interval (10ms)
pub const MIN_STEP_MS: u32 = 10;

/// Slowest allowed step interval (1000ms = 1 generation per second)
pub const MAX_STEP_MS: u32 = 1000;

/// Interval change applied per speed keypress (10ms)
pub const SPEED_STEP_MS: u32 = 10;

/// Default on-screen cell size (1 terminal row per cell)
pub const DEFAULT_CELL_SIZE: u16 = 1;

/// Smallest on-screen cell size
pub const MIN_CELL_SIZE: u16 = 1;

/// Largest on-screen cell size
pub const MAX_CELL_SIZE: u16 = 4;

/// Horizontal stretch factor compensating for terminal glyph aspect ratio
pub const CELL_ASPECT: u16 = 2;

/// Delay before a held key starts auto-repeating (150ms)
pub const REPEAT_DAS_MS: u32 = 150;

/// Interval between auto-repeats of a held key (50ms)
pub const REPEAT_ARR_MS: u32 = 50;


/// The two states a grid cell can be in
///
/// Every coordinate of a grid holds exactly one of these. Lookups outside the
/// grid bounds report `Dead`, which is how the boundary behaves during
/// neighbor counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    /// Parse cell state from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::CellState;
    ///
    /// assert_eq!(CellState::from_str("alive"), Some(CellState::Alive));
    /// assert_eq!(CellState::from_str("dead"), Some(CellState::Dead));
    /// assert_eq!(CellState::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "alive" => Some(CellState::Alive),
            "dead" => Some(CellState::Dead),
            _ => None,
        }
    }

    /// Lowercase name, the inverse of `from_str`
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Alive => "alive",
            CellState::Dead => "dead",
        }
    }

    /// True for `Alive`
    pub fn is_alive(&self) -> bool {
        matches!(self, CellState::Alive)
    }
}

/// Control actions that can be applied to a running simulation
///
/// These actions are produced by the key mapping layer and consumed by the
/// session (grid rebuilds, stepping) or the frontend (cell scaling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimAction {
    /// Toggle between running and paused
    ToggleRun,
    /// Advance exactly one generation (paused only)
    StepOnce,
    /// Replace the grid with a fresh random board (paused only)
    Randomize,
    /// Kill every cell (paused only)
    Clear,
    /// Stamp the next seed pattern onto a cleared grid (paused only)
    NextPattern,
    /// Grow on-screen cells by one size step (paused only, rebuilds the grid)
    CellSizeUp,
    /// Shrink on-screen cells by one size step (paused only, rebuilds the grid)
    CellSizeDown,
    /// Shorten the interval between generations
    SpeedUp,
    /// Lengthen the interval between generations
    SlowDown,
}
