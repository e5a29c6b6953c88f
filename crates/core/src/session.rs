//! Session module - owns the grid and drives generational advancement.
//!
//! The grid itself is passive data. `LifeSession` is the driving side: it
//! holds the run/pause flag, accumulates elapsed time against the step
//! interval, applies control actions, and swaps in a brand-new grid on every
//! generation.

use crate::grid::{Grid, InvalidDimension};
use crate::patterns::{self, Pattern, PATTERNS};
use crate::rng::SimpleRng;
use crate::types::{SimAction, DEFAULT_STEP_MS, MAX_STEP_MS, MIN_STEP_MS, SPEED_STEP_MS};

/// A complete simulation: grid, RNG, cadence, and run state
#[derive(Debug, Clone)]
pub struct LifeSession {
    grid: Grid,
    rng: SimpleRng,
    /// Seed the session was created with (shown in the HUD).
    seed: u32,
    running: bool,
    generation: u64,
    step_interval_ms: u32,
    step_timer_ms: u32,
    /// Index of the next pattern handed out by `NextPattern`.
    pattern_cursor: usize,
}

impl LifeSession {
    /// Create a paused session over a randomized grid
    pub fn new(columns: i32, rows: i32, seed: u32) -> Result<Self, InvalidDimension> {
        let mut rng = SimpleRng::new(seed);
        let grid = Grid::random(columns, rows, &mut rng)?;
        Ok(Self {
            grid,
            rng,
            seed,
            running: false,
            generation: 0,
            step_interval_ms: DEFAULT_STEP_MS,
            step_timer_ms: 0,
            pattern_cursor: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advance time while running
    ///
    /// Performs at most one generation per call. Once the accumulated time
    /// reaches the step interval the timer resets to zero, so a long stall
    /// (or a pause/resume) never replays a backlog of missed generations.
    /// Returns true if a generation was stepped.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }

        self.step_timer_ms = self.step_timer_ms.saturating_add(elapsed_ms);
        if self.step_timer_ms < self.step_interval_ms {
            return false;
        }

        self.step_timer_ms = 0;
        self.advance();
        true
    }

    /// Toggle between running and paused
    ///
    /// The accumulator is cleared on both edges so resuming always waits a
    /// full interval before the next step.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        self.step_timer_ms = 0;
    }

    /// Advance exactly one generation while paused. No-op while running.
    pub fn step_once(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.advance();
        true
    }

    /// Apply a control action. Returns true if the action took effect.
    ///
    /// Grid rebuilds and single-stepping only apply while paused; while
    /// running they are ignored. Speed changes apply any time.
    pub fn handle_action(&mut self, action: SimAction) -> bool {
        match action {
            SimAction::ToggleRun => {
                self.toggle_running();
                true
            }
            SimAction::StepOnce => self.step_once(),
            SimAction::Randomize => {
                if self.running {
                    return false;
                }
                self.randomize();
                true
            }
            SimAction::Clear => {
                if self.running {
                    return false;
                }
                self.clear();
                true
            }
            SimAction::NextPattern => {
                if self.running {
                    return false;
                }
                self.apply_next_pattern();
                true
            }
            SimAction::SpeedUp => {
                self.set_step_interval(self.step_interval_ms.saturating_sub(SPEED_STEP_MS));
                true
            }
            SimAction::SlowDown => {
                self.set_step_interval(self.step_interval_ms.saturating_add(SPEED_STEP_MS));
                true
            }
            // Cell scaling is a viewport concern; the frontend rebuilds the
            // grid itself via `randomize_to`.
            SimAction::CellSizeUp | SimAction::CellSizeDown => false,
        }
    }

    /// Advance exactly one generation
    fn advance(&mut self) {
        self.grid = self.grid.step();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Redraw the current grid at even odds, keeping its dimensions
    pub fn randomize(&mut self) {
        self.grid.randomize(&mut self.rng);
        self.generation = 0;
    }

    /// Replace the grid with a randomized board of new dimensions
    ///
    /// Used when the cell size or viewport-derived dimensions change.
    pub fn randomize_to(&mut self, columns: i32, rows: i32) -> Result<(), InvalidDimension> {
        self.grid = Grid::random(columns, rows, &mut self.rng)?;
        self.generation = 0;
        Ok(())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Clear the grid and stamp a pattern, centered
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.grid.clear();
        patterns::stamp(&mut self.grid, pattern);
        self.generation = 0;
    }

    /// Cycle to the next entry of the pattern table
    pub fn apply_next_pattern(&mut self) {
        let pattern = &PATTERNS[self.pattern_cursor];
        self.pattern_cursor = (self.pattern_cursor + 1) % PATTERNS.len();
        self.apply_pattern(pattern);
    }

    /// Set the interval between generations, clamped to the allowed range
    pub fn set_step_interval(&mut self, ms: u32) {
        self.step_interval_ms = ms.clamp(MIN_STEP_MS, MAX_STEP_MS);
    }
}
