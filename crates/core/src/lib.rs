//! The simulation engine: grid, rules, and the session driving them
//!
//! Holds the grid data model, the Life transition rule, and the session that
//! drives generational advancement. The crate does no UI or I/O at all, so
//! the same seed always replays the same boards and everything is exercised
//! headless in tests.
//!
//! # Module Structure
//!
//! - [`grid`]: flat-array cell matrix with O(1) lookup and whole-grid stepping
//! - [`rules`]: the B3/S23 transition table
//! - [`rng`]: seeded LCG for replayable random boards
//! - [`patterns`]: classic seed shapes (blinker, glider, pulsar, ...)
//! - [`session`]: run/pause state, step cadence, and control actions
//!
//! # Simulation Rules
//!
//! Standard Conway rules over a bounded grid:
//!
//! - A live cell with 2 or 3 live neighbors survives; otherwise it dies
//! - A dead cell with exactly 3 live neighbors comes alive
//! - Cells outside the grid read as dead, so the boundary absorbs activity
//! - Each generation is computed entirely against the previous grid
//!
//! # Example
//!
//! ```
//! use tui_life_core::LifeSession;
//! use tui_life_types::SimAction;
//!
//! // Create a session over a 20x10 random board
//! let mut session = LifeSession::new(20, 10, 12345).unwrap();
//!
//! // Scrub one generation while paused, then let it run
//! session.handle_action(SimAction::StepOnce);
//! session.handle_action(SimAction::ToggleRun);
//! session.tick(16);
//!
//! assert!(session.generation() >= 1);
//! ```
//!
//! # Timing
//!
//! The session uses an accumulator over a fixed timestep: call
//! [`LifeSession::tick`](session::LifeSession::tick) every frame with elapsed
//! time, and it advances at most one generation per call once the step
//! interval has elapsed. Excess time is discarded rather than replayed.

pub mod grid;
pub mod patterns;
pub mod rng;
pub mod rules;
pub mod session;

pub use tui_life_types as types;

pub use grid::{Grid, InvalidDimension};
pub use patterns::{Pattern, PATTERNS};
pub use rng::SimpleRng;
pub use rules::next_state;
pub use session::LifeSession;
