//! Transition rule for the standard Life rule set.
//!
//! A live cell survives with 2 or 3 live neighbors, a dead cell comes alive
//! with exactly 3, everything else dies or stays dead.

use crate::types::CellState;

/// Next state for one cell, given its current state and live neighbor count.
///
/// The neighbor count is at most 8; larger values are treated like any other
/// non-matching count and produce `Dead`.
pub fn next_state(state: CellState, live_neighbors: u8) -> CellState {
    match (state, live_neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
