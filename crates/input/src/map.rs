//! Key mapping from terminal events to simulation actions.

use crate::types::SimAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to simulation actions.
pub fn action_for_key(key: KeyEvent) -> Option<SimAction> {
    match key.code {
        // Run control
        KeyCode::Char(' ') => Some(SimAction::ToggleRun),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('.') => Some(SimAction::StepOnce),

        // Board contents
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('g') | KeyCode::Char('G') => {
            Some(SimAction::Randomize)
        }
        KeyCode::Char('c') | KeyCode::Char('C') => Some(SimAction::Clear),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(SimAction::NextPattern),

        // View and speed
        KeyCode::Char('+') | KeyCode::Char('=') => Some(SimAction::CellSizeUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(SimAction::CellSizeDown),
        KeyCode::Char(']') => Some(SimAction::SpeedUp),
        KeyCode::Char('[') => Some(SimAction::SlowDown),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
