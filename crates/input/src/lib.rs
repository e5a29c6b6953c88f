//! Keyboard handling for the terminal frontend.
//!
//! Maps `crossterm` key events into [`crate::types::SimAction`] values and
//! provides a DAS/ARR key repeater that works in terminals without
//! key-release events. Nothing here touches the terminal itself.

pub mod map;
pub mod repeat;

pub use tui_life_types as types;

pub use map::{action_for_key, should_quit};
pub use repeat::KeyRepeater;
