//! Terminal frontend for the Game of Life simulation.
//!
//! Rendering is split in two layers:
//!
//! - [`view::LifeView`] projects a [`core::LifeSession`] into an in-memory
//!   [`fb::FrameBuffer`]. This layer is pure and unit-testable.
//! - [`renderer::TerminalRenderer`] owns the real terminal and flushes
//!   framebuffers to it, diffing against the previous frame so that only
//!   changed runs are rewritten.

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{LifeView, Viewport};
