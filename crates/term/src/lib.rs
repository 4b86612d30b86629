//! Terminal frontend for the rules engine.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled cells and
//! flushes it to the terminal with `crossterm`, diffing against the previous
//! frame. Drawing is pure and testable; only [`TerminalRenderer`] does I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
