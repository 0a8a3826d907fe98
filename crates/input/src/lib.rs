//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into the host inputs the games
//! understand. Nothing here knows which game is running: key presses become
//! [`crate::types::Key`]s and mouse activity becomes bead touches through a
//! caller-supplied hit test.

pub mod map;
pub mod pointer;

pub use tui_beads_types as types;

pub use map::{map_key, should_quit};
pub use pointer::PointerTracker;
