//! Terminal front end for the bead games.
//!
//! Renders bead grids into a simple framebuffer that is flushed to a terminal
//! backend, no widget toolkit involved. Each bead is 2 chars wide so the
//! boards stay roughly square.
//!
//! Pipeline per frame:
//! - painters turn game state into beads on a [`BeadGrid`]
//! - [`BeadView`] maps beads to styled cells in a [`FrameBuffer`]
//! - [`TerminalRenderer`] diffs against the last frame and writes the changes

pub mod bead_view;
pub mod fb;
pub mod painters;
pub mod renderer;
pub mod sound;
pub mod trail;

pub use tui_beads_core as core;
pub use tui_beads_engine as engine;
pub use tui_beads_types as types;

pub use bead_view::{BeadGrid, BeadView, Hud, Layout, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use painters::{grid_size, overlay_text, paint, status_line};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sound::TerminalSound;
pub use trail::TrailFade;
