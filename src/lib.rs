//! TUI Beads (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benches share one path: `tui_beads::{core,
//! engine, input, term, types}`. App-level glue (configuration, logging,
//! level packs) lives here.

pub use tui_beads_core as core;
pub use tui_beads_engine as engine;
pub use tui_beads_input as input;
pub use tui_beads_term as term;
pub use tui_beads_types as types;

pub mod assets;
pub mod config;
pub mod logging;
