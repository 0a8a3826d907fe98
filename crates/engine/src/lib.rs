//! Host engine - timers and callback dispatch
//!
//! Games in `tui-beads-core` only expose step and input methods. This crate
//! supplies the host side:
//!
//! - [`Timers`]: periodic timers counted in host ticks (60 per second)
//! - [`Game`]: the callback seam, implemented for the three games
//! - [`Host`]: owns one game, fires its timers and serialises input
//! - [`AnyGame`]: picks the game at runtime
//! - [`Canvas`] / [`SoundSink`]: what a front end must provide
//!
//! # Example
//!
//! ```
//! use tui_beads_engine::{AnyGame, Game, Host};
//! use tui_beads_engine::types::{GameKind, HostInput, Key, SceneState};
//!
//! let game = AnyGame::new(GameKind::Rain, 300, Vec::new()).unwrap();
//! let mut host = Host::new(game).unwrap();
//!
//! host.dispatch(HostInput::KeyDown(Key::Char('a')));
//! for _ in 0..60 {
//!     host.tick();
//! }
//! assert_eq!(host.game().scene_state(), SceneState::Playing);
//! ```

pub mod any_game;
pub mod canvas;
pub mod host;
pub mod timer;

pub use tui_beads_types as types;

pub use any_game::AnyGame;
pub use canvas::{Canvas, SoundSink};
pub use host::{Game, Host};
pub use timer::{TimerError, TimerId, Timers, MAX_TIMERS};
