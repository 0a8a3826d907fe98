//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the rules of the three bead games and the small amount
//! of bookkeeping they share. It has **no dependencies** on terminal, timing
//! or I/O code:
//!
//! - **Deterministic**: games take a seed, so the same inputs replay exactly
//! - **Testable**: every rule is reachable through plain method calls
//! - **Host-agnostic**: games report sounds and animations as [`GameEvent`]s
//!   instead of calling into a renderer
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size occupancy grid of [`CellContent`](types::CellContent)
//! - [`world`]: grid plus entity registry, kept in lock-step
//! - [`direction`]: rotating direction map (vector, glyph, color)
//! - [`borders`]: toggleable sides and corner direction switches
//! - [`spawn`]: uniform pick among enabled directions
//! - [`rng`]: reseedable LCG and Fisher–Yates shuffle
//! - [`events`]: per-callback event queue
//! - [`scene`]: scene state plus row cursor for reveal animations
//! - [`level`]: slider level templates
//! - [`gravity`], [`slider`], [`rain`]: the three games
//!
//! # Timing
//!
//! Games do not measure time. The host calls their step functions from
//! periodic timers:
//!
//! | Game | Callback | Period (host ticks) |
//! |------|----------|---------------------|
//! | Gravity | [`GravityGame::step`] | 7 |
//! | Sliders | [`SliderGame::step`] | 7 |
//! | Rain | [`RainGame::fall_tick`] | 5 |
//! | Rain | [`RainGame::spawn_tick`] | 50 |
//!
//! # Example
//!
//! ```
//! use tui_beads_core::RainGame;
//! use tui_beads_core::types::{Key, SceneState};
//!
//! let mut game = RainGame::new(300);
//! game.spawn_tick();
//! game.key_down(Key::Char('s'));
//!
//! assert_eq!(game.drops().len(), 1);
//! assert_eq!(game.active_cat(), Some(1));
//! assert_eq!(game.state(), SceneState::Playing);
//! ```

pub mod borders;
pub mod direction;
pub mod events;
pub mod gravity;
pub mod grid;
pub mod level;
pub mod rain;
pub mod rng;
pub mod scene;
pub mod slider;
pub mod spawn;
pub mod world;

pub use tui_beads_types as types;

// Re-export commonly used types for convenience
pub use borders::{Borders, EdgeCell};
pub use direction::DirectionMap;
pub use events::EventQueue;
pub use gravity::GravityGame;
pub use grid::Grid;
pub use level::{builtin_levels, Level, LevelCell, LevelError};
pub use rain::{RainGame, Raindrop};
pub use rng::{RandomSource, SimpleRng};
pub use scene::Scene;
pub use slider::SliderGame;
pub use spawn::pick_direction;
pub use types::GameEvent;
pub use world::{Entity, MoveOutcome, Rejected, World};
