//! Runtime choice between the three games.

use log::info;

use crate::host::Game;
use crate::types::{GameEvent, GameKind, HostInput, SceneState};
use tui_beads_core::{GravityGame, Level, LevelError, RainGame, SliderGame};

#[derive(Debug, Clone)]
pub enum AnyGame {
    Gravity(GravityGame),
    Slider(SliderGame),
    Rain(RainGame),
}

impl AnyGame {
    /// Build the game for `kind`.
    ///
    /// `levels` replaces the built-in slider levels when non-empty; the other
    /// games ignore it.
    pub fn new(kind: GameKind, seed: u32, levels: Vec<Level>) -> Result<Self, LevelError> {
        let game = match kind {
            GameKind::Gravity => AnyGame::Gravity(GravityGame::new(seed)),
            GameKind::Slider if levels.is_empty() => AnyGame::Slider(SliderGame::new()),
            GameKind::Slider => AnyGame::Slider(SliderGame::with_levels(levels)?),
            GameKind::Rain => AnyGame::Rain(RainGame::new(seed)),
        };
        info!("starting {} (seed {})", kind.title(), seed);
        Ok(game)
    }
}

impl Game for AnyGame {
    fn kind(&self) -> GameKind {
        match self {
            AnyGame::Gravity(g) => g.kind(),
            AnyGame::Slider(g) => g.kind(),
            AnyGame::Rain(g) => g.kind(),
        }
    }

    fn timer_periods(&self) -> &'static [u32] {
        match self {
            AnyGame::Gravity(g) => g.timer_periods(),
            AnyGame::Slider(g) => g.timer_periods(),
            AnyGame::Rain(g) => g.timer_periods(),
        }
    }

    fn on_timer(&mut self, slot: usize) {
        match self {
            AnyGame::Gravity(g) => g.on_timer(slot),
            AnyGame::Slider(g) => g.on_timer(slot),
            AnyGame::Rain(g) => g.on_timer(slot),
        }
    }

    fn on_input(&mut self, input: HostInput) {
        match self {
            AnyGame::Gravity(g) => g.on_input(input),
            AnyGame::Slider(g) => g.on_input(input),
            AnyGame::Rain(g) => g.on_input(input),
        }
    }

    fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        match self {
            AnyGame::Gravity(g) => Game::drain_events(g, out),
            AnyGame::Slider(g) => Game::drain_events(g, out),
            AnyGame::Rain(g) => Game::drain_events(g, out),
        }
    }

    fn scene_state(&self) -> SceneState {
        match self {
            AnyGame::Gravity(g) => g.scene_state(),
            AnyGame::Slider(g) => g.scene_state(),
            AnyGame::Rain(g) => g.scene_state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips() {
        for kind in [GameKind::Gravity, GameKind::Slider, GameKind::Rain] {
            let game = AnyGame::new(kind, 1, Vec::new()).unwrap();
            assert_eq!(game.kind(), kind);
        }
    }

    #[test]
    fn test_bad_level_pack_is_reported() {
        let tiny = Level::parse("tiny", &["P.", ".."]).unwrap();
        assert!(AnyGame::new(GameKind::Slider, 1, vec![tiny]).is_err());
        let tiny = Level::parse("tiny", &["P.", ".."]).unwrap();
        assert!(AnyGame::new(GameKind::Gravity, 1, vec![tiny]).is_ok());
    }
}
