//! Host dispatcher - owns one game and its timers
//!
//! All game mutation happens inside [`Host::tick`] and [`Host::dispatch`].
//! Events the game raised during the call are collected right after it and
//! stay available through [`Host::drain_events`] until the next call.

use log::{debug, trace};

use crate::timer::{TimerError, TimerId, Timers, MAX_TIMERS};
use crate::types::{GameEvent, GameKind, HostInput, Key, Pos, SceneState};
use arrayvec::ArrayVec;
use tui_beads_core::{GravityGame, RainGame, SliderGame};

/// The callback seam between the host and a game
pub trait Game {
    fn kind(&self) -> GameKind;

    /// Timer periods in host ticks; slot `i` fires [`Game::on_timer`]`(i)`
    fn timer_periods(&self) -> &'static [u32];

    fn on_timer(&mut self, slot: usize);

    fn on_input(&mut self, input: HostInput);

    /// Move events raised since the last call into `out`
    fn drain_events(&mut self, out: &mut Vec<GameEvent>);

    fn scene_state(&self) -> SceneState;
}

/// Owns a game, its timers and the pending event list
#[derive(Debug)]
pub struct Host<G> {
    game: G,
    timers: Timers,
    slots: ArrayVec<(TimerId, usize), MAX_TIMERS>,
    events: Vec<GameEvent>,
    ticks: u64,
}

impl<G: Game> Host<G> {
    /// Wrap a game and start the timers it asks for
    pub fn new(game: G) -> Result<Self, TimerError> {
        let mut timers = Timers::new();
        let mut slots = ArrayVec::new();
        for (slot, &period) in game.timer_periods().iter().enumerate() {
            let id = timers.start(period)?;
            slots.try_push((id, slot)).map_err(|_| TimerError::Full)?;
        }
        debug!("host for {} with {} timers", game.kind().as_str(), slots.len());
        Ok(Self {
            game,
            timers,
            slots,
            events: Vec::with_capacity(32),
            ticks: 0,
        })
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Host ticks since start
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Advance one host tick, firing due timers in registration order
    pub fn tick(&mut self) {
        self.ticks += 1;
        for id in self.timers.advance() {
            if let Some(&(_, slot)) = self.slots.iter().find(|(t, _)| *t == id) {
                trace!("tick {}: timer slot {}", self.ticks, slot);
                self.game.on_timer(slot);
            }
        }
        self.game.drain_events(&mut self.events);
    }

    /// Deliver one input to the game
    pub fn dispatch(&mut self, input: HostInput) {
        self.game.on_input(input);
        self.game.drain_events(&mut self.events);
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn into_game(self) -> G {
        self.game
    }
}

fn cell(x: u8, y: u8) -> Pos {
    Pos::new(x as i16, y as i16)
}

const GRAVITY_TIMERS: [u32; 1] = [crate::types::GRAVITY_STEP_TICKS];
const SLIDER_TIMERS: [u32; 1] = [crate::types::SLIDER_STEP_TICKS];
const RAIN_TIMERS: [u32; 2] = [crate::types::RAIN_FALL_TICKS, crate::types::RAIN_SPAWN_TICKS];

impl Game for GravityGame {
    fn kind(&self) -> GameKind {
        GameKind::Gravity
    }

    fn timer_periods(&self) -> &'static [u32] {
        &GRAVITY_TIMERS
    }

    fn on_timer(&mut self, _slot: usize) {
        self.step();
    }

    fn on_input(&mut self, input: HostInput) {
        match input {
            HostInput::Touch { x, y } => self.touch(cell(x, y)),
            HostInput::Enter { x, y, touching } => self.enter(cell(x, y), touching),
            HostInput::KeyDown(key) => self.key_down(key),
        }
    }

    fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        GravityGame::drain_events(self, out);
    }

    fn scene_state(&self) -> SceneState {
        SceneState::Playing
    }
}

impl Game for SliderGame {
    fn kind(&self) -> GameKind {
        GameKind::Slider
    }

    fn timer_periods(&self) -> &'static [u32] {
        &SLIDER_TIMERS
    }

    fn on_timer(&mut self, _slot: usize) {
        self.step();
    }

    fn on_input(&mut self, input: HostInput) {
        if let HostInput::KeyDown(key) = input {
            self.key_down(key);
        }
    }

    fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        SliderGame::drain_events(self, out);
    }

    fn scene_state(&self) -> SceneState {
        self.state()
    }
}

impl Game for RainGame {
    fn kind(&self) -> GameKind {
        GameKind::Rain
    }

    fn timer_periods(&self) -> &'static [u32] {
        &RAIN_TIMERS
    }

    fn on_timer(&mut self, slot: usize) {
        match slot {
            0 => self.fall_tick(),
            _ => self.spawn_tick(),
        }
    }

    fn on_input(&mut self, input: HostInput) {
        if let HostInput::KeyDown(key @ Key::Char(_)) = input {
            self.key_down(key);
        }
    }

    fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        RainGame::drain_events(self, out);
    }

    fn scene_state(&self) -> SceneState {
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, SoundCue};

    #[test]
    fn test_gravity_steps_every_seven_ticks() {
        let mut game = GravityGame::new(1);
        let id = game.place_block(Pos::new(3, 3), Direction::Down).unwrap();
        let mut host = Host::new(game).unwrap();

        for _ in 0..6 {
            host.tick();
        }
        assert_eq!(host.game().world().entity(id).unwrap().pos, Pos::new(3, 3));
        host.tick();
        assert_eq!(host.game().world().entity(id).unwrap().pos, Pos::new(3, 4));
        assert_eq!(host.ticks(), 7);
    }

    #[test]
    fn test_dispatch_collects_events() {
        let mut host = Host::new(GravityGame::new(1)).unwrap();
        host.dispatch(HostInput::KeyDown(Key::Char('k')));

        let events: Vec<GameEvent> = host.drain_events().collect();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::Sound(s)] if s.cue == SoundCue::PowerUp
        ));
        assert!(host.events().is_empty());
    }

    #[test]
    fn test_rain_runs_two_timers() {
        let mut host = Host::new(RainGame::new(300)).unwrap();
        assert_eq!(host.timers().len(), 2);
        for _ in 0..50 {
            host.tick();
        }
        let drop = host.game().drops()[0];
        assert_eq!(drop.y, -1);
        for _ in 0..5 {
            host.tick();
        }
        assert_eq!(host.game().drops()[0].y, 0);
    }

    #[test]
    fn test_slider_ignores_touch() {
        let mut host = Host::new(SliderGame::new()).unwrap();
        host.dispatch(HostInput::Touch { x: 3, y: 3 });
        assert!(host.events().is_empty());
        assert_eq!(host.game().scene_state(), SceneState::Loading);
    }
}
