//! Umbrella cats - keep four cats dry
//!
//! Raindrops spawn above a 28x28 field and fall one row per fall step. Four
//! cats sit along the bottom, 7 columns each; at most one of them holds its
//! umbrella up. A drop reaching umbrella height over the raised cat is caught,
//! over any other cat it ends the game. Once the spawn quota is used up and
//! the sky is empty, the player wins.
//!
//! Drops never collide with each other, so they live in a plain list rather
//! than an occupancy grid.

use log::{debug, info};

use crate::events::EventQueue;
use crate::rng::{RandomSource, SimpleRng};
use crate::scene::Scene;
use crate::types::{
    GameEvent, Key, SceneState, SoundCue, RAIN_CATCH_ROW, RAIN_CAT_COUNT, RAIN_CAT_WIDTH,
    RAIN_DROPS_TO_WIN, RAIN_HEIGHT, RAIN_WIDTH,
};

const VOL_SELECT: f32 = 0.4;
const VOL_CATCH: f32 = 0.5;
const VOL_LOSE: f32 = 0.5;
const VOL_WIN: f32 = 0.5;

/// A falling drop; `y` is -1 right after spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raindrop {
    pub x: i16,
    pub y: i16,
}

/// Complete rain game state
#[derive(Debug, Clone)]
pub struct RainGame {
    drops: Vec<Raindrop>,
    spawned: u32,
    caught: u32,
    quota: u32,
    active_cat: Option<u8>,
    scene: Scene,
    rng: SimpleRng,
    events: EventQueue,
}

impl RainGame {
    pub fn new(seed: u32) -> Self {
        Self::with_quota(seed, RAIN_DROPS_TO_WIN)
    }

    /// Game that is won after `quota` drops
    pub fn with_quota(seed: u32, quota: u32) -> Self {
        Self {
            drops: Vec::with_capacity(quota.min(64) as usize),
            spawned: 0,
            caught: 0,
            quota,
            active_cat: None,
            scene: Scene::new(SceneState::Playing, RAIN_HEIGHT),
            rng: SimpleRng::new(seed),
            events: EventQueue::new(),
        }
    }

    pub fn width(&self) -> u8 {
        RAIN_WIDTH
    }

    pub fn height(&self) -> u8 {
        RAIN_HEIGHT
    }

    pub fn state(&self) -> SceneState {
        self.scene.state()
    }

    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }

    /// Drops spawned so far
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn caught(&self) -> u32 {
        self.caught
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    /// Cat holding its umbrella up, if any
    pub fn active_cat(&self) -> Option<u8> {
        self.active_cat
    }

    /// Cat sitting under column `x`
    pub fn cat_at(&self, x: i16) -> u8 {
        let cat = x.max(0) / RAIN_CAT_WIDTH as i16;
        (cat as u8).min(RAIN_CAT_COUNT - 1)
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        self.events.drain_into(out);
    }

    /// Spawn step: drop a new raindrop, or declare the win once done
    pub fn spawn_tick(&mut self) {
        if !self.scene.is_playing() {
            return;
        }
        if self.spawned < self.quota {
            self.spawned += 1;
            let x = self.rng.uniform_int(RAIN_WIDTH as u32) as i16;
            self.drops.push(Raindrop { x, y: -1 });
            debug!("drop {}/{} at column {}", self.spawned, self.quota, x);
        } else if self.drops.is_empty() {
            info!("rain: all {} drops handled", self.quota);
            self.events.sound(SoundCue::Tada, VOL_WIN);
            self.set_scene(SceneState::Won);
        }
    }

    /// Fall step: move every drop down a row, resolving umbrella hits first
    pub fn fall_tick(&mut self) {
        if !self.scene.is_playing() {
            return;
        }
        let mut i = 0;
        while i < self.drops.len() {
            let drop = self.drops[i];
            if drop.y > RAIN_CATCH_ROW {
                if Some(self.cat_at(drop.x)) == self.active_cat {
                    self.drops.remove(i);
                    self.caught += 1;
                    self.events.sound(SoundCue::Drip, VOL_CATCH);
                    continue;
                }
                info!("rain: cat {} got wet", self.cat_at(drop.x));
                self.events.sound(SoundCue::Bloink, VOL_LOSE);
                self.set_scene(SceneState::Lost);
                return;
            }
            self.drops[i].y += 1;
            i += 1;
        }
    }

    /// A/S/D/F raise cat 0-3 and lower the others
    pub fn key_down(&mut self, key: Key) {
        if !self.scene.is_playing() {
            return;
        }
        let cat = match key {
            Key::Char('a') => 0,
            Key::Char('s') => 1,
            Key::Char('d') => 2,
            Key::Char('f') => 3,
            _ => return,
        };
        self.active_cat = Some(cat);
        self.events.sound(SoundCue::Click, VOL_SELECT);
    }

    fn set_scene(&mut self, state: SceneState) {
        if self.scene.set(state) {
            self.events.push(GameEvent::SceneChanged(state));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_columns() {
        let game = RainGame::new(1);
        assert_eq!(game.cat_at(0), 0);
        assert_eq!(game.cat_at(6), 0);
        assert_eq!(game.cat_at(7), 1);
        assert_eq!(game.cat_at(27), 3);
        assert_eq!(game.cat_at(40), 3);
    }

    #[test]
    fn test_spawn_starts_above_field() {
        let mut game = RainGame::new(300);
        game.spawn_tick();
        assert_eq!(game.drops().len(), 1);
        assert_eq!(game.drops()[0].y, -1);
        assert!((0..28).contains(&game.drops()[0].x));
    }

    #[test]
    fn test_drop_caught_by_raised_cat() {
        let mut game = RainGame::with_quota(300, 1);
        game.spawn_tick();
        let cat = game.cat_at(game.drops()[0].x);
        game.key_down(Key::Char(['a', 's', 'd', 'f'][cat as usize]));

        // -1 -> 20 takes 21 falls, the 22nd resolves the catch
        for _ in 0..22 {
            game.fall_tick();
        }
        assert!(game.drops().is_empty());
        assert_eq!(game.caught(), 1);

        game.spawn_tick();
        assert_eq!(game.state(), SceneState::Won);
    }

    #[test]
    fn test_drop_on_lowered_cat_loses() {
        let mut game = RainGame::with_quota(300, 1);
        game.spawn_tick();
        for _ in 0..22 {
            game.fall_tick();
        }
        assert_eq!(game.state(), SceneState::Lost);
        let y = game.drops()[0].y;

        game.fall_tick();
        game.key_down(Key::Char('a'));
        assert_eq!(game.drops()[0].y, y);
        assert_eq!(game.active_cat(), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut game = RainGame::new(1);
        game.key_down(Key::Char('q'));
        game.key_down(Key::Left);
        assert_eq!(game.active_cat(), None);
        assert!(game.events().is_empty());
    }
}
