//! Fading traces behind moving entities.
//!
//! Subscribes to the core's movement events: a `Trail` event starts a fade
//! at the vacated cell, and `CameToRest` cancels any fade under the entity
//! that just stopped there and marks a short landing pulse. Loading a new
//! level wipes everything.

use crate::types::{GameEvent, Pos, SceneState};

/// Host ticks a trace takes to fade out
pub const TRAIL_FADE_TICKS: u16 = 50;

/// Host ticks a landing pulse stays visible
pub const LANDING_PULSE_TICKS: u16 = 12;

#[derive(Debug, Clone, Default)]
pub struct TrailFade {
    trails: Vec<(Pos, u16)>,
    pulses: Vec<(Pos, u16)>,
}

impl TrailFade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Trail { at } => {
                self.trails.retain(|(p, _)| *p != at);
                self.trails.push((at, TRAIL_FADE_TICKS));
            }
            GameEvent::CameToRest { at, .. } => {
                self.trails.retain(|(p, _)| *p != at);
                self.pulses.retain(|(p, _)| *p != at);
                self.pulses.push((at, LANDING_PULSE_TICKS));
            }
            GameEvent::SceneChanged(SceneState::Loading) => self.clear(),
            _ => {}
        }
    }

    /// Advance one host tick
    pub fn tick(&mut self) {
        for list in [&mut self.trails, &mut self.pulses] {
            list.retain_mut(|(_, left)| {
                *left -= 1;
                *left > 0
            });
        }
    }

    /// Remaining trace strength at `pos`, 255 fresh and falling towards 0
    pub fn trail_alpha(&self, pos: Pos) -> Option<u8> {
        self.trails
            .iter()
            .find(|(p, _)| *p == pos)
            .map(|(_, left)| (*left as u32 * 255 / TRAIL_FADE_TICKS as u32) as u8)
    }

    pub fn is_pulsing(&self, pos: Pos) -> bool {
        self.pulses.iter().any(|(p, _)| *p == pos)
    }

    pub fn is_idle(&self) -> bool {
        self.trails.is_empty() && self.pulses.is_empty()
    }

    pub fn clear(&mut self) {
        self.trails.clear();
        self.pulses.clear();
    }
}
