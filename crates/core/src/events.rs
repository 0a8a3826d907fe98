//! Event queue shared by the games.
//!
//! Games push events while handling a callback; the host drains them right
//! after, so the queue never grows across callbacks.

use crate::types::{GameEvent, Sound, SoundCue};

#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn sound(&mut self, cue: SoundCue, volume: f32) {
        self.events.push(GameEvent::Sound(Sound { cue, volume }));
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Pending events, oldest first
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Move all pending events into `out`
    pub fn drain_into(&mut self, out: &mut Vec<GameEvent>) {
        out.append(&mut self.events);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
