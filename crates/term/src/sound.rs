//! Sound output for terminals.
//!
//! Terminals cannot play samples. Every cue is logged, and loud cues can ring
//! the terminal bell when enabled. The bell is not written here; the caller
//! checks [`TerminalSound::take_bell`] once per frame so at most one bell is
//! rung per frame.

use log::debug;

use crate::engine::SoundSink;
use crate::types::{Sound, SoundCue};

/// Cues at or above this volume ring the bell
pub const BELL_VOLUME: f32 = 0.4;

#[derive(Debug, Clone, Default)]
pub struct TerminalSound {
    bell_enabled: bool,
    bell_pending: bool,
    played: u64,
    last: Option<Sound>,
}

impl TerminalSound {
    pub fn new(bell_enabled: bool) -> Self {
        Self {
            bell_enabled,
            ..Self::default()
        }
    }

    /// Cues played so far
    pub fn played(&self) -> u64 {
        self.played
    }

    pub fn last(&self) -> Option<Sound> {
        self.last
    }

    /// Whether a bell is due; clears the request
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}

impl SoundSink for TerminalSound {
    fn play(&mut self, sound: Sound) {
        self.played += 1;
        self.last = Some(sound);
        match sound.cue {
            SoundCue::Xylophone(note) => debug!("sound xylophone {} vol {:.2}", note, sound.volume),
            cue => debug!("sound {} vol {:.2}", cue.name(), sound.volume),
        }
        if self.bell_enabled && sound.volume >= BELL_VOLUME {
            self.bell_pending = true;
        }
    }
}
