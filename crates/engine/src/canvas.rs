//! Drawing and sound contracts a front end provides.

use crate::types::{Bead, Sound};

/// Bead grid the painters draw into
pub trait Canvas {
    fn width(&self) -> u8;

    fn height(&self) -> u8;

    /// Set one bead. Idempotent; out-of-range cells are ignored.
    fn set_cell(&mut self, x: u8, y: u8, bead: Bead);

    /// Set every bead to `bead`
    fn fill(&mut self, bead: Bead) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_cell(x, y, bead);
            }
        }
    }
}

/// Fire-and-forget sound output
pub trait SoundSink {
    fn play(&mut self, sound: Sound);
}

/// Collecting sink, handy for headless runs
impl SoundSink for Vec<Sound> {
    fn play(&mut self, sound: Sound) {
        self.push(sound);
    }
}
