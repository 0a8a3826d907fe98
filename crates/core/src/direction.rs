//! Direction map - rotating gravity
//!
//! Entities keep the direction they were given; a global offset rotates the
//! whole world at once. Every direction-derived quantity (movement vector,
//! arrow glyph, palette color, wall color) is computed from
//! [`DirectionMap::effective`], so movement and drawing cannot disagree.

use crate::types::{Direction, Side, Vector};

/// Color used for "no direction" (disabled/neutral beads)
pub const NEUTRAL_COLOR: u32 = 0x264653;

const PALETTE: [u32; 4] = [0xFF595E, 0xFFCA3A, 0x8AC926, 0x1982C4];

const GLYPHS: [char; 4] = ['˄', '˃', '˅', '˂'];

/// Global rotation applied to all direction lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionMap {
    offset: u8,
}

impl DirectionMap {
    pub fn new(offset: u8) -> Self {
        Self { offset: offset % 4 }
    }

    /// Quarter turns applied so far (mod 4)
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Advance the rotation by one quarter turn clockwise
    pub fn rotate(&mut self) {
        self.offset = (self.offset + 1) % 4;
    }

    /// The direction `dir` currently behaves as
    pub fn effective(&self, dir: Direction) -> Direction {
        Direction::ALL[(dir.index() + self.offset as usize) % 4]
    }

    /// Stored direction that currently behaves as `heading`
    pub fn source_of(&self, heading: Direction) -> Direction {
        Direction::ALL[(heading.index() + 4 - self.offset as usize) % 4]
    }

    pub fn vector(&self, dir: Direction) -> Vector {
        self.effective(dir).vector()
    }

    pub fn glyph(&self, dir: Direction) -> char {
        GLYPHS[self.effective(dir).index()]
    }

    pub fn color(&self, dir: Direction) -> u32 {
        PALETTE[self.effective(dir).index()]
    }

    /// Color of a border: the color of whatever is currently heading into it
    pub fn wall_color(&self, side: Side) -> u32 {
        self.color(self.source_of(side.heading()))
    }
}

/// Unrotated palette entry, used for the fixed corner switches
pub fn base_color(dir: Direction) -> u32 {
    PALETTE[dir.index()]
}
