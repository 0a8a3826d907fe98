//! Mouse tracking: terminal mouse events to bead touches.
//!
//! The tracker is given a hit-test function mapping terminal coordinates to a
//! bead cell. A press over a bead becomes [`HostInput::Touch`]; moving onto a
//! different bead becomes [`HostInput::Enter`], with `touching` set while the
//! left button is held.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::HostInput;

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    pressed: bool,
    last_cell: Option<(u8, u8)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the left button is currently held
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Translate one mouse event.
    ///
    /// `hit` maps a terminal `(column, row)` to a bead cell, or `None` when
    /// the pointer is outside the grid.
    pub fn handle<F>(&mut self, event: MouseEvent, hit: F) -> Option<HostInput>
    where
        F: Fn(u16, u16) -> Option<(u8, u8)>,
    {
        let cell = hit(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = true;
                self.last_cell = cell;
                cell.map(|(x, y)| HostInput::Touch { x, y })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pressed = false;
                None
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if matches!(event.kind, MouseEventKind::Drag(_)) {
                    self.pressed = true;
                }
                if cell == self.last_cell {
                    return None;
                }
                self.last_cell = cell;
                cell.map(|(x, y)| HostInput::Enter {
                    x,
                    y,
                    touching: self.pressed,
                })
            }
            _ => None,
        }
    }
}
