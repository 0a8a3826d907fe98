//! BeadView: maps a bead grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each bead takes `cell_w` x `cell_h` terminal cells (2x1 by default, which
//! roughly squares up typical terminal glyphs). The grid sits in a frame
//! with the game title in the top border and a status line underneath.

use crate::engine::Canvas;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Bead;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Bead storage the painters draw into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadGrid {
    width: u8,
    height: u8,
    beads: Vec<Bead>,
}

impl BeadGrid {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            beads: vec![Bead::default(); width as usize * height as usize],
        }
    }

    /// Change dimensions, resetting every bead
    pub fn resize(&mut self, width: u8, height: u8) {
        self.width = width;
        self.height = height;
        self.beads.clear();
        self.beads
            .resize(width as usize * height as usize, Bead::default());
    }

    pub fn get(&self, x: u8, y: u8) -> Option<Bead> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.beads[y as usize * self.width as usize + x as usize])
    }
}

impl Canvas for BeadGrid {
    fn width(&self) -> u8 {
        self.width
    }

    fn height(&self) -> u8 {
        self.height
    }

    fn set_cell(&mut self, x: u8, y: u8, bead: Bead) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.beads[y as usize * self.width as usize + x as usize] = bead;
    }
}

/// Where the grid landed in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// Text drawn around and over the grid
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub title: &'a str,
    pub status: &'a str,
    pub overlay: Option<&'a str>,
}

pub struct BeadView {
    /// Bead width in terminal columns.
    cell_w: u16,
    /// Bead height in terminal rows.
    cell_h: u16,
    /// What translucent beads are blended over
    backdrop: Rgb,
}

impl Default for BeadView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            backdrop: Rgb::new(255, 255, 255),
        }
    }
}

impl BeadView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_backdrop(mut self, backdrop: u32) -> Self {
        self.backdrop = Rgb::from_hex(backdrop);
        self
    }

    /// Center a `width` x `height` grid (plus frame) in the viewport
    pub fn layout(&self, width: u8, height: u8, viewport: Viewport) -> Layout {
        let frame_w = width as u16 * self.cell_w + 2;
        let frame_h = height as u16 * self.cell_h + 2;
        Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h + 1) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Bead under terminal cell `(col, row)`, if any
    pub fn cell_at(&self, grid: &BeadGrid, viewport: Viewport, col: u16, row: u16) -> Option<(u8, u8)> {
        let layout = self.layout(grid.width, grid.height, viewport);
        let x0 = layout.start_x + 1;
        let y0 = layout.start_y + 1;
        if col < x0 || row < y0 {
            return None;
        }
        let x = (col - x0) / self.cell_w;
        let y = (row - y0) / self.cell_h;
        if x >= grid.width as u16 || y >= grid.height as u16 {
            return None;
        }
        Some((x as u8, y as u8))
    }

    /// Render the bead grid into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, grid: &BeadGrid, hud: Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(grid.width, grid.height, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, layout, border);

        if !hud.title.is_empty() {
            let title = CellStyle { bold: true, ..border };
            let text_w = hud.title.chars().count() as u16 + 2;
            let x = layout.start_x + layout.frame_w.saturating_sub(text_w) / 2;
            fb.put_char(x, layout.start_y, ' ', title);
            fb.put_str(x + 1, layout.start_y, hud.title, title);
            fb.put_char(x + text_w - 1, layout.start_y, ' ', title);
        }

        for y in 0..grid.height {
            for x in 0..grid.width {
                if let Some(bead) = grid.get(x, y) {
                    self.draw_bead(fb, layout, x, y, bead);
                }
            }
        }

        if !hud.status.is_empty() {
            let dim = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str(layout.start_x, layout.start_y + layout.frame_h, hud.status, dim);
        }

        if let Some(text) = hud.overlay {
            self.draw_overlay_text(fb, layout, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &BeadGrid, hud: Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, hud, viewport, &mut fb);
        fb
    }

    /// Terminal style of one bead after blending
    pub fn bead_style(&self, bead: Bead) -> CellStyle {
        let bg = Rgb::from_hex(bead.color).over(self.backdrop, bead.alpha);
        let fg = if bead.border > 0 && bead.glyph.is_none() {
            Rgb::new(0, 0, 0).over(bg, bead.alpha)
        } else if bg.luma() > 140 {
            Rgb::new(0, 0, 0)
        } else {
            Rgb::new(255, 255, 255)
        };
        CellStyle {
            fg,
            bg,
            bold: bead.glyph.is_some(),
            dim: false,
        }
    }

    fn draw_bead(&self, fb: &mut FrameBuffer, layout: Layout, x: u8, y: u8, bead: Bead) {
        let style = self.bead_style(bead);
        let px = layout.start_x + 1 + x as u16 * self.cell_w;
        let py = layout.start_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        match bead.glyph {
            Some(glyph) => fb.put_char(px + (self.cell_w - 1) / 2, py + (self.cell_h - 1) / 2, glyph, style),
            None if bead.border > 0 && self.cell_w >= 2 => {
                let (open, close) = if bead.border >= 5 { ('▐', '▌') } else { ('[', ']') };
                fb.put_char(px, py, open, style);
                fb.put_char(px + self.cell_w - 1, py, close, style);
            }
            None => {}
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let Layout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16 + 2;
        let x = layout.start_x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_char(x, mid_y, ' ', style);
        fb.put_str(x + 1, mid_y, text, style);
        fb.put_char(x + text_w - 1, mid_y, ' ', style);
    }
}
