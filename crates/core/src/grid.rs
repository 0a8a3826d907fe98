//! Grid module - fixed-size occupancy grid
//!
//! Cells are stored in a flat row-major array (`y * width + x`) for cache
//! locality. Dimensions never change after construction; every in-bounds cell
//! holds exactly one [`CellContent`].

use crate::types::{CellContent, Pos};

/// Rectangular occupancy grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u8,
    height: u8,
    cells: Vec<CellContent>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![CellContent::Empty; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i16 && pos.y < self.height as i16
    }

    /// Cell content, `None` when out of bounds
    pub fn get(&self, pos: Pos) -> Option<CellContent> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Overwrite a cell. Returns false if out of bounds.
    ///
    /// Crate-private: entity cells must go through the world registry.
    pub(crate) fn set(&mut self, pos: Pos, content: CellContent) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = content;
                true
            }
            None => false,
        }
    }

    /// In bounds and blocking (wall or entity)
    pub fn is_blocked(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(|c| c.is_blocking())
    }

    /// In bounds and exactly `Empty`
    pub fn is_empty(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(CellContent::Empty))
    }

    pub fn cells(&self) -> &[CellContent] {
        &self.cells
    }

    /// Iterate `(pos, content)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, CellContent)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Pos::new((i % w) as i16, (i / w) as i16), *c))
    }

    pub(crate) fn fill(&mut self, content: CellContent) {
        self.cells.fill(content);
    }
}
