//! Borders module - toggleable sides and corner direction switches
//!
//! A bordered board has four corner cells and four sides. Corners are always
//! walls; each corner doubles as the switch enabling one spawn direction
//! (corner 1 at the top-left enables direction 1, and so on). Sides can be
//! switched on and off; switching re-walks the side and rewrites occupancy.

use crate::types::{Direction, Pos, Side};
use crate::world::{Entity, World};

/// Role of a cell on a bordered board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCell {
    Corner(Direction),
    Side(Side),
    Interior,
}

/// Classify `pos` on a `size`x`size` board, `None` when out of bounds
pub fn classify(size: u8, pos: Pos) -> Option<EdgeCell> {
    let last = size as i16 - 1;
    if pos.x < 0 || pos.y < 0 || pos.x > last || pos.y > last {
        return None;
    }
    let cell = match (pos.x, pos.y) {
        (0, 0) => EdgeCell::Corner(Direction::Up),
        (0, y) if y == last => EdgeCell::Corner(Direction::Right),
        (x, 0) if x == last => EdgeCell::Corner(Direction::Down),
        (x, y) if x == last && y == last => EdgeCell::Corner(Direction::Left),
        (0, _) => EdgeCell::Side(Side::Left),
        (x, _) if x == last => EdgeCell::Side(Side::Right),
        (_, 0) => EdgeCell::Side(Side::Top),
        (_, y) if y == last => EdgeCell::Side(Side::Bottom),
        _ => EdgeCell::Interior,
    };
    Some(cell)
}

/// Position of the corner that switches `dir`
pub fn corner_pos(size: u8, dir: Direction) -> Pos {
    let last = size as i16 - 1;
    match dir {
        Direction::Up => Pos::new(0, 0),
        Direction::Right => Pos::new(0, last),
        Direction::Down => Pos::new(last, 0),
        Direction::Left => Pos::new(last, last),
    }
}

/// Non-corner cells of one side
pub fn side_cells(size: u8, side: Side) -> impl Iterator<Item = Pos> {
    let last = size as i16 - 1;
    (1..last).map(move |i| match side {
        Side::Top => Pos::new(i, 0),
        Side::Bottom => Pos::new(i, last),
        Side::Left => Pos::new(0, i),
        Side::Right => Pos::new(last, i),
    })
}

/// Activation state of sides and corner switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borders {
    size: u8,
    sides: [bool; 4],
    corners: [bool; 4],
}

impl Borders {
    /// Everything active
    pub fn new(size: u8) -> Self {
        Self {
            size,
            sides: [true; 4],
            corners: [true; 4],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn side_active(&self, side: Side) -> bool {
        self.sides[side.index()]
    }

    pub fn corner_enabled(&self, dir: Direction) -> bool {
        self.corners[dir.index()]
    }

    /// Enabled spawn directions, indexed like [`Direction::ALL`]
    pub fn enabled_directions(&self) -> [bool; 4] {
        self.corners
    }

    /// Write corners and every side into the world
    pub fn install(&self, world: &mut World) -> Vec<Entity> {
        for dir in Direction::ALL {
            world.set_wall(corner_pos(self.size, dir), true);
        }
        let mut evicted = Vec::new();
        for side in Side::ALL {
            evicted.extend(self.sync_side(world, side));
        }
        evicted
    }

    /// Switch a side on or off and rewrite its cells.
    ///
    /// Returns entities crushed by a wall coming back.
    pub fn set_side(&mut self, world: &mut World, side: Side, on: bool) -> Vec<Entity> {
        self.sides[side.index()] = on;
        self.sync_side(world, side)
    }

    /// Flip a side; returns the new state and any crushed entities
    pub fn toggle_side(&mut self, world: &mut World, side: Side) -> (bool, Vec<Entity>) {
        let on = !self.side_active(side);
        let evicted = self.set_side(world, side, on);
        (on, evicted)
    }

    /// Flip a corner switch; returns the new state
    pub fn toggle_corner(&mut self, dir: Direction) -> bool {
        let on = !self.corners[dir.index()];
        self.corners[dir.index()] = on;
        on
    }

    fn sync_side(&self, world: &mut World, side: Side) -> Vec<Entity> {
        let on = self.side_active(side);
        side_cells(self.size, side)
            .filter_map(|pos| world.set_wall(pos, on))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellContent;

    #[test]
    fn test_classify_corners_and_sides() {
        assert_eq!(classify(12, Pos::new(0, 0)), Some(EdgeCell::Corner(Direction::Up)));
        assert_eq!(classify(12, Pos::new(0, 11)), Some(EdgeCell::Corner(Direction::Right)));
        assert_eq!(classify(12, Pos::new(11, 0)), Some(EdgeCell::Corner(Direction::Down)));
        assert_eq!(classify(12, Pos::new(11, 11)), Some(EdgeCell::Corner(Direction::Left)));
        assert_eq!(classify(12, Pos::new(0, 5)), Some(EdgeCell::Side(Side::Left)));
        assert_eq!(classify(12, Pos::new(11, 5)), Some(EdgeCell::Side(Side::Right)));
        assert_eq!(classify(12, Pos::new(5, 0)), Some(EdgeCell::Side(Side::Top)));
        assert_eq!(classify(12, Pos::new(5, 11)), Some(EdgeCell::Side(Side::Bottom)));
        assert_eq!(classify(12, Pos::new(5, 5)), Some(EdgeCell::Interior));
        assert_eq!(classify(12, Pos::new(12, 5)), None);
    }

    #[test]
    fn test_corner_positions_classify_back() {
        for dir in Direction::ALL {
            assert_eq!(
                classify(12, corner_pos(12, dir)),
                Some(EdgeCell::Corner(dir))
            );
        }
    }

    #[test]
    fn test_side_cells_skip_corners() {
        let cells: Vec<Pos> = side_cells(12, Side::Left).collect();
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[0], Pos::new(0, 1));
        assert_eq!(cells[9], Pos::new(0, 10));
    }

    #[test]
    fn test_install_walls_everything() {
        let mut world = World::new(12, 12);
        let borders = Borders::new(12);
        borders.install(&mut world);

        for (pos, content) in world.grid().iter() {
            let expected = match classify(12, pos).unwrap() {
                EdgeCell::Interior => CellContent::Empty,
                _ => CellContent::Wall,
            };
            assert_eq!(content, expected, "at {:?}", pos);
        }
    }

    #[test]
    fn test_toggle_side_off_keeps_corners() {
        let mut world = World::new(12, 12);
        let mut borders = Borders::new(12);
        borders.install(&mut world);

        let (on, _) = borders.toggle_side(&mut world, Side::Top);
        assert!(!on);
        assert!(world.grid().is_empty(Pos::new(5, 0)));
        assert_eq!(world.grid().get(Pos::new(0, 0)), Some(CellContent::Wall));
        assert_eq!(world.grid().get(Pos::new(11, 0)), Some(CellContent::Wall));
    }

    #[test]
    fn test_wall_returning_crushes_entity() {
        let mut world = World::new(12, 12);
        let mut borders = Borders::new(12);
        borders.install(&mut world);
        borders.set_side(&mut world, Side::Left, false);

        let id = world.place(Pos::new(0, 4), Direction::Left, false).unwrap();
        let crushed = borders.set_side(&mut world, Side::Left, true);
        assert_eq!(crushed.len(), 1);
        assert_eq!(crushed[0].id, id);
        assert_eq!(world.grid().get(Pos::new(0, 4)), Some(CellContent::Wall));
        assert!(world.is_consistent());
    }

    #[test]
    fn test_corner_toggle_only_gates_directions() {
        let mut borders = Borders::new(12);
        assert!(!borders.toggle_corner(Direction::Right));
        assert_eq!(borders.enabled_directions(), [true, false, true, true]);
        assert!(borders.toggle_corner(Direction::Right));
    }
}
