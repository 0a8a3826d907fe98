//! World module - occupancy grid plus entity registry
//!
//! The grid cell under every entity holds `CellContent::Entity(id)`. That cell
//! is a cache of the entity list, so every mutation here updates both sides
//! before returning; callers never observe them disagreeing.

use log::debug;

use crate::grid::Grid;
use crate::types::{CellContent, Direction, EntityId, Pos};

/// A block or player token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Pos,
    pub dir: Direction,
    /// Locked entities are skipped by the tick driver
    pub locked: bool,
    /// Falling (blocks) / sliding (player)
    pub moving: bool,
}

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    OutOfBounds,
    Occupied,
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejected::OutOfBounds => f.write_str("target cell is out of bounds"),
            Rejected::Occupied => f.write_str("target cell is occupied"),
        }
    }
}

impl std::error::Error for Rejected {}

/// Result of [`World::move_to`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: Pos, to: Pos },
    /// Destination not free; the entity stopped moving
    Blocked,
    /// Destination outside the grid; nothing changed, the caller decides
    Exited { from: Pos },
    /// Unknown id
    Missing,
}

/// Occupancy grid and the entities standing on it
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    entities: Vec<Entity>,
    next_id: u32,
}

impl World {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            grid: Grid::new(width, height),
            entities: Vec::new(),
            next_id: 1,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Entities in creation order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Entity standing at `pos`, looked up through the grid
    pub fn entity_at(&self, pos: Pos) -> Option<&Entity> {
        match self.grid.get(pos)? {
            CellContent::Entity(id) => self.entity(id),
            _ => None,
        }
    }

    /// Copy the current ids (creation order) into `out`
    pub fn ids_into(&self, out: &mut Vec<EntityId>) {
        out.clear();
        out.extend(self.entities.iter().map(|e| e.id));
    }

    /// Create an entity on an empty cell
    pub fn place(&mut self, pos: Pos, dir: Direction, locked: bool) -> Result<EntityId, Rejected> {
        match self.grid.get(pos) {
            None => {
                debug!("place at ({}, {}) rejected: out of bounds", pos.x, pos.y);
                Err(Rejected::OutOfBounds)
            }
            Some(CellContent::Empty) => {
                let id = EntityId(self.next_id);
                self.next_id = self.next_id.wrapping_add(1);
                self.grid.set(pos, CellContent::Entity(id));
                self.entities.push(Entity {
                    id,
                    pos,
                    dir,
                    locked,
                    moving: false,
                });
                Ok(id)
            }
            Some(_) => {
                debug!("place at ({}, {}) rejected: occupied", pos.x, pos.y);
                Err(Rejected::Occupied)
            }
        }
    }

    /// Delete an entity and clear its cell. `None` if it was already gone.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let Some(idx) = self.entities.iter().position(|e| e.id == id) else {
            debug!("remove {:?}: no such entity", id);
            return None;
        };
        let entity = self.entities.remove(idx);
        if self.grid.get(entity.pos) == Some(CellContent::Entity(id)) {
            self.grid.set(entity.pos, CellContent::Empty);
        }
        Some(entity)
    }

    /// Move an entity one cell (or anywhere) if the destination is free
    pub fn move_to(&mut self, id: EntityId, to: Pos) -> MoveOutcome {
        let in_bounds = self.grid.in_bounds(to);
        let free = !self.grid.is_blocked(to);

        let Some(entity) = self.entity_mut(id) else {
            debug!("move {:?}: no such entity", id);
            return MoveOutcome::Missing;
        };
        let from = entity.pos;

        if !in_bounds {
            return MoveOutcome::Exited { from };
        }
        if !free {
            entity.moving = false;
            return MoveOutcome::Blocked;
        }

        entity.pos = to;
        self.grid.set(from, CellContent::Empty);
        self.grid.set(to, CellContent::Entity(id));
        MoveOutcome::Moved { from, to }
    }

    pub fn set_dir(&mut self, id: EntityId, dir: Direction) -> bool {
        match self.entity_mut(id) {
            Some(e) => {
                e.dir = dir;
                true
            }
            None => false,
        }
    }

    pub fn set_moving(&mut self, id: EntityId, moving: bool) -> bool {
        match self.entity_mut(id) {
            Some(e) => {
                e.moving = moving;
                true
            }
            None => false,
        }
    }

    /// Turn a cell into a wall (or back into empty space).
    ///
    /// An entity standing on a cell that becomes a wall is removed and
    /// returned. Deactivating only clears actual walls.
    pub fn set_wall(&mut self, pos: Pos, active: bool) -> Option<Entity> {
        if active {
            let evicted = match self.grid.get(pos)? {
                CellContent::Entity(id) => self.remove(id),
                _ => None,
            };
            self.grid.set(pos, CellContent::Wall);
            evicted
        } else {
            if self.grid.get(pos) == Some(CellContent::Wall) {
                self.grid.set(pos, CellContent::Empty);
            }
            None
        }
    }

    /// Set a non-entity cell (walls, glyphs, empty). Refuses entity cells.
    pub fn set_static(&mut self, pos: Pos, content: CellContent) -> bool {
        if matches!(content, CellContent::Entity(_))
            || matches!(self.grid.get(pos), Some(CellContent::Entity(_)))
        {
            return false;
        }
        self.grid.set(pos, content)
    }

    /// Drop every entity and reset all cells to empty
    pub fn clear(&mut self) {
        self.entities.clear();
        self.grid.fill(CellContent::Empty);
    }

    /// Check that grid and entity list agree.
    ///
    /// Every entity sits on a cell marked with its id, and every entity cell
    /// points at an entity standing there.
    pub fn is_consistent(&self) -> bool {
        let entities_ok = self
            .entities
            .iter()
            .all(|e| self.grid.get(e.pos) == Some(CellContent::Entity(e.id)));
        let cells_ok = self.grid.iter().all(|(pos, c)| match c {
            CellContent::Entity(id) => self.entity(id).is_some_and(|e| e.pos == pos),
            _ => true,
        });
        entities_ok && cells_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_marks_cell() {
        let mut world = World::new(5, 5);
        let id = world.place(Pos::new(2, 2), Direction::Down, false).unwrap();

        assert_eq!(world.grid().get(Pos::new(2, 2)), Some(CellContent::Entity(id)));
        assert_eq!(world.entity(id).unwrap().pos, Pos::new(2, 2));
        assert!(world.is_consistent());
    }

    #[test]
    fn test_place_rejections() {
        let mut world = World::new(5, 5);
        world.place(Pos::new(1, 1), Direction::Up, false).unwrap();

        assert_eq!(
            world.place(Pos::new(1, 1), Direction::Up, false),
            Err(Rejected::Occupied)
        );
        assert_eq!(
            world.place(Pos::new(5, 0), Direction::Up, false),
            Err(Rejected::OutOfBounds)
        );
        world.set_wall(Pos::new(0, 0), true);
        assert_eq!(
            world.place(Pos::new(0, 0), Direction::Up, false),
            Err(Rejected::Occupied)
        );
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut world = World::new(5, 5);
        let id = world.place(Pos::new(1, 1), Direction::Up, false).unwrap();

        assert!(world.remove(id).is_some());
        assert!(world.remove(id).is_none());
        assert!(world.grid().is_empty(Pos::new(1, 1)));
    }

    #[test]
    fn test_move_to_free_cell() {
        let mut world = World::new(5, 5);
        let id = world.place(Pos::new(1, 1), Direction::Right, false).unwrap();

        let outcome = world.move_to(id, Pos::new(2, 1));
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Pos::new(1, 1),
                to: Pos::new(2, 1)
            }
        );
        assert!(world.grid().is_empty(Pos::new(1, 1)));
        assert!(world.is_consistent());
    }

    #[test]
    fn test_move_to_blocked_clears_moving_only() {
        let mut world = World::new(5, 5);
        let a = world.place(Pos::new(1, 1), Direction::Right, false).unwrap();
        world.place(Pos::new(2, 1), Direction::Right, false).unwrap();
        world.set_moving(a, true);

        let cells_before = world.grid().clone();
        assert_eq!(world.move_to(a, Pos::new(2, 1)), MoveOutcome::Blocked);
        assert_eq!(world.grid(), &cells_before);
        assert_eq!(world.entity(a).unwrap().pos, Pos::new(1, 1));
        assert!(!world.entity(a).unwrap().moving);
    }

    #[test]
    fn test_move_out_of_bounds_reports_exit() {
        let mut world = World::new(5, 5);
        let id = world.place(Pos::new(0, 3), Direction::Left, false).unwrap();

        assert_eq!(
            world.move_to(id, Pos::new(-1, 3)),
            MoveOutcome::Exited {
                from: Pos::new(0, 3)
            }
        );
        assert_eq!(world.entity(id).unwrap().pos, Pos::new(0, 3));
    }

    #[test]
    fn test_move_missing() {
        let mut world = World::new(5, 5);
        assert_eq!(
            world.move_to(EntityId(42), Pos::new(1, 1)),
            MoveOutcome::Missing
        );
    }

    #[test]
    fn test_set_wall_evicts_entity() {
        let mut world = World::new(5, 5);
        let id = world.place(Pos::new(0, 2), Direction::Left, false).unwrap();

        let evicted = world.set_wall(Pos::new(0, 2), true);
        assert_eq!(evicted.map(|e| e.id), Some(id));
        assert_eq!(world.grid().get(Pos::new(0, 2)), Some(CellContent::Wall));
        assert!(world.is_empty());
        assert!(world.is_consistent());
    }

    #[test]
    fn test_set_static_refuses_entity_cells() {
        let mut world = World::new(3, 3);
        world.place(Pos::new(1, 1), Direction::Up, false).unwrap();

        assert!(!world.set_static(Pos::new(1, 1), CellContent::Wall));
        assert!(!world.set_static(Pos::new(0, 0), CellContent::Entity(EntityId(9))));
        assert!(world.set_static(Pos::new(0, 0), CellContent::Glyph('!')));
        assert!(world.is_consistent());
    }
}
