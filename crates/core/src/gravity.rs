//! Gravity blocks - a 12x12 toy with rotating gravity
//!
//! Blocks fall one cell per step in their own direction, rotated by the global
//! [`DirectionMap`]. Corners switch which directions new blocks may get;
//! sides can be opened so blocks fly off the board.
//!
//! # Example
//!
//! ```
//! use tui_beads_core::GravityGame;
//! use tui_beads_core::types::{Direction, Pos};
//!
//! let mut game = GravityGame::new(7);
//! let id = game.place_block(Pos::new(3, 3), Direction::Down).unwrap();
//! game.step();
//! assert_eq!(game.world().entity(id).unwrap().pos, Pos::new(3, 4));
//! ```

use log::debug;

use crate::borders::{classify, Borders, EdgeCell};
use crate::direction::DirectionMap;
use crate::events::EventQueue;
use crate::rng::SimpleRng;
use crate::spawn::pick_direction;
use crate::types::{
    CellContent, Direction, EntityId, GameEvent, Key, Pos, SoundCue, GRAVITY_BOARD_SIZE,
};
use crate::world::{MoveOutcome, Rejected, World};

const VOL_SWOOSH: f32 = 0.035;
const VOL_CLICK: f32 = 0.1;
const VOL_RIP: f32 = 0.05;
const VOL_SHAKER: f32 = 0.08;
const VOL_CORNER: f32 = 0.1;
const VOL_SIDE: f32 = 0.15;
const VOL_ROTATE: f32 = 0.05;

/// Complete gravity toy state
#[derive(Debug, Clone)]
pub struct GravityGame {
    world: World,
    borders: Borders,
    map: DirectionMap,
    rng: SimpleRng,
    events: EventQueue,
    scratch: Vec<EntityId>,
    steps: u64,
}

impl GravityGame {
    /// Fresh board: all borders up, every direction enabled, no blocks
    pub fn new(seed: u32) -> Self {
        let size = GRAVITY_BOARD_SIZE;
        let mut world = World::new(size, size);
        let borders = Borders::new(size);
        borders.install(&mut world);
        Self {
            world,
            borders,
            map: DirectionMap::default(),
            rng: SimpleRng::new(seed),
            events: EventQueue::new(),
            scratch: Vec::with_capacity(64),
            steps: 0,
        }
    }

    pub fn size(&self) -> u8 {
        self.borders.size()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    pub fn direction_map(&self) -> &DirectionMap {
        &self.map
    }

    /// Steps taken since start
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        self.events.drain_into(out);
    }

    /// Place an unlocked block with a given direction
    pub fn place_block(&mut self, pos: Pos, dir: Direction) -> Result<EntityId, Rejected> {
        self.world.place(pos, dir, false)
    }

    /// Place a block the step driver never moves
    pub fn place_locked(&mut self, pos: Pos, dir: Direction) -> Result<EntityId, Rejected> {
        self.world.place(pos, dir, true)
    }

    /// Advance every unlocked block by one cell
    pub fn step(&mut self) {
        self.steps += 1;
        let mut ids = std::mem::take(&mut self.scratch);
        self.world.ids_into(&mut ids);

        for &id in &ids {
            let Some(block) = self.world.entity(id).copied() else {
                continue;
            };
            if block.locked {
                continue;
            }

            let v = self.map.vector(block.dir);
            let to = block.pos.offset(v);

            if !self.world.grid().in_bounds(to) {
                self.world.remove(id);
                self.events.sound(SoundCue::Swoosh, VOL_SWOOSH);
                self.events.push(GameEvent::Exited {
                    id,
                    from: block.pos,
                });
                debug!("block {:?} left the board at ({}, {})", id, block.pos.x, block.pos.y);
                continue;
            }

            // The cell after the destination decides whether this step lands.
            let mut landed = false;
            if self.world.grid().is_blocked(to.offset(v)) {
                if block.moving {
                    self.events.sound(SoundCue::Click, VOL_CLICK);
                    self.world.set_moving(id, false);
                    landed = true;
                }
            } else {
                self.world.set_moving(id, true);
            }

            if let MoveOutcome::Moved { to, .. } = self.world.move_to(id, to) {
                if landed {
                    self.events.push(GameEvent::CameToRest { id, at: to });
                }
            }
        }

        self.scratch = ids;
    }

    /// Pointer pressed on a cell
    pub fn touch(&mut self, pos: Pos) {
        let Some(cell) = classify(self.size(), pos) else {
            return;
        };
        match cell {
            EdgeCell::Corner(dir) => {
                let on = self.borders.toggle_corner(dir);
                debug!("direction {} {}", dir.code(), if on { "enabled" } else { "disabled" });
                self.events.sound(SoundCue::BlockHigh, VOL_CORNER);
            }
            EdgeCell::Side(side) => {
                let (on, crushed) = self.borders.toggle_side(&mut self.world, side);
                debug!("side {:?} {}", side, if on { "closed" } else { "opened" });
                for entity in crushed {
                    self.events.push(GameEvent::Crushed {
                        id: entity.id,
                        at: entity.pos,
                    });
                }
                self.events.sound(SoundCue::BlockLow, VOL_SIDE);
            }
            EdgeCell::Interior => match self.world.grid().get(pos) {
                Some(CellContent::Empty) => {
                    self.spawn_at(pos);
                }
                Some(CellContent::Entity(id)) => self.rotate_block(id),
                _ => {}
            },
        }
    }

    /// Pointer moved onto a cell; dragging paints new blocks
    pub fn enter(&mut self, pos: Pos, touching: bool) {
        if !touching {
            return;
        }
        if classify(self.size(), pos) == Some(EdgeCell::Interior) && self.world.grid().is_empty(pos) {
            self.spawn_at(pos);
        }
    }

    /// Any key rotates gravity a quarter turn
    pub fn key_down(&mut self, _key: Key) {
        self.map.rotate();
        self.events.sound(SoundCue::PowerUp, VOL_ROTATE);
        debug!("direction offset now {}", self.map.offset());
    }

    /// Spawn a block with a random enabled direction.
    ///
    /// `None` when no direction is enabled or the cell is taken.
    pub fn spawn_at(&mut self, pos: Pos) -> Option<EntityId> {
        let Some(dir) = pick_direction(&mut self.rng, self.borders.enabled_directions()) else {
            debug!("spawn at ({}, {}) skipped: no enabled direction", pos.x, pos.y);
            return None;
        };
        match self.world.place(pos, dir, false) {
            Ok(id) => {
                self.events.sound(SoundCue::Rip, VOL_RIP);
                Some(id)
            }
            Err(_) => None,
        }
    }

    fn rotate_block(&mut self, id: EntityId) {
        let Some(block) = self.world.entity(id).copied() else {
            return;
        };
        if block.locked {
            return;
        }
        self.world.set_dir(id, block.dir.cw());
        self.events.sound(SoundCue::Shaker, VOL_SHAKER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Side, Sound};

    fn sounds(game: &mut GravityGame) -> Vec<SoundCue> {
        let mut out = Vec::new();
        game.drain_events(&mut out);
        out.into_iter()
            .filter_map(|e| match e {
                GameEvent::Sound(Sound { cue, .. }) => Some(cue),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_block_falls_and_lands() {
        let mut game = GravityGame::new(1);
        let id = game.place_block(Pos::new(3, 3), Direction::Down).unwrap();

        game.step();
        assert_eq!(game.world().entity(id).unwrap().pos, Pos::new(3, 4));
        assert!(game.world().entity(id).unwrap().moving);

        for _ in 0..6 {
            game.step();
        }
        let block = *game.world().entity(id).unwrap();
        assert_eq!(block.pos, Pos::new(3, 10));
        assert!(!block.moving);

        let mut events = Vec::new();
        game.drain_events(&mut events);
        assert!(events.contains(&GameEvent::CameToRest {
            id,
            at: Pos::new(3, 10)
        }));

        game.step();
        assert_eq!(game.world().entity(id).unwrap().pos, Pos::new(3, 10));
        assert!(game.world().is_consistent());
    }

    #[test]
    fn test_landing_clicks_once() {
        let mut game = GravityGame::new(1);
        game.place_block(Pos::new(3, 8), Direction::Down).unwrap();
        for _ in 0..5 {
            game.step();
        }
        let clicks = sounds(&mut game)
            .into_iter()
            .filter(|c| *c == SoundCue::Click)
            .count();
        assert_eq!(clicks, 1);
    }

    #[test]
    fn test_open_side_lets_block_exit() {
        let mut game = GravityGame::new(1);
        game.touch(Pos::new(5, 11));
        assert!(!game.borders().side_active(Side::Bottom));

        let id = game.place_block(Pos::new(5, 9), Direction::Down).unwrap();
        for _ in 0..3 {
            game.step();
        }
        assert!(game.world().entity(id).is_none());
        let cues = sounds(&mut game);
        assert!(cues.contains(&SoundCue::BlockLow));
        assert!(cues.contains(&SoundCue::Swoosh));
        assert!(game.world().is_consistent());
    }

    #[test]
    fn test_touch_empty_spawns_and_block_rotates() {
        let mut game = GravityGame::new(3);
        game.touch(Pos::new(4, 4));
        let id = match game.world().grid().get(Pos::new(4, 4)) {
            Some(CellContent::Entity(id)) => id,
            other => panic!("expected a block, got {:?}", other),
        };
        let before = game.world().entity(id).unwrap().dir;

        game.touch(Pos::new(4, 4));
        assert_eq!(game.world().entity(id).unwrap().dir, before.cw());
        assert_eq!(sounds(&mut game), vec![SoundCue::Rip, SoundCue::Shaker]);
    }

    #[test]
    fn test_locked_block_ignores_step_and_touch() {
        let mut game = GravityGame::new(3);
        let id = game.place_locked(Pos::new(6, 6), Direction::Up).unwrap();
        game.step();
        game.touch(Pos::new(6, 6));
        let block = game.world().entity(id).unwrap();
        assert_eq!(block.pos, Pos::new(6, 6));
        assert_eq!(block.dir, Direction::Up);
    }

    #[test]
    fn test_all_corners_off_spawns_nothing() {
        let mut game = GravityGame::new(3);
        game.touch(Pos::new(0, 0));
        game.touch(Pos::new(0, 11));
        game.touch(Pos::new(11, 0));
        game.touch(Pos::new(11, 11));
        assert_eq!(game.borders().enabled_directions(), [false; 4]);

        game.touch(Pos::new(5, 5));
        game.enter(Pos::new(6, 5), true);
        assert!(game.world().is_empty());
    }

    #[test]
    fn test_drag_spawns_only_while_touching() {
        let mut game = GravityGame::new(9);
        game.enter(Pos::new(2, 2), false);
        assert!(game.world().is_empty());
        game.enter(Pos::new(2, 2), true);
        game.enter(Pos::new(0, 5), true);
        assert_eq!(game.world().len(), 1);
    }

    #[test]
    fn test_key_rotates_gravity() {
        let mut game = GravityGame::new(1);
        let id = game.place_block(Pos::new(5, 5), Direction::Down).unwrap();
        game.key_down(Key::Char('x'));
        game.step();
        // Down rotated a quarter turn clockwise heads left
        assert_eq!(game.world().entity(id).unwrap().pos, Pos::new(4, 5));
        assert_eq!(game.direction_map().offset(), 1);
    }
}
