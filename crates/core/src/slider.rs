//! Sliders - ice-puzzle levels on a 12x12 board
//!
//! The player slides in one direction until something blocks it and must
//! leave the board to finish the level. Levels are revealed row by row,
//! cleared row by row between levels, and a win screen closes the run.
//!
//! The game keeps two layers: the live [`World`] (walls, glyphs, the player
//! entity) and the `shown` layer, which is what has been painted so far and
//! drives the row animations.

use log::{debug, info};

use crate::events::EventQueue;
use crate::level::{builtin_levels, Level, LevelCell, LevelError};
use crate::scene::Scene;
use crate::types::{
    CellContent, Direction, EntityId, GameEvent, Key, Pos, SceneState, SoundCue,
    SLIDER_BOARD_SIZE,
};
use crate::world::{Entity, MoveOutcome, World};

const VOL_SWOOSH: f32 = 0.04;
const VOL_CLICK: f32 = 0.1;
const VOL_NOTE: f32 = 0.2;

/// Complete slider state
#[derive(Debug, Clone)]
pub struct SliderGame {
    levels: Vec<Level>,
    current: usize,
    world: World,
    shown: Vec<LevelCell>,
    blank: Level,
    win: Level,
    scene: Scene,
    player: Option<EntityId>,
    events: EventQueue,
}

impl SliderGame {
    /// Game over the built-in levels
    pub fn new() -> Self {
        Self::build(builtin_levels())
    }

    /// Game over a custom level list; every level must fit the board
    pub fn with_levels(levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::NoLevels);
        }
        for level in &levels {
            level.check_size(SLIDER_BOARD_SIZE)?;
            if level.start().is_none() {
                return Err(LevelError::MissingPlayer {
                    name: level.name().to_string(),
                });
            }
        }
        Ok(Self::build(levels))
    }

    fn build(levels: Vec<Level>) -> Self {
        let size = SLIDER_BOARD_SIZE;
        let mut game = Self {
            levels,
            current: 0,
            world: World::new(size, size),
            shown: vec![LevelCell::Empty; size as usize * size as usize],
            blank: Level::blank(size),
            win: Level::win_screen(size),
            scene: Scene::new(SceneState::Loading, size),
            player: None,
            events: EventQueue::new(),
        };
        game.load_world();
        info!("sliders: {} levels", game.levels.len());
        game
    }

    pub fn size(&self) -> u8 {
        SLIDER_BOARD_SIZE
    }

    pub fn state(&self) -> SceneState {
        self.scene.state()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Index of the level being loaded or played
    pub fn level_index(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.current)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.world.entity(id))
    }

    /// What has been painted at `pos`
    pub fn shown(&self, pos: Pos) -> LevelCell {
        let size = self.size() as i16;
        if pos.x < 0 || pos.y < 0 || pos.x >= size || pos.y >= size {
            return LevelCell::Empty;
        }
        self.shown[pos.y as usize * size as usize + pos.x as usize]
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        self.events.drain_into(out);
    }

    /// One timer step: animate a row or slide the player
    pub fn step(&mut self) {
        let size = self.size();
        match self.scene.state() {
            SceneState::Loading => {
                let note = (size + 1).saturating_sub(self.scene.row());
                self.events.sound(SoundCue::Xylophone(note), VOL_NOTE);
                match self.scene.next_row() {
                    Some(row) => self.paint_row(row, Screen::Level),
                    None => self.start_level(),
                }
            }
            SceneState::Playing => {
                if self.player().is_some_and(|p| p.moving) {
                    self.move_player();
                }
            }
            SceneState::Transitioning => {
                let note = (2 * size + 1).saturating_sub(self.scene.row());
                self.events.sound(SoundCue::Xylophone(note), VOL_NOTE);
                match self.scene.next_row() {
                    Some(row) => self.paint_row(row, Screen::Blank),
                    None => {
                        self.load_world();
                        self.set_scene(SceneState::Loading);
                    }
                }
            }
            SceneState::Won => {
                if let Some(row) = self.scene.next_row() {
                    let note = (2 * size + 1).saturating_sub(row);
                    self.events.sound(SoundCue::Xylophone(note), VOL_NOTE);
                    self.paint_row(row, Screen::Win);
                }
            }
            SceneState::Lost => {}
        }
    }

    /// Start a slide if the player is at rest
    pub fn key_down(&mut self, key: Key) {
        if !self.scene.is_playing() {
            return;
        }
        let Some(player) = self.player().copied() else {
            return;
        };
        if player.moving {
            return;
        }
        let Some(dir) = slide_direction(key) else {
            return;
        };
        self.world.set_dir(player.id, dir);
        self.world.set_moving(player.id, true);
        self.events.sound(SoundCue::Swoosh, VOL_SWOOSH);
    }

    fn move_player(&mut self) {
        let Some(player) = self.player().copied() else {
            return;
        };
        let v = player.dir.vector();
        let to = player.pos.offset(v);

        if !self.world.grid().in_bounds(to) {
            self.world.remove(player.id);
            self.player = None;
            self.events.push(GameEvent::Trail { at: player.pos });
            self.events.push(GameEvent::Exited {
                id: player.id,
                from: player.pos,
            });
            self.finish_level();
            return;
        }

        let mut landed = false;
        if self.world.grid().is_blocked(to.offset(v)) {
            self.events.sound(SoundCue::Click, VOL_CLICK);
            self.world.set_moving(player.id, false);
            landed = true;
        } else {
            self.world.set_moving(player.id, true);
        }

        if let MoveOutcome::Moved { from, to } = self.world.move_to(player.id, to) {
            self.events.push(GameEvent::Trail { at: from });
            if landed {
                self.events.push(GameEvent::CameToRest {
                    id: player.id,
                    at: to,
                });
            }
        }
    }

    fn finish_level(&mut self) {
        self.current += 1;
        if self.current >= self.levels.len() {
            info!("sliders: all levels done");
            self.set_scene(SceneState::Won);
        } else {
            info!("sliders: level {} done", self.current);
            self.set_scene(SceneState::Transitioning);
        }
    }

    fn start_level(&mut self) {
        let start = self.current_level().and_then(|l| l.start());
        if let Some(pos) = start {
            match self.world.place(pos, Direction::Down, false) {
                Ok(id) => self.player = Some(id),
                Err(err) => debug!("player start ({}, {}) refused: {}", pos.x, pos.y, err),
            }
        }
        self.set_scene(SceneState::Playing);
    }

    /// Copy the current level into the live grid
    fn load_world(&mut self) {
        self.world.clear();
        self.player = None;
        let Some(level) = self.levels.get(self.current) else {
            return;
        };
        for y in 0..level.size() {
            for (x, cell) in level.row(y).iter().enumerate() {
                let pos = Pos::new(x as i16, y as i16);
                let content = match cell {
                    LevelCell::Wall => CellContent::Wall,
                    LevelCell::Glyph(c) => CellContent::Glyph(*c),
                    LevelCell::Empty | LevelCell::PlayerStart | LevelCell::Goal => continue,
                };
                self.world.set_static(pos, content);
            }
        }
        debug!("loaded '{}'", level.name());
    }

    fn paint_row(&mut self, row: u8, screen: Screen) {
        let w = self.size() as usize;
        let source = match screen {
            Screen::Level => match self.levels.get(self.current) {
                Some(level) => level,
                None => &self.blank,
            },
            Screen::Blank => &self.blank,
            Screen::Win => &self.win,
        };
        let start = row as usize * w;
        if let Some(dst) = self.shown.get_mut(start..start + w) {
            dst.copy_from_slice(source.row(row));
        }
    }

    fn set_scene(&mut self, state: SceneState) {
        if self.scene.set(state) {
            self.events.push(GameEvent::SceneChanged(state));
        }
    }
}

impl Default for SliderGame {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum Screen {
    Level,
    Blank,
    Win,
}

/// Arrow keys and WASD
fn slide_direction(key: Key) -> Option<Direction> {
    match key {
        Key::Up | Key::Char('w') => Some(Direction::Up),
        Key::Right | Key::Char('d') => Some(Direction::Right),
        Key::Down | Key::Char('s') => Some(Direction::Down),
        Key::Left | Key::Char('a') => Some(Direction::Left),
        _ => None,
    }
}
