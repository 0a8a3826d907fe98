//! Painters: game state to beads.
//!
//! Each painter repaints the whole canvas from the game state every frame.
//! Nothing here mutates a game; the only extra input is the [`TrailFade`]
//! animation layer.

use crate::core::borders::{classify, EdgeCell};
use crate::core::direction::base_color;
use crate::core::{GravityGame, LevelCell, RainGame, SliderGame};
use crate::engine::{AnyGame, Canvas, Game};
use crate::fb::Rgb;
use crate::trail::TrailFade;
use crate::types::{
    Bead, Pos, SceneState, Side, RAIN_CAT_COUNT, RAIN_CAT_HEIGHT, RAIN_CAT_WIDTH,
};

const WHITE: u32 = 0xFFFFFF;
const BLACK: u32 = 0x000000;

const WALL_SOLID_ALPHA: u8 = 255;
const WALL_FADED_ALPHA: u8 = 100;

const SLIDER_BACKGROUND: u32 = 0xa2d2ff;
const SLIDER_WALL: u32 = 0xf8f9fa;
const SLIDER_PLAYER: u32 = 0xe63946;
const SLIDER_TRACE: u32 = 0xbde0fe;
const SLIDER_GOAL_GLYPH: char = 'ᐁ';

const RAIN_DROP: u32 = 0x0000FF;
const RAIN_CLOUD: u32 = 0x8d99ae;
const RAIN_CLOUD_ROWS: u8 = 2;
const RAIN_KEYS: [char; 4] = ['A', 'S', 'D', 'F'];

// 7x8 cat sprites, bottom row on the last field row.
// U umbrella, H handle, C fur, E eye, '.' transparent.
const CAT_UP: [&str; 8] = [
    ".UUUUU.",
    "UUUUUUU",
    "...H...",
    "...H...",
    ".C.H.C.",
    ".CCHCC.",
    ".CECEC.",
    ".CCCCC.",
];

const CAT_DOWN: [&str; 8] = [
    ".......",
    ".......",
    ".......",
    ".C...CU",
    ".CCCCCU",
    ".CECECU",
    ".CCCCCH",
    ".C...CH",
];

/// Paint whichever game is running
pub fn paint(game: &AnyGame, trail: &TrailFade, canvas: &mut impl Canvas) {
    match game {
        AnyGame::Gravity(g) => paint_gravity(g, trail, canvas),
        AnyGame::Slider(g) => paint_slider(g, trail, canvas),
        AnyGame::Rain(g) => paint_rain(g, canvas),
    }
}

/// Grid dimensions a game wants
pub fn grid_size(game: &AnyGame) -> (u8, u8) {
    match game {
        AnyGame::Gravity(g) => (g.size(), g.size()),
        AnyGame::Slider(g) => (g.size(), g.size()),
        AnyGame::Rain(g) => (g.width(), g.height()),
    }
}

pub fn paint_gravity(game: &GravityGame, trail: &TrailFade, canvas: &mut impl Canvas) {
    let size = game.size();
    let map = game.direction_map();
    let borders = game.borders();
    let last = size as i16 - 1;

    for y in 0..size {
        for x in 0..size {
            let pos = Pos::new(x as i16, y as i16);

            if let Some(block) = game.world().entity_at(pos) {
                let mut color = map.color(block.dir);
                if trail.is_pulsing(pos) {
                    color = Rgb::from_hex(color).over(Rgb::from_hex(WHITE), 190).to_hex();
                }
                let bead = Bead::solid(color)
                    .with_glyph(map.glyph(block.dir))
                    .with_border(2);
                canvas.set_cell(x, y, bead);
                continue;
            }

            let bead = match classify(size, pos) {
                Some(EdgeCell::Corner(dir)) => {
                    let bead = Bead::solid(base_color(dir)).with_border(5);
                    if borders.corner_enabled(dir) {
                        bead
                    } else {
                        bead.with_glyph('X')
                    }
                }
                Some(EdgeCell::Side(side)) => {
                    // cells next to a corner are drawn black
                    let along = match side {
                        Side::Top | Side::Bottom => pos.x,
                        Side::Left | Side::Right => pos.y,
                    };
                    let color = if along == 1 || along == last - 1 {
                        BLACK
                    } else {
                        map.wall_color(side)
                    };
                    let alpha = if borders.side_active(side) {
                        WALL_SOLID_ALPHA
                    } else {
                        WALL_FADED_ALPHA
                    };
                    Bead::solid(color).with_border(10).with_alpha(alpha)
                }
                _ => Bead::solid(WHITE),
            };
            canvas.set_cell(x, y, bead);
        }
    }
}

pub fn paint_slider(game: &SliderGame, trail: &TrailFade, canvas: &mut impl Canvas) {
    let size = game.size();
    let background = Rgb::from_hex(SLIDER_BACKGROUND);
    let trace = Rgb::from_hex(SLIDER_TRACE);

    for y in 0..size {
        for x in 0..size {
            let pos = Pos::new(x as i16, y as i16);
            let bead = match game.shown(pos) {
                LevelCell::Wall => Bead::solid(SLIDER_WALL),
                LevelCell::Goal => Bead::solid(SLIDER_BACKGROUND).with_glyph(SLIDER_GOAL_GLYPH),
                LevelCell::Glyph(c) => Bead::solid(SLIDER_BACKGROUND).with_glyph(c),
                LevelCell::Empty | LevelCell::PlayerStart => match trail.trail_alpha(pos) {
                    Some(alpha) => Bead::solid(trace.over(background, alpha).to_hex()),
                    None => Bead::solid(SLIDER_BACKGROUND),
                },
            };
            canvas.set_cell(x, y, bead);
        }
    }

    if let Some(player) = game.player() {
        if player.pos.x >= 0 && player.pos.y >= 0 {
            let border = if trail.is_pulsing(player.pos) { 5 } else { 2 };
            canvas.set_cell(
                player.pos.x as u8,
                player.pos.y as u8,
                Bead::solid(SLIDER_PLAYER).with_border(border),
            );
        }
    }
}

pub fn paint_rain(game: &RainGame, canvas: &mut impl Canvas) {
    let width = game.width();
    let height = game.height();
    canvas.fill(Bead::solid(WHITE));

    for y in 0..RAIN_CLOUD_ROWS.min(height) {
        for x in 0..width {
            canvas.set_cell(x, y, Bead::solid(RAIN_CLOUD));
        }
    }

    for drop in game.drops() {
        if drop.x < 0 || drop.y < 0 || drop.x >= width as i16 || drop.y >= height as i16 {
            continue;
        }
        canvas.set_cell(drop.x as u8, drop.y as u8, Bead::solid(RAIN_DROP));
    }

    let top = height.saturating_sub(RAIN_CAT_HEIGHT);
    for cat in 0..RAIN_CAT_COUNT {
        let sprite = if game.active_cat() == Some(cat) {
            &CAT_UP
        } else {
            &CAT_DOWN
        };
        let left = cat * RAIN_CAT_WIDTH;
        for (dy, row) in sprite.iter().enumerate() {
            for (dx, c) in row.chars().enumerate() {
                if let Some(color) = sprite_color(c, cat) {
                    canvas.set_cell(left + dx as u8, top + dy as u8, Bead::solid(color));
                }
            }
        }
        // key label sits one row below the sprite top
        let label_x = left + RAIN_CAT_WIDTH / 2;
        let label = match sprite[1].as_bytes().get(3) {
            Some(b'U') => Bead::solid(umbrella_color(cat)),
            _ => Bead::solid(WHITE),
        };
        canvas.set_cell(label_x, top + 1, label.with_glyph(RAIN_KEYS[cat as usize]));
    }
}

fn sprite_color(c: char, cat: u8) -> Option<u32> {
    match c {
        'U' => Some(umbrella_color(cat)),
        'H' => Some(0x3d405b),
        'C' => Some(0xf4a261),
        'E' => Some(BLACK),
        _ => None,
    }
}

fn umbrella_color(cat: u8) -> u32 {
    [0xFF595E, 0xFFCA3A, 0x8AC926, 0x1982C4][cat as usize % 4]
}

/// Text drawn over the grid for the current scene
pub fn overlay_text(game: &AnyGame) -> Option<&'static str> {
    match (game, game.scene_state()) {
        (AnyGame::Rain(_), SceneState::Won) => Some("ALL DRY!"),
        (AnyGame::Rain(_), SceneState::Lost) => Some("SOAKED!"),
        // the slider paints its own win screen
        _ => None,
    }
}

/// One-line status under the grid
pub fn status_line(game: &AnyGame) -> String {
    match game {
        AnyGame::Gravity(g) => format!(
            "blocks {}  turns {}  click: spawn/rotate  key: turn gravity  q: quit",
            g.world().len(),
            g.direction_map().offset()
        ),
        AnyGame::Slider(g) => format!(
            "level {}/{}  {}  arrows/wasd: slide  q: quit",
            (g.level_index() + 1).min(g.level_count()),
            g.level_count(),
            g.state().as_str()
        ),
        AnyGame::Rain(g) => format!(
            "caught {}  drops {}/{}  a s d f: umbrellas  q: quit",
            g.caught(),
            g.spawned(),
            g.quota()
        ),
    }
}
