//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by every crate in the
//! workspace. All types are plain data with no external dependencies, so they
//! can be used by the simulation core, the host dispatcher and the terminal
//! front end alike.
//!
//! # Boards
//!
//! | Game | Size | Notes |
//! |------|------|-------|
//! | Gravity blocks | 12x12 | corners are permanent walls, sides toggle |
//! | Sliders | 12x12 | level templates are copied into the live grid |
//! | Umbrella cats | 28x28 | four cats, 7 columns each, along the bottom |
//!
//! # Host Timing
//!
//! The host runs at 60 ticks per second. Game timers are expressed in host
//! ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HOST_TICK_MS` | 16 | Host tick interval (~60 Hz) |
//! | `GRAVITY_STEP_TICKS` | 7 | One block step |
//! | `SLIDER_STEP_TICKS` | 7 | One slide step / one revealed row |
//! | `RAIN_FALL_TICKS` | 5 | One raindrop row |
//! | `RAIN_SPAWN_TICKS` | 50 | One raindrop spawn |
//!
//! # Examples
//!
//! ```
//! use tui_beads_types::{Direction, GameKind, Pos};
//!
//! let dir = Direction::from_code(3).unwrap();
//! assert_eq!(dir, Direction::Down);
//! assert_eq!(dir.cw(), Direction::Left);
//!
//! assert_eq!(Pos::new(3, 3).offset(dir.vector()), Pos::new(3, 4));
//! assert_eq!(GameKind::from_str("sliders"), Some(GameKind::Slider));
//! ```

/// Host tick interval in milliseconds (16ms ≈ 60 ticks per second)
pub const HOST_TICK_MS: u32 = 16;

/// Gravity board edge length in cells
pub const GRAVITY_BOARD_SIZE: u8 = 12;

/// Host ticks between two gravity steps
pub const GRAVITY_STEP_TICKS: u32 = 7;

/// Slider board edge length in cells
pub const SLIDER_BOARD_SIZE: u8 = 12;

/// Host ticks between two slider steps (also the row reveal rate)
pub const SLIDER_STEP_TICKS: u32 = 7;

/// Rain field width in cells
pub const RAIN_WIDTH: u8 = 28;

/// Rain field height in cells
pub const RAIN_HEIGHT: u8 = 28;

/// Host ticks between two raindrop fall steps
pub const RAIN_FALL_TICKS: u32 = 5;

/// Host ticks between two raindrop spawns
pub const RAIN_SPAWN_TICKS: u32 = 50;

/// Number of drops that must be dealt with to win
pub const RAIN_DROPS_TO_WIN: u32 = 10;

/// Number of umbrella cats
pub const RAIN_CAT_COUNT: u8 = 4;

/// Width of one cat in columns
pub const RAIN_CAT_WIDTH: u8 = 7;

/// Height of the cat sprites, counted from the bottom row
pub const RAIN_CAT_HEIGHT: u8 = 8;

/// Drops strictly below this row are at umbrella height
pub const RAIN_CATCH_ROW: i16 = RAIN_HEIGHT as i16 - 9;

/// Fixed seed used by the rain game when none is configured
pub const RAIN_DEFAULT_SEED: u32 = 300;


/// A cell coordinate.
///
/// Signed so that "one step past the edge" is representable; the grid decides
/// what is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i16,
    pub y: i16,
}

impl Pos {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Position one step along `v`
    pub fn offset(self, v: Vector) -> Self {
        Self {
            x: self.x + v.dx as i16,
            y: self.y + v.dy as i16,
        }
    }
}

/// A unit movement vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: i8,
    pub dy: i8,
}

impl Vector {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}

/// The four cardinal directions
///
/// Numeric codes follow the bead games: 1 = up, 2 = right, 3 = down, 4 = left.
/// Clockwise rotation is "code + 1, wrapping 4 back to 1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in code order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Parse a 1-based direction code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Direction::Up),
            2 => Some(Direction::Right),
            3 => Some(Direction::Down),
            4 => Some(Direction::Left),
            _ => None,
        }
    }

    /// 1-based direction code
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based index into [`Direction::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Rotate clockwise (90°)
    pub fn cw(&self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Raw movement vector (y grows downward)
    ///
    /// This ignores any rotation offset; gameplay code goes through the core's
    /// direction map instead.
    pub fn vector(&self) -> Vector {
        match self {
            Direction::Up => Vector::new(0, -1),
            Direction::Right => Vector::new(1, 0),
            Direction::Down => Vector::new(0, 1),
            Direction::Left => Vector::new(-1, 0),
        }
    }
}

/// The four sides of a bordered board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn index(&self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    /// Heading of an entity that runs into this side
    pub fn heading(&self) -> Direction {
        match self {
            Side::Top => Direction::Up,
            Side::Right => Direction::Right,
            Side::Bottom => Direction::Down,
            Side::Left => Direction::Left,
        }
    }
}

/// Stable identifier of an entity in a world registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Content of one occupancy cell
///
/// Every in-bounds cell holds exactly one of these at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellContent {
    #[default]
    Empty,
    Wall,
    Entity(EntityId),
    /// Decorative character (level text); never blocks movement
    Glyph(char),
}

impl CellContent {
    /// Whether an entity may not enter this cell
    pub fn is_blocking(&self) -> bool {
        matches!(self, CellContent::Wall | CellContent::Entity(_))
    }
}

/// Which of the three games to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Gravity,
    Slider,
    Rain,
}

impl GameKind {
    /// Parse game kind from string (case-insensitive, a few aliases)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gravity" | "blocks" => Some(GameKind::Gravity),
            "slider" | "sliders" => Some(GameKind::Slider),
            "rain" | "cats" => Some(GameKind::Rain),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Gravity => "gravity",
            GameKind::Slider => "slider",
            GameKind::Rain => "rain",
        }
    }

    /// Title shown by the host
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Gravity => "Gravity Blocks",
            GameKind::Slider => "Sliders",
            GameKind::Rain => "Umbrella Cats",
        }
    }
}

/// Keys the games understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// A printable character, already lowercased
    Char(char),
    Other,
}

/// Host-dispatched input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostInput {
    /// Pointer pressed over a cell
    Touch { x: u8, y: u8 },
    /// Pointer entered a cell; `touching` is true while the button is held
    Enter { x: u8, y: u8, touching: bool },
    KeyDown(Key),
}

/// Named sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Swoosh,
    Click,
    Rip,
    Shaker,
    BlockHigh,
    BlockLow,
    PowerUp,
    Drip,
    Bloink,
    Tada,
    /// Xylophone note index (higher is higher pitch)
    Xylophone(u8),
}

impl SoundCue {
    /// Sound library identifier
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Swoosh => "fx_swoosh",
            SoundCue::Click => "fx_click",
            SoundCue::Rip => "fx_rip",
            SoundCue::Shaker => "perc_shaker",
            SoundCue::BlockHigh => "perc_block_high",
            SoundCue::BlockLow => "perc_block_low",
            SoundCue::PowerUp => "fx_powerup3",
            SoundCue::Drip => "fx_drip2",
            SoundCue::Bloink => "fx_bloink",
            SoundCue::Tada => "fx_tada",
            SoundCue::Xylophone(_) => "xylophone",
        }
    }
}

/// A sound request: cue plus volume in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sound {
    pub cue: SoundCue,
    pub volume: f32,
}

/// Scene state of the slider and rain games
///
/// The gravity toy has no scenes and is always `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneState {
    /// Level rows are being revealed, one per tick
    Loading,
    Playing,
    /// The screen is being cleared row by row before the next level
    Transitioning,
    Won,
    Lost,
}

impl SceneState {
    /// Whether input and simulation are live
    pub fn accepts_input(&self) -> bool {
        matches!(self, SceneState::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SceneState::Won | SceneState::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneState::Loading => "loading",
            SceneState::Playing => "playing",
            SceneState::Transitioning => "transitioning",
            SceneState::Won => "won",
            SceneState::Lost => "lost",
        }
    }
}

/// Core-side event emitted while handling a tick or an input.
///
/// Drained by the host after every callback and fanned out to the sound sink
/// and the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Sound(Sound),
    /// An entity stopped moving at `at`
    CameToRest { id: EntityId, at: Pos },
    /// An entity left the grid through `from`
    Exited { id: EntityId, from: Pos },
    /// An entity vacated `at` while moving (slider trace)
    Trail { at: Pos },
    /// An entity standing on a cell that became a wall was removed
    Crushed { id: EntityId, at: Pos },
    SceneChanged(SceneState),
}

/// Host drawing request for one bead
///
/// `color` is `0xRRGGBB`; `alpha` 255 is opaque; `border` is the bead border
/// width in host units (0 = none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bead {
    pub color: u32,
    pub glyph: Option<char>,
    pub border: u8,
    pub alpha: u8,
}

impl Bead {
    pub const fn solid(color: u32) -> Self {
        Self {
            color,
            glyph: None,
            border: 0,
            alpha: 255,
        }
    }

    pub const fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub const fn with_border(mut self, border: u8) -> Self {
        self.border = border;
        self
    }

    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for Bead {
    fn default() -> Self {
        Self::solid(0xFFFFFF)
    }
}
