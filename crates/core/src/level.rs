//! Level templates for the slider game
//!
//! A level is an immutable square template written as text rows:
//!
//! | Char | Cell |
//! |------|------|
//! | `#` | wall |
//! | `.` or space | empty |
//! | `P` | player start (exactly one per playable level) |
//! | `G` | goal marker, never blocks |
//! | anything else | decorative glyph |

use crate::types::{Pos, SLIDER_BOARD_SIZE};

/// One template cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelCell {
    #[default]
    Empty,
    Wall,
    PlayerStart,
    Goal,
    Glyph(char),
}

impl LevelCell {
    pub fn from_char(c: char) -> Self {
        match c {
            '#' => LevelCell::Wall,
            '.' | ' ' => LevelCell::Empty,
            'P' => LevelCell::PlayerStart,
            'G' => LevelCell::Goal,
            other => LevelCell::Glyph(other),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            LevelCell::Wall => '#',
            LevelCell::Empty => '.',
            LevelCell::PlayerStart => 'P',
            LevelCell::Goal => 'G',
            LevelCell::Glyph(c) => c,
        }
    }
}

/// Why a level template was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    Empty { name: String },
    NotSquare { name: String, row: usize, expected: usize, found: usize },
    WrongSize { name: String, expected: u8, found: usize },
    MissingPlayer { name: String },
    MultiplePlayers { name: String },
    NoLevels,
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Empty { name } => write!(f, "level '{}' has no rows", name),
            LevelError::NotSquare {
                name,
                row,
                expected,
                found,
            } => write!(
                f,
                "level '{}' row {} has {} cells, expected {}",
                name, row, found, expected
            ),
            LevelError::WrongSize {
                name,
                expected,
                found,
            } => write!(
                f,
                "level '{}' is {}x{}, board is {}x{}",
                name, found, found, expected, expected
            ),
            LevelError::MissingPlayer { name } => {
                write!(f, "level '{}' has no player start", name)
            }
            LevelError::MultiplePlayers { name } => {
                write!(f, "level '{}' has more than one player start", name)
            }
            LevelError::NoLevels => f.write_str("level pack is empty"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Square level template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: String,
    size: u8,
    cells: Vec<LevelCell>,
    start: Option<Pos>,
}

impl Level {
    /// Parse a playable level (exactly one `P`)
    pub fn parse<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<Self, LevelError> {
        let level = Self::parse_screen(name, rows)?;
        if level.start.is_none() {
            return Err(LevelError::MissingPlayer {
                name: name.to_string(),
            });
        }
        Ok(level)
    }

    /// Parse a screen that may have no player (title and win screens)
    fn parse_screen<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<Self, LevelError> {
        let size = rows.len();
        if size == 0 {
            return Err(LevelError::Empty {
                name: name.to_string(),
            });
        }
        if size > u8::MAX as usize {
            return Err(LevelError::WrongSize {
                name: name.to_string(),
                expected: SLIDER_BOARD_SIZE,
                found: size,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        let mut start = None;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != size {
                return Err(LevelError::NotSquare {
                    name: name.to_string(),
                    row: y,
                    expected: size,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                let cell = LevelCell::from_char(c);
                if cell == LevelCell::PlayerStart {
                    if start.is_some() {
                        return Err(LevelError::MultiplePlayers {
                            name: name.to_string(),
                        });
                    }
                    start = Some(Pos::new(x as i16, y as i16));
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            name: name.to_string(),
            size: size as u8,
            cells,
            start,
        })
    }

    /// All-empty screen
    pub fn blank(size: u8) -> Self {
        Self {
            name: "blank".to_string(),
            size,
            cells: vec![LevelCell::Empty; size as usize * size as usize],
            start: None,
        }
    }

    /// Win screen: "YOU WIN!" on row 5, centered on a 12x12 board
    pub fn win_screen(size: u8) -> Self {
        let mut level = Self::blank(size);
        level.name = "win".to_string();
        let text = "YOU WIN!";
        let y = 5.min(size.saturating_sub(1)) as usize;
        let x0 = (size as usize).saturating_sub(text.len()) / 2;
        for (i, c) in text.chars().enumerate() {
            let x = x0 + i;
            if x >= size as usize {
                break;
            }
            if c != ' ' {
                level.cells[y * size as usize + x] = LevelCell::Glyph(c);
            }
        }
        level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Player start, `None` for screens
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    pub fn cell(&self, pos: Pos) -> LevelCell {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.size as i16 || pos.y >= self.size as i16 {
            return LevelCell::Empty;
        }
        self.cells[pos.y as usize * self.size as usize + pos.x as usize]
    }

    /// One template row
    pub fn row(&self, y: u8) -> &[LevelCell] {
        let w = self.size as usize;
        let start = (y as usize * w).min(self.cells.len());
        let end = (start + w).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Check the template fits a board of `board_size`
    pub fn check_size(&self, board_size: u8) -> Result<(), LevelError> {
        if self.size != board_size {
            return Err(LevelError::WrongSize {
                name: self.name.clone(),
                expected: board_size,
                found: self.size as usize,
            });
        }
        Ok(())
    }
}

const LEVEL_ONE: [&str; 12] = [
    "############",
    "#......#####",
    "#.........##",
    "#..........#",
    "#..........#",
    "#..........#",
    "#....P.....#",
    "#..........#",
    "#####...####",
    "######.#####",
    "######G#####",
    "######G#####",
];

const LEVEL_TWO: [&str; 12] = [
    "############",
    "#..#####...#",
    "#..#..##.#.#",
    "#......#.#.#",
    "#..........#",
    "#.#......###",
    "#....P....##",
    "#.#.#....###",
    "#.#......###",
    "#.###...####",
    "######G#####",
    "######G#####",
];

/// The two levels shipped with the game
pub fn builtin_levels() -> Vec<Level> {
    [("level 1", &LEVEL_ONE), ("level 2", &LEVEL_TWO)]
        .into_iter()
        .filter_map(|(name, rows)| Level::parse(name, &rows[..]).ok())
        .collect()
}
