//! Shared level types - playfield geometry, cells, difficulty and layout
//!
//! This module defines the fundamental types used throughout the level store.
//! All types are plain data with no external dependencies, so they can be used
//! by the core, by the host session tool, and by rendering/collision consumers.
//!
//! # Playfield Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NUM_COLS` | 8 | Bubble columns per row |
//! | `NUM_ROWS` | 13 | Nominal playfield height |
//! | `LEVEL_ROWS` | 12 | Rows stored in level data (`NUM_ROWS - 1`) |
//! | `VS_ROWS` | 5 | Rows filled by the random generator |
//! | `LANES` | 15 | Horizontal lanes used by collision code |
//! | `MAX_ROWS` | 15 | Deepest row a compressor can push the field to |
//!
//! Rows are staggered: even rows start at column 0, odd rows at column 1.
//!
//! # Difficulty
//!
//! Difficulty is the number of bubble colors a generated grid may use.
//! It is always clamped to `[EASY, INSANE]`:
//!
//! ```
//! use bubble_levels_types::{Difficulty, EASY, INSANE};
//!
//! assert_eq!(Difficulty::new(2).colors(), EASY);
//! assert_eq!(Difficulty::new(20).colors(), INSANE);
//! assert_eq!(Difficulty::new(6).name(), "medium");
//! ```

/// Bubble columns per row (8)
pub const NUM_COLS: usize = 8;

/// Nominal playfield height (13)
pub const NUM_ROWS: usize = 13;

/// Rows stored in a level grid (one fewer than the playfield)
pub const LEVEL_ROWS: usize = NUM_ROWS - 1;

/// Rows filled when generating a random grid (5)
pub const VS_ROWS: usize = 5;

/// Horizontal collision lanes (15)
pub const LANES: usize = 15;

/// Maximum playfield depth in rows (15)
pub const MAX_ROWS: usize = 15;

/// Four colors
pub const EASY: u8 = 4;

/// Five colors
pub const NORMAL: u8 = 5;

/// Six colors
pub const MODERATE: u8 = 6;

/// Seven colors
pub const HARD: u8 = 7;

/// Eight colors, the whole palette
pub const INSANE: u8 = 8;

/// Display names indexed by color count.
///
/// Counts below `EASY` never reach a generator; they belong to hand-authored packs.
pub const DIFFICULTY_NAMES: [&str; 9] = [
    "frozen bubble",
    "frozen bubble",
    "frozen bubble",
    "frozen bubble",
    "easy",
    "normal",
    "medium",
    "hard",
    "insane",
];

/// A cell of a level grid
///
/// - `EMPTY` (`-1`): no bubble
/// - `0..=7`: bubble color index
pub type Cell = i8;

/// Empty cell sentinel
pub const EMPTY: Cell = -1;

/// Highest color index the level-pack format can express
pub const MAX_COLOR: Cell = 7;

/// Number of bubble colors drawn by the random generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Clamp any requested color count to `[EASY, INSANE]`
    pub fn new(colors: i32) -> Self {
        Self(colors.clamp(EASY as i32, INSANE as i32) as u8)
    }

    /// Color count; generated cells are in `0..colors()`
    pub fn colors(&self) -> u8 {
        self.0
    }

    /// Lowercase display name ("easy" .. "insane")
    pub fn name(&self) -> &'static str {
        DIFFICULTY_NAMES[self.0 as usize]
    }

    /// Parse a difficulty name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bubble_levels_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("Hard"), Some(Difficulty::new(7)));
    /// assert_eq!(Difficulty::from_name("frozen bubble"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        DIFFICULTY_NAMES
            .iter()
            .enumerate()
            .skip(EASY as usize)
            .find(|(_, name)| **name == s)
            .map(|(colors, _)| Self(colors as u8))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(NORMAL)
    }
}

/// Row layout selected by the game mode
///
/// - **Classic**: rows keep a fixed stagger, the row offset never moves
/// - **Arcade**: rows scroll in from the top, so the offset flips with every generated row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    Classic,
    Arcade,
}

impl Layout {
    /// Whether generated rows toggle the row offset
    pub fn is_staggered(&self) -> bool {
        matches!(self, Layout::Arcade)
    }

    /// Parse layout from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Layout::Classic),
            "arcade" => Some(Layout::Arcade),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Classic => "classic",
            Layout::Arcade => "arcade",
        }
    }
}

/// First column written in a staggered row: 0 for even rows, 1 for odd rows
#[inline]
pub fn row_start_column(row: usize) -> usize {
    row % 2
}
