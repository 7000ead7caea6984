//! Level store - the collection of level grids and the progression through it
//!
//! A [`LevelStore`] runs in one of two modes, fixed at construction:
//!
//! - **Scripted**: grids parsed from a level pack, played in pack order. The index
//!   walks the pack and wraps back to the first level.
//! - **Random**: a single live grid generated from a seed. Advancing replaces it
//!   with the next grid of the seed chain; the same seed chain also feeds the
//!   endless rows.
//!
//! No operation fails. Out-of-range indices yield no grid, difficulty is clamped,
//! and malformed pack text only affects which cells end up empty.

use log::debug;

use crate::generator::{generate_grid, generate_row, FeedState};
use crate::grid::{Grid, Row};
use crate::parser::parse_level_pack;
use crate::snapshot::ProgressSnapshot;
use crate::types::{Difficulty, Layout, VS_ROWS};

/// Where levels come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Scripted,
    Random,
}

#[derive(Debug, Clone)]
enum Source {
    Scripted {
        levels: Vec<Grid>,
    },
    Random {
        grid: Grid,
        seed: i64,
        difficulty: Difficulty,
        layout: Layout,
    },
}

/// Level collection plus progression cursor
#[derive(Debug, Clone)]
pub struct LevelStore {
    source: Source,
    current_index: usize,
    row_offset: u8,
}

impl LevelStore {
    /// Create a store that generates levels from a seed
    ///
    /// Difficulty is clamped to `[EASY, INSANE]`. In arcade layout the offset starts at 1
    /// and the first grid flips it `VS_ROWS` times.
    pub fn random(seed: i64, difficulty: i32, layout: Layout) -> Self {
        let difficulty = Difficulty::new(difficulty);
        let start = FeedState::new(seed, if layout.is_staggered() { 1 } else { 0 });
        let (grid, next) = generate_grid(start, difficulty, layout);

        debug!(
            "Random level store: seed={} difficulty={} layout={}",
            seed,
            difficulty.name(),
            layout.as_str()
        );

        Self {
            source: Source::Random {
                grid,
                seed: next.seed,
                difficulty,
                layout,
            },
            current_index: 0,
            row_offset: next.row_offset,
        }
    }

    /// Create a store from level-pack text, starting at `starting_index`
    ///
    /// A starting index past the last level falls back to 0.
    pub fn scripted(pack: &[u8], starting_index: usize) -> Self {
        let levels = parse_level_pack(pack);
        let current_index = if starting_index < levels.len() {
            starting_index
        } else {
            0
        };

        debug!(
            "Scripted level store: {} levels, starting at {}",
            levels.len(),
            current_index
        );

        Self {
            source: Source::Scripted { levels },
            current_index,
            row_offset: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        match self.source {
            Source::Scripted { .. } => Mode::Scripted,
            Source::Random { .. } => Mode::Random,
        }
    }

    /// Difficulty of generated levels (random mode only)
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.source {
            Source::Random { difficulty, .. } => Some(difficulty),
            Source::Scripted { .. } => None,
        }
    }

    /// Seed the next grid or row will be drawn from (random mode only)
    pub fn seed(&self) -> Option<i64> {
        match self.source {
            Source::Random { seed, .. } => Some(seed),
            Source::Scripted { .. } => None,
        }
    }

    /// Layout used for offset toggling; scripted packs are always classic
    pub fn layout(&self) -> Layout {
        match self.source {
            Source::Random { layout, .. } => layout,
            Source::Scripted { .. } => Layout::Classic,
        }
    }

    /// All levels held; a random store always holds exactly one
    pub fn levels(&self) -> &[Grid] {
        match &self.source {
            Source::Scripted { levels } => levels,
            Source::Random { grid, .. } => std::slice::from_ref(grid),
        }
    }

    /// Number of levels held
    pub fn len(&self) -> usize {
        self.levels().len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels().is_empty()
    }

    /// Current level index (always 0 in random mode)
    pub fn index(&self) -> usize {
        self.current_index
    }

    /// Current row offset, 0 or 1
    pub fn offset(&self) -> u8 {
        self.row_offset
    }

    /// Grid to play now
    ///
    /// Scripted mode returns None when the index is out of range. Random mode resets
    /// the offset to `VS_ROWS % 2` first when the layout is staggered.
    pub fn current_grid(&mut self) -> Option<&Grid> {
        match &self.source {
            Source::Scripted { levels } => levels.get(self.current_index),
            Source::Random { grid, layout, .. } => {
                if layout.is_staggered() {
                    self.row_offset = (VS_ROWS % 2) as u8;
                }
                Some(grid)
            }
        }
    }

    /// Move to the next level
    ///
    /// Scripted mode wraps past the last level. Random mode replaces the live grid
    /// with the next one of the seed chain.
    pub fn advance(&mut self) {
        match &mut self.source {
            Source::Scripted { levels } => {
                self.current_index += 1;
                if self.current_index >= levels.len() {
                    self.current_index = 0;
                }
                debug!("Advanced to level {}", self.current_index);
            }
            Source::Random {
                grid,
                seed,
                difficulty,
                layout,
            } => {
                let state = FeedState::new(*seed, self.row_offset);
                let (next_grid, next) = generate_grid(state, *difficulty, *layout);
                *grid = next_grid;
                *seed = next.seed;
                self.row_offset = next.row_offset;
            }
        }
    }

    /// Go back to the first level (no-op in random mode)
    pub fn reset(&mut self) {
        if let Source::Scripted { .. } = self.source {
            self.current_index = 0;
            debug!("Reset to first level");
        }
    }

    /// Draw the next incoming row for endless play (random mode only)
    pub fn new_row(&mut self) -> Option<Row> {
        match &mut self.source {
            Source::Random {
                seed,
                difficulty,
                layout,
                ..
            } => {
                let state = FeedState::new(*seed, self.row_offset);
                let (row, next) = generate_row(state, *difficulty, *layout);
                *seed = next.seed;
                self.row_offset = next.row_offset;
                Some(row)
            }
            Source::Scripted { .. } => None,
        }
    }

    /// Capture the progression state the host persists
    pub fn save_state(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.current_index, self.row_offset)
    }

    /// Restore progression state saved by [`LevelStore::save_state`]
    ///
    /// The index is taken as is in scripted mode and ignored in random mode, which
    /// only ever holds index 0. The offset is reduced to 0 or 1.
    pub fn restore_state(&mut self, snapshot: &ProgressSnapshot) {
        if let Source::Scripted { .. } = self.source {
            self.current_index = snapshot.current_index;
        }
        self.row_offset = snapshot.row_offset % 2;
        debug!(
            "Restored level progress: index={} offset={}",
            self.current_index, self.row_offset
        );
    }
}
