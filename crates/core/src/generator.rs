//! Generator module - seeded random grids and endless rows
//!
//! Generation is a pure transform over [`FeedState`]: every call seeds a fresh
//! [`LevelRng`] with the current seed, draws the cells, then draws one more value
//! which becomes the next seed. Feeding the returned state back in walks the seed
//! chain, so a saved seed replays the same sequence of grids and rows.
//!
//! Cells are drawn column by column within a row, rows top to bottom.

use log::{debug, trace};

use crate::grid::{Grid, Row};
use crate::rng::LevelRng;
use crate::types::{Cell, Difficulty, Layout, EMPTY, NUM_COLS, VS_ROWS};

/// Seed and row offset threaded through generation calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeedState {
    pub seed: i64,
    /// 0 or 1
    pub row_offset: u8,
}

impl FeedState {
    pub fn new(seed: i64, row_offset: u8) -> Self {
        Self {
            seed,
            row_offset: row_offset % 2,
        }
    }

    /// Flip the row offset once if the layout scrolls rows in
    fn after_row(self, layout: Layout) -> Self {
        if layout.is_staggered() {
            Self {
                row_offset: (self.row_offset + 1) % 2,
                ..self
            }
        } else {
            self
        }
    }
}

fn draw_row(rng: &mut LevelRng, difficulty: Difficulty) -> Row {
    let mut row = [EMPTY; NUM_COLS];
    for cell in row.iter_mut() {
        *cell = rng.next_below(difficulty.colors() as i32) as Cell;
    }
    row
}

/// Generate a versus grid: the first `VS_ROWS` rows filled, the rest empty
///
/// The row offset flips once per filled row when the layout is staggered.
pub fn generate_grid(
    state: FeedState,
    difficulty: Difficulty,
    layout: Layout,
) -> (Grid, FeedState) {
    let mut rng = LevelRng::new(state.seed);
    let mut grid = Grid::new();
    let mut next = state;

    for row in 0..VS_ROWS {
        grid.set_row(row, &draw_row(&mut rng, difficulty));
        next = next.after_row(layout);
    }

    next.seed = rng.next_i32() as i64;
    debug!(
        "Generated grid: seed={} colors={} next_seed={} offset={}",
        state.seed,
        difficulty.colors(),
        next.seed,
        next.row_offset
    );
    (grid, next)
}

/// Generate one incoming row for endless play
pub fn generate_row(
    state: FeedState,
    difficulty: Difficulty,
    layout: Layout,
) -> (Row, FeedState) {
    let mut rng = LevelRng::new(state.seed);
    let row = draw_row(&mut rng, difficulty);

    let mut next = state.after_row(layout);
    next.seed = rng.next_i32() as i64;
    trace!(
        "Generated row: seed={} next_seed={} offset={}",
        state.seed,
        next.seed,
        next.row_offset
    );
    (row, next)
}
