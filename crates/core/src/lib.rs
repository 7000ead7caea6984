//! Core level logic - pure, deterministic, and testable
//!
//! This crate holds the level data of a bubble-shooter playfield and the rules that
//! produce it. It has **no dependencies** on rendering, input or storage, making it:
//!
//! - **Deterministic**: the same seed replays the same grids and rows on every run
//! - **Total**: no operation fails; bad input degrades to empty cells or index 0
//! - **Portable**: usable from a game loop, a headless tool, or tests
//!
//! # Module Structure
//!
//! - [`grid`]: 8x12 level grid of color cells, column-major
//! - [`parser`]: level-pack text decoding with the staggered write cursor
//! - [`rng`]: bit-exact 48-bit LCG used for every random draw
//! - [`generator`]: pure `(seed, offset) -> (grid | row, seed', offset')` transforms
//! - [`store`]: the [`LevelStore`] progression state machine
//! - [`snapshot`]: progression state persisted by the host
//!
//! # Example
//!
//! ```
//! use bubble_levels_core::LevelStore;
//!
//! let mut store = LevelStore::scripted(b"01234567\n\n76543210", 0);
//! assert_eq!(store.len(), 2);
//!
//! store.advance();
//! assert_eq!(store.index(), 1);
//! assert_eq!(store.current_grid().map(|g| g.row(0)), Some([7, 6, 5, 4, 3, 2, 1, 0]));
//!
//! store.advance();
//! assert_eq!(store.index(), 0);
//! ```
//!
//! # Threading
//!
//! A store mutates its seed on every grid or row it draws. Share it across threads
//! only behind external serialization.

pub mod generator;
pub mod grid;
pub mod parser;
pub mod rng;
pub mod snapshot;
pub mod store;

pub use bubble_levels_types as types;

// Re-export commonly used types for convenience
pub use generator::{generate_grid, generate_row, FeedState};
pub use grid::{Grid, Row};
pub use parser::{parse_level, parse_level_pack};
pub use rng::LevelRng;
pub use snapshot::ProgressSnapshot;
pub use store::{LevelStore, Mode};
