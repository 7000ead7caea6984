//! Parser module - level-pack text to grids
//!
//! A level pack is plain text. Levels are separated by a blank line (`\n\n`).
//! Inside a level only two kinds of byte mean anything:
//!
//! - `'0'..='7'`: a bubble of that color
//! - `'-'`: an empty cell
//!
//! Everything else (spaces, newlines, comments) is skipped without moving the cursor.
//! Each decoded cell advances the column; a full row moves to the next row and
//! restarts at column `row % 2`, which gives the staggered layout. Decoding stops
//! as soon as the last stored row is complete.
//!
//! ```
//! use bubble_levels_core::parser::parse_level_pack;
//!
//! let levels = parse_level_pack(b"01234567\n-234567-\n\n01------");
//! assert_eq!(levels.len(), 2);
//! assert_eq!(levels[0].row(0), [0, 1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(levels[1].row(0), [0, 1, -1, -1, -1, -1, -1, -1]);
//! ```

use log::debug;

use crate::grid::Grid;
use crate::types::{row_start_column, Cell, EMPTY, LEVEL_ROWS, NUM_COLS};

/// Level separator
const SEPARATOR: &[u8] = b"\n\n";

/// Outcome of writing one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More cells fit in the grid
    Continue,
    /// The last row is complete; remaining input is ignored
    Full,
}

/// Write position inside a grid being decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub col: usize,
    pub row: usize,
}

impl Cursor {
    /// Start at the top-left cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a cell at the cursor and advance
    pub fn write(&mut self, grid: &mut Grid, cell: Cell) -> Step {
        grid.set(self.col, self.row, cell);
        self.col += 1;

        if self.col == NUM_COLS {
            self.row += 1;
            if self.row == LEVEL_ROWS {
                return Step::Full;
            }
            self.col = row_start_column(self.row);
        }
        Step::Continue
    }
}

/// Map one byte of level text to a cell, or None if it carries no meaning
#[inline]
pub fn decode_byte(byte: u8) -> Option<Cell> {
    match byte {
        b'0'..=b'7' => Some((byte - b'0') as Cell),
        b'-' => Some(EMPTY),
        _ => None,
    }
}

/// Decode one level block into a grid
///
/// Cells never reached by the cursor stay empty.
pub fn parse_level(block: &[u8]) -> Grid {
    let mut grid = Grid::new();
    let mut cursor = Cursor::new();

    for cell in block.iter().copied().filter_map(decode_byte) {
        if cursor.write(&mut grid, cell) == Step::Full {
            break;
        }
    }

    grid
}

/// Trim control characters and spaces from both ends
fn trim_blank(text: &[u8]) -> &[u8] {
    let start = text.iter().position(|&b| b > b' ').unwrap_or(text.len());
    let end = text.iter().rposition(|&b| b > b' ').map_or(start, |i| i + 1);
    &text[start..end]
}

fn find_separator(text: &[u8]) -> Option<usize> {
    text.windows(SEPARATOR.len()).position(|w| w == SEPARATOR)
}

/// Split a level pack into trimmed level blocks, in pack order
///
/// Text without a separator is a single level if anything but whitespace is left.
/// A pack that opens with a blank line yields an empty first block.
pub fn split_levels(text: &[u8]) -> Vec<&[u8]> {
    let mut blocks = Vec::new();
    let mut rest = text;

    let mut next = match find_separator(rest) {
        Some(at) => Some(at),
        None if !trim_blank(rest).is_empty() => Some(rest.len()),
        None => None,
    };

    while let Some(at) = next {
        blocks.push(trim_blank(&rest[..at]));
        rest = trim_blank(&rest[at..]);

        next = if rest.is_empty() {
            None
        } else {
            Some(find_separator(rest).unwrap_or(rest.len()))
        };
    }

    blocks
}

/// Parse a whole level pack
pub fn parse_level_pack(text: &[u8]) -> Vec<Grid> {
    let levels: Vec<Grid> = split_levels(text).into_iter().map(parse_level).collect();
    debug!(
        "Parsed level pack: {} bytes, {} levels",
        text.len(),
        levels.len()
    );
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_with_stagger() {
        let mut grid = Grid::new();
        let mut cursor = Cursor::new();

        for _ in 0..NUM_COLS {
            assert_eq!(cursor.write(&mut grid, 0), Step::Continue);
        }
        assert_eq!(cursor, Cursor { col: 1, row: 1 });

        for _ in 1..NUM_COLS {
            cursor.write(&mut grid, 1);
        }
        assert_eq!(cursor, Cursor { col: 0, row: 2 });
    }

    #[test]
    fn cursor_reports_full_on_last_row() {
        let mut grid = Grid::new();
        let mut cursor = Cursor::new();
        let mut writes = 0;

        while cursor.write(&mut grid, 2) == Step::Continue {
            writes += 1;
        }
        writes += 1;

        // Six even rows of 8 and six odd rows of 7.
        assert_eq!(writes, 6 * 8 + 6 * 7);
        assert_eq!(cursor.row, LEVEL_ROWS);
    }

    #[test]
    fn decode_only_digits_and_dash() {
        assert_eq!(decode_byte(b'0'), Some(0));
        assert_eq!(decode_byte(b'7'), Some(7));
        assert_eq!(decode_byte(b'-'), Some(EMPTY));
        assert_eq!(decode_byte(b'8'), None);
        assert_eq!(decode_byte(b'9'), None);
        assert_eq!(decode_byte(b' '), None);
        assert_eq!(decode_byte(b'\n'), None);
        assert_eq!(decode_byte(b'a'), None);
    }

    #[test]
    fn trim_blank_strips_controls() {
        assert_eq!(trim_blank(b"\t\r\n ab c \r\n"), b"ab c");
        assert_eq!(trim_blank(b" \n\n "), b"");
        assert_eq!(trim_blank(b""), b"");
    }

    #[test]
    fn split_trims_each_block() {
        let blocks = split_levels(b"  1 2\n\n\n\n 3 4 \n\n5\n");
        assert_eq!(blocks, vec![&b"1 2"[..], &b"3 4"[..], &b"5"[..]]);
    }

    #[test]
    fn split_empty_and_blank_packs() {
        assert!(split_levels(b"").is_empty());
        assert!(split_levels(b"   \n \t").is_empty());
    }

    #[test]
    fn split_leading_separator_keeps_empty_block() {
        let blocks = split_levels(b"\n\n0123");
        assert_eq!(blocks, vec![&b""[..], &b"0123"[..]]);
    }
}
