//! Grid module - fixed-shape level data
//!
//! A grid is 8 columns x 12 rows of cells, indexed `[column][row]` to match how the
//! rendering and collision code walks the playfield. Every cell is either `EMPTY`
//! or a color index. Coordinates: column 0..7 (left to right), row 0..11 (top to bottom).

use std::fmt;

use crate::types::{row_start_column, Cell, EMPTY, LEVEL_ROWS, NUM_COLS};

/// One row of cells, as fed in by the endless-row generator
pub type Row = [Cell; NUM_COLS];

/// A level grid - 8 columns x 12 rows, column-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; LEVEL_ROWS]; NUM_COLS],
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY; LEVEL_ROWS]; NUM_COLS],
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        NUM_COLS
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        LEVEL_ROWS
    }

    /// Get the cell at (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        self.cells.get(col).and_then(|column| column.get(row)).copied()
    }

    /// Set the cell at (col, row)
    /// Returns false if out of bounds
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> bool {
        match self.cells.get_mut(col).and_then(|column| column.get_mut(row)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// All cells of one column, top to bottom
    pub fn column(&self, col: usize) -> Option<&[Cell; LEVEL_ROWS]> {
        self.cells.get(col)
    }

    /// Copy out one row, left to right
    /// Rows past the bottom come back empty
    pub fn row(&self, row: usize) -> Row {
        let mut out = [EMPTY; NUM_COLS];
        if row < LEVEL_ROWS {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.cells[col][row];
            }
        }
        out
    }

    /// Overwrite one row; returns false if the row is out of bounds
    pub fn set_row(&mut self, row: usize, cells: &Row) -> bool {
        if row >= LEVEL_ROWS {
            return false;
        }
        for (col, &cell) in cells.iter().enumerate() {
            self.cells[col][row] = cell;
        }
        true
    }

    /// Raw column-major cell array
    pub fn cells(&self) -> &[[Cell; LEVEL_ROWS]; NUM_COLS] {
        &self.cells
    }

    /// Check if every cell is empty
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Count the cells holding a bubble
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|column| column.iter())
            .filter(|&&cell| cell != EMPTY)
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// One text line per row, odd rows indented by a space to show the stagger.
/// Empty cells print as `-`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..LEVEL_ROWS {
            if row_start_column(row) == 1 {
                f.write_str(" ")?;
            }
            for (col, cell) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match *cell {
                    EMPTY => f.write_str("-")?,
                    color => write!(f, "{}", color)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
