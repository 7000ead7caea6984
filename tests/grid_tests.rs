//! Grid tests - bounds, rows and columns

use bubble_levels::core::Grid;
use bubble_levels::types::{EMPTY, LEVEL_ROWS, NUM_COLS};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), NUM_COLS);
    assert_eq!(grid.height(), LEVEL_ROWS);

    for col in 0..NUM_COLS {
        for row in 0..LEVEL_ROWS {
            assert_eq!(grid.get(col, row), Some(EMPTY), "({}, {})", col, row);
        }
    }
    assert!(grid.is_empty());
    assert_eq!(grid, Grid::default());
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new();
    assert_eq!(grid.get(NUM_COLS, 0), None);
    assert_eq!(grid.get(0, LEVEL_ROWS), None);
    assert!(grid.column(NUM_COLS).is_none());
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new();

    assert!(grid.set(5, 10, 3));
    assert_eq!(grid.get(5, 10), Some(3));
    assert_eq!(grid.column(5).map(|c| c[10]), Some(3));
    assert_eq!(grid.filled_count(), 1);

    assert!(grid.set(5, 10, EMPTY));
    assert!(grid.is_empty());
}

#[test]
fn test_grid_set_out_of_bounds() {
    let mut grid = Grid::new();
    assert!(!grid.set(NUM_COLS, 0, 1));
    assert!(!grid.set(0, LEVEL_ROWS, 1));
    assert!(grid.is_empty());
}

#[test]
fn test_grid_is_column_major() {
    let mut grid = Grid::new();
    grid.set(2, 7, 6);
    assert_eq!(grid.cells()[2][7], 6);
    assert_eq!(grid.row(7)[2], 6);
}
