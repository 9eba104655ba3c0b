//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid of color ids (`0` = empty).
//! Uses a flat row-major buffer allocated once per session; every later
//! mutation (merge, sweep, clear) happens in place.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Signed coordinates are accepted everywhere so callers can
//! probe positions outside the grid.

use crate::pieces::ActivePiece;
use crate::types::{Cell, EMPTY};

/// Result of a single [`Board::sweep`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepResult {
    pub cleared_rows: u32,
}

/// The game board
///
/// Precondition: `rows > 0` and `cols > 0`. The board itself does not
/// validate this beyond a debug assertion; session configuration enforces a
/// larger minimum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build a board from explicit rows (row 0 first)
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert!(!rows.is_empty(), "board needs at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "board needs at least one column");
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "all board rows must have the same width"
        );

        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Self {
            rows: height,
            cols,
            cells,
        }
    }

    /// Copy the grid out as nested rows (row 0 first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(y * self.cols + x)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and empty
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// Borrow one row
    ///
    /// # Panics
    ///
    /// Panics if `y >= rows`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Write every non-zero shape cell of `piece` into the grid
    ///
    /// Does not check for collisions; callers run the collision predicate
    /// first. Cells outside the grid are skipped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        for (x, y, cell) in piece.cells() {
            self.set(x, y, cell);
        }
    }

    /// Remove every full row, compacting the rows above it
    ///
    /// Scans bottom to top. After a row is removed the same index is checked
    /// again, since it now holds the row that used to sit above it.
    pub fn sweep(&mut self) -> SweepResult {
        let mut cleared_rows = 0;
        let mut y = self.rows;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared_rows += 1;
            } else {
                y -= 1;
            }
        }

        SweepResult { cleared_rows }
    }

    /// Drop row `y`, shift every row above it down by one and blank the top row
    fn remove_row(&mut self, y: usize) {
        let width = self.cols;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY);
    }
}
