//! Game board representation and collision detection

use crate::error::{EngineError, Result};
use crate::tetromino::{Shape, TetrominoType};

/// Standard board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Smallest board every piece can spawn on
pub const MIN_WIDTH: usize = 5;
pub const MIN_HEIGHT: usize = 4;
pub const MAX_DIMENSION: usize = 255;

/// Reject boards too small for every piece to spawn, or absurdly large
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if !(MIN_HEIGHT..=MAX_DIMENSION).contains(&rows) || !(MIN_WIDTH..=MAX_DIMENSION).contains(&cols)
    {
        return Err(EngineError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// A cell on the board - either empty or filled by a locked piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(TetrominoType),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    /// Raw value: 0 for empty, type id + 1 for filled
    pub fn raw(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(kind) => kind.id() + 1,
        }
    }
}

/// The game board
///
/// Row 0 is the top. Cells live in one row-major buffer indexed
/// `row * cols + col`; only the methods here mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
            cells: vec![Cell::Empty; BOARD_HEIGHT * BOARD_WIDTH],
        }
    }
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at (row, col), failing outside the grid
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Get a cell by signed coordinates
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.index(row, col).ok().map(|i| self.cells[i])
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Check if every column in a row is filled
    pub fn is_row_full(&self, row: usize) -> Result<bool> {
        self.index(row, 0)?;
        Ok(self.row_full(row))
    }

    /// Whether `shape` with its origin at (x, y) may be placed.
    ///
    /// Every filled cell must sit inside the columns and above the floor.
    /// Cells above row 0 skip the occupancy check so pieces can enter
    /// partially off the top.
    pub fn fits(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.filled().all(|(r, c)| {
            let row = y + r as i32;
            let col = x + c as i32;
            if col < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
                return false;
            }
            row < 0 || self.get(row, col).is_some_and(|cell| cell.is_empty())
        })
    }

    /// Lock a piece onto the board.
    ///
    /// Cells outside the grid (above the top) are dropped.
    pub fn lock(&mut self, shape: &Shape, x: i32, y: i32, kind: TetrominoType) {
        for (r, c) in shape.filled() {
            let (Ok(row), Ok(col)) = (
                usize::try_from(y + r as i32),
                usize::try_from(x + c as i32),
            ) else {
                continue;
            };
            if let Ok(i) = self.index(row, col) {
                self.cells[i] = Cell::Filled(kind);
            }
        }
    }

    /// Clear completed rows and return the number cleared.
    ///
    /// Surviving rows keep their order and settle at the bottom; the same
    /// number of empty rows appear at the top.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_row = self.rows;

        for read_row in (0..self.rows).rev() {
            if self.row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * self.cols;
                self.cells
                    .copy_within(src..src + self.cols, write_row * self.cols);
            }
        }

        // Fill the top with empty rows
        self.cells[..write_row * self.cols].fill(Cell::Empty);

        cleared
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Raw cell values, one vector per row from the top
    pub fn raw_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(Cell::raw).collect())
            .collect()
    }

    fn row_full(&self, row: usize) -> bool {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .all(Cell::is_filled)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(EngineError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}
