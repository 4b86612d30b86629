//! Board module - the grid of settled blocks
//!
//! The board is a `columns x rows` grid where each cell is empty or holds the
//! color of a locked block. The grid doubles as the locked-cell registry:
//! [`Board::locked_cells`] lists every `((x, y), color)` entry.
//!
//! Storage is one flat row-major allocation (`y * columns + x`) made at
//! construction; dimensions never change afterwards.
//! Coordinates: x grows left to right, y grows top to bottom.

use crate::config::check_dimensions;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::types::{Cell, Color};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u16,
    rows: u16,
    /// Flat array of cells, row-major order
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(columns: u16, rows: u16) -> Result<Self, BoardError> {
        check_dimensions(columns, rows)?;
        Ok(Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        })
    }

    /// Build a board from an explicit locked-cell mapping
    ///
    /// Every call allocates its own grid; entries outside the grid are
    /// rejected.
    pub fn from_locked<I>(columns: u16, rows: u16, locked: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = ((i32, i32), Color)>,
    {
        let mut board = Self::new(columns, rows)?;
        for ((x, y), color) in locked {
            let idx = board.checked_index(x, y)?;
            board.cells[idx] = Some(color);
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.columns as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some(y as usize * self.columns as usize + x as usize)
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, BoardError> {
        self.index(x, y).ok_or(BoardError::OutOfBounds {
            x,
            y,
            columns: self.columns,
            rows: self.rows,
        })
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Occupancy of (x, y); querying outside the grid is an error
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, BoardError> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    /// Cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set a cell; returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and empty
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Record every occupied cell of `piece` with the piece's color
    ///
    /// No legality check: the caller validates the placement first. Cells
    /// outside the grid are skipped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if !self.set(x, y, Some(piece.color)) {
                log::warn!("merge skipped out-of-grid cell ({}, {})", x, y);
            }
        }
    }

    /// Row `y` left to right, `None` below the floor
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let w = self.columns as usize;
        Some(&self.cells[y * w..(y + 1) * w])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Every locked block as `((x, y), color)`, row-major
    pub fn locked_cells(&self) -> impl Iterator<Item = ((i32, i32), Color)> + '_ {
        let w = self.columns as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|color| (((idx % w) as i32, (idx / w) as i32), color))
        })
    }

    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Flat row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
