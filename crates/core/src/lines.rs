//! Line clearing with full-row compaction.
//!
//! Surviving rows are rebuilt bottom-up with a read pointer and a write
//! pointer, so every surviving row moves down by the number of full rows
//! below it. Non-adjacent clears in one pass shift each band correctly.

use crate::board::Board;

/// Result of one clearing pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Number of rows removed
    pub count: u32,
    /// Indices of removed rows (pre-clear coordinates), bottom to top
    pub rows: Vec<usize>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Remove every full row and compact the rows above
pub fn clear_lines(board: &mut Board) -> LineClear {
    let width = board.columns() as usize;
    let height = board.rows() as usize;

    let mut rows = Vec::new();
    for y in (0..height).rev() {
        if board.is_row_full(y) {
            rows.push(y);
        }
    }
    if rows.is_empty() {
        return LineClear::default();
    }

    let cells = board.cells_mut();
    let mut write_y = height;
    for read_y in (0..height).rev() {
        if rows.contains(&read_y) {
            continue;
        }
        write_y -= 1;
        if write_y != read_y {
            let src = read_y * width;
            cells.copy_within(src..src + width, write_y * width);
        }
    }

    // Everything above the last written row is vacated.
    cells[..write_y * width].fill(None);

    LineClear {
        count: rows.len() as u32,
        rows,
    }
}
