//! Shape module - tetromino templates as boolean matrices
//!
//! A shape is a `width x height` matrix (at most 4x4) packed into a `u16`,
//! bit `row * 4 + col`. Templates are data: all seven kinds share one type.
//!
//! Rotation turns the matrix 90° clockwise (transpose of the reversed rows),
//! swapping width and height. Four rotations give back the original matrix.

use crate::types::{ShapeKind, MAX_SHAPE_DIM};

const STRIDE: u8 = MAX_SHAPE_DIM;

/// A tetromino matrix tagged with the template it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    width: u8,
    height: u8,
    bits: u16,
}

impl Shape {
    /// Spawn orientation of a template
    pub fn template(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows(kind, &[&[1, 1, 1, 1]]),
            ShapeKind::O => Self::from_rows(kind, &[&[1, 1], &[1, 1]]),
            ShapeKind::T => Self::from_rows(kind, &[&[0, 1, 0], &[1, 1, 1]]),
            ShapeKind::S => Self::from_rows(kind, &[&[0, 1, 1], &[1, 1, 0]]),
            ShapeKind::Z => Self::from_rows(kind, &[&[1, 1, 0], &[0, 1, 1]]),
            ShapeKind::J => Self::from_rows(kind, &[&[1, 0, 0], &[1, 1, 1]]),
            ShapeKind::L => Self::from_rows(kind, &[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    /// Templates are hard-coded, so rows are always within 4x4.
    fn from_rows(kind: ShapeKind, rows: &[&[u8]]) -> Self {
        let height = rows.len() as u8;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u8;
        debug_assert!(width <= STRIDE && height <= STRIDE);

        let mut bits = 0u16;
        for (row, cols) in rows.iter().enumerate() {
            for (col, &v) in cols.iter().enumerate() {
                if v != 0 {
                    bits |= 1 << (row as u8 * STRIDE + col as u8);
                }
            }
        }
        Self {
            kind,
            width,
            height,
            bits,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (col, row) is occupied
    #[inline]
    pub fn is_filled(&self, col: u8, row: u8) -> bool {
        col < self.width && row < self.height && self.bits & (1 << (row * STRIDE + col)) != 0
    }

    /// Occupied (col, row) pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).filter_map(move |col| self.is_filled(col, row).then_some((col, row)))
        })
    }

    pub fn cell_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Rotate 90° clockwise: `new[r][c] = old[h - 1 - c][r]`
    pub fn rotated_cw(&self) -> Self {
        let mut bits = 0u16;
        let (new_w, new_h) = (self.height, self.width);
        for row in 0..new_h {
            for col in 0..new_w {
                if self.is_filled(row, self.height - 1 - col) {
                    bits |= 1 << (row * STRIDE + col);
                }
            }
        }
        Self {
            kind: self.kind,
            width: new_w,
            height: new_h,
            bits,
        }
    }

    /// Matrix rows as booleans, for previews
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = bool> + '_> + '_ {
        (0..self.height).map(move |row| (0..self.width).map(move |col| self.is_filled(col, row)))
    }
}
