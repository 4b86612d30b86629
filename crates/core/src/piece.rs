//! Piece module - one falling tetromino instance
//!
//! A piece is a shape, a color and the board position of the shape matrix's
//! top-left corner. Every operation returns a new value; legality is left to
//! [`crate::collision::is_valid`].

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Color, ShapeKind, MAX_SHAPE_DIM};

/// Absolute board cells covered by a piece
pub type PieceCells = ArrayVec<(i32, i32), { (MAX_SHAPE_DIM as usize) * (MAX_SHAPE_DIM as usize) }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Place a new piece horizontally centered on row 0
    pub fn spawn(shape: Shape, color: Color, columns: u16) -> Self {
        Self {
            shape,
            color,
            x: columns as i32 / 2 - shape.width() as i32 / 2,
            y: 0,
        }
    }

    /// Spawn the template of `kind`
    pub fn of_kind(kind: ShapeKind, color: Color, columns: u16) -> Self {
        Self::spawn(Shape::template(kind), color, columns)
    }

    /// Same piece rotated 90° clockwise around its origin
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece moved to row `y`
    pub fn at_row(&self, y: i32) -> Self {
        Self { y, ..*self }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> PieceCells {
        self.shape
            .cells()
            .map(|(col, row)| (self.x + col as i32, self.y + row as i32))
            .collect()
    }

    pub fn cell_count(&self) -> u32 {
        self.shape.cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_horizontally_centered() {
        let i = Piece::of_kind(ShapeKind::I, Color::Cyan, 10);
        assert_eq!((i.x, i.y), (3, 0));

        let o = Piece::of_kind(ShapeKind::O, Color::Yellow, 10);
        assert_eq!((o.x, o.y), (4, 0));

        let t = Piece::of_kind(ShapeKind::T, Color::Purple, 10);
        assert_eq!((t.x, t.y), (4, 0));
    }

    #[test]
    fn translate_moves_origin_only() {
        let p = Piece::of_kind(ShapeKind::S, Color::Green, 10);
        let q = p.translated(-2, 3);
        assert_eq!((q.x, q.y), (p.x - 2, p.y + 3));
        assert_eq!(q.shape, p.shape);
        assert_eq!(q.color, p.color);
    }

    #[test]
    fn cells_are_offset_by_origin() {
        let p = Piece::of_kind(ShapeKind::T, Color::Red, 10).translated(0, 5);
        let cells: Vec<_> = p.cells().into_iter().collect();
        assert_eq!(cells, vec![(5, 5), (4, 6), (5, 6), (6, 6)]);
    }

    #[test]
    fn rotation_keeps_origin_and_color() {
        let p = Piece::of_kind(ShapeKind::L, Color::Orange, 10);
        let r = p.rotated();
        assert_eq!((r.x, r.y, r.color), (p.x, p.y, p.color));
        assert_ne!(r.shape, p.shape);
        assert_eq!(r.rotated().rotated().rotated(), p);
    }
}
