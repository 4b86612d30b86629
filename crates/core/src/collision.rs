//! Placement legality.
//!
//! [`is_valid`] is the single check behind every move, rotation, gravity
//! step and spawn. Side walls and the floor are hard bounds; cells above
//! row 0 are only checked against the side walls so pieces may spawn
//! partially above the field.

use crate::board::Board;
use crate::piece::Piece;

/// Whether `piece` may exist on `board` at its current position
pub fn is_valid(piece: &Piece, board: &Board) -> bool {
    let columns = board.columns() as i32;
    let rows = board.rows() as i32;

    piece.cells().iter().all(|&(x, y)| {
        if x < 0 || x >= columns || y >= rows {
            return false;
        }
        y < 0 || board.is_empty_at(x, y)
    })
}

/// Rows the piece can descend while staying valid
///
/// Zero when the piece is already resting on something (or is itself
/// invalid).
pub fn drop_distance(piece: &Piece, board: &Board) -> i32 {
    let mut distance = 0;
    while is_valid(&piece.translated(0, distance + 1), board) {
        distance += 1;
    }
    distance
}

/// Lowest legal placement of `piece`, without touching either argument
pub fn landing(piece: &Piece, board: &Board) -> Piece {
    piece.translated(0, drop_distance(piece, board))
}
