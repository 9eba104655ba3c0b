//! Collision detection - the single legality check for every move
//!
//! A piece collides when any filled shape cell lands outside the grid
//! (negative row or column, row `>= rows`, column `>= cols`) or on a locked
//! cell. Empty shape cells never collide, wherever they hang.

use crate::board::Board;
use crate::pieces::ActivePiece;

/// Check whether `piece`, at its current position, overlaps a locked cell or
/// leaves the grid
pub fn collides(board: &Board, piece: &ActivePiece) -> bool {
    piece
        .cells()
        .iter()
        .any(|&(x, y, _)| !board.is_vacant(x, y))
}
