//! Rotation with horizontal wall kicks
//!
//! After rotating the shape in place, a colliding piece is nudged sideways
//! by `+1, -2, +3, -4, ...` columns, applied cumulatively, so the tried
//! positions fan out around the original column: `+1, -1, +2, ...`.
//! The search gives up once the next offset would be positive and wider than
//! the shape, restoring the original orientation and column.

use log::trace;

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::ActivePiece;
use crate::types::RotationDirection;

/// Rotate `piece` in place, kicking it sideways if needed
///
/// Returns `true` when the piece ends in a non-colliding orientation. On
/// `false` the piece is left exactly as it was before the call.
pub fn try_rotate(board: &Board, piece: &mut ActivePiece, direction: RotationDirection) -> bool {
    let origin_x = piece.position.x;
    let width = piece.shape.width() as i32;
    let mut offset: i32 = 1;

    piece.shape.rotate(direction);

    while collides(board, piece) {
        piece.position.x += offset;
        trace!(
            "wall kick {:?}: trying x={} (offset {})",
            piece.kind,
            piece.position.x,
            offset
        );
        offset = -(offset + offset.signum());
        if offset > width {
            piece.shape.rotate(direction.opposite());
            piece.position.x = origin_x;
            return false;
        }
    }

    true
}
