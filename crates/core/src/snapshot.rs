use crate::board::Board;
use crate::pieces::ActivePiece;

/// Read-only view handed to renderers and score displays
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub board: &'a Board,
    pub active: Option<ActivePiece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot<'_> {
    /// Color id at (x, y) with the active piece composited over the board
    pub fn composited_cell(&self, x: i32, y: i32) -> Option<u8> {
        let locked = self.board.get(x, y)?;
        let falling = self.active.and_then(|piece| {
            piece
                .cells()
                .iter()
                .find(|&&(px, py, _)| px == x && py == y)
                .map(|&(_, _, cell)| cell)
        });
        Some(falling.unwrap_or(locked))
    }
}
