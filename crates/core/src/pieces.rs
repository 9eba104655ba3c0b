//! Pieces module - tetromino shapes and the piece factory
//!
//! A shape is a small square matrix of color ids stored inline, so pieces are
//! `Copy` and rotating never allocates. Rotation is the classic two-step
//! procedure: transpose, then reverse each row (clockwise) or reverse the row
//! order (counter-clockwise).

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, RotationDirection, EMPTY};

/// Largest shape side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Upper bound on filled cells in any shape
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIZE * MAX_SHAPE_SIZE;

/// A tetromino in one orientation
///
/// Only the top-left `size x size` block of `cells` is meaningful; the rest
/// stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    size: u8,
}

impl Shape {
    /// Build a shape from square rows
    ///
    /// # Panics
    ///
    /// Panics if the rows are not square or larger than [`MAX_SHAPE_SIZE`].
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        let size = rows.len();
        assert!(
            size > 0 && size <= MAX_SHAPE_SIZE,
            "shape side must be 1..={}",
            MAX_SHAPE_SIZE
        );
        assert!(
            rows.iter().all(|row| row.len() == size),
            "shape rows must form a square"
        );

        let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..size].copy_from_slice(row);
        }
        Self {
            cells,
            size: size as u8,
        }
    }

    /// Side length of the square matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Width in columns, used as the wall-kick search bound
    pub fn width(&self) -> usize {
        self.size()
    }

    /// Cell at (x, y) within the shape; empty when outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.size() || y >= self.size() {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Borrow row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y][..self.size()]
    }

    /// Copy the matrix out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size()).map(|y| self.row(y).to_vec()).collect()
    }

    /// The color id carried by this shape, if it has any filled cell
    pub fn color_id(&self) -> Option<Cell> {
        self.occupied().next().map(|(_, _, cell)| cell)
    }

    /// Filled cells as `(x, y, color)` relative to the top-left corner
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                let cell = self.cells[y][x];
                (cell != EMPTY).then_some((x, y, cell))
            })
        })
    }

    /// Rotate the matrix a quarter turn in place
    ///
    /// Four rotations in the same direction restore the original layout, and
    /// a rotation followed by one in the opposite direction is the identity.
    pub fn rotate(&mut self, direction: RotationDirection) {
        let n = self.size();

        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }

        match direction {
            RotationDirection::Clockwise => {
                for row in self.cells[..n].iter_mut() {
                    row[..n].reverse();
                }
            }
            RotationDirection::CounterClockwise => self.cells[..n].reverse(),
        }
    }
}

/// Create the canonical spawn shape for a piece kind
pub fn create_piece(kind: PieceKind) -> Shape {
    let c = kind.color_id();
    match kind {
        PieceKind::T => Shape::from_rows(&[&[0, 0, 0], &[c, c, c], &[0, c, 0]]),
        PieceKind::O => Shape::from_rows(&[&[c, c], &[c, c]]),
        PieceKind::L => Shape::from_rows(&[&[0, c, 0], &[0, c, 0], &[0, c, c]]),
        PieceKind::J => Shape::from_rows(&[&[0, c, 0], &[0, c, 0], &[c, c, 0]]),
        PieceKind::I => Shape::from_rows(&[
            &[0, c, 0, 0],
            &[0, c, 0, 0],
            &[0, c, 0, 0],
            &[0, c, 0, 0],
        ]),
        PieceKind::S => Shape::from_rows(&[&[0, c, c], &[c, c, 0], &[0, 0, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[c, c, 0], &[0, c, c], &[0, 0, 0]]),
    }
}

/// Top-left offset of a shape on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl ActivePiece {
    /// Create a piece of `kind` at `position` in its spawn orientation
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            shape: create_piece(kind),
            position,
        }
    }

    /// Create a piece at the spawn point of a board `cols` wide
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        Self::new(kind, spawn_position(cols))
    }

    /// Filled cells in absolute board coordinates as `(x, y, color)`
    ///
    /// Stack-only; never allocates.
    pub fn cells(&self) -> ArrayVec<(i32, i32, Cell), MAX_SHAPE_CELLS> {
        self.shape
            .occupied()
            .map(|(x, y, cell)| {
                (
                    self.position.x + x as i32,
                    self.position.y + y as i32,
                    cell,
                )
            })
            .collect()
    }
}

/// Spawn offset: horizontally centered, top row
pub fn spawn_position(cols: usize) -> Position {
    Position::new((cols / 2) as i32 - 1, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_pads_with_empty_cells() {
        let shape = Shape::from_rows(&[&[2, 2], &[2, 2]]);
        assert_eq!(shape.size(), 2);
        assert_eq!(shape.get(1, 1), 2);
        assert_eq!(shape.get(2, 0), EMPTY);
        assert_eq!(shape.cells[3], [EMPTY; MAX_SHAPE_SIZE]);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_from_rows_rejects_ragged_rows() {
        let _ = Shape::from_rows(&[&[1, 1, 1], &[1, 1]]);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let mut shape = create_piece(PieceKind::T);
        shape.rotate(RotationDirection::Clockwise);
        assert_eq!(
            shape.to_rows(),
            vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 1, 0]]
        );
    }

    #[test]
    fn test_rotate_t_counter_clockwise() {
        let mut shape = create_piece(PieceKind::T);
        shape.rotate(RotationDirection::CounterClockwise);
        assert_eq!(
            shape.to_rows(),
            vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]
        );
    }

    #[test]
    fn test_rotation_leaves_padding_untouched() {
        let mut shape = create_piece(PieceKind::S);
        for _ in 0..3 {
            shape.rotate(RotationDirection::Clockwise);
        }
        for y in 0..MAX_SHAPE_SIZE {
            assert_eq!(shape.cells[y][3], EMPTY);
        }
        assert_eq!(shape.cells[3], [EMPTY; MAX_SHAPE_SIZE]);
    }

    #[test]
    fn test_spawn_position_is_centered() {
        assert_eq!(spawn_position(10), Position::new(4, 0));
        assert_eq!(spawn_position(7), Position::new(2, 0));
    }

    #[test]
    fn test_active_cells_are_absolute() {
        let piece = ActivePiece::new(PieceKind::O, Position::new(3, 5));
        let cells: Vec<_> = piece.cells().into_iter().collect();
        assert_eq!(cells, vec![(3, 5, 2), (4, 5, 2), (3, 6, 2), (4, 6, 2)]);
    }
}
