//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the core engine, the terminal renderer and the input map alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (configurable per session):
//!
//! - **Rows**: 20 (row 0 is the top)
//! - **Columns**: 10
//!
//! # Timing and Progression Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000.0 | Gravity interval at level 1 |
//! | `SPEEDUP_FACTOR` | 0.9 | Interval multiplier applied on each level-up |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level |
//! | `POINTS_PER_LINE` | 10 | Points per cleared line, multiplied by level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, RotationDirection, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::T.color_id(), 1);
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(RotationDirection::Clockwise.opposite(), RotationDirection::CounterClockwise);
//!
//! assert_eq!(DEFAULT_ROWS, 20);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

/// Default board height in rows
pub const DEFAULT_ROWS: usize = 20;

/// Default board width in columns
pub const DEFAULT_COLS: usize = 10;

/// Smallest board side that still fits every piece's bounding box
pub const MIN_BOARD_DIM: usize = 4;

/// Initial gravity interval in milliseconds (level 1)
pub const BASE_DROP_MS: f64 = 1000.0;

/// Drop interval multiplier applied on every level-up
pub const SPEEDUP_FACTOR: f64 = 0.9;

/// Cleared lines needed per level-up
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line (multiplied by the current level)
pub const POINTS_PER_LINE: u32 = 10;

/// Level a fresh session starts at
pub const INITIAL_LEVEL: u32 = 1;

/// A cell value on the board or in a piece shape
///
/// `0` is empty, `1..=7` is the color id of the piece that filled it.
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds
///
/// Each kind carries a fixed color id that is baked into its shape cells:
///
/// | Kind | Color id |
/// |------|----------|
/// | T | 1 |
/// | O | 2 |
/// | L | 3 |
/// | J | 4 |
/// | I | 5 |
/// | S | 6 |
/// | Z | 7 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    J,
    L,
    O,
    S,
    Z,
    I,
}

impl PieceKind {
    /// All kinds, in the order used for uniform random selection
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];

    /// Color id written into the board for this kind
    pub fn color_id(&self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }
}

/// Direction of a quarter-turn rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// The direction that undoes this one
    pub fn opposite(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Game actions that input adapters can apply to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Clear the board and start over
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_ids_are_distinct_and_non_empty() {
        let mut seen = [false; 8];
        for kind in PieceKind::ALL {
            let id = kind.color_id();
            assert!(id != EMPTY && id <= 7);
            assert!(!seen[id as usize], "duplicate color id {}", id);
            seen[id as usize] = true;
        }
    }

    #[test]
    fn opposite_direction_is_an_involution() {
        for dir in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
