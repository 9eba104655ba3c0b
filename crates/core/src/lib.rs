//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state for the falling-block game.
//! It has **no dependencies** on terminals, input devices or clocks:
//!
//! - **Deterministic**: same seed, same inputs and same timestamps give the same game
//! - **Host-driven**: the caller supplies timestamps to [`GameSession::tick`]
//! - **Allocation-free hot paths**: collision, movement and rotation work on the stack
//!
//! # Module Structure
//!
//! - [`board`]: the grid of locked cells, merge and row sweep
//! - [`pieces`]: tetromino shapes, the piece factory and in-place rotation
//! - [`collision`]: the single legality predicate for every move
//! - [`rotation`]: rotation with horizontal wall kicks
//! - [`scoring`]: points, lines, levels and gravity speed-up
//! - [`session`]: the game session that orchestrates everything
//! - [`config`]: serde-backed session configuration
//! - [`observer`]: score and game-over notification hooks
//! - [`rng`]: seeded uniform piece selection
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random and spawn at the top center
//! - Gravity moves the piece down one row whenever more than the drop interval
//!   has passed since the last step; a piece that cannot fall locks
//! - Full rows are cleared; each is worth `10 * level`
//! - Every 10 lines the level goes up and gravity gets 10% faster
//! - A piece that collides at spawn resets the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, SessionConfig};
//! use blockfall_core::types::GameAction;
//!
//! let mut session = GameSession::new(SessionConfig::default());
//! session.apply_action(GameAction::RotateCw);
//! session.apply_action(GameAction::MoveLeft);
//!
//! // Nothing falls until more than one drop interval has elapsed.
//! assert!(!session.tick(1000));
//! assert!(session.tick(1001));
//! assert_eq!(session.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod observer;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SweepResult};
pub use collision::collides;
pub use config::SessionConfig;
pub use error::ConfigError;
pub use observer::{NoopObserver, SessionObserver};
pub use pieces::{create_piece, ActivePiece, Position, Shape};
pub use rng::{PieceRandomizer, SimpleRng};
pub use rotation::try_rotate;
pub use scoring::{ClearOutcome, Progress, ScoringRules};
pub use session::{GameSession, LockEvent, SpawnOutcome};
pub use snapshot::GameSnapshot;
