//! Game session - manages the complete game state
//!
//! Ties together the board, the piece factory, collision, rotation and
//! scoring. The host owns one `GameSession` per game and drives it from a
//! single thread: a timer adapter calls [`GameSession::tick`] once per frame,
//! input adapters call the move/rotate/drop operations (or
//! [`GameSession::apply_action`]) and a renderer reads
//! [`GameSession::snapshot`].
//!
//! Locking only ever happens inside `tick`. A piece that spawns on top of
//! locked cells ends the game, which here means the board and counters are
//! silently reset and play continues with the piece that just spawned.

use log::{debug, info};

use crate::board::Board;
use crate::collision::collides;
use crate::config::SessionConfig;
use crate::observer::{NoopObserver, SessionObserver};
use crate::pieces::ActivePiece;
use crate::rng::PieceRandomizer;
use crate::rotation::try_rotate;
use crate::scoring::Progress;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, RotationDirection};

/// Result of spawning a new active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned,
    /// The piece collided at spawn; board and counters were reset
    ToppedOut,
}

/// Summary of the most recent lock, consumed with [`GameSession::take_last_event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub cleared_rows: u32,
    pub points: u32,
    pub levels_gained: u32,
    /// The follow-up spawn topped out
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<O = NoopObserver> {
    config: SessionConfig,
    board: Board,
    active: Option<ActivePiece>,
    randomizer: PieceRandomizer,
    progress: Progress,
    /// Timestamp of the last gravity step, on the caller's clock
    last_drop_ms: u64,
    last_event: Option<LockEvent>,
    observer: O,
}

impl GameSession<NoopObserver> {
    /// Create a session without a score observer and spawn the first piece
    ///
    /// `config` is trusted; run [`SessionConfig::validate`] first when it
    /// comes from outside.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl Default for GameSession<NoopObserver> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<O: SessionObserver> GameSession<O> {
    /// Create a session reporting to `observer` and spawn the first piece
    pub fn with_observer(config: SessionConfig, observer: O) -> Self {
        let mut session = Self {
            board: Board::new(config.rows, config.cols),
            active: None,
            randomizer: PieceRandomizer::new(config.seed_or_default()),
            progress: Progress::initial(&config.scoring),
            last_drop_ms: 0,
            last_event: None,
            observer,
            config,
        };
        session.reset();
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for hosts that preload a layout
    ///
    /// Writing under the active piece breaks the no-overlap guarantee; keep
    /// edits clear of it.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval_ms(&self) -> f64 {
        self.progress.drop_interval_ms
    }

    pub fn last_drop_ms(&self) -> u64 {
        self.last_drop_ms
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            board: &self.board,
            active: self.active,
            score: self.progress.score,
            level: self.progress.level,
            lines: self.progress.lines,
        }
    }

    /// Clear the board, reset every counter and spawn a fresh piece
    ///
    /// The last-drop timestamp is kept, so the next gravity step still
    /// follows the caller's clock.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.active = None;
        self.board.clear();
        self.progress = Progress::initial(&self.config.scoring);
        self.last_event = None;

        if self.spawn() == SpawnOutcome::Spawned {
            self.notify_score();
        }
    }

    /// Spawn a uniformly random piece at the top center
    pub fn spawn(&mut self) -> SpawnOutcome {
        let kind = self.randomizer.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a specific piece at the top center
    ///
    /// If it collides straight away the game is over: the observer is told,
    /// then the board and counters are reset and the piece stays where it
    /// spawned.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> SpawnOutcome {
        let piece = ActivePiece::spawn(kind, self.board.cols());
        self.active = Some(piece);

        if !collides(&self.board, &piece) {
            debug!("spawned {:?} at {:?}", kind, piece.position);
            return SpawnOutcome::Spawned;
        }

        info!(
            "top out: {:?} blocked at spawn (score {}, level {}, lines {})",
            kind, self.progress.score, self.progress.level, self.progress.lines
        );
        self.observer
            .on_game_over(self.progress.score, self.progress.level);
        self.board.clear();
        self.progress = Progress::initial(&self.config.scoring);
        self.notify_score();
        SpawnOutcome::ToppedOut
    }

    /// Advance gravity if more than one drop interval has passed
    ///
    /// `now_ms` must be non-decreasing across calls. Returns `true` when a
    /// gravity step ran (the piece fell one row or locked).
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let elapsed = now_ms.saturating_sub(self.last_drop_ms);
        if elapsed as f64 <= self.progress.drop_interval_ms {
            return false;
        }

        if self.active.is_some() && !self.try_shift(0, 1) {
            self.lock_active();
        }
        self.last_drop_ms = now_ms;
        true
    }

    /// Shift the active piece `dx` columns; no-op if blocked
    pub fn move_piece(&mut self, dx: i32) -> bool {
        self.try_shift(dx, 0)
    }

    /// Shift the active piece one row down; no-op if blocked, never locks
    pub fn soft_drop(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    /// Rotate the active piece with wall kicks; no-op if every kick fails
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        try_rotate(&self.board, active, direction)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::RotateCw => self.rotate(RotationDirection::Clockwise),
            GameAction::RotateCcw => self.rotate(RotationDirection::CounterClockwise),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        active.position.x += dx;
        active.position.y += dy;
        if collides(&self.board, active) {
            active.position.x -= dx;
            active.position.y -= dy;
            return false;
        }
        true
    }

    /// Merge the active piece, clear rows, credit them and spawn the next piece
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.merge(&piece);
        let cleared_rows = self.board.sweep().cleared_rows;
        let outcome = self
            .progress
            .credit_rows(cleared_rows, &self.config.scoring);

        debug!(
            "locked {:?} at {:?}: {} row(s), +{} points",
            piece.kind, piece.position, cleared_rows, outcome.points
        );
        if outcome.levels_gained > 0 {
            info!(
                "level {} reached after {} lines, drop interval {:.1}ms",
                self.progress.level, self.progress.lines, self.progress.drop_interval_ms
            );
        }

        let topped_out = self.spawn() == SpawnOutcome::ToppedOut;
        self.last_event = Some(LockEvent {
            kind: piece.kind,
            cleared_rows,
            points: outcome.points,
            levels_gained: outcome.levels_gained,
            topped_out,
        });

        // A top-out already reported the reset counters.
        if !topped_out {
            self.notify_score();
        }
    }

    fn notify_score(&mut self) {
        self.observer
            .on_score_changed(self.progress.score, self.progress.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{create_piece, Position};

    #[derive(Debug, Default)]
    struct Recorder {
        scores: Vec<(u32, u32)>,
        game_overs: Vec<(u32, u32)>,
    }

    impl SessionObserver for Recorder {
        fn on_score_changed(&mut self, score: u32, level: u32) {
            self.scores.push((score, level));
        }

        fn on_game_over(&mut self, final_score: u32, final_level: u32) {
            self.game_overs.push((final_score, final_level));
        }
    }

    fn place(session: &mut GameSession<impl SessionObserver>, kind: PieceKind, x: i32, y: i32) {
        session.active = Some(ActivePiece::new(kind, Position::new(x, y)));
    }

    fn fill_row_except(board: &mut Board, y: i32, gaps: &[i32]) {
        for x in 0..board.cols() as i32 {
            if !gaps.contains(&x) {
                board.set(x, y, 6);
            }
        }
    }

    #[test]
    fn test_new_session_has_active_piece_at_spawn() {
        let session = GameSession::default();
        let active = session.active().unwrap();
        assert_eq!(active.position, Position::new(4, 0));
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.drop_interval_ms(), 1000.0);
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_tick_boundary_is_strict() {
        let mut session = GameSession::default();
        place(&mut session, PieceKind::O, 4, 0);

        assert!(!session.tick(1000));
        assert_eq!(session.active().unwrap().position.y, 0);
        assert_eq!(session.last_drop_ms(), 0);

        assert!(session.tick(1001));
        assert_eq!(session.active().unwrap().position.y, 1);
        assert_eq!(session.last_drop_ms(), 1001);

        assert!(!session.tick(2001));
        assert_eq!(session.active().unwrap().position.y, 1);

        assert!(session.tick(2002));
        assert_eq!(session.active().unwrap().position.y, 2);
    }

    #[test]
    fn test_tick_locks_on_floor_and_spawns_next() {
        let mut session = GameSession::default();
        place(&mut session, PieceKind::O, 4, 18);

        assert!(session.tick(1001));

        assert_eq!(session.board().get(4, 18), Some(2));
        assert_eq!(session.board().get(5, 19), Some(2));
        assert_eq!(session.board().occupied_count(), 4);
        assert_eq!(session.active().unwrap().position, Position::new(4, 0));
        assert_eq!(session.last_drop_ms(), 1001);

        let event = session.take_last_event().unwrap();
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!(event.cleared_rows, 0);
        assert!(!event.topped_out);
        assert!(session.take_last_event().is_none());
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut session = GameSession::default();
        place(&mut session, PieceKind::O, 4, 18);

        assert!(!session.soft_drop());
        assert_eq!(session.active().unwrap().position, Position::new(4, 18));
        assert_eq!(session.board().occupied_count(), 0);
        assert!(session.take_last_event().is_none());
    }

    #[test]
    fn test_lock_clears_row_scores_and_notifies() {
        let mut session = GameSession::with_observer(SessionConfig::default(), Recorder::default());
        assert_eq!(session.observer().scores, vec![(0, 1)]);

        fill_row_except(session.board_mut(), 19, &[4, 5]);
        place(&mut session, PieceKind::O, 4, 18);

        assert!(session.tick(1001));

        assert_eq!(session.score(), 10);
        assert_eq!(session.lines(), 1);
        assert_eq!(session.level(), 1);
        // O's upper half dropped into the cleared row.
        assert_eq!(session.board().row(19), &[0u8, 0, 0, 0, 2, 2, 0, 0, 0, 0]);
        assert_eq!(session.board().occupied_count(), 2);
        assert_eq!(session.observer().scores, vec![(0, 1), (10, 1)]);

        let event = session.take_last_event().unwrap();
        assert_eq!(event.cleared_rows, 1);
        assert_eq!(event.points, 10);
    }

    #[test]
    fn test_spawn_collision_resets_everything() {
        let mut session = GameSession::with_observer(SessionConfig::default(), Recorder::default());
        session.progress = Progress {
            score: 500,
            level: 3,
            lines: 25,
            drop_interval_ms: 810.0,
        };
        fill_row_except(session.board_mut(), 0, &[]);
        fill_row_except(session.board_mut(), 1, &[]);

        assert_eq!(session.spawn_kind(PieceKind::T), SpawnOutcome::ToppedOut);

        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.drop_interval_ms(), 1000.0);
        let active = session.active().unwrap();
        assert_eq!(active.kind, PieceKind::T);
        assert_eq!(active.position, Position::new(4, 0));
        assert_eq!(session.observer().game_overs, vec![(500, 3)]);
        assert_eq!(session.observer().scores.last(), Some(&(0, 1)));
    }

    #[test]
    fn test_restart_action_resets_counters() {
        let mut session = GameSession::default();
        session.progress.score = 70;
        session.progress.lines = 7;
        session.board_mut().set(0, 19, 4);

        assert!(session.apply_action(GameAction::Restart));

        assert_eq!(session.score(), 0);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.board().occupied_count(), 0);
        assert!(session.active().is_some());
    }

    #[test]
    fn test_four_rotations_restore_piece() {
        let mut session = GameSession::default();
        place(&mut session, PieceKind::J, 4, 5);
        let before = *session.active().unwrap();

        for _ in 0..4 {
            assert!(session.rotate(RotationDirection::Clockwise));
        }
        assert_eq!(*session.active().unwrap(), before);
        assert_eq!(session.active().unwrap().shape, create_piece(PieceKind::J));
    }

    #[test]
    fn test_actions_dispatch() {
        let mut session = GameSession::default();
        place(&mut session, PieceKind::T, 4, 5);

        assert!(session.apply_action(GameAction::MoveLeft));
        assert_eq!(session.active().unwrap().position.x, 3);
        assert!(session.apply_action(GameAction::MoveRight));
        assert!(session.apply_action(GameAction::MoveRight));
        assert_eq!(session.active().unwrap().position.x, 5);
        assert!(session.apply_action(GameAction::SoftDrop));
        assert_eq!(session.active().unwrap().position.y, 6);
        assert!(session.apply_action(GameAction::RotateCcw));
        assert!(session.apply_action(GameAction::RotateCw));
        assert_eq!(session.active().unwrap().shape, create_piece(PieceKind::T));
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let config = SessionConfig {
            seed: Some(2024),
            ..SessionConfig::default()
        };
        let mut a = GameSession::new(config);
        let mut b = GameSession::new(config);
        for _ in 0..20 {
            assert_eq!(a.active().unwrap().kind, b.active().unwrap().kind);
            a.spawn();
            b.spawn();
        }
    }
}
