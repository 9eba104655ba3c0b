//! Notification hooks for score displays and game-over reporting

/// Receives session notifications
///
/// `on_score_changed` fires after every reset and after every lock (whether
/// or not rows were cleared). `on_game_over` fires when a freshly spawned
/// piece collides, just before the board and counters are reset; the game
/// then carries on silently.
pub trait SessionObserver {
    fn on_score_changed(&mut self, score: u32, level: u32);

    fn on_game_over(&mut self, _final_score: u32, _final_level: u32) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_score_changed(&mut self, _score: u32, _level: u32) {}
}

impl<O: SessionObserver + ?Sized> SessionObserver for &mut O {
    fn on_score_changed(&mut self, score: u32, level: u32) {
        (**self).on_score_changed(score, level);
    }

    fn on_game_over(&mut self, final_score: u32, final_level: u32) {
        (**self).on_game_over(final_score, final_level);
    }
}

impl<O: SessionObserver + ?Sized> SessionObserver for Box<O> {
    fn on_score_changed(&mut self, score: u32, level: u32) {
        (**self).on_score_changed(score, level);
    }

    fn on_game_over(&mut self, final_score: u32, final_level: u32) {
        (**self).on_game_over(final_score, final_level);
    }
}
