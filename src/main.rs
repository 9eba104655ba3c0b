//! Terminal runner (default binary).
//!
//! Drives a `GameSession` from crossterm key events and a wall-clock tick,
//! redrawing the whole frame through the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use blockfall::args::Args;
use blockfall::core::{GameSession, SessionConfig, SessionObserver};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging::init_log;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const FRAME_MS: u64 = 16;

/// Writes score and game-over notifications to the log
#[derive(Debug, Default)]
struct LoggingObserver {
    best_score: u32,
}

impl SessionObserver for LoggingObserver {
    fn on_score_changed(&mut self, score: u32, level: u32) {
        debug!("score {} level {}", score, level);
    }

    fn on_game_over(&mut self, final_score: u32, final_level: u32) {
        self.best_score = self.best_score.max(final_score);
        info!(
            "game over at score {} level {} (best {})",
            final_score, final_level, self.best_score
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_log(args.log_level, &args.log_file)
        .with_context(|| format!("failed to open log file {}", args.log_file.display()))?;

    let config = args
        .session_config(clock_seed())
        .context("invalid session configuration")?;
    info!(
        "starting {}x{} game with seed {}",
        config.cols,
        config.rows,
        config.seed_or_default()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: SessionConfig) -> Result<()> {
    let epoch = Instant::now();
    let mut session = GameSession::with_observer(config, LoggingObserver::default());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        let frame_start = Instant::now();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the frame budget runs out.
        let mut timeout = frame;
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit with score {}", session.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            timeout = frame.saturating_sub(frame_start.elapsed());
            if timeout.is_zero() {
                break;
            }
        }

        // Tick.
        let now_ms = u64::try_from(epoch.elapsed().as_millis()).unwrap_or(u64::MAX);
        session.tick(now_ms);
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
