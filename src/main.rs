//! Terminal runner (default binary).
//!
//! Drives a [`GameEngine`] from a crossterm poll loop: the loop is the frame
//! clock, key presses become commands, and the latest snapshot is flushed to
//! the terminal whenever the engine produced a new one.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockdrop::core::{GameConfig, GameSnapshot, GameState, ScoreSnapshot, SequenceSource};
use blockdrop::engine::{Clock, GameEngine, RenderSink, ScoreSink};
use blockdrop::input::{handle_key_event, should_quit};
use blockdrop::term::TerminalRenderer;
use blockdrop::types::FRAME_MS;

/// One-shot frame request, fired by the poll loop at the next frame boundary
#[derive(Debug, Default)]
struct FrameClock {
    armed: bool,
}

impl FrameClock {
    /// Consume the pending request, if any.
    fn fire(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

impl Clock for FrameClock {
    fn request_tick(&mut self) {
        self.armed = true;
    }

    fn cancel_tick(&mut self) {
        self.armed = false;
    }
}

/// Keeps the latest snapshot until the loop draws it
#[derive(Debug, Default)]
struct Screen {
    frame: GameSnapshot,
    dirty: bool,
}

impl RenderSink for Screen {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.frame.clone_from(snapshot);
        self.dirty = true;
    }
}

#[derive(Debug, Default)]
struct ScoreBoard {
    latest: ScoreSnapshot,
    best: u32,
}

impl ScoreSink for ScoreBoard {
    fn publish(&mut self, score: ScoreSnapshot) {
        self.latest = score;
        self.best = self.best.max(score.score);
    }
}

type Engine = GameEngine<FrameClock, Screen, ScoreBoard>;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate().context("invalid board configuration")?;
    eprintln!(
        "[blockdrop] board {}x{} seed {}",
        config.width, config.height, config.seed
    );

    let state = match GameConfig::pieces_from_env() {
        Some(kinds) => {
            let order: Vec<&str> = kinds.iter().map(|k| k.as_str()).collect();
            eprintln!("[blockdrop] scripted pieces: {}", order.join(","));
            GameState::with_source(config, Box::new(SequenceSource::new(kinds)))?
        }
        None => GameState::with_config(config)?,
    };
    let mut engine = GameEngine::new(
        state,
        FrameClock::default(),
        Screen::default(),
        ScoreBoard::default(),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();

    let scores = engine.score_sink();
    eprintln!(
        "[blockdrop] exit ({}): score {} level {} lines {} (best {})",
        engine.phase().as_str(),
        scores.latest.score,
        scores.latest.level,
        scores.latest.lines,
        scores.best
    );
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    let epoch = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        let screen = engine.renderer_mut();
        if screen.dirty {
            screen.dirty = false;
            term.draw(&screen.frame)?;
        }

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.command(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    engine.renderer_mut().dirty = true;
                }
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            if engine.clock_mut().fire() {
                let now_ms = u64::try_from(epoch.elapsed().as_millis()).unwrap_or(u64::MAX);
                engine.update(now_ms);
            }
        }
    }
}
