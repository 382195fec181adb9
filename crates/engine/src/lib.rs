//! Host-facing game engine.
//!
//! [`GameEngine`] wraps a [`GameState`] with the three collaborators a host
//! provides: a [`Clock`] that delivers frame ticks, a [`RenderSink`] that draws
//! snapshots and a [`ScoreSink`] that displays the score.
//!
//! The engine never schedules itself. After every running frame it asks the
//! clock for one more tick, and it cancels the outstanding tick as soon as the
//! game pauses, ends or resets, so no tick survives a reset.
//!
//! ```
//! use blockdrop_core::{GameSnapshot, GameState, ScoreSnapshot};
//! use blockdrop_engine::{Clock, GameEngine, RenderSink, ScoreSink};
//!
//! #[derive(Default)]
//! struct Ticker { armed: bool }
//!
//! impl Clock for Ticker {
//!     fn request_tick(&mut self) { self.armed = true; }
//!     fn cancel_tick(&mut self) { self.armed = false; }
//! }
//!
//! struct Null;
//! impl RenderSink for Null { fn render(&mut self, _: &GameSnapshot) {} }
//! impl ScoreSink for Null { fn publish(&mut self, _: ScoreSnapshot) {} }
//!
//! let mut engine = GameEngine::new(GameState::new(7), Ticker::default(), Null, Null);
//! engine.start();
//! assert!(engine.clock().armed);
//!
//! engine.pause_or_resume();
//! assert!(!engine.clock().armed);
//! ```

pub use blockdrop_core as core;
pub use blockdrop_types as types;

use crate::core::{GameSnapshot, GameState, ScoreSnapshot};
use crate::types::{GameAction, Phase};

/// Frame scheduler supplied by the host.
///
/// `request_tick` asks for one future call to [`GameEngine::update`];
/// `cancel_tick` withdraws an outstanding request.
pub trait Clock {
    fn request_tick(&mut self);
    fn cancel_tick(&mut self);
}

/// Receives a snapshot after every frame and every accepted command
pub trait RenderSink {
    fn render(&mut self, snapshot: &GameSnapshot);
}

/// Receives the score triple whenever it changes
pub trait ScoreSink {
    fn publish(&mut self, score: ScoreSnapshot);
}

pub struct GameEngine<C, R, S> {
    state: GameState,
    clock: C,
    renderer: R,
    scores: S,
    snapshot: GameSnapshot,
    published: Option<ScoreSnapshot>,
    tick_pending: bool,
}

impl<C: Clock, R: RenderSink, S: ScoreSink> GameEngine<C, R, S> {
    pub fn new(state: GameState, clock: C, renderer: R, scores: S) -> Self {
        let mut engine = Self {
            state,
            clock,
            renderer,
            scores,
            snapshot: GameSnapshot::default(),
            published: None,
            tick_pending: false,
        };
        engine.present();
        engine
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn score_sink(&self) -> &S {
        &self.scores
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whether a tick has been requested and not yet delivered or cancelled
    pub fn tick_pending(&self) -> bool {
        self.tick_pending
    }

    /// Frame callback. Consumes the pending tick, advances gravity, renders,
    /// and requests the next tick while the game keeps running.
    pub fn update(&mut self, now_ms: u64) {
        self.tick_pending = false;
        if !self.state.is_running() {
            return;
        }
        self.state.update(now_ms);
        self.present();
        self.sync_clock();
    }

    pub fn start(&mut self) -> bool {
        self.command(GameAction::Start)
    }

    pub fn pause_or_resume(&mut self) -> bool {
        self.command(GameAction::PauseOrResume)
    }

    pub fn reset(&mut self) -> bool {
        self.command(GameAction::Reset)
    }

    pub fn cycle(&mut self) -> bool {
        self.command(GameAction::Cycle)
    }

    pub fn move_left(&mut self) -> bool {
        self.command(GameAction::MoveLeft)
    }

    pub fn move_right(&mut self) -> bool {
        self.command(GameAction::MoveRight)
    }

    pub fn soft_drop(&mut self) -> bool {
        self.command(GameAction::SoftDrop)
    }

    pub fn rotate(&mut self) -> bool {
        self.command(GameAction::Rotate)
    }

    pub fn hard_drop(&mut self) -> bool {
        self.command(GameAction::HardDrop)
    }

    /// Apply a command; rejected commands neither render nor touch the clock.
    pub fn command(&mut self, action: GameAction) -> bool {
        if !self.state.apply_action(action) {
            return false;
        }
        if action == GameAction::Reset || self.state.phase() == Phase::NotStarted {
            // A fresh session always republishes the zeroed score.
            self.published = None;
        }
        self.present();
        self.sync_clock();
        true
    }

    fn present(&mut self) {
        self.state.snapshot_into(&mut self.snapshot);
        self.renderer.render(&self.snapshot);

        let score = self.state.scores();
        if self.published != Some(score) {
            self.scores.publish(score);
            self.published = Some(score);
        }
    }

    fn sync_clock(&mut self) {
        let running = self.state.is_running();
        if running && !self.tick_pending {
            self.clock.request_tick();
            self.tick_pending = true;
        } else if !running && self.tick_pending {
            self.clock.cancel_tick();
            self.tick_pending = false;
        }
    }
}
