//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, randomizer and scoring. It owns
//! the session lifecycle (`NotStarted -> Running <-> Paused`, `Running ->
//! GameOver`), gravity timing and every command handler.
//!
//! All handlers are total: a command that does not apply returns `false` and
//! leaves the state untouched. Game over is a phase, not an error.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::Piece;
use crate::rng::{PieceSource, RandomSource};
use crate::scoring::{
    calculate_drop_score, calculate_line_score, get_drop_interval_ms, level_for_lines,
};
use crate::snapshot::{GameSnapshot, PieceSnapshot, ScoreSnapshot};
use crate::types::{GameAction, LockEvent, Phase};

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    /// Preview piece, drawn one spawn ahead.
    next: Option<Piece>,
    source: Box<dyn PieceSource>,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Time of the last executed gravity check; `None` until the first frame
    /// after a start or resume.
    last_drop_ms: Option<u64>,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a classic 10x20 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let config = GameConfig::default().with_seed(seed);
        Self::build(config, Board::new(), Box::new(RandomSource::new(seed)))
    }

    /// Create a game from a configuration, using its seed for the randomizer
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, Box::new(RandomSource::new(config.seed)))
    }

    /// Create a game that draws its pieces from `source`
    pub fn with_source(
        config: GameConfig,
        source: Box<dyn PieceSource>,
    ) -> Result<Self, ConfigError> {
        let board = Board::with_size(config.width, config.height)?;
        Ok(Self::build(config, board, source))
    }

    fn build(config: GameConfig, board: Board, source: Box<dyn PieceSource>) -> Self {
        Self {
            config,
            board,
            active: None,
            next: None,
            source,
            phase: Phase::NotStarted,
            score: 0,
            level: 1,
            lines: 0,
            last_drop_ms: None,
            last_event: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn scores(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            score: self.score,
            level: self.level,
            lines: self.lines,
        }
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Current gravity interval; may be zero or negative at high levels
    pub fn drop_interval_ms(&self) -> i64 {
        get_drop_interval_ms(self.level, self.config.drop_interval_floor_ms)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_tags_into(&mut out.board);
        out.active = self.active.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.phase = self.phase;
        out.score = self.scores();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start a new game: clear the board and counters and spawn the first piece.
    /// Only valid before the first start or after a reset.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.clear_session();
        self.phase = Phase::Running;
        self.spawn_piece();
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Resume a paused game. The next `update` only records the time, so the
    /// paused duration never counts toward the next gravity step.
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        // Re-arm the drop timer so a long pause does not force an instant drop.
        self.last_drop_ms = None;
        true
    }

    pub fn pause_or_resume(&mut self) -> bool {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::NotStarted | Phase::GameOver => false,
        }
    }

    /// Return to `NotStarted` from any phase, clearing board and counters
    pub fn reset(&mut self) -> bool {
        self.clear_session();
        self.phase = Phase::NotStarted;
        true
    }

    /// Single start button: start, pause, resume, or reset after game over
    pub fn cycle(&mut self) -> bool {
        match self.phase {
            Phase::NotStarted => self.start(),
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::GameOver => self.reset(),
        }
    }

    fn clear_session(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.last_drop_ms = None;
        self.last_event = None;
    }

    fn draw_piece(&mut self) -> Piece {
        Piece::spawn(self.source.next_kind(), self.board.width())
    }

    /// Promote the preview piece to active and draw a new preview.
    ///
    /// Returns false (and ends the game) if the new piece collides at spawn.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.draw_piece(),
        };
        self.next = Some(self.draw_piece());
        self.active = Some(piece);

        if piece.is_blocked(&self.board) {
            self.phase = Phase::GameOver;
            return false;
        }
        true
    }

    /// Advance gravity to time `now_ms`.
    ///
    /// Drops the piece one row once more than the drop interval has elapsed
    /// since the last check, locking it if it cannot move. Returns true when a
    /// check executed.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        let Some(last) = self.last_drop_ms else {
            self.last_drop_ms = Some(now_ms);
            return false;
        };

        let elapsed = i64::try_from(now_ms.saturating_sub(last)).unwrap_or(i64::MAX);
        if elapsed <= self.drop_interval_ms() {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_piece(0);
        }
        self.last_drop_ms = Some(now_ms);
        true
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let board = &self.board;
        match self.active.as_mut() {
            Some(piece) => piece.try_move(dx, dy, board),
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.is_running() && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.is_running() && self.try_move(1, 0)
    }

    /// Rotate clockwise with horizontal wall kicks
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let board = &self.board;
        match self.active.as_mut() {
            Some(piece) => piece.try_rotate(board),
            None => false,
        }
    }

    /// Move down one row, or lock in place if blocked. Scores one point either way.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let points = calculate_drop_score(1);
        self.score = self.score.saturating_add(points);
        if !self.try_move(0, 1) {
            self.lock_piece(points);
        }
        true
    }

    /// Drop to the lowest free position and lock. Scores one point per row moved.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        let points = calculate_drop_score(rows);
        self.score = self.score.saturating_add(points);
        self.lock_piece(points);
        true
    }

    /// Lock the active piece onto the board, clear lines, score and spawn
    fn lock_piece(&mut self, drop_score: u32) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_shape(&active.matrix, active.x, active.y, active.kind);

        let lines_cleared = self.board.clear_full_rows();
        let mut line_clear_score = 0;
        if lines_cleared > 0 {
            // Scored at the level in effect before this clear.
            line_clear_score = calculate_line_score(lines_cleared, self.level);
            self.score = self.score.saturating_add(line_clear_score);
            self.lines += lines_cleared;
            self.level = level_for_lines(self.lines);
        }

        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared,
            line_clear_score,
            drop_score,
            topped_out: !spawned,
        });
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Start => self.start(),
            GameAction::PauseOrResume => self.pause_or_resume(),
            GameAction::Reset => self.reset(),
            GameAction::Cycle => self.cycle(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
