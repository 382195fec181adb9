//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, scheduling, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, no display needed
//! - **Portable**: Can run behind any host clock and renderer
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven tetromino matrices and matrix rotation
//! - [`board`]: Grid storage, locking and line clearing
//! - [`collision`]: The single blocked-position test
//! - [`rotation`]: Clockwise rotation with horizontal wall kicks
//! - [`piece`]: A positioned shape with move/rotate operations
//! - [`scoring`]: Line-clear table, level and drop-interval formulas
//! - [`rng`]: Seeded uniform piece randomizer
//! - [`game_state`]: Session lifecycle, gravity and command handlers
//! - [`snapshot`]: Read-only views for rendering and score display
//! - [`config`]: Board size, seed and drop-interval floor
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every piece is drawn independently
//! - **Simple wall kicks**: a blocked rotation retries at x offsets +1, -1, +2, -2
//! - **Instant lock**: a piece locks as soon as gravity or a soft drop cannot move it
//! - **Classic scoring**: 40/100/300/1200 times level, one point per dropped row
//! - **Level**: one level per ten lines, starting at 1
//!
//! # Example
//!
//! ```
//! use blockdrop_core::GameState;
//! use blockdrop_types::GameAction;
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Check game state
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call [`GameState::update`](game_state::GameState::update) every frame with the
//! current time in milliseconds. Gravity moves the piece one row whenever more
//! than `1000 - (level - 1) * 100` ms have passed since the last drop.

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::is_blocked;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::{PieceSource, RandomSource, SequenceSource, SimpleRng};
pub use rotation::try_rotate;
pub use scoring::{calculate_drop_score, calculate_line_score, get_drop_interval_ms, level_for_lines};
pub use shapes::{spawn_shape, ShapeMatrix};
pub use snapshot::{GameSnapshot, PieceSnapshot, ScoreSnapshot};
