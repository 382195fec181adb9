//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, host engine, terminal rendering).
//!
//! # Board Dimensions
//!
//! The reference playfield is 10 columns by 20 rows. Dimensions are a
//! construction parameter of the board, these constants are only the defaults.
//!
//! # Timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `LEVEL_SPEEDUP_MS` | 100 | Interval reduction per level |
//!
//! The drop interval is `BASE_DROP_MS - (level - 1) * LEVEL_SPEEDUP_MS` and is
//! allowed to reach zero or below, in which case every frame forces a drop.
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Identity tags double as board cell values
//! assert_eq!(PieceKind::I.tag(), 1);
//! assert_eq!(PieceKind::from_tag(7), Some(PieceKind::Z));
//!
//! // Parse piece kind (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Largest shape matrix edge (the I piece is 4x4)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: i64 = 1000;

/// Gravity speedup per level above 1
pub const LEVEL_SPEEDUP_MS: i64 = 100;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row moved by a soft or hard drop
pub const DROP_POINTS_PER_ROW: u32 = 1;

/// Line clear scoring table (Classic scoring)
///
/// Index `n - 1` holds the base points for clearing `n` lines at once:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the current (1-based) level.
pub const LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Horizontal offsets tried, in order, when an in-place rotation collides
pub const WALL_KICKS: [i16; 4] = [1, -1, 2, -2];


/// The seven tetromino piece kinds
///
/// Declaration order matches the identity tags 1..7, which are also the
/// values stored in occupied board cells and the render palette index:
/// - **I** (1): Cyan, horizontal bar
/// - **J** (2): Blue, J-shaped
/// - **L** (3): Orange, L-shaped (mirror of J)
/// - **O** (4): Yellow, 2x2 square
/// - **S** (5): Green, S-shaped
/// - **T** (6): Purple, T-shaped
/// - **Z** (7): Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in tag order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Identity tag in `1..=7`
    pub fn tag(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::tag`]; `0` and anything above 7 map to `None`
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1..=7 => Some(Self::ALL[(tag - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdrop_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (tag 0)
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind (tag 1..7)
pub type Cell = Option<PieceKind>;

/// Export a cell as its integer tag (0 = empty)
pub fn cell_tag(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::tag)
}

/// Lifecycle phase of a game session
///
/// ```text
/// NotStarted -> Running <-> Paused
///               Running  -> GameOver
/// any        -> NotStarted (reset)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "notStarted",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Commands accepted by the game
///
/// Movement commands are ignored unless the game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down, locking it if it cannot move (+1 point)
    SoftDrop,
    /// Drop piece to the lowest free position and lock it (+1 point per row)
    HardDrop,
    /// Rotate piece 90° clockwise, with horizontal wall kicks
    Rotate,
    /// Begin a new game (only before the first piece spawns)
    Start,
    /// Pause a running game or resume a paused one
    PauseOrResume,
    /// Clear everything and return to the not-started phase
    Reset,
    /// Single start button: start, pause, resume or (after game over) reset
    Cycle,
}

impl GameAction {
    pub const ALL: [GameAction; 9] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Start,
        GameAction::PauseOrResume,
        GameAction::Reset,
        GameAction::Cycle,
    ];
}

/// Event recorded each time a piece locks.
///
/// Consumed by observers via `GameState::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points from the line clear (0 when nothing cleared).
    pub line_clear_score: u32,
    /// Points from the drop that ended in this lock.
    pub drop_score: u32,
    /// The following spawn collided and ended the game.
    pub topped_out: bool,
}
