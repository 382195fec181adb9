//! Construction errors.
//!
//! Gameplay itself never fails: rejected moves and rotations are reported as
//! `false`. Only building a game from bad dimensions is an error.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    EmptyBoard { width: u8, height: u8 },

    #[error("board is {width}x{height}, but every side must fit the largest shape ({min})")]
    BoardTooSmall { width: u8, height: u8, min: u8 },
}
