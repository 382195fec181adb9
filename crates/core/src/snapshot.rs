//! Read-only views of the game handed to render and score sinks.

use crate::piece::Piece;
use crate::shapes::{MinoList, ShapeMatrix};
use crate::types::{Phase, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    /// Palette index, same as the board cell value the piece locks as
    pub tag: u8,
    pub matrix: ShapeMatrix,
    pub x: i16,
    pub y: i16,
}

impl PieceSnapshot {
    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> MinoList {
        self.matrix
            .minos()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            tag: value.kind.tag(),
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

/// Score display triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreSnapshot {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Default for ScoreSnapshot {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major cell tags, `width * height` long (0 = empty, never drawn)
    pub board: Vec<u8>,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub phase: Phase,
    pub score: ScoreSnapshot,
}

impl GameSnapshot {
    /// Tag at (x, y); 0 outside the board
    pub fn cell(&self, x: i16, y: i16) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return 0;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.board.chunks(self.width.max(1) as usize)
    }
}
