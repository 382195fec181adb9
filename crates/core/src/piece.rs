//! Piece module - a shape instance positioned on the board

use crate::board::Board;
use crate::collision::is_blocked;
use crate::rotation::try_rotate;
use crate::shapes::{spawn_shape, MinoList, ShapeMatrix};
use crate::types::PieceKind;

/// A falling (or previewed) piece
///
/// `x`/`y` is the board position of the matrix's top-left corner; `y` may be
/// negative while the piece is partly above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Create a piece in spawn orientation at (x, y)
    pub fn new_at(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            matrix: spawn_shape(kind),
            x,
            y,
        }
    }

    /// Create a piece at the spawn anchor of a board `board_width` cells wide:
    /// horizontally centered (rounding left), top row 0.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let matrix = spawn_shape(kind);
        let x = (board_width as i16 - matrix.size() as i16).div_euclid(2);
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }

    /// Whether the piece collides at its current position
    pub fn is_blocked(&self, board: &Board) -> bool {
        is_blocked(&self.matrix, self.x, self.y, board)
    }

    /// Move by (dx, dy) if the destination is free.
    /// Returns false and leaves the piece untouched otherwise.
    pub fn try_move(&mut self, dx: i16, dy: i16, board: &Board) -> bool {
        if is_blocked(&self.matrix, self.x + dx, self.y + dy, board) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate clockwise with wall kicks.
    /// Returns false and leaves the piece untouched if no kick fits.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        match try_rotate(&self.matrix, self.x, self.y, board) {
            Some((matrix, kick)) => {
                self.matrix = matrix;
                self.x += kick;
                true
            }
            None => false,
        }
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> MinoList {
        self.matrix
            .minos()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}
