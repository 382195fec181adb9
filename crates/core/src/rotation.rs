//! Rotation with simplified wall kicks.
//!
//! A rotation first tries the rotated matrix in place, then shifted by each
//! offset of [`WALL_KICKS`] in order. There are no vertical kicks and no
//! per-shape kick tables.

use crate::board::Board;
use crate::collision::is_blocked;
use crate::shapes::ShapeMatrix;
use crate::types::WALL_KICKS;

/// Try to rotate `shape` clockwise at (`x`, `y`).
///
/// Returns the rotated matrix and the horizontal shift that made it fit
/// (`0` for an in-place rotation), or `None` if every candidate collides.
pub fn try_rotate(shape: &ShapeMatrix, x: i16, y: i16, board: &Board) -> Option<(ShapeMatrix, i16)> {
    let rotated = shape.rotated_cw();

    std::iter::once(0)
        .chain(WALL_KICKS)
        .find(|&kick| !is_blocked(&rotated, x + kick, y, board))
        .map(|kick| (rotated, kick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::spawn_shape;
    use crate::types::PieceKind;

    #[test]
    fn rotates_in_place_when_free() {
        let board = Board::new();
        let (rotated, kick) = try_rotate(&spawn_shape(PieceKind::T), 3, 5, &board).unwrap();
        assert_eq!(kick, 0);
        assert_eq!(rotated, spawn_shape(PieceKind::T).rotated_cw());
    }

    #[test]
    fn kicks_off_left_wall() {
        let board = Board::new();
        // Vertical T sits in matrix column 1; parked at x = -1 its stem is on column 0.
        let east = spawn_shape(PieceKind::T).rotated_cw();
        let (south, kick) = try_rotate(&east, -1, 5, &board).unwrap();
        assert_eq!(kick, 1);
        assert_eq!(south, east.rotated_cw());
    }

    #[test]
    fn kicks_off_right_wall_with_negative_offset() {
        let board = Board::new();
        // Vertical I in column 2 of its box; x = 7 puts it on column 9.
        let vertical = spawn_shape(PieceKind::I).rotated_cw();
        let (_, kick) = try_rotate(&vertical, 7, 5, &board).unwrap();
        // Horizontal I at x = 7 spans 7..=10, x = 8 is worse, x = 6 fits.
        assert_eq!(kick, -1);
    }

    #[test]
    fn gives_up_when_all_kicks_fail() {
        let mut board = Board::with_size(4, 20).unwrap();
        for y in 0..20 {
            board.set(0, y, Some(PieceKind::Z));
            board.set(3, y, Some(PieceKind::Z));
        }
        // Vertical I fits in the 2-wide shaft, horizontal never can.
        let vertical = spawn_shape(PieceKind::I).rotated_cw();
        assert!(!is_blocked(&vertical, -1, 5, &board));
        assert_eq!(try_rotate(&vertical, -1, 5, &board), None);
    }
}
