//! Collision test shared by movement, rotation and spawning.

use crate::board::Board;
use crate::shapes::ShapeMatrix;

/// Whether `shape` anchored at (`x`, `y`) collides with the walls, the floor or
/// locked cells.
///
/// Cells above the top edge (`y < 0`) are only checked against the side walls,
/// so a piece may sit partly above the visible board.
pub fn is_blocked(shape: &ShapeMatrix, x: i16, y: i16, board: &Board) -> bool {
    let width = board.width() as i16;
    let height = board.height() as i16;

    shape.minos().iter().any(|&(dx, dy)| {
        let bx = x + dx;
        let by = y + dy;
        bx < 0 || bx >= width || by >= height || (by >= 0 && board.is_occupied(bx, by))
    })
}
