//! Shapes module - the seven tetromino matrices
//!
//! Every shape is an N×N occupancy matrix (N = 2, 3 or 4) in its spawn
//! orientation. Rotation always works on the full bounding matrix, never on a
//! trimmed shape, so a piece's anchor stays stable across rotations.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_SHAPE_SIZE};

/// Offset of a single mino relative to piece origin, as (column, row)
pub type MinoOffset = (i16, i16);

/// Occupied cells of a shape matrix
pub type MinoList = ArrayVec<MinoOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

type Rows = [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

/// Square occupancy matrix of edge `size`; cells outside `size` are always empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    rows: Rows,
}

impl ShapeMatrix {
    /// Build from 0/1 markers. Only the top-left `size × size` block is read.
    pub const fn from_bits(size: u8, bits: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let n = size as usize;
        let mut r = 0;
        while r < n {
            let mut c = 0;
            while c < n {
                rows[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { size, rows }
    }

    /// Edge length of the bounding matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (`row`, `col`) is occupied; out-of-matrix cells are empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        let n = self.size as usize;
        row < n && col < n && self.rows[row][col]
    }

    /// Rotate 90° clockwise: `new[r][c] = old[n-1-c][r]`
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.rows[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            rows,
        }
    }

    /// Occupied cells as (column, row) offsets, row-major order
    pub fn minos(&self) -> MinoList {
        let n = self.size as usize;
        let mut out = MinoList::new();
        for r in 0..n {
            for c in 0..n {
                if self.rows[r][c] {
                    out.push((c as i16, r as i16));
                }
            }
        }
        out
    }
}

const I_SHAPE: ShapeMatrix = ShapeMatrix::from_bits(
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: ShapeMatrix = ShapeMatrix::from_bits(
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: ShapeMatrix = ShapeMatrix::from_bits(
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SHAPE: ShapeMatrix = ShapeMatrix::from_bits(
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: ShapeMatrix = ShapeMatrix::from_bits(
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: ShapeMatrix = ShapeMatrix::from_bits(
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: ShapeMatrix = ShapeMatrix::from_bits(
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Spawn-orientation matrix for a piece kind
pub fn spawn_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
