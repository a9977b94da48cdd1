//! Pieces module - Tetromino catalog and the quarter-turn rotation transform
//!
//! Every variant is four cell offsets around a pivot. J, L, S, T and Z pivot on
//! the center of a grid cell; I and O pivot on a cell corner because their true
//! center is not grid-aligned. Rotation honours that split: corner-pivoted
//! offsets are shifted by half a cell before the transform and ceiling-rounded
//! after it, cell-pivoted offsets are rounded to nearest with no shift.

use crate::types::{Coord, PieceKind, Spin, Tile};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = Coord;

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// 90° rotation matrix stored as (cos, sin, -sin, cos)
const ROTATION_MATRIX: [f32; 4] = [0.0, 1.0, -1.0, 0.0];

/// Where a variant's rotation center sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pivot {
    /// Center of the cell at offset (0, 0)
    CellCenter,
    /// Corner shared by offsets (0, 0), (1, 0), (0, 1), (1, 1)
    CellCorner,
}

/// Spawn-orientation offsets for a piece kind
pub fn offsets_for(kind: PieceKind) -> PieceShape {
    let raw: [(i32, i32); 4] = match kind {
        PieceKind::I => [(-1, 1), (0, 1), (1, 1), (2, 1)],
        PieceKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
        PieceKind::S => [(0, 1), (1, 1), (-1, 0), (0, 0)],
        PieceKind::T => [(0, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
    };
    raw.map(Coord::from)
}

/// Display identifier for a piece kind
pub fn display_id_for(kind: PieceKind) -> Tile {
    match kind {
        PieceKind::I => Tile::Cyan,
        PieceKind::O => Tile::Yellow,
        PieceKind::T => Tile::Purple,
        PieceKind::S => Tile::Green,
        PieceKind::Z => Tile::Red,
        PieceKind::J => Tile::Blue,
        PieceKind::L => Tile::Orange,
    }
}

pub fn pivot_for(kind: PieceKind) -> Pivot {
    match kind {
        PieceKind::I | PieceKind::O => Pivot::CellCorner,
        _ => Pivot::CellCenter,
    }
}

/// Apply one quarter turn to every offset of `shape` in place.
///
/// `Spin::Cw` maps `(x, y)` to `(y, -x)` around the variant's pivot. Applying
/// the reverse spin afterwards restores the exact input.
pub fn rotate_offsets(kind: PieceKind, shape: &mut PieceShape, spin: Spin) {
    let d = spin.sign() as f32;
    let [m0, m1, m2, m3] = ROTATION_MATRIX;

    for cell in shape.iter_mut() {
        let (x, y) = (cell.x as f32, cell.y as f32);
        *cell = match pivot_for(kind) {
            Pivot::CellCorner => {
                let (x, y) = (x - 0.5, y - 0.5);
                Coord::new(
                    (x * m0 * d + y * m1 * d).ceil() as i32,
                    (x * m2 * d + y * m3 * d).ceil() as i32,
                )
            }
            Pivot::CellCenter => Coord::new(
                (x * m0 * d + y * m1 * d).round() as i32,
                (x * m2 * d + y * m3 * d).round() as i32,
            ),
        };
    }
}

/// Offsets for `kind` after `turns` clockwise quarter turns from spawn
pub fn offsets_after(kind: PieceKind, turns: u8) -> PieceShape {
    let mut shape = offsets_for(kind);
    for _ in 0..turns % 4 {
        rotate_offsets(kind, &mut shape, Spin::Cw);
    }
    shape
}
