//! Shape catalog - the seven canonical tetromino masks and their colors.
//!
//! Every shape is stored as a 4x4 boolean occupancy mask in its spawn
//! orientation, padded to the full box regardless of actual extent. The
//! padding is what lets the piece rotation transform stay uniform across
//! shapes. Lookup is total over the closed index range `[0, SHAPE_COUNT)`.

use tetris_sim_types::{Color, PIECE_BOX, SPAWN_COL_RANGE};

use crate::rng::SimpleRng;

/// 4x4 occupancy mask, indexed `[row][col]`
pub type ShapeMask = [[bool; PIECE_BOX]; PIECE_BOX];

/// Number of canonical shapes in the catalog
pub const SHAPE_COUNT: usize = 7;

const X: bool = true;
const O: bool = false;

/// Spawn-orientation masks, ordered I, O, T, S, Z, J, L
pub const MASKS: [ShapeMask; SHAPE_COUNT] = [
    // I
    [
        [O, O, O, O],
        [X, X, X, X],
        [O, O, O, O],
        [O, O, O, O],
    ],
    // O
    [
        [O, X, X, O],
        [O, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
    // T
    [
        [O, X, O, O],
        [X, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
    // S
    [
        [O, X, X, O],
        [X, X, O, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
    // Z
    [
        [X, X, O, O],
        [O, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
    // J
    [
        [X, O, O, O],
        [X, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
    // L
    [
        [O, O, X, O],
        [X, X, X, O],
        [O, O, O, O],
        [O, O, O, O],
    ],
];

/// Shape colors, parallel to [`MASKS`]. None of these equals
/// [`Color::BACKGROUND`].
pub const COLORS: [Color; SHAPE_COUNT] = [
    Color(0xFF00_FFFF), // I - cyan
    Color(0xFFFF_FF00), // O - yellow
    Color(0xFF80_0080), // T - purple
    Color(0xFF00_FF00), // S - green
    Color(0xFFFF_0000), // Z - red
    Color(0xFF00_00FF), // J - blue
    Color(0xFFFF_A500), // L - orange
];

/// Mask for a shape index in `[0, SHAPE_COUNT)`
pub fn mask(shape: usize) -> ShapeMask {
    MASKS[shape]
}

/// Color for a shape index in `[0, SHAPE_COUNT)`
pub fn color(shape: usize) -> Color {
    COLORS[shape]
}

/// Draw a uniform shape index
pub fn random_shape(rng: &mut SimpleRng) -> usize {
    rng.next_range(SHAPE_COUNT as u32) as usize
}

/// Draw a uniform spawn column in `[0, SPAWN_COL_RANGE)`
pub fn random_spawn_column(rng: &mut SimpleRng) -> i8 {
    rng.next_range(SPAWN_COL_RANGE) as i8
}
