//! The falling piece: a 4x4 occupancy mask, a board-space anchor, and a
//! color.
//!
//! `Clone` is a full value copy of mask + anchor + color. The field relies on
//! that for speculative moves: it clones the active piece, mutates the clone,
//! and validates it against the grid before committing anything, so a
//! rejected hypothetical can never corrupt the committed piece.

use serde::{Deserialize, Serialize};
use tetris_sim_types::{Color, Coord, PIECE_BOX};

use crate::catalog::{self, ShapeMask};
use crate::rng::SimpleRng;

/// An active tetromino: catalog mask plus board-relative anchor.
///
/// The mask is replaced wholesale on rotation and the whole piece is
/// replaced wholesale on respawn; individual cells are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    cells: ShapeMask,
    anchor: Coord,
    color: Color,
}

impl Piece {
    /// Assemble a piece from catalog parts. Used by [`Piece::spawn`] and by
    /// external restore paths.
    pub fn new(cells: ShapeMask, anchor: Coord, color: Color) -> Self {
        Self {
            cells,
            anchor,
            color,
        }
    }

    /// Draw a fresh piece from the catalog: uniform shape, uniform start
    /// column, spawn orientation, top row.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let shape = catalog::random_shape(rng);
        let column = catalog::random_spawn_column(rng);
        Self {
            cells: catalog::mask(shape),
            anchor: Coord::new(column, 0),
            color: catalog::color(shape),
        }
    }

    pub fn cells(&self) -> &ShapeMask {
        &self.cells
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Translate a local mask coordinate into board space.
    pub fn to_board(&self, local: Coord) -> Coord {
        Coord::new(local.x + self.anchor.x, local.y + self.anchor.y)
    }

    /// Board coordinates of every set mask bit.
    pub fn board_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..PIECE_BOX).flat_map(move |row| {
            (0..PIECE_BOX).filter_map(move |col| {
                self.cells[row][col].then(|| self.to_board(Coord::new(col as i8, row as i8)))
            })
        })
    }

    /// Shift the anchor by the given offset.
    pub fn shift(&mut self, dx: i8, dy: i8) {
        self.anchor = self.anchor.offset_by(dx, dy);
    }

    /// Rotate the mask 90 degrees clockwise: `new[col][3 - row] =
    /// old[row][col]`.
    ///
    /// The transform is purely geometric and works uniformly for every shape
    /// because the bounding box is always padded to 4x4.
    pub fn rotate_cw(&mut self) {
        let mut rotated = [[false; PIECE_BOX]; PIECE_BOX];
        for row in 0..PIECE_BOX {
            for col in 0..PIECE_BOX {
                rotated[col][PIECE_BOX - 1 - row] = self.cells[row][col];
            }
        }
        self.cells = rotated;
    }

    /// Rotate counter-clockwise as three clockwise rotations.
    ///
    /// Deliberately not an independent inverse transform: composing the
    /// clockwise mapping three times reproduces the exact cell placement for
    /// shapes that sit off-center in their box.
    pub fn rotate_ccw(&mut self) {
        self.rotate_cw();
        self.rotate_cw();
        self.rotate_cw();
    }
}
