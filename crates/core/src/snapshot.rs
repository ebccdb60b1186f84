//! Read-only field snapshots for external renderers and serializers.
//!
//! The core has no file format of its own; these types are the observable
//! surface an external persistence layer serializes, and
//! [`Field::from_parts`](crate::field::Field::from_parts) is the restore
//! path.

use serde::{Deserialize, Serialize};
use tetris_sim_types::{Color, Coord, FIELD_COLS, FIELD_ROWS};

use crate::catalog::ShapeMask;
use crate::piece::Piece;

/// Copy of the active piece's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub cells: ShapeMask,
    pub anchor: Coord,
    pub color: Color,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            cells: *piece.cells(),
            anchor: piece.anchor(),
            color: piece.color(),
        }
    }
}

/// Full observable state of a field at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// Grid cells, row-major: `grid[y][x]`
    pub grid: [[Color; FIELD_COLS as usize]; FIELD_ROWS as usize],
    pub active: Option<PieceSnapshot>,
    pub rows_completed: u32,
    pub level: u32,
}

impl Default for FieldSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Color::BACKGROUND; FIELD_COLS as usize]; FIELD_ROWS as usize],
            active: None,
            rows_completed: 0,
            level: 1,
        }
    }
}
