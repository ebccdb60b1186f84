//! Shared data types and constants for the falling-block simulation core.
//!
//! Pure value types only: coordinates, cell colors, and the fixed game
//! constants. No game logic lives here.
//!
//! # Field Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn row**: 0; spawn column randomized in `[0, SPAWN_COL_RANGE)`

use serde::{Deserialize, Serialize};

/// Field dimensions (columns x rows)
pub const FIELD_COLS: u8 = 10;
pub const FIELD_ROWS: u8 = 20;

/// Side length of a piece's 4x4 bounding box
pub const PIECE_BOX: usize = 4;

/// Exclusive upper bound for the randomized spawn column
pub const SPAWN_COL_RANGE: u32 = 6;

/// Completed rows per level increase
pub const ROWS_PER_LEVEL: u32 = 10;

/// Per-row score multipliers: points = level * 100, bonus = level * 50.
/// The field passes these through to the level collaborator; the scoring
/// formula itself lives on the collaborator side.
pub const POINTS_PER_ROW_FACTOR: u32 = 100;
pub const ROW_BONUS_FACTOR: u32 = 50;

/// Opaque ARGB color identifier for a grid cell or piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Sentinel color of an empty grid cell.
    pub const BACKGROUND: Color = Color(0xFF46_82B4);

    /// Whether this is the empty-cell sentinel.
    pub fn is_background(self) -> bool {
        self == Self::BACKGROUND
    }
}

/// An (x, y) integer pair with value semantics.
///
/// Used both for local piece-mask coordinates and for board coordinates;
/// `x` runs left to right, `y` top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// This coordinate translated by the given offset.
    pub fn offset_by(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_sentinel() {
        assert!(Color::BACKGROUND.is_background());
        assert!(!Color(0xFF00_FFFF).is_background());
    }

    #[test]
    fn coord_offset() {
        let c = Coord::new(3, 7);
        assert_eq!(c.offset_by(-1, 2), Coord::new(2, 9));
        // Value semantics: the original is untouched
        assert_eq!(c, Coord::new(3, 7));
    }
}
