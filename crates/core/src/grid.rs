//! The playing-field grid: a fixed 10x20 array of color cells.
//!
//! Uses flat row-major storage for cache locality. Empty cells hold
//! [`Color::BACKGROUND`]; everything else was written by a locked piece.
//! Coordinates: (x, y) with x in 0..9 left to right, y in 0..19 top to
//! bottom. All indexing is bounds-guarded before any read or write.

use serde::{Deserialize, Serialize};
use tetris_sim_types::{Color, Coord, FIELD_COLS, FIELD_ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (FIELD_COLS as usize) * (FIELD_ROWS as usize);

/// The playing field - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Color; GRID_SIZE],
}

impl Grid {
    /// Create a new grid with every cell set to the background color
    pub fn new() -> Self {
        Self {
            cells: [Color::BACKGROUND; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_COLS as i8 || y < 0 || y >= FIELD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_COLS
    }

    pub fn height(&self) -> u8 {
        FIELD_ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Color> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, color: Color) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// A coordinate is occupied (blocking) if it lies outside the grid
    /// bounds, or inside bounds with a non-background color. A valid empty
    /// cell is never occupied.
    pub fn is_occupied(&self, c: Coord) -> bool {
        match Self::index(c.x, c.y) {
            Some(idx) => !self.cells[idx].is_background(),
            None => true,
        }
    }

    /// True iff every cell in the row differs from the background color.
    /// Rows outside the grid are never full.
    pub fn is_full_row(&self, y: usize) -> bool {
        if y >= FIELD_ROWS as usize {
            return false;
        }
        let start = y * FIELD_COLS as usize;
        let end = start + FIELD_COLS as usize;
        self.cells[start..end].iter().all(|c| !c.is_background())
    }

    /// Remove a row: shift every row above it down by one and refill row 0
    /// with background.
    ///
    /// Row 0 always ends up background after any shift-down; `remove_row(0)`
    /// shifts nothing and just blanks the top row.
    pub fn remove_row(&mut self, y: usize) {
        if y >= FIELD_ROWS as usize {
            return;
        }

        let width = FIELD_COLS as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = Color::BACKGROUND;
        }
    }

    /// Reset every cell to the background color
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Color::BACKGROUND;
        }
    }

    /// Flat view of the cells, row-major
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Copy the grid into a caller-owned 2D buffer (for snapshots/renderers)
    pub fn write_rows(&self, out: &mut [[Color; FIELD_COLS as usize]; FIELD_ROWS as usize]) {
        let width = FIELD_COLS as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

// Flat [Color; 200] exceeds serde's derived array support, so the grid
// serializes as a plain sequence of cells.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.cells.iter())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cells = Vec::<Color>::deserialize(deserializer)?;
        if cells.len() != GRID_SIZE {
            return Err(serde::de::Error::invalid_length(
                cells.len(),
                &"a grid of exactly rows * cols cells",
            ));
        }
        let mut grid = Grid::new();
        grid.cells.copy_from_slice(&cells);
        Ok(grid)
    }
}
