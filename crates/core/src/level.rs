//! Level/score collaborator seam.
//!
//! The field reports row clears through [`LevelTracker`] and never computes
//! score totals itself; it only supplies the per-row multiplier inputs
//! (`level * 100` points, `level * 50` bonus). [`Level`] is the stock
//! implementation; tests substitute recording stubs.

use serde::{Deserialize, Serialize};

/// Interface the field uses to report clears and read the current level.
pub trait LevelTracker {
    fn current_level(&self) -> u32;

    /// Called once per tick that removed rows, with the number of rows and
    /// the per-row point/bonus inputs.
    fn score_up(&mut self, rows_cleared: u32, points_per_row: u32, bonus_per_row: u32);

    /// Called when the completed-row counter crosses a decade boundary.
    fn increase_level(&mut self);
}

/// Stock level/score bookkeeping: level starts at 1, score at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    level: u32,
    score: u32,
}

impl Level {
    pub fn new() -> Self {
        Self { level: 1, score: 0 }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelTracker for Level {
    fn current_level(&self) -> u32 {
        self.level
    }

    fn score_up(&mut self, rows_cleared: u32, points_per_row: u32, bonus_per_row: u32) {
        self.score += rows_cleared * points_per_row;
        // Multi-row clears earn the bonus for every row beyond the first
        if rows_cleared > 1 {
            self.score += (rows_cleared - 1) * bonus_per_row;
        }
    }

    fn increase_level(&mut self) {
        self.level += 1;
    }
}
