//! The field state machine: grid + active piece + level collaborator.
//!
//! An external clock drives the field through [`Field::on_tick`]; player
//! intents arrive as move/rotate calls between ticks. The machine has three
//! derived states rather than a stored tag:
//!
//! - **Falling**: the active piece can still drop ([`Phase::Falling`]).
//! - **Locking**: the active piece cannot drop and will be committed on the
//!   next tick ([`Phase::Locking`]).
//! - **Cleared**: the last tick removed rows, observable through
//!   [`Field::last_cleared`].
//!
//! Every mutation is validated with [`Field::can_place`] on a cloned piece
//! before commit, so the grid never enters an overlapping state through the
//! public API. Infeasible requests are silent no-ops, not errors; the one
//! terminal condition (no legal first move after a spawn) is the `false`
//! return of `on_tick`.

use arrayvec::ArrayVec;
use tetris_sim_types::{
    FIELD_COLS, FIELD_ROWS, POINTS_PER_ROW_FACTOR, ROWS_PER_LEVEL, ROW_BONUS_FACTOR,
};

use crate::grid::Grid;
use crate::level::LevelTracker;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::{FieldSnapshot, PieceSnapshot};

/// A single locked piece can complete at most four rows
pub const MAX_CLEARED_ROWS: usize = 4;

/// Derived piece-lifecycle state, named for testability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The active piece can still drop
    Falling,
    /// The active piece cannot drop and will lock on the next tick
    Locking,
}

/// The simulation core: owns the grid and the active piece exclusively.
/// Nothing else mutates them except through this type's operations.
#[derive(Debug, Clone)]
pub struct Field<L> {
    grid: Grid,
    active: Option<Piece>,
    rows_completed: u32,
    last_cleared: ArrayVec<usize, MAX_CLEARED_ROWS>,
    level: L,
    rng: SimpleRng,
}

impl<L: LevelTracker> Field<L> {
    /// Create a field with an all-background grid and the first piece
    /// already spawned.
    pub fn new(level: L, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(&mut rng);
        Self {
            grid: Grid::new(),
            active: Some(active),
            rows_completed: 0,
            last_cleared: ArrayVec::new(),
            level,
            rng,
        }
    }

    /// Restore a field from externally persisted state. The caller is
    /// responsible for handing back a grid/piece pair that a real session
    /// could have produced.
    pub fn from_parts(
        grid: Grid,
        active: Option<Piece>,
        rows_completed: u32,
        level: L,
        seed: u32,
    ) -> Self {
        Self {
            grid,
            active,
            rows_completed,
            last_cleared: ArrayVec::new(),
            level,
            rng: SimpleRng::new(seed),
        }
    }

    /// Advance the simulation one step.
    ///
    /// If the active piece cannot drop (or there is none), it is locked into
    /// the grid and a replacement is spawned; the return value then reports
    /// whether the fresh piece can make its first move. `false` means the
    /// session has ended: the board is full at the top. Otherwise the piece
    /// is lowered one row and the grid is scanned for completed rows.
    pub fn on_tick(&mut self) -> bool {
        self.last_cleared.clear();

        if self.active.is_none() || !self.can_drop() {
            self.lock_active();
            self.spawn();
            return self.first_move_possible();
        }

        self.lower_active();
        self.check_full_rows();
        true
    }

    /// Move the active piece one column left if feasible, else no-op.
    pub fn move_left(&mut self) {
        if self.can_shift(-1) {
            if let Some(piece) = &mut self.active {
                piece.shift(-1, 0);
            }
        }
    }

    /// Move the active piece one column right if feasible, else no-op.
    pub fn move_right(&mut self) {
        if self.can_shift(1) {
            if let Some(piece) = &mut self.active {
                piece.shift(1, 0);
            }
        }
    }

    /// Rotate the active piece clockwise if feasible, else no-op.
    ///
    /// No kick adjustment is attempted: a rotation that would overlap the
    /// stack or exit the bounds simply does not happen.
    pub fn rotate_clockwise(&mut self) {
        if self.can_rotate(true) {
            if let Some(piece) = &mut self.active {
                piece.rotate_cw();
            }
        }
    }

    /// Rotate the active piece counter-clockwise if feasible, else no-op.
    pub fn rotate_counter_clockwise(&mut self) {
        if self.can_rotate(false) {
            if let Some(piece) = &mut self.active {
                piece.rotate_ccw();
            }
        }
    }

    /// Whether every filled cell of the piece lands on a free in-bounds
    /// coordinate. Checks the horizontal bounds, the floor, and cell
    /// occupancy (which also rejects coordinates above the top).
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.board_cells().all(|c| {
            c.x >= 0 && c.x < FIELD_COLS as i8 && c.y < FIELD_ROWS as i8 && !self.grid.is_occupied(c)
        })
    }

    /// Derived Falling/Locking state of the active piece.
    pub fn phase(&self) -> Phase {
        if self.active.is_none() || !self.can_drop() {
            Phase::Locking
        } else {
            Phase::Falling
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Total rows completed over the session, monotonically increasing.
    pub fn rows_completed(&self) -> u32 {
        self.rows_completed
    }

    /// Indices of the rows removed by the most recent tick, top to bottom.
    /// Empty when the last tick cleared nothing.
    pub fn last_cleared(&self) -> &[usize] {
        &self.last_cleared
    }

    pub fn level(&self) -> &L {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut L {
        &mut self.level
    }

    /// Fill a caller-owned snapshot buffer without allocating.
    pub fn snapshot_into(&self, out: &mut FieldSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = self.active.as_ref().map(PieceSnapshot::from);
        out.rows_completed = self.rows_completed;
        out.level = self.level.current_level();
    }

    /// Allocating convenience form of [`Field::snapshot_into`].
    pub fn snapshot(&self) -> FieldSnapshot {
        let mut s = FieldSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Whether the active piece could drop one row.
    fn can_drop(&self) -> bool {
        match &self.active {
            Some(piece) => {
                let mut probe = piece.clone();
                probe.shift(0, 1);
                self.can_place(&probe)
            }
            None => false,
        }
    }

    fn can_shift(&self, dx: i8) -> bool {
        match &self.active {
            Some(piece) => {
                let mut probe = piece.clone();
                probe.shift(dx, 0);
                self.can_place(&probe)
            }
            None => false,
        }
    }

    fn can_rotate(&self, clockwise: bool) -> bool {
        match &self.active {
            Some(piece) => {
                let mut probe = piece.clone();
                if clockwise {
                    probe.rotate_cw();
                } else {
                    probe.rotate_ccw();
                }
                self.can_place(&probe)
            }
            None => false,
        }
    }

    /// Commit the active piece's colored cells into the grid.
    fn lock_active(&mut self) {
        if let Some(piece) = &self.active {
            let color = piece.color();
            for c in piece.board_cells() {
                self.grid.set(c.x, c.y, color);
            }
        }
    }

    fn spawn(&mut self) {
        self.active = Some(Piece::spawn(&mut self.rng));
    }

    /// The freshly spawned piece's first move is a drop; a blocked drop at
    /// spawn is the game-over signal.
    fn first_move_possible(&self) -> bool {
        self.can_drop()
    }

    fn lower_active(&mut self) {
        if self.can_drop() {
            if let Some(piece) = &mut self.active {
                piece.shift(0, 1);
            }
        }
    }

    /// Scan every row top to bottom, removing full ones, then report the
    /// clear to the level collaborator.
    ///
    /// The point/bonus inputs use the collaborator's level before any
    /// decade-boundary increase from this same clear.
    fn check_full_rows(&mut self) {
        let row_points = self.level.current_level() * POINTS_PER_ROW_FACTOR;
        let row_bonus = self.level.current_level() * ROW_BONUS_FACTOR;

        for row in 0..FIELD_ROWS as usize {
            if self.grid.is_full_row(row) {
                self.grid.remove_row(row);
                self.last_cleared.push(row);
            }
        }

        let completed = self.last_cleared.len() as u32;
        if completed > 0 {
            self.level.score_up(completed, row_points, row_bonus);
            self.update_rows_and_level(completed);
        }
    }

    /// Count the cleared rows one at a time so every decade boundary the
    /// counter crosses produces its own level notification.
    fn update_rows_and_level(&mut self, completed: u32) {
        for _ in 0..completed {
            self.rows_completed += 1;
            if self.rows_completed % ROWS_PER_LEVEL == 0 {
                self.level.increase_level();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::level::Level;
    use tetris_sim_types::{Color, Coord};

    fn o_piece(x: i8, y: i8) -> Piece {
        Piece::new(catalog::mask(1), Coord::new(x, y), catalog::color(1))
    }

    #[test]
    fn test_new_field_spawns_first_piece() {
        let field = Field::new(Level::new(), 1);
        assert!(field.active().is_some());
        assert!(field.grid().cells().iter().all(|c| c.is_background()));
        assert_eq!(field.rows_completed(), 0);
        assert_eq!(field.phase(), Phase::Falling);
    }

    #[test]
    fn test_tick_lowers_active_piece() {
        let mut field = Field::new(Level::new(), 1);
        let before = field.active().unwrap().anchor();
        assert!(field.on_tick());
        let after = field.active().unwrap().anchor();
        assert_eq!(after, Coord::new(before.x, before.y + 1));
    }

    #[test]
    fn test_can_place_rejects_overlap_and_bounds() {
        let mut field = Field::new(Level::new(), 1);

        // Floor: O mask occupies box rows 0..2, so anchor y 18 is the lowest fit
        assert!(field.can_place(&o_piece(0, 18)));
        assert!(!field.can_place(&o_piece(0, 19)));

        // Walls: mask cols 1..3, so anchor x -1..=7 stays inside
        assert!(field.can_place(&o_piece(-1, 0)));
        assert!(!field.can_place(&o_piece(-2, 0)));
        assert!(field.can_place(&o_piece(7, 0)));
        assert!(!field.can_place(&o_piece(8, 0)));

        // Above the top is blocked too
        assert!(!field.can_place(&o_piece(0, -1)));

        // Occupied cell
        field.grid.set(1, 1, Color(0xFFAA_AAAA));
        assert!(!field.can_place(&o_piece(0, 0)));
    }

    #[test]
    fn test_blocked_move_is_a_noop() {
        let mut field = Field::from_parts(Grid::new(), Some(o_piece(-1, 0)), 0, Level::new(), 1);

        // Leftmost filled cell already on column 0
        field.move_left();
        assert_eq!(field.active().unwrap().anchor(), Coord::new(-1, 0));

        field.move_right();
        assert_eq!(field.active().unwrap().anchor(), Coord::new(0, 0));
    }

    #[test]
    fn test_lock_then_spawn_on_grounded_piece() {
        let mut field = Field::from_parts(Grid::new(), Some(o_piece(3, 18)), 0, Level::new(), 1);

        assert_eq!(field.phase(), Phase::Locking);
        assert!(field.on_tick());

        // Old piece committed with its color
        assert_eq!(field.grid().get(4, 18), Some(catalog::color(1)));
        assert_eq!(field.grid().get(5, 19), Some(catalog::color(1)));
        // Replacement spawned at the top
        assert_eq!(field.active().unwrap().anchor().y, 0);
    }

    #[test]
    fn test_live_piece_never_overlaps_grid() {
        let mut field = Field::new(Level::new(), 77);
        for _ in 0..600 {
            if !field.on_tick() {
                break;
            }
            // A terminal spawn may overlap at the very top; once the piece
            // has dropped off the spawn row every position was validated.
            if let Some(piece) = field.active().filter(|p| p.anchor().y > 0) {
                for c in piece.board_cells() {
                    if let Some(color) = field.grid().get(c.x, c.y) {
                        assert!(color.is_background(), "overlap at {:?}", c);
                    }
                }
            }
        }
    }
}
